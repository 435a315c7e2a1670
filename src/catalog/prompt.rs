//! Generation contract: fixed roster, cuisine categories, and the prompt text sent to
//! the content provider.

use super::types::{DiningOption, EventOption, LodgingOption};

/// One fixed performance in the roster.
#[derive(Debug, Clone, Copy)]
pub struct RosterEntry {
    pub name: &'static str,
    pub venue: &'static str,
    pub dates: &'static str,
}

pub const ROSTER: [RosterEntry; 5] = [
    RosterEntry {
        name: "My Brilliant Career",
        venue: "Southbank Theatre",
        dates: "Feb 14 - March 21, 2026",
    },
    RosterEntry {
        name: "Heathers The Musical",
        venue: "Arts Centre Melbourne",
        dates: "June 12 - July 18, 2026",
    },
    RosterEntry {
        name: "The Pirates of Penzance",
        venue: "Palais Theatre",
        dates: "Oct 10 - Oct 31, 2026",
    },
    RosterEntry {
        name: "The Vaudeville Revue",
        venue: "Speakeasy Theatre",
        dates: "Nov 5 - Nov 28, 2026",
    },
    RosterEntry {
        name: "Piper's Playhouse",
        venue: "Crown Casino",
        dates: "Jan 15 - Mar 22, 2026",
    },
];

pub const LODGINGS_PER_EVENT: usize = 2;
pub const MIN_DINING_PER_CUISINE: usize = 4;
pub const MAX_DINING_PER_CUISINE: usize = 6;

/// A cuisine category and the restaurants the catalog should always carry for it.
#[derive(Debug, Clone, Copy)]
pub struct CuisineCategory {
    pub label: &'static str,
    pub always_include: &'static [&'static str],
    pub extra_hint: &'static str,
}

pub const CUISINES: [CuisineCategory; 9] = [
    CuisineCategory {
        label: "Modern Australian",
        always_include: &["Farmer's Daughters", "Henry and The Fox", "Cumulus Inc", "Gimlet"],
        extra_hint: "PLUS: 2 more high-end options found via search near the hotel.",
    },
    CuisineCategory {
        label: "Mexican",
        always_include: &["Mamasita", "Hecho en Mexico (CBD)"],
        extra_hint: "PLUS: 2-3 more high-end options found via search (e.g., Mesa Verde, Bodega Underground).",
    },
    CuisineCategory {
        label: "Italian",
        always_include: &["Tipo 00", "La Cucina Melbourne"],
        extra_hint: "PLUS: 2-3 more high-end options (e.g., Grossi Florentino, Cecconi's, Rosetta).",
    },
    CuisineCategory {
        label: "French",
        always_include: &["France-Soir", "Philippe", "Roule Galette"],
        extra_hint: "PLUS: 2 more high-end options (e.g., Bistrot d'Orsay, Smith St Bistro).",
    },
    CuisineCategory {
        label: "Modern Greek",
        always_include: &["Aegli", "Yassas", "Stalactites", "Hellenic Republic"],
        extra_hint: "Search for and include at least 4 options.",
    },
    CuisineCategory {
        label: "Middle Eastern",
        always_include: &["Maha", "Byblos", "Souk", "Miznon"],
        extra_hint: "Search for and include at least 4 options.",
    },
    CuisineCategory {
        label: "Spanish",
        always_include: &["Asado", "El Rincón", "MoVida", "Bomba", "Bar Lourinhã"],
        extra_hint: "Search for and include at least 4 options.",
    },
    CuisineCategory {
        label: "Contemporary Japanese",
        always_include: &["Nobu", "Kisumé", "Minamishima", "Robata", "Kenzan"],
        extra_hint: "Search for and include at least 4 options.",
    },
    CuisineCategory {
        label: "Innovative Cantonese",
        always_include: &["Flower Drum", "Ming Dining", "Lee Ho Fook", "Supernormal"],
        extra_hint: "Search for and include at least 4 options.",
    },
];

/// Cuisine labels in display order.
pub fn cuisine_labels() -> impl Iterator<Item = &'static str> {
    CUISINES.iter().map(|c| c.label)
}

pub fn is_known_cuisine(label: &str) -> bool {
    cuisine_labels().any(|c| c == label)
}

/// System instruction for catalog generation.
pub fn catalog_system_instruction(honoree: &str) -> String {
    let mut out = format!(
        "You are a world-class luxury concierge for {}'s 50th Birthday in Melbourne 2026.\n\n\
         MANDATORY DATA REQUIREMENT:\n\
         You MUST provide {}-{} unique high-end restaurants for EVERY cuisine category for EVERY hotel.\n\
         Providing only 1 or 2 options is a FAILURE. Truncating the list is a FAILURE.\n\n\
         Show Data (Fixed):\n",
        honoree, MIN_DINING_PER_CUISINE, MAX_DINING_PER_CUISINE
    );
    for (idx, show) in ROSTER.iter().enumerate() {
        out.push_str(&format!(
            "{}. \"{}\": {}. {}.\n",
            idx + 1,
            show.name,
            show.venue,
            show.dates
        ));
    }
    out.push_str(&format!(
        "\nElite Hotel Selection:\n\
         For each show, pick {} nearby 5-star hotels (Crown Towers, Langham, Ritz-Carlton, W, Park Hyatt, Grand Hyatt).\n\n\
         STRICT Restaurant Selection Strategy:\n\
         For EVERY hotel, you MUST provide a collection of {}-{} restaurants for each of these {} cuisines:\n\n",
        LODGINGS_PER_EVENT,
        MIN_DINING_PER_CUISINE,
        MAX_DINING_PER_CUISINE,
        CUISINES.len()
    ));
    for (idx, cuisine) in CUISINES.iter().enumerate() {
        out.push_str(&format!(
            "{}. {}:\n   - ALWAYS include: {}.\n   - {}\n\n",
            idx + 1,
            cuisine.label,
            cuisine.always_include.join(", "),
            cuisine.extra_hint
        ));
    }
    out.push_str(
        "Quality Checks:\n\
         - Use search to find 'Signature Dishes' and 'Vibe summaries'.\n\
         - Proximity is key. All selections must be elite, 5-star/high-end quality.\n\
         - The cuisine field must be exactly one of the category names above.\n\
         - IDs must be unique.\n\
         - Response MUST be complete JSON. No placeholders.\n",
    );
    out
}

/// User turn for catalog generation.
pub fn catalog_request(honoree: &str) -> String {
    format!(
        "Generate the complete Melbourne 2026 celebration JSON. DO NOT TRUNCATE. \
         For every single hotel, ensure EVERY one of the {} cuisines has at least {}-{} restaurant options. \
         Follow the 'always include' lists exactly and search for the rest. \
         This is {}'s 50th birthday - everything must be impeccable.",
        CUISINES.len(),
        MIN_DINING_PER_CUISINE,
        MAX_DINING_PER_CUISINE,
        honoree
    )
}

/// Prompt for the personal celebratory message.
pub fn message_prompt(
    honoree: &str,
    host: &str,
    event: &EventOption,
    lodging: &LodgingOption,
    dining: &DiningOption,
) -> String {
    format!(
        "Write a poetic and heartfelt 50th birthday message for {honoree} from {host}.\n\
         The message MUST reference the chosen celebration details:\n\
         - Watching \"{event}\" at {venue}\n\
         - A luxury stay at {lodging}\n\
         - A signature dining experience at {dining} (mentioning the \"{dish}\")\n\n\
         The message must express {host}'s deep love and devotion for {honoree}.\n\
         Tone: Succinct, elegant, romantic, and celebratory.",
        honoree = honoree,
        host = host,
        event = event.name(),
        venue = event.venue,
        lodging = lodging.name(),
        dining = dining.name(),
        dish = dining.signature_dish,
    )
}

/// Deterministic message used whenever generation fails.
pub fn fallback_message(
    honoree: &str,
    host: &str,
    event: &EventOption,
    lodging: &LodgingOption,
    dining: &DiningOption,
) -> String {
    format!(
        "To {}, on your 50th year, I hope this celebration at {}, our stay at {} and dinner at {} \
         are as timeless and brilliant as you are. All my love, {}.",
        honoree,
        event.name(),
        lodging.name(),
        dining.name(),
        host
    )
}
