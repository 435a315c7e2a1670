//! Post-processing of validated generated content into a [`Catalog`].

use super::schema::{RawDining, RawEvent, RawLodging};
use super::types::{Catalog, DiningOption, EventOption, ItemBase, LodgingOption};

/// Marker for the event that always sorts last.
pub const TRAILING_EVENT_MARKER: &str = "piper";

pub const DEFAULT_EVENT_IMAGE: &str =
    "https://images.unsplash.com/photo-1503095396549-807a8bc3667c?auto=format&fit=crop&q=80&w=1200";

/// Substring (lower case) to event image, first match wins.
pub const EVENT_IMAGES: [(&str, &str); 5] = [
    (
        "piper",
        "https://imagedelivery.net/9sCnq8jQj99s25814-TawYc_1Dkw/0018-19401441000/public",
    ),
    (
        "heathers",
        "https://images.unsplash.com/photo-1514306191717-452ec28c7814?auto=format&fit=crop&q=80&w=800",
    ),
    (
        "pirates",
        "https://images.unsplash.com/photo-1533923156502-be31530547c4?auto=format&fit=crop&q=80&w=800",
    ),
    (
        "brilliant",
        "https://images.unsplash.com/photo-1507676184212-d03ab07a01bf?auto=format&fit=crop&q=80&w=800",
    ),
    (
        "vaudeville",
        "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?auto=format&fit=crop&q=80&w=800",
    ),
];

const LODGING_IMAGE_BASE: &str =
    "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?auto=format&fit=crop&q=80&w=800";
const DINING_IMAGE_BASE: &str =
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836?auto=format&fit=crop&q=80&w=800";

pub fn event_image(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    EVENT_IMAGES
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, url)| *url)
        .unwrap_or(DEFAULT_EVENT_IMAGE)
}

pub fn lodging_image(id: &str) -> String {
    format!("{}&sig={}", LODGING_IMAGE_BASE, id)
}

pub fn dining_image(id: &str) -> String {
    format!("{}&sig={}", DINING_IMAGE_BASE, id)
}

fn is_trailing(name: &str) -> bool {
    name.to_lowercase().contains(TRAILING_EVENT_MARKER)
}

/// Move marked events to the end; every other relative order is kept.
pub fn partition_trailing<T>(items: Vec<T>, name_of: impl Fn(&T) -> &str) -> Vec<T> {
    let (marked, mut rest): (Vec<T>, Vec<T>) =
        items.into_iter().partition(|item| is_trailing(name_of(item)));
    rest.extend(marked);
    rest
}

fn dining(raw: RawDining) -> DiningOption {
    let image = dining_image(&raw.id);
    DiningOption {
        base: ItemBase {
            id: raw.id,
            name: raw.name,
            description: raw.summary,
            image,
            price_range: raw.price_range,
        },
        cuisine: raw.cuisine,
        signature_dish: raw.signature_dish,
    }
}

fn lodging(raw: RawLodging) -> LodgingOption {
    let image = lodging_image(&raw.id);
    LodgingOption {
        base: ItemBase {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            image,
            price_range: raw.price_range,
        },
        location: raw.location,
        top_features: raw.top_features,
        restaurants: raw.restaurants.into_iter().map(dining).collect(),
    }
}

fn event(raw: RawEvent) -> EventOption {
    let image = event_image(&raw.name).to_string();
    EventOption {
        base: ItemBase {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            image,
            price_range: raw.price_range,
        },
        venue: raw.venue,
        dates: raw.dates,
        critic_rating: raw.critic_rating,
        hotels: raw.hotels.into_iter().map(lodging).collect(),
    }
}

/// Assign images, copy dining summaries into descriptions, and order events.
pub fn enrich(raw: Vec<RawEvent>) -> Catalog {
    let events: Vec<EventOption> = raw.into_iter().map(event).collect();
    Catalog::new(partition_trailing(events, |e| e.name()))
}
