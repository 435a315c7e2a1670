//! Catalog data model: events own lodgings, lodgings own dining options.

use serde::{Deserialize, Serialize};

/// Fields shared by every selectable card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBase {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price_range: String,
}

/// A bookable performance: top-level catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventOption {
    #[serde(flatten)]
    pub base: ItemBase,
    pub venue: String,
    pub dates: String,
    pub critic_rating: String,
    #[serde(default)]
    pub hotels: Vec<LodgingOption>,
}

/// A hotel near an event's venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LodgingOption {
    #[serde(flatten)]
    pub base: ItemBase,
    pub location: String,
    #[serde(default)]
    pub top_features: Vec<String>,
    #[serde(default)]
    pub restaurants: Vec<DiningOption>,
}

/// A restaurant near a lodging, tagged with its cuisine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningOption {
    #[serde(flatten)]
    pub base: ItemBase,
    pub cuisine: String,
    pub signature_dish: String,
}

impl EventOption {
    pub fn id(&self) -> &str {
        &self.base.id
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn lodging(&self, id: &str) -> Option<&LodgingOption> {
        self.hotels.iter().find(|h| h.base.id == id)
    }
}

impl LodgingOption {
    pub fn id(&self) -> &str {
        &self.base.id
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    /// Dining options of one cuisine, in source order.
    pub fn dining_for<'a>(
        &'a self,
        cuisine: &'a str,
    ) -> impl Iterator<Item = &'a DiningOption> + 'a {
        self.restaurants.iter().filter(move |r| r.cuisine == cuisine)
    }
}

impl DiningOption {
    pub fn id(&self) -> &str {
        &self.base.id
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }
}

/// The resolved tree of events for a session. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    events: Vec<EventOption>,
}

impl Catalog {
    pub fn new(events: Vec<EventOption>) -> Self {
        Self { events }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[EventOption] {
        &self.events
    }

    pub fn event(&self, id: &str) -> Option<&EventOption> {
        self.events.iter().find(|e| e.base.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn lodging_count(&self) -> usize {
        self.events.iter().map(|e| e.hotels.len()).sum()
    }

    pub fn dining_count(&self) -> usize {
        self.events
            .iter()
            .flat_map(|e| e.hotels.iter())
            .map(|h| h.restaurants.len())
            .sum()
    }
}

/// A card-renderable item, closed over the three entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionItem<'a> {
    Event(&'a EventOption),
    Lodging(&'a LodgingOption),
    Dining(&'a DiningOption),
}

impl<'a> SelectionItem<'a> {
    pub fn base(&self) -> &'a ItemBase {
        match self {
            SelectionItem::Event(e) => &e.base,
            SelectionItem::Lodging(l) => &l.base,
            SelectionItem::Dining(d) => &d.base,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SelectionItem::Event(_) => "event",
            SelectionItem::Lodging(_) => "lodging",
            SelectionItem::Dining(_) => "dining",
        }
    }

    /// Short line under the card title: dates for events, location for lodgings,
    /// the signature dish for dining.
    pub fn detail(&self) -> String {
        match self {
            SelectionItem::Event(e) => format!("{} · {}", e.venue, e.dates),
            SelectionItem::Lodging(l) => l.location.clone(),
            SelectionItem::Dining(d) => format!("Signature: {}", d.signature_dish),
        }
    }

    /// Corner badge: critic rating for events, cuisine for dining.
    pub fn badge(&self) -> Option<&'a str> {
        match self {
            SelectionItem::Event(e) => Some(e.critic_rating.as_str()).filter(|r| !r.is_empty()),
            SelectionItem::Lodging(_) => None,
            SelectionItem::Dining(d) => Some(d.cuisine.as_str()),
        }
    }

    pub fn tags(&self) -> &'a [String] {
        match self {
            SelectionItem::Lodging(l) => &l.top_features,
            _ => &[],
        }
    }
}
