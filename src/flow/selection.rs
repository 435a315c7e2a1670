use crate::catalog::{DiningOption, EventOption, LodgingOption};
use serde::Serialize;

/// The user's in-progress choices.
///
/// Deeper fields are only meaningful relative to the shallower ones: `lodging` belongs to
/// `event.hotels`, and `dining` belongs to `lodging.restaurants` with a cuisine equal to
/// `cuisine`. Only the flow controller mutates it, and it clears deeper fields whenever a
/// shallower one changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WizardSelection {
    pub event: Option<EventOption>,
    pub lodging: Option<LodgingOption>,
    pub cuisine: Option<String>,
    pub dining: Option<DiningOption>,
}

/// A fully populated selection, borrowed.
#[derive(Debug, Clone, Copy)]
pub struct CompleteSelection<'a> {
    pub event: &'a EventOption,
    pub lodging: &'a LodgingOption,
    pub cuisine: &'a str,
    pub dining: &'a DiningOption,
}

impl WizardSelection {
    pub fn is_empty(&self) -> bool {
        self.event.is_none()
            && self.lodging.is_none()
            && self.cuisine.is_none()
            && self.dining.is_none()
    }

    pub fn complete(&self) -> Option<CompleteSelection<'_>> {
        Some(CompleteSelection {
            event: self.event.as_ref()?,
            lodging: self.lodging.as_ref()?,
            cuisine: self.cuisine.as_deref()?,
            dining: self.dining.as_ref()?,
        })
    }

    /// First unset field, in selection order.
    pub fn missing(&self) -> Option<&'static str> {
        if self.event.is_none() {
            Some("event")
        } else if self.lodging.is_none() {
            Some("lodging")
        } else if self.cuisine.is_none() {
            Some("cuisine")
        } else if self.dining.is_none() {
            Some("dining")
        } else {
            None
        }
    }

    pub(crate) fn set_event(&mut self, event: EventOption) {
        self.event = Some(event);
        self.lodging = None;
        self.dining = None;
    }

    pub(crate) fn set_lodging(&mut self, lodging: LodgingOption) {
        self.lodging = Some(lodging);
        self.dining = None;
    }

    pub(crate) fn set_cuisine(&mut self, cuisine: &str) {
        if self.cuisine.as_deref() != Some(cuisine) {
            self.dining = None;
        }
        self.cuisine = Some(cuisine.to_string());
    }

    pub(crate) fn set_dining(&mut self, dining: DiningOption) {
        self.dining = Some(dining);
    }

    /// Dining options of the chosen lodging matching the chosen cuisine, in source order.
    pub fn available_dining(&self) -> Vec<&DiningOption> {
        match (&self.lodging, &self.cuisine) {
            (Some(lodging), Some(cuisine)) => lodging.dining_for(cuisine).collect(),
            _ => Vec::new(),
        }
    }
}
