//! Per-step data handed to the rendering layer.

use super::controller::MessageState;
use super::selection::WizardSelection;
use crate::catalog::{DiningOption, EventOption, LodgingOption};

#[derive(Debug)]
pub enum StepView<'a> {
    Landing {
        catalog_ready: bool,
    },
    Event {
        options: &'a [EventOption],
    },
    Lodging {
        event: &'a EventOption,
        options: &'a [LodgingOption],
    },
    Cuisine {
        lodging: &'a LodgingOption,
        labels: Vec<&'static str>,
        current: Option<&'a str>,
    },
    /// An empty `options` list is the "no options" state; the way out is `back`.
    Dining {
        lodging: &'a LodgingOption,
        cuisine: &'a str,
        options: Vec<&'a DiningOption>,
    },
    Summary {
        selection: &'a WizardSelection,
        message: &'a MessageState,
    },
    /// A step was reached with an unset ancestor selection.
    Incomplete {
        missing: &'static str,
    },
}

impl StepView<'_> {
    pub fn is_empty_state(&self) -> bool {
        match self {
            StepView::Event { options } => options.is_empty(),
            StepView::Lodging { options, .. } => options.is_empty(),
            StepView::Dining { options, .. } => options.is_empty(),
            _ => false,
        }
    }
}
