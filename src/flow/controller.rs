//! Selection flow controller: owns the current step, the selection, and the session catalog.

use super::selection::{CompleteSelection, WizardSelection};
use super::step::Step;
use super::view::StepView;
use crate::catalog::prompt::{cuisine_labels, is_known_cuisine};
use crate::catalog::{Catalog, CatalogSource, DiningOption, EventOption, LodgingOption};
use crate::error::FlowError;
use tracing::debug;

/// Personal message lifecycle at the summary step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MessageState {
    #[default]
    Idle,
    Generating,
    Ready(String),
}

/// Owned copy of a complete selection, for message generation outside the controller.
#[derive(Debug, Clone)]
pub struct MessageRequest {
    pub event: EventOption,
    pub lodging: LodgingOption,
    pub dining: DiningOption,
}

#[derive(Debug, Default)]
pub struct SelectionFlowController {
    step: Step,
    selection: WizardSelection,
    catalog: Option<Catalog>,
    message: MessageState,
}

impl SelectionFlowController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn selection(&self) -> &WizardSelection {
        &self.selection
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn message_state(&self) -> &MessageState {
        &self.message
    }

    fn expect_step(&self, expected: Step) -> Result<(), FlowError> {
        if self.step != expected {
            return Err(FlowError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }

    fn has_catalog(&self) -> bool {
        self.catalog.as_ref().is_some_and(|c| !c.is_empty())
    }

    fn move_to(&mut self, step: Step) {
        debug!(from = %self.step, to = %step, "flow transition");
        self.step = step;
    }

    /// Adopt a catalog resolved elsewhere (e.g. a background prefetch). A non-empty
    /// catalog already held for the session is kept. Returns whether it was adopted.
    pub fn install_catalog(&mut self, catalog: Catalog) -> bool {
        if self.has_catalog() {
            return false;
        }
        debug!(events = catalog.len(), "catalog installed");
        self.catalog = Some(catalog);
        true
    }

    /// Landing -> Event, resolving the catalog first if none (or only an empty one) is held.
    pub async fn start<S>(&mut self, source: &S) -> Result<(), FlowError>
    where
        S: CatalogSource + ?Sized,
    {
        self.expect_step(Step::Landing)?;
        if !self.has_catalog() {
            let catalog = source.get_catalog().await;
            self.install_catalog(catalog);
        }
        self.move_to(Step::Event);
        Ok(())
    }

    pub fn choose_event(&mut self, id: &str) -> Result<(), FlowError> {
        self.expect_step(Step::Event)?;
        let event = self
            .catalog
            .as_ref()
            .and_then(|c| c.event(id))
            .cloned()
            .ok_or_else(|| FlowError::UnknownOption {
                kind: "event",
                id: id.to_string(),
            })?;
        self.selection.set_event(event);
        self.message = MessageState::Idle;
        self.move_to(Step::Lodging);
        Ok(())
    }

    pub fn choose_lodging(&mut self, id: &str) -> Result<(), FlowError> {
        self.expect_step(Step::Lodging)?;
        let event = self
            .selection
            .event
            .as_ref()
            .ok_or(FlowError::IncompleteSelection("event"))?;
        let lodging = event
            .lodging(id)
            .cloned()
            .ok_or_else(|| FlowError::UnknownOption {
                kind: "lodging",
                id: id.to_string(),
            })?;
        self.selection.set_lodging(lodging);
        self.message = MessageState::Idle;
        self.move_to(Step::Cuisine);
        Ok(())
    }

    pub fn choose_cuisine(&mut self, label: &str) -> Result<(), FlowError> {
        self.expect_step(Step::Cuisine)?;
        if !is_known_cuisine(label) {
            return Err(FlowError::UnknownCuisine(label.to_string()));
        }
        self.selection.set_cuisine(label);
        self.message = MessageState::Idle;
        self.move_to(Step::Dining);
        Ok(())
    }

    pub fn choose_dining(&mut self, id: &str) -> Result<(), FlowError> {
        self.expect_step(Step::Dining)?;
        let dining = self
            .selection
            .available_dining()
            .into_iter()
            .find(|d| d.id() == id)
            .cloned()
            .ok_or_else(|| FlowError::UnknownOption {
                kind: "dining",
                id: id.to_string(),
            })?;
        self.selection.set_dining(dining);
        self.message = MessageState::Idle;
        self.move_to(Step::Summary);
        Ok(())
    }

    /// One step back; no-op at Landing. Selections are kept.
    pub fn back(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.move_to(prev);
        }
    }

    /// Jump to Landing without clearing the selection.
    pub fn go_home(&mut self) {
        self.move_to(Step::Landing);
    }

    /// Summary -> Landing with an empty selection. The session catalog is kept.
    pub fn restart(&mut self) -> Result<(), FlowError> {
        self.expect_step(Step::Summary)?;
        self.selection = WizardSelection::default();
        self.message = MessageState::Idle;
        self.move_to(Step::Landing);
        Ok(())
    }

    pub fn available_dining(&self) -> Vec<&DiningOption> {
        self.selection.available_dining()
    }

    pub fn view(&self) -> StepView<'_> {
        let selection = &self.selection;
        match self.step {
            Step::Landing => StepView::Landing {
                catalog_ready: self.has_catalog(),
            },
            Step::Event => StepView::Event {
                options: self.catalog.as_ref().map(|c| c.events()).unwrap_or(&[]),
            },
            Step::Lodging => match &selection.event {
                Some(event) => StepView::Lodging {
                    event,
                    options: &event.hotels,
                },
                None => StepView::Incomplete { missing: "event" },
            },
            Step::Cuisine => match &selection.lodging {
                Some(lodging) => StepView::Cuisine {
                    lodging,
                    labels: cuisine_labels().collect(),
                    current: selection.cuisine.as_deref(),
                },
                None => StepView::Incomplete { missing: "lodging" },
            },
            Step::Dining => match (&selection.lodging, selection.cuisine.as_deref()) {
                (Some(lodging), Some(cuisine)) => StepView::Dining {
                    lodging,
                    cuisine,
                    options: selection.available_dining(),
                },
                (None, _) => StepView::Incomplete { missing: "lodging" },
                (_, None) => StepView::Incomplete { missing: "cuisine" },
            },
            Step::Summary => match selection.missing() {
                None => StepView::Summary {
                    selection,
                    message: &self.message,
                },
                Some(missing) => StepView::Incomplete { missing },
            },
        }
    }

    fn complete_selection(&self) -> Result<CompleteSelection<'_>, FlowError> {
        self.selection
            .complete()
            .ok_or(FlowError::IncompleteSelection(
                self.selection.missing().unwrap_or("dining"),
            ))
    }

    /// Mark a message request as outstanding. Rejects a duplicate while one is in flight;
    /// a previously displayed message is discarded.
    pub fn begin_message(&mut self) -> Result<MessageRequest, FlowError> {
        self.expect_step(Step::Summary)?;
        if self.message == MessageState::Generating {
            return Err(FlowError::MessageInFlight);
        }
        let complete = self.complete_selection()?;
        let request = MessageRequest {
            event: complete.event.clone(),
            lodging: complete.lodging.clone(),
            dining: complete.dining.clone(),
        };
        self.message = MessageState::Generating;
        Ok(request)
    }

    pub fn finish_message(&mut self, text: String) {
        self.message = MessageState::Ready(text);
    }

    pub fn clear_message(&mut self) {
        self.message = MessageState::Idle;
    }

    /// Generate (or regenerate) the personal message for the current selection.
    pub async fn generate_message<S>(&mut self, source: &S) -> Result<String, FlowError>
    where
        S: CatalogSource + ?Sized,
    {
        let request = self.begin_message()?;
        let text = source
            .generate_personal_message(&request.event, &request.lodging, &request.dining)
            .await;
        self.finish_message(text.clone());
        Ok(text)
    }
}
