//! Guided selection flow: Landing, event, lodging, cuisine, dining, summary.

pub mod controller;
pub mod selection;
pub mod step;
pub mod view;

pub use controller::{MessageRequest, MessageState, SelectionFlowController};
pub use selection::{CompleteSelection, WizardSelection};
pub use step::Step;
pub use view::StepView;
