//! Interactive planner: renders each flow step and feeds menu choices back to the controller.

use crate::catalog::{Catalog, CatalogProvider, SelectionItem};
use crate::cli::presentation::{format_card, format_section_heading, format_summary_text};
use crate::error::ApiError;
use crate::flow::{MessageState, SelectionFlowController, Step, StepView};
use dialoguer::Select;
use owo_colors::OwoColorize;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Start,
    Choose(String),
    Back,
    Home,
    Regenerate,
    Restart,
    Quit,
}

struct Menu {
    header: String,
    prompt: String,
    entries: Vec<(String, Action)>,
}

impl Menu {
    fn new(header: String, prompt: &str) -> Self {
        Self {
            header,
            prompt: prompt.to_string(),
            entries: Vec::new(),
        }
    }

    fn push(&mut self, label: impl Into<String>, action: Action) {
        self.entries.push((label.into(), action));
    }

    fn navigation(&mut self) {
        self.push("← Back", Action::Back);
        self.push("⌂ Home", Action::Home);
    }
}

fn cards<'a>(items: impl Iterator<Item = SelectionItem<'a>>) -> String {
    items
        .map(format_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn build_menu(flow: &SelectionFlowController, honoree: &str) -> Menu {
    let heading = format_section_heading(flow.step().title());
    match flow.view() {
        StepView::Landing { catalog_ready } => {
            let status = if catalog_ready {
                "Catalog ready."
            } else {
                "Catalog loads in the background."
            };
            let mut menu = Menu::new(
                format!(
                    "{}\n\nA celebration for {}: a show, a stay, and a dinner in Melbourne.\n{}",
                    heading,
                    honoree.bold(),
                    status.dimmed()
                ),
                "Begin?",
            );
            menu.push("Begin planning", Action::Start);
            menu.push("Quit", Action::Quit);
            menu
        }
        StepView::Event { options } => {
            let header = if options.is_empty() {
                format!(
                    "{}\n\nNo performances are available right now. Try again later.",
                    heading
                )
            } else {
                format!(
                    "{}\n\n{}",
                    heading,
                    cards(options.iter().map(SelectionItem::Event))
                )
            };
            let mut menu = Menu::new(header, "Performance");
            for event in options {
                menu.push(event.name(), Action::Choose(event.id().to_string()));
            }
            menu.navigation();
            menu
        }
        StepView::Lodging { event, options } => {
            let mut menu = Menu::new(
                format!(
                    "{}\n\nNear {}:\n\n{}",
                    heading,
                    event.venue,
                    cards(options.iter().map(SelectionItem::Lodging))
                ),
                "Hotel",
            );
            for lodging in options {
                menu.push(lodging.name(), Action::Choose(lodging.id().to_string()));
            }
            menu.navigation();
            menu
        }
        StepView::Cuisine {
            lodging,
            labels,
            current,
        } => {
            let mut menu = Menu::new(
                format!("{}\n\nDining near {}.", heading, lodging.name()),
                "Cuisine",
            );
            for label in labels {
                let shown = if current == Some(label) {
                    format!("{} (current)", label)
                } else {
                    label.to_string()
                };
                menu.push(shown, Action::Choose(label.to_string()));
            }
            menu.navigation();
            menu
        }
        StepView::Dining {
            lodging,
            cuisine,
            options,
        } => {
            if options.is_empty() {
                let mut menu = Menu::new(
                    format!(
                        "{}\n\nNo {} restaurants were found near {}.",
                        heading,
                        cuisine,
                        lodging.name()
                    ),
                    "What next?",
                );
                menu.push("← Choose another cuisine", Action::Back);
                menu.push("⌂ Home", Action::Home);
                return menu;
            }
            let mut menu = Menu::new(
                format!(
                    "{}\n\n{}",
                    heading,
                    cards(options.iter().map(|d| SelectionItem::Dining(*d)))
                ),
                "Restaurant",
            );
            for dining in &options {
                menu.push(dining.name(), Action::Choose(dining.id().to_string()));
            }
            menu.navigation();
            menu
        }
        StepView::Summary { selection, message } => {
            let text = match message {
                MessageState::Ready(text) => Some(text.as_str()),
                _ => None,
            };
            let header = match selection.complete() {
                Some(complete) => format_summary_text(&complete, text),
                None => heading,
            };
            let mut menu = Menu::new(header, "Anything else?");
            menu.push("Regenerate message", Action::Regenerate);
            menu.push("Start over", Action::Restart);
            menu.navigation();
            menu.push("Quit", Action::Quit);
            menu
        }
        StepView::Incomplete { missing } => {
            let mut menu = Menu::new(
                format!("{}\n\nPlease choose a {} first.", heading, missing),
                "Navigate",
            );
            menu.navigation();
            menu
        }
    }
}

fn ask(menu: &Menu) -> Result<Action, ApiError> {
    println!("\n{}\n", menu.header);
    let labels: Vec<&str> = menu.entries.iter().map(|(label, _)| label.as_str()).collect();
    let index = Select::new()
        .with_prompt(&menu.prompt)
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;
    menu.entries
        .get(index)
        .map(|(_, action)| action.clone())
        .ok_or_else(|| ApiError::ConfigError(format!("Invalid menu selection: {}", index)))
}

/// Await the background prefetch, if still held, and hand its result to the controller.
fn adopt_prefetch(
    runtime: &Runtime,
    flow: &mut SelectionFlowController,
    prefetch: &mut Option<JoinHandle<Catalog>>,
) {
    let Some(handle) = prefetch.take() else {
        return;
    };
    if !handle.is_finished() {
        println!("{}", "Loading the catalog...".dimmed());
    }
    match runtime.block_on(handle) {
        Ok(catalog) => {
            flow.install_catalog(catalog);
        }
        Err(e) => warn!(error = %e, "catalog prefetch task failed"),
    }
}

fn generate_message(
    runtime: &Runtime,
    flow: &mut SelectionFlowController,
    provider: &CatalogProvider,
) -> Result<(), ApiError> {
    println!("{}", "Writing a note...".dimmed());
    runtime.block_on(flow.generate_message(provider))?;
    Ok(())
}

/// Run the planner until the user quits.
pub fn run(runtime: &Runtime, provider: Arc<CatalogProvider>) -> Result<String, ApiError> {
    let mut prefetch = Some({
        let provider = Arc::clone(&provider);
        runtime.spawn(async move { provider.get_catalog().await })
    });
    let honoree = provider.celebration().honoree.clone();
    let mut flow = SelectionFlowController::new();

    loop {
        if flow.step() == Step::Summary && flow.message_state() == &MessageState::Idle {
            generate_message(runtime, &mut flow, &provider)?;
        }

        let menu = build_menu(&flow, &honoree);
        match ask(&menu)? {
            Action::Start => {
                adopt_prefetch(runtime, &mut flow, &mut prefetch);
                if flow.catalog().map_or(true, |c| c.is_empty()) {
                    println!("{}", "Loading the catalog...".dimmed());
                }
                runtime.block_on(flow.start(provider.as_ref()))?;
            }
            Action::Choose(id) => match flow.step() {
                Step::Event => flow.choose_event(&id)?,
                Step::Lodging => flow.choose_lodging(&id)?,
                Step::Cuisine => flow.choose_cuisine(&id)?,
                Step::Dining => flow.choose_dining(&id)?,
                Step::Landing | Step::Summary => {}
            },
            Action::Back => flow.back(),
            Action::Home => flow.go_home(),
            Action::Regenerate => generate_message(runtime, &mut flow, &provider)?,
            Action::Restart => flow.restart()?,
            Action::Quit => {
                return Ok(match flow.selection().complete() {
                    Some(_) => "Enjoy the celebration.".to_string(),
                    None => "Goodbye.".to_string(),
                })
            }
        }
    }
}
