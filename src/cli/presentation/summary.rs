//! Summary presentation for a complete selection.

use super::shared::{format_section_heading, image_ref, to_json};
use crate::error::ApiError;
use crate::flow::CompleteSelection;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn format_summary_text(selection: &CompleteSelection<'_>, message: Option<&str>) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Your celebration"));
    out.push_str(&format!(
        "  {} {}\n    {} · {}\n    {}\n\n",
        "Show:".bold(),
        selection.event.name(),
        selection.event.venue,
        selection.event.dates,
        image_ref(&selection.event.base.image).dimmed()
    ));
    out.push_str(&format!(
        "  {} {}\n    {}\n\n",
        "Stay:".bold(),
        selection.lodging.name(),
        selection.lodging.location
    ));
    out.push_str(&format!(
        "  {} {} ({})\n    Signature: {}\n",
        "Dine:".bold(),
        selection.dining.name(),
        selection.cuisine,
        selection.dining.signature_dish
    ));
    if let Some(message) = message {
        out.push_str(&format!("\n{}\n\n{}\n", format_section_heading("A note"), message.italic()));
    }
    out
}

pub fn format_summary_json(
    selection: &CompleteSelection<'_>,
    message: Option<&str>,
) -> Result<String, ApiError> {
    to_json(&json!({
        "event": selection.event,
        "lodging": selection.lodging,
        "cuisine": selection.cuisine,
        "dining": selection.dining,
        "message": message,
    }))
}
