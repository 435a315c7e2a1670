//! Shared presentation helpers: headings, cards, image references.

use crate::catalog::enrich::DEFAULT_EVENT_IMAGE;
use crate::catalog::SelectionItem;
use crate::error::{ApiError, StorageError};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Shown in place of an image reference that is missing or not a URL.
pub const FALLBACK_IMAGE: &str = DEFAULT_EVENT_IMAGE;

pub fn image_ref(image: &str) -> &str {
    let image = image.trim();
    if image.starts_with("https://") || image.starts_with("http://") {
        image
    } else {
        FALLBACK_IMAGE
    }
}

pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Multi-line card for one selectable item.
pub fn format_card(item: SelectionItem<'_>) -> String {
    let base = item.base();
    let mut out = format!("{}", base.name.bold());
    if let Some(badge) = item.badge() {
        out.push_str(&format!("  [{}]", badge.yellow()));
    }
    out.push_str(&format!("  {}\n", base.price_range.green()));
    out.push_str(&format!("  {}\n", item.detail().dimmed()));
    if !base.description.is_empty() {
        out.push_str(&format!("  {}\n", base.description));
    }
    let tags = item.tags();
    if !tags.is_empty() {
        out.push_str(&format!("  {}\n", tags.join(" · ")));
    }
    out.push_str(&format!("  {}", image_ref(&base.image).dimmed()));
    out
}

pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::StorageError(StorageError::Serialization(e)))
}

/// "3h 12m" style age.
pub(crate) fn format_age(age_ms: i64) -> String {
    let minutes = age_ms.max(0) / 60_000;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
