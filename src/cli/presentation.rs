//! CLI presentation: text and json formatters per command family.

mod cache;
mod catalog;
mod init;
mod shared;
mod summary;

pub use cache::format_cache_status;
pub use catalog::{format_catalog_json, format_catalog_text};
pub use init::format_init_summary;
pub use shared::{format_card, format_section_heading, image_ref, FALLBACK_IMAGE};
pub use summary::{format_summary_json, format_summary_text};
