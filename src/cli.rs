//! CLI domain: parse, route, output, presentation, and the interactive planner.
//! Route handlers stay thin; catalog and flow logic live in their own modules.

mod output;
mod parse;
mod presentation;
mod route;
mod wizard;

pub use output::map_error;
pub use parse::{CacheCommands, Cli, Commands};
pub use presentation::{
    format_cache_status, format_card, format_catalog_json, format_catalog_text,
    format_init_summary, format_section_heading, format_summary_json, format_summary_text,
    image_ref, FALLBACK_IMAGE,
};
pub use route::RunContext;
