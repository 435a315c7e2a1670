//! Celebration catalog: data model, generation contract, validation, enrichment, and the
//! cached provider that ties them together.

pub mod enrich;
pub mod prompt;
pub mod provider;
pub mod schema;
pub mod types;

pub use provider::{CatalogProvider, CatalogSource};
pub use types::{Catalog, DiningOption, EventOption, ItemBase, LodgingOption, SelectionItem};
