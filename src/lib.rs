//! Concierge: a guided celebration planner
//!
//! Walks a user through choosing a performance, a nearby hotel, a cuisine and a
//! restaurant, backed by a generated catalog kept in a time-bounded cache, and ends
//! with a personal celebratory message.

pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod flow;
pub mod logging;
pub mod provider;
