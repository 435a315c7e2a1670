//! Integration tests for the Concierge celebration planner

mod catalog_provider;
mod config_integration;
mod selection_flow;
mod test_utils;
