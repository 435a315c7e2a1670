//! Property-based tests for ordering and selection invariants

mod ordering;
mod selection;
