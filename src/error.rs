//! Error types for the concierge planner.

use crate::flow::Step;
use thiserror::Error;

/// Cache store errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to open cache store: {0}")]
    OpenFailed(String),

    #[error("Cache read failed for key {key}: {message}")]
    ReadFailed { key: String, message: String },

    #[error("Cache write failed for key {key}: {message}")]
    WriteFailed { key: String, message: String },

    #[error("Cache entry serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Generated catalog content that does not satisfy the structured-output contract.
///
/// Kept apart from provider failures: the capability answered, but with data the
/// catalog cannot accept.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Generated content is not valid JSON: {0}")]
    Malformed(String),

    #[error("Generated content does not match the catalog schema: {0}")]
    Shape(String),

    #[error("Empty {field} on {entity} '{id}'")]
    EmptyField {
        entity: &'static str,
        id: String,
        field: &'static str,
    },

    #[error("Event '{0}' has no lodging options")]
    NoLodging(String),

    #[error("Duplicate {entity} id '{id}'")]
    DuplicateId { entity: &'static str, id: String },
}

/// Selection flow misuse. The UI only offers valid actions, so these indicate a
/// caller bug or a stale identifier rather than a user-facing condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("Action requires step {expected:?}, current step is {actual:?}")]
    WrongStep { expected: Step, actual: Step },

    #[error("Unknown {kind} option: {id}")]
    UnknownOption { kind: &'static str, id: String },

    #[error("Unknown cuisine: {0}")]
    UnknownCuisine(String),

    #[error("Selection incomplete: {0} not chosen")]
    IncompleteSelection(&'static str),

    #[error("A personal message is already being generated")]
    MessageInFlight,
}

/// Top-level API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    #[error("Provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Provider authentication failed: {0}")]
    ProviderAuthFailed(String),

    #[error("Provider rate limit exceeded: {0}")]
    ProviderRateLimit(String),

    #[error("Provider model not found: {0}")]
    ProviderModelNotFound(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] SchemaError),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
