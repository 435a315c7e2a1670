//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::ProviderNotConfigured(msg) => format!(
            "{}\nRun `concierge init` and set an API key (e.g. GEMINI_API_KEY).",
            msg
        ),
        _ => e.to_string(),
    }
}
