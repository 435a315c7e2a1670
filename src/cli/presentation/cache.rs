use super::shared::{format_age, to_json};
use crate::cache::CacheStatus;
use crate::error::ApiError;
use serde_json::json;

pub fn format_cache_status(status: &CacheStatus, format: &str) -> Result<String, ApiError> {
    if format == "json" {
        let value = match status {
            CacheStatus::Missing => json!({ "state": "missing" }),
            CacheStatus::Fresh { age_ms, events } => {
                json!({ "state": "fresh", "age_ms": age_ms, "events": events })
            }
            CacheStatus::Expired { age_ms, events } => {
                json!({ "state": "expired", "age_ms": age_ms, "events": events })
            }
            CacheStatus::Corrupt(reason) => json!({ "state": "corrupt", "reason": reason }),
        };
        return to_json(&value);
    }
    Ok(match status {
        CacheStatus::Missing => "Catalog cache: empty".to_string(),
        CacheStatus::Fresh { age_ms, events } => format!(
            "Catalog cache: fresh ({} events, age {})",
            events,
            format_age(*age_ms)
        ),
        CacheStatus::Expired { age_ms, events } => format!(
            "Catalog cache: expired ({} events, age {}); the next run regenerates it",
            events,
            format_age(*age_ms)
        ),
        CacheStatus::Corrupt(reason) => format!(
            "Catalog cache: unreadable ({}); the next run regenerates it",
            reason
        ),
    })
}
