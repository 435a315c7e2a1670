//! Structured-output contract for catalog generation and validation of what comes back.
//!
//! Generated content is parsed into wire types and checked before it may become a
//! [`Catalog`](super::Catalog). Failures here are [`SchemaError`]s, never provider errors.

use crate::error::SchemaError;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashSet;

/// JSON schema requested from the provider.
pub fn catalog_schema() -> Value {
    let string = json!({ "type": "string" });
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "id": string,
                "name": string,
                "venue": string,
                "dates": string,
                "description": string,
                "criticRating": string,
                "priceRange": string,
                "hotels": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": string,
                            "name": string,
                            "description": string,
                            "location": string,
                            "priceRange": string,
                            "topFeatures": { "type": "array", "items": string },
                            "restaurants": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "id": string,
                                        "cuisine": string,
                                        "name": string,
                                        "summary": { "type": "string", "description": "A 1-sentence 'Vibe' summary" },
                                        "signatureDish": string,
                                        "priceRange": string
                                    },
                                    "required": ["id", "cuisine", "name", "summary", "signatureDish", "priceRange"]
                                }
                            }
                        },
                        "required": ["id", "name", "description", "location", "priceRange", "topFeatures", "restaurants"]
                    }
                }
            },
            "required": ["id", "name", "venue", "dates", "description", "criticRating", "priceRange", "hotels"]
        }
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub id: String,
    pub name: String,
    pub venue: String,
    pub dates: String,
    pub description: String,
    pub critic_rating: String,
    pub price_range: String,
    pub hotels: Vec<RawLodging>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLodging {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub price_range: String,
    pub top_features: Vec<String>,
    pub restaurants: Vec<RawDining>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDining {
    pub id: String,
    pub cuisine: String,
    pub name: String,
    pub summary: String,
    pub signature_dish: String,
    pub price_range: String,
}

/// Remove a surrounding markdown code fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parse and validate generated catalog text.
pub fn parse_generated(text: &str) -> Result<Vec<RawEvent>, SchemaError> {
    let body = strip_code_fence(text);
    let body = if body.is_empty() { "[]" } else { body };

    let value: Value =
        serde_json::from_str(body).map_err(|e| SchemaError::Malformed(e.to_string()))?;
    let events: Vec<RawEvent> =
        serde_json::from_value(value).map_err(|e| SchemaError::Shape(e.to_string()))?;

    validate(&events)?;
    Ok(events)
}

fn require(
    entity: &'static str,
    id: &str,
    field: &'static str,
    value: &str,
) -> Result<(), SchemaError> {
    if value.trim().is_empty() {
        return Err(SchemaError::EmptyField {
            entity,
            id: id.to_string(),
            field,
        });
    }
    Ok(())
}

fn unique<'a>(
    entity: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SchemaError::DuplicateId {
                entity,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Structural checks the JSON shape alone cannot express.
pub fn validate(events: &[RawEvent]) -> Result<(), SchemaError> {
    unique("event", events.iter().map(|e| e.id.as_str()))?;

    for event in events {
        require("event", &event.id, "id", &event.id)?;
        require("event", &event.id, "name", &event.name)?;
        if event.hotels.is_empty() {
            return Err(SchemaError::NoLodging(event.id.clone()));
        }
        unique("lodging", event.hotels.iter().map(|h| h.id.as_str()))?;

        for hotel in &event.hotels {
            require("lodging", &hotel.id, "id", &hotel.id)?;
            require("lodging", &hotel.id, "name", &hotel.name)?;
            unique("dining", hotel.restaurants.iter().map(|r| r.id.as_str()))?;

            for dining in &hotel.restaurants {
                require("dining", &dining.id, "id", &dining.id)?;
                require("dining", &dining.id, "name", &dining.name)?;
                require("dining", &dining.id, "cuisine", &dining.cuisine)?;
            }
        }
    }
    Ok(())
}
