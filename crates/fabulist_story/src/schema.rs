//! JSON schemas for the structured generation calls.
//!
//! These shapes are the contract between the pipeline and any
//! [`JsonMode`](fabulist_interface::JsonMode) backend. The `required`
//! lists mirror what the draft types enforce at parse time, so a
//! response that validates against the schema also deserializes.

use serde_json::{Value, json};

/// Schema for bible extraction: one story bible object.
///
/// `genre` and `theme` are optional and default to empty lists; the
/// remaining fields are required.
pub fn bible_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "genre": { "type": "array", "items": { "type": "string" } },
            "setting": { "type": "string" },
            "characters": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "role": { "type": "string" },
                        "description": { "type": "string" }
                    },
                    "required": ["name", "role", "description"]
                }
            },
            "theme": { "type": "array", "items": { "type": "string" } },
            "synopsis": { "type": "string" }
        },
        "required": ["title", "setting", "characters", "synopsis"]
    })
}

/// Schema for structure expansion: an array of chapter drafts.
///
/// Every level carries a `number` ordinal and a `summary`; identifiers
/// are deliberately absent because the pipeline assigns them from
/// positional indices after parsing.
pub fn structure_schema() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "number": { "type": "integer" },
                "title": { "type": "string" },
                "summary": { "type": "string" },
                "parts": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "number": { "type": "integer" },
                            "summary": { "type": "string" },
                            "sections": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "number": { "type": "integer" },
                                        "summary": { "type": "string" }
                                    },
                                    "required": ["number", "summary"]
                                }
                            }
                        },
                        "required": ["number", "summary", "sections"]
                    }
                }
            },
            "required": ["number", "title", "summary", "parts"]
        }
    })
}
