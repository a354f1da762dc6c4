use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "backend": {
                "type": "object",
                "properties": {
                    "base_url": { "type": "string", "format": "uri" },
                    "timeout_secs": { "type": "integer", "minimum": 1 }
                }
            },
            "display": {
                "type": "object",
                "properties": {
                    "view": { "type": "string", "enum": ["detail", "table"] }
                }
            }
        },
        "additionalProperties": false
    })
});
