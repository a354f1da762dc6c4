use std::path::Path;

use tracing::warn;

use super::schema::CONFIG_SCHEMA;
use super::types::LumeraConfig;
use crate::errors::LumeraError;

pub async fn parse_config(path: &Path) -> Result<LumeraConfig, LumeraError> {
    if !path.exists() {
        return Err(LumeraError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(LumeraError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: LumeraConfig = serde_yaml::from_value(yaml)?;

    // Semantic validation
    validate_semantics(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), LumeraError> {
    // Convert YAML value to JSON for schema validation
    let json_str = serde_json::to_string(yaml)
        .map_err(|e| LumeraError::Config(format!("Config conversion error: {}", e)))?;
    let json_value: serde_json::Value = serde_json::from_str(&json_str)
        .map_err(|e| LumeraError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| LumeraError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        let messages: Vec<String> = errors
            .map(|e| format!("{} at {}", e, e.instance_path))
            .collect();
        if !messages.is_empty() {
            // Warn but don't fail; schema validation is advisory for now
            for msg in &messages {
                warn!(validation_error = %msg, "Config schema warning");
            }
        }
    }

    Ok(())
}

/// Reject values the typed parse accepts but the client cannot use.
fn validate_semantics(config: &LumeraConfig) -> Result<(), LumeraError> {
    if let Some(backend) = &config.backend {
        if let Some(base_url) = &backend.base_url {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(LumeraError::Config(format!(
                    "Backend base_url must be http(s), got: {}",
                    base_url
                )));
            }
        }
        if backend.timeout_secs == Some(0) {
            return Err(LumeraError::Config(
                "Backend timeout_secs must be at least 1".into(),
            ));
        }
    }
    Ok(())
}
