use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One product recommendation entry. Shape varies by upstream source, so
/// unrecognized keys are captured for the fallback rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Display fallback chain: name, then title, then a compact JSON dump of
    /// the whole entry. Empty strings count as absent.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|s| !s.is_empty()) {
            return name.to_string();
        }
        if let Some(title) = self.title.as_deref().filter(|s| !s.is_empty()) {
            return title.to_string();
        }
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_takes_precedence() {
        let p: Product =
            serde_json::from_str(r#"{"name":"Sunscreen","title":"SPF 50"}"#).unwrap();
        assert_eq!(p.display_name(), "Sunscreen");
    }

    #[test]
    fn test_empty_name_falls_back_to_title() {
        let p: Product = serde_json::from_str(r#"{"name":"","title":"SPF 50"}"#).unwrap();
        assert_eq!(p.display_name(), "SPF 50");
    }

    #[test]
    fn test_unnamed_entry_dumps_json() {
        let p: Product = serde_json::from_str(r#"{"sku":123,"brand":"Acme"}"#).unwrap();
        let rendered = p.display_name();
        assert!(rendered.contains("\"sku\""));
        assert!(rendered.contains("\"brand\""));
        assert!(!rendered.contains("\"name\""));
    }
}
