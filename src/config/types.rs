use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::LumeraError;

/// Backend origin used when neither flag, env var nor config file names one.
pub const DEFAULT_BASE_URL: &str = "https://sites-quotes-modify-layers.trycloudflare.com";

/// Environment variable consulted between the CLI flag and the config file.
pub const BASE_URL_ENV: &str = "LUMERA_API_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LumeraConfig {
    pub backend: Option<BackendConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BackendConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DisplayConfig {
    pub view: Option<ViewMode>,
}

/// How a single report is laid out: full card or compact table row.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Detail,
    Table,
}

impl ViewMode {
    pub fn parse(s: &str) -> Result<Self, LumeraError> {
        match s {
            "detail" => Ok(Self::Detail),
            "table" => Ok(Self::Table),
            other => Err(LumeraError::Config(format!("Invalid view mode: {}", other))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Detail => "detail",
            Self::Table => "table",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Precedence: CLI flag, then env var, then config file, then built-in
/// default. Trailing slashes are stripped so path joins stay clean.
pub fn resolve_base_url(
    flag: Option<&str>,
    env: Option<&str>,
    file: Option<&LumeraConfig>,
) -> String {
    flag.map(str::to_string)
        .or_else(|| env.map(str::to_string))
        .or_else(|| {
            file.and_then(|c| c.backend.as_ref())
                .and_then(|b| b.base_url.clone())
        })
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

pub fn resolve_timeout(file: Option<&LumeraConfig>) -> Duration {
    let secs = file
        .and_then(|c| c.backend.as_ref())
        .and_then(|b| b.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

pub fn resolve_view(flag: Option<ViewMode>, file: Option<&LumeraConfig>) -> ViewMode {
    flag.or_else(|| file.and_then(|c| c.display.as_ref()).and_then(|d| d.view))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config(base_url: &str) -> LumeraConfig {
        LumeraConfig {
            backend: Some(BackendConfig {
                base_url: Some(base_url.to_string()),
                timeout_secs: Some(5),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_flag_wins_over_env_and_file() {
        let file = file_config("http://file.example");
        let url = resolve_base_url(
            Some("http://flag.example/"),
            Some("http://env.example"),
            Some(&file),
        );
        assert_eq!(url, "http://flag.example");
    }

    #[test]
    fn test_env_wins_over_file() {
        let file = file_config("http://file.example");
        let url = resolve_base_url(None, Some("http://env.example"), Some(&file));
        assert_eq!(url, "http://env.example");
    }

    #[test]
    fn test_file_wins_over_default() {
        let file = file_config("http://file.example");
        assert_eq!(resolve_base_url(None, None, Some(&file)), "http://file.example");
    }

    #[test]
    fn test_default_when_nothing_set() {
        assert_eq!(resolve_base_url(None, None, None), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_timeout_from_file() {
        let file = file_config("http://file.example");
        assert_eq!(resolve_timeout(Some(&file)), Duration::from_secs(5));
        assert_eq!(resolve_timeout(None), Duration::from_secs(30));
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!(ViewMode::parse("table").unwrap(), ViewMode::Table);
        assert!(ViewMode::parse("grid").is_err());
    }
}
