//! Site settings.
//!
//! Every field has a default, so an absent or partial `site.json` in a
//! launcher crate is fine. A malformed one is reported and ignored.

use serde::{Deserialize, Serialize};

use crate::core::Language;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Language every session starts in. The choice is not persisted.
    pub default_language: Language,
    /// Delay of the simulated contact-form send.
    pub send_delay_ms: u64,
    /// How long a success/error notice stays up before it is dismissed.
    pub notice_ttl_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            send_delay_ms: 2_000,
            notice_ttl_ms: 5_000,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SiteConfig {
    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(src)?)
    }

    /// Parses `src` if present, falling back to defaults on any error.
    pub fn load(src: Option<&str>) -> Self {
        let Some(src) = src else {
            return Self::default();
        };
        match Self::from_json(src) {
            Ok(config) => {
                tracing::debug!(?config, "loaded site config");
                config
            }
            Err(err) => {
                tracing::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = SiteConfig::from_json(r#"{ "default_language": "ar" }"#).unwrap();
        assert_eq!(config.default_language, Language::Ar);
        assert_eq!(config.send_delay_ms, 2_000);
        assert_eq!(config.notice_ttl_ms, 5_000);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(SiteConfig::from_json(r#"{ "persist_language": true }"#).is_err());
    }

    #[test]
    fn malformed_config_falls_back() {
        assert_eq!(SiteConfig::load(Some("{ nope")), SiteConfig::default());
        assert_eq!(SiteConfig::load(None), SiteConfig::default());
    }
}
