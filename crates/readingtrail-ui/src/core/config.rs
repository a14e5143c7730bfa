//! UI configuration embedded by the server templates.
//!
//! # Design
//! - Every field has a default so pages without a config block still boot.
//! - Timings are milliseconds as `u32`, the unit browser timers take.
//! - Malformed JSON is an error; the caller decides whether to fall back.

use crate::core::achievements::DEFAULT_STAGGER_MS;
use crate::core::alerts::DEFAULT_DISMISS_MS;
use crate::core::page::PageKind;
use crate::i18n::LocaleCode;
use serde::Deserialize;
use thiserror::Error;

/// Id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "readingtrail-config";

/// Failure while reading the embedded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The config block is not valid JSON for [`UiConfig`].
    #[error("invalid ui configuration: {detail}")]
    Parse {
        /// Decoder diagnostic.
        detail: String,
    },
}

/// Timer durations in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Delay before an alert closes itself.
    pub alert_dismiss_ms: u32,
    /// Gap between consecutive achievement modals.
    pub achievement_stagger_ms: u32,
    /// Length of the counter pulse animation.
    pub counter_pulse_ms: u32,
    /// Fade duration before a dashboard card is removed.
    pub card_fade_ms: u32,
    /// Delay before the dashboard reloads once it is (nearly) empty.
    pub dashboard_reload_ms: u32,
    /// Delay before reloading after a cancelled borrow request.
    pub cancel_reload_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: DEFAULT_DISMISS_MS,
            achievement_stagger_ms: DEFAULT_STAGGER_MS,
            counter_pulse_ms: 200,
            card_fade_ms: 300,
            dashboard_reload_ms: 500,
            cancel_reload_ms: 1_000,
        }
    }
}

/// Top-level UI configuration.
#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Locale used for UI-originated strings.
    pub locale: LocaleCode,
    /// Page kind override; derived from the location path when absent.
    pub page: Option<PageKind>,
    /// Prefix for API requests; empty means same origin.
    pub base_url: String,
    /// Timer durations.
    pub timings: Timings,
}

impl UiConfig {
    /// Parse the embedded JSON block.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] when the text is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|err| ConfigError::Parse {
            detail: err.to_string(),
        })
    }

    /// Resolve the page kind, preferring the explicit override.
    #[must_use]
    pub fn page_kind(&self, path: &str) -> PageKind {
        self.page.unwrap_or_else(|| PageKind::from_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_timings() {
        let config = UiConfig::default();
        assert_eq!(config.locale, LocaleCode::Vi);
        assert_eq!(config.timings.alert_dismiss_ms, 5_000);
        assert_eq!(config.timings.achievement_stagger_ms, 500);
        assert_eq!(config.timings.counter_pulse_ms, 200);
        assert_eq!(config.timings.card_fade_ms, 300);
        assert_eq!(config.timings.dashboard_reload_ms, 500);
        assert_eq!(config.timings.cancel_reload_ms, 1_000);
        assert!(config.base_url.is_empty());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            UiConfig::from_json(r#"{"locale":"en","timings":{"alert_dismiss_ms":8000}}"#)
                .expect("config should parse");
        assert_eq!(config.locale, LocaleCode::En);
        assert_eq!(config.timings.alert_dismiss_ms, 8_000);
        assert_eq!(config.timings.achievement_stagger_ms, 500);
    }

    #[test]
    fn blank_block_is_default() {
        assert_eq!(UiConfig::from_json("  ").expect("blank"), UiConfig::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = UiConfig::from_json("{locale:").expect_err("must fail");
        assert!(err.to_string().starts_with("invalid ui configuration"));
    }

    #[test]
    fn page_override_wins_over_path() {
        let config = UiConfig::from_json(r#"{"page":"dashboard"}"#).expect("config");
        assert_eq!(config.page_kind("/"), PageKind::Dashboard);
        assert_eq!(UiConfig::default().page_kind("/book/3"), PageKind::Detail);
    }
}
