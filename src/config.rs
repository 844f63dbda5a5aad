//! Handler Configuration
//!
//! Every literal the delete handler depends on, overridable from JSON
//! embedded in the page.

use serde::{Deserialize, Serialize};

use crate::dialog::{DialogColors, DialogTexts};
use crate::error::ConfigError;
use crate::transport::HttpMethod;

/// Id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "delete-confirm-config";

/// How click handling is attached to delete controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingMode {
    /// One listener per control present at install time.
    #[default]
    Static,
    /// One listener on the container; controls are looked up per click.
    Delegated,
}

/// What the user sees when a deletion fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureFeedback {
    /// Nothing; the page stays as it is.
    #[default]
    Silent,
    /// An error acknowledgment mirroring the success dialog.
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// CSS selector identifying delete controls.
    pub selector: String,
    /// Attribute holding the resource locator.
    pub url_attribute: String,
    /// Where the browser goes after a successful deletion.
    pub dashboard_path: String,
    pub method: HttpMethod,
    pub binding: BindingMode,
    pub failure_feedback: FailureFeedback,
    /// Abort the request after this many milliseconds. `None` waits forever.
    pub request_timeout_ms: Option<u32>,
    pub texts: DialogTexts,
    pub colors: DialogColors,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            selector: ".delete-btn".into(),
            url_attribute: "data-url".into(),
            dashboard_path: "/dashboard".into(),
            method: HttpMethod::Post,
            binding: BindingMode::Static,
            failure_feedback: FailureFeedback::Silent,
            request_timeout_ms: None,
            texts: DialogTexts::default(),
            colors: DialogColors::default(),
        }
    }
}

impl HandlerConfig {
    /// Parse overrides; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: HandlerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selector.trim().is_empty() {
            return Err(ConfigError::Invalid("selector is empty".into()));
        }
        if self.url_attribute.trim().is_empty() {
            return Err(ConfigError::Invalid("url_attribute is empty".into()));
        }
        if self.dashboard_path.trim().is_empty() {
            return Err(ConfigError::Invalid("dashboard_path is empty".into()));
        }
        if self.request_timeout_ms == Some(0) {
            return Err(ConfigError::Invalid("request_timeout_ms must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_page() {
        let config = HandlerConfig::default();
        assert_eq!(config.selector, ".delete-btn");
        assert_eq!(config.url_attribute, "data-url");
        assert_eq!(config.dashboard_path, "/dashboard");
        assert_eq!(config.method, HttpMethod::Post);
        assert_eq!(config.binding, BindingMode::Static);
        assert_eq!(config.failure_feedback, FailureFeedback::Silent);
        assert_eq!(config.request_timeout_ms, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_object_is_default() {
        let config = HandlerConfig::from_json("{}").unwrap();
        assert_eq!(config, HandlerConfig::default());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = HandlerConfig::from_json(
            r#"{
                "dashboard_path": "/admin",
                "binding": "delegated",
                "failure_feedback": "alert",
                "method": "DELETE",
                "request_timeout_ms": 8000,
                "texts": { "confirm_title": "Are you sure?" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.dashboard_path, "/admin");
        assert_eq!(config.binding, BindingMode::Delegated);
        assert_eq!(config.failure_feedback, FailureFeedback::Alert);
        assert_eq!(config.method, HttpMethod::Delete);
        assert_eq!(config.request_timeout_ms, Some(8000));
        assert_eq!(config.texts.confirm_title, "Are you sure?");
        assert_eq!(config.texts.cancel_button, "Cancelar");
        assert_eq!(config.selector, ".delete-btn");
    }

    #[test]
    fn rejects_unknown_modes_and_bad_values() {
        assert!(matches!(
            HandlerConfig::from_json(r#"{ "binding": "lazy" }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            HandlerConfig::from_json(r#"{ "selector": " " }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            HandlerConfig::from_json(r#"{ "request_timeout_ms": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }
}
