//! Configuration of the trade form.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LIST_FILTER, TRADE_CREATED_MESSAGE, TRADE_CREATED_TITLE, TRADE_OBJECT_API_NAME,
    UNKNOWN_ERROR_MESSAGE,
};
use crate::errors::{Error, Result};

/// Tunables of a trade form session.
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradeFormSettings {
    /// Object whose list view `cancel` returns to.
    pub trade_object_api_name: String,
    /// Filter applied to that list view.
    pub list_filter_name: String,
    pub success_title: String,
    pub success_message: String,
    /// Shown when a collaborator rejects without a message.
    pub unknown_error_message: String,
    /// Drop completions whose request generation has been superseded.
    /// When false, the last response to arrive wins.
    pub discard_stale_responses: bool,
}

impl Default for TradeFormSettings {
    fn default() -> Self {
        Self {
            trade_object_api_name: TRADE_OBJECT_API_NAME.to_string(),
            list_filter_name: DEFAULT_LIST_FILTER.to_string(),
            success_title: TRADE_CREATED_TITLE.to_string(),
            success_message: TRADE_CREATED_MESSAGE.to_string(),
            unknown_error_message: UNKNOWN_ERROR_MESSAGE.to_string(),
            discard_stale_responses: true,
        }
    }
}

impl TradeFormSettings {
    /// Parses settings from JSON and validates them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: TradeFormSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("tradeObjectApiName", &self.trade_object_api_name),
            ("listFilterName", &self.list_filter_name),
            ("successTitle", &self.success_title),
            ("unknownErrorMessage", &self.unknown_error_message),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfigValue(format!("{} must not be empty", key)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = TradeFormSettings::default();
        assert_eq!(settings.trade_object_api_name, "Trade__c");
        assert_eq!(settings.list_filter_name, "All");
        assert_eq!(settings.unknown_error_message, "Unknown error");
        assert!(settings.discard_stale_responses);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            TradeFormSettings::from_json_str(r#"{"discardStaleResponses": false}"#).unwrap();
        assert!(!settings.discard_stale_responses);
        assert_eq!(settings.success_title, "Trade created successfully");
    }

    #[test]
    fn test_empty_filter_rejected() {
        let result = TradeFormSettings::from_json_str(r#"{"listFilterName": "  "}"#);
        assert!(matches!(result, Err(Error::InvalidConfigValue(msg)) if msg.contains("listFilterName")));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let result = TradeFormSettings::from_json_str("{not json");
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }
}
