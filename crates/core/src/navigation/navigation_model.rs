//! Page reference types.

use serde::{Deserialize, Serialize};

/// What to do with a record once its page is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordAction {
    View,
}

/// A destination inside the host shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageReference {
    /// Detail page of a single record.
    RecordPage {
        record_id: String,
        action: RecordAction,
    },

    /// List view of an object, narrowed by a named filter.
    ObjectList {
        object_api_name: String,
        filter_name: String,
    },
}

impl PageReference {
    /// Detail view of a freshly created record.
    pub fn view_record(record_id: impl Into<String>) -> Self {
        Self::RecordPage {
            record_id: record_id.into(),
            action: RecordAction::View,
        }
    }

    pub fn object_list(object_api_name: impl Into<String>, filter_name: impl Into<String>) -> Self {
        Self::ObjectList {
            object_api_name: object_api_name.into(),
            filter_name: filter_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_list_builds_list_page() {
        assert_eq!(
            PageReference::object_list("Trade__c", "All"),
            PageReference::ObjectList {
                object_api_name: "Trade__c".to_string(),
                filter_name: "All".to_string(),
            }
        );
    }

    #[test]
    fn test_record_page_serializes_tagged() {
        let value = serde_json::to_value(PageReference::view_record("abc123")).unwrap();
        assert_eq!(value["type"], "record_page");
        assert_eq!(value["record_id"], "abc123");
        assert_eq!(value["action"], "view");
    }
}
