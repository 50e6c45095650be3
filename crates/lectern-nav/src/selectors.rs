//! Binding selectors
//!
//! The markers the controller uses to locate its collaborators in the page.
//! Defaults match the documentation site's markup contract.

use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selectors {
    /// Class marking the sidebar container
    pub sidebar_class: String,
    /// Id of the content frame
    pub frame_id: String,
    /// Attribute on sidebar anchors holding the content path
    pub content_attr: String,
    /// Class marking the selected link
    pub active_class: String,
    /// Id of the API test console nav entry
    pub api_nav_id: String,
    /// Id of the load test console nav entry
    pub load_nav_id: String,
}

impl Selectors {
    pub fn validate(&self) -> Result<()> {
        if self.sidebar_class.is_empty() {
            return Err(NavError::EmptySelector("sidebar_class"));
        }
        if self.frame_id.is_empty() {
            return Err(NavError::EmptySelector("frame_id"));
        }
        if self.content_attr.is_empty() {
            return Err(NavError::EmptySelector("content_attr"));
        }
        if self.active_class.is_empty() {
            return Err(NavError::EmptySelector("active_class"));
        }
        if self.api_nav_id.is_empty() {
            return Err(NavError::EmptySelector("api_nav_id"));
        }
        if self.load_nav_id.is_empty() {
            return Err(NavError::EmptySelector("load_nav_id"));
        }
        Ok(())
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            sidebar_class: "sidebar".to_string(),
            frame_id: "content-frame".to_string(),
            content_attr: "data-content".to_string(),
            active_class: "active".to_string(),
            api_nav_id: "api-test-nav".to_string(),
            load_nav_id: "load-test-nav".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        assert!(Selectors::default().validate().is_ok());
    }

    #[test]
    fn test_empty_marker_rejected() {
        let selectors = Selectors {
            frame_id: String::new(),
            ..Selectors::default()
        };
        assert!(matches!(
            selectors.validate(),
            Err(NavError::EmptySelector("frame_id"))
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let selectors = Selectors::default();
        let json = serde_json::to_string(&selectors).unwrap();
        let back: Selectors = serde_json::from_str(&json).unwrap();
        assert_eq!(back, selectors);
    }
}
