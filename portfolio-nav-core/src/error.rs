//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Navigation layer error type
///
/// Every variant is a soft failure: the operation that produced it is
/// abandoned and the navigation state stays as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum NavError {
    /// Menu id is neither a reserved menu nor a catalog section
    #[error("Unknown menu: {0}")]
    UnknownMenu(String),

    /// Section id is not in the catalog
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Item id is not part of the given section
    #[error("Item {item_id} not found in section {section}")]
    UnknownItem { section: String, item_id: u32 },

    /// Render target has no element for the requested id
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Catalog content breaks a catalog rule
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Catalog document could not be parsed
    #[error("Catalog parse error: {0}")]
    CatalogParse(String),
}

impl NavError {
    /// Whether it is expected behavior (a stale click, an unknown id coming
    /// from user input) as opposed to a wiring defect. Used for log level
    /// classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::UnknownMenu(_) | Self::UnknownSection(_) | Self::UnknownItem { .. } => true,
            Self::ElementNotFound(_) | Self::InvalidCatalog(_) | Self::CatalogParse(_) => false,
        }
    }
}

impl From<serde_json::Error> for NavError {
    fn from(err: serde_json::Error) -> Self {
        Self::CatalogParse(err.to_string())
    }
}

/// Navigation layer Result type alias
pub type NavResult<T> = std::result::Result<T, NavError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn lookup_misses_are_expected() {
        assert!(NavError::UnknownMenu("blog".to_string()).is_expected());
        assert!(NavError::UnknownSection("blog".to_string()).is_expected());
        assert!(NavError::UnknownItem {
            section: "rower".to_string(),
            item_id: 9
        }
        .is_expected());
    }

    #[test]
    fn wiring_failures_are_not_expected() {
        assert!(!NavError::ElementNotFound("view-detail".to_string()).is_expected());
        assert!(!NavError::InvalidCatalog("empty".to_string()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(NavError::UnknownSection("blog".to_string())).unwrap();
        assert_eq!(json["code"], "UnknownSection");
        assert_eq!(json["details"], "blog");
    }

    #[test]
    fn display_names_item_and_section() {
        let err = NavError::UnknownItem {
            section: "inne".to_string(),
            item_id: 7,
        };
        assert_eq!(err.to_string(), "Item 7 not found in section inne");
    }
}
