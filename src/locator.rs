//! Resource Locator
//!
//! The `data-url` value carried by each delete control.

use std::fmt;

use crate::error::BindError;

/// Schemes that must never become a request target.
const REJECTED_SCHEMES: [&str; 3] = ["javascript:", "data:", "vbscript:"];

/// Validated address of the resource a delete control removes.
///
/// The value is used verbatim as the request target; the handler never
/// builds or rewrites it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLocator(String);

impl ResourceLocator {
    /// Validate a raw attribute value.
    pub fn parse(raw: &str) -> Result<Self, BindError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(BindError::MissingLocator);
        }
        if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(BindError::MalformedLocator(value.to_string()));
        }
        let lowered = value.to_ascii_lowercase();
        if REJECTED_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme)) {
            return Err(BindError::MalformedLocator(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// Parse an attribute that may be absent on the element.
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, BindError> {
        match raw {
            Some(value) => Self::parse(value),
            None => Err(BindError::MissingLocator),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceLocator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dashboard_routes() {
        let loc = ResourceLocator::parse("/delete_item/42").unwrap();
        assert_eq!(loc.as_str(), "/delete_item/42");

        let loc = ResourceLocator::parse("https://menu.example/delete_category/7").unwrap();
        assert_eq!(loc.to_string(), "https://menu.example/delete_category/7");

        let loc = ResourceLocator::parse("delete_item/3").unwrap();
        assert_eq!(loc.as_str(), "delete_item/3");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let loc = ResourceLocator::parse("  /delete_item/9\n").unwrap();
        assert_eq!(loc.as_str(), "/delete_item/9");
    }

    #[test]
    fn empty_or_absent_is_missing() {
        assert_eq!(ResourceLocator::parse(""), Err(BindError::MissingLocator));
        assert_eq!(ResourceLocator::parse("   "), Err(BindError::MissingLocator));
        assert_eq!(ResourceLocator::from_attribute(None), Err(BindError::MissingLocator));
    }

    #[test]
    fn rejects_inner_whitespace_and_script_schemes() {
        assert!(matches!(
            ResourceLocator::parse("/delete item/1"),
            Err(BindError::MalformedLocator(_))
        ));
        assert!(matches!(
            ResourceLocator::parse("JavaScript:alert(1)"),
            Err(BindError::MalformedLocator(_))
        ));
        assert!(matches!(
            ResourceLocator::parse("data:text/html,x"),
            Err(BindError::MalformedLocator(_))
        ));
    }
}
