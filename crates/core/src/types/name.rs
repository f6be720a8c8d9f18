//! Product name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`ItemName`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum NameError {
    /// The input string is empty or whitespace only.
    #[error("item name cannot be empty")]
    Empty,
}

/// A product label as shown in the cart.
///
/// Names are trimmed on construction and guaranteed non-empty afterwards.
/// Callers that cannot supply a name (for example a product card without a
/// title attribute) should use [`ItemName::or_placeholder`], which falls back
/// to the generic label instead of failing.
///
/// ## Examples
///
/// ```
/// use magma_core::ItemName;
///
/// assert!(ItemName::parse("Remera").is_ok());
/// assert!(ItemName::parse("  Short  ").is_ok()); // stored trimmed
///
/// assert!(ItemName::parse("").is_err());
/// assert!(ItemName::parse("   ").is_err());
///
/// assert_eq!(ItemName::or_placeholder("").as_str(), "Producto");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Generic label used when a caller cannot supply a product name.
    pub const PLACEHOLDER: &'static str = "Producto";

    /// Parse an `ItemName` from a string, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Empty`] if the input is empty after trimming.
    pub fn parse(s: &str) -> Result<Self, NameError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Parse an `ItemName`, substituting the placeholder label when the
    /// input is empty or whitespace only.
    #[must_use]
    pub fn or_placeholder(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|_| Self(Self::PLACEHOLDER.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ItemName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ItemName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = NameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> Self {
        name.0
    }
}
