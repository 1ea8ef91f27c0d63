//! Product name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductNameError {
    /// The input is empty or only whitespace.
    #[error("product name cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("product name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// The display name of a product.
///
/// Surrounding whitespace is trimmed on parse.
///
/// ## Constraints
///
/// - Not empty after trimming
/// - At most 255 characters
///
/// ## Examples
///
/// ```
/// use inventory_core::ProductName;
///
/// assert_eq!(ProductName::parse("  Widget ").unwrap().as_str(), "Widget");
/// assert!(ProductName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    /// Maximum length of a product name, in characters.
    pub const MAX_LENGTH: usize = 255;

    /// Parse a `ProductName` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or longer than
    /// [`Self::MAX_LENGTH`] characters.
    pub fn parse(s: &str) -> Result<Self, ProductNameError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ProductNameError::Empty);
        }

        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(ProductNameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ProductName {
    type Err = ProductNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let name = ProductName::parse("\tGadget  ").unwrap();
        assert_eq!(name.as_str(), "Gadget");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ProductName::parse(""), Err(ProductNameError::Empty));
        assert_eq!(ProductName::parse("  \n "), Err(ProductNameError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "x".repeat(ProductName::MAX_LENGTH + 1);
        assert_eq!(
            ProductName::parse(&long),
            Err(ProductNameError::TooLong {
                max: ProductName::MAX_LENGTH
            })
        );
    }

    #[test]
    fn test_max_length_counts_characters() {
        let exact = "é".repeat(ProductName::MAX_LENGTH);
        assert!(ProductName::parse(&exact).is_ok());
    }
}
