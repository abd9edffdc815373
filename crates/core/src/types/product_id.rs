//! Product identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductIdError {
    /// The input string is empty.
    #[error("product id cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("product id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[a-z0-9-]`.
    #[error("product id contains invalid character {0:?}")]
    InvalidCharacter(char),
    /// The input starts or ends with a hyphen.
    #[error("product id cannot start or end with '-'")]
    EdgeHyphen,
}

/// A catalog product identifier such as `aff-001` or `cnd-004`.
///
/// Product ids are lowercase ASCII slugs. They double as the key for product
/// images and wishlist entries, so the same id always names the same product
/// across the catalog, the cart, and the image table.
///
/// ## Constraints
///
/// - Length: 1-64 characters
/// - Characters: `a-z`, `0-9`, `-`
/// - Must not start or end with `-`
///
/// ## Examples
///
/// ```
/// use luna_rituals_core::ProductId;
///
/// assert!(ProductId::parse("aff-001").is_ok());
/// assert!(ProductId::parse("book-003").is_ok());
///
/// assert!(ProductId::parse("").is_err());        // empty
/// assert!(ProductId::parse("AFF-001").is_err()); // uppercase
/// assert!(ProductId::parse("-aff").is_err());    // leading hyphen
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Maximum length of a product id.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `ProductId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 64 characters,
    /// contains anything other than lowercase letters, digits, and hyphens,
    /// or starts/ends with a hyphen.
    pub fn parse(s: &str) -> Result<Self, ProductIdError> {
        if s.is_empty() {
            return Err(ProductIdError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(ProductIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(ProductIdError::InvalidCharacter(c));
        }

        if s.starts_with('-') || s.ends_with('-') {
            return Err(ProductIdError::EdgeHyphen);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = ProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProductId {
    type Error = ProductIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for ProductId {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ProductId {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self::parse(&s)?)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for ProductId {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        assert!(ProductId::parse("aff-001").is_ok());
        assert!(ProductId::parse("cnd-018").is_ok());
        assert!(ProductId::parse("sup-1").is_ok());
        assert!(ProductId::parse("a").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ProductId::parse(""), Err(ProductIdError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(65);
        assert!(matches!(
            ProductId::parse(&long),
            Err(ProductIdError::TooLong { max: 64 })
        ));
    }

    #[test]
    fn test_parse_invalid_characters() {
        assert_eq!(
            ProductId::parse("Aff-001"),
            Err(ProductIdError::InvalidCharacter('A'))
        );
        assert_eq!(
            ProductId::parse("aff 001"),
            Err(ProductIdError::InvalidCharacter(' '))
        );
        assert_eq!(
            ProductId::parse("../etc"),
            Err(ProductIdError::InvalidCharacter('.'))
        );
    }

    #[test]
    fn test_parse_edge_hyphen() {
        assert_eq!(ProductId::parse("-aff"), Err(ProductIdError::EdgeHyphen));
        assert_eq!(ProductId::parse("aff-"), Err(ProductIdError::EdgeHyphen));
    }

    #[test]
    fn test_serde_validates() {
        let id: ProductId = serde_json::from_str("\"aff-002\"").unwrap();
        assert_eq!(id.as_str(), "aff-002");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"aff-002\"");

        assert!(serde_json::from_str::<ProductId>("\"AFF\"").is_err());
    }

    #[test]
    fn test_display() {
        let id = ProductId::parse("book-001").unwrap();
        assert_eq!(format!("{id}"), "book-001");
    }
}
