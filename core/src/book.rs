//! Book catalog types.

use crate::error::DomainError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A book in the catalog, keyed by ISBN
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique ISBN (string key)
    pub isbn: String,
    /// Book title
    pub title: String,
    /// Author name
    pub author: String,
    /// Current unit price
    pub price: Money,
    /// Copies available (never negative)
    pub stock: i64,
}

/// Which book column a catalog search matches against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    /// Match on the title column (the default)
    #[default]
    Title,
    /// Match on the author column
    Author,
}

impl SearchField {
    /// Column name used in SQL queries
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for SearchField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            other => Err(DomainError::InvalidInput(format!(
                "unknown search field '{other}' (expected 'title' or 'author')"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_field_parse() {
        assert_eq!("title".parse::<SearchField>(), Ok(SearchField::Title));
        assert_eq!("author".parse::<SearchField>(), Ok(SearchField::Author));
        assert!("isbn".parse::<SearchField>().is_err());
    }

    #[test]
    fn test_search_field_default() {
        assert_eq!(SearchField::default(), SearchField::Title);
    }

    #[test]
    fn test_search_field_serde() {
        let field: SearchField = serde_json::from_str("\"author\"").unwrap();
        assert_eq!(field, SearchField::Author);
    }
}
