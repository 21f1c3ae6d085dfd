//! Store-agnostic filter expressions.
//!
//! A [`Filter`] is built by the repository layer from request parameters and
//! handed to a [`DocumentStore`](crate::store::DocumentStore) unchanged. The
//! MongoDB store translates it with [`Filter::to_document`]; the in-process
//! store evaluates it with [`Filter::matches`]. Both must agree.

use mongodb::bson::{doc, Bson, Document};

/// A predicate over the top-level fields of a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches every document.
    All,
    /// All conditions must hold.
    And(Vec<Filter>),
    /// At least one condition must hold.
    Or(Vec<Filter>),
    /// Case-insensitive substring match on a string field.
    Contains { field: String, needle: String },
    /// Case-insensitive substring match on any element of an array-of-strings field.
    AnyContains { field: String, needle: String },
    /// Exact equality.
    Eq { field: String, value: Bson },
}

impl Filter {
    pub fn contains(field: impl Into<String>, needle: impl Into<String>) -> Self {
        Filter::Contains {
            field: field.into(),
            needle: needle.into(),
        }
    }

    pub fn any_contains(field: impl Into<String>, needle: impl Into<String>) -> Self {
        Filter::AnyContains {
            field: field.into(),
            needle: needle.into(),
        }
    }

    pub fn equals(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Filter::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Conjunction of `conditions`.
    ///
    /// No conditions yields [`Filter::All`]; a single condition is returned
    /// as-is. Nested groups are kept intact, never flattened.
    pub fn and(mut conditions: Vec<Filter>) -> Self {
        match conditions.len() {
            0 => Filter::All,
            1 => conditions.remove(0),
            _ => Filter::And(conditions),
        }
    }

    /// Translate into a MongoDB query document.
    ///
    /// Substring needles are regex-escaped, so `q=a.b` matches the literal
    /// text `a.b` and never acts as a pattern.
    pub fn to_document(&self) -> Document {
        match self {
            Filter::All => Document::new(),
            Filter::And(conditions) => {
                let parts: Vec<Document> = conditions.iter().map(Filter::to_document).collect();
                doc! { "$and": parts }
            }
            Filter::Or(conditions) => {
                let parts: Vec<Document> = conditions.iter().map(Filter::to_document).collect();
                doc! { "$or": parts }
            }
            Filter::Contains { field, needle } => {
                let mut d = Document::new();
                d.insert(field.as_str(), substring_regex(needle));
                d
            }
            Filter::AnyContains { field, needle } => {
                let mut d = Document::new();
                d.insert(field.as_str(), doc! { "$elemMatch": substring_regex(needle) });
                d
            }
            Filter::Eq { field, value } => {
                let mut d = Document::new();
                d.insert(field.as_str(), value.clone());
                d
            }
        }
    }

    /// Evaluate against a document held in memory.
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Filter::All => true,
            Filter::And(conditions) => conditions.iter().all(|c| c.matches(document)),
            Filter::Or(conditions) => conditions.iter().any(|c| c.matches(document)),
            Filter::Contains { field, needle } => match document.get(field) {
                Some(Bson::String(value)) => contains_ignore_case(value, needle),
                _ => false,
            },
            Filter::AnyContains { field, needle } => match document.get(field) {
                Some(Bson::Array(items)) => items.iter().any(|item| match item {
                    Bson::String(value) => contains_ignore_case(value, needle),
                    _ => false,
                }),
                _ => false,
            },
            Filter::Eq { field, value } => document.get(field) == Some(value),
        }
    }
}

fn substring_regex(needle: &str) -> Document {
    doc! { "$regex": regex::escape(needle), "$options": "i" }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
