//! Document Path Value Objects
//!
//! Path expressions address a node inside a semi-structured document
//! (a `serde_json::Value` tree). A path is either a single field name
//! (`table`) or a dotted sequence with an optional `$.` root marker
//! (`$.table.menu`); every segment is an object-key lookup.
//!
//! A bracket/filter predicate for selecting one array element by property
//! equality (`$.table.menu[?(@.item_id=5)]`) is recognized syntax but not
//! an implemented selector; parsing one is a configuration error.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Value Object: a parsed path into a semi-structured document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPath {
    /// The path expression as written at registration time
    raw: String,
    /// Object-key segments, root first
    segments: Vec<String>,
}

impl DocumentPath {
    /// Parse a path expression
    ///
    /// Accepts `field`, `a.b.c`, and the `$.a.b.c` rooted form. Empty
    /// segments and bracket selectors are rejected.
    pub fn parse<S: Into<String>>(raw: S) -> Result<Self> {
        let raw = raw.into();
        let trimmed = raw
            .strip_prefix("$.")
            .or_else(|| raw.strip_prefix('$'))
            .unwrap_or(&raw);

        if trimmed.is_empty() {
            return Err(Error::malformed_path(&raw, "path has no segments"));
        }

        let mut segments = Vec::new();
        for segment in trimmed.split('.') {
            if segment.is_empty() {
                return Err(Error::malformed_path(&raw, "path contains an empty segment"));
            }
            if segment.contains('[') || segment.contains(']') {
                return Err(Error::malformed_path(
                    &raw,
                    "bracket selectors are not supported",
                ));
            }
            segments.push(segment.to_string());
        }

        Ok(Self { raw, segments })
    }

    /// The path expression as registered
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Object-key segments, root first
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl std::fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
