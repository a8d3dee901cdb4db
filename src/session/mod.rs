//! Read-only view over the host-owned session attribute store.
//!
//! The store itself is owned and persisted by the host platform as an
//! opaque JSON object; this crate reads a few known keys and writes none.
//! Missing keys read as absent rather than failing.

use serde_json::{Map, Value};

/// Borrowed view over the session attributes of one request.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionAttributes<'a> {
    attributes: Option<&'a Map<String, Value>>,
}

impl<'a> SessionAttributes<'a> {
    pub fn new(attributes: Option<&'a Map<String, Value>>) -> Self {
        Self { attributes }
    }

    /// True when the platform sent no attributes, or an empty object.
    pub fn is_empty(&self) -> bool {
        self.attributes.map_or(true, |m| m.is_empty())
    }

    /// Read a top-level string attribute.
    pub fn get_str(&self, key: &str) -> Option<&'a str> {
        self.attributes?.get(key)?.as_str()
    }

    /// Walk a nested object path and return the string leaf, if every key
    /// along the way exists.
    pub fn get_path_str(&self, path: &[&str]) -> Option<&'a str> {
        let (first, rest) = path.split_first()?;
        let mut current = self.attributes?.get(*first)?;
        for key in rest {
            current = current.get(*key)?;
        }
        current.as_str()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
