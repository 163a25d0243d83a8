//! Route parameters extracted from parameterized path segments.
//!
//! When a path like `/job/42/track` matches the pattern `/job/:id/track`,
//! the placeholder values are collected into a [`RouteParams`] map. Supports
//! typed access via [`get_as`](RouteParams::get_as).
//!
//! # Example
//!
//! ```
//! use marketplace_navigator::RouteParams;
//!
//! // Pattern: /job/:id — matched path: /job/42
//! let mut params = RouteParams::new();
//! params.insert("id".to_string(), "42".to_string());
//!
//! assert_eq!(params.get("id"), Some(&"42".to_string()));
//! assert_eq!(params.get_as::<u32>("id"), Some(42));
//! ```

use std::collections::HashMap;

/// Parameters extracted from the dynamic segments of a matched path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    /// Create empty route parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an existing `HashMap`.
    pub fn from_map(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// Get a parameter value by key.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Get a parameter and parse it as a specific type.
    ///
    /// Returns `None` if the parameter doesn't exist or cannot be parsed.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.params.get(key)?.parse().ok()
    }

    /// Insert or overwrite a parameter.
    pub fn insert(&mut self, key: String, value: String) {
        self.params.insert(key, value);
    }

    /// Return `true` if the given key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Iterate over all `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.params.iter()
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
