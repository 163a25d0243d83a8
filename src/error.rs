//! Error types for route-table registration and role parsing.
//!
//! The decision core itself is total --- guard evaluation, history mutation,
//! and redirect policy always produce a defined outcome and never return
//! errors. The only fallible surfaces are the ones that accept free-form
//! strings from the host application:
//!
//! - [`PatternError`] — a parameterized route pattern failed validation when
//!   registered with the [`RouteRegistry`](crate::RouteRegistry).
//! - [`UnknownRoleError`] — a role name did not parse into a
//!   [`Role`](crate::Role).
//!
//! # Examples
//!
//! ```
//! use marketplace_navigator::{RoutePattern, PatternError};
//!
//! let err = RoutePattern::parse("/job/:").unwrap_err();
//! assert!(matches!(err, PatternError::MissingParamName { .. }));
//! ```

use std::fmt;

// ============================================================================
// PatternError
// ============================================================================

/// Validation failure while parsing a parameterized route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern was empty (or just `/`), which can never classify a path.
    Empty,

    /// A `:` placeholder segment had no name (e.g. `/job/:`).
    MissingParamName {
        /// The offending pattern as written.
        pattern: String,
    },

    /// The same placeholder name appeared twice (e.g. `/job/:id/item/:id`).
    DuplicateParam {
        /// The offending pattern as written.
        pattern: String,
        /// The placeholder name that repeated.
        name: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Empty => {
                write!(f, "Route pattern is empty")
            }
            PatternError::MissingParamName { pattern } => {
                write!(f, "Route pattern '{}' has an unnamed parameter", pattern)
            }
            PatternError::DuplicateParam { pattern, name } => {
                write!(
                    f,
                    "Route pattern '{}' repeats parameter ':{}'",
                    pattern, name
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}

// ============================================================================
// UnknownRoleError
// ============================================================================

/// A role name that is not one of `client`, `artisan`, or `admin`.
///
/// Returned by the [`FromStr`](std::str::FromStr) impl on
/// [`Role`](crate::Role).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoleError {
    /// The name that failed to parse.
    pub name: String,
}

impl fmt::Display for UnknownRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown role: '{}'", self.name)
    }
}

impl std::error::Error for UnknownRoleError {}

// ============================================================================
// Tests
// ============================================================================
