//! Route registry and typed path patterns.
//!
//! The registry is a static classification table: it answers "is this a
//! known application route?" for the 404/fallback collaborator. It is never
//! used for dispatch — pages are wired up by the host, not by this crate.
//!
//! Two kinds of entries:
//!
//! - **Literal paths** — matched exactly after normalization.
//! - **[`RoutePattern`]s** — paths with `:name` placeholder segments,
//!   matched segment-by-segment with explicit parameter extraction
//!   (e.g. `/job/:id/track` matches `/job/abc123/track`).
//!
//! # Design
//!
//! - Split paths by `/` into segments.
//! - Match literal segments exactly.
//! - Extract `:param` segments into [`RouteParams`].
//! - No regex, no wildcards — the route set is a small closed table.
//!
//! # Example
//!
//! ```
//! use marketplace_navigator::RouteRegistry;
//!
//! let registry = RouteRegistry::default();
//! assert!(registry.is_known_route("/job/abc123"));
//! assert!(registry.is_known_route("/job/abc123/track"));
//! assert!(!registry.is_known_route("/unknown/path"));
//!
//! let m = registry.match_path("/artisan/profile/42").unwrap();
//! assert_eq!(m.params.get("id"), Some(&"42".to_string()));
//! ```

use crate::error::PatternError;
use crate::params::RouteParams;
use crate::{debug_log, trace_log};

// ============================================================================
// Well-known application paths
// ============================================================================

/// Literal paths of the marketplace application.
///
/// The exact set is application configuration, not a core invariant —
/// hosts can extend the registry with [`RouteRegistry::add_literal`] and
/// [`RouteRegistry::add_pattern`].
pub mod paths {
    /// Landing page.
    pub const HOME: &str = "/";
    /// Account creation.
    pub const SIGNUP: &str = "/signup";
    /// Login screen; target of every unauthenticated redirect.
    pub const LOGIN: &str = "/login";
    /// Password recovery.
    pub const PASSWORD_RECOVERY: &str = "/forgot-password";
    /// Client dashboard.
    pub const CLIENT_DASHBOARD: &str = "/client/dashboard";
    /// Artisan dashboard.
    pub const ARTISAN_DASHBOARD: &str = "/artisan/dashboard";
    /// Admin dashboard.
    pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
    /// Conversations.
    pub const MESSAGES: &str = "/messages";
    /// Notification center.
    pub const NOTIFICATIONS: &str = "/notifications";
    /// Artisan identity verification.
    pub const VERIFICATION: &str = "/verification";
    /// Artisan search.
    pub const SEARCH: &str = "/search";
}

/// Parameterized patterns of the marketplace application.
const DEFAULT_PATTERNS: [&str; 4] = [
    "/artisan/profile/:id",
    "/job/:id",
    "/job/:id/track",
    "/payment/:id",
];

/// Prefixes that only make sense inside an authenticated session.
///
/// Used by the smart redirect: an unauthenticated visit to one of these
/// goes to the login screen rather than the landing page.
const PROTECTED_PREFIXES: [&str; 4] = ["/dashboard", "/admin", "/artisan", "/client"];

// ============================================================================
// Path helpers
// ============================================================================

/// Normalize a raw path for classification and history recording.
///
/// Strips the query string and fragment, guarantees a leading `/`, and
/// drops trailing slashes (the root path stays `/`).
///
/// # Example
///
/// ```
/// use marketplace_navigator::normalize_path;
///
/// assert_eq!(normalize_path("/search?q=plumber"), "/search");
/// assert_eq!(normalize_path("/messages/"), "/messages");
/// assert_eq!(normalize_path("/"), "/");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    let without_query = match trimmed.split_once(|c| c == '?' || c == '#') {
        Some((head, _)) => head,
        None => trimmed,
    };

    let mut out = if without_query.starts_with('/') {
        without_query.to_string()
    } else {
        format!("/{without_query}")
    };

    while out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}

/// Split a path into non-empty segments.
fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Return `true` if `path` sits under one of the protected prefixes
/// (`/dashboard`, `/admin`, `/artisan`, `/client`).
///
/// The test is segment-aware: `/client/dashboard` is protected,
/// `/clients` is not.
pub fn is_protected_path(path: &str) -> bool {
    let path = normalize_path(path);
    PROTECTED_PREFIXES.iter().any(|prefix| {
        path.starts_with(prefix)
            && (path.len() == prefix.len() || path.as_bytes()[prefix.len()] == b'/')
    })
}

// ============================================================================
// RoutePattern
// ============================================================================

/// One segment of a parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Must match the path segment exactly.
    Literal(String),
    /// Matches any path segment, capturing it under the given name.
    Param(String),
}

/// A typed path template with `:name` placeholder segments.
///
/// Patterns are parsed once at registration time; matching is a plain
/// segment walk with no allocation on the miss path.
///
/// # Example
///
/// ```
/// use marketplace_navigator::RoutePattern;
///
/// let pattern = RoutePattern::parse("/job/:id/track").unwrap();
/// assert!(pattern.matches("/job/abc123/track").is_some());
/// assert!(pattern.matches("/job/abc123").is_none());
///
/// let params = pattern.matches("/job/7/track").unwrap();
/// assert_eq!(params.get_as::<u32>("id"), Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    pattern: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern string into a typed template.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the pattern is empty, a placeholder has
    /// no name (`/job/:`), or a placeholder name repeats.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let normalized = normalize_path(pattern);
        if normalized == "/" {
            return Err(PatternError::Empty);
        }

        let mut segments = Vec::new();
        for segment in split_path(&normalized) {
            if let Some(name) = segment.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::MissingParamName {
                        pattern: pattern.to_string(),
                    });
                }
                let duplicate = segments
                    .iter()
                    .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                if duplicate {
                    return Err(PatternError::DuplicateParam {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                    });
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Literal(segment.to_string()));
            }
        }

        Ok(Self {
            pattern: normalized,
            segments,
        })
    }

    /// The normalized pattern string this template was parsed from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Names of the placeholder segments, in path order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a path against this template, extracting placeholder values.
    ///
    /// The segment counts must agree exactly — there is no prefix or
    /// wildcard matching.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let path = normalize_path(path);
        let path_segments = split_path(&path);
        if path_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (pattern_seg, path_seg) in self.segments.iter().zip(path_segments) {
            match pattern_seg {
                Segment::Literal(literal) => {
                    if literal != path_seg {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), path_seg.to_string());
                }
            }
        }

        Some(params)
    }
}

// ============================================================================
// RouteRegistry
// ============================================================================

/// Result of matching a path against a registered pattern.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    /// The pattern that matched.
    pub pattern: &'a RoutePattern,
    /// Extracted placeholder values.
    pub params: RouteParams,
}

/// Static table of valid application paths.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    literals: Vec<String>,
    patterns: Vec<RoutePattern>,
}

impl RouteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            literals: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Create the marketplace application's route table: the literal paths
    /// in [`paths`] plus the job/profile/payment detail patterns.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for literal in [
            paths::HOME,
            paths::SIGNUP,
            paths::LOGIN,
            paths::PASSWORD_RECOVERY,
            paths::CLIENT_DASHBOARD,
            paths::ARTISAN_DASHBOARD,
            paths::ADMIN_DASHBOARD,
            paths::MESSAGES,
            paths::NOTIFICATIONS,
            paths::VERIFICATION,
            paths::SEARCH,
        ] {
            registry.add_literal(literal);
        }
        for pattern in DEFAULT_PATTERNS {
            registry
                .add_pattern(pattern)
                .expect("default route table patterns are valid");
        }
        registry
    }

    /// Register a literal path. Re-registering an existing path is a no-op.
    pub fn add_literal(&mut self, path: impl Into<String>) {
        let path = normalize_path(&path.into());
        if !self.literals.contains(&path) {
            debug_log!("Registered route '{}'", path);
            self.literals.push(path);
        }
    }

    /// Register a parameterized pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the pattern fails validation; the
    /// registry is unchanged in that case.
    pub fn add_pattern(&mut self, pattern: &str) -> Result<(), PatternError> {
        let parsed = RoutePattern::parse(pattern)?;
        if !self.patterns.contains(&parsed) {
            debug_log!("Registered route pattern '{}'", parsed.pattern());
            self.patterns.push(parsed);
        }
        Ok(())
    }

    /// Return `true` if `path` exactly matches a registered literal or any
    /// registered pattern.
    pub fn is_known_route(&self, path: &str) -> bool {
        let path = normalize_path(path);
        if self.literals.iter().any(|literal| *literal == path) {
            trace_log!("'{}' matched a literal route", path);
            return true;
        }
        self.patterns.iter().any(|p| p.matches(&path).is_some())
    }

    /// Match `path` against the registered patterns, returning the first
    /// match with its extracted parameters.
    ///
    /// Literal routes yield no parameters and are not reported here; use
    /// [`is_known_route`](Self::is_known_route) for plain classification.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
        let path = normalize_path(path);
        self.patterns.iter().find_map(|pattern| {
            pattern.matches(&path).map(|params| RouteMatch {
                pattern,
                params,
            })
        })
    }

    /// Registered literal paths.
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Registered patterns.
    pub fn patterns(&self) -> &[RoutePattern] {
        &self.patterns
    }
}

impl Default for RouteRegistry {
    /// The marketplace application's route table (see
    /// [`with_defaults`](Self::with_defaults)); use [`new`](Self::new) for
    /// an empty registry.
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// Tests
// ============================================================================
