//! The application-root navigation service.
//!
//! [`Navigator`] is the composition root of this crate: it owns the
//! [`RouteRegistry`], the [`NavigationHistory`], the [`RouteTracker`], and
//! (with the `cache` feature) the classification cache, and orchestrates
//! one navigation evaluation end to end:
//!
//! 1. **Guard** — the session snapshot and optional role constraint decide
//!    loading / redirect / render.
//! 2. **Classification** — granted paths are checked against the registry
//!    so the host's 404 fallback can take over for unknown paths.
//! 3. **Recording** — granted navigations flow through the tracker into
//!    the history, exactly once per distinct path change.
//!
//! The navigator is an explicitly constructed, dependency-injected value:
//! the application root owns exactly one and passes it down. All calls are
//! synchronous and complete before the triggering event handler returns; a
//! multi-threaded host must serialize access behind its own lock, since
//! interleaved `track` calls could violate the FIFO ordering the history
//! depends on.
//!
//! # Example
//!
//! ```
//! use marketplace_navigator::{Navigator, Role, SessionSnapshot};
//!
//! let mut navigator = Navigator::default();
//! let session = SessionSnapshot::authenticated("u1", Role::Client);
//!
//! let outcome = navigator.resolve("/client/dashboard", &session, Some(Role::Client));
//! assert!(outcome.is_render());
//! assert_eq!(navigator.history().entries(), vec!["/client/dashboard"]);
//! ```

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, RouteCache};
use crate::error::PatternError;
use crate::guard::{GuardDecision, RouteGuard};
use crate::history::{suggested_routes, NavigationHistory, SuggestedRoute};
use crate::registry::{normalize_path, RouteRegistry};
use crate::session::{Role, SessionSnapshot};
use crate::tracker::RouteTracker;
use crate::{debug_log, info_log, warn_log};

// ============================================================================
// Resolution
// ============================================================================

/// Outcome of a full navigation evaluation.
///
/// Everything a host needs to act on one navigation event: render the view,
/// keep a loading placeholder up, perform a redirect, or hand the path to
/// the 404 fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Access granted to a known route; render it.
    Render {
        /// The normalized path that was granted.
        path: String,
    },

    /// Session resolution still in flight; show a loading placeholder.
    Loading,

    /// Access denied; navigate to `to` instead.
    Redirect {
        /// Target path.
        to: String,
        /// `true` when the denied path must not remain back-navigable.
        replace: bool,
        /// Optional human-readable reason.
        reason: Option<String>,
    },

    /// Access granted, but the path matches no registered route; the host's
    /// fallback page takes over.
    NotFound {
        /// The normalized path that failed classification.
        path: String,
    },
}

impl Resolution {
    /// Check if the outcome grants rendering.
    pub fn is_render(&self) -> bool {
        matches!(self, Resolution::Render { .. })
    }

    /// Check if the outcome suspends on a loading placeholder.
    pub fn is_loading(&self) -> bool {
        matches!(self, Resolution::Loading)
    }

    /// Check if the outcome redirects.
    pub fn is_redirect(&self) -> bool {
        matches!(self, Resolution::Redirect { .. })
    }

    /// Check if the path failed route classification.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound { .. })
    }

    /// Get the redirect target, if redirecting.
    pub fn redirect_path(&self) -> Option<&str> {
        match self {
            Resolution::Redirect { to, .. } => Some(to.as_str()),
            _ => None,
        }
    }
}

// ============================================================================
// Navigator
// ============================================================================

/// Owns the route table, history, and tracker for one running application.
#[derive(Debug)]
pub struct Navigator {
    registry: RouteRegistry,
    history: NavigationHistory,
    tracker: RouteTracker,
    #[cfg(feature = "cache")]
    cache: RouteCache,
}

impl Navigator {
    /// Create a navigator over the given route table with empty history.
    pub fn new(registry: RouteRegistry) -> Self {
        Self {
            registry,
            history: NavigationHistory::new(),
            tracker: RouteTracker::new(),
            #[cfg(feature = "cache")]
            cache: RouteCache::new(),
        }
    }

    /// Create a navigator whose history is seeded with the path observable
    /// at creation time.
    pub fn seeded(registry: RouteRegistry, initial_path: &str) -> Self {
        let mut navigator = Self::new(registry);
        navigator.track(initial_path);
        navigator
    }

    /// The route table.
    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// The navigation history.
    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    /// Register a literal path, invalidating cached classifications.
    pub fn add_literal(&mut self, path: impl Into<String>) {
        self.registry.add_literal(path);
        self.invalidate_cache();
    }

    /// Register a parameterized pattern, invalidating cached
    /// classifications on success.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the pattern fails validation; the
    /// route table and cache are unchanged in that case.
    pub fn add_pattern(&mut self, pattern: &str) -> Result<(), PatternError> {
        self.registry.add_pattern(pattern)?;
        self.invalidate_cache();
        Ok(())
    }

    // ========================================================================
    // Navigation pipeline
    // ========================================================================

    /// Evaluate one navigation event end to end.
    ///
    /// Runs the guard for `required_role` against `session`; granted
    /// navigations are recorded in the history and classified against the
    /// registry for the 404 fallback. Denied or suspended navigations are
    /// **not** recorded — a path the user never saw must not influence
    /// later redirect decisions.
    pub fn resolve(
        &mut self,
        path: &str,
        session: &SessionSnapshot,
        required_role: Option<Role>,
    ) -> Resolution {
        let normalized = normalize_path(path);
        debug_log!("Resolving navigation to '{}'", normalized);

        match RouteGuard::new(required_role).evaluate(session) {
            GuardDecision::Loading => Resolution::Loading,
            GuardDecision::Redirect { to, replace, reason } => {
                warn_log!(
                    "Navigation to '{}' denied, redirecting to '{}'",
                    normalized,
                    to
                );
                Resolution::Redirect {
                    to,
                    replace,
                    reason,
                }
            }
            GuardDecision::Render => {
                self.track(&normalized);
                if self.is_known_route(&normalized) {
                    Resolution::Render { path: normalized }
                } else {
                    debug_log!("'{}' matches no registered route", normalized);
                    Resolution::NotFound { path: normalized }
                }
            }
        }
    }

    /// Evaluate the guard only, without recording anything.
    pub fn check_access(
        &self,
        session: &SessionSnapshot,
        required_role: Option<Role>,
    ) -> GuardDecision {
        RouteGuard::new(required_role).evaluate(session)
    }

    /// Observe a navigation event (the root-mounted tracker hook).
    ///
    /// Returns `true` when a distinct path change was recorded.
    pub fn track(&mut self, path: &str) -> bool {
        self.tracker.observe(path, &mut self.history)
    }

    /// The route visited immediately before the current one.
    pub fn previous_route(&self) -> Option<&str> {
        self.history.previous_route()
    }

    /// Classify a path against the route table.
    ///
    /// With the `cache` feature, repeated lookups are served from an LRU
    /// cache that is invalidated on registration.
    pub fn is_known_route(&mut self, path: &str) -> bool {
        let path = normalize_path(path);

        #[cfg(feature = "cache")]
        if let Some(known) = self.cache.get(&path) {
            return known;
        }

        let known = self.registry.is_known_route(&path);

        #[cfg(feature = "cache")]
        self.cache.set(path, known);

        known
    }

    // ========================================================================
    // Session transitions
    // ========================================================================

    /// The path to land on after a successful login.
    pub fn post_login_redirect(&self, role: Role) -> &'static str {
        self.history.redirect_from_here(Some(role))
    }

    /// End the session: clear the history and tracker, and return the path
    /// to land on, computed from the pre-logout location.
    pub fn logout(&mut self) -> &'static str {
        let target = self.history.redirect_from_here(None);
        self.history.clear();
        self.tracker.reset();
        info_log!("Logged out, redirecting to '{}'", target);
        target
    }

    /// The fixed navigation menu for a role (see
    /// [`suggested_routes`](crate::suggested_routes)).
    pub fn menu(&self, role: Option<Role>) -> Vec<SuggestedRoute> {
        suggested_routes(role)
    }

    /// Classification-cache statistics.
    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> &CacheStats {
        self.cache.stats()
    }

    fn invalidate_cache(&mut self) {
        #[cfg(feature = "cache")]
        self.cache.clear();
    }
}

impl Default for Navigator {
    /// A navigator over the marketplace route table.
    fn default() -> Self {
        Self::new(RouteRegistry::with_defaults())
    }
}

// ============================================================================
// Tests
// ============================================================================
