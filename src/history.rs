//! Bounded navigation history and redirect policy.
//!
//! [`NavigationHistory`] is an ordered, size-bounded log of visited paths.
//! It is **not** a hidden module-level singleton: the application root
//! constructs exactly one instance (usually inside a
//! [`Navigator`](crate::Navigator)) and passes it down, which preserves
//! single-instance-per-running-app semantics while keeping every test free
//! to build its own.
//!
//! Alongside the log live the two pure policy functions of this crate:
//!
//! - [`smart_redirect`] — maps `(role, current path)` to a single target
//!   path, used after login, after logout, and after an access denial.
//! - [`suggested_routes`] — the fixed role-dependent navigation menu.
//!
//! All operations are total: nothing here can fail, and unbounded growth is
//! prevented structurally by the ring bound rather than by error signaling.
//!
//! # Example
//!
//! ```
//! use marketplace_navigator::NavigationHistory;
//!
//! let mut history = NavigationHistory::new();
//! history.add_route("/");
//! history.add_route("/search");
//! history.add_route("/search"); // adjacent repeat collapses
//!
//! assert_eq!(history.entries(), vec!["/", "/search"]);
//! assert_eq!(history.previous_route(), Some("/"));
//! ```

use crate::registry::{is_protected_path, normalize_path, paths};
use crate::session::Role;
use crate::{debug_log, info_log, trace_log};
use std::collections::VecDeque;

/// Default bound on the number of retained history entries.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

// ============================================================================
// Smart redirect policy
// ============================================================================

/// Compute the context-aware redirect target for a `(role, current path)`
/// pair.
///
/// This is a pure function — it reads no history and mutates nothing, so it
/// is independently testable:
///
/// - a role always goes to its own dashboard;
/// - no role on a protected path goes to the login screen;
/// - anything else goes to the landing page.
///
/// # Example
///
/// ```
/// use marketplace_navigator::{smart_redirect, Role};
///
/// assert_eq!(smart_redirect(Some(Role::Admin), Some("/search")), "/admin/dashboard");
/// assert_eq!(smart_redirect(None, Some("/artisan/dashboard")), "/login");
/// assert_eq!(smart_redirect(None, Some("/search")), "/");
/// ```
pub fn smart_redirect(role: Option<Role>, current_path: Option<&str>) -> &'static str {
    match role {
        Some(role) => role.dashboard_path(),
        None => match current_path {
            Some(path) if is_protected_path(path) => paths::LOGIN,
            _ => paths::HOME,
        },
    }
}

// ============================================================================
// Suggested routes
// ============================================================================

/// One entry of the suggested-routes menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestedRoute {
    /// Target path.
    pub path: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

impl SuggestedRoute {
    const fn new(path: &'static str, label: &'static str) -> Self {
        Self { path, label }
    }
}

/// The fixed navigation menu for a role.
///
/// Common routes are always included. With a role, its disjoint
/// role-specific subset follows, and the two universal routes (messages,
/// notifications) come last. With no role, only the common routes plus the
/// auth entry points (login, signup) are offered.
pub fn suggested_routes(role: Option<Role>) -> Vec<SuggestedRoute> {
    let mut routes = vec![
        SuggestedRoute::new(paths::HOME, "Home"),
        SuggestedRoute::new(paths::SEARCH, "Find artisans"),
    ];

    match role {
        None => {
            routes.push(SuggestedRoute::new(paths::LOGIN, "Log in"));
            routes.push(SuggestedRoute::new(paths::SIGNUP, "Sign up"));
        }
        Some(Role::Client) => {
            routes.push(SuggestedRoute::new(paths::CLIENT_DASHBOARD, "My dashboard"));
        }
        Some(Role::Artisan) => {
            routes.push(SuggestedRoute::new(paths::ARTISAN_DASHBOARD, "My dashboard"));
            routes.push(SuggestedRoute::new(paths::VERIFICATION, "Verification"));
        }
        Some(Role::Admin) => {
            routes.push(SuggestedRoute::new(paths::ADMIN_DASHBOARD, "Admin dashboard"));
        }
    }

    if role.is_some() {
        routes.push(SuggestedRoute::new(paths::MESSAGES, "Messages"));
        routes.push(SuggestedRoute::new(paths::NOTIFICATIONS, "Notifications"));
    }

    routes
}

// ============================================================================
// NavigationHistory
// ============================================================================

/// Ordered, size-bounded log of visited paths.
///
/// Insertion order is visitation order. No two *consecutive* entries are
/// ever equal (idempotent re-visits collapse); once the bound is exceeded
/// the oldest entry is evicted FIFO — a ring, not an unbounded log. The
/// history lives for the application lifetime and is cleared on logout so a
/// previous session's trail can never leak into the next session's redirect
/// decisions.
#[derive(Debug, Clone)]
pub struct NavigationHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl NavigationHistory {
    /// Create an empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history with a custom capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "History capacity must be non-zero");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Create a history seeded with the path observable at creation time.
    pub fn seeded(initial_path: &str) -> Self {
        let mut history = Self::new();
        history.add_route(initial_path);
        history
    }

    /// Record a visited path.
    ///
    /// The path is normalized first. Exact consecutive repeats are no-ops;
    /// repeats elsewhere in the log are kept (this is adjacent collapse,
    /// not whole-history deduplication). Evicts the oldest entry once the
    /// bound is exceeded. Always succeeds.
    pub fn add_route(&mut self, path: &str) {
        let path = normalize_path(path);
        if self.entries.back() == Some(&path) {
            trace_log!("Skipping consecutive repeat of '{}'", path);
            return;
        }

        self.entries.push_back(path);
        if self.entries.len() > self.capacity {
            let evicted = self.entries.pop_front();
            trace_log!("History bound reached, evicted {:?}", evicted);
        }
        debug_log!(
            "Recorded route (history depth {}/{})",
            self.entries.len(),
            self.capacity
        );
    }

    /// The route visited immediately before the current one.
    ///
    /// `None` when the history holds fewer than two entries.
    pub fn previous_route(&self) -> Option<&str> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries
            .get(self.entries.len() - 2)
            .map(String::as_str)
    }

    /// The most recently recorded path, if any.
    pub fn current_path(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    /// A defensive copy of the visited paths, oldest first.
    ///
    /// Caller mutation of the returned vector never affects the internal
    /// log.
    pub fn entries(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing has been recorded (or the log was cleared).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The ring bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Empty the log.
    ///
    /// Called on logout; the history is never reseeded here.
    pub fn clear(&mut self) {
        info_log!("Clearing navigation history ({} entries)", self.entries.len());
        self.entries.clear();
    }

    /// Evaluate the [`smart_redirect`] policy at the current recorded path.
    pub fn redirect_from_here(&self, role: Option<Role>) -> &'static str {
        smart_redirect(role, self.current_path())
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_order() {
        let mut history = NavigationHistory::new();
        history.add_route("/");
        history.add_route("/search");
        history.add_route("/job/1");

        assert_eq!(history.entries(), vec!["/", "/search", "/job/1"]);
        assert_eq!(history.current_path(), Some("/job/1"));
    }

    #[test]
    fn test_adjacent_repeat_collapses() {
        let mut history = NavigationHistory::new();
        history.add_route("/");
        history.add_route("/search");
        history.add_route("/search");

        assert_eq!(history.entries(), vec!["/", "/search"]);

        history.add_route("/job/1");
        assert_eq!(history.entries(), vec!["/", "/search", "/job/1"]);
    }

    #[test]
    fn test_non_adjacent_repeat_is_kept() {
        let mut history = NavigationHistory::new();
        history.add_route("/search");
        history.add_route("/job/1");
        history.add_route("/search");

        assert_eq!(history.entries(), vec!["/search", "/job/1", "/search"]);
    }

    #[test]
    fn test_ring_bound_evicts_oldest() {
        let mut history = NavigationHistory::with_capacity(3);
        history.add_route("/a");
        history.add_route("/b");
        history.add_route("/c");
        history.add_route("/d");

        assert_eq!(history.len(), 3);
        assert_eq!(history.entries(), vec!["/b", "/c", "/d"]);
    }

    #[test]
    fn test_bound_holds_for_any_sequence() {
        let mut history = NavigationHistory::new();
        for i in 0..100 {
            history.add_route(&format!("/job/{i}"));
        }
        assert_eq!(history.len(), DEFAULT_HISTORY_CAPACITY);

        // No two adjacent entries are equal.
        let entries = history.entries();
        assert!(entries.windows(2).all(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn test_previous_route() {
        let mut history = NavigationHistory::new();
        assert_eq!(history.previous_route(), None);

        history.add_route("/");
        assert_eq!(history.previous_route(), None);

        history.add_route("/search");
        assert_eq!(history.previous_route(), Some("/"));

        history.add_route("/job/1");
        assert_eq!(history.previous_route(), Some("/search"));
    }

    #[test]
    fn test_entries_is_a_defensive_copy() {
        let mut history = NavigationHistory::new();
        history.add_route("/");
        history.add_route("/search");

        let mut copy = history.entries();
        copy.clear();
        copy.push("/poisoned".to_string());

        assert_eq!(history.entries(), vec!["/", "/search"]);
        assert_eq!(history.previous_route(), Some("/"));
    }

    #[test]
    fn test_clear() {
        let mut history = NavigationHistory::seeded("/search");
        history.add_route("/job/1");
        history.clear();

        assert!(history.is_empty());
        assert!(history.entries().is_empty());
        assert_eq!(history.previous_route(), None);
        assert_eq!(history.current_path(), None);
    }

    #[test]
    fn test_add_route_normalizes() {
        let mut history = NavigationHistory::new();
        history.add_route("/search?q=plumber");
        history.add_route("/search");

        // Same path after normalization — adjacent collapse applies.
        assert_eq!(history.entries(), vec!["/search"]);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_capacity_panics() {
        let _ = NavigationHistory::with_capacity(0);
    }

    // --- smart_redirect ---

    #[test]
    fn test_smart_redirect_role_goes_to_own_dashboard() {
        for path in [None, Some("/"), Some("/admin/users"), Some("/search")] {
            assert_eq!(smart_redirect(Some(Role::Admin), path), "/admin/dashboard");
            assert_eq!(
                smart_redirect(Some(Role::Artisan), path),
                "/artisan/dashboard"
            );
            assert_eq!(smart_redirect(Some(Role::Client), path), "/client/dashboard");
        }
    }

    #[test]
    fn test_smart_redirect_unauthenticated_on_protected_path() {
        assert_eq!(smart_redirect(None, Some("/dashboard")), "/login");
        assert_eq!(smart_redirect(None, Some("/admin")), "/login");
        assert_eq!(smart_redirect(None, Some("/artisan/dashboard")), "/login");
        assert_eq!(smart_redirect(None, Some("/client/dashboard")), "/login");
    }

    #[test]
    fn test_smart_redirect_unauthenticated_elsewhere() {
        assert_eq!(smart_redirect(None, Some("/search")), "/");
        assert_eq!(smart_redirect(None, Some("/")), "/");
        assert_eq!(smart_redirect(None, None), "/");
    }

    #[test]
    fn test_redirect_from_here_uses_current_path() {
        let mut history = NavigationHistory::new();
        assert_eq!(history.redirect_from_here(None), "/");

        history.add_route("/artisan/dashboard");
        assert_eq!(history.redirect_from_here(None), "/login");
        assert_eq!(history.redirect_from_here(Some(Role::Artisan)), "/artisan/dashboard");
    }

    // --- suggested_routes ---

    #[test]
    fn test_suggestions_without_role() {
        let routes = suggested_routes(None);
        let paths: Vec<_> = routes.iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/", "/search", "/login", "/signup"]);
    }

    #[test]
    fn test_suggestions_role_sets_are_disjoint() {
        let common = ["/", "/search", "/messages", "/notifications"];
        let specific = |role| {
            suggested_routes(Some(role))
                .into_iter()
                .map(|r| r.path)
                .filter(|p| !common.contains(p))
                .collect::<Vec<_>>()
        };

        let client = specific(Role::Client);
        let artisan = specific(Role::Artisan);
        let admin = specific(Role::Admin);

        for path in &client {
            assert!(!artisan.contains(path));
            assert!(!admin.contains(path));
        }
        for path in &artisan {
            assert!(!admin.contains(path));
        }
    }

    #[test]
    fn test_suggestions_universal_routes_come_last() {
        for role in Role::ALL {
            let routes = suggested_routes(Some(role));
            let tail: Vec<_> = routes[routes.len() - 2..].iter().map(|r| r.path).collect();
            assert_eq!(tail, vec!["/messages", "/notifications"]);
        }
    }

    #[test]
    fn test_suggestions_labels_present() {
        for route in suggested_routes(Some(Role::Artisan)) {
            assert!(!route.label.is_empty());
        }
    }
}
