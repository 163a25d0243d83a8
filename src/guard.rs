//! Route guard: gates rendering of a protected view.
//!
//! The guard is evaluated on **every** render of a protected view, against
//! the [`SessionSnapshot`] the host supplies for that render. It decides
//! one of three things — show a loading placeholder, redirect elsewhere, or
//! render the protected content — and returns that decision as a value.
//! Diagnostic prints never drive control flow; the caller gets the
//! [`GuardDecision`] to inspect or log.
//!
//! # Decision order
//!
//! 1. Session still loading → [`GuardDecision::Loading`] (suspended, never
//!    a denial; re-evaluated on the next snapshot).
//! 2. Not authenticated → redirect to `/login` with **replace** semantics,
//!    so the denied path never remains back-navigable.
//! 3. A required role is set and the user's role differs → redirect to the
//!    user's **own** dashboard (a denied-but-authenticated user is never
//!    sent to the login screen). An authenticated session with no
//!    resolvable role falls back to `/login` instead of failing.
//! 4. Otherwise → render.
//!
//! The guard holds no mutable state and caches nothing: the session can
//! flip from authenticated to unauthenticated at any time (token expiry),
//! so `Authorized` is not a terminal state.
//!
//! # Example
//!
//! ```
//! use marketplace_navigator::{GuardDecision, Role, RouteGuard, SessionSnapshot};
//!
//! let guard = RouteGuard::require_role(Role::Artisan);
//!
//! let session = SessionSnapshot::authenticated("u1", Role::Artisan);
//! assert!(guard.evaluate(&session).is_render());
//!
//! let session = SessionSnapshot::authenticated("u2", Role::Client);
//! let decision = guard.evaluate(&session);
//! assert_eq!(decision.redirect_path(), Some("/client/dashboard"));
//! ```

use crate::registry::paths;
use crate::session::{Role, SessionSnapshot};
use crate::{debug_log, trace_log, warn_log};

// ============================================================================
// GuardDecision
// ============================================================================

/// Outcome of one guard evaluation.
///
/// Computed fresh on every evaluation and never stored — it carries no
/// identity of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session resolution is still in flight; show a loading placeholder
    /// and re-evaluate on the next snapshot.
    Loading,

    /// Do not render; navigate to `to` instead.
    Redirect {
        /// Target path.
        to: String,
        /// `true` when the denied path must replace the current history
        /// entry instead of pushing a new one (so it is not back-navigable).
        replace: bool,
        /// Optional human-readable reason for the redirect.
        reason: Option<String>,
    },

    /// Access granted; render the protected content unchanged.
    Render,
}

impl GuardDecision {
    /// Create a redirect decision.
    pub fn redirect(to: impl Into<String>) -> Self {
        Self::Redirect {
            to: to.into(),
            replace: false,
            reason: None,
        }
    }

    /// Create a redirect decision with a human-readable reason.
    pub fn redirect_with_reason(to: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Redirect {
            to: to.into(),
            replace: false,
            reason: Some(reason.into()),
        }
    }

    /// Mark this redirect as replacing the current history entry.
    ///
    /// No-op on non-redirect decisions.
    pub fn replacing(mut self) -> Self {
        if let Self::Redirect { replace, .. } = &mut self {
            *replace = true;
        }
        self
    }

    /// Check if the decision suspends rendering on a loading placeholder.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if the decision redirects away from the protected view.
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }

    /// Check if the decision grants rendering.
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }

    /// Get the redirect target, if this is a redirect decision.
    pub fn redirect_path(&self) -> Option<&str> {
        match self {
            Self::Redirect { to, .. } => Some(to.as_str()),
            _ => None,
        }
    }

    /// `true` when this redirect must not leave the denied path
    /// back-navigable.
    pub fn replaces_history(&self) -> bool {
        matches!(self, Self::Redirect { replace: true, .. })
    }
}

// ============================================================================
// RouteGuard
// ============================================================================

/// Access gate for a protected view, with an optional role constraint.
///
/// Statically bound to the view it wraps; all session state arrives through
/// [`evaluate`](Self::evaluate).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteGuard {
    required_role: Option<Role>,
}

impl RouteGuard {
    /// Guard that admits any authenticated user.
    pub const fn any_authenticated() -> Self {
        Self {
            required_role: None,
        }
    }

    /// Guard that admits only users holding `role`.
    pub const fn require_role(role: Role) -> Self {
        Self {
            required_role: Some(role),
        }
    }

    /// Guard with an optional role constraint.
    pub const fn new(required_role: Option<Role>) -> Self {
        Self { required_role }
    }

    /// The role constraint, if any.
    pub const fn required_role(&self) -> Option<Role> {
        self.required_role
    }

    /// Evaluate the guard against a session snapshot.
    ///
    /// Pure and re-entrant: no internal state, no caching, total over every
    /// input — including snapshots that violate the upstream data-model
    /// invariants.
    pub fn evaluate(&self, session: &SessionSnapshot) -> GuardDecision {
        if session.is_loading {
            trace_log!("Session still resolving, suspending access decision");
            return GuardDecision::Loading;
        }

        if !session.is_authenticated {
            debug_log!("Unauthenticated, redirecting to '{}'", paths::LOGIN);
            return GuardDecision::redirect_with_reason(paths::LOGIN, "Authentication required")
                .replacing();
        }

        if let Some(required) = self.required_role {
            match session.role() {
                Some(role) if role == required => {}
                Some(role) => {
                    debug_log!(
                        "Role '{}' cannot access a '{}' view, redirecting to own dashboard",
                        role,
                        required
                    );
                    return GuardDecision::redirect_with_reason(
                        role.dashboard_path(),
                        format!("Requires '{required}' role"),
                    )
                    .replacing();
                }
                None => {
                    // Authenticated without an identity violates the session
                    // invariant; treat it as not logged in.
                    warn_log!("Authenticated session without a resolvable role");
                    return GuardDecision::redirect_with_reason(
                        paths::LOGIN,
                        "Session has no resolvable role",
                    )
                    .replacing();
                }
            }
        }

        GuardDecision::Render
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserIdentity;

    #[test]
    fn test_loading_always_suspends() {
        // Loading wins regardless of the other fields or the constraint.
        let session = SessionSnapshot {
            is_loading: true,
            is_authenticated: true,
            user: Some(UserIdentity::new("u1", Role::Admin)),
        };

        assert!(RouteGuard::any_authenticated()
            .evaluate(&session)
            .is_loading());
        assert!(RouteGuard::require_role(Role::Client)
            .evaluate(&session)
            .is_loading());
        assert!(RouteGuard::any_authenticated()
            .evaluate(&SessionSnapshot::loading())
            .is_loading());
    }

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        let session = SessionSnapshot::signed_out();

        for guard in [
            RouteGuard::any_authenticated(),
            RouteGuard::require_role(Role::Admin),
        ] {
            let decision = guard.evaluate(&session);
            assert_eq!(decision.redirect_path(), Some("/login"));
            assert!(decision.replaces_history());
        }
    }

    #[test]
    fn test_authenticated_without_constraint_renders() {
        for role in Role::ALL {
            let session = SessionSnapshot::authenticated("u1", role);
            assert!(RouteGuard::any_authenticated()
                .evaluate(&session)
                .is_render());
        }
    }

    #[test]
    fn test_matching_role_renders() {
        let session = SessionSnapshot::authenticated("u1", Role::Artisan);
        let decision = RouteGuard::require_role(Role::Artisan).evaluate(&session);
        assert_eq!(decision, GuardDecision::Render);
    }

    #[test]
    fn test_wrong_role_goes_to_own_dashboard() {
        let session = SessionSnapshot::authenticated("u1", Role::Client);
        let decision = RouteGuard::require_role(Role::Artisan).evaluate(&session);

        // Own dashboard — not /login, not the required role's dashboard.
        assert_eq!(decision.redirect_path(), Some("/client/dashboard"));
        assert!(decision.replaces_history());
    }

    #[test]
    fn test_invariant_violation_falls_back_to_login() {
        let session = SessionSnapshot {
            is_loading: false,
            is_authenticated: true,
            user: None,
        };

        let decision = RouteGuard::require_role(Role::Admin).evaluate(&session);
        assert_eq!(decision.redirect_path(), Some("/login"));
    }

    #[test]
    fn test_reevaluation_follows_snapshot_changes() {
        // No stale grants: the same guard flips its answer when the
        // session flips underneath it.
        let guard = RouteGuard::require_role(Role::Client);

        let session = SessionSnapshot::authenticated("u1", Role::Client);
        assert!(guard.evaluate(&session).is_render());

        let expired = SessionSnapshot::signed_out();
        assert_eq!(guard.evaluate(&expired).redirect_path(), Some("/login"));

        let session = SessionSnapshot::authenticated("u1", Role::Client);
        assert!(guard.evaluate(&session).is_render());
    }

    #[test]
    fn test_decision_helpers() {
        assert!(GuardDecision::Render.is_render());
        assert!(!GuardDecision::Render.is_redirect());
        assert_eq!(GuardDecision::Render.redirect_path(), None);
        assert!(!GuardDecision::Render.replaces_history());

        let redirect = GuardDecision::redirect("/login");
        assert!(redirect.is_redirect());
        assert!(!redirect.replaces_history());
        assert!(redirect.replacing().replaces_history());

        let with_reason = GuardDecision::redirect_with_reason("/login", "Authentication required");
        match with_reason {
            GuardDecision::Redirect { to, reason, .. } => {
                assert_eq!(to, "/login");
                assert_eq!(reason.as_deref(), Some("Authentication required"));
            }
            _ => panic!("Expected Redirect"),
        }

        // replacing() is a no-op on non-redirects.
        assert_eq!(GuardDecision::Loading.replacing(), GuardDecision::Loading);
    }
}
