//! Integration tests for the access-control pipeline: guard decisions,
//! full navigation resolution, and the login/logout transitions.

use marketplace_navigator::{
    GuardDecision, Navigator, Resolution, Role, RouteGuard, SessionSnapshot, UserIdentity,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---- Guard state machine ----

#[test]
fn loading_suspends_every_decision() {
    init_logging();

    // Loading wins even over an otherwise fully authorized snapshot.
    let session = SessionSnapshot {
        is_loading: true,
        is_authenticated: true,
        user: Some(UserIdentity::new("u1", Role::Admin)),
    };

    for guard in [
        RouteGuard::any_authenticated(),
        RouteGuard::require_role(Role::Admin),
        RouteGuard::require_role(Role::Client),
    ] {
        assert_eq!(guard.evaluate(&session), GuardDecision::Loading);
    }
}

#[test]
fn unauthenticated_always_goes_to_login() {
    init_logging();
    let session = SessionSnapshot::signed_out();

    for guard in [
        RouteGuard::any_authenticated(),
        RouteGuard::require_role(Role::Artisan),
    ] {
        let decision = guard.evaluate(&session);
        assert_eq!(decision.redirect_path(), Some("/login"));
        // Replace semantics: the denied path must not stay back-navigable.
        assert!(decision.replaces_history());
    }
}

#[test]
fn wrong_role_lands_on_own_dashboard() {
    init_logging();
    let session = SessionSnapshot::authenticated("u1", Role::Client);
    let decision = RouteGuard::require_role(Role::Artisan).evaluate(&session);

    assert_eq!(decision.redirect_path(), Some("/client/dashboard"));
    assert!(!decision.is_render());
}

#[test]
fn every_role_pair_resolves_to_a_defined_outcome() {
    init_logging();

    // Total function: every (held role, required role) combination has a
    // defined outcome — own dashboard on mismatch, render on match.
    for held in Role::ALL {
        let session = SessionSnapshot::authenticated("u1", held);
        for required in Role::ALL {
            let decision = RouteGuard::require_role(required).evaluate(&session);
            if held == required {
                assert!(decision.is_render());
            } else {
                assert_eq!(decision.redirect_path(), Some(held.dashboard_path()));
            }
        }
    }
}

#[test]
fn session_expiry_revokes_a_previous_grant() {
    init_logging();
    let guard = RouteGuard::require_role(Role::Admin);

    let live = SessionSnapshot::authenticated("u1", Role::Admin);
    assert!(guard.evaluate(&live).is_render());

    // Token expiry: the snapshot flips underneath the same guard.
    let expired = SessionSnapshot::signed_out();
    assert_eq!(guard.evaluate(&expired).redirect_path(), Some("/login"));
}

// ---- Navigator pipeline ----

#[test]
fn granted_navigation_renders_and_records() {
    init_logging();
    let mut navigator = Navigator::default();
    let session = SessionSnapshot::authenticated("u1", Role::Artisan);

    let outcome = navigator.resolve("/artisan/dashboard", &session, Some(Role::Artisan));
    assert_eq!(
        outcome,
        Resolution::Render {
            path: "/artisan/dashboard".to_string()
        }
    );

    let outcome = navigator.resolve("/messages", &session, None);
    assert!(outcome.is_render());
    assert_eq!(navigator.previous_route(), Some("/artisan/dashboard"));
}

#[test]
fn denied_navigation_leaves_no_trace() {
    init_logging();
    let mut navigator = Navigator::default();

    let outcome = navigator.resolve(
        "/admin/dashboard",
        &SessionSnapshot::signed_out(),
        Some(Role::Admin),
    );
    assert!(outcome.is_redirect());
    assert!(navigator.history().is_empty());

    let outcome = navigator.resolve("/messages", &SessionSnapshot::loading(), None);
    assert!(outcome.is_loading());
    assert!(navigator.history().is_empty());
}

#[test]
fn unknown_path_falls_through_to_not_found() {
    init_logging();
    let mut navigator = Navigator::default();
    let session = SessionSnapshot::authenticated("u1", Role::Client);

    let outcome = navigator.resolve("/totally/unknown", &session, None);
    assert_eq!(
        outcome,
        Resolution::NotFound {
            path: "/totally/unknown".to_string()
        }
    );

    // The guard, not the registry, decides access: an unauthenticated user
    // never reaches the 404 fallback.
    let outcome = navigator.resolve("/totally/unknown", &SessionSnapshot::signed_out(), None);
    assert_eq!(outcome.redirect_path(), Some("/login"));
}

// ---- Login / logout transitions ----

#[test]
fn post_login_redirect_targets_the_role_dashboard() {
    init_logging();
    let mut navigator = Navigator::default();
    navigator.track("/login");

    assert_eq!(navigator.post_login_redirect(Role::Client), "/client/dashboard");
    assert_eq!(navigator.post_login_redirect(Role::Artisan), "/artisan/dashboard");
    assert_eq!(navigator.post_login_redirect(Role::Admin), "/admin/dashboard");
}

#[test]
fn logout_clears_history_and_computes_target_from_location() {
    init_logging();
    let mut navigator = Navigator::default();
    let session = SessionSnapshot::authenticated("u1", Role::Admin);

    navigator.resolve("/search", &session, None);
    navigator.resolve("/admin/dashboard", &session, Some(Role::Admin));

    // Leaving a protected view → login screen; the trail is gone.
    assert_eq!(navigator.logout(), "/login");
    assert!(navigator.history().is_empty());
    assert_eq!(navigator.previous_route(), None);

    // A fresh session starts with an empty trail: logging out on a public
    // page goes to the landing page.
    navigator.track("/search");
    assert_eq!(navigator.logout(), "/");
}

#[test]
fn previous_session_trail_never_leaks() {
    init_logging();
    let mut navigator = Navigator::default();
    let admin = SessionSnapshot::authenticated("u1", Role::Admin);

    navigator.resolve("/admin/dashboard", &admin, Some(Role::Admin));
    navigator.logout();

    // The next user's smart redirect sees no admin paths.
    navigator.track("/search");
    assert_eq!(navigator.history().entries(), vec!["/search"]);
    assert_eq!(navigator.logout(), "/");
}
