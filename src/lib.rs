//! Role-aware route guarding and navigation history for a multi-role
//! marketplace client.
//!
//! This crate is the access-control and navigation-state layer of a
//! three-role (client / artisan / admin) marketplace application: for every
//! navigation event it decides whether the requested view may be shown,
//! computes where to send unauthorized or wrong-role users, and maintains a
//! bounded history of visited routes to make those redirects context-aware
//! (after login, after logout, after an access denial).
//!
//! It deliberately implements **decisions, not rendering**: the guard
//! returns a [`GuardDecision`] value and the host's view layer acts on it.
//! Credential verification, token refresh, and session persistence belong
//! to the authentication collaborator — this crate only consumes the
//! [`SessionSnapshot`] it supplies on each render.
//!
//! # Components
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`RouteGuard`] | Gates a protected view on session state and role |
//! | [`NavigationHistory`] | Bounded, order-preserving log of visited paths |
//! | [`RouteTracker`] | Records each distinct path change exactly once |
//! | [`RouteRegistry`] | Classifies paths as known routes (404 support) |
//! | [`Navigator`] | Application-root service composing all of the above |
//!
//! # Quick start
//!
//! ```
//! use marketplace_navigator::{Navigator, Role, SessionSnapshot};
//!
//! // One navigator per running application, owned by the root.
//! let mut navigator = Navigator::default();
//!
//! // An unauthenticated visit to a protected view redirects to login.
//! let outcome = navigator.resolve(
//!     "/artisan/dashboard",
//!     &SessionSnapshot::signed_out(),
//!     Some(Role::Artisan),
//! );
//! assert_eq!(outcome.redirect_path(), Some("/login"));
//!
//! // A client on an artisan view lands on their own dashboard.
//! let session = SessionSnapshot::authenticated("u1", Role::Client);
//! let outcome = navigator.resolve("/artisan/dashboard", &session, Some(Role::Artisan));
//! assert_eq!(outcome.redirect_path(), Some("/client/dashboard"));
//! ```
//!
//! # Features
//!
//! | Feature | Purpose | Default |
//! |---------|---------|---------|
//! | `log` | Diagnostics via the `log` crate | yes |
//! | `tracing` | Diagnostics via the `tracing` crate (instead of `log`) | no |
//! | `cache` | LRU cache for route classification | yes |
//!
//! # Concurrency
//!
//! Every operation is synchronous and total. The crate assumes a
//! single-threaded, event-driven host; a multi-threaded host must serialize
//! mutating calls ([`Navigator::track`], [`Navigator::logout`]) behind a
//! single owner or a lock so history order stays FIFO.

#[cfg(feature = "cache")]
pub mod cache;
pub mod error;
pub mod guard;
pub mod history;
mod logging;
pub mod navigator;
pub mod params;
pub mod registry;
pub mod session;
pub mod tracker;

#[cfg(feature = "cache")]
pub use cache::{CacheStats, RouteCache};
pub use error::{PatternError, UnknownRoleError};
pub use guard::{GuardDecision, RouteGuard};
pub use history::{
    smart_redirect, suggested_routes, NavigationHistory, SuggestedRoute,
    DEFAULT_HISTORY_CAPACITY,
};
pub use navigator::{Navigator, Resolution};
pub use params::RouteParams;
pub use registry::{
    is_protected_path, normalize_path, paths, RouteMatch, RoutePattern, RouteRegistry,
};
pub use session::{Role, SessionSnapshot, UserIdentity};
pub use tracker::RouteTracker;
