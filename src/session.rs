//! Session snapshot data model.
//!
//! The authentication provider is an external collaborator --- this crate
//! never verifies credentials or refreshes tokens. It only consumes a
//! point-in-time [`SessionSnapshot`] supplied by the host on every guard
//! evaluation:
//!
//! | Field              | Meaning                                         |
//! |--------------------|-------------------------------------------------|
//! | `is_loading`       | Session resolution not yet complete             |
//! | `is_authenticated` | A valid session exists                          |
//! | `user`             | The identity, present iff authenticated         |
//!
//! Invariants: `is_authenticated == true` implies `user` is present, and
//! `is_loading == true` suspends all access decisions (neither grant nor
//! deny is final). The guard tolerates upstream violations of the first
//! invariant by falling back to the login redirect.
//!
//! # Example
//!
//! ```
//! use marketplace_navigator::{Role, SessionSnapshot};
//!
//! let session = SessionSnapshot::authenticated("user-7", Role::Artisan);
//! assert_eq!(session.role(), Some(Role::Artisan));
//!
//! let session = SessionSnapshot::signed_out();
//! assert_eq!(session.role(), None);
//! ```

use crate::error::UnknownRoleError;
use crate::registry::paths;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Role
// ============================================================================

/// The role attached to an authenticated identity.
///
/// Exactly one role per identity, immutable for the session lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// A customer hiring artisans.
    Client,
    /// A service provider offering work.
    Artisan,
    /// A platform administrator.
    Admin,
}

impl Role {
    /// All roles, in no particular order of privilege.
    pub const ALL: [Role; 3] = [Role::Client, Role::Artisan, Role::Admin];

    /// The lowercase wire name of this role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Artisan => "artisan",
            Role::Admin => "admin",
        }
    }

    /// The dashboard path owned by this role.
    ///
    /// This is the single per-role mapping shared by the smart redirect and
    /// the wrong-role branch of the guard: a denied-but-authenticated user
    /// is always sent to their **own** dashboard, never to the login screen.
    pub const fn dashboard_path(self) -> &'static str {
        match self {
            Role::Client => paths::CLIENT_DASHBOARD,
            Role::Artisan => paths::ARTISAN_DASHBOARD,
            Role::Admin => paths::ADMIN_DASHBOARD,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "client" => Ok(Role::Client),
            "artisan" => Ok(Role::Artisan),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownRoleError {
                name: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// UserIdentity
// ============================================================================

/// The authenticated identity carried inside a session snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    /// Opaque identifier assigned by the authentication provider.
    pub id: String,
    /// The identity's role, fixed for the session lifetime.
    pub role: Role,
}

impl UserIdentity {
    /// Create a new identity.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }
}

// ============================================================================
// SessionSnapshot
// ============================================================================

/// Point-in-time view of authentication state, supplied externally on every
/// guard evaluation.
///
/// Snapshots are read-only inputs: the guard never mutates or stores them,
/// and every evaluation is re-derived from scratch because the session can
/// transition from authenticated to unauthenticated (token expiry) at any
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Session resolution has not completed yet.
    pub is_loading: bool,
    /// A valid session exists.
    pub is_authenticated: bool,
    /// The authenticated identity, present iff `is_authenticated`.
    pub user: Option<UserIdentity>,
}

impl SessionSnapshot {
    /// Snapshot of a session still being resolved.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            is_authenticated: false,
            user: None,
        }
    }

    /// Snapshot with no session.
    ///
    /// Upstream session-fetch failures surface in this same shape — the
    /// guard does not distinguish "no session" from "session fetch failed".
    pub fn signed_out() -> Self {
        Self {
            is_loading: false,
            is_authenticated: false,
            user: None,
        }
    }

    /// Snapshot of a resolved, authenticated session.
    pub fn authenticated(id: impl Into<String>, role: Role) -> Self {
        Self {
            is_loading: false,
            is_authenticated: true,
            user: Some(UserIdentity::new(id, role)),
        }
    }

    /// The role of the authenticated user, if any.
    ///
    /// Returns `None` while loading, when signed out, or when the snapshot
    /// violates the `is_authenticated` ⇒ `user` invariant.
    pub fn role(&self) -> Option<Role> {
        if !self.is_authenticated {
            return None;
        }
        self.user.as_ref().map(|user| user.role)
    }
}

// ============================================================================
// Tests
// ============================================================================
