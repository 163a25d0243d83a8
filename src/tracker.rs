//! Route tracker: bridges host navigation events into the history.
//!
//! The host mounts one tracker at the application root, above the route
//! outlet, and calls [`observe`](RouteTracker::observe) on every render.
//! The tracker forwards each *distinct* path change to
//! [`NavigationHistory::add_route`] exactly once; re-renders that do not
//! correspond to an actual path change are cheap, side-effect-free no-ops.
//! The adjacent-duplicate collapse inside the history remains a safety net,
//! not the primary mechanism.
//!
//! # Example
//!
//! ```
//! use marketplace_navigator::{NavigationHistory, RouteTracker};
//!
//! let mut history = NavigationHistory::new();
//! let mut tracker = RouteTracker::new();
//!
//! assert!(tracker.observe("/search", &mut history));
//! assert!(!tracker.observe("/search", &mut history)); // re-render, no change
//! assert!(tracker.observe("/job/1", &mut history));
//!
//! assert_eq!(history.entries(), vec!["/search", "/job/1"]);
//! ```

use crate::history::NavigationHistory;
use crate::registry::normalize_path;
use crate::trace_log;

/// Observer that records each distinct path change exactly once.
#[derive(Debug, Clone, Default)]
pub struct RouteTracker {
    last_path: Option<String>,
}

impl RouteTracker {
    /// Create a tracker that has observed nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the path of the current render.
    ///
    /// Records into `history` and returns `true` only when the normalized
    /// path differs from the previous observation.
    pub fn observe(&mut self, path: &str, history: &mut NavigationHistory) -> bool {
        let path = normalize_path(path);
        if self.last_path.as_deref() == Some(path.as_str()) {
            trace_log!("Re-render at '{}', nothing to record", path);
            return false;
        }

        history.add_route(&path);
        self.last_path = Some(path);
        true
    }

    /// The most recently observed path, if any.
    pub fn last_path(&self) -> Option<&str> {
        self.last_path.as_deref()
    }

    /// Forget the last observation.
    ///
    /// Called on logout together with [`NavigationHistory::clear`], so the
    /// first navigation of the next session is recorded even when it lands
    /// on the same path.
    pub fn reset(&mut self) {
        self.last_path = None;
    }
}

// ============================================================================
// Tests
// ============================================================================
