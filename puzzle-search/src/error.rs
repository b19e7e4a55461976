//! Error types for the search engines

use thiserror::Error;

/// Error type shared by the search engines.
///
/// Internal invariant violations (a popped frontier entry disagreeing with
/// the recorded best cost, a non-admissible heuristic) are programming bugs
/// and are guarded by assertions inside the engines, not represented here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Every reachable state was expanded without satisfying the goal
    /// predicate. Callers must treat this as a reportable condition, not
    /// a crash.
    #[error("no path to a goal state")]
    NoPath,
}
