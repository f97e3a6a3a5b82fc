//! View transitions and the descendant-filter reset rule.
//!
//! Filters chosen while looking at a child level stop making sense once the
//! user moves up to an ancestor, so they are dropped. Filters on ancestor
//! levels keep scoping every descendant view and survive lateral moves and
//! descents untouched.

use super::filter_set::FilterSet;
use crate::app::topology::TopologyLevel;

/// Apply the transition `last_view -> current_view` to `filters`.
///
/// Returns the levels that were cleared, in hierarchy order. Levels that were
/// already empty are not reported.
pub fn reconcile(
    filters: &mut FilterSet,
    last_view: TopologyLevel,
    current_view: TopologyLevel,
) -> Vec<TopologyLevel> {
    let current_view_level = current_view.level_index();
    let last_view_level = last_view.level_index();

    if current_view_level >= last_view_level {
        return Vec::new();
    }

    let mut cleared = Vec::new();
    for level in current_view.descendants() {
        if !filters.get(level).is_empty() {
            filters.clear_level(level);
            cleared.push(level);
        }
    }

    if !cleared.is_empty() {
        log_debug!(
            "Navigated {} -> {}, cleared filters on {:?}",
            last_view,
            current_view,
            cleared
        );
    }
    cleared
}
