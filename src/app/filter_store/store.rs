use super::events::FilterChange;
use super::filter_set::FilterSet;
use super::navigation;
use crate::app::topology::TopologyLevel;

/// Active filters plus the view the user is browsing.
///
/// Every mutating operation is total and bumps [`FilterStore::generation`],
/// which is the re-fetch trigger for scoped views. Mutators return the
/// [`FilterChange`] they applied so the caller can publish it.
#[derive(Debug, Clone)]
pub struct FilterStore {
    filters: FilterSet,
    view: TopologyLevel,
    generation: u64,
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterStore {
    pub fn new() -> Self {
        Self {
            filters: FilterSet::new(),
            view: TopologyLevel::Cluster,
            generation: 0,
        }
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn selection(&self, level: TopologyLevel) -> &[String] {
        self.filters.get(level)
    }

    pub fn is_selected(&self, level: TopologyLevel, id: &str) -> bool {
        self.filters.contains(level, id)
    }

    pub fn view(&self) -> TopologyLevel {
        self.view
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the selection for `level` wholesale.
    pub fn set_level(&mut self, level: TopologyLevel, ids: Vec<String>) -> FilterChange {
        self.filters.replace(level, ids);
        self.commit(FilterChange::Replaced { level })
    }

    /// Append `id` to the selection. Membership is the caller's concern.
    pub fn add_filter(&mut self, level: TopologyLevel, id: &str) -> FilterChange {
        self.filters.push(level, id.to_string());
        self.commit(FilterChange::Added {
            level,
            id: id.to_string(),
        })
    }

    /// Radio semantics: the selection becomes exactly `[id]`.
    pub fn add_filter_exclusive(&mut self, level: TopologyLevel, id: &str) -> FilterChange {
        self.filters.replace(level, vec![id.to_string()]);
        self.commit(FilterChange::Selected {
            level,
            id: id.to_string(),
        })
    }

    pub fn delete_filter(&mut self, level: TopologyLevel, id: &str) -> FilterChange {
        self.filters.remove_all(level, id);
        self.commit(FilterChange::Removed {
            level,
            id: id.to_string(),
        })
    }

    /// Checkbox click: deselect when selected, append otherwise.
    pub fn toggle(&mut self, level: TopologyLevel, id: &str) -> FilterChange {
        if self.is_selected(level, id) {
            self.delete_filter(level, id)
        } else {
            self.add_filter(level, id)
        }
    }

    /// Radio click: deselect when selected, select exclusively otherwise.
    pub fn toggle_exclusive(&mut self, level: TopologyLevel, id: &str) -> FilterChange {
        if self.is_selected(level, id) {
            self.delete_filter(level, id)
        } else {
            self.add_filter_exclusive(level, id)
        }
    }

    /// Plain navigation to `view`; stale descendant filters are dropped when
    /// the new view is an ancestor of the old one.
    pub fn navigate(&mut self, view: TopologyLevel) -> FilterChange {
        let from = self.view;
        let cleared = navigation::reconcile(&mut self.filters, from, view);
        self.view = view;
        self.commit(FilterChange::Navigated {
            from,
            to: view,
            cleared,
        })
    }

    /// Scope `level` to `id` alone and switch the view to it.
    pub fn drill_to(&mut self, level: TopologyLevel, id: &str) -> FilterChange {
        let from = self.view;
        self.filters.replace(level, vec![id.to_string()]);
        let cleared = navigation::reconcile(&mut self.filters, from, level);
        self.view = level;
        self.commit(FilterChange::Drilled {
            from,
            to: level,
            id: id.to_string(),
            cleared,
        })
    }

    /// Drop every filter, then drill to `level` scoped to `id`.
    ///
    /// Used by cross-reference links that jump up the hierarchy; afterwards
    /// `id` is the only active selection anywhere.
    pub fn jump_to(&mut self, level: TopologyLevel, id: &str) -> FilterChange {
        let from = self.view;
        let cleared = self.filters.active_levels();
        self.filters.clear();
        self.filters.replace(level, vec![id.to_string()]);
        self.view = level;
        self.commit(FilterChange::Jumped {
            from,
            to: level,
            id: id.to_string(),
            cleared,
        })
    }

    /// Clear every selection; the view is untouched.
    pub fn reset_all(&mut self) -> FilterChange {
        self.filters.clear();
        self.commit(FilterChange::ResetAll)
    }

    /// Back to the initial state: no filters, cluster view.
    ///
    /// The generation keeps counting so subscribers still see a change.
    pub fn reset(&mut self) -> FilterChange {
        self.filters.clear();
        self.view = TopologyLevel::Cluster;
        self.commit(FilterChange::Reset)
    }

    fn commit(&mut self, change: FilterChange) -> FilterChange {
        self.generation += 1;
        change
    }
}
