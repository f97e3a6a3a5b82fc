use crate::app::topology::TopologyLevel;
use serde::{Deserialize, Serialize};

/// Active selections, one ordered list of identifiers per topology level.
///
/// Insertion order is kept. Duplicates are possible through
/// [`FilterSet::push`] but the store operations avoid creating them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    pub cluster: Vec<String>,
    pub tenant: Vec<String>,
    pub namespace: Vec<String>,
    pub topic: Vec<String>,
    pub producer: Vec<String>,
    pub subscription: Vec<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, level: TopologyLevel) -> &[String] {
        match level {
            TopologyLevel::Cluster => &self.cluster,
            TopologyLevel::Tenant => &self.tenant,
            TopologyLevel::Namespace => &self.namespace,
            TopologyLevel::Topic => &self.topic,
            TopologyLevel::Producer => &self.producer,
            TopologyLevel::Subscription => &self.subscription,
        }
    }

    pub(crate) fn get_mut(&mut self, level: TopologyLevel) -> &mut Vec<String> {
        match level {
            TopologyLevel::Cluster => &mut self.cluster,
            TopologyLevel::Tenant => &mut self.tenant,
            TopologyLevel::Namespace => &mut self.namespace,
            TopologyLevel::Topic => &mut self.topic,
            TopologyLevel::Producer => &mut self.producer,
            TopologyLevel::Subscription => &mut self.subscription,
        }
    }

    pub fn replace(&mut self, level: TopologyLevel, ids: Vec<String>) {
        *self.get_mut(level) = ids;
    }

    pub fn push(&mut self, level: TopologyLevel, id: String) {
        self.get_mut(level).push(id);
    }

    /// Remove every occurrence of `id`, keeping the order of the rest.
    pub fn remove_all(&mut self, level: TopologyLevel, id: &str) {
        self.get_mut(level).retain(|existing| existing != id);
    }

    pub fn clear_level(&mut self, level: TopologyLevel) {
        self.get_mut(level).clear();
    }

    pub fn clear(&mut self) {
        for level in TopologyLevel::ALL {
            self.clear_level(level);
        }
    }

    pub fn contains(&self, level: TopologyLevel, id: &str) -> bool {
        self.get(level).iter().any(|existing| existing == id)
    }

    pub fn is_empty(&self) -> bool {
        TopologyLevel::ALL
            .into_iter()
            .all(|level| self.get(level).is_empty())
    }

    /// Levels with at least one active selection, in hierarchy order.
    pub fn active_levels(&self) -> Vec<TopologyLevel> {
        TopologyLevel::ALL
            .into_iter()
            .filter(|level| !self.get(*level).is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_all_preserves_order() {
        let mut filters = FilterSet::new();
        for id in ["a", "b", "a", "c", "a"] {
            filters.push(TopologyLevel::Topic, id.to_string());
        }

        filters.remove_all(TopologyLevel::Topic, "a");

        assert_eq!(filters.get(TopologyLevel::Topic), ["b", "c"]);
    }

    #[test]
    fn test_active_levels() {
        let mut filters = FilterSet::new();
        assert!(filters.is_empty());

        filters.push(TopologyLevel::Subscription, "sub-1".to_string());
        filters.push(TopologyLevel::Cluster, "standalone".to_string());

        assert_eq!(
            filters.active_levels(),
            vec![TopologyLevel::Cluster, TopologyLevel::Subscription]
        );
    }
}
