//! Topology levels of a Pulsar deployment.
//!
//! The order of [`TopologyLevel::ALL`] is the hierarchy used for filter
//! invalidation: a level is an ancestor of every level after it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopologyLevel {
    Cluster,
    Tenant,
    Namespace,
    Topic,
    Producer,
    Subscription,
}

impl TopologyLevel {
    /// Every level, root first.
    pub const ALL: [TopologyLevel; 6] = [
        TopologyLevel::Cluster,
        TopologyLevel::Tenant,
        TopologyLevel::Namespace,
        TopologyLevel::Topic,
        TopologyLevel::Producer,
        TopologyLevel::Subscription,
    ];

    /// Position of this level in the fixed hierarchy order.
    pub fn level_index(self) -> usize {
        match self {
            TopologyLevel::Cluster => 0,
            TopologyLevel::Tenant => 1,
            TopologyLevel::Namespace => 2,
            TopologyLevel::Topic => 3,
            TopologyLevel::Producer => 4,
            TopologyLevel::Subscription => 5,
        }
    }

    /// True iff `self` sits strictly above `other` in the hierarchy.
    pub fn is_ancestor(self, other: TopologyLevel) -> bool {
        self.level_index() < other.level_index()
    }

    /// Levels strictly below this one, in hierarchy order.
    pub fn descendants(self) -> impl Iterator<Item = TopologyLevel> {
        Self::ALL.into_iter().skip(self.level_index() + 1)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TopologyLevel::Cluster => "Cluster",
            TopologyLevel::Tenant => "Tenant",
            TopologyLevel::Namespace => "Namespace",
            TopologyLevel::Topic => "Topic",
            TopologyLevel::Producer => "Producer",
            TopologyLevel::Subscription => "Subscription",
        }
    }

    /// Lowercase identifier used in routes and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            TopologyLevel::Cluster => "cluster",
            TopologyLevel::Tenant => "tenant",
            TopologyLevel::Namespace => "namespace",
            TopologyLevel::Topic => "topic",
            TopologyLevel::Producer => "producer",
            TopologyLevel::Subscription => "subscription",
        }
    }

    /// Query-parameter key the backend expects for this level's filter values.
    ///
    /// The topic endpoint takes a singular `producer` key.
    pub fn query_key(&self) -> &'static str {
        match self {
            TopologyLevel::Cluster => "clusters",
            TopologyLevel::Tenant => "tenants",
            TopologyLevel::Namespace => "namespaces",
            TopologyLevel::Topic => "topics",
            TopologyLevel::Producer => "producer",
            TopologyLevel::Subscription => "subscriptions",
        }
    }
}

impl fmt::Display for TopologyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopologyLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == needle)
            .ok_or_else(|| anyhow::anyhow!("unknown topology level: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_index_follows_hierarchy() {
        for (expected, level) in TopologyLevel::ALL.iter().enumerate() {
            assert_eq!(level.level_index(), expected);
        }
    }

    #[test]
    fn test_is_ancestor_is_strict() {
        assert!(TopologyLevel::Cluster.is_ancestor(TopologyLevel::Tenant));
        assert!(TopologyLevel::Namespace.is_ancestor(TopologyLevel::Subscription));
        assert!(!TopologyLevel::Topic.is_ancestor(TopologyLevel::Topic));
        assert!(!TopologyLevel::Producer.is_ancestor(TopologyLevel::Namespace));
    }

    #[test]
    fn test_descendants() {
        let below_topic: Vec<_> = TopologyLevel::Topic.descendants().collect();
        assert_eq!(
            below_topic,
            vec![TopologyLevel::Producer, TopologyLevel::Subscription]
        );
        assert_eq!(TopologyLevel::Subscription.descendants().count(), 0);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("Tenant".parse::<TopologyLevel>().unwrap(), TopologyLevel::Tenant);
        assert_eq!(
            " subscription ".parse::<TopologyLevel>().unwrap(),
            TopologyLevel::Subscription
        );
        assert!("partition".parse::<TopologyLevel>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&TopologyLevel::Namespace).unwrap();
        assert_eq!(json, "\"namespace\"");
    }
}
