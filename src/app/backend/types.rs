//! Response schemas of the dashboard backend.
//!
//! Payloads are validated here, at the boundary: every list endpoint has its
//! own envelope type, optional collections default to empty and unknown
//! fields are ignored.

use crate::app::topology::TopologyLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub name: String,
    #[serde(default)]
    pub number_of_tenants: Option<u64>,
    #[serde(default)]
    pub number_of_namespaces: Option<u64>,
    #[serde(default)]
    pub number_of_topics: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub name: String,
    #[serde(default)]
    pub number_of_namespaces: Option<u64>,
    #[serde(default)]
    pub number_of_topics: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    pub id: String,
    #[serde(default)]
    pub tenant: Option<String>,
    #[serde(default)]
    pub number_of_topics: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub tenant: Option<String>,
    #[serde(default)]
    pub cluster: Option<String>,
    #[serde(default)]
    pub producers: Vec<String>,
    #[serde(default)]
    pub subscriptions: Vec<String>,
}

impl Topic {
    pub fn with_members(name: &str, producers: Vec<String>, subscriptions: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            producers,
            subscriptions,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterList {
    pub clusters: Vec<Cluster>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TenantList {
    pub tenants: Vec<Tenant>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamespaceList {
    pub namespaces: Vec<Namespace>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicList {
    pub topics: Vec<Topic>,
}

/// The list a scoped view fetch returned, tagged by endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum ScopedData {
    Clusters(Vec<Cluster>),
    Tenants(Vec<Tenant>),
    Namespaces(Vec<Namespace>),
    Topics(Vec<Topic>),
}

impl ScopedData {
    /// The level whose entities this list holds.
    pub fn level(&self) -> TopologyLevel {
        match self {
            ScopedData::Clusters(_) => TopologyLevel::Cluster,
            ScopedData::Tenants(_) => TopologyLevel::Tenant,
            ScopedData::Namespaces(_) => TopologyLevel::Namespace,
            ScopedData::Topics(_) => TopologyLevel::Topic,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ScopedData::Clusters(items) => items.len(),
            ScopedData::Tenants(items) => items.len(),
            ScopedData::Namespaces(items) => items.len(),
            ScopedData::Topics(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display identifiers of the entities, in response order.
    pub fn names(&self) -> Vec<String> {
        match self {
            ScopedData::Clusters(items) => items.iter().map(|c| c.name.clone()).collect(),
            ScopedData::Tenants(items) => items.iter().map(|t| t.name.clone()).collect(),
            ScopedData::Namespaces(items) => items.iter().map(|n| n.id.clone()).collect(),
            ScopedData::Topics(items) => items.iter().map(|t| t.name.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_without_members_defaults_to_empty() {
        let list: TopicList = serde_json::from_value(serde_json::json!({
            "topics": [
                { "name": "persistent://public/default/a", "producers": ["p1"] },
                { "name": "persistent://public/default/b", "messagesCount": 42 }
            ]
        }))
        .unwrap();

        assert_eq!(list.topics[0].producers, vec!["p1".to_string()]);
        assert!(list.topics[0].subscriptions.is_empty());
        assert!(list.topics[1].producers.is_empty());
    }

    #[test]
    fn test_counts_are_optional() {
        let list: TenantList = serde_json::from_value(serde_json::json!({
            "tenants": [
                { "name": "public", "numberOfNamespaces": 2, "tenantInfo": { "adminRoles": [] } },
                { "name": "sample" }
            ]
        }))
        .unwrap();

        assert_eq!(list.tenants[0].number_of_namespaces, Some(2));
        assert_eq!(list.tenants[1].number_of_topics, None);
    }

    #[test]
    fn test_missing_envelope_is_rejected() {
        let result: Result<ClusterList, _> = serde_json::from_value(serde_json::json!({
            "tenants": []
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_scoped_data_names() {
        let data = ScopedData::Namespaces(vec![Namespace {
            id: "public/default".to_string(),
            tenant: Some("public".to_string()),
            number_of_topics: None,
        }]);

        assert_eq!(data.level(), TopologyLevel::Namespace);
        assert_eq!(data.names(), vec!["public/default".to_string()]);
    }
}
