//! Scoped list queries built from the active filters.

use crate::app::filter_store::FilterSet;
use crate::app::topology::TopologyLevel;
use url::Url;

/// A list endpoint of the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Clusters,
    Tenants,
    Namespaces,
    Topics,
}

impl Endpoint {
    /// Endpoint that lists the entities shown in `view`.
    ///
    /// Producer and subscription views are rendered from topic records.
    pub fn for_view(view: TopologyLevel) -> Self {
        match view {
            TopologyLevel::Cluster => Endpoint::Clusters,
            TopologyLevel::Tenant => Endpoint::Tenants,
            TopologyLevel::Namespace => Endpoint::Namespaces,
            TopologyLevel::Topic | TopologyLevel::Producer | TopologyLevel::Subscription => {
                Endpoint::Topics
            }
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Clusters => "/api/cluster/all",
            Endpoint::Tenants => "/api/tenant/all",
            Endpoint::Namespaces => "/api/namespace/all",
            Endpoint::Topics => "/api/topic/all",
        }
    }

    /// Filter levels forwarded to this endpoint, in hierarchy order.
    pub fn filter_levels(&self) -> &'static [TopologyLevel] {
        match self {
            Endpoint::Clusters => &[TopologyLevel::Cluster],
            Endpoint::Tenants => &[TopologyLevel::Cluster, TopologyLevel::Tenant],
            Endpoint::Namespaces => &[
                TopologyLevel::Cluster,
                TopologyLevel::Tenant,
                TopologyLevel::Namespace,
            ],
            Endpoint::Topics => &TopologyLevel::ALL,
        }
    }
}

/// Query pairs for `endpoint`: one `key=value` pair per selected value, keys
/// in hierarchy order, nothing for empty selections.
pub fn query_pairs(endpoint: Endpoint, filters: &FilterSet) -> Vec<(&'static str, String)> {
    endpoint
        .filter_levels()
        .iter()
        .flat_map(|level| {
            filters
                .get(*level)
                .iter()
                .map(move |id| (level.query_key(), id.clone()))
        })
        .collect()
}

/// Full URL of `endpoint` under `base`, scoped by `filters`.
///
/// The endpoint path is appended to whatever path `base` already has, so a
/// backend mounted under a prefix (`http://proxy/pulsar-ui`) keeps it.
pub fn scoped_url(base: &Url, endpoint: Endpoint, filters: &FilterSet) -> anyhow::Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("Backend URL cannot carry a path: {}", base))?
        .pop_if_empty()
        .extend(endpoint.path().trim_start_matches('/').split('/'));

    let pairs = query_pairs(endpoint, filters);
    if !pairs.is_empty() {
        let mut serializer = url.query_pairs_mut();
        for (key, value) in &pairs {
            serializer.append_pair(key, value);
        }
    }
    Ok(url)
}
