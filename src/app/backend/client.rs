use super::query::{scoped_url, Endpoint};
use super::types::{
    Cluster, ClusterList, Namespace, NamespaceList, ScopedData, Tenant, TenantList, Topic,
    TopicList,
};
use crate::app::config::DashConfig;
use crate::app::filter_store::FilterSet;
use crate::app::topology::TopologyLevel;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Source of topology listings.
///
/// Every call is scoped by `filters`; passing an empty [`FilterSet`] lists
/// everything, which is what the option catalog does.
#[async_trait]
pub trait TopologyBackend: Send + Sync {
    async fn clusters(&self, filters: &FilterSet) -> Result<Vec<Cluster>>;

    async fn tenants(&self, filters: &FilterSet) -> Result<Vec<Tenant>>;

    async fn namespaces(&self, filters: &FilterSet) -> Result<Vec<Namespace>>;

    async fn topics(&self, filters: &FilterSet) -> Result<Vec<Topic>>;

    /// Timeout applied to each request, if any. Used for error messages.
    fn request_timeout(&self) -> Option<Duration> {
        None
    }

    /// List the entities shown by `view`.
    async fn fetch_scoped(&self, view: TopologyLevel, filters: &FilterSet) -> Result<ScopedData> {
        let data = match Endpoint::for_view(view) {
            Endpoint::Clusters => ScopedData::Clusters(self.clusters(filters).await?),
            Endpoint::Tenants => ScopedData::Tenants(self.tenants(filters).await?),
            Endpoint::Namespaces => ScopedData::Namespaces(self.namespaces(filters).await?),
            Endpoint::Topics => ScopedData::Topics(self.topics(filters).await?),
        };
        Ok(data)
    }
}

/// [`TopologyBackend`] talking to the dashboard REST backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid backend URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Backend URL must be hierarchical: {}", base_url);
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn from_config(config: &DashConfig) -> Result<Self> {
        Self::new(&config.backend_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        filters: &FilterSet,
    ) -> Result<T> {
        let url = scoped_url(&self.base_url, endpoint, filters)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?
            .error_for_status()
            .with_context(|| format!("GET {} returned an error status", url))?;

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to decode response of {}", endpoint.path()))
    }
}

#[async_trait]
impl TopologyBackend for HttpBackend {
    async fn clusters(&self, filters: &FilterSet) -> Result<Vec<Cluster>> {
        let list: ClusterList = self.get_json(Endpoint::Clusters, filters).await?;
        Ok(list.clusters)
    }

    async fn tenants(&self, filters: &FilterSet) -> Result<Vec<Tenant>> {
        let list: TenantList = self.get_json(Endpoint::Tenants, filters).await?;
        Ok(list.tenants)
    }

    async fn namespaces(&self, filters: &FilterSet) -> Result<Vec<Namespace>> {
        let list: NamespaceList = self.get_json(Endpoint::Namespaces, filters).await?;
        Ok(list.namespaces)
    }

    async fn topics(&self, filters: &FilterSet) -> Result<Vec<Topic>> {
        let list: TopicList = self.get_json(Endpoint::Topics, filters).await?;
        Ok(list.topics)
    }

    fn request_timeout(&self) -> Option<Duration> {
        Some(self.timeout)
    }
}
