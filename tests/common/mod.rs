//! Shared test backends.
//!
//! [`FakeBackend`] serves canned listings and records the filters each call
//! was scoped by. [`GatedBackend`] holds its first topic call until released,
//! which lets tests finish a newer request before an older one.

#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use pulsardash::app::backend::types::{Cluster, Namespace, Tenant, Topic};
use pulsardash::app::backend::{Endpoint, TopologyBackend};
use pulsardash::app::filter_store::FilterSet;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

pub fn cluster(name: &str) -> Cluster {
    Cluster {
        name: name.to_string(),
        ..Default::default()
    }
}

pub fn tenant(name: &str) -> Tenant {
    Tenant {
        name: name.to_string(),
        ..Default::default()
    }
}

pub fn namespace(id: &str) -> Namespace {
    Namespace {
        id: id.to_string(),
        ..Default::default()
    }
}

pub fn topic(name: &str, producers: &[&str], subscriptions: &[&str]) -> Topic {
    Topic::with_members(
        name,
        producers.iter().map(|p| p.to_string()).collect(),
        subscriptions.iter().map(|s| s.to_string()).collect(),
    )
}

pub fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[derive(Default)]
pub struct FakeBackend {
    pub clusters: Mutex<Vec<Cluster>>,
    pub tenants: Mutex<Vec<Tenant>>,
    pub namespaces: Mutex<Vec<Namespace>>,
    pub topics: Mutex<Vec<Topic>>,
    failing: Mutex<HashSet<Endpoint>>,
    calls: Mutex<Vec<(Endpoint, FilterSet)>>,
}

impl FakeBackend {
    /// A small standalone deployment.
    pub fn standalone() -> Self {
        let backend = Self::default();
        *backend.clusters.lock().unwrap() = vec![cluster("standalone"), cluster("standalone")];
        *backend.tenants.lock().unwrap() =
            vec![tenant("public"), tenant("sample"), tenant("undefined")];
        *backend.namespaces.lock().unwrap() =
            vec![namespace("public/default"), namespace("sample/ns1")];
        *backend.topics.lock().unwrap() = vec![
            topic("persistent://public/default/orders", &["p1", "p1", "undefined"], &["billing"]),
            topic("persistent://public/default/payments", &["p2"], &["billing", "audit"]),
            topic("persistent://sample/ns1/events", &[], &[]),
        ];
        backend
    }

    pub fn fail(&self, endpoint: Endpoint) {
        self.failing.lock().unwrap().insert(endpoint);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.failing.lock().unwrap().remove(&endpoint);
    }

    pub fn calls(&self) -> Vec<(Endpoint, FilterSet)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, endpoint: Endpoint, filters: &FilterSet) -> Result<()> {
        self.calls.lock().unwrap().push((endpoint, filters.clone()));
        if self.failing.lock().unwrap().contains(&endpoint) {
            return Err(anyhow!("{} is unavailable", endpoint.path()));
        }
        Ok(())
    }
}

#[async_trait]
impl TopologyBackend for FakeBackend {
    async fn clusters(&self, filters: &FilterSet) -> Result<Vec<Cluster>> {
        self.record(Endpoint::Clusters, filters)?;
        Ok(self.clusters.lock().unwrap().clone())
    }

    async fn tenants(&self, filters: &FilterSet) -> Result<Vec<Tenant>> {
        self.record(Endpoint::Tenants, filters)?;
        Ok(self.tenants.lock().unwrap().clone())
    }

    async fn namespaces(&self, filters: &FilterSet) -> Result<Vec<Namespace>> {
        self.record(Endpoint::Namespaces, filters)?;
        Ok(self.namespaces.lock().unwrap().clone())
    }

    async fn topics(&self, filters: &FilterSet) -> Result<Vec<Topic>> {
        self.record(Endpoint::Topics, filters)?;
        Ok(self.topics.lock().unwrap().clone())
    }
}

/// First topic call answers `stale` once released; later calls answer `fresh`.
pub struct GatedBackend {
    topic_calls: AtomicUsize,
    pub entered: Notify,
    pub release: Notify,
    stale: Vec<Topic>,
    fresh: Vec<Topic>,
}

impl GatedBackend {
    pub fn new(stale: Vec<Topic>, fresh: Vec<Topic>) -> Self {
        Self {
            topic_calls: AtomicUsize::new(0),
            entered: Notify::new(),
            release: Notify::new(),
            stale,
            fresh,
        }
    }
}

#[async_trait]
impl TopologyBackend for GatedBackend {
    async fn clusters(&self, _filters: &FilterSet) -> Result<Vec<Cluster>> {
        Ok(vec![cluster("standalone")])
    }

    async fn tenants(&self, _filters: &FilterSet) -> Result<Vec<Tenant>> {
        Ok(vec![tenant("public")])
    }

    async fn namespaces(&self, _filters: &FilterSet) -> Result<Vec<Namespace>> {
        Ok(vec![namespace("public/default")])
    }

    async fn topics(&self, _filters: &FilterSet) -> Result<Vec<Topic>> {
        if self.topic_calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(self.stale.clone())
        } else {
            Ok(self.fresh.clone())
        }
    }
}
