//! The dashboard state container.
//!
//! A [`Dashboard`] is constructed explicitly and handed to every consumer.
//! It owns the [`FilterStore`] and [`OptionCatalog`] behind one lock, talks
//! to a [`TopologyBackend`], and publishes a [`FilterEvent`] after each
//! committed mutation so that scoped views know to refetch.
//!
//! # Concurrency
//!
//! Mutations take the write lock for their whole duration and publish their
//! event before releasing it, so events arrive in generation order and always
//! describe fully applied state. Fetches never hold the lock while waiting on
//! the network; their results are applied afterwards, and only if no newer
//! request for the same slot was issued in the meantime.

use crate::app::backend::{
    categorize_error, Endpoint, FetchErrorCategory, HttpBackend, RequestSequencer, RequestSlot,
    ScopedData, TopologyBackend,
};
use crate::app::config::DashConfig;
use crate::app::filter_store::{
    FilterChange, FilterEvent, FilterEventBus, FilterSet, FilterStore, OptionCatalog,
};
use crate::app::topology::TopologyLevel;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

#[derive(Debug, Default)]
pub struct DashboardState {
    pub store: FilterStore,
    pub catalog: OptionCatalog,
}

/// Read-only copy of everything a view needs to render.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub view: TopologyLevel,
    pub generation: u64,
    pub filters: FilterSet,
    pub catalog: OptionCatalog,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionLoadStatus {
    /// Catalog updated; `options` is the number of values now offered
    Applied { options: usize },
    /// A newer request for the same endpoint was issued; result dropped
    Superseded,
    /// Fetch failed; the previous catalog entries were kept
    Failed(FetchErrorCategory),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionLoadOutcome {
    pub endpoint: Endpoint,
    pub status: OptionLoadStatus,
}

/// Result of one [`Dashboard::load_options`] round.
#[derive(Debug, Clone, Default)]
pub struct OptionLoadReport {
    pub outcomes: Vec<OptionLoadOutcome>,
}

impl OptionLoadReport {
    pub fn all_applied(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| matches!(o.status, OptionLoadStatus::Applied { .. }))
    }

    pub fn failures(&self) -> Vec<&OptionLoadOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, OptionLoadStatus::Failed(_)))
            .collect()
    }

    pub fn outcome(&self, endpoint: Endpoint) -> Option<&OptionLoadStatus> {
        self.outcomes
            .iter()
            .find(|o| o.endpoint == endpoint)
            .map(|o| &o.status)
    }
}

/// Result of a scoped view fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ScopedOutcome {
    Loaded(ScopedData),
    /// Error string for display in place of the view's data
    Failed(String),
    /// A newer fetch for the same view was issued; nothing to show
    Superseded,
}

#[derive(Clone)]
pub struct Dashboard {
    state: Arc<RwLock<DashboardState>>,
    backend: Arc<dyn TopologyBackend>,
    sequencer: Arc<RequestSequencer>,
    events: FilterEventBus,
}

impl Dashboard {
    pub fn new(backend: Arc<dyn TopologyBackend>) -> Self {
        Self {
            state: Arc::new(RwLock::new(DashboardState::default())),
            backend,
            sequencer: Arc::new(RequestSequencer::new()),
            events: FilterEventBus::default(),
        }
    }

    pub fn from_config(config: &DashConfig) -> anyhow::Result<Self> {
        let backend = HttpBackend::from_config(config)?;
        log_info!("Dashboard backend: {}", backend.base_url());
        Ok(Self::new(Arc::new(backend)))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FilterEvent> {
        self.events.subscribe()
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        let state = self.state.read().await;
        DashboardSnapshot {
            view: state.store.view(),
            generation: state.store.generation(),
            filters: state.store.filters().clone(),
            catalog: state.catalog.clone(),
        }
    }

    pub async fn filters(&self) -> FilterSet {
        self.state.read().await.store.filters().clone()
    }

    pub async fn selection(&self, level: TopologyLevel) -> Vec<String> {
        self.state.read().await.store.selection(level).to_vec()
    }

    pub async fn is_selected(&self, level: TopologyLevel, id: &str) -> bool {
        self.state.read().await.store.is_selected(level, id)
    }

    pub async fn options(&self, level: TopologyLevel) -> Vec<String> {
        self.state.read().await.catalog.options(level).to_vec()
    }

    pub async fn view(&self) -> TopologyLevel {
        self.state.read().await.store.view()
    }

    /// The re-fetch trigger: changes on every committed mutation.
    pub async fn generation(&self) -> u64 {
        self.state.read().await.store.generation()
    }

    pub async fn set_level(&self, level: TopologyLevel, ids: Vec<String>) -> FilterEvent {
        self.mutate(|store| store.set_level(level, ids)).await
    }

    pub async fn add_filter(&self, level: TopologyLevel, id: &str) -> FilterEvent {
        self.mutate(|store| store.add_filter(level, id)).await
    }

    pub async fn add_filter_exclusive(&self, level: TopologyLevel, id: &str) -> FilterEvent {
        self.mutate(|store| store.add_filter_exclusive(level, id)).await
    }

    pub async fn delete_filter(&self, level: TopologyLevel, id: &str) -> FilterEvent {
        self.mutate(|store| store.delete_filter(level, id)).await
    }

    pub async fn toggle(&self, level: TopologyLevel, id: &str) -> FilterEvent {
        self.mutate(|store| store.toggle(level, id)).await
    }

    pub async fn toggle_exclusive(&self, level: TopologyLevel, id: &str) -> FilterEvent {
        self.mutate(|store| store.toggle_exclusive(level, id)).await
    }

    pub async fn navigate(&self, view: TopologyLevel) -> FilterEvent {
        self.mutate(|store| store.navigate(view)).await
    }

    pub async fn drill_to(&self, level: TopologyLevel, id: &str) -> FilterEvent {
        self.mutate(|store| store.drill_to(level, id)).await
    }

    pub async fn jump_to(&self, level: TopologyLevel, id: &str) -> FilterEvent {
        self.mutate(|store| store.jump_to(level, id)).await
    }

    pub async fn reset_all(&self) -> FilterEvent {
        self.mutate(FilterStore::reset_all).await
    }

    /// Return filters, view and catalog to their initial state. Responses
    /// to requests issued before the reset are discarded.
    pub async fn reset(&self) -> FilterEvent {
        let mut state = self.state.write().await;
        self.sequencer.reset();
        state.catalog.clear();
        let change = state.store.reset();
        log_info!("Dashboard state reset");
        self.publish(&state.store, change)
    }

    /// Fetch the four option sources concurrently and refresh the catalog.
    ///
    /// A failed source keeps its previous catalog entries; the other sources
    /// are unaffected.
    pub async fn load_options(&self) -> OptionLoadReport {
        let unfiltered = FilterSet::new();
        let backend = self.backend.as_ref();

        let (clusters, tenants, namespaces, topics) = tokio::join!(
            self.refresh_options(
                Endpoint::Clusters,
                backend.clusters(&unfiltered),
                |catalog, clusters| {
                    catalog.refresh_level(
                        TopologyLevel::Cluster,
                        clusters.iter().map(|c| c.name.as_str()),
                    );
                    catalog.options(TopologyLevel::Cluster).len()
                },
            ),
            self.refresh_options(
                Endpoint::Tenants,
                backend.tenants(&unfiltered),
                |catalog, tenants| {
                    catalog.refresh_level(
                        TopologyLevel::Tenant,
                        tenants.iter().map(|t| t.name.as_str()),
                    );
                    catalog.options(TopologyLevel::Tenant).len()
                },
            ),
            self.refresh_options(
                Endpoint::Namespaces,
                backend.namespaces(&unfiltered),
                |catalog, namespaces| {
                    catalog.refresh_level(
                        TopologyLevel::Namespace,
                        namespaces.iter().map(|n| n.id.as_str()),
                    );
                    catalog.options(TopologyLevel::Namespace).len()
                },
            ),
            self.refresh_options(
                Endpoint::Topics,
                backend.topics(&unfiltered),
                |catalog, topics| {
                    catalog.refresh_level(
                        TopologyLevel::Topic,
                        topics.iter().map(|t| t.name.as_str()),
                    );
                    catalog.refresh_producers_and_subscriptions(&topics);
                    [
                        TopologyLevel::Topic,
                        TopologyLevel::Producer,
                        TopologyLevel::Subscription,
                    ]
                    .into_iter()
                    .map(|level| catalog.options(level).len())
                    .sum()
                },
            ),
        );

        let report = OptionLoadReport {
            outcomes: vec![clusters, tenants, namespaces, topics],
        };
        if report.all_applied() {
            log_info!("Filter options loaded");
        } else {
            log_warn!(
                "Fetching filter options did not fully succeed: {} of {} sources failed",
                report.failures().len(),
                report.outcomes.len()
            );
        }
        report
    }

    /// Fetch the entities for `view`, scoped by the current filters.
    ///
    /// Never touches filters or catalog. Failures come back as a display
    /// string.
    pub async fn fetch_scoped(&self, view: TopologyLevel) -> ScopedOutcome {
        let ticket = self.sequencer.issue(RequestSlot::Scoped(view));
        let filters = self.filters().await;

        let result = self.backend.fetch_scoped(view, &filters).await;

        if !self.sequencer.is_current(&ticket) {
            log_debug!(
                "Discarding stale {} view response from {} (sequence {})",
                view,
                Endpoint::for_view(view).path(),
                ticket.sequence
            );
            return ScopedOutcome::Superseded;
        }

        match result {
            Ok(data) => {
                log_debug!("Scoped {} view loaded {} entries", view, data.len());
                ScopedOutcome::Loaded(data)
            }
            Err(e) => {
                let category = categorize_error(&e, self.backend.request_timeout());
                log_warn!(
                    "Scoped {} view fetch failed ({}): {:#}",
                    view,
                    category.short_label(),
                    e
                );
                ScopedOutcome::Failed(category.user_message())
            }
        }
    }

    async fn refresh_options<T, Fut, A>(
        &self,
        endpoint: Endpoint,
        fetch: Fut,
        apply: A,
    ) -> OptionLoadOutcome
    where
        Fut: Future<Output = anyhow::Result<T>>,
        A: FnOnce(&mut OptionCatalog, T) -> usize,
    {
        let ticket = self.sequencer.issue(RequestSlot::Options(endpoint));

        let status = match fetch.await {
            Ok(payload) => {
                let mut state = self.state.write().await;
                if self.sequencer.is_current(&ticket) {
                    let options = apply(&mut state.catalog, payload);
                    log_debug!("Options from {} refreshed: {} values", endpoint.path(), options);
                    OptionLoadStatus::Applied { options }
                } else {
                    log_debug!(
                        "Discarding stale option response from {} (sequence {})",
                        endpoint.path(),
                        ticket.sequence
                    );
                    OptionLoadStatus::Superseded
                }
            }
            Err(e) => {
                let category = categorize_error(&e, self.backend.request_timeout());
                log_warn!(
                    "Option fetch from {} failed ({}): {:#}",
                    endpoint.path(),
                    category.short_label(),
                    e
                );
                OptionLoadStatus::Failed(category)
            }
        };

        OptionLoadOutcome { endpoint, status }
    }

    async fn mutate<F>(&self, apply: F) -> FilterEvent
    where
        F: FnOnce(&mut FilterStore) -> FilterChange,
    {
        let mut state = self.state.write().await;
        let change = apply(&mut state.store);
        if let Some((from, to, cleared)) = change.transition() {
            if !cleared.is_empty() {
                log_info!("View {} -> {} cleared filters on {:?}", from, to, cleared);
            }
        }
        self.publish(&state.store, change)
    }

    fn publish(&self, store: &FilterStore, change: FilterChange) -> FilterEvent {
        let event = FilterEvent {
            generation: store.generation(),
            view: store.view(),
            filters: store.filters().clone(),
            change,
        };
        self.events.publish(event.clone());
        event
    }
}
