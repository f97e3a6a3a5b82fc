//! Wire Format Frozen Tests
//!
//! Filter events and scoped view outcomes are serialized for the CLI output
//! and for any view layer listening on the event bus. These snapshots pin
//! their JSON shape so that a renamed field or a changed enum tag shows up
//! as a failing test instead of a silently broken consumer.

mod common;

use common::{topic, FakeBackend};
use insta::assert_json_snapshot;
use pulsardash::app::backend::ScopedData;
use pulsardash::app::dashboard::ScopedOutcome;
use pulsardash::app::topology::TopologyLevel;
use pulsardash::Dashboard;
use serde_json::json;
use std::sync::Arc;

/// A drill up from the topic view: the event names the cleared level and
/// carries the scope that remains.
#[tokio::test]
async fn test_filter_event_serialization() {
    let dashboard = Dashboard::new(Arc::new(FakeBackend::standalone()));
    dashboard.add_filter(TopologyLevel::Cluster, "standalone").await;
    dashboard.navigate(TopologyLevel::Topic).await;
    dashboard
        .add_filter(TopologyLevel::Topic, "persistent://public/default/orders")
        .await;

    let event = dashboard.drill_to(TopologyLevel::Tenant, "public").await;

    assert_json_snapshot!("filter_event_drilled", event);
}

#[test]
fn test_scoped_outcome_serialization() {
    let mut orders = topic("persistent://public/default/orders", &["p1"], &["billing"]);
    orders.namespace = Some("public/default".to_string());
    let outcome = ScopedOutcome::Loaded(ScopedData::Topics(vec![orders]));

    assert_json_snapshot!("scoped_outcome_loaded", outcome);
}

#[test]
fn test_unloaded_outcomes_serialization() {
    assert_eq!(
        serde_json::to_value(ScopedOutcome::Failed("Request timed out".to_string())).unwrap(),
        json!({ "status": "failed", "data": "Request timed out" })
    );
    assert_eq!(
        serde_json::to_value(ScopedOutcome::Superseded).unwrap(),
        json!({ "status": "superseded" })
    );
}
