//! Pulsar Dash - topology dashboard state for Apache Pulsar clusters
//!
//! Pulsar Dash models the state behind a monitoring dashboard that lets users browse a
//! messaging-cluster topology (clusters → tenants → namespaces → topics → producers and
//! subscriptions). Rendering is left to the embedding UI; this crate owns the parts that
//! have to stay consistent while the user drills up and down the hierarchy.
//!
//! # Architecture Overview
//!
//! - **Topology Model** ([`app::topology`]): the fixed, ordered set of hierarchy levels
//! - **Filter Store** ([`app::filter_store`]): active selections per level, the current view,
//!   the navigation rule that clears stale descendant filters, and the option catalog
//! - **Backend** ([`app::backend`]): typed response schemas, scoped query building, the HTTP
//!   client and request sequencing that drops stale responses
//! - **Dashboard** ([`app::dashboard`]): the explicitly constructed container that wires the
//!   store, catalog and backend together and publishes change events
//!
//! ## Key Architectural Patterns
//!
//! - **Explicit state container**: no process-wide store; consumers receive a [`Dashboard`]
//! - **Event-driven refetching**: every committed mutation publishes a
//!   [`app::filter_store::FilterEvent`] carrying the new scope
//! - **Last-request-wins**: responses carry a sequence ticket and are discarded once superseded
//!
//! # Getting Started
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use pulsardash::app::config::DashConfig;
//! use pulsardash::app::topology::TopologyLevel;
//! use pulsardash::Dashboard;
//!
//! let dashboard = Dashboard::from_config(&DashConfig::default())?;
//! dashboard.load_options().await;
//! dashboard.drill_to(TopologyLevel::Tenant, "public").await;
//! let outcome = dashboard.fetch_scoped(TopologyLevel::Tenant).await;
//! # let _ = outcome;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;
pub use app::dashboard::Dashboard;
