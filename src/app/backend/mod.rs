//! Dashboard backend access.
//!
//! - [`client`] - the [`TopologyBackend`] seam and its HTTP implementation
//! - [`types`] - response schemas
//! - [`query`] - endpoint selection and filter query strings
//! - [`errors`] - failure categories and user-facing messages
//! - [`sequencer`] - stale response detection

pub mod client;
pub mod errors;
pub mod query;
pub mod sequencer;
pub mod types;

pub use client::{HttpBackend, TopologyBackend};
pub use errors::{categorize_error, FetchErrorCategory};
pub use query::{query_pairs, scoped_url, Endpoint};
pub use sequencer::{RequestSequencer, RequestSlot, RequestTicket};
pub use types::{Cluster, Namespace, ScopedData, Tenant, Topic};
