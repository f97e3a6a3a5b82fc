//! Last-request-wins bookkeeping for concurrent fetches.
//!
//! Every fetch takes a [`RequestTicket`] for its slot before it is sent. When
//! the response arrives it may only be applied if no newer ticket has been
//! issued for the same slot in the meantime.

use super::query::Endpoint;
use crate::app::topology::TopologyLevel;
use std::collections::HashMap;
use std::sync::Mutex;

/// What a fetch is for. Catalog fetches are keyed by endpoint, scoped
/// fetches by view, so topic, producer and subscription views never
/// supersede each other even though they read the same endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestSlot {
    Options(Endpoint),
    Scoped(TopologyLevel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub slot: RequestSlot,
    pub sequence: u64,
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: Mutex<HashMap<RequestSlot, u64>>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket for `slot`, superseding all earlier ones.
    pub fn issue(&self, slot: RequestSlot) -> RequestTicket {
        let mut latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        let sequence = latest.entry(slot).or_insert(0);
        *sequence += 1;
        RequestTicket {
            slot,
            sequence: *sequence,
        }
    }

    /// True while `ticket` is the newest one issued for its slot.
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        let latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        latest.get(&ticket.slot).copied() == Some(ticket.sequence)
    }

    /// Invalidate every outstanding ticket.
    pub fn reset(&self) {
        let mut latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        // Tickets issued before a reset never match one issued after it.
        for sequence in latest.values_mut() {
            *sequence += 1;
        }
    }
}
