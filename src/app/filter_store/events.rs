//! Change notifications for scoped views.
//!
//! Views subscribe to a [`FilterEventBus`] and refetch whenever an event
//! arrives. Each event carries the full scope after the mutation, so a
//! subscriber never has to read the store to build its query.

use super::filter_set::FilterSet;
use crate::app::topology::TopologyLevel;
use serde::Serialize;
use tokio::sync::broadcast;

/// Default capacity of the broadcast channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// The mutation that produced a [`FilterEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterChange {
    Replaced {
        level: TopologyLevel,
    },
    Added {
        level: TopologyLevel,
        id: String,
    },
    Selected {
        level: TopologyLevel,
        id: String,
    },
    Removed {
        level: TopologyLevel,
        id: String,
    },
    Navigated {
        from: TopologyLevel,
        to: TopologyLevel,
        cleared: Vec<TopologyLevel>,
    },
    Drilled {
        from: TopologyLevel,
        to: TopologyLevel,
        id: String,
        cleared: Vec<TopologyLevel>,
    },
    Jumped {
        from: TopologyLevel,
        to: TopologyLevel,
        id: String,
        cleared: Vec<TopologyLevel>,
    },
    ResetAll,
    Reset,
}

impl FilterChange {
    /// True when the change moved the view.
    pub fn is_view_change(&self) -> bool {
        self.transition().is_some()
    }

    /// `(from, to, cleared)` for changes that moved the view.
    pub fn transition(&self) -> Option<(TopologyLevel, TopologyLevel, &[TopologyLevel])> {
        match self {
            FilterChange::Navigated { from, to, cleared }
            | FilterChange::Drilled { from, to, cleared, .. }
            | FilterChange::Jumped { from, to, cleared, .. } => {
                Some((*from, *to, cleared.as_slice()))
            }
            _ => None,
        }
    }
}

/// Published after a store mutation has been fully applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterEvent {
    /// Strictly increasing per mutation; consumers key refetches on it.
    pub generation: u64,
    pub view: TopologyLevel,
    pub filters: FilterSet,
    pub change: FilterChange,
}

#[derive(Debug, Clone)]
pub struct FilterEventBus {
    sender: broadcast::Sender<FilterEvent>,
}

impl Default for FilterEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl FilterEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FilterEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Returns the number of subscribers that received the event.
    pub fn publish(&self, event: FilterEvent) -> usize {
        let generation = event.generation;
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                log_debug!("No subscribers for filter event generation {}", generation);
                0
            }
        }
    }
}
