use crate::app::backend::types::Topic;
use crate::app::topology::TopologyLevel;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Placeholder the backend emits for missing names; never offered as an option.
pub const UNDEFINED_OPTION: &str = "undefined";

/// Deduplicated selectable values per topology level, fed by fetches.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OptionCatalog {
    options: HashMap<TopologyLevel, Vec<String>>,
    refreshed_at: HashMap<TopologyLevel, DateTime<Utc>>,
}

impl OptionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Known values for `level`, in first-seen order.
    pub fn options(&self, level: TopologyLevel) -> &[String] {
        self.options.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn refreshed_at(&self, level: TopologyLevel) -> Option<DateTime<Utc>> {
        self.refreshed_at.get(&level).copied()
    }

    /// Replace the entry for `level` with a deduplicated copy of `raw_values`.
    pub fn refresh_level<I, S>(&mut self, level: TopologyLevel, raw_values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = dedup_options(raw_values);
        log_debug!("Catalog refresh for {}: {} options", level, values.len());
        self.store(level, values);
    }

    /// Replace the producer and subscription entries with the union of the
    /// identifiers nested in `topics`, each deduplicated on its own.
    pub fn refresh_producers_and_subscriptions(&mut self, topics: &[Topic]) {
        let producers = dedup_options(topics.iter().flat_map(|t| t.producers.iter()));
        let subscriptions = dedup_options(topics.iter().flat_map(|t| t.subscriptions.iter()));

        log_debug!(
            "Catalog refresh from {} topics: {} producers, {} subscriptions",
            topics.len(),
            producers.len(),
            subscriptions.len()
        );
        self.store(TopologyLevel::Producer, producers);
        self.store(TopologyLevel::Subscription, subscriptions);
    }

    pub fn clear(&mut self) {
        self.options.clear();
        self.refreshed_at.clear();
    }

    /// Total number of options across all levels.
    pub fn len(&self) -> usize {
        self.options.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn store(&mut self, level: TopologyLevel, values: Vec<String>) {
        self.options.insert(level, values);
        self.refreshed_at.insert(level, Utc::now());
    }
}

/// Drop duplicates and the `"undefined"` placeholder, keeping first-seen order.
pub fn dedup_options<I, S>(raw_values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for value in raw_values {
        let value = value.as_ref();
        if value == UNDEFINED_OPTION {
            continue;
        }
        if seen.insert(value.to_string()) {
            values.push(value.to_string());
        }
    }
    values
}
