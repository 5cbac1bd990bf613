use std::time::{Duration, Instant};

use indexmap::IndexMap;

use crate::{FilterState, Resource};

pub const DEFAULT_CACHE_CAPACITY: usize = 32;
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, PartialEq, Eq)]
struct CachedList {
    resources: Vec<Resource>,
    stored_at: Instant,
}

/// Resource lists keyed by the filters that produced them.
///
/// Entries are kept in least-recently-used order: a hit moves the entry to the
/// back and inserts beyond `capacity` evict from the front. Entries older than
/// `ttl` are never returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResultCache {
    capacity: usize,
    ttl: Duration,
    entries: IndexMap<FilterState, CachedList>,
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL)
    }
}

impl ResultCache {
    pub(crate) fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            entries: IndexMap::new(),
        }
    }

    pub(crate) fn get(&mut self, key: &FilterState, now: Instant) -> Option<&[Resource]> {
        self.drop_expired(now);
        let index = self.entries.get_index_of(key)?;
        let last = self.entries.len() - 1;
        self.entries.move_index(index, last);
        self.entries
            .get_index(last)
            .map(|(_, cached)| cached.resources.as_slice())
    }

    pub(crate) fn insert(&mut self, key: FilterState, resources: Vec<Resource>, now: Instant) {
        if self.capacity == 0 {
            return;
        }
        self.drop_expired(now);
        self.entries.shift_remove(&key);
        self.entries.insert(
            key,
            CachedList {
                resources,
                stored_at: now,
            },
        );
        while self.entries.len() > self.capacity {
            self.entries.shift_remove_index(0);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    fn drop_expired(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, cached| now.saturating_duration_since(cached.stored_at) < ttl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TagSet;

    fn key(text: &str) -> FilterState {
        FilterState {
            search_text: Some(text.to_string()),
            tags: TagSet::new(),
            resource_type: None,
            category: None,
        }
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let start = Instant::now();
        let mut cache = ResultCache::new(2, DEFAULT_CACHE_TTL);
        cache.insert(key("a"), Vec::new(), start);
        cache.insert(key("b"), Vec::new(), start);
        assert!(cache.get(&key("a"), start).is_some());

        cache.insert(key("c"), Vec::new(), start);

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&key("b"), start).is_none());
        assert!(cache.get(&key("a"), start).is_some());
        assert!(cache.get(&key("c"), start).is_some());
    }

    #[test]
    fn expired_entries_are_dropped() {
        let start = Instant::now();
        let mut cache = ResultCache::new(8, Duration::from_secs(60));
        cache.insert(key("old"), Vec::new(), start);
        cache.insert(key("new"), Vec::new(), start + Duration::from_secs(30));

        let later = start + Duration::from_secs(61);
        assert!(cache.get(&key("old"), later).is_none());
        assert!(cache.get(&key("new"), later).is_some());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let now = Instant::now();
        let mut cache = ResultCache::new(0, DEFAULT_CACHE_TTL);
        cache.insert(key("a"), Vec::new(), now);
        assert_eq!(cache.len(), 0);
    }
}
