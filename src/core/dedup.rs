//! Request deduplication keyed by input.
//!
//! Performs an idempotent fetch at most once per key, however many times the
//! caller re-evaluates. A key moves from absent to [`RequestState::Pending`]
//! when the first request is issued and to [`RequestState::Completed`] when
//! its response arrives. A failed request leaves the key pending.

use std::collections::HashMap;
use std::hash::Hash;

/// Progress of the request for one key.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestState<V> {
    /// Issued, no response yet
    Pending,
    /// Response received
    Completed(V),
}

/// Map from request key to request progress.
#[derive(Clone, Debug)]
pub struct RequestDedup<K, V> {
    requests: HashMap<K, RequestState<V>>,
}

impl<K, V> Default for RequestDedup<K, V> {
    fn default() -> Self {
        Self {
            requests: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> RequestDedup<K, V> {
    /// Claim the request for `key`.
    ///
    /// Returns `true` exactly once per key: the caller that gets `true` must
    /// issue the request. Later calls return `false` whether the request is
    /// still pending or already completed.
    pub fn begin(&mut self, key: &K) -> bool {
        if self.requests.contains_key(key) {
            return false;
        }
        self.requests.insert(key.clone(), RequestState::Pending);
        true
    }

    /// Record the response for `key`.
    pub fn complete(&mut self, key: K, value: V) {
        self.requests.insert(key, RequestState::Completed(value));
    }

    /// Response for `key`, once completed.
    pub fn completed(&self, key: &K) -> Option<&V> {
        match self.requests.get(key) {
            Some(RequestState::Completed(value)) => Some(value),
            _ => None,
        }
    }
}
