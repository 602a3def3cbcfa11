//! Committed-state persistence
//!
//! The last committed cutoff pair of every band is saved under the
//! crossover's name so a power cycle restores the operator's settings.
//! The store itself is an abstract key/value blob namespace (NVS on
//! the real hardware); anything unreadable is treated as first boot,
//! because the device must always come up on its default frequencies.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use bytes::Bytes;

use crate::{model::CutoffPair, transport::XoverError};

/// Namespace holding all crossover state blobs.
pub const NAMESPACE: &str = "crossover";

/// Persisted shape: band head address (as a string key) to committed
/// cutoff pair.
pub type SavedState = BTreeMap<String, CutoffPair>;

/// Abstract key/value blob store.
pub trait SettingsStore: Send + Sync {
    fn put(&self, namespace: &str, key: &str, value: Bytes) -> Result<(), XoverError>;
    fn get(&self, namespace: &str, key: &str) -> Result<Option<Bytes>, XoverError>;
}

/// Serializes and stores the committed state for `name`, replacing any
/// prior blob in one put.
pub fn save_state(
    store: &dyn SettingsStore,
    name: &str,
    state: &SavedState,
) -> Result<(), XoverError> {
    let blob = serde_json::to_vec(state).map_err(|e| XoverError::Persistence(e.to_string()))?;
    store.put(NAMESPACE, name, blob.into())
}

/// Loads the committed state for `name`. Absent, unreadable and
/// corrupt blobs all come back as `None`.
pub fn load_state(store: &dyn SettingsStore, name: &str) -> Option<SavedState> {
    let blob = match store.get(NAMESPACE, name) {
        Ok(Some(blob)) => blob,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("settings store read failed for {}: {}", name, e);
            return None;
        }
    };

    match serde_json::from_slice(&blob) {
        Ok(state) => Some(state),
        Err(e) => {
            log::warn!("discarding corrupt saved state for {}: {}", name, e);
            None
        }
    }
}

/// Process-local store, used by the simulator and tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<(String, String), Bytes>>,
}

impl SettingsStore for MemoryStore {
    fn put(&self, namespace: &str, key: &str, value: Bytes) -> Result<(), XoverError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| XoverError::Persistence(e.to_string()))?;
        entries.insert((namespace.to_string(), key.to_string()), value);
        Ok(())
    }

    fn get(&self, namespace: &str, key: &str) -> Result<Option<Bytes>, XoverError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| XoverError::Persistence(e.to_string()))?;
        Ok(entries
            .get(&(namespace.to_string(), key.to_string()))
            .cloned())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample_state() -> SavedState {
        let mut state = SavedState::new();
        state.insert("0".to_string(), CutoffPair::new(100.0, 1000.0));
        state.insert("10".to_string(), CutoffPair::new(1000.0, 10_000.0));
        state
    }

    #[test]
    fn roundtrip() {
        let store = MemoryStore::default();
        let state = sample_state();
        save_state(&store, "Xover-L", &state).unwrap();
        assert_eq!(load_state(&store, "Xover-L"), Some(state));
    }

    #[test]
    fn absent_is_none() {
        let store = MemoryStore::default();
        assert_eq!(load_state(&store, "Xover-L"), None);
    }

    #[test]
    fn corrupt_blob_is_none() {
        let store = MemoryStore::default();
        store
            .put(NAMESPACE, "Xover-L", Bytes::from_static(b"{not json"))
            .unwrap();
        assert_eq!(load_state(&store, "Xover-L"), None);
    }

    #[test]
    fn save_overwrites() {
        let store = MemoryStore::default();
        save_state(&store, "Xover-L", &sample_state()).unwrap();

        let mut updated = sample_state();
        updated.insert("0".to_string(), CutoffPair::new(130.0, 1000.0));
        save_state(&store, "Xover-L", &updated).unwrap();

        assert_eq!(load_state(&store, "Xover-L"), Some(updated));
    }

    #[test]
    fn names_are_isolated() {
        let store = MemoryStore::default();
        save_state(&store, "Xover-L", &sample_state()).unwrap();
        assert_eq!(load_state(&store, "Xover-R"), None);
    }
}
