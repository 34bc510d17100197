//! In-memory session store
//!
//! Thread-safe through `RwLock`; share it across handlers with `Arc`.

use herald_core::{SessionError, SessionStore};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
struct SessionState {
	values: HashMap<String, String>,
	/// Keys in `values` that were flashed by the previous request
	flashed: HashSet<String>,
	/// Values flashed by the current request
	staged: HashMap<String, String>,
}

/// In-memory session with one-hop flash data
///
/// ## Example
///
/// ```
/// use herald_core::SessionStore;
/// use herald_sessions::MemorySessionStore;
///
/// let store = MemorySessionStore::new();
/// store.flash("notifications_main", "[]".to_string()).unwrap();
/// assert_eq!(store.get("notifications_main").unwrap(), None);
///
/// store.age_flash_data();
/// assert_eq!(store.get("notifications_main").unwrap().as_deref(), Some("[]"));
///
/// store.age_flash_data();
/// assert_eq!(store.get("notifications_main").unwrap(), None);
/// ```
#[derive(Debug, Default)]
pub struct MemorySessionStore {
	state: RwLock<SessionState>,
}

impl MemorySessionStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Store a value that persists until it is forgotten
	///
	/// Replaces any value flashed for `key` during this request.
	pub fn put(&self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		let mut state = self.state.write();
		state.flashed.remove(&key);
		state.staged.remove(&key);
		state.values.insert(key, value.into());
	}

	/// Remove `key`, including any value staged for the next request
	pub fn forget(&self, key: &str) -> Option<String> {
		let mut state = self.state.write();
		state.flashed.remove(key);
		state.staged.remove(key);
		state.values.remove(key)
	}

	/// End-of-request transition
	///
	/// Drops the values flashed by the previous request and makes the values
	/// staged during this request readable.
	pub fn age_flash_data(&self) {
		let mut state = self.state.write();
		let state = &mut *state;

		for key in state.flashed.drain() {
			state.values.remove(&key);
		}

		let staged = std::mem::take(&mut state.staged);
		tracing::debug!(count = staged.len(), "Aging session flash data");
		for (key, value) in staged {
			state.flashed.insert(key.clone());
			state.values.insert(key, value);
		}
	}

	/// Number of readable values
	pub fn len(&self) -> usize {
		self.state.read().values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl SessionStore for MemorySessionStore {
	fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
		Ok(self.state.read().values.get(key).cloned())
	}

	fn flash(&self, key: &str, value: String) -> Result<(), SessionError> {
		self.state.write().staged.insert(key.to_string(), value);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;

	#[fixture]
	fn store() -> MemorySessionStore {
		MemorySessionStore::new()
	}

	#[rstest]
	fn test_plain_values_survive_aging(store: MemorySessionStore) {
		store.put("user", "alice");
		store.age_flash_data();
		store.age_flash_data();

		assert_eq!(store.get("user").unwrap().as_deref(), Some("alice"));
		assert_eq!(store.len(), 1);
	}

	#[rstest]
	fn test_flash_survives_exactly_one_hop(store: MemorySessionStore) {
		store.flash("k", "v".to_string()).unwrap();
		assert!(store.is_empty());

		store.age_flash_data();
		assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
		// reading does not consume
		assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

		store.age_flash_data();
		assert_eq!(store.get("k").unwrap(), None);
	}

	#[rstest]
	fn test_last_flash_of_a_request_wins(store: MemorySessionStore) {
		store.flash("k", "first".to_string()).unwrap();
		store.flash("k", "second".to_string()).unwrap();
		store.age_flash_data();

		assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
	}

	#[rstest]
	fn test_reflash_keeps_value_for_another_hop(store: MemorySessionStore) {
		store.flash("k", "one".to_string()).unwrap();
		store.age_flash_data();
		store.flash("k", "two".to_string()).unwrap();
		store.age_flash_data();

		assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
	}

	#[rstest]
	fn test_put_makes_flashed_value_permanent(store: MemorySessionStore) {
		store.flash("k", "v".to_string()).unwrap();
		store.age_flash_data();
		store.put("k", "kept");
		store.age_flash_data();

		assert_eq!(store.get("k").unwrap().as_deref(), Some("kept"));
	}

	#[rstest]
	fn test_put_after_flash_in_same_request_stays_permanent(store: MemorySessionStore) {
		store.flash("k", "flashed".to_string()).unwrap();
		store.put("k", "kept");
		store.age_flash_data();

		assert_eq!(store.get("k").unwrap().as_deref(), Some("kept"));
		store.age_flash_data();
		assert_eq!(store.get("k").unwrap().as_deref(), Some("kept"));
	}

	#[rstest]
	fn test_forget_drops_staged_value(store: MemorySessionStore) {
		store.put("a", "1");
		store.flash("b", "2".to_string()).unwrap();

		assert_eq!(store.forget("a").as_deref(), Some("1"));
		store.forget("b");
		store.age_flash_data();

		assert!(store.is_empty());
	}
}
