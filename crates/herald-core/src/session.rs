//! Session collaborator
//!
//! The bag reads the previous request's flashed payload once, when it is
//! constructed, and stages a new payload through [`SessionStore::flash`] on
//! every flashable add. How staged values are carried to the next request
//! and replaced is owned by the store.

use crate::error::SessionError;

/// Prefix of the session key a bag flashes under
pub const SESSION_KEY_PREFIX: &str = "notifications_";

/// Session key used by the bag named `name`
///
/// # Examples
///
/// ```
/// use herald_core::session::session_key;
///
/// assert_eq!(session_key("test"), "notifications_test");
/// ```
pub fn session_key(name: &str) -> String {
	format!("{SESSION_KEY_PREFIX}{name}")
}

/// Key/value session store with a one-hop flash primitive
pub trait SessionStore: Send + Sync {
	/// Read the value stored under `key` for the current request
	fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

	/// Stage `value` under `key` so that it is readable by the next request
	fn flash(&self, key: &str, value: String) -> Result<(), SessionError>;
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
	fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
		(**self).get(key)
	}

	fn flash(&self, key: &str, value: String) -> Result<(), SessionError> {
		(**self).flash(key, value)
	}
}
