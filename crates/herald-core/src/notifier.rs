//! Named notification containers
//!
//! A [`Notifier`] hands out one [`NotificationsBag`] per container name,
//! building each bag on first access from shared session and configuration
//! collaborators. Most applications only use the default container.

use crate::bag::NotificationsBag;
use crate::config::NotificationConfig;
use crate::error::Result;
use crate::session::SessionStore;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::sync::Arc;

/// Per-request registry of notification bags
///
/// # Examples
///
/// ```
/// use herald_core::{Notifier, StaticConfig};
/// # use herald_core::{SessionStore, SessionError};
/// # struct NoSession;
/// # impl SessionStore for NoSession {
/// # 	fn get(&self, _: &str) -> Result<Option<String>, SessionError> { Ok(None) }
/// # 	fn flash(&self, _: &str, _: String) -> Result<(), SessionError> { Ok(()) }
/// # }
/// use std::sync::Arc;
///
/// let mut notifier = Notifier::new(Arc::new(NoSession), Arc::new(StaticConfig::new(":message|")));
/// notifier.default_container()?.info_instant("Welcome", None);
/// notifier.container("sidebar")?.warning_instant("Low disk", None);
///
/// assert_eq!(notifier.container("sidebar")?.message_count(), 1);
/// assert_eq!(notifier.render_all(), "Welcome|Low disk|");
/// # Ok::<(), herald_core::Error>(())
/// ```
pub struct Notifier {
	session: Arc<dyn SessionStore>,
	config: Arc<dyn NotificationConfig>,
	default_container: String,
	containers: IndexMap<String, NotificationsBag>,
}

impl Notifier {
	pub const DEFAULT_CONTAINER: &'static str = "default";

	pub fn new(session: Arc<dyn SessionStore>, config: Arc<dyn NotificationConfig>) -> Self {
		Self {
			session,
			config,
			default_container: Self::DEFAULT_CONTAINER.to_string(),
			containers: IndexMap::new(),
		}
	}

	pub fn default_container_name(&self) -> &str {
		&self.default_container
	}

	/// Change which container [`default_container`](Self::default_container) returns
	pub fn set_default_container(&mut self, name: impl Into<String>) -> &mut Self {
		self.default_container = name.into();
		self
	}

	/// Bag for `name`, rehydrated from the session on first access
	pub fn container(&mut self, name: &str) -> Result<&mut NotificationsBag> {
		match self.containers.entry(name.to_string()) {
			Entry::Occupied(entry) => Ok(entry.into_mut()),
			Entry::Vacant(entry) => {
				let bag = NotificationsBag::new(name, Arc::clone(&self.session), self.config.as_ref())?;
				tracing::debug!(container = name, "Created notification container");
				Ok(entry.insert(bag))
			}
		}
	}

	pub fn default_container(&mut self) -> Result<&mut NotificationsBag> {
		let name = self.default_container.clone();
		self.container(&name)
	}

	/// Containers built so far, in creation order
	pub fn containers(&self) -> impl Iterator<Item = &NotificationsBag> {
		self.containers.values()
	}

	/// Rendering of every built container, in creation order
	pub fn render_all(&self) -> String {
		self.containers.values().map(|bag| bag.show(None, None)).collect()
	}
}
