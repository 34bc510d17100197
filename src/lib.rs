//! # Herald
//!
//! Per-request notifications for web applications: collect typed status
//! messages during a request, render them through format templates, and
//! carry flashable ones into the next request through the session.
//!
//! ## Feature Flags
//!
//! - `sessions` - in-memory session store with one-hop flash data
//! - `conf` - layered settings (defaults, TOML file, environment)
//! - `full` (default) - everything above
//!
//! With `default-features = false` only the core bag, messages and
//! collaborator traits are built.
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "full")]
//! # fn main() -> Result<(), herald::Error> {
//! use herald::prelude::*;
//! use std::sync::Arc;
//!
//! let session = Arc::new(MemorySessionStore::new());
//! let settings = Arc::new(NotificationSettings::default());
//! let mut notifier = Notifier::new(session.clone(), settings);
//!
//! notifier.default_container()?.success("Account created", None)?;
//! notifier.default_container()?.info_instant("Check your inbox", Some(":message"));
//! assert_eq!(notifier.default_container()?.message_count(), 2);
//!
//! // Next request
//! session.age_flash_data();
//! let mut notifier = Notifier::new(session, Arc::new(NotificationSettings::default()));
//! assert_eq!(
//! 	notifier.default_container()?.to_string(),
//! 	r#"<div class="alert alert-success">Account created</div>"#
//! );
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "full"))]
//! # fn main() {}
//! ```

pub use herald_core::{
	BagSnapshot, BatchItem, Collection, ConfigError, Error, Message, NotificationConfig,
	NotificationsBag, Notifier, Result, SessionError, SessionStore, StaticConfig, TextInput,
};

pub mod core;
#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "sessions")]
pub mod sessions;

/// Re-export commonly used types
pub mod prelude {
	pub use herald_core::prelude::*;

	#[cfg(feature = "conf")]
	pub use herald_conf::{NotificationSettings, SettingsBuilder};

	#[cfg(feature = "sessions")]
	pub use herald_sessions::MemorySessionStore;
}
