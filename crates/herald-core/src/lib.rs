//! # Herald Core
//!
//! Per-request, typed notifications for web applications.
//!
//! A [`NotificationsBag`] collects short status messages ("success",
//! "error", or any other type name) during one request, groups them by type
//! and renders them through format templates containing `:type` and
//! `:message`. Flashable messages are also pushed to a [`SessionStore`] so
//! the next request can show them again.
//!
//! ## Features
//!
//! - **Typed collections**: one ordered [`Collection`] per type, types kept in
//!   first-occurrence order
//! - **Late-bound formats**: a message's format is fixed when it is created,
//!   from an explicit format, a per-type override or the bag default
//! - **Flash or instant**: flashable adds stage a JSON payload in the session,
//!   instant adds stay request-local
//! - **Serialization**: [`NotificationsBag::to_array`] and
//!   [`NotificationsBag::to_json`]
//! - **Containers**: [`Notifier`] manages several named bags
//!
//! ## Example
//!
//! ```rust
//! use herald_core::{NotificationsBag, StaticConfig};
//! # use herald_core::{SessionStore, SessionError};
//! # struct NoSession;
//! # impl SessionStore for NoSession {
//! # 	fn get(&self, _: &str) -> Result<Option<String>, SessionError> { Ok(None) }
//! # 	fn flash(&self, _: &str, _: String) -> Result<(), SessionError> { Ok(()) }
//! # }
//!
//! let mut bag = NotificationsBag::new("main", NoSession, &StaticConfig::default())?;
//! bag.error_instant("Invalid e-mail", None);
//!
//! assert_eq!(bag.show(Some("error"), None), r#"<div class="alert alert-error">Invalid e-mail</div>"#);
//! # Ok::<(), herald_core::Error>(())
//! ```

pub mod bag;
pub mod collection;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod message;
pub mod notifier;
mod payload;
pub mod session;

pub use bag::{BagSnapshot, NotificationsBag};
pub use collection::Collection;
pub use config::{NotificationConfig, StaticConfig};
pub use error::{ConfigError, Error, Result, SessionError};
pub use input::{BatchItem, TextInput};
pub use message::{Message, MessageRecord};
pub use notifier::Notifier;
pub use session::SessionStore;

/// Re-export commonly used types
pub mod prelude {
	pub use crate::bag::*;
	pub use crate::collection::*;
	pub use crate::config::*;
	pub use crate::error::*;
	pub use crate::input::*;
	pub use crate::message::*;
	pub use crate::notifier::*;
	pub use crate::session::*;
}
