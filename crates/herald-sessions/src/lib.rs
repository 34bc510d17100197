//! # Herald Sessions
//!
//! Session stores implementing [`herald_core::SessionStore`].
//!
//! ## Flash lifecycle
//!
//! A value passed to `flash` during request N is invisible to request N and
//! readable throughout request N+1. Calling [`MemorySessionStore::age_flash_data`]
//! at the end of each request performs that hand-over: values flashed by the
//! previous request are dropped and values staged by the current one become
//! readable.
//!
//! ## Quick Start
//!
//! ```rust
//! use herald_core::{NotificationsBag, StaticConfig};
//! use herald_sessions::MemorySessionStore;
//! use std::sync::Arc;
//!
//! let session = Arc::new(MemorySessionStore::new());
//! let config = StaticConfig::new(":message");
//!
//! // Request 1
//! let mut bag = NotificationsBag::new("main", session.clone(), &config)?;
//! bag.success("Saved", None)?;
//! session.age_flash_data();
//!
//! // Request 2
//! let bag = NotificationsBag::new("main", session.clone(), &config)?;
//! assert_eq!(bag.show(None, None), "Saved");
//! session.age_flash_data();
//!
//! // Request 3
//! let bag = NotificationsBag::new("main", session, &config)?;
//! assert!(bag.is_empty());
//! # Ok::<(), herald_core::Error>(())
//! ```

pub mod memory;

pub use memory::MemorySessionStore;
