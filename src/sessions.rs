//! Session stores with one-hop flash data.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "sessions")]
//! # {
//! use herald::sessions::MemorySessionStore;
//!
//! let store = MemorySessionStore::new();
//! store.put("user", "alice");
//! assert_eq!(store.len(), 1);
//! # }
//! ```

#[cfg(feature = "sessions")]
pub use herald_sessions::*;
