//! Notification bag, messages and collaborator traits.
//!
//! # Examples
//!
//! ```rust
//! use herald::core::format::render;
//!
//! assert_eq!(render(":type: :message", "info", "hello"), "info: hello");
//! ```

pub use herald_core::*;
