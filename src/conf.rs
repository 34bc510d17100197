//! Layered notification settings.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "conf")]
//! use herald::conf::NotificationSettings;
//! # #[cfg(feature = "conf")]
//! let settings = NotificationSettings::load("config/notifications.toml").unwrap();
//! ```

#[cfg(feature = "conf")]
pub use herald_conf::*;
