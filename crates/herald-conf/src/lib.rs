//! # Herald Conf
//!
//! Notification settings loaded from layered sources.
//!
//! Sources are merged in priority order, higher priorities overriding lower
//! ones key by key:
//!
//! 1. [`DefaultSource`] (0): built-in defaults
//! 2. [`TomlFileSource`] (50): a TOML file, skipped when absent
//! 3. [`EnvSource`] (100): `HERALD_DEFAULT_FORMAT` and
//!    `HERALD_DEFAULT_FORMATS__<TYPE>`
//!
//! ## Example
//!
//! ```rust
//! use herald_conf::{DefaultSource, SettingsBuilder};
//! use herald_core::NotificationConfig;
//! use serde_json::json;
//!
//! let settings = SettingsBuilder::new()
//! 	.add_source(DefaultSource::new().with_value("default_format", json!(":message")))
//! 	.build()?;
//!
//! assert_eq!(settings.default_format()?, ":message");
//! assert!(settings.default_formats()?.is_empty());
//! # Ok::<(), herald_core::ConfigError>(())
//! ```
//!
//! A settings file looks like:
//!
//! ```toml
//! default_format = '<div class="alert alert-:type">:message</div>'
//!
//! [default_formats]
//! error = '<div class="alert alert-danger">:message</div>'
//! ```

pub mod settings;
pub mod sources;

pub use settings::{NotificationSettings, SettingsBuilder};
pub use sources::{ConfigSource, DefaultSource, EnvSource, SourceError, TomlFileSource};
