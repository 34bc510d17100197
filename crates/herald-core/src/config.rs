//! Configuration collaborator

use crate::error::ConfigError;
use crate::format::DEFAULT_FORMAT;
use indexmap::IndexMap;

/// Key holding the bag-wide default format
pub const DEFAULT_FORMAT_KEY: &str = "default_format";

/// Key holding the per-type default format table
pub const DEFAULT_FORMATS_KEY: &str = "default_formats";

/// Source of the default formats a bag starts with
pub trait NotificationConfig: Send + Sync {
	/// Value of [`DEFAULT_FORMAT_KEY`]
	fn default_format(&self) -> Result<String, ConfigError>;

	/// Value of [`DEFAULT_FORMATS_KEY`], type name to format
	fn default_formats(&self) -> Result<IndexMap<String, String>, ConfigError>;
}

impl<C: NotificationConfig + ?Sized> NotificationConfig for std::sync::Arc<C> {
	fn default_format(&self) -> Result<String, ConfigError> {
		(**self).default_format()
	}

	fn default_formats(&self) -> Result<IndexMap<String, String>, ConfigError> {
		(**self).default_formats()
	}
}

/// Fixed, in-process configuration
///
/// # Examples
///
/// ```
/// use herald_core::config::{NotificationConfig, StaticConfig};
///
/// let config = StaticConfig::new(":message").with_type_format("error", "<b>:message</b>");
/// assert_eq!(config.default_format().unwrap(), ":message");
/// assert_eq!(config.default_formats().unwrap()["error"], "<b>:message</b>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticConfig {
	default_format: String,
	default_formats: IndexMap<String, String>,
}

impl StaticConfig {
	pub fn new(default_format: impl Into<String>) -> Self {
		Self {
			default_format: default_format.into(),
			default_formats: IndexMap::new(),
		}
	}

	pub fn with_type_format(mut self, kind: impl Into<String>, format: impl Into<String>) -> Self {
		self.default_formats.insert(kind.into(), format.into());
		self
	}
}

impl Default for StaticConfig {
	fn default() -> Self {
		Self::new(DEFAULT_FORMAT)
	}
}

impl NotificationConfig for StaticConfig {
	fn default_format(&self) -> Result<String, ConfigError> {
		Ok(self.default_format.clone())
	}

	fn default_formats(&self) -> Result<IndexMap<String, String>, ConfigError> {
		Ok(self.default_formats.clone())
	}
}
