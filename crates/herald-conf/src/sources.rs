//! Configuration sources for layered notification settings

use herald_core::ConfigError;
use herald_core::config::{DEFAULT_FORMAT_KEY, DEFAULT_FORMATS_KEY};
use herald_core::format::DEFAULT_FORMAT;
use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

impl From<SourceError> for ConfigError {
	fn from(err: SourceError) -> Self {
		ConfigError::Invalid {
			key: "source".to_string(),
			reason: err.to_string(),
		}
	}
}

/// Default values configuration source
#[derive(Default)]
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	/// Create an empty default source
	///
	/// # Examples
	///
	/// ```
	/// use herald_conf::DefaultSource;
	/// use serde_json::json;
	///
	/// let source = DefaultSource::new().with_value("default_format", json!("<p>:message</p>"));
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Built-in notification defaults
	///
	/// The bag format is a Bootstrap-style alert and no type has its own
	/// format.
	pub fn notifications() -> Self {
		Self::new()
			.with_value(DEFAULT_FORMAT_KEY, Value::String(DEFAULT_FORMAT.to_string()))
			.with_value(DEFAULT_FORMATS_KEY, Value::Object(Default::default()))
	}

	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0 // Lowest priority
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}

/// TOML file configuration source
pub struct TomlFileSource {
	path: PathBuf,
}

impl TomlFileSource {
	/// # Examples
	///
	/// ```
	/// use herald_conf::{ConfigSource, TomlFileSource};
	///
	/// let source = TomlFileSource::new("config/notifications.toml");
	/// assert_eq!(source.priority(), 50);
	/// ```
	pub fn new(path: impl AsRef<Path>) -> Self {
		Self {
			path: path.as_ref().to_path_buf(),
		}
	}

	/// Parse TOML text into top-level settings values
	pub fn parse(content: &str) -> Result<IndexMap<String, Value>, SourceError> {
		let toml_value: toml::Value = toml::from_str(content)?;
		let json_value = serde_json::to_value(toml_value)?;

		match json_value {
			Value::Object(map) => Ok(map.into_iter().collect()),
			_ => Err(SourceError::Parse("Expected table at root".to_string())),
		}
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		Self::parse(&content)
	}

	fn priority(&self) -> u8 {
		50 // Medium priority
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Environment variable configuration source
///
/// With the default prefix `HERALD_`:
///
/// - `HERALD_DEFAULT_FORMAT` sets `default_format`
/// - `HERALD_DEFAULT_FORMATS__ERROR` sets `default_formats.error`
pub struct EnvSource {
	prefix: String,
}

impl EnvSource {
	pub const DEFAULT_PREFIX: &'static str = "HERALD_";

	pub fn new() -> Self {
		Self {
			prefix: Self::DEFAULT_PREFIX.to_string(),
		}
	}

	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Build settings values from `(name, value)` pairs
	pub fn collect<I>(&self, vars: I) -> IndexMap<String, Value>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		let mut config = IndexMap::new();
		let mut formats = serde_json::Map::new();
		let formats_prefix = format!("{}__", DEFAULT_FORMATS_KEY);

		for (key, value) in vars {
			let Some(clean_key) = key.strip_prefix(&self.prefix) else {
				continue;
			};
			let lower_key = clean_key.to_lowercase();

			if lower_key == DEFAULT_FORMAT_KEY {
				config.insert(lower_key, Value::String(value));
			} else if let Some(kind) = lower_key.strip_prefix(&formats_prefix)
				&& !kind.is_empty()
			{
				formats.insert(kind.to_string(), Value::String(value));
			}
		}

		if !formats.is_empty() {
			config.insert(DEFAULT_FORMATS_KEY.to_string(), Value::Object(formats));
		}
		config
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.collect(std::env::vars()))
	}

	fn priority(&self) -> u8 {
		100 // Highest priority
	}

	fn description(&self) -> String {
		format!("Environment variables (prefix: {})", self.prefix)
	}
}
