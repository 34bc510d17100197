//! Notification settings and the builder that layers sources into them

use crate::sources::{ConfigSource, DefaultSource};
use herald_core::config::{DEFAULT_FORMAT_KEY, DEFAULT_FORMATS_KEY};
use herald_core::format::DEFAULT_FORMAT;
use herald_core::{ConfigError, NotificationConfig};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;

/// Default formats for notification bags
///
/// Non-string entries of `default_formats` are skipped with a warning, so a
/// placeholder entry in a settings file does not break loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
	#[serde(default = "default_format")]
	pub default_format: String,
	#[serde(default, deserialize_with = "string_entries")]
	pub default_formats: IndexMap<String, String>,
}

fn default_format() -> String {
	DEFAULT_FORMAT.to_string()
}

fn string_entries<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
	Ok(raw
		.into_iter()
		.filter_map(|(kind, value)| match value {
			Value::String(format) => Some((kind, format)),
			other => {
				tracing::warn!(kind = %kind, value = %other, "Skipping non-string type format");
				None
			}
		})
		.collect())
}

impl NotificationSettings {
	/// Settings layered from built-in defaults, `path` and the environment
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		SettingsBuilder::new()
			.add_source(DefaultSource::notifications())
			.add_source(crate::sources::TomlFileSource::new(path))
			.add_source(crate::sources::EnvSource::new())
			.build()
	}

	pub fn with_type_format(mut self, kind: impl Into<String>, format: impl Into<String>) -> Self {
		self.default_formats.insert(kind.into(), format.into());
		self
	}
}

impl Default for NotificationSettings {
	fn default() -> Self {
		Self {
			default_format: default_format(),
			default_formats: IndexMap::new(),
		}
	}
}

impl NotificationConfig for NotificationSettings {
	fn default_format(&self) -> Result<String, ConfigError> {
		Ok(self.default_format.clone())
	}

	fn default_formats(&self) -> Result<IndexMap<String, String>, ConfigError> {
		Ok(self.default_formats.clone())
	}
}

/// Merges configuration sources into [`NotificationSettings`]
///
/// Sources are applied from lowest to highest priority. Object values, such
/// as `default_formats`, are merged entry by entry; any other value replaces
/// the lower-priority one.
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Merged values before deserialization
	pub fn merged(&self) -> Result<IndexMap<String, Value>, ConfigError> {
		let mut sources: Vec<&dyn ConfigSource> = self.sources.iter().map(|source| source.as_ref()).collect();
		sources.sort_by_key(|source| source.priority());

		let mut merged = IndexMap::new();
		for source in sources {
			let values = source.load()?;
			tracing::debug!(source = %source.description(), keys = values.len(), "Loaded settings source");
			for (key, value) in values {
				merge_value(&mut merged, key, value);
			}
		}
		Ok(merged)
	}

	pub fn build(self) -> Result<NotificationSettings, ConfigError> {
		let merged = self.merged()?;

		if let Some(value) = merged.get(DEFAULT_FORMAT_KEY)
			&& !value.is_string()
		{
			return Err(ConfigError::Invalid {
				key: DEFAULT_FORMAT_KEY.to_string(),
				reason: format!("expected a string, found {value}"),
			});
		}
		if let Some(value) = merged.get(DEFAULT_FORMATS_KEY)
			&& !value.is_object()
		{
			return Err(ConfigError::Invalid {
				key: DEFAULT_FORMATS_KEY.to_string(),
				reason: format!("expected a table, found {value}"),
			});
		}

		serde_json::from_value(Value::Object(merged.into_iter().collect())).map_err(|e| {
			ConfigError::Invalid {
				key: "settings".to_string(),
				reason: e.to_string(),
			}
		})
	}
}

fn merge_value(target: &mut IndexMap<String, Value>, key: String, value: Value) {
	match (target.get_mut(&key), value) {
		(Some(Value::Object(existing)), Value::Object(incoming)) => {
			existing.extend(incoming);
		}
		(_, value) => {
			target.insert(key, value);
		}
	}
}
