//! Single notification message

use crate::format;
use serde::Serialize;
use std::fmt;

/// A typed notification message
///
/// A message's format is resolved once, when the message is created, and
/// never changes afterwards. Changing a bag's formats later only affects
/// messages created after the change.
///
/// Serializes as `{message, type, format, flashable, alias}`.
///
/// # Examples
///
/// ```
/// use herald_core::Message;
///
/// let msg = Message::new("success", "Saved", ":type - :message", true);
/// assert_eq!(msg.text(), "Saved");
/// assert_eq!(msg.render(None), "success - Saved");
/// assert_eq!(msg.render(Some("[:message]")), "[Saved]");
/// assert!(msg.is_flashable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
	#[serde(rename = "message")]
	text: String,
	#[serde(rename = "type")]
	kind: String,
	format: String,
	flashable: bool,
	alias: Option<String>,
}

impl Message {
	/// Create a message without an alias
	pub fn new(
		kind: impl Into<String>,
		text: impl Into<String>,
		format: impl Into<String>,
		flashable: bool,
	) -> Self {
		Self {
			text: text.into(),
			kind: kind.into(),
			format: format.into(),
			flashable,
			alias: None,
		}
	}

	/// Attach an alias used to look the message up later
	pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
		self.alias = Some(alias.into());
		self
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn kind(&self) -> &str {
		&self.kind
	}

	pub fn format(&self) -> &str {
		&self.format
	}

	pub fn is_flashable(&self) -> bool {
		self.flashable
	}

	pub fn alias(&self) -> Option<&str> {
		self.alias.as_deref()
	}

	/// Borrowed view of every field, in serialization order
	pub fn to_record(&self) -> MessageRecord<'_> {
		MessageRecord {
			message: &self.text,
			kind: &self.kind,
			format: &self.format,
			flashable: self.flashable,
			alias: self.alias.as_deref(),
		}
	}

	/// Render with `format_override` if given, else the stored format
	///
	/// The override applies to this call only.
	pub fn render(&self, format_override: Option<&str>) -> String {
		let template = format_override.unwrap_or(&self.format);
		format::render(template, &self.kind, &self.text)
	}
}

/// Plain field view of a [`Message`]
///
/// Serializes as `{message, type, format, flashable, alias}`, the same shape
/// as the message itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageRecord<'a> {
	pub message: &'a str,
	#[serde(rename = "type")]
	pub kind: &'a str,
	pub format: &'a str,
	pub flashable: bool,
	pub alias: Option<&'a str>,
}

impl fmt::Display for Message {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render(None))
	}
}
