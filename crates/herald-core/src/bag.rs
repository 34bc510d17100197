//! Per-request notification bag
//!
//! A [`NotificationsBag`] groups messages by type. Types are kept in the order
//! their first message arrived, and that order drives rendering and
//! serialization.
//!
//! ## Persistence modes
//!
//! - **Flashable** adds (`success`, `error`, ...) append to the bag and push
//!   exactly the messages of that call to the session, to be shown again
//!   after the next request reads them.
//! - **Instant** adds (`success_instant`, `error_instant`, ...) only append to
//!   the bag.
//!
//! ## Example
//!
//! ```rust
//! use herald_core::{NotificationsBag, StaticConfig, BatchItem, TextInput};
//! # use herald_core::{SessionStore, SessionError};
//! # struct NoSession;
//! # impl SessionStore for NoSession {
//! # 	fn get(&self, _: &str) -> Result<Option<String>, SessionError> { Ok(None) }
//! # 	fn flash(&self, _: &str, _: String) -> Result<(), SessionError> { Ok(()) }
//! # }
//!
//! let mut bag = NotificationsBag::new("main", NoSession, &StaticConfig::new(":type: :message\n"))?;
//! bag.success("Profile saved", None)?;
//! bag.info_instant(TextInput::batch([BatchItem::with_format("Heads up", "<i>:message</i>"), "Tip".into()]), None);
//!
//! assert_eq!(bag.type_count(), 2);
//! assert_eq!(bag.message_count(), 3);
//! assert_eq!(bag.show(None, None), "success: Profile saved\n<i>Heads up</i>info: Tip\n");
//! # Ok::<(), herald_core::Error>(())
//! ```

use crate::collection::Collection;
use crate::config::NotificationConfig;
use crate::error::Result;
use crate::input::TextInput;
use crate::message::Message;
use crate::payload;
use crate::session::{SessionStore, session_key};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

static EMPTY: Collection = Collection::new();

/// Serializable view of a bag
///
/// Serializes as `{collections, container, format}`, with collections in the
/// bag's type order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BagSnapshot<'a> {
	pub collections: &'a IndexMap<String, Collection>,
	pub container: &'a str,
	pub format: &'a str,
}

/// Named aggregator of typed message collections
pub struct NotificationsBag<S = Arc<dyn SessionStore>> {
	name: String,
	default_format: String,
	type_formats: IndexMap<String, String>,
	collections: IndexMap<String, Collection>,
	session: S,
}

impl<S: SessionStore> NotificationsBag<S> {
	/// Create a bag and rehydrate the messages flashed by the previous request
	///
	/// Formats are seeded from `config`. The session is read once, under
	/// `notifications_<name>`; an absent, empty or malformed payload leaves
	/// the bag empty. Rehydrated messages keep the format they were stored
	/// with.
	pub fn new<C>(name: impl Into<String>, session: S, config: &C) -> Result<Self>
	where
		C: NotificationConfig + ?Sized,
	{
		let mut bag = Self {
			name: name.into(),
			default_format: config.default_format()?,
			type_formats: config.default_formats()?,
			collections: IndexMap::new(),
			session,
		};
		bag.load_flashed()?;
		Ok(bag)
	}

	fn load_flashed(&mut self) -> Result<()> {
		let key = self.session_key();
		let Some(raw) = self.session.get(&key)? else {
			return Ok(());
		};
		if raw.trim().is_empty() {
			return Ok(());
		}

		let records = match payload::decode(&raw) {
			Ok(records) => records,
			Err(e) => {
				tracing::warn!(key = %key, error = %e, "Ignoring malformed flash payload");
				return Ok(());
			}
		};

		let count = records.len();
		for record in records {
			let format = match record.format {
				Some(format) => format,
				None => self.format_for(&record.kind).to_string(),
			};
			let mut message = Message::new(record.kind, record.message, format, record.flashable);
			if let Some(alias) = record.alias {
				message = message.with_alias(alias);
			}
			self.push(message);
		}

		tracing::debug!(key = %key, count, "Rehydrated flashed notifications");
		Ok(())
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Key this bag reads and flashes under
	pub fn session_key(&self) -> String {
		session_key(&self.name)
	}

	pub fn session(&self) -> &S {
		&self.session
	}

	pub fn session_mut(&mut self) -> &mut S {
		&mut self.session
	}

	/// Bag-wide default format
	pub fn format(&self) -> &str {
		&self.default_format
	}

	/// Per-type override for `kind`, else the bag-wide default
	pub fn format_for(&self, kind: &str) -> &str {
		self.type_formats
			.get(kind)
			.map(String::as_str)
			.unwrap_or(&self.default_format)
	}

	/// Per-type overrides, in the order they were first set
	pub fn type_formats(&self) -> &IndexMap<String, String> {
		&self.type_formats
	}

	/// Replace the bag-wide default format for messages added from now on
	pub fn set_format(&mut self, format: impl Into<String>) -> &mut Self {
		self.default_format = format.into();
		self
	}

	/// Set the format used for `kind` messages added from now on
	pub fn set_format_for(&mut self, kind: impl Into<String>, format: impl Into<String>) -> &mut Self {
		self.type_formats.insert(kind.into(), format.into());
		self
	}

	/// Add messages of any type
	///
	/// Each message's format is resolved now: the per-item format of a batch
	/// element, else `format`, else the type override, else the bag default.
	/// A flashable call pushes a payload holding exactly the messages it
	/// added; a batch with no items adds nothing and flashes nothing.
	pub fn add(
		&mut self,
		kind: &str,
		text: impl Into<TextInput>,
		format: Option<&str>,
		flashable: bool,
		alias: Option<&str>,
	) -> Result<&mut Self> {
		let added = self.build(kind, text.into(), format, flashable, alias);
		if added.is_empty() {
			return Ok(self);
		}

		let staged = if flashable {
			Some(payload::encode(&added)?)
		} else {
			None
		};

		let count = added.len();
		for message in added {
			self.push(message);
		}

		if let Some(value) = staged {
			let key = self.session_key();
			tracing::debug!(key = %key, kind, count, "Flashing notifications");
			self.session.flash(&key, value)?;
		}

		Ok(self)
	}

	/// [`add`](Self::add) with an alias attached to every message of the call
	pub fn add_aliased(
		&mut self,
		kind: &str,
		text: impl Into<TextInput>,
		format: Option<&str>,
		flashable: bool,
		alias: &str,
	) -> Result<&mut Self> {
		self.add(kind, text, format, flashable, Some(alias))
	}

	fn build(
		&self,
		kind: &str,
		text: TextInput,
		format: Option<&str>,
		flashable: bool,
		alias: Option<&str>,
	) -> Vec<Message> {
		let resolved = format.unwrap_or_else(|| self.format_for(kind));

		text.into_parts()
			.into_iter()
			.map(|(text, own_format)| {
				let format = own_format.unwrap_or_else(|| resolved.to_string());
				let message = Message::new(kind, text, format, flashable);
				match alias {
					Some(alias) => message.with_alias(alias),
					None => message,
				}
			})
			.collect()
	}

	fn push(&mut self, message: Message) {
		self.collections
			.entry(message.kind().to_string())
			.or_default()
			.push(message);
	}

	pub fn success(&mut self, text: impl Into<TextInput>, format: Option<&str>) -> Result<&mut Self> {
		self.add("success", text, format, true, None)
	}

	pub fn warning(&mut self, text: impl Into<TextInput>, format: Option<&str>) -> Result<&mut Self> {
		self.add("warning", text, format, true, None)
	}

	pub fn info(&mut self, text: impl Into<TextInput>, format: Option<&str>) -> Result<&mut Self> {
		self.add("info", text, format, true, None)
	}

	pub fn error(&mut self, text: impl Into<TextInput>, format: Option<&str>) -> Result<&mut Self> {
		self.add("error", text, format, true, None)
	}

	/// Add messages shown only by the current request
	pub fn add_instant(
		&mut self,
		kind: &str,
		text: impl Into<TextInput>,
		format: Option<&str>,
	) -> &mut Self {
		for message in self.build(kind, text.into(), format, false, None) {
			self.push(message);
		}
		self
	}

	pub fn success_instant(&mut self, text: impl Into<TextInput>, format: Option<&str>) -> &mut Self {
		self.add_instant("success", text, format)
	}

	pub fn warning_instant(&mut self, text: impl Into<TextInput>, format: Option<&str>) -> &mut Self {
		self.add_instant("warning", text, format)
	}

	pub fn info_instant(&mut self, text: impl Into<TextInput>, format: Option<&str>) -> &mut Self {
		self.add_instant("info", text, format)
	}

	pub fn error_instant(&mut self, text: impl Into<TextInput>, format: Option<&str>) -> &mut Self {
		self.add_instant("error", text, format)
	}

	/// Messages of `kind`; empty if the type was never used
	pub fn get(&self, kind: &str) -> &Collection {
		self.collections.get(kind).unwrap_or(&EMPTY)
	}

	/// Every message, grouped by type in first-occurrence order
	pub fn all(&self) -> Collection {
		self.collections.values().flatten().cloned().collect()
	}

	/// Number of distinct types present
	pub fn type_count(&self) -> usize {
		self.collections.len()
	}

	/// Number of messages across all types
	pub fn message_count(&self) -> usize {
		self.collections.values().map(Collection::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.message_count() == 0
	}

	pub fn has(&self, kind: &str) -> bool {
		self.collections.contains_key(kind)
	}

	/// Type names in first-occurrence order
	pub fn types(&self) -> impl Iterator<Item = &str> {
		self.collections.keys().map(String::as_str)
	}

	pub fn collections(&self) -> &IndexMap<String, Collection> {
		&self.collections
	}

	/// First message carrying `alias`, in type order then insertion order
	pub fn find_alias(&self, alias: &str) -> Option<&Message> {
		self.collections
			.values()
			.flatten()
			.find(|m| m.alias() == Some(alias))
	}

	/// Render one type, or every type in order when `kind` is `None`
	///
	/// `format` replaces each rendered message's stored format for this call.
	pub fn show(&self, kind: Option<&str>, format: Option<&str>) -> String {
		match kind {
			Some(kind) => self.get(kind).render(format),
			None => self
				.collections
				.values()
				.map(|collection| collection.render(format))
				.collect(),
		}
	}

	pub fn show_success(&self, format: Option<&str>) -> String {
		self.show(Some("success"), format)
	}

	pub fn show_warning(&self, format: Option<&str>) -> String {
		self.show(Some("warning"), format)
	}

	pub fn show_info(&self, format: Option<&str>) -> String {
		self.show(Some("info"), format)
	}

	pub fn show_error(&self, format: Option<&str>) -> String {
		self.show(Some("error"), format)
	}

	pub fn to_array(&self) -> BagSnapshot<'_> {
		BagSnapshot {
			collections: &self.collections,
			container: &self.name,
			format: &self.default_format,
		}
	}

	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(&self.to_array())?)
	}
}

impl<S: SessionStore> fmt::Display for NotificationsBag<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.show(None, None))
	}
}

impl<S> fmt::Debug for NotificationsBag<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NotificationsBag")
			.field("name", &self.name)
			.field("default_format", &self.default_format)
			.field("type_formats", &self.type_formats)
			.field("collections", &self.collections)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::StaticConfig;
	use crate::error::{Error, SessionError};
	use crate::input::BatchItem;
	use rstest::{fixture, rstest};
	use serde_json::json;
	use std::sync::Mutex;

	/// Session double that serves a fixed payload and records flashes
	#[derive(Default)]
	struct RecordingSession {
		stored: Option<String>,
		flashed: Mutex<Vec<(String, String)>>,
		fail_flash: bool,
	}

	impl SessionStore for RecordingSession {
		fn get(&self, _key: &str) -> std::result::Result<Option<String>, SessionError> {
			Ok(self.stored.clone())
		}

		fn flash(&self, key: &str, value: String) -> std::result::Result<(), SessionError> {
			if self.fail_flash {
				return Err(SessionError::Backend("flash rejected".into()));
			}
			self.flashed.lock().unwrap().push((key.to_string(), value));
			Ok(())
		}
	}

	const HTML: &str = r#"<div class="alert alert-:type">:message</div>"#;

	#[fixture]
	fn bag() -> NotificationsBag<RecordingSession> {
		NotificationsBag::new("test", RecordingSession::default(), &StaticConfig::new(HTML)).unwrap()
	}

	#[fixture]
	fn seeded() -> NotificationsBag<RecordingSession> {
		let session = RecordingSession {
			stored: Some(
				r#"[{"type":"error","message":"test error","format":":message!"},{"type":"warning","message":"test warning","format":":message..."}]"#
					.into(),
			),
			..Default::default()
		};
		NotificationsBag::new("test", session, &StaticConfig::new(HTML)).unwrap()
	}

	#[rstest]
	fn test_new_bag_is_empty(bag: NotificationsBag<RecordingSession>) {
		assert_eq!(bag.name(), "test");
		assert_eq!(bag.session_key(), "notifications_test");
		assert_eq!(bag.format(), HTML);
		assert_eq!(bag.type_count(), 0);
		assert!(bag.is_empty());
		assert_eq!(bag.show(None, None), "");
	}

	#[rstest]
	fn test_rehydrates_in_payload_order(seeded: NotificationsBag<RecordingSession>) {
		assert_eq!(seeded.types().collect::<Vec<_>>(), ["error", "warning"]);
		assert_eq!(seeded.message_count(), 2);

		let first = seeded.get("error").first().unwrap();
		assert_eq!(first.text(), "test error");
		assert_eq!(first.format(), ":message!");
		assert!(!first.is_flashable());
	}

	#[rstest]
	#[case(None)]
	#[case(Some(""))]
	#[case(Some("   "))]
	#[case(Some("{not json"))]
	#[case(Some(r#"{"type":"error","message":"object, not array"}"#))]
	fn test_unusable_payload_starts_empty(#[case] stored: Option<&str>) {
		let session = RecordingSession {
			stored: stored.map(String::from),
			..Default::default()
		};
		let bag = NotificationsBag::new("test", session, &StaticConfig::new(HTML)).unwrap();

		assert_eq!(bag.type_count(), 0);
	}

	#[rstest]
	fn test_rehydration_without_format_resolves_once() {
		let session = RecordingSession {
			stored: Some(r#"[{"type":"error","message":"bare","alias":"login"}]"#.into()),
			..Default::default()
		};
		let config = StaticConfig::new(HTML).with_type_format("error", "!:message");
		let mut bag = NotificationsBag::new("test", session, &config).unwrap();
		bag.set_format_for("error", "changed");

		let message = bag.find_alias("login").unwrap();
		assert_eq!(message.format(), "!:message");
		assert_eq!(message.text(), "bare");
	}

	#[rstest]
	fn test_flashable_add_pushes_only_its_messages(mut bag: NotificationsBag<RecordingSession>) {
		bag.success("all ok", Some("custom: :message")).unwrap();
		bag.error(["one", "two"], None).unwrap();

		let flashed = bag.session().flashed.lock().unwrap().clone();
		assert_eq!(flashed.len(), 2);
		assert_eq!(flashed[0].0, "notifications_test");
		assert_eq!(
			flashed[0].1,
			r#"[{"message":"all ok","format":"custom: :message","type":"success","flashable":true,"alias":null}]"#
		);
		let second: serde_json::Value = serde_json::from_str(&flashed[1].1).unwrap();
		assert_eq!(second.as_array().unwrap().len(), 2);
		assert_eq!(second[1]["message"], "two");
	}

	#[rstest]
	fn test_instant_add_never_flashes(mut bag: NotificationsBag<RecordingSession>) {
		bag.success_instant("s m", None)
			.warning_instant("w m", None)
			.info_instant("i m", None)
			.error_instant("e m", None);
		bag.add("custom", "generic", None, false, None).unwrap();

		assert!(bag.session().flashed.lock().unwrap().is_empty());
		assert_eq!(bag.type_count(), 5);
		assert!(bag.all().iter().all(|m| !m.is_flashable()));
	}

	#[rstest]
	fn test_empty_batch_adds_and_flashes_nothing(mut bag: NotificationsBag<RecordingSession>) {
		bag.info(Vec::<BatchItem>::new(), None).unwrap();

		assert!(!bag.has("info"));
		assert!(bag.session().flashed.lock().unwrap().is_empty());
	}

	#[rstest]
	fn test_flash_failure_propagates() {
		let session = RecordingSession {
			fail_flash: true,
			..Default::default()
		};
		let mut bag = NotificationsBag::new("test", session, &StaticConfig::new(HTML)).unwrap();

		let err = bag.warning("lost", None).unwrap_err();
		assert!(matches!(err, Error::Session(SessionError::Backend(_))));
		assert_eq!(bag.get("warning").len(), 1);
	}

	#[rstest]
	fn test_format_precedence(mut bag: NotificationsBag<RecordingSession>) {
		bag.set_format_for("error", "E: :message");
		bag.error_instant("typed", None)
			.error_instant("explicit", Some("X: :message"))
			.info_instant("default", None);

		assert_eq!(bag.get("error")[0].format(), "E: :message");
		assert_eq!(bag.get("error")[1].format(), "X: :message");
		assert_eq!(bag.get("info")[0].format(), HTML);
	}

	#[rstest]
	fn test_format_is_fixed_at_creation(mut bag: NotificationsBag<RecordingSession>) {
		bag.info_instant("A", None);
		bag.set_format("F2 :message");
		bag.info_instant("B", None);

		assert_eq!(bag.get("info")[0].format(), HTML);
		assert_eq!(bag.get("info")[1].format(), "F2 :message");
		assert_eq!(
			bag.show_info(None),
			r#"<div class="alert alert-info">A</div>F2 B"#
		);
	}

	#[rstest]
	fn test_format_getters(mut bag: NotificationsBag<RecordingSession>) {
		bag.set_format(":message").set_format_for("error", ":message!");

		assert_eq!(bag.format(), ":message");
		assert_eq!(bag.format_for("error"), ":message!");
		assert_eq!(bag.format_for("info"), ":message");
	}

	#[rstest]
	fn test_batch_plain_items_use_call_format(mut bag: NotificationsBag<RecordingSession>) {
		bag.info_instant(
			[BatchItem::with_format("first", "<1>:message"), BatchItem::plain("second")],
			Some("<call>:message"),
		);

		assert_eq!(bag.get("info")[0].format(), "<1>:message");
		assert_eq!(bag.get("info")[1].format(), "<call>:message");
	}

	#[rstest]
	fn test_get_unknown_type_is_empty(bag: NotificationsBag<RecordingSession>) {
		assert!(bag.get("never").is_empty());
		assert!(!bag.has("never"));
	}

	#[rstest]
	fn test_counts(mut seeded: NotificationsBag<RecordingSession>) {
		seeded.info("a", None).unwrap();
		seeded.error_instant(["b", "c"], None);

		assert_eq!(seeded.type_count(), 3);
		assert_eq!(seeded.message_count(), 5);
		assert_eq!(seeded.all().len(), 5);
		let sum: usize = seeded.collections().values().map(Collection::len).sum();
		assert_eq!(sum, seeded.all().len());
	}

	#[rstest]
	fn test_all_groups_by_first_occurrence(mut bag: NotificationsBag<RecordingSession>) {
		bag.info_instant("i1", None)
			.error_instant("e1", None)
			.info_instant("i2", None);

		let texts: Vec<_> = bag.all().iter().map(|m| m.text().to_string()).collect();
		assert_eq!(texts, ["i1", "i2", "e1"]);
	}

	#[rstest]
	fn test_show_override_ignores_stored_format(mut seeded: NotificationsBag<RecordingSession>) {
		seeded.error_instant("e m", None);

		assert_eq!(seeded.show(Some("error"), Some("[:type] :message;")), "[error] test error;[error] e m;");
		assert_eq!(seeded.show_error(None), r#"test error!<div class="alert alert-error">e m</div>"#);
		assert_eq!(seeded.to_string(), seeded.show(None, None));
	}

	#[rstest]
	fn test_aliases_are_stored_without_dedup(mut bag: NotificationsBag<RecordingSession>) {
		bag.add_aliased("success", "first", None, true, "saved").unwrap();
		bag.add_aliased("success", "second", None, false, "saved").unwrap();

		assert_eq!(bag.get("success").len(), 2);
		assert_eq!(bag.find_alias("saved").unwrap().text(), "first");
		assert!(bag.find_alias("missing").is_none());

		let flashed = bag.session().flashed.lock().unwrap().clone();
		assert!(flashed[0].1.ends_with(r#""alias":"saved"}]"#));
	}

	#[rstest]
	fn test_to_array_shape(mut seeded: NotificationsBag<RecordingSession>) {
		seeded.set_format(":message");
		seeded.success_instant("s m", None);

		assert_eq!(
			serde_json::to_value(seeded.to_array()).unwrap(),
			json!({
				"collections": {
					"error": [
						{"message": "test error", "type": "error", "format": ":message!", "flashable": false, "alias": null}
					],
					"warning": [
						{"message": "test warning", "type": "warning", "format": ":message...", "flashable": false, "alias": null}
					],
					"success": [
						{"message": "s m", "type": "success", "format": ":message", "flashable": false, "alias": null}
					]
				},
				"container": "test",
				"format": ":message"
			})
		);
	}

	#[rstest]
	fn test_to_json_preserves_type_order(mut bag: NotificationsBag<RecordingSession>) {
		bag.warning_instant("w", None).error_instant("e", None);
		let encoded = bag.to_json().unwrap();

		assert!(encoded.starts_with(r#"{"collections":{"warning":"#));
		assert!(encoded.find(r#""warning""#) < encoded.find(r#""error""#));
		assert!(encoded.ends_with(&format!(r#""container":"test","format":{}}}"#, serde_json::to_string(HTML).unwrap())));
	}
}
