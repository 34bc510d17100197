//! Flash payload wire format
//!
//! A flash payload is a JSON array of
//! `{message, format, type, flashable, alias}` objects, in that field order.
//! Payloads read back from the session are parsed leniently: `flashable`
//! defaults to `false`, `alias` to absent, and a missing `format` is left for
//! the bag to resolve.

use crate::message::Message;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct FlashRecord<'a> {
	message: &'a str,
	format: &'a str,
	#[serde(rename = "type")]
	kind: &'a str,
	flashable: bool,
	alias: Option<&'a str>,
}

impl<'a> From<&'a Message> for FlashRecord<'a> {
	fn from(message: &'a Message) -> Self {
		Self {
			message: message.text(),
			format: message.format(),
			kind: message.kind(),
			flashable: message.is_flashable(),
			alias: message.alias(),
		}
	}
}

/// One entry of a payload read back from the session
#[derive(Debug, Deserialize)]
pub(crate) struct StoredRecord {
	pub(crate) message: String,
	#[serde(rename = "type")]
	pub(crate) kind: String,
	#[serde(default)]
	pub(crate) format: Option<String>,
	#[serde(default)]
	pub(crate) flashable: bool,
	#[serde(default)]
	pub(crate) alias: Option<String>,
}

pub(crate) fn encode(messages: &[Message]) -> serde_json::Result<String> {
	let records: Vec<FlashRecord<'_>> = messages.iter().map(FlashRecord::from).collect();
	serde_json::to_string(&records)
}

pub(crate) fn decode(payload: &str) -> serde_json::Result<Vec<StoredRecord>> {
	serde_json::from_str(payload)
}
