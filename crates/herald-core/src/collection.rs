//! Ordered collection of messages of one type

use crate::message::{Message, MessageRecord};
use std::fmt;
use std::ops::Index;

/// Insertion-ordered sequence of messages
///
/// Duplicates are allowed; a message has no identity beyond its position.
///
/// # Examples
///
/// ```
/// use herald_core::{Collection, Message};
///
/// let mut errors = Collection::new();
/// errors.push(Message::new("error", "first", ":message;", false));
/// errors.push(Message::new("error", "second", ":message;", false));
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first().map(Message::text), Some("first"));
/// assert_eq!(errors[1].text(), "second");
/// assert_eq!(errors.render(None), "first;second;");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
	messages: Vec<Message>,
}

impl Collection {
	pub const fn new() -> Self {
		Self {
			messages: Vec::new(),
		}
	}

	pub fn push(&mut self, message: Message) {
		self.messages.push(message);
	}

	pub fn len(&self) -> usize {
		self.messages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}

	pub fn first(&self) -> Option<&Message> {
		self.messages.first()
	}

	pub fn last(&self) -> Option<&Message> {
		self.messages.last()
	}

	pub fn get(&self, index: usize) -> Option<&Message> {
		self.messages.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Message> {
		self.messages.iter()
	}

	pub fn as_slice(&self) -> &[Message] {
		&self.messages
	}

	/// Field views of every message, in order
	pub fn to_records(&self) -> Vec<MessageRecord<'_>> {
		self.messages.iter().map(Message::to_record).collect()
	}

	/// Concatenate each message's rendering, in order, with no separator
	///
	/// `format` replaces every message's stored format for this call.
	pub fn render(&self, format: Option<&str>) -> String {
		self.messages.iter().map(|m| m.render(format)).collect()
	}
}

impl Index<usize> for Collection {
	type Output = Message;

	fn index(&self, index: usize) -> &Message {
		&self.messages[index]
	}
}

impl FromIterator<Message> for Collection {
	fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
		Self {
			messages: iter.into_iter().collect(),
		}
	}
}

impl Extend<Message> for Collection {
	fn extend<I: IntoIterator<Item = Message>>(&mut self, iter: I) {
		self.messages.extend(iter);
	}
}

impl IntoIterator for Collection {
	type Item = Message;
	type IntoIter = std::vec::IntoIter<Message>;

	fn into_iter(self) -> Self::IntoIter {
		self.messages.into_iter()
	}
}

impl<'a> IntoIterator for &'a Collection {
	type Item = &'a Message;
	type IntoIter = std::slice::Iter<'a, Message>;

	fn into_iter(self) -> Self::IntoIter {
		self.messages.iter()
	}
}

impl serde::Serialize for Collection {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serde::Serialize::serialize(&self.messages, serializer)
	}
}

impl fmt::Display for Collection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for message in &self.messages {
			fmt::Display::fmt(message, f)?;
		}
		Ok(())
	}
}
