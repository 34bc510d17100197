//! Text arguments accepted by the add operations
//!
//! An add call takes either one text or a batch whose items are plain texts
//! or `(text, format)` pairs. Every input is normalized to a list of
//! `(text, explicit format)` pairs before messages are built.

/// One element of a batch add
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchItem {
	/// Uses the call's resolved format
	Plain(String),
	/// Uses its own format for this element only
	WithFormat(String, String),
}

impl BatchItem {
	pub fn plain(text: impl Into<String>) -> Self {
		Self::Plain(text.into())
	}

	pub fn with_format(text: impl Into<String>, format: impl Into<String>) -> Self {
		Self::WithFormat(text.into(), format.into())
	}
}

impl From<&str> for BatchItem {
	fn from(text: &str) -> Self {
		Self::Plain(text.to_string())
	}
}

impl From<String> for BatchItem {
	fn from(text: String) -> Self {
		Self::Plain(text)
	}
}

impl<T: Into<String>, F: Into<String>> From<(T, F)> for BatchItem {
	fn from((text, format): (T, F)) -> Self {
		Self::WithFormat(text.into(), format.into())
	}
}

/// Text argument of an add call
///
/// # Examples
///
/// ```
/// use herald_core::{BatchItem, TextInput};
///
/// let single: TextInput = "Saved".into();
/// assert_eq!(single.len(), 1);
///
/// let batch = TextInput::batch([BatchItem::with_format("first", ":message"), "second".into()]);
/// assert_eq!(batch.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInput {
	Single(String),
	Batch(Vec<BatchItem>),
}

impl TextInput {
	pub fn batch<I, B>(items: I) -> Self
	where
		I: IntoIterator<Item = B>,
		B: Into<BatchItem>,
	{
		Self::Batch(items.into_iter().map(Into::into).collect())
	}

	/// Number of messages this input expands to
	pub fn len(&self) -> usize {
		match self {
			Self::Single(_) => 1,
			Self::Batch(items) => items.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Expand into `(text, explicit format)` pairs, preserving order
	pub(crate) fn into_parts(self) -> Vec<(String, Option<String>)> {
		match self {
			Self::Single(text) => vec![(text, None)],
			Self::Batch(items) => items
				.into_iter()
				.map(|item| match item {
					BatchItem::Plain(text) => (text, None),
					BatchItem::WithFormat(text, format) => (text, Some(format)),
				})
				.collect(),
		}
	}
}

impl From<&str> for TextInput {
	fn from(text: &str) -> Self {
		Self::Single(text.to_string())
	}
}

impl From<String> for TextInput {
	fn from(text: String) -> Self {
		Self::Single(text)
	}
}

impl From<&String> for TextInput {
	fn from(text: &String) -> Self {
		Self::Single(text.clone())
	}
}

impl From<Vec<BatchItem>> for TextInput {
	fn from(items: Vec<BatchItem>) -> Self {
		Self::Batch(items)
	}
}

impl From<Vec<&str>> for TextInput {
	fn from(items: Vec<&str>) -> Self {
		Self::batch(items)
	}
}

impl From<Vec<String>> for TextInput {
	fn from(items: Vec<String>) -> Self {
		Self::batch(items)
	}
}

impl<const N: usize> From<[BatchItem; N]> for TextInput {
	fn from(items: [BatchItem; N]) -> Self {
		Self::batch(items)
	}
}

impl<const N: usize> From<[&str; N]> for TextInput {
	fn from(items: [&str; N]) -> Self {
		Self::batch(items)
	}
}
