//! Format templates
//!
//! A format is an opaque template string in which the literal placeholders
//! `:type` and `:message` are substituted at render time. Templates without
//! placeholders are valid and render verbatim.

/// Placeholder replaced with the message type
pub const TYPE_PLACEHOLDER: &str = ":type";

/// Placeholder replaced with the message text
pub const MESSAGE_PLACEHOLDER: &str = ":message";

/// Built-in bag format used when no configuration overrides it
pub const DEFAULT_FORMAT: &str = r#"<div class="alert alert-:type">:message</div>"#;

/// Substitute `:type` and `:message` in `format`
///
/// Substitution is a single left-to-right pass: text inserted for one
/// placeholder is never scanned again, so a message containing `:type`
/// renders literally. No escaping is applied.
///
/// # Examples
///
/// ```
/// use herald_core::format::render;
///
/// assert_eq!(
/// 	render("<p class=\":type\">:message</p>", "error", "Oops"),
/// 	"<p class=\"error\">Oops</p>"
/// );
/// assert_eq!(render("static", "info", "ignored"), "static");
/// ```
pub fn render(format: &str, kind: &str, text: &str) -> String {
	let mut out = String::with_capacity(format.len() + text.len() + kind.len());
	let mut rest = format;

	while let Some(pos) = rest.find(':') {
		out.push_str(&rest[..pos]);
		let tail = &rest[pos..];

		if let Some(after) = tail.strip_prefix(MESSAGE_PLACEHOLDER) {
			out.push_str(text);
			rest = after;
		} else if let Some(after) = tail.strip_prefix(TYPE_PLACEHOLDER) {
			out.push_str(kind);
			rest = after;
		} else {
			out.push(':');
			rest = &tail[1..];
		}
	}

	out.push_str(rest);
	out
}
