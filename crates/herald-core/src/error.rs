//! Error types for the notification core
//!
//! Collaborator failures are carried through unchanged so the caller of an
//! add or construction operation sees what the session or config backend
//! reported.

/// Failure reported by a session collaborator
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
	#[error("Session backend error: {0}")]
	Backend(String),

	#[error("Session unavailable: {0}")]
	Unavailable(String),
}

/// Failure reported by a configuration collaborator
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	#[error("Missing configuration key: {0}")]
	Missing(String),

	#[error("Invalid value for '{key}': {reason}")]
	Invalid { key: String, reason: String },
}

/// Top-level error for bag and notifier operations
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Session(#[from] SessionError),

	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(SessionError::Backend("redis down".into()), "Session backend error: redis down")]
	#[case(SessionError::Unavailable("no request".into()), "Session unavailable: no request")]
	fn test_session_error_display(#[case] error: SessionError, #[case] expected: &str) {
		assert_eq!(error.to_string(), expected);
	}

	#[test]
	fn test_collaborator_errors_are_transparent() {
		let err: Error = SessionError::Backend("write failed".into()).into();
		assert_eq!(err.to_string(), "Session backend error: write failed");

		let err: Error = ConfigError::Invalid {
			key: "default_format".into(),
			reason: "expected a string".into(),
		}
		.into();
		assert_eq!(
			err.to_string(),
			"Invalid value for 'default_format': expected a string"
		);
	}
}
