//! Error types for route resolution.

use std::fmt;

use thiserror::Error;

/// Errors produced while compiling patterns or parsing a matched route.
///
/// `PatternMismatch` and `InvalidField` are raised by resolvers and
/// parameter parsers; the router collects them and keeps trying the
/// remaining routes instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
	/// The matched route does not have the shape the resolver expects.
	#[error("path `{path}` does not fit the route")]
	PatternMismatch { path: String },

	/// A captured or query value failed validation.
	#[error("invalid field `{field}` in `{path}`: {message}")]
	InvalidField {
		path: String,
		field: String,
		message: String,
	},

	/// A route definition could not be compiled.
	#[error("invalid route pattern `{definition}`: {reason}")]
	InvalidPattern { definition: String, reason: String },

	#[error("{0}")]
	Custom(String),
}

impl RouteError {
	/// The path does not fit the route that rejected it.
	pub fn pattern_mismatch(path: impl Into<String>) -> Self {
		Self::PatternMismatch { path: path.into() }
	}

	/// A captured field failed validation or parsing.
	pub fn invalid_field(
		path: impl Into<String>,
		field: impl Into<String>,
		message: impl fmt::Display,
	) -> Self {
		Self::InvalidField {
			path: path.into(),
			field: field.into(),
			message: message.to_string(),
		}
	}

	/// Returns `true` for errors raised while parsing a lexically matched path.
	pub fn is_parse_failure(&self) -> bool {
		matches!(self, Self::PatternMismatch { .. } | Self::InvalidField { .. })
	}
}

/// Result type alias for route operations.
pub type RouteResult<T> = Result<T, RouteError>;

/// A resolver failure recorded during one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{pattern}: {error}")]
pub struct ResolutionError {
	/// Definition of the route whose resolver failed.
	pub pattern: String,
	#[source]
	pub error: RouteError,
}

impl ResolutionError {
	/// Records that the route `pattern` failed with `error`.
	pub fn new(pattern: impl Into<String>, error: RouteError) -> Self {
		Self {
			pattern: pattern.into(),
			error,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_route_error_display() {
		assert_eq!(
			RouteError::pattern_mismatch("/users/x").to_string(),
			"path `/users/x` does not fit the route"
		);
		assert_eq!(
			RouteError::invalid_field("/users/x", "id", "invalid digit found in string").to_string(),
			"invalid field `id` in `/users/x`: invalid digit found in string"
		);
	}

	#[rstest]
	fn test_resolution_error_display() {
		let err = ResolutionError::new("/users/:id", RouteError::pattern_mismatch("/users/x"));
		assert_eq!(err.to_string(), "/users/:id: path `/users/x` does not fit the route");
	}

	#[rstest]
	#[case(RouteError::pattern_mismatch("/"), true)]
	#[case(RouteError::invalid_field("/", "id", "bad"), true)]
	#[case(RouteError::Custom("boom".into()), false)]
	fn test_is_parse_failure(#[case] err: RouteError, #[case] expected: bool) {
		assert_eq!(err.is_parse_failure(), expected);
	}
}
