//! Request object handed to route resolvers.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{ResolutionError, RouteError, RouteResult};

/// The outcome of matching one path against one pattern.
///
/// Carries the matched path (query stripped), captured parameters in both
/// keyed and positional form, the query map, and the errors recorded by
/// earlier candidates in the same resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingInfo {
	path: String,
	params: HashMap<String, String>,
	captures: Vec<(String, String)>,
	query: HashMap<String, String>,
	errors: Vec<ResolutionError>,
}

impl RoutingInfo {
	/// Info for `path` with no captures, query or errors.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			..Self::default()
		}
	}

	pub(crate) fn from_match(
		path: String,
		captures: Vec<(String, String)>,
		query: HashMap<String, String>,
	) -> Self {
		let params = captures.iter().cloned().collect();
		Self {
			path,
			params,
			captures,
			query,
			errors: Vec::new(),
		}
	}

	pub(crate) fn with_errors(mut self, errors: Vec<ResolutionError>) -> Self {
		self.errors = errors;
		self
	}

	/// The matched path without its query.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Captured parameters by name.
	pub fn params(&self) -> &HashMap<String, String> {
		&self.params
	}

	/// Raw value captured for `name`.
	pub fn param(&self, name: &str) -> Option<&str> {
		self.params.get(name).map(String::as_str)
	}

	/// Captured `(name, value)` pairs in pattern order.
	pub fn captures(&self) -> &[(String, String)] {
		&self.captures
	}

	/// Every query pair; a key without `=` maps to an empty string.
	pub fn query(&self) -> &HashMap<String, String> {
		&self.query
	}

	/// Raw query value for `key`.
	pub fn query_value(&self, key: &str) -> Option<&str> {
		self.query.get(key).map(String::as_str)
	}

	/// Errors recorded by earlier candidates in this resolution pass.
	pub fn errors(&self) -> &[ResolutionError] {
		&self.errors
	}

	/// Parses the capture `name`.
	///
	/// # Errors
	///
	/// [`RouteError::PatternMismatch`] if the route has no such capture,
	/// [`RouteError::InvalidField`] if the value does not parse.
	pub fn parse<T>(&self, name: &str) -> RouteResult<T>
	where
		T: FromStr,
		T::Err: fmt::Display,
	{
		let raw = self
			.param(name)
			.ok_or_else(|| RouteError::pattern_mismatch(&self.path))?;
		raw.parse::<T>()
			.map_err(|e| RouteError::invalid_field(&self.path, name, e))
	}

	/// Parses the query value `key`, if present.
	pub fn parse_query<T>(&self, key: &str) -> RouteResult<Option<T>>
	where
		T: FromStr,
		T::Err: fmt::Display,
	{
		self.query_value(key)
			.map(|raw| {
				raw.parse::<T>()
					.map_err(|e| RouteError::invalid_field(&self.path, key, e))
			})
			.transpose()
	}

	/// Resolves `relative` against this path.
	///
	/// `.` stays, `..` climbs one level (never above `/`), any other
	/// segment descends. A leading `/` on `relative` is ignored, so
	/// `"/next"` and `"./next"` both append to the current path.
	pub fn join(&self, relative: &str) -> String {
		join_path(&self.path, relative)
	}
}

pub(crate) fn join_path(base: &str, relative: &str) -> String {
	let mut stack: Vec<&str> = segments(base).collect();
	for segment in segments(relative) {
		match segment {
			"." => {}
			".." => {
				stack.pop();
			}
			other => stack.push(other),
		}
	}
	format!("/{}", stack.join("/"))
}

/// Non-empty `/`-separated segments of `path`.
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
	path.split('/').filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/next", "/home/next")]
	#[case("./next", "/home/next")]
	#[case("../next", "/next")]
	#[case("../../next", "/next")]
	#[case(".", "/home")]
	#[case("..", "/")]
	#[case("a/./b/../c", "/home/a/c")]
	fn test_join(#[case] relative: &str, #[case] expected: &str) {
		let info = RoutingInfo::new("/home");
		assert_eq!(info.join(relative), expected);
	}

	#[rstest]
	fn test_parse_capture() {
		// Arrange
		let info = RoutingInfo::from_match(
			"/users/42".to_string(),
			vec![("id".to_string(), "42".to_string())],
			HashMap::new(),
		);

		// Act
		let id: u64 = info.parse("id").unwrap();

		// Assert
		assert_eq!(id, 42);
		assert_eq!(info.param("id"), Some("42"));
	}

	#[rstest]
	fn test_parse_invalid_capture() {
		let info = RoutingInfo::from_match(
			"/users/abc".to_string(),
			vec![("id".to_string(), "abc".to_string())],
			HashMap::new(),
		);

		let result = info.parse::<u64>("id");

		assert!(matches!(
			result,
			Err(RouteError::InvalidField { ref field, .. }) if field == "id"
		));
	}

	#[rstest]
	fn test_parse_missing_capture() {
		let info = RoutingInfo::new("/users");

		let result = info.parse::<u64>("id");

		assert_eq!(result, Err(RouteError::pattern_mismatch("/users")));
	}

	#[rstest]
	fn test_parse_query() {
		let mut query = HashMap::new();
		query.insert("page".to_string(), "3".to_string());
		let info = RoutingInfo::from_match("/list".to_string(), Vec::new(), query);

		assert_eq!(info.parse_query::<u32>("page"), Ok(Some(3)));
		assert_eq!(info.parse_query::<u32>("size"), Ok(None));
	}
}
