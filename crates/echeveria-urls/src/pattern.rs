//! Path pattern compilation and matching.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{RouteError, RouteResult};
use crate::info::{RoutingInfo, segments};

/// Prefix of virtual routes that never take part in normal matching.
pub const FEATURE_PREFIX: char = '!';

/// Definition of the reserved not-found route.
pub const NOT_FOUND: &str = "!not-found";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
	Literal(String),
	Capture(String),
}

/// A compiled route definition.
///
/// Definitions are `/`-separated; a segment starting with `:` captures the
/// segment at that position under the remaining name:
///
/// - `/users` matches `/users` only
/// - `/users/:id` matches `/users/42` with `id = "42"`
/// - `!not-found` is a feature route matching only its own definition
///
/// Matching is positional: the path must have exactly as many segments as
/// the pattern. Leading, trailing and repeated slashes are ignored on both
/// sides, and a `?key=value&flag` suffix is parsed into the query map.
#[derive(Debug, Clone)]
pub struct PathPattern {
	definition: String,
	tokens: Vec<Token>,
	capture_names: Vec<String>,
	feature: bool,
}

impl PathPattern {
	/// Compiles `definition`.
	///
	/// # Errors
	///
	/// [`RouteError::InvalidPattern`] if `definition` is empty. Every other
	/// input compiles.
	pub fn compile(definition: &str) -> RouteResult<Self> {
		if definition.is_empty() {
			return Err(RouteError::InvalidPattern {
				definition: String::new(),
				reason: "route definition is empty".to_string(),
			});
		}

		if definition.starts_with(FEATURE_PREFIX) {
			return Ok(Self {
				definition: definition.to_string(),
				tokens: Vec::new(),
				capture_names: Vec::new(),
				feature: true,
			});
		}

		let tokens: Vec<Token> = segments(definition)
			.map(|segment| match segment.strip_prefix(':') {
				Some(name) => Token::Capture(name.to_string()),
				None => Token::Literal(segment.to_string()),
			})
			.collect();
		let capture_names = tokens
			.iter()
			.filter_map(|token| match token {
				Token::Capture(name) => Some(name.clone()),
				Token::Literal(_) => None,
			})
			.collect();

		Ok(Self {
			definition: normalize(definition),
			tokens,
			capture_names,
			feature: false,
		})
	}

	/// The `/` pattern.
	pub fn root() -> Self {
		Self {
			definition: "/".to_string(),
			tokens: Vec::new(),
			capture_names: Vec::new(),
			feature: false,
		}
	}

	/// Returns the definition, normalized for path routes.
	pub fn definition(&self) -> &str {
		&self.definition
	}

	/// Capture names in pattern order.
	pub fn capture_names(&self) -> &[String] {
		&self.capture_names
	}

	/// Number of path segments the pattern expects.
	pub fn segment_count(&self) -> usize {
		self.tokens.len()
	}

	/// Whether this is a virtual `!` route.
	pub fn is_feature(&self) -> bool {
		self.feature
	}

	/// Whether the pattern has no captures.
	pub fn is_exact(&self) -> bool {
		self.capture_names.is_empty()
	}

	/// Matches `path`, returning the captured parameters and query.
	///
	/// `None` means the path has a different segment count or a literal
	/// segment differs. That is a non-match, not an error.
	pub fn matches(&self, path: &str) -> Option<RoutingInfo> {
		if self.feature {
			return (path == self.definition).then(|| RoutingInfo::new(path));
		}

		let (route, query) = split_query(path);
		let mut captures = Vec::with_capacity(self.capture_names.len());
		let mut remaining = segments(route);

		for token in &self.tokens {
			let segment = remaining.next()?;
			match token {
				Token::Literal(text) if text != segment => return None,
				Token::Literal(_) => {}
				Token::Capture(name) => captures.push((name.clone(), segment.to_string())),
			}
		}
		if remaining.next().is_some() {
			return None;
		}

		Some(RoutingInfo::from_match(
			route.to_string(),
			captures,
			query.map(parse_query).unwrap_or_default(),
		))
	}

	/// Checks if this pattern would match `path`.
	pub fn is_match(&self, path: &str) -> bool {
		self.matches(path).is_some()
	}

	/// Builds a concrete path from `params`.
	///
	/// Returns `None` if a capture has no value. Feature routes reverse to
	/// their definition.
	pub fn reverse(&self, params: &HashMap<String, String>) -> Option<String> {
		if self.feature {
			return Some(self.definition.clone());
		}

		let mut parts = Vec::with_capacity(self.tokens.len());
		for token in &self.tokens {
			match token {
				Token::Literal(text) => parts.push(text.as_str()),
				Token::Capture(name) => parts.push(params.get(name)?.as_str()),
			}
		}
		Some(format!("/{}", parts.join("/")))
	}
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.definition == other.definition
	}
}

impl Eq for PathPattern {}

impl Hash for PathPattern {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.definition.hash(state);
	}
}

impl fmt::Display for PathPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.definition)
	}
}

/// Canonical form of a route path: one leading slash, no trailing or
/// repeated slashes. Feature definitions are returned unchanged.
///
/// ```
/// use echeveria_urls::pattern::normalize;
///
/// assert_eq!(normalize("users//42/"), "/users/42");
/// assert_eq!(normalize(""), "/");
/// ```
pub fn normalize(path: &str) -> String {
	if path.starts_with(FEATURE_PREFIX) {
		return path.to_string();
	}
	let mut normalized = String::with_capacity(path.len() + 1);
	normalized.push('/');
	for segment in path.split('/').filter(|segment| !segment.is_empty()) {
		if !normalized.ends_with('/') {
			normalized.push('/');
		}
		normalized.push_str(segment);
	}
	normalized
}

/// Splits `path?query` at the first `?`.
fn split_query(path: &str) -> (&str, Option<&str>) {
	match path.split_once('?') {
		Some((route, query)) => (route, Some(query)),
		None => (path, None),
	}
}

/// Parses `a=1&b&c=x=y` into `{a: "1", b: "", c: "x=y"}`. Last key wins.
fn parse_query(query: &str) -> HashMap<String, String> {
	query
		.split('&')
		.filter(|pair| !pair.is_empty())
		.map(|pair| match pair.split_once('=') {
			Some((key, value)) => (key.to_string(), value.to_string()),
			None => (pair.to_string(), String::new()),
		})
		.collect()
}
