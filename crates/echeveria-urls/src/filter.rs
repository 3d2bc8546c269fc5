//! Filters over the current path.
//!
//! Presentation code uses these to show a piece of chrome (a sheet, an
//! overlay) only for some routes: `except` hides the value on matching
//! paths, `only` keeps it on matching paths alone.

use tracing::warn;

use crate::pattern::PathPattern;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
	Except,
	Only,
}

/// A set of route patterns applied to an optional current path.
#[derive(Debug, Clone)]
pub struct PathFilter {
	mode: Mode,
	patterns: Vec<PathPattern>,
}

impl PathFilter {
	/// Drops the current path when it matches any of `patterns`.
	pub fn except<I, S>(patterns: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self::with_mode(Mode::Except, patterns)
	}

	/// Keeps the current path only when it matches one of `patterns`.
	pub fn only<I, S>(patterns: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self::with_mode(Mode::Only, patterns)
	}

	fn with_mode<I, S>(mode: Mode, patterns: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let patterns = patterns
			.into_iter()
			.filter_map(|definition| match PathPattern::compile(definition.as_ref()) {
				Ok(pattern) => Some(pattern),
				Err(err) => {
					warn!(error = %err, "ignoring path filter entry");
					None
				}
			})
			.collect();
		Self { mode, patterns }
	}

	/// Returns `current` if the filter lets it through.
	pub fn apply<'a>(&self, current: Option<&'a str>) -> Option<&'a str> {
		let current = current?;
		let matched = self.patterns.iter().any(|pattern| pattern.is_match(current));
		match (&self.mode, matched) {
			(Mode::Except, false) | (Mode::Only, true) => Some(current),
			_ => None,
		}
	}

	/// Whether the filter lets `current` through.
	pub fn allows(&self, current: Option<&str>) -> bool {
		self.apply(current).is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(None, None)]
	#[case(Some("/home"), Some("/home"))]
	#[case(Some("/except"), None)]
	fn test_except(#[case] current: Option<&str>, #[case] expected: Option<&str>) {
		let filter = PathFilter::except(["/except"]);
		assert_eq!(filter.apply(current), expected);
	}

	#[rstest]
	#[case(None, None)]
	#[case(Some("/home"), None)]
	#[case(Some("/only"), Some("/only"))]
	fn test_only(#[case] current: Option<&str>, #[case] expected: Option<&str>) {
		let filter = PathFilter::only(["/only"]);
		assert_eq!(filter.apply(current), expected);
	}

	#[rstest]
	fn test_patterns_with_captures() {
		let filter = PathFilter::only(vec!["/article/:id".to_string()]);

		assert!(filter.allows(Some("/article/7")));
		assert!(!filter.allows(Some("/article")));
	}
}
