//! Built-in not-found content.

use std::fmt;

use crate::error::ResolutionError;
use crate::info::RoutingInfo;
use crate::view::View;

/// What the default not-found view shows.
///
/// Detailed reports list the requested path and every resolver error with
/// the pattern that raised it; plain reports show a generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundReport {
	path: String,
	errors: Vec<ResolutionError>,
	detailed: bool,
}

impl NotFoundReport {
	/// Describes the unmatched path in `info`; `detailed` keeps resolver errors.
	pub fn new(info: &RoutingInfo, detailed: bool) -> Self {
		Self {
			path: info.path().to_string(),
			errors: info.errors().to_vec(),
			detailed,
		}
	}

	/// The path that matched nothing.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Resolver errors collected before falling back.
	pub fn errors(&self) -> &[ResolutionError] {
		&self.errors
	}

	/// Whether resolver errors are shown.
	pub fn is_detailed(&self) -> bool {
		self.detailed
	}
}

impl fmt::Display for NotFoundReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if !self.detailed {
			return f.write_str("Not Found");
		}
		write!(f, "Not Found: {}", self.path)?;
		for error in &self.errors {
			write!(f, "\n  {error}")?;
		}
		Ok(())
	}
}

/// The view shown when no route and no custom not-found entry resolves.
pub fn default_not_found(info: &RoutingInfo, detailed: bool) -> View {
	View::NotFound(NotFoundReport::new(info, detailed))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::RouteError;
	use rstest::rstest;

	#[rstest]
	fn test_detailed_report_lists_errors() {
		// Arrange
		let info = RoutingInfo::new("/users/x").with_errors(vec![ResolutionError::new(
			"/users/:id",
			RouteError::invalid_field("/users/x", "id", "not a number"),
		)]);

		// Act
		let view = default_not_found(&info, true);

		// Assert
		assert_eq!(
			view.to_string(),
			"Not Found: /users/x\n  /users/:id: invalid field `id` in `/users/x`: not a number"
		);
	}

	#[rstest]
	fn test_plain_report_hides_details() {
		let info = RoutingInfo::new("/secret");

		let view = default_not_found(&info, false);

		assert_eq!(view.to_string(), "Not Found");
	}
}
