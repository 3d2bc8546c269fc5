//! Navigation host settings.

use serde::{Deserialize, Serialize};

/// Settings for [`NavigationHost`](crate::NavigationHost).
///
/// ```toml
/// [navigation]
/// debug_not_found = false
/// pool_capacity = 8
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
	/// Whether the built-in not-found view lists resolver errors.
	///
	/// `None` keeps the router's own setting (detailed in debug builds).
	pub debug_not_found: Option<bool>,

	/// Number of inactive root views kept for reuse.
	pub pool_capacity: usize,
}

impl Default for NavigationSettings {
	fn default() -> Self {
		Self {
			debug_not_found: None,
			pool_capacity: 4,
		}
	}
}

impl NavigationSettings {
	/// Creates settings with default values.
	pub fn new() -> Self {
		Self::default()
	}

	/// Overrides whether not-found views list resolver errors.
	pub fn debug_not_found(mut self, detailed: bool) -> Self {
		self.debug_not_found = Some(detailed);
		self
	}

	/// Sets how many root views stay mounted off screen.
	pub fn pool_capacity(mut self, capacity: usize) -> Self {
		self.pool_capacity = capacity;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_partial_table_keeps_defaults() {
		let settings: NavigationSettings = toml::from_str("pool_capacity = 2").unwrap();

		assert_eq!(settings.pool_capacity, 2);
		assert_eq!(settings.debug_not_found, None);
	}

	#[rstest]
	fn test_builder() {
		let settings = NavigationSettings::new().debug_not_found(true).pool_capacity(0);

		assert_eq!(settings.debug_not_found, Some(true));
		assert_eq!(settings.pool_capacity, 0);
	}
}
