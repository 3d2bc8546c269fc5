//! Launcher entry descriptors.

use serde::{Deserialize, Serialize};

/// Icon shown for a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
	/// Image from the app's asset catalogue.
	Asset {
		name: String,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		bundle: Option<String>,
	},
	/// Platform symbol by name.
	System { name: String },
}

impl Icon {
	/// An image bundled with the application.
	pub fn asset(name: impl Into<String>) -> Self {
		Self::Asset {
			name: name.into(),
			bundle: None,
		}
	}

	/// A platform symbol.
	pub fn system(name: impl Into<String>) -> Self {
		Self::System { name: name.into() }
	}
}

/// Where the presentation layer places a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeafPlacement {
	Launcher,
	Switcher,
	Drawer,
	Inspector,
}

/// A navigable launcher entry (tab).
///
/// Every leaf path becomes an independent navigation root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
	pub title: String,
	pub icon: Icon,
	pub path: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub placement: Option<LeafPlacement>,
}

impl Leaf {
	/// Creates a leaf with no placement.
	pub fn new(title: impl Into<String>, icon: Icon, path: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			icon,
			path: path.into(),
			placement: None,
		}
	}

	/// Sets where the leaf appears.
	pub fn placement(mut self, placement: LeafPlacement) -> Self {
		self.placement = Some(placement);
		self
	}

	/// Whether the leaf shows up in `placement`.
	pub fn is_placed(&self, placement: LeafPlacement) -> bool {
		self.placement == Some(placement)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_leaf_serde() {
		// Arrange
		let leaf = Leaf::new("Home", Icon::system("house"), "/home").placement(LeafPlacement::Launcher);

		// Act
		let json = serde_json::to_value(&leaf).unwrap();
		let back: Leaf = serde_json::from_value(json.clone()).unwrap();

		// Assert
		assert_eq!(
			json,
			serde_json::json!({
				"title": "Home",
				"icon": { "system": { "name": "house" } },
				"path": "/home",
				"placement": "launcher",
			})
		);
		assert_eq!(back, leaf);
	}

	#[rstest]
	fn test_placement_is_optional() {
		let leaf: Leaf = serde_json::from_str(
			r#"{"title":"Search","icon":{"asset":{"name":"magnifier"}},"path":"/search"}"#,
		)
		.unwrap();

		assert_eq!(leaf.placement, None);
		assert_eq!(leaf.icon, Icon::asset("magnifier"));
		assert!(!leaf.is_placed(LeafPlacement::Launcher));
	}
}
