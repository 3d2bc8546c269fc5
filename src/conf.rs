//! Application settings loaded from TOML.
//!
//! ```toml
//! [transition]
//! duration_ms = 350
//! interactive_threshold = 0.4
//!
//! [navigation]
//! debug_not_found = true
//! pool_capacity = 8
//! ```
//!
//! Every table and field is optional.

use std::path::{Path, PathBuf};

use echeveria_navigation::NavigationSettings;
use echeveria_transition::TransitionSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a settings file.
#[derive(Debug, Error)]
pub enum ConfError {
	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML error: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Result type for settings loading.
pub type ConfResult<T> = Result<T, ConfError>;

/// Settings for an Echeveria application, one table per crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub transition: TransitionSettings,
	pub navigation: NavigationSettings,
}

impl Settings {
	/// Parses settings from a TOML document.
	///
	/// # Errors
	///
	/// [`ConfError::Parse`] if `contents` is not valid TOML or a field has
	/// the wrong type.
	pub fn from_toml_str(contents: &str) -> ConfResult<Self> {
		Ok(toml::from_str(contents)?)
	}

	/// Reads and parses the file at `path`.
	///
	/// # Errors
	///
	/// [`ConfError::Io`] if the file cannot be read, [`ConfError::Parse`] if
	/// its contents are rejected.
	pub fn from_path(path: impl AsRef<Path>) -> ConfResult<Self> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path).map_err(|source| ConfError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		debug!(path = %path.display(), "loading settings");
		Self::from_toml_str(&contents)
	}

	/// Replaces the transition table.
	pub fn transition(mut self, transition: TransitionSettings) -> Self {
		self.transition = transition;
		self
	}

	/// Replaces the navigation table.
	pub fn navigation(mut self, navigation: NavigationSettings) -> Self {
		self.navigation = navigation;
		self
	}
}
