//! Tunable transition settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::spring::SpringCurve;

/// Settings for timed and interactive transitions.
///
/// Every field has a default, so a partial TOML table deserializes cleanly:
///
/// ```toml
/// [transition]
/// stiffness = 800.0
/// duration_ms = 350
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSettings {
	/// Spring stiffness.
	pub stiffness: f64,

	/// Spring damping; `None` selects critical damping.
	pub damping: Option<f64>,

	/// Spring mass.
	pub mass: f64,

	/// Cut-off duration of finish/cancel animations in milliseconds.
	pub duration_ms: u64,

	/// Frame step used when a transition is run headless.
	pub frame_interval_ms: u64,

	/// Fraction of the container width (translation plus velocity) an
	/// edge pan must reach to commit.
	pub interactive_threshold: f64,
}

impl Default for TransitionSettings {
	fn default() -> Self {
		Self {
			stiffness: 1000.0,
			damping: None,
			mass: 3.0,
			duration_ms: 500,
			frame_interval_ms: 16,
			interactive_threshold: 0.5,
		}
	}
}

impl TransitionSettings {
	/// Creates settings with default values.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the spring stiffness.
	pub fn stiffness(mut self, stiffness: f64) -> Self {
		self.stiffness = stiffness;
		self
	}

	/// Sets an explicit spring damping.
	pub fn damping(mut self, damping: f64) -> Self {
		self.damping = Some(damping);
		self
	}

	/// Sets the spring mass.
	pub fn mass(mut self, mass: f64) -> Self {
		self.mass = mass;
		self
	}

	/// Sets the animation cut-off duration.
	pub fn duration(mut self, duration: Duration) -> Self {
		self.duration_ms = duration.as_millis() as u64;
		self
	}

	/// Sets the headless frame step.
	pub fn frame_interval(mut self, interval: Duration) -> Self {
		self.frame_interval_ms = interval.as_millis() as u64;
		self
	}

	/// Sets the interactive commit threshold.
	pub fn interactive_threshold(mut self, threshold: f64) -> Self {
		self.interactive_threshold = threshold;
		self
	}

	/// Builds the spring curve described by these settings.
	pub fn spring(&self) -> SpringCurve {
		let duration = Duration::from_millis(self.duration_ms);
		match self.damping {
			Some(damping) => SpringCurve::new(self.stiffness, damping, self.mass, duration),
			None => SpringCurve::critically_damped(self.stiffness, self.mass, duration),
		}
	}

	/// Frame step for headless runs; never zero.
	pub fn frame_step(&self) -> Duration {
		Duration::from_millis(self.frame_interval_ms.max(1))
	}
}
