//! Damped spring curve used to animate finish and cancel.
//!
//! The curve models a unit displacement released from rest on a
//! mass-spring-damper system and reports completion as `1 - displacement`.
//! The animation is cut off at `duration` and snaps to the target, the same
//! way a platform spring animation with an explicit duration does.

use std::time::Duration;

/// Tolerance for treating a damping ratio as critical.
const CRITICAL_EPSILON: f64 = 1e-6;

/// A mass-spring-damper curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringCurve {
	stiffness: f64,
	damping: f64,
	mass: f64,
	duration: Duration,
}

impl SpringCurve {
	/// Creates a curve with explicit parameters.
	///
	/// Non-positive stiffness or mass fall back to `1.0`; negative damping
	/// is treated as zero.
	pub fn new(stiffness: f64, damping: f64, mass: f64, duration: Duration) -> Self {
		Self {
			stiffness: if stiffness > 0.0 { stiffness } else { 1.0 },
			damping: damping.max(0.0),
			mass: if mass > 0.0 { mass } else { 1.0 },
			duration,
		}
	}

	/// Creates a critically damped curve (`damping = 2 * sqrt(stiffness * mass)`).
	pub fn critically_damped(stiffness: f64, mass: f64, duration: Duration) -> Self {
		let curve = Self::new(stiffness, 0.0, mass, duration);
		Self {
			damping: 2.0 * (curve.stiffness * curve.mass).sqrt(),
			..curve
		}
	}

	/// A curve that completes on its first sample.
	pub fn immediate() -> Self {
		Self::critically_damped(1.0, 1.0, Duration::ZERO)
	}

	/// Spring constant.
	pub fn stiffness(&self) -> f64 {
		self.stiffness
	}

	/// Damping coefficient.
	pub fn damping(&self) -> f64 {
		self.damping
	}

	/// Moving mass.
	pub fn mass(&self) -> f64 {
		self.mass
	}

	/// Cut-off after which the animation snaps to its target.
	pub fn duration(&self) -> Duration {
		self.duration
	}

	/// Damping ratio ζ. `1.0` is critical.
	pub fn damping_ratio(&self) -> f64 {
		self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
	}

	/// Returns whether the animation is over at `elapsed`.
	pub fn is_finished(&self, elapsed: Duration) -> bool {
		elapsed >= self.duration
	}

	/// Completion in `[0, 1]` after `elapsed`.
	pub fn progress(&self, elapsed: Duration) -> f64 {
		if self.is_finished(elapsed) {
			return 1.0;
		}
		(1.0 - self.displacement(elapsed.as_secs_f64())).clamp(0.0, 1.0)
	}

	/// Displacement from the target for a unit start offset and zero velocity.
	fn displacement(&self, t: f64) -> f64 {
		let omega = (self.stiffness / self.mass).sqrt();
		let zeta = self.damping_ratio();

		if (zeta - 1.0).abs() < CRITICAL_EPSILON {
			(1.0 + omega * t) * (-omega * t).exp()
		} else if zeta < 1.0 {
			let damped = omega * (1.0 - zeta * zeta).sqrt();
			let envelope = (-zeta * omega * t).exp();
			envelope * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin())
		} else {
			let root = (zeta * zeta - 1.0).sqrt();
			let r1 = -omega * (zeta - root);
			let r2 = -omega * (zeta + root);
			(r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
		}
	}
}

impl Default for SpringCurve {
	fn default() -> Self {
		Self::critically_damped(1000.0, 3.0, Duration::from_millis(500))
	}
}
