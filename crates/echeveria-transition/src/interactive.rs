//! Gesture-driven transitions.
//!
//! An edge pan drives a [`TransitionEngine`] directly: the gesture start
//! prepares it, every movement updates it with `translation / width`, and
//! the release decides between finish and cancel.

use tracing::debug;

use crate::context::TransitionContext;
use crate::engine::TransitionEngine;
use crate::error::TransitionResult;

/// One sample of a horizontal pan gesture. Distances are in container points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanGesture {
	Began { translation: f64 },
	Changed { translation: f64 },
	Ended { translation: f64, velocity: f64 },
	/// The system interrupted the gesture.
	Cancelled,
}

/// Outcome of a released edge pan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDecision {
	Commit,
	Rollback,
}

/// Commits when `translation + velocity` covers `threshold` of `width`.
pub fn decide(translation: f64, velocity: f64, width: f64, threshold: f64) -> PanDecision {
	if width <= 0.0 {
		return PanDecision::Rollback;
	}
	if (translation + velocity) / width >= threshold {
		PanDecision::Commit
	} else {
		PanDecision::Rollback
	}
}

/// Translates pan gestures into engine calls.
#[derive(Debug, Clone, Copy)]
pub struct EdgePanTracker {
	threshold: f64,
}

impl Default for EdgePanTracker {
	fn default() -> Self {
		Self { threshold: 0.5 }
	}
}

impl EdgePanTracker {
	/// Creates a tracker committing at `threshold` of the container width.
	pub fn new(threshold: f64) -> Self {
		Self { threshold }
	}

	/// Fraction of the width a release must cover to commit.
	pub fn threshold(&self) -> f64 {
		self.threshold
	}

	/// Prepares `engine` for an interactive run.
	pub fn began(&self, engine: &mut TransitionEngine, ctx: &mut TransitionContext<'_>) -> TransitionResult<()> {
		engine.prepare(ctx)
	}

	/// Moves `engine` to the percent the pan has covered.
	pub fn changed(
		&self,
		translation: f64,
		engine: &mut TransitionEngine,
		ctx: &mut TransitionContext<'_>,
	) -> TransitionResult<()> {
		let width = ctx.bounds().width;
		let percent = if width > 0.0 { translation / width } else { 0.0 };
		engine.update(percent, ctx)
	}

	/// Applies the final translation and starts finish or cancel.
	pub fn ended(
		&self,
		translation: f64,
		velocity: f64,
		engine: &mut TransitionEngine,
		ctx: &mut TransitionContext<'_>,
	) -> TransitionResult<PanDecision> {
		self.changed(translation, engine, ctx)?;
		let decision = decide(translation, velocity, ctx.bounds().width, self.threshold);
		debug!(translation, velocity, ?decision, "edge pan released");
		match decision {
			PanDecision::Commit => engine.finish()?,
			PanDecision::Rollback => engine.cancel()?,
		}
		Ok(decision)
	}

	/// An interrupted gesture always rolls back.
	pub fn interrupted(&self, engine: &mut TransitionEngine) -> TransitionResult<PanDecision> {
		engine.cancel()?;
		Ok(PanDecision::Rollback)
	}

	/// Dispatches one gesture sample. Returns the decision once the gesture ends.
	pub fn handle(
		&self,
		gesture: PanGesture,
		engine: &mut TransitionEngine,
		ctx: &mut TransitionContext<'_>,
	) -> TransitionResult<Option<PanDecision>> {
		match gesture {
			PanGesture::Began { translation } => {
				self.began(engine, ctx)?;
				self.changed(translation, engine, ctx)?;
				Ok(None)
			}
			PanGesture::Changed { translation } => {
				self.changed(translation, engine, ctx)?;
				Ok(None)
			}
			PanGesture::Ended {
				translation,
				velocity,
			} => self.ended(translation, velocity, engine, ctx).map(Some),
			PanGesture::Cancelled => self.interrupted(engine).map(Some),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	#[case(150.0, 0.0, PanDecision::Rollback)]
	#[case(200.0, 0.0, PanDecision::Commit)]
	#[case(50.0, 200.0, PanDecision::Commit)]
	#[case(300.0, -250.0, PanDecision::Rollback)]
	fn test_decide(#[case] translation: f64, #[case] velocity: f64, #[case] expected: PanDecision) {
		assert_eq!(decide(translation, velocity, 400.0, 0.5), expected);
	}

	#[rstest]
	fn test_zero_width_rolls_back() {
		assert_eq!(decide(10.0, 10.0, 0.0, 0.5), PanDecision::Rollback);
	}

	proptest! {
		#[rstest]
		fn prop_decision_is_monotonic_in_displacement(
			translation in 0.0f64..800.0,
			velocity in -500.0f64..500.0,
			extra in 0.0f64..400.0,
		) {
			if decide(translation, velocity, 400.0, 0.5) == PanDecision::Commit {
				prop_assert_eq!(decide(translation + extra, velocity, 400.0, 0.5), PanDecision::Commit);
			}
		}
	}
}
