//! Transition state machine.

use std::time::Duration;

use tracing::debug;

use crate::context::{Container, TransitionContext, TransitionOwner, ViewId};
use crate::error::{TransitionError, TransitionResult};
use crate::geometry::{clamp_percent, lerp};
use crate::hint::TransitionHint;
use crate::scenes::SceneTransition;
use crate::settings::TransitionSettings;
use crate::spring::SpringCurve;

/// Where an animating transition is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionTarget {
	Commit,
	Rollback,
}

/// Lifecycle of a [`TransitionEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
	Idle,
	Preparing,
	Animating(TransitionTarget),
	Committed,
	Cancelled,
}

impl TransitionPhase {
	/// Whether the engine has finished for good.
	pub fn is_terminal(self) -> bool {
		matches!(self, Self::Committed | Self::Cancelled)
	}
}

/// Terminal result of a transition, mirroring the owner callback it fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
	Committed {
		live: ViewId,
		released: Option<ViewId>,
	},
	Cancelled {
		live: Option<ViewId>,
		released: ViewId,
	},
}

impl TransitionOutcome {
	/// The view left on screen, if any.
	pub fn live(&self) -> Option<ViewId> {
		match *self {
			Self::Committed { live, .. } => Some(live),
			Self::Cancelled { live, .. } => live,
		}
	}

	/// Whether the destination became live.
	pub fn is_committed(&self) -> bool {
		matches!(self, Self::Committed { .. })
	}
}

#[derive(Debug, Clone, Copy)]
struct Animation {
	from: f64,
	to: f64,
	elapsed: Duration,
	target: TransitionTarget,
}

/// Drives one scene transition between a source and a destination view.
///
/// ```text
/// prepare -> update* -> finish | cancel -> tick* -> Committed | Cancelled
/// ```
///
/// `finish` and `cancel` only start the spring animation; the terminal
/// owner callback fires from the [`tick`](Self::tick) that completes it.
#[derive(Debug)]
pub struct TransitionEngine {
	scene: Box<dyn SceneTransition>,
	source: Option<ViewId>,
	destination: ViewId,
	curve: SpringCurve,
	frame_step: Duration,
	phase: TransitionPhase,
	percent: f64,
	animation: Option<Animation>,
}

impl TransitionEngine {
	/// Creates an engine with default settings.
	pub fn new(scene: Box<dyn SceneTransition>, source: Option<ViewId>, destination: ViewId) -> Self {
		Self::with_settings(scene, source, destination, &TransitionSettings::default())
	}

	/// Creates an engine whose spring follows `settings`.
	pub fn with_settings(
		scene: Box<dyn SceneTransition>,
		source: Option<ViewId>,
		destination: ViewId,
		settings: &TransitionSettings,
	) -> Self {
		let curve = if scene.animated() {
			settings.spring()
		} else {
			SpringCurve::immediate()
		};
		Self {
			scene,
			source,
			destination,
			curve,
			frame_step: settings.frame_step(),
			phase: TransitionPhase::Idle,
			percent: 0.0,
			animation: None,
		}
	}

	/// Creates an engine for the scene behind `hint`.
	pub fn for_hint(
		hint: TransitionHint,
		source: Option<ViewId>,
		destination: ViewId,
		settings: &TransitionSettings,
	) -> Self {
		Self::with_settings(hint.scene(), source, destination, settings)
	}

	/// Current phase.
	pub fn phase(&self) -> TransitionPhase {
		self.phase
	}

	/// Completion in `0.0..=1.0`.
	pub fn percent(&self) -> f64 {
		self.percent
	}

	/// Hint the scene was built from.
	pub fn hint(&self) -> TransitionHint {
		self.scene.hint()
	}

	/// The scene supplying placement and geometry.
	pub fn scene(&self) -> &dyn SceneTransition {
		self.scene.as_ref()
	}

	/// View being replaced, if any.
	pub fn source(&self) -> Option<ViewId> {
		self.source
	}

	/// View being presented.
	pub fn destination(&self) -> ViewId {
		self.destination
	}

	/// Spring used for finish and cancel.
	pub fn curve(&self) -> SpringCurve {
		self.curve
	}

	/// Whether the phase is terminal.
	pub fn is_terminal(&self) -> bool {
		self.phase.is_terminal()
	}

	/// Builds the context for this engine's views.
	pub fn context<'a>(
		&self,
		owner: &'a mut dyn TransitionOwner,
		container: &'a mut dyn Container,
	) -> TransitionContext<'a> {
		TransitionContext::new(owner, container, self.source, self.destination)
	}

	/// Inserts the destination and renders percent 0.
	pub fn prepare(&mut self, ctx: &mut TransitionContext<'_>) -> TransitionResult<()> {
		self.expect_phase("prepare", TransitionPhase::Idle)?;
		debug!(
			hint = %self.scene.hint(),
			source = ?self.source,
			destination = %self.destination,
			"preparing transition"
		);
		self.scene.prepare(ctx);
		self.percent = 0.0;
		self.phase = TransitionPhase::Preparing;
		Ok(())
	}

	/// Renders `percent`. Safe to repeat with the same value.
	pub fn update(&mut self, percent: f64, ctx: &mut TransitionContext<'_>) -> TransitionResult<()> {
		self.expect_phase("update", TransitionPhase::Preparing)?;
		self.percent = clamp_percent(percent);
		self.scene.update(self.percent, ctx);
		Ok(())
	}

	/// Starts animating towards the destination.
	pub fn finish(&mut self) -> TransitionResult<()> {
		self.start("finish", TransitionTarget::Commit, 1.0)
	}

	/// Starts animating back to the source.
	pub fn cancel(&mut self) -> TransitionResult<()> {
		self.start("cancel", TransitionTarget::Rollback, 0.0)
	}

	/// Advances the running animation by `dt`.
	///
	/// Returns the outcome on the frame that completes the transition.
	pub fn tick(
		&mut self,
		dt: Duration,
		ctx: &mut TransitionContext<'_>,
	) -> TransitionResult<Option<TransitionOutcome>> {
		let Some(mut animation) = self.animation else {
			return Err(TransitionError::InvalidPhase {
				operation: "tick",
				phase: self.phase,
			});
		};

		animation.elapsed += dt;
		self.animation = Some(animation);

		if self.curve.is_finished(animation.elapsed) {
			return Ok(Some(self.complete(animation.target, ctx)));
		}

		let progress = self.curve.progress(animation.elapsed);
		self.percent = lerp(animation.from, animation.to, progress);
		self.scene.update(self.percent, ctx);
		Ok(None)
	}

	/// Ticks at the configured frame step until the animation completes.
	pub fn run_to_end(&mut self, ctx: &mut TransitionContext<'_>) -> TransitionResult<TransitionOutcome> {
		loop {
			if let Some(outcome) = self.tick(self.frame_step, ctx)? {
				return Ok(outcome);
			}
		}
	}

	fn start(&mut self, operation: &'static str, target: TransitionTarget, to: f64) -> TransitionResult<()> {
		self.expect_phase(operation, TransitionPhase::Preparing)?;
		self.animation = Some(Animation {
			from: self.percent,
			to,
			elapsed: Duration::ZERO,
			target,
		});
		self.phase = TransitionPhase::Animating(target);
		debug!(hint = %self.scene.hint(), from = self.percent, ?target, "animating transition");
		Ok(())
	}

	fn complete(&mut self, target: TransitionTarget, ctx: &mut TransitionContext<'_>) -> TransitionOutcome {
		self.animation = None;
		match target {
			TransitionTarget::Commit => {
				self.percent = 1.0;
				self.scene.update(1.0, ctx);
				if let Some(source) = self.source {
					ctx.container.remove(source);
				}
				self.phase = TransitionPhase::Committed;
				ctx.owner.transition_finish(self.destination, self.source);
				debug!(hint = %self.scene.hint(), live = %self.destination, "transition committed");
				TransitionOutcome::Committed {
					live: self.destination,
					released: self.source,
				}
			}
			TransitionTarget::Rollback => {
				self.percent = 0.0;
				self.scene.update(0.0, ctx);
				ctx.container.remove(self.destination);
				if let Some(change) = self.scene.launcher() {
					change.revert(ctx.owner);
				}
				self.phase = TransitionPhase::Cancelled;
				ctx.owner.transition_cancel(self.source, self.destination);
				debug!(hint = %self.scene.hint(), released = %self.destination, "transition cancelled");
				TransitionOutcome::Cancelled {
					live: self.source,
					released: self.destination,
				}
			}
		}
	}

	fn expect_phase(&self, operation: &'static str, expected: TransitionPhase) -> TransitionResult<()> {
		if self.phase == expected {
			Ok(())
		} else {
			Err(TransitionError::InvalidPhase {
				operation,
				phase: self.phase,
			})
		}
	}
}
