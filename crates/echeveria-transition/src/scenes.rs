//! Concrete scene transitions.
//!
//! A scene is stateless: it decides where the destination is inserted, which
//! launcher change it requests, and the layer geometry at a given percent.
//! The phase bookkeeping lives in [`TransitionEngine`](crate::TransitionEngine).

mod cover;
mod discover;
mod instant;
mod pop;
mod push;
mod slide;

use std::fmt;

pub use cover::CoverTransition;
pub use discover::DiscoverTransition;
pub use instant::InstantTransition;
pub use pop::PopTransition;
pub use push::PushTransition;
pub use slide::{SlideDirection, SlideTransition};

use crate::context::{Placement, TransitionContext, TransitionOwner};
use crate::geometry::{Frames, Size, clamp_percent};
use crate::hint::TransitionHint;

/// Launcher visibility change requested by a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherChange {
	Show,
	Hide,
}

impl LauncherChange {
	/// Forwards the change to `owner`.
	pub fn apply(self, owner: &mut dyn TransitionOwner) {
		match self {
			Self::Show => owner.show_launcher(),
			Self::Hide => owner.hide_launcher(),
		}
	}

	/// Undoes [`apply`](Self::apply) after a rollback.
	pub fn revert(self, owner: &mut dyn TransitionOwner) {
		match self {
			Self::Show => owner.hide_launcher(),
			Self::Hide => owner.show_launcher(),
		}
	}
}

/// Placement and geometry of one kind of transition.
pub trait SceneTransition: Send + Sync + fmt::Debug {
	fn hint(&self) -> TransitionHint;

	/// Where the destination goes relative to the source.
	fn placement(&self) -> Placement {
		Placement::Above
	}

	fn launcher(&self) -> Option<LauncherChange> {
		None
	}

	/// `false` when finish and cancel should complete on the first frame.
	fn animated(&self) -> bool {
		true
	}

	/// Layer states at `percent` (already clamped to `[0, 1]`).
	///
	/// `layout(0.0, _)` must render the source at rest.
	fn layout(&self, percent: f64, bounds: Size) -> Frames;

	fn back_transition(&self) -> TransitionHint {
		self.hint().back()
	}

	/// Inserts the destination, renders percent 0 and requests the launcher change.
	fn prepare(&self, ctx: &mut TransitionContext<'_>) {
		if !ctx.container.contains(ctx.destination) {
			ctx.container.insert(ctx.destination, self.placement());
		}
		self.update(0.0, ctx);
		if let Some(change) = self.launcher() {
			change.apply(ctx.owner);
		}
	}

	/// Applies the geometry for `percent`. Never inserts or removes views.
	fn update(&self, percent: f64, ctx: &mut TransitionContext<'_>) {
		let frames = self.layout(clamp_percent(percent), ctx.bounds());
		ctx.apply_frames(frames);
	}
}
