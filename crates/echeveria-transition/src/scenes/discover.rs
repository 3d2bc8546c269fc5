use crate::context::Placement;
use crate::geometry::{Frames, LayerState, Point, Size};
use crate::hint::TransitionHint;
use crate::scenes::{LauncherChange, SceneTransition};

/// Dismisses a cover: the source drops through the bottom edge and the
/// launcher comes back.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscoverTransition;

impl SceneTransition for DiscoverTransition {
	fn hint(&self) -> TransitionHint {
		TransitionHint::Discover
	}

	fn placement(&self) -> Placement {
		Placement::Below
	}

	fn launcher(&self) -> Option<LauncherChange> {
		Some(LauncherChange::Show)
	}

	fn layout(&self, percent: f64, bounds: Size) -> Frames {
		let x = bounds.width / 2.0;
		Frames {
			source: LayerState::at(Point::new(x, bounds.height * (0.5 + percent))),
			destination: LayerState::at_rest(bounds),
		}
	}
}
