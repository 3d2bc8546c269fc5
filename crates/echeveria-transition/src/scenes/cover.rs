use crate::geometry::{Frames, LayerState, Point, Size};
use crate::hint::TransitionHint;
use crate::scenes::{LauncherChange, SceneTransition};

/// Modal presentation: the destination rises from below the bottom edge
/// over a stationary source.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverTransition;

impl SceneTransition for CoverTransition {
	fn hint(&self) -> TransitionHint {
		TransitionHint::Cover
	}

	fn launcher(&self) -> Option<LauncherChange> {
		Some(LauncherChange::Hide)
	}

	fn layout(&self, percent: f64, bounds: Size) -> Frames {
		let x = bounds.width / 2.0;
		Frames {
			source: LayerState::at_rest(bounds),
			destination: LayerState::at(Point::new(x, bounds.height * (1.5 - percent))),
		}
	}
}
