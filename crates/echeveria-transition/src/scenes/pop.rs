use crate::context::Placement;
use crate::geometry::{Frames, LayerState, Point, Size, lerp};
use crate::hint::TransitionHint;
use crate::scenes::SceneTransition;
use crate::scenes::push::DIMMED_OPACITY;

/// Reverse of [`PushTransition`](super::PushTransition): the source leaves
/// through the trailing edge and uncovers the destination underneath.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopTransition;

impl SceneTransition for PopTransition {
	fn hint(&self) -> TransitionHint {
		TransitionHint::Pop
	}

	fn placement(&self) -> Placement {
		Placement::Below
	}

	fn layout(&self, percent: f64, bounds: Size) -> Frames {
		let y = bounds.height / 2.0;
		Frames {
			source: LayerState::at(Point::new(bounds.width * (0.5 + percent), y)),
			destination: LayerState::at(Point::new(bounds.width * (percent / 2.0), y))
				.with_opacity(lerp(DIMMED_OPACITY, 1.0, percent)),
		}
	}
}
