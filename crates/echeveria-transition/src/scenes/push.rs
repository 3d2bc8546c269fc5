use crate::geometry::{Frames, LayerState, Point, Size, lerp};
use crate::hint::TransitionHint;
use crate::scenes::SceneTransition;

/// Opacity the source dims to while it is covered.
pub(crate) const DIMMED_OPACITY: f64 = 0.8;

/// Destination slides in from the trailing edge; the source drifts half as
/// far to the leading edge and dims.
#[derive(Debug, Clone, Copy, Default)]
pub struct PushTransition;

impl SceneTransition for PushTransition {
	fn hint(&self) -> TransitionHint {
		TransitionHint::Push
	}

	fn layout(&self, percent: f64, bounds: Size) -> Frames {
		let y = bounds.height / 2.0;
		Frames {
			source: LayerState::at(Point::new(bounds.width * (0.5 - percent / 2.0), y))
				.with_opacity(lerp(1.0, DIMMED_OPACITY, percent)),
			destination: LayerState::at(Point::new(bounds.width * (1.5 - percent), y)),
		}
	}
}
