use crate::geometry::{Frames, LayerState, Size};
use crate::hint::TransitionHint;
use crate::scenes::SceneTransition;

/// Swaps views on the first frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantTransition;

impl SceneTransition for InstantTransition {
	fn hint(&self) -> TransitionHint {
		TransitionHint::Instant
	}

	fn animated(&self) -> bool {
		false
	}

	fn layout(&self, percent: f64, bounds: Size) -> Frames {
		let shown = if percent >= 1.0 { 1.0 } else { 0.0 };
		Frames {
			source: LayerState::at_rest(bounds).with_opacity(1.0 - shown),
			destination: LayerState::at_rest(bounds).with_opacity(shown),
		}
	}
}
