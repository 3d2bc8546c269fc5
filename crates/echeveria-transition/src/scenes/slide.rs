use crate::geometry::{Frames, LayerState, Point, Size, lerp};
use crate::hint::TransitionHint;
use crate::scenes::SceneTransition;

/// Fraction of the width a slide travels.
const SLIDE_FRACTION: f64 = 1.0 / 8.0;

/// Direction a [`SlideTransition`] moves content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
	/// Content moves towards the leading edge.
	Left,
	/// Content moves towards the trailing edge.
	Right,
}

/// Short cross-fading slide used when switching roots.
#[derive(Debug, Clone, Copy)]
pub struct SlideTransition {
	direction: SlideDirection,
}

impl SlideTransition {
	/// Slide towards the leading edge.
	pub fn left() -> Self {
		Self {
			direction: SlideDirection::Left,
		}
	}

	/// Slide towards the trailing edge.
	pub fn right() -> Self {
		Self {
			direction: SlideDirection::Right,
		}
	}

	/// Direction of travel.
	pub fn direction(&self) -> SlideDirection {
		self.direction
	}
}

impl SceneTransition for SlideTransition {
	fn hint(&self) -> TransitionHint {
		match self.direction {
			SlideDirection::Left => TransitionHint::SlideLeft,
			SlideDirection::Right => TransitionHint::SlideRight,
		}
	}

	fn layout(&self, percent: f64, bounds: Size) -> Frames {
		let sign = match self.direction {
			SlideDirection::Left => 1.0,
			SlideDirection::Right => -1.0,
		};
		let offset = bounds.width * SLIDE_FRACTION * sign;
		let center = bounds.center();
		let source_x = center.x - offset * percent;
		let destination_x = lerp(center.x + offset, center.x, percent);

		Frames {
			source: LayerState::at(Point::new(source_x, center.y)).with_opacity(1.0 - percent),
			destination: LayerState::at(Point::new(destination_x, center.y)).with_opacity(percent),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(SlideTransition::left(), 250.0, 150.0)]
	#[case(SlideTransition::right(), 150.0, 250.0)]
	fn test_slide_start_offsets(
		#[case] scene: SlideTransition,
		#[case] dest_start: f64,
		#[case] source_end: f64,
	) {
		let bounds = Size::new(400.0, 800.0);

		let start = scene.layout(0.0, bounds);
		let end = scene.layout(1.0, bounds);

		assert_eq!(start.destination.position.x, dest_start);
		assert_eq!(start.destination.opacity, 0.0);
		assert_eq!(end.source.position.x, source_end);
		assert_eq!(end.source.opacity, 0.0);
	}
}
