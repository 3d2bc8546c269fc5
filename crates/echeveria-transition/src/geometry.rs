//! Geometry primitives shared by every scene transition.
//!
//! Positions are layer centres in container coordinates, so a view at rest
//! sits at `bounds.center()`.

/// A point in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	/// Creates a point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Size of a container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	/// Creates a size.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Centre point, i.e. the resting position of a full-size view.
	pub fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}
}

/// Visual state applied to one hosted view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerState {
	pub position: Point,
	pub opacity: f64,
}

impl LayerState {
	/// Fully opaque and centred.
	pub fn at_rest(bounds: Size) -> Self {
		Self {
			position: bounds.center(),
			opacity: 1.0,
		}
	}

	/// Fully opaque with its centre at `position`.
	pub fn at(position: Point) -> Self {
		Self {
			position,
			opacity: 1.0,
		}
	}

	/// Returns a copy with `opacity`.
	pub fn with_opacity(mut self, opacity: f64) -> Self {
		self.opacity = opacity.clamp(0.0, 1.0);
		self
	}
}

/// Layer states for both sides of a transition at one percent value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frames {
	pub source: LayerState,
	pub destination: LayerState,
}

/// Clamps a completion percent into `[0, 1]`; NaN maps to 0.
pub fn clamp_percent(percent: f64) -> f64 {
	if percent.is_nan() {
		0.0
	} else {
		percent.clamp(0.0, 1.0)
	}
}

/// Linear interpolation between `from` and `to`.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
	from + (to - from) * t
}
