//! In-memory [`Container`] and [`TransitionOwner`] implementations.
//!
//! Used by tests and by hosts that drive navigation without a native view
//! hierarchy (for example a snapshot renderer).

use std::collections::HashMap;

use crate::context::{Container, Placement, TransitionOwner, ViewId};
use crate::geometry::{LayerState, Size};

/// Ordered list of children with their last applied layer state.
#[derive(Debug, Clone, Default)]
pub struct HeadlessContainer {
	bounds: Size,
	children: Vec<ViewId>,
	states: HashMap<ViewId, LayerState>,
}

impl HeadlessContainer {
	/// Creates an empty container of `bounds`.
	pub fn new(bounds: Size) -> Self {
		Self {
			bounds,
			..Self::default()
		}
	}

	/// Children from bottom to top.
	pub fn children(&self) -> &[ViewId] {
		&self.children
	}

	/// Geometry last applied to `view`.
	pub fn state(&self, view: ViewId) -> Option<LayerState> {
		self.states.get(&view).copied()
	}

	/// Topmost child, i.e. the one on screen once a transition settles.
	pub fn top(&self) -> Option<ViewId> {
		self.children.last().copied()
	}
}

impl Container for HeadlessContainer {
	fn bounds(&self) -> Size {
		self.bounds
	}

	fn insert(&mut self, view: ViewId, placement: Placement) {
		self.children.retain(|child| *child != view);
		match placement {
			Placement::Above => self.children.push(view),
			Placement::Below => self.children.insert(0, view),
		}
		self.states.insert(view, LayerState::at_rest(self.bounds));
	}

	fn remove(&mut self, view: ViewId) {
		self.children.retain(|child| *child != view);
		self.states.remove(&view);
	}

	fn contains(&self, view: ViewId) -> bool {
		self.children.contains(&view)
	}

	fn apply(&mut self, view: ViewId, state: LayerState) {
		if let Some(slot) = self.states.get_mut(&view) {
			*slot = state;
		}
	}
}

/// Callback recorded by [`RecordingOwner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerEvent {
	ShowLauncher,
	HideLauncher,
	Finish {
		live: ViewId,
		released: Option<ViewId>,
	},
	Cancel {
		live: Option<ViewId>,
		released: ViewId,
	},
}

/// Owner that records every callback and tracks launcher visibility.
#[derive(Debug, Clone)]
pub struct RecordingOwner {
	events: Vec<OwnerEvent>,
	launcher_visible: bool,
}

impl Default for RecordingOwner {
	fn default() -> Self {
		Self {
			events: Vec::new(),
			launcher_visible: true,
		}
	}
}

impl RecordingOwner {
	/// Callbacks in the order they were received.
	pub fn events(&self) -> &[OwnerEvent] {
		&self.events
	}

	/// Launcher visibility after the last show or hide.
	pub fn launcher_visible(&self) -> bool {
		self.launcher_visible
	}
}

impl TransitionOwner for RecordingOwner {
	fn show_launcher(&mut self) {
		self.launcher_visible = true;
		self.events.push(OwnerEvent::ShowLauncher);
	}

	fn hide_launcher(&mut self) {
		self.launcher_visible = false;
		self.events.push(OwnerEvent::HideLauncher);
	}

	fn transition_finish(&mut self, live: ViewId, released: Option<ViewId>) {
		self.events.push(OwnerEvent::Finish { live, released });
	}

	fn transition_cancel(&mut self, live: Option<ViewId>, released: ViewId) {
		self.events.push(OwnerEvent::Cancel { live, released });
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_insert_below_goes_to_bottom() {
		let mut container = HeadlessContainer::new(Size::new(10.0, 10.0));
		let (a, b) = (ViewId::next(), ViewId::next());

		container.insert(a, Placement::Above);
		container.insert(b, Placement::Below);

		assert_eq!(container.children(), &[b, a]);
		assert_eq!(container.top(), Some(a));
	}

	#[rstest]
	fn test_apply_ignores_absent_views() {
		let mut container = HeadlessContainer::new(Size::new(10.0, 10.0));
		let view = ViewId::next();

		container.apply(view, LayerState::at_rest(Size::new(1.0, 1.0)));

		assert_eq!(container.state(view), None);
	}
}
