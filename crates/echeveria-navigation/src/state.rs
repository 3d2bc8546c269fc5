//! Chrome state derived from the navigation position.

use echeveria_transition::TransitionHint;

/// What the navigation bar needs to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingState {
	pub title: Option<String>,
	/// Transition a back action would run; `None` on a bare root.
	pub back_transition: Option<TransitionHint>,
}

impl RoutingState {
	/// Whether a back button should be shown.
	pub fn has_back(&self) -> bool {
		self.back_transition.is_some()
	}
}
