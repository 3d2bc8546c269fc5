//! Seams between a transition and the host's view hierarchy.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::geometry::{Frames, LayerState, Size};

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque handle to a view hosted by a [`Container`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
	/// Allocates a process-unique id.
	pub fn next() -> Self {
		Self(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
	}

	/// Wraps an id handed out by a native toolkit.
	pub const fn from_raw(raw: u64) -> Self {
		Self(raw)
	}

	/// Raw identifier.
	pub const fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for ViewId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "view#{}", self.0)
	}
}

/// Z-order of a newly inserted view relative to the current content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
	Above,
	Below,
}

/// A container whose child views a transition rearranges.
pub trait Container {
	/// Size of the container's bounds.
	fn bounds(&self) -> Size;

	/// Inserts `view` above or below the existing children.
	fn insert(&mut self, view: ViewId, placement: Placement);

	/// Removes `view`. Removing an absent view is a no-op.
	fn remove(&mut self, view: ViewId);

	fn contains(&self, view: ViewId) -> bool;

	/// Applies position and opacity to `view`.
	fn apply(&mut self, view: ViewId, state: LayerState);
}

/// Receives the outcome of a transition and launcher visibility requests.
///
/// `live` is the view left in the container; `released` is the view the
/// owner should drop or return to its pool.
pub trait TransitionOwner {
	fn show_launcher(&mut self) {}

	fn hide_launcher(&mut self) {}

	/// The destination became the live view.
	fn transition_finish(&mut self, live: ViewId, released: Option<ViewId>);

	/// The transition was rolled back; the source, if any, stays live.
	fn transition_cancel(&mut self, live: Option<ViewId>, released: ViewId);
}

/// Everything a scene needs to touch while it runs.
pub struct TransitionContext<'a> {
	pub owner: &'a mut dyn TransitionOwner,
	pub container: &'a mut dyn Container,
	pub source: Option<ViewId>,
	pub destination: ViewId,
}

impl<'a> TransitionContext<'a> {
	/// Bundles the participants of one transition step.
	pub fn new(
		owner: &'a mut dyn TransitionOwner,
		container: &'a mut dyn Container,
		source: Option<ViewId>,
		destination: ViewId,
	) -> Self {
		Self {
			owner,
			container,
			source,
			destination,
		}
	}

	/// Bounds of the hosting container.
	pub fn bounds(&self) -> Size {
		self.container.bounds()
	}

	/// Applies both sides of `frames`; the source is skipped when absent.
	pub fn apply_frames(&mut self, frames: Frames) {
		if let Some(source) = self.source {
			self.container.apply(source, frames.source);
		}
		self.container.apply(self.destination, frames.destination);
	}
}

impl fmt::Debug for TransitionContext<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TransitionContext")
			.field("source", &self.source)
			.field("destination", &self.destination)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_view_ids_are_unique() {
		let a = ViewId::next();
		let b = ViewId::next();

		assert_ne!(a, b);
		assert!(b.get() > a.get());
	}

	#[rstest]
	fn test_view_id_display() {
		assert_eq!(ViewId::from_raw(7).to_string(), "view#7");
	}
}
