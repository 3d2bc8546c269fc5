//! In-memory [`Surface`].

use std::collections::HashMap;

use echeveria_transition::headless::HeadlessContainer;
use echeveria_transition::{Container, LayerState, Placement, Size, ViewId};
use echeveria_urls::{RoutingInfo, View};

use crate::surface::Surface;

/// A mounted view as seen by [`HeadlessSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct MountedView {
	pub path: String,
	pub view: View,
}

/// Surface that keeps mounted views in memory.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
	container: HeadlessContainer,
	mounted: HashMap<ViewId, MountedView>,
	launcher_visible: bool,
	reselected: Vec<String>,
}

impl HeadlessSurface {
	/// Creates a surface of `bounds` with the launcher visible.
	pub fn new(bounds: Size) -> Self {
		Self {
			container: HeadlessContainer::new(bounds),
			mounted: HashMap::new(),
			launcher_visible: true,
			reselected: Vec::new(),
		}
	}

	/// The underlying view stack.
	pub fn container(&self) -> &HeadlessContainer {
		&self.container
	}

	/// What is mounted as `view`.
	pub fn mounted(&self, view: ViewId) -> Option<&MountedView> {
		self.mounted.get(&view)
	}

	/// Number of views mounted and not yet unmounted.
	pub fn mounted_count(&self) -> usize {
		self.mounted.len()
	}

	/// The view on top of the container.
	pub fn top(&self) -> Option<&MountedView> {
		self.container.top().and_then(|id| self.mounted.get(&id))
	}

	/// Launcher visibility last requested by a transition.
	pub fn launcher_visible(&self) -> bool {
		self.launcher_visible
	}

	/// Paths reported through [`Surface::reselected`], oldest first.
	pub fn reselections(&self) -> &[String] {
		&self.reselected
	}
}

impl Container for HeadlessSurface {
	fn bounds(&self) -> Size {
		self.container.bounds()
	}

	fn insert(&mut self, view: ViewId, placement: Placement) {
		self.container.insert(view, placement);
	}

	fn remove(&mut self, view: ViewId) {
		self.container.remove(view);
	}

	fn contains(&self, view: ViewId) -> bool {
		self.container.contains(view)
	}

	fn apply(&mut self, view: ViewId, state: LayerState) {
		self.container.apply(view, state);
	}
}

impl Surface for HeadlessSurface {
	fn mount(&mut self, view: &View, info: &RoutingInfo) -> ViewId {
		let id = ViewId::next();
		self.mounted.insert(
			id,
			MountedView {
				path: info.path().to_string(),
				view: view.clone(),
			},
		);
		id
	}

	fn unmount(&mut self, view: ViewId) {
		self.container.remove(view);
		self.mounted.remove(&view);
	}

	fn reselected(&mut self, path: &str) {
		self.reselected.push(path.to_string());
	}

	fn set_launcher_visible(&mut self, visible: bool) {
		self.launcher_visible = visible;
	}
}
