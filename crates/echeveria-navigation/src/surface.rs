//! The host's view of the native screen.

use echeveria_transition::{Container, ViewId};
use echeveria_urls::{RoutingInfo, View};

/// A container that can also create and dispose hosted views.
pub trait Surface: Container {
	/// Creates the native view for `view` and returns its handle.
	///
	/// The view is not inserted; transitions insert it.
	fn mount(&mut self, view: &View, info: &RoutingInfo) -> ViewId;

	/// Disposes a view created by [`mount`](Self::mount).
	fn unmount(&mut self, view: ViewId);

	/// The active root's launcher entry was tapped again.
	fn reselected(&mut self, _path: &str) {}

	fn set_launcher_visible(&mut self, _visible: bool) {}
}
