//! Navigation capability handed to view code.

use std::sync::{Arc, Weak};

use echeveria_transition::TransitionHint;
use echeveria_urls::Router;
use parking_lot::{Mutex, RwLock};
use tracing::warn;

use crate::history::NavigationHistory;

/// Requests navigation changes.
///
/// Calls only mutate the history and queue an intent; the host performs
/// the transition on its next turn.
pub trait Navigator: Send + Sync {
	/// Navigates to `path` with an explicit transition.
	fn move_to_with(&self, path: &str, hint: Option<TransitionHint>);

	/// Navigates to `path` using the route's declared transition.
	fn move_to(&self, path: &str) {
		self.move_to_with(path, None);
	}

	/// Pops the active root. Returns `false` on a bare root.
	fn move_to_back(&self) -> bool;
}

/// [`Navigator`] backed by the host's history.
///
/// A push without an explicit hint takes the hint declared by the first
/// route matching the path.
#[derive(Debug, Clone)]
pub struct NavigatorHandle {
	history: Arc<Mutex<NavigationHistory>>,
	router: Arc<Router>,
}

impl NavigatorHandle {
	/// Creates a navigator over a shared history.
	pub fn new(history: Arc<Mutex<NavigationHistory>>, router: Arc<Router>) -> Self {
		Self { history, router }
	}

	/// Tail path of the active root.
	pub fn current(&self) -> String {
		self.history.lock().current().to_string()
	}
}

impl Navigator for NavigatorHandle {
	fn move_to_with(&self, path: &str, hint: Option<TransitionHint>) {
		let hint = hint.or_else(|| self.router.transition_hint_for(path));
		self.history.lock().push(path, hint);
	}

	fn move_to_back(&self) -> bool {
		self.history.lock().pop(None)
	}
}

/// Forwards to a navigator bound after construction.
///
/// Views created before the host exists hold one of these; calls made
/// while unbound (or after the target is dropped) are logged and ignored.
#[derive(Debug, Default)]
pub struct PassthroughNavigator {
	target: RwLock<Option<Weak<dyn Navigator>>>,
}

impl PassthroughNavigator {
	/// Creates an unbound navigator.
	pub fn new() -> Self {
		Self::default()
	}

	/// Binds to `navigator` without keeping it alive.
	pub fn bind(&self, navigator: &Arc<dyn Navigator>) {
		*self.target.write() = Some(Arc::downgrade(navigator));
	}

	/// Drops the bound navigator.
	pub fn unbind(&self) {
		*self.target.write() = None;
	}

	/// Whether a live navigator is bound.
	pub fn is_bound(&self) -> bool {
		self.upgrade().is_some()
	}

	fn upgrade(&self) -> Option<Arc<dyn Navigator>> {
		self.target.read().as_ref().and_then(Weak::upgrade)
	}
}

impl Navigator for PassthroughNavigator {
	fn move_to_with(&self, path: &str, hint: Option<TransitionHint>) {
		match self.upgrade() {
			Some(navigator) => navigator.move_to_with(path, hint),
			None => warn!(path, "navigator not bound; move ignored"),
		}
	}

	fn move_to_back(&self) -> bool {
		match self.upgrade() {
			Some(navigator) => navigator.move_to_back(),
			None => {
				warn!("navigator not bound; back ignored");
				false
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::events::{IntentKind, NavigationEvent, NavigationEvents};
	use echeveria_urls::RouterBuilder;
	use rstest::{fixture, rstest};
	use std::sync::Mutex as StdMutex;
	use tracing_subscriber::layer::SubscriberExt as _;
	use tracing_subscriber::util::SubscriberInitExt as _;

	#[fixture]
	fn handle() -> (NavigatorHandle, NavigationEvents) {
		let router = RouterBuilder::new()
			.cover("/compose", || "compose")
			.route("/detail", || "detail")
			.build();
		let (history, events) = NavigationHistory::new();
		(
			NavigatorHandle::new(Arc::new(Mutex::new(history)), Arc::new(router)),
			events,
		)
	}

	fn hints(events: &mut NavigationEvents) -> Vec<Option<TransitionHint>> {
		events
			.drain()
			.into_iter()
			.filter_map(|event| match event {
				NavigationEvent::Transition(intent) => Some(intent.hint),
				NavigationEvent::Reselected { .. } => None,
			})
			.collect()
	}

	#[rstest]
	fn test_route_hint_is_used_without_explicit_hint(handle: (NavigatorHandle, NavigationEvents)) {
		// Arrange
		let (navigator, mut events) = handle;

		// Act
		navigator.move_to("/compose");
		navigator.move_to_back();
		navigator.move_to("/detail");
		navigator.move_to_with("/compose", Some(TransitionHint::Push));

		// Assert
		assert_eq!(
			hints(&mut events),
			vec![
				Some(TransitionHint::Cover),
				Some(TransitionHint::Discover),
				None,
				Some(TransitionHint::Push),
			]
		);
		assert_eq!(navigator.current(), "/compose");
	}

	#[rstest]
	fn test_passthrough_forwards_once_bound(handle: (NavigatorHandle, NavigationEvents)) {
		// Arrange
		let (navigator, mut events) = handle;
		let target: Arc<dyn Navigator> = Arc::new(navigator);
		let passthrough = PassthroughNavigator::new();
		assert!(!passthrough.is_bound());

		// Act
		passthrough.bind(&target);
		passthrough.move_to("/detail");

		// Assert
		assert!(passthrough.is_bound());
		assert!(matches!(
			events.try_next(),
			Some(NavigationEvent::Transition(intent)) if intent.kind == IntentKind::Push
		));
	}

	#[rstest]
	fn test_passthrough_does_not_keep_target_alive(handle: (NavigatorHandle, NavigationEvents)) {
		let (navigator, _events) = handle;
		let target: Arc<dyn Navigator> = Arc::new(navigator);
		let passthrough = PassthroughNavigator::new();
		passthrough.bind(&target);

		drop(target);

		assert!(!passthrough.is_bound());
		assert!(!passthrough.move_to_back());
	}

	#[rstest]
	fn test_unbound_calls_warn() {
		// Arrange
		struct WarnCapture {
			messages: Arc<StdMutex<Vec<String>>>,
		}

		struct MessageVisitor<'a>(&'a mut String);

		impl tracing::field::Visit for MessageVisitor<'_> {
			fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
				if field.name() == "message" {
					*self.0 = format!("{value:?}");
				}
			}
		}

		impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCapture {
			fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
				if *event.metadata().level() == tracing::Level::WARN {
					let mut message = String::new();
					event.record(&mut MessageVisitor(&mut message));
					self.messages.lock().unwrap().push(message);
				}
			}
		}

		let messages = Arc::new(StdMutex::new(Vec::new()));
		let _guard = tracing_subscriber::registry()
			.with(WarnCapture {
				messages: messages.clone(),
			})
			.set_default();
		let passthrough = PassthroughNavigator::new();

		// Act
		passthrough.move_to("/anywhere");
		let popped = passthrough.move_to_back();

		// Assert
		assert!(!popped);
		assert_eq!(
			*messages.lock().unwrap(),
			vec![
				"navigator not bound; move ignored".to_string(),
				"navigator not bound; back ignored".to_string(),
			]
		);
	}
}
