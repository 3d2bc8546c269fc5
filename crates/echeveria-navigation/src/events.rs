//! Intents emitted by [`NavigationHistory`](crate::NavigationHistory).
//!
//! History mutations happen synchronously; the resulting intents are queued
//! on an unbounded channel and consumed in FIFO order by the host on its
//! next turn.

use echeveria_transition::TransitionHint;
use tokio::sync::mpsc;
use tracing::debug;

/// How an intent changes the navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
	/// A frame was appended to the active root.
	Push,
	/// The tail frame of the active root was removed.
	Pop,
	/// Another root became active.
	SwitchRoot,
	/// First presentation of the current path.
	Present,
}

/// One requested transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionIntent {
	/// Path shown before the change; `None` for the first presentation.
	pub from: Option<String>,
	/// Path to present.
	pub to: String,
	/// Explicit transition, if one was requested or derived.
	pub hint: Option<TransitionHint>,
	pub kind: IntentKind,
}

/// Event emitted by a [`NavigationHistory`](crate::NavigationHistory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
	Transition(TransitionIntent),
	/// The active root was pushed again.
	Reselected { path: String },
}

/// Sending half kept by the history.
#[derive(Debug, Clone)]
pub(crate) struct EventSender {
	sender: mpsc::UnboundedSender<NavigationEvent>,
}

impl EventSender {
	pub(crate) fn emit(&self, event: NavigationEvent) {
		debug!(?event, "navigation event");
		// A closed channel means nobody hosts this history any more.
		let _ = self.sender.send(event);
	}
}

/// Receiving half of the intent queue.
#[derive(Debug)]
pub struct NavigationEvents {
	receiver: mpsc::UnboundedReceiver<NavigationEvent>,
}

impl NavigationEvents {
	/// Returns the next queued event without waiting.
	pub fn try_next(&mut self) -> Option<NavigationEvent> {
		self.receiver.try_recv().ok()
	}

	/// Returns every queued event in emission order.
	pub fn drain(&mut self) -> Vec<NavigationEvent> {
		std::iter::from_fn(|| self.try_next()).collect()
	}

	/// Waits for the next event.
	///
	/// Returns `None` once the history has been dropped and the queue is empty.
	pub async fn next(&mut self) -> Option<NavigationEvent> {
		self.receiver.recv().await
	}
}

pub(crate) fn channel() -> (EventSender, NavigationEvents) {
	let (sender, receiver) = mpsc::unbounded_channel();
	(EventSender { sender }, NavigationEvents { receiver })
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn reselected(path: &str) -> NavigationEvent {
		NavigationEvent::Reselected {
			path: path.to_string(),
		}
	}

	#[rstest]
	fn test_drain_keeps_order() {
		// Arrange
		let (sender, mut events) = channel();
		sender.emit(reselected("/a"));
		sender.emit(reselected("/b"));

		// Act
		let drained = events.drain();

		// Assert
		assert_eq!(drained, vec![reselected("/a"), reselected("/b")]);
		assert_eq!(events.try_next(), None);
	}

	#[rstest]
	fn test_emit_after_receiver_dropped_is_ignored() {
		let (sender, events) = channel();
		drop(events);

		sender.emit(reselected("/"));
	}

	#[rstest]
	#[tokio::test]
	async fn test_next_ends_when_sender_dropped() {
		let (sender, mut events) = channel();
		sender.emit(reselected("/home"));
		drop(sender);

		assert_eq!(events.next().await, Some(reselected("/home")));
		assert_eq!(events.next().await, None);
	}
}
