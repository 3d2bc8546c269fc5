//! One transition per container.

use std::time::Duration;

use tracing::warn;

use crate::context::{Container, TransitionOwner};
use crate::engine::{TransitionEngine, TransitionOutcome};
use crate::error::{TransitionError, TransitionResult};

/// Holds the engine currently running on a container.
///
/// A second [`begin`](Self::begin) is rejected with
/// [`TransitionError::Busy`] until the running engine reaches a terminal
/// phase, so a programmatic navigation can never overlap an edge pan.
#[derive(Debug, Default)]
pub struct TransitionSlot {
	engine: Option<TransitionEngine>,
}

impl TransitionSlot {
	/// Creates an empty slot.
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether a non-terminal engine occupies the slot.
	pub fn is_busy(&self) -> bool {
		self.engine.as_ref().is_some_and(|engine| !engine.is_terminal())
	}

	/// Installs `engine` and returns it for preparation.
	pub fn begin(&mut self, engine: TransitionEngine) -> TransitionResult<&mut TransitionEngine> {
		if self.is_busy() {
			warn!(
				rejected = %engine.hint(),
				"transition requested while another is running"
			);
			return Err(TransitionError::Busy);
		}
		Ok(self.engine.insert(engine))
	}

	/// The installed engine, terminal or not.
	pub fn engine(&self) -> Option<&TransitionEngine> {
		self.engine.as_ref()
	}

	/// Mutable access to the installed engine.
	///
	/// # Errors
	///
	/// [`TransitionError::Inactive`] when the slot is empty.
	pub fn engine_mut(&mut self) -> TransitionResult<&mut TransitionEngine> {
		self.engine.as_mut().ok_or(TransitionError::Inactive)
	}

	/// Advances the running engine, clearing the slot once it terminates.
	pub fn tick(
		&mut self,
		dt: Duration,
		owner: &mut dyn TransitionOwner,
		container: &mut dyn Container,
	) -> TransitionResult<Option<TransitionOutcome>> {
		let engine = self.engine.as_mut().ok_or(TransitionError::Inactive)?;
		let mut ctx = engine.context(owner, container);
		let outcome = engine.tick(dt, &mut ctx)?;
		if outcome.is_some() {
			self.engine = None;
		}
		Ok(outcome)
	}
}
