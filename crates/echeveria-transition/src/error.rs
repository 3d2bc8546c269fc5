//! Error types for transition execution.

use thiserror::Error;

use crate::engine::TransitionPhase;

/// Errors raised when a transition is driven out of order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
	/// The operation is not valid in the engine's current phase.
	#[error("cannot {operation} a transition in phase {phase:?}")]
	InvalidPhase {
		/// The rejected operation.
		operation: &'static str,
		/// Phase the engine was in.
		phase: TransitionPhase,
	},

	/// Another transition is still running on the same container.
	#[error("a transition is already running on this container")]
	Busy,

	/// No transition is active on the container.
	#[error("no active transition")]
	Inactive,
}

/// Result type alias for transition operations.
pub type TransitionResult<T> = Result<T, TransitionError>;
