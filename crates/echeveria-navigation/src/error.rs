//! Error types for the navigation host.

use echeveria_transition::TransitionError;
use thiserror::Error;

/// Errors raised by the navigation host.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavigationError {
	/// The host has no live view yet; call `launch` first.
	#[error("nothing is presented yet")]
	NotLaunched,

	/// The active root has no frame to pop.
	#[error("nothing to pop from root `{root}`")]
	NothingToPop { root: String },

	/// A gesture sample arrived without an interactive transition.
	#[error("no interactive transition is running")]
	NoInteraction,

	/// The transition layer rejected the request.
	#[error(transparent)]
	Transition(#[from] TransitionError),
}

/// Result type alias for navigation operations.
pub type NavigationResult<T> = Result<T, NavigationError>;
