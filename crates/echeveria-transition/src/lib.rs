//! Screen transitions for Echeveria.
//!
//! This crate swaps one hosted view for another inside a view-controller
//! container. Every transition runs through the same phases:
//!
//! ```text
//! Idle ──prepare──▶ Preparing ──finish──▶ Animating(Commit)   ──▶ Committed
//!                       │    ╲
//!                    update   ╲─cancel──▶ Animating(Rollback) ──▶ Cancelled
//! ```
//!
//! - [`TransitionEngine`] owns the phase logic and the spring animation.
//! - [`SceneTransition`] implementations ([`scenes`]) supply placement and
//!   geometry as a pure function of the completion percent.
//! - [`EdgePanTracker`] drives an engine from a pan gesture.
//! - [`TransitionSlot`] keeps at most one transition alive per container.
//!
//! The native view hierarchy is reached through the [`Container`] and
//! [`TransitionOwner`] traits; [`headless`] provides in-memory versions.

pub mod context;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod headless;
pub mod hint;
pub mod interactive;
pub mod scenes;
pub mod settings;
pub mod slot;
pub mod spring;

pub use context::{Container, Placement, TransitionContext, TransitionOwner, ViewId};
pub use engine::{TransitionEngine, TransitionOutcome, TransitionPhase, TransitionTarget};
pub use error::{TransitionError, TransitionResult};
pub use geometry::{Frames, LayerState, Point, Size};
pub use hint::TransitionHint;
pub use interactive::{EdgePanTracker, PanDecision, PanGesture};
pub use scenes::{LauncherChange, SceneTransition};
pub use settings::TransitionSettings;
pub use slot::TransitionSlot;
pub use spring::SpringCurve;
