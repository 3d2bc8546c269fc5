//! Path routing for Echeveria.
//!
//! Routes are declared with [`RouterBuilder`] and frozen into a [`Router`]
//! that maps concrete paths such as `/article/42` to [`View`] content:
//!
//! - [`PathPattern`] compiles `/article/:id` style definitions.
//! - [`RoutingInfo`] carries the captures, query and earlier failures to
//!   the resolver.
//! - [`Params`] and [`FromParams`] extract typed captures.
//! - Unresolved paths land on the `!not-found` route, or on the built-in
//!   not-found view.

pub mod builder;
pub mod error;
pub mod filter;
pub mod info;
pub mod leaf;
pub mod not_found;
pub mod params;
pub mod pattern;
pub mod resolver;
pub mod router;
pub mod view;

pub use builder::RouterBuilder;
pub use error::{ResolutionError, RouteError, RouteResult};
pub use filter::PathFilter;
pub use info::RoutingInfo;
pub use leaf::{Icon, Leaf, LeafPlacement};
pub use not_found::{NotFoundReport, default_not_found};
pub use params::{FromParams, Params, RoutingParamParser};
pub use pattern::{FEATURE_PREFIX, NOT_FOUND, PathPattern};
pub use resolver::{RouteResolver, SharedResolver};
pub use router::{Resolution, RouteEntry, Router};
pub use view::{IntoView, Render, View};

pub use echeveria_transition::TransitionHint;
