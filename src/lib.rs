//! # Echeveria
//!
//! Declarative, path-based navigation for native mobile UI toolkits.
//!
//! Applications declare routes (static paths, `:param` captures, launcher
//! tabs, stacks and covers); Echeveria resolves the active path to a view,
//! keeps one navigation stack per tab, and drives the screen transition
//! between hosted views.
//!
//! ## Crates
//!
//! - [`urls`] - path patterns, the route table and the route builder
//! - [`navigation`] - multi-root history, navigators and the host
//! - [`transition`] - transition state machine and scenes
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use echeveria::prelude::*;
//!
//! let router = RouterBuilder::new()
//!     .leaf_route(
//!         Leaf::new("Home", Icon::system("house"), "").placement(LeafPlacement::Launcher),
//!         "/home",
//!         || "home",
//!     )
//!     .route_param("/article/:id", "id", |id: u64| format!("article {id}"))
//!     .cover("/compose", || "compose")
//!     .build();
//!
//! let settings = Settings::from_path("echeveria.toml")?;
//! let mut host = NavigationHost::with_settings(
//!     router,
//!     HeadlessSurface::new(Size::new(390.0, 844.0)),
//!     settings.transition,
//!     settings.navigation,
//! );
//! host.launch()?;
//!
//! host.navigator().move_to("/article/42");
//! host.run_until_idle()?;
//! ```

pub mod conf;
pub mod logging;

pub use echeveria_navigation as navigation;
pub use echeveria_transition as transition;
pub use echeveria_urls as urls;

pub use conf::{ConfError, ConfResult, Settings};

pub mod prelude {
	pub use crate::conf::Settings;

	pub use echeveria_navigation::{
		HeadlessSurface, NavigationError, NavigationHistory, NavigationHost, NavigationResult,
		NavigationSettings, Navigator, PassthroughNavigator, RoutingState, Surface,
	};
	pub use echeveria_transition::{
		Container, PanDecision, PanGesture, Size, TransitionHint, TransitionSettings, ViewId,
	};
	pub use echeveria_urls::{
		Icon, IntoView, Leaf, LeafPlacement, Params, PathFilter, PathPattern, Render, RouteError,
		RouteResult, Router, RouterBuilder, RoutingInfo, View,
	};
}
