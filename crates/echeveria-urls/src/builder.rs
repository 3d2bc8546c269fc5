//! Declarative route builder.
//!
//! ```ignore
//! let router = RouterBuilder::new()
//!     .leaf_route(Leaf::new("Home", Icon::system("house"), "/home"), "/home", || home())
//!     .route_param("/article/:id", "id", |id: u64| article(id))
//!     .cover("/compose", || compose())
//!     .namespace("/account", |account| {
//!         account
//!             .route("/", || account_home())
//!             .route("/setting", || settings())
//!     })
//!     .not_found(|info| not_found(info))
//!     .build();
//! ```

use std::fmt;
use std::str::FromStr;

use echeveria_transition::TransitionHint;
use tracing::{info, warn};

use crate::error::RouteResult;
use crate::info::RoutingInfo;
use crate::leaf::Leaf;
use crate::params::{FromParams, Params, RoutingParamParser};
use crate::pattern::{FEATURE_PREFIX, NOT_FOUND, PathPattern, normalize};
use crate::resolver::{
	SharedResolver, info_resolver, named_param_resolver, no_params_resolver, params_resolver,
	parsed_resolver,
};
use crate::router::Router;
use crate::view::{IntoView, View};

struct PendingRoute {
	path: String,
	hint: Option<TransitionHint>,
	resolver: SharedResolver,
}

/// Accumulates routes and leaves, then freezes them into a [`Router`].
#[derive(Default)]
pub struct RouterBuilder {
	routes: Vec<PendingRoute>,
	leaves: Vec<Leaf>,
	debug_not_found: Option<bool>,
}

impl RouterBuilder {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `resolver` for `path`.
	///
	/// A missing leading `/` is added. Paths starting with `!` are reserved
	/// for feature routes and are ignored.
	pub fn add_route(mut self, path: &str, hint: Option<TransitionHint>, resolver: SharedResolver) -> Self {
		if path.starts_with(FEATURE_PREFIX) {
			warn!(path, "'{FEATURE_PREFIX}' cannot start a route path; route ignored");
			return self;
		}
		self.routes.push(PendingRoute {
			path: normalize(path),
			hint,
			resolver,
		});
		self
	}

	/// Adds a launcher entry.
	pub fn add_leaf(mut self, leaf: Leaf) -> Self {
		self.leaves.push(leaf);
		self
	}

	/// Adds a route rendering a closure without parameters.
	pub fn route<F, V>(self, path: &str, view: F) -> Self
	where
		F: Fn() -> V + Send + Sync + 'static,
		V: IntoView + 'static,
	{
		self.add_route(path, None, no_params_resolver(view))
	}

	/// Adds a route with an explicit transition.
	pub fn route_with<F, V>(self, path: &str, hint: TransitionHint, view: F) -> Self
	where
		F: Fn() -> V + Send + Sync + 'static,
		V: IntoView + 'static,
	{
		self.add_route(path, Some(hint), no_params_resolver(view))
	}

	/// Adds a route whose closure receives the [`RoutingInfo`].
	pub fn route_info<F, V>(self, path: &str, view: F) -> Self
	where
		F: Fn(&RoutingInfo) -> V + Send + Sync + 'static,
		V: IntoView + 'static,
	{
		self.add_route(path, None, info_resolver(move |info: &RoutingInfo| Ok(view(info))))
	}

	/// Adds a route whose closure may reject the match.
	pub fn route_result<F, V>(self, path: &str, view: F) -> Self
	where
		F: Fn(&RoutingInfo) -> RouteResult<V> + Send + Sync + 'static,
		V: IntoView + 'static,
	{
		self.add_route(path, None, info_resolver(view))
	}

	/// Adds a route that runs `parser` before the view closure.
	pub fn route_parsed<P, F, V>(self, path: &str, parser: P, view: F) -> Self
	where
		P: RoutingParamParser + 'static,
		F: Fn(P::Param) -> V + Send + Sync + 'static,
		V: IntoView + 'static,
	{
		self.add_route(path, None, parsed_resolver(parser, view))
	}

	/// Adds a route that parses the capture `name` as `T`.
	pub fn route_param<T, F, V>(self, path: &str, name: &str, view: F) -> Self
	where
		T: FromStr + 'static,
		T::Err: fmt::Display,
		F: Fn(T) -> V + Send + Sync + 'static,
		V: IntoView + 'static,
	{
		self.add_route(path, None, named_param_resolver(name, view))
	}

	/// Adds a route that extracts all captures positionally.
	pub fn route_params<T, F, V>(self, path: &str, view: F) -> Self
	where
		T: FromParams + 'static,
		F: Fn(Params<T>) -> V + Send + Sync + 'static,
		V: IntoView + 'static,
	{
		self.add_route(path, None, params_resolver(view))
	}

	/// Adds a modal route presented with [`TransitionHint::Cover`].
	pub fn cover<F, V>(self, path: &str, view: F) -> Self
	where
		F: Fn() -> V + Send + Sync + 'static,
		V: IntoView + 'static,
	{
		self.route_with(path, TransitionHint::Cover, view)
	}

	/// Adds a stacked route presented with [`TransitionHint::Push`].
	pub fn stack<F, V>(self, path: &str, view: F) -> Self
	where
		F: Fn() -> V + Send + Sync + 'static,
		V: IntoView + 'static,
	{
		self.route_with(path, TransitionHint::Push, view)
	}

	/// Adds a route together with its launcher entry.
	///
	/// The leaf's path is set to the route's normalised path.
	pub fn leaf_route<F, V>(self, mut leaf: Leaf, path: &str, view: F) -> Self
	where
		F: Fn() -> V + Send + Sync + 'static,
		V: IntoView + 'static,
	{
		leaf.path = normalize(path);
		self.add_leaf(leaf).route(path, view)
	}

	/// Replaces the built-in not-found view.
	///
	/// The closure receives the original path and every resolver error.
	pub fn not_found<F, V>(mut self, view: F) -> Self
	where
		F: Fn(&RoutingInfo) -> V + Send + Sync + 'static,
		V: IntoView + 'static,
	{
		self.routes.push(PendingRoute {
			path: NOT_FOUND.to_string(),
			hint: None,
			resolver: info_resolver(move |info: &RoutingInfo| Ok(view(info))),
		});
		self
	}

	/// Nests the routes built by `build` under `prefix`.
	///
	/// Inner paths become `{prefix}/{path}` with duplicate slashes collapsed;
	/// an inner `/` maps to `prefix` itself. Leaves and the not-found route
	/// pass through unchanged.
	pub fn namespace<F>(mut self, prefix: &str, build: F) -> Self
	where
		F: FnOnce(RouterBuilder) -> RouterBuilder,
	{
		let inner = build(RouterBuilder::new());
		for mut route in inner.routes {
			if !route.path.starts_with(FEATURE_PREFIX) {
				route.path = join_namespace(prefix, &route.path);
			}
			self.routes.push(route);
		}
		self.leaves.extend(inner.leaves);
		if self.debug_not_found.is_none() {
			self.debug_not_found = inner.debug_not_found;
		}
		self
	}

	/// Overrides whether the built-in not-found view lists resolver errors.
	pub fn debug_not_found(mut self, detailed: bool) -> Self {
		self.debug_not_found = Some(detailed);
		self
	}

	/// Freezes the routes into a [`Router`].
	///
	/// Registers a welcome placeholder for `/` when no root route exists.
	pub fn build(self) -> Router {
		let mut router = Router::new();
		if let Some(detailed) = self.debug_not_found {
			router = router.with_debug_not_found(detailed);
		}

		for route in self.routes {
			match PathPattern::compile(&route.path) {
				Ok(pattern) => router.register(pattern, route.resolver, route.hint),
				Err(error) => warn!(%error, "skipping route"),
			}
		}

		if !router.contains("/") {
			router.register(PathPattern::root(), no_params_resolver(|| View::Welcome), None);
		}

		for leaf in self.leaves {
			router.push_leaf(leaf);
		}

		info!(
			routes = router.len(),
			leaves = router.leaves().len(),
			"router built"
		);
		router
	}
}

impl fmt::Debug for RouterBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouterBuilder")
			.field(
				"routes",
				&self.routes.iter().map(|route| route.path.as_str()).collect::<Vec<_>>(),
			)
			.field("leaves", &self.leaves.len())
			.finish()
	}
}

/// Adds a leading `/` and collapses repeated slashes.
fn join_namespace(prefix: &str, path: &str) -> String {
	normalize(&format!("{prefix}/{path}"))
}
