//! Route table built through the DSL and resolved through the public API.

use echeveria_urls::{
	Icon, Leaf, LeafPlacement, Params, PathFilter, RouteError, RouteResult, Router, RouterBuilder,
	RoutingInfo, TransitionHint, View,
};
use rstest::{fixture, rstest};

#[derive(Debug, PartialEq)]
struct Page {
	number: u32,
}

fn page_parser(info: &RoutingInfo) -> RouteResult<Page> {
	let number = info.parse_query::<u32>("page")?.unwrap_or(1);
	if number == 0 {
		return Err(RouteError::invalid_field(info.path(), "page", "must be positive"));
	}
	Ok(Page { number })
}

#[fixture]
fn router() -> Router {
	RouterBuilder::new()
		.debug_not_found(true)
		.leaf_route(
			Leaf::new("Home", Icon::system("house"), "").placement(LeafPlacement::Launcher),
			"/home",
			|| "home",
		)
		.leaf_route(
			Leaf::new("Account", Icon::asset("account"), "").placement(LeafPlacement::Launcher),
			"/account",
			|| "account",
		)
		.route_param("/article/:id", "id", |id: u64| format!("article {id}"))
		.route_params("/users/:user/posts/:post", |Params((user, post)): Params<(String, u32)>| {
			format!("{user} post {post}")
		})
		.route_parsed("/feed", page_parser, |page: Page| format!("feed page {}", page.number))
		.route_info("/echo/:word", |info: &RoutingInfo| {
			info.param("word").unwrap_or_default().to_uppercase()
		})
		.cover("/compose", || "compose")
		.namespace("/account", |account| {
			account
				.route("/setting", || "setting")
				.stack("/setting/privacy", || "privacy")
		})
		.build()
}

#[rstest]
fn test_root_gets_welcome_placeholder(router: Router) {
	assert_eq!(router.resolve("/"), View::Welcome);
}

#[rstest]
#[case("/home", "home")]
#[case("/article/42", "article 42")]
#[case("/users/alice/posts/3", "alice post 3")]
#[case("/feed", "feed page 1")]
#[case("/feed?page=3", "feed page 3")]
#[case("/echo/hi", "HI")]
#[case("/account/setting", "setting")]
#[case("/account/setting/privacy", "privacy")]
fn test_resolves(router: Router, #[case] path: &str, #[case] expected: &str) {
	// Act
	let view = router.resolve(path);

	// Assert
	assert_eq!(view, View::text(expected.to_string()));
}

#[rstest]
fn test_invalid_parameter_reaches_not_found_with_error(router: Router) {
	// Act
	let resolution = router.resolve_route("/article/latest");

	// Assert
	assert!(resolution.is_not_found());
	assert_eq!(resolution.info.errors().len(), 1);
	assert!(resolution.info.errors()[0].error.is_parse_failure());
	let rendered = resolution.view.to_string();
	assert!(rendered.starts_with("Not Found: /article/latest"));
	assert!(rendered.contains("/article/:id"));
}

#[rstest]
fn test_parser_rejection_is_recorded(router: Router) {
	let resolution = router.resolve_route("/feed?page=0");

	assert!(resolution.is_not_found());
	assert_eq!(resolution.info.errors()[0].pattern, "/feed");
}

#[rstest]
fn test_custom_not_found_sees_original_path() {
	// Arrange
	let router = RouterBuilder::new()
		.route_param("/n/:value", "value", |value: i32| format!("{value}"))
		.not_found(|info: &RoutingInfo| format!("lost at {} after {} errors", info.path(), info.errors().len()))
		.build();

	// Act & Assert
	assert_eq!(router.resolve("/n/x"), View::text("lost at /n/x after 1 errors"));
	assert_eq!(router.resolve("/nowhere"), View::text("lost at /nowhere after 0 errors"));
}

#[rstest]
fn test_declared_hints(router: Router) {
	assert_eq!(router.transition_hint_for("/compose"), Some(TransitionHint::Cover));
	assert_eq!(
		router.transition_hint_for("/account/setting/privacy"),
		Some(TransitionHint::Push)
	);
	assert_eq!(router.transition_hint_for("/home"), None);
}

#[rstest]
fn test_leaves_in_declaration_order(router: Router) {
	let paths: Vec<&str> = router.leaves().iter().map(|leaf| leaf.path.as_str()).collect();

	assert_eq!(paths, ["/home", "/account"]);
	assert!(router.leaves().iter().all(|leaf| leaf.is_placed(LeafPlacement::Launcher)));
}

#[rstest]
fn test_relative_navigation_targets(router: Router) {
	let info = router.test("/account/setting").unwrap();

	assert_eq!(info.join("privacy"), "/account/setting/privacy");
	assert_eq!(info.join(".."), "/account");
}

#[rstest]
#[case(Some("/compose"), None)]
#[case(Some("/home"), Some("/home"))]
#[case(None, None)]
fn test_path_filter_except(#[case] current: Option<&str>, #[case] expected: Option<&str>) {
	let filter = PathFilter::except(["/compose", "/article/:id"]);

	assert_eq!(filter.apply(current), expected);
}
