//! An application wired through the facade: settings file, router, host.

use std::io::Write as _;

use echeveria::prelude::*;
use rstest::rstest;

fn router() -> Router {
	RouterBuilder::new()
		.leaf_route(
			Leaf::new("Timeline", Icon::system("list.bullet"), "").placement(LeafPlacement::Launcher),
			"/timeline",
			|| "timeline",
		)
		.leaf_route(
			Leaf::new("Account", Icon::system("person"), "").placement(LeafPlacement::Launcher),
			"/account",
			|| "account",
		)
		.route_param("/tweet/:id", "id", |id: u64| format!("tweet {id}"))
		.namespace("/account", |account| account.route("/setting", || "setting"))
		.build()
}

#[rstest]
fn test_settings_file_drives_host() {
	// Arrange
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(
		file,
		"[transition]\nduration_ms = 100\n\n[navigation]\ndebug_not_found = true\npool_capacity = 0"
	)
	.unwrap();
	let settings = Settings::from_path(file.path()).unwrap();
	let mut host = NavigationHost::with_settings(
		router(),
		HeadlessSurface::new(Size::new(390.0, 844.0)),
		settings.transition,
		settings.navigation,
	);

	// Act
	host.launch().unwrap();
	host.navigator().move_to("/tweet/abc");
	host.run_until_idle().unwrap();

	// Assert
	let view = host.live_view().cloned().unwrap_or_default();
	assert!(view.is_not_found());
	assert!(view.to_string().starts_with("Not Found: /tweet/abc"));
}

#[rstest]
fn test_tabs_keep_their_stacks() {
	// Arrange
	let mut host = NavigationHost::new(router(), HeadlessSurface::new(Size::new(390.0, 844.0)));
	host.launch().unwrap();
	let navigator = host.navigator();

	// Act
	navigator.move_to("/tweet/1");
	navigator.move_to("/account");
	navigator.move_to("/account/setting");
	navigator.move_to("/timeline");
	host.run_until_idle().unwrap();

	// Assert
	assert_eq!(host.live_path(), Some("/tweet/1"));
	assert_eq!(host.history().stack("/account"), Some(vec!["/account", "/account/setting"]));
	assert!(host.routing_state().has_back());
}
