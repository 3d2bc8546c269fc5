//! The route table.

use std::collections::HashMap;
use std::fmt;

use echeveria_transition::TransitionHint;
use tracing::debug;

use crate::error::ResolutionError;
use crate::info::RoutingInfo;
use crate::leaf::Leaf;
use crate::not_found::default_not_found;
use crate::pattern::{NOT_FOUND, PathPattern, normalize};
use crate::resolver::SharedResolver;
use crate::view::View;

/// One registered route.
#[derive(Clone)]
pub struct RouteEntry {
	pattern: PathPattern,
	resolver: SharedResolver,
	hint: Option<TransitionHint>,
}

impl RouteEntry {
	/// The compiled pattern this entry matches.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	/// Transition declared for navigating to this route.
	pub fn hint(&self) -> Option<TransitionHint> {
		self.hint
	}
}

impl fmt::Debug for RouteEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteEntry")
			.field("pattern", &self.pattern.definition())
			.field("hint", &self.hint)
			.finish()
	}
}

/// Result of resolving a path, with the entry that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
	pub view: View,
	/// Info passed to the resolver that produced `view`.
	pub info: RoutingInfo,
	/// Transition declared by the resolved route.
	pub hint: Option<TransitionHint>,
	/// Definition of the resolved route; `None` for the built-in not-found view.
	pub pattern: Option<String>,
}

impl Resolution {
	/// Whether resolution fell through to the not-found pathway.
	pub fn is_not_found(&self) -> bool {
		self.pattern.as_deref().is_none_or(|pattern| pattern == NOT_FOUND)
	}
}

/// Maps path patterns to resolvers.
///
/// Entries are tried in registration order. A resolver error is recorded
/// and the next candidate is tried; when nothing resolves, the `!not-found`
/// entry (or the built-in not-found view) receives every recorded error.
/// Resolution never fails.
#[derive(Clone)]
pub struct Router {
	entries: Vec<RouteEntry>,
	index: HashMap<String, usize>,
	leaves: Vec<Leaf>,
	debug_not_found: bool,
}

impl Default for Router {
	fn default() -> Self {
		Self::new()
	}
}

impl Router {
	/// Creates an empty table.
	///
	/// The built-in not-found view is detailed in debug builds.
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
			index: HashMap::new(),
			leaves: Vec::new(),
			debug_not_found: cfg!(debug_assertions),
		}
	}

	/// Sets whether the built-in not-found view lists resolver errors.
	pub fn with_debug_not_found(mut self, detailed: bool) -> Self {
		self.debug_not_found = detailed;
		self
	}

	/// Registers `resolver` for `pattern`.
	///
	/// Entries are keyed by the normalized definition, so `/users` and
	/// `users/` name the same route. Registering it again replaces the
	/// earlier entry in its original position.
	pub fn register(&mut self, pattern: PathPattern, resolver: SharedResolver, hint: Option<TransitionHint>) {
		let entry = RouteEntry {
			pattern,
			resolver,
			hint,
		};
		let key = entry.pattern.definition().to_string();
		match self.index.get(&key) {
			Some(&position) => {
				debug!(pattern = %key, "replacing route");
				self.entries[position] = entry;
			}
			None => {
				self.index.insert(key, self.entries.len());
				self.entries.push(entry);
			}
		}
	}

	pub(crate) fn push_leaf(&mut self, leaf: Leaf) {
		self.leaves.push(leaf);
	}

	/// Resolves `path` to a view.
	pub fn resolve(&self, path: &str) -> View {
		self.resolve_route(path).view
	}

	/// Resolves `path` and reports which entry produced the view.
	pub fn resolve_route(&self, path: &str) -> Resolution {
		let mut errors = Vec::new();

		for entry in self.routable() {
			let Some(info) = entry.pattern.matches(path) else {
				continue;
			};
			let info = info.with_errors(errors.clone());
			match entry.resolver.resolve(&info) {
				Ok(view) => {
					debug!(path, pattern = %entry.pattern, "route resolved");
					return Resolution {
						view,
						info,
						hint: entry.hint,
						pattern: Some(entry.pattern.definition().to_string()),
					};
				}
				Err(error) => {
					debug!(path, pattern = %entry.pattern, %error, "resolver rejected path");
					errors.push(ResolutionError::new(entry.pattern.definition(), error));
				}
			}
		}

		self.resolve_not_found(path, errors)
	}

	/// Resolves the not-found pathway for `path` with the collected `errors`.
	pub fn resolve_not_found(&self, path: &str, errors: Vec<ResolutionError>) -> Resolution {
		let info = RoutingInfo::new(path).with_errors(errors);
		debug!(path, errors = info.errors().len(), "no route resolved");

		if let Some(entry) = self.entry(NOT_FOUND) {
			match entry.resolver.resolve(&info) {
				Ok(view) => {
					return Resolution {
						view,
						info,
						hint: entry.hint,
						pattern: Some(NOT_FOUND.to_string()),
					};
				}
				Err(error) => {
					debug!(path, %error, "not-found resolver failed");
				}
			}
		}

		Resolution {
			view: default_not_found(&info, self.debug_not_found),
			info,
			hint: None,
			pattern: None,
		}
	}

	/// First route that lexically matches `path`, without running resolvers.
	pub fn test(&self, path: &str) -> Option<RoutingInfo> {
		self.routable().find_map(|entry| entry.pattern.matches(path))
	}

	/// Transition declared by the first route lexically matching `path`.
	pub fn transition_hint_for(&self, path: &str) -> Option<TransitionHint> {
		self.routable()
			.find(|entry| entry.pattern.is_match(path))
			.and_then(RouteEntry::hint)
	}

	/// Entry registered under `definition`, compared in normalized form.
	pub fn entry(&self, definition: &str) -> Option<&RouteEntry> {
		self.index
			.get(&normalize(definition))
			.map(|&position| &self.entries[position])
	}

	/// Whether a route is registered under `definition`.
	pub fn contains(&self, definition: &str) -> bool {
		self.index.contains_key(&normalize(definition))
	}

	/// Every entry in registration order, feature routes included.
	pub fn entries(&self) -> &[RouteEntry] {
		&self.entries
	}

	/// Launcher entries in declaration order.
	pub fn leaves(&self) -> &[Leaf] {
		&self.leaves
	}

	/// Number of registered routes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no route is registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	fn routable(&self) -> impl Iterator<Item = &RouteEntry> {
		self.entries.iter().filter(|entry| !entry.pattern.is_feature())
	}
}

impl fmt::Debug for Router {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("routes", &self.entries)
			.field("leaves", &self.leaves.iter().map(|leaf| &leaf.path).collect::<Vec<_>>())
			.field("debug_not_found", &self.debug_not_found)
			.finish()
	}
}
