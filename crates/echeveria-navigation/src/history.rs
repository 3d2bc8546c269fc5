//! Multi-root navigation history.
//!
//! Every root (one per launcher tab) owns its own stack of frames. Pushing
//! a registered root switches to it and restores its stack; pushing any
//! other path appends a frame to the active root.
//!
//! ```text
//! + /
//! + /home > /article/1
//! + /account > /account/setting
//! ```

use std::collections::HashMap;
use std::fmt;

use echeveria_transition::TransitionHint;
use echeveria_urls::{Leaf, LeafPlacement};
use tracing::{debug, warn};

use crate::events::{self, EventSender, IntentKind, NavigationEvent, NavigationEvents, TransitionIntent};

/// Path of the root every history starts with.
pub const ROOT_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
	path: String,
	hint: Option<TransitionHint>,
}

/// One root and the frames pushed above it, bottom first.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Chain {
	root: String,
	frames: Vec<Frame>,
}

impl Chain {
	fn new(root: &str) -> Self {
		Self {
			root: root.to_string(),
			frames: Vec::new(),
		}
	}

	fn tail(&self) -> &str {
		self.frames.last().map_or(self.root.as_str(), |frame| frame.path.as_str())
	}

	/// Path under the tail frame; `None` on a bare root.
	fn previous(&self) -> Option<&str> {
		match self.frames.len() {
			0 => None,
			1 => Some(self.root.as_str()),
			len => Some(self.frames[len - 2].path.as_str()),
		}
	}

	/// Paths from the root to the tail.
	fn paths(&self) -> Vec<&str> {
		std::iter::once(self.root.as_str())
			.chain(self.frames.iter().map(|frame| frame.path.as_str()))
			.collect()
	}
}

/// Per-root navigation stacks with exactly one active root.
#[derive(Debug)]
pub struct NavigationHistory {
	chains: HashMap<String, Chain>,
	roots: Vec<String>,
	active: String,
	events: EventSender,
}

impl NavigationHistory {
	/// Creates a history holding only the `/` root.
	///
	/// The returned [`NavigationEvents`] receives every intent.
	pub fn new() -> (Self, NavigationEvents) {
		let (events, receiver) = events::channel();
		let history = Self {
			chains: HashMap::from([(ROOT_PATH.to_string(), Chain::new(ROOT_PATH))]),
			roots: vec![ROOT_PATH.to_string()],
			active: ROOT_PATH.to_string(),
			events,
		};
		(history, receiver)
	}

	/// Registers every leaf path as a root and activates the first
	/// [`LeafPlacement::Launcher`] leaf without emitting an intent.
	pub fn from_leaves(leaves: &[Leaf]) -> (Self, NavigationEvents) {
		let (mut history, receiver) = Self::new();
		for leaf in leaves {
			history.register_root(&leaf.path);
		}
		if let Some(leaf) = leaves.iter().find(|leaf| leaf.is_placed(LeafPlacement::Launcher)) {
			history.active = leaf.path.clone();
		}
		(history, receiver)
	}

	/// Adds an empty root.
	///
	/// Registering an existing root logs a warning and keeps its stack.
	pub fn register_root(&mut self, path: &str) {
		if self.chains.contains_key(path) {
			warn!(path, "root registered more than once; keeping the existing stack");
			return;
		}
		self.chains.insert(path.to_string(), Chain::new(path));
		self.roots.push(path.to_string());
	}

	/// Navigates to `path`.
	///
	/// - the active root again: emits [`NavigationEvent::Reselected`]
	/// - another registered root: switches to it; without an explicit hint
	///   the slide direction follows the root registration order
	/// - anything else: appends a frame to the active root
	pub fn push(&mut self, path: &str, hint: Option<TransitionHint>) {
		if self.chains.contains_key(path) {
			self.switch_root(path, hint);
			return;
		}

		let from = self.current().to_string();
		let Some(chain) = self.chains.get_mut(&self.active) else {
			warn!(root = %self.active, "active root has no stack");
			return;
		};
		chain.frames.push(Frame {
			path: path.to_string(),
			hint,
		});
		debug!(root = %self.active, path, "pushed frame");
		self.events.emit(NavigationEvent::Transition(TransitionIntent {
			from: Some(from),
			to: path.to_string(),
			hint,
			kind: IntentKind::Push,
		}));
	}

	/// Removes the tail frame of the active root.
	///
	/// The intent carries `hint`, or the reverse of the hint the frame was
	/// pushed with (a frame pushed without a hint pops as
	/// [`TransitionHint::Pop`]). Returns `false` on a bare root.
	pub fn pop(&mut self, hint: Option<TransitionHint>) -> bool {
		match self.detach_tail() {
			Some((path, stored)) => {
				let hint = hint.unwrap_or_else(|| stored.unwrap_or(TransitionHint::Push).back());
				self.events.emit(NavigationEvent::Transition(TransitionIntent {
					from: Some(path),
					to: self.current().to_string(),
					hint: Some(hint),
					kind: IntentKind::Pop,
				}));
				true
			}
			None => {
				warn!(root = %self.active, "pop on a bare root ignored");
				false
			}
		}
	}

	/// Removes the frame at `depth` (1 for the first frame above the root)
	/// of `root`'s stack without emitting an intent.
	///
	/// Nothing is removed unless that frame still holds `path`. Frames
	/// pushed above it keep their order. Used once an interactive pop has
	/// already been animated.
	pub fn remove_frame(&mut self, root: &str, depth: usize, path: &str) -> bool {
		let Some(chain) = self.chains.get_mut(root) else {
			return false;
		};
		let Some(index) = depth.checked_sub(1) else {
			return false;
		};
		if chain.frames.get(index).is_none_or(|frame| frame.path != path) {
			return false;
		}
		chain.frames.remove(index);
		debug!(root, path, depth, "removed frame");
		true
	}

	/// Tail path of the active root.
	pub fn current(&self) -> &str {
		self.chains
			.get(&self.active)
			.map_or(ROOT_PATH, Chain::tail)
	}

	/// Root whose stack is on screen.
	pub fn active_root(&self) -> &str {
		&self.active
	}

	/// Registered roots in registration order.
	pub fn roots(&self) -> &[String] {
		&self.roots
	}

	/// Whether `path` is a registered root.
	pub fn is_root(&self, path: &str) -> bool {
		self.chains.contains_key(path)
	}

	/// Number of frames above the active root.
	pub fn depth(&self) -> usize {
		self.chains.get(&self.active).map_or(0, |chain| chain.frames.len())
	}

	/// Path directly under the tail of the active root.
	pub fn previous(&self) -> Option<&str> {
		self.chains.get(&self.active)?.previous()
	}

	/// Transition a pop of the tail frame would use.
	pub fn back_transition(&self) -> Option<TransitionHint> {
		let frame = self.chains.get(&self.active)?.frames.last()?;
		Some(frame.hint.unwrap_or(TransitionHint::Push).back())
	}

	/// Paths of `root`'s stack from the root to the tail.
	pub fn stack(&self, root: &str) -> Option<Vec<&str>> {
		self.chains.get(root).map(Chain::paths)
	}

	fn switch_root(&mut self, path: &str, hint: Option<TransitionHint>) {
		if self.active == path {
			debug!(path, "active root reselected");
			self.events.emit(NavigationEvent::Reselected {
				path: path.to_string(),
			});
			return;
		}

		let from = self.current().to_string();
		let hint = hint.unwrap_or_else(|| self.slide_towards(path));
		self.active = path.to_string();
		debug!(root = path, %hint, "switched root");
		self.events.emit(NavigationEvent::Transition(TransitionIntent {
			from: Some(from),
			to: self.current().to_string(),
			hint: Some(hint),
			kind: IntentKind::SwitchRoot,
		}));
	}

	fn slide_towards(&self, root: &str) -> TransitionHint {
		let ordinal = |path: &str| self.roots.iter().position(|registered| registered == path);
		match (ordinal(&self.active), ordinal(root)) {
			(Some(old), Some(new)) if old < new => TransitionHint::SlideLeft,
			(Some(old), Some(new)) if old > new => TransitionHint::SlideRight,
			_ => TransitionHint::Instant,
		}
	}

	fn detach_tail(&mut self) -> Option<(String, Option<TransitionHint>)> {
		let Frame { path, hint } = self.chains.get_mut(&self.active)?.frames.pop()?;
		debug!(root = %self.active, path = %path, "popped frame");
		Some((path, hint))
	}
}

impl fmt::Display for NavigationHistory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for root in &self.roots {
			let Some(chain) = self.chains.get(root) else {
				continue;
			};
			if !first {
				writeln!(f)?;
			}
			first = false;
			write!(f, "+ {}", chain.paths().join(" > "))?;
		}
		Ok(())
	}
}
