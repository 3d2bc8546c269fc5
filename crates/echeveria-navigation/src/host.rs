//! Drives transitions for the intents a history emits.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use echeveria_transition::{
	EdgePanTracker, PanDecision, PanGesture, TransitionEngine, TransitionHint,
	TransitionOutcome, TransitionOwner, TransitionPhase, TransitionSettings, TransitionSlot, ViewId,
};
use echeveria_urls::{Router, View};
use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::error::{NavigationError, NavigationResult};
use crate::events::{IntentKind, NavigationEvent, NavigationEvents, TransitionIntent};
use crate::history::NavigationHistory;
use crate::navigator::NavigatorHandle;
use crate::pool::ContentPool;
use crate::settings::NavigationSettings;
use crate::state::RoutingState;
use crate::surface::Surface;

/// A view mounted on the surface for one path.
#[derive(Debug, Clone)]
struct Presented {
	id: ViewId,
	path: String,
	view: View,
}

/// History frame an interactive pop removes once it commits.
#[derive(Debug)]
struct PoppedFrame {
	root: String,
	depth: usize,
	path: String,
}

#[derive(Debug)]
struct InFlight {
	kind: IntentKind,
	destination: Presented,
	popping: Option<PoppedFrame>,
}

/// Collects launcher requests raised while a transition runs.
#[derive(Debug, Default)]
struct HostOwner {
	launcher: Option<bool>,
}

impl TransitionOwner for HostOwner {
	fn show_launcher(&mut self) {
		self.launcher = Some(true);
	}

	fn hide_launcher(&mut self) {
		self.launcher = Some(false);
	}

	fn transition_finish(&mut self, live: ViewId, released: Option<ViewId>) {
		debug!(%live, ?released, "transition finished");
	}

	fn transition_cancel(&mut self, live: Option<ViewId>, released: ViewId) {
		debug!(?live, %released, "transition cancelled");
	}
}

/// Owns the router, the history and the surface, and turns queued intents
/// into transitions one at a time.
///
/// The host is driven from the UI main context: [`tick`](Self::tick) on
/// every frame, or [`run_until_idle`](Self::run_until_idle) when no frame
/// clock exists.
///
/// Transition hints are chosen in this order: the intent's hint, the hint
/// declared by the destination route, [`TransitionHint::Push`].
pub struct NavigationHost<S: Surface> {
	router: Arc<Router>,
	history: Arc<Mutex<NavigationHistory>>,
	events: NavigationEvents,
	surface: S,
	owner: HostOwner,
	slot: TransitionSlot,
	tracker: EdgePanTracker,
	transition: TransitionSettings,
	pending: VecDeque<TransitionIntent>,
	live: Option<Presented>,
	in_flight: Option<InFlight>,
	pool: ContentPool<Presented>,
}

impl<S: Surface> NavigationHost<S> {
	/// Creates a host with default settings.
	pub fn new(router: Router, surface: S) -> Self {
		Self::with_settings(
			router,
			surface,
			TransitionSettings::default(),
			NavigationSettings::default(),
		)
	}

	/// Creates a host. Leaves declared on `router` become navigation roots.
	pub fn with_settings(
		router: Router,
		surface: S,
		transition: TransitionSettings,
		navigation: NavigationSettings,
	) -> Self {
		let router = match navigation.debug_not_found {
			Some(detailed) => router.with_debug_not_found(detailed),
			None => router,
		};
		let (history, events) = if router.leaves().is_empty() {
			NavigationHistory::new()
		} else {
			NavigationHistory::from_leaves(router.leaves())
		};
		info!(
			routes = router.len(),
			roots = history.roots().len(),
			current = history.current(),
			"navigation host created"
		);

		Self {
			router: Arc::new(router),
			history: Arc::new(Mutex::new(history)),
			events,
			surface,
			owner: HostOwner::default(),
			slot: TransitionSlot::new(),
			tracker: EdgePanTracker::new(transition.interactive_threshold),
			transition,
			pending: VecDeque::new(),
			live: None,
			in_flight: None,
			pool: ContentPool::new(navigation.pool_capacity),
		}
	}

	/// The route table views are resolved from.
	pub fn router(&self) -> &Arc<Router> {
		&self.router
	}

	/// Locks the history.
	pub fn history(&self) -> MutexGuard<'_, NavigationHistory> {
		self.history.lock()
	}

	/// A navigator that feeds this host's history.
	pub fn navigator(&self) -> NavigatorHandle {
		NavigatorHandle::new(Arc::clone(&self.history), Arc::clone(&self.router))
	}

	/// The surface views are mounted on.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Mutable access to the surface.
	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}

	/// Path of the committed view, if one is presented.
	pub fn live_path(&self) -> Option<&str> {
		self.live.as_ref().map(|live| live.path.as_str())
	}

	/// View of the committed path.
	pub fn live_view(&self) -> Option<&View> {
		self.live.as_ref().map(|live| &live.view)
	}

	/// Whether a transition occupies the surface.
	pub fn is_busy(&self) -> bool {
		self.slot.is_busy()
	}

	/// Intents received but not started yet.
	pub fn pending(&self) -> usize {
		self.pending.len()
	}

	/// Presents the current path without animation and settles every
	/// queued intent.
	///
	/// # Errors
	///
	/// Propagates a [`NavigationError::Transition`] raised while settling
	/// the queue.
	pub fn launch(&mut self) -> NavigationResult<()> {
		if self.live.is_some() || self.in_flight.is_some() {
			debug!("host already launched");
			return Ok(());
		}
		let to = self.history.lock().current().to_string();
		info!(path = %to, "launching");
		self.pending.push_front(TransitionIntent {
			from: None,
			to,
			hint: Some(TransitionHint::Instant),
			kind: IntentKind::Present,
		});
		self.run_until_idle()
	}

	/// Moves queued events into the intent queue and starts the next
	/// transition if the surface is free.
	///
	/// Returns `true` when a transition was started.
	pub fn process_pending(&mut self) -> NavigationResult<bool> {
		for event in self.events.drain() {
			match event {
				NavigationEvent::Transition(intent) => self.pending.push_back(intent),
				NavigationEvent::Reselected { path } => self.surface.reselected(&path),
			}
		}
		if self.slot.is_busy() {
			return Ok(false);
		}
		let Some(intent) = self.pending.pop_front() else {
			return Ok(false);
		};
		self.start(intent)?;
		Ok(true)
	}

	/// Advances the running animation by `dt`.
	///
	/// Returns the outcome on the frame a transition completes.
	pub fn tick(&mut self, dt: Duration) -> NavigationResult<Option<TransitionOutcome>> {
		self.process_pending()?;
		if !self.is_animating() {
			return Ok(None);
		}
		let outcome = self.slot.tick(dt, &mut self.owner, &mut self.surface)?;
		self.flush_launcher();
		if let Some(outcome) = outcome {
			self.settle(outcome);
			self.process_pending()?;
		}
		Ok(outcome)
	}

	/// Ticks at the configured frame interval until no timed transition or
	/// queued intent remains. An interactive transition waiting for its
	/// gesture stops the loop.
	pub fn run_until_idle(&mut self) -> NavigationResult<()> {
		let step = self.transition.frame_step();
		loop {
			self.process_pending()?;
			if !self.is_animating() {
				return Ok(());
			}
			self.tick(step)?;
		}
	}

	/// Feeds one edge-pan sample.
	///
	/// [`PanGesture::Began`] starts an interactive pop to the previous path
	/// of the active root; the release decides between commit and rollback.
	/// The history only changes once the pop commits, and then loses
	/// exactly the frame that was on screen when the gesture began. Moves
	/// requested meanwhile stay queued and run after the pop settles.
	///
	/// # Errors
	///
	/// - [`NavigationError::NotLaunched`] before [`launch`](Self::launch)
	/// - [`NavigationError::NothingToPop`] on a bare root
	/// - [`NavigationError::NoInteraction`] for a sample without a running
	///   interactive pop
	/// - [`NavigationError::Transition`] when the surface is busy
	pub fn pan(&mut self, gesture: PanGesture) -> NavigationResult<Option<PanDecision>> {
		if matches!(gesture, PanGesture::Began { .. }) {
			self.begin_interactive_pop()?;
		} else if !self.in_flight.as_ref().is_some_and(|flight| flight.popping.is_some()) {
			return Err(NavigationError::NoInteraction);
		}

		let engine = self.slot.engine_mut()?;
		let mut ctx = engine.context(&mut self.owner, &mut self.surface);
		let decision = self.tracker.handle(gesture, engine, &mut ctx)?;
		self.flush_launcher();
		Ok(decision)
	}

	/// Chrome state for the committed view.
	pub fn routing_state(&self) -> RoutingState {
		let title = self.live.as_ref().and_then(|live| {
			live.view.title().or_else(|| {
				self.router
					.leaves()
					.iter()
					.find(|leaf| leaf.path == live.path)
					.map(|leaf| leaf.title.clone())
			})
		});
		RoutingState {
			title,
			back_transition: self.history.lock().back_transition(),
		}
	}

	fn is_animating(&self) -> bool {
		self.slot
			.engine()
			.is_some_and(|engine| matches!(engine.phase(), TransitionPhase::Animating(_)))
	}

	fn start(&mut self, intent: TransitionIntent) -> NavigationResult<()> {
		let hint = intent
			.hint
			.or_else(|| self.router.transition_hint_for(&intent.to))
			.unwrap_or_default();
		let destination = self.present(&intent.to, intent.kind == IntentKind::SwitchRoot);
		let engine = TransitionEngine::for_hint(
			hint,
			self.live.as_ref().map(|live| live.id),
			destination.id,
			&self.transition,
		);

		let engine = match self.slot.begin(engine) {
			Ok(engine) => engine,
			Err(error) => {
				self.surface.unmount(destination.id);
				self.pending.push_front(intent);
				return Err(error.into());
			}
		};
		let mut ctx = engine.context(&mut self.owner, &mut self.surface);
		engine.prepare(&mut ctx)?;
		engine.finish()?;
		self.flush_launcher();

		info!(to = %intent.to, kind = ?intent.kind, %hint, "transition started");
		self.in_flight = Some(InFlight {
			kind: intent.kind,
			destination,
			popping: None,
		});
		Ok(())
	}

	fn begin_interactive_pop(&mut self) -> NavigationResult<()> {
		self.process_pending()?;
		let source = self.live.as_ref().map(|live| live.id).ok_or(NavigationError::NotLaunched)?;
		let (previous, hint, popping) = {
			let history = self.history.lock();
			match history.previous() {
				Some(previous) => (
					previous.to_string(),
					history.back_transition().unwrap_or(TransitionHint::Pop),
					PoppedFrame {
						root: history.active_root().to_string(),
						depth: history.depth(),
						path: history.current().to_string(),
					},
				),
				None => {
					return Err(NavigationError::NothingToPop {
						root: history.active_root().to_string(),
					});
				}
			}
		};
		let destination = self.present(&previous, false);
		let engine = TransitionEngine::for_hint(hint, Some(source), destination.id, &self.transition);
		if let Err(error) = self.slot.begin(engine) {
			self.surface.unmount(destination.id);
			return Err(error.into());
		}
		debug!(to = %previous, %hint, "interactive pop started");
		self.in_flight = Some(InFlight {
			kind: IntentKind::Pop,
			destination,
			popping: Some(popping),
		});
		Ok(())
	}

	/// Mounts the view for `path`, reusing a pooled one when `reuse` is set.
	fn present(&mut self, path: &str, reuse: bool) -> Presented {
		if reuse {
			if let Some(presented) = self.pool.take(path) {
				debug!(path, "reusing pooled view");
				return presented;
			}
		}
		let resolution = self.router.resolve_route(path);
		let id = self.surface.mount(&resolution.view, &resolution.info);
		Presented {
			id,
			path: path.to_string(),
			view: resolution.view,
		}
	}

	fn settle(&mut self, outcome: TransitionOutcome) {
		let Some(flight) = self.in_flight.take() else {
			return;
		};
		if outcome.is_committed() {
			if let Some(frame) = &flight.popping {
				if !self.history.lock().remove_frame(&frame.root, frame.depth, &frame.path) {
					warn!(root = %frame.root, path = %frame.path, "popped frame no longer in history");
				}
			}
			info!(path = %flight.destination.path, "transition committed");
			if let Some(previous) = self.live.replace(flight.destination) {
				self.retire(previous, flight.kind);
			}
		} else {
			debug!(path = %flight.destination.path, "transition rolled back");
			self.retire(flight.destination, flight.kind);
		}
	}

	/// Releases a view that left the screen. Root switches keep it pooled.
	fn retire(&mut self, presented: Presented, kind: IntentKind) {
		if kind != IntentKind::SwitchRoot {
			self.surface.unmount(presented.id);
			return;
		}
		for (path, evicted) in self.pool.insert(presented.path.clone(), presented) {
			debug!(path, "evicting pooled view");
			self.surface.unmount(evicted.id);
		}
	}

	fn flush_launcher(&mut self) {
		if let Some(visible) = self.owner.launcher.take() {
			self.surface.set_launcher_visible(visible);
		}
	}
}

impl<S: Surface> fmt::Debug for NavigationHost<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NavigationHost")
			.field("live", &self.live_path())
			.field("pending", &self.pending.len())
			.field("busy", &self.slot.is_busy())
			.field("pooled", &self.pool.len())
			.finish_non_exhaustive()
	}
}
