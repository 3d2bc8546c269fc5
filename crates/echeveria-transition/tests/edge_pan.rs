//! Edge-swipe pop driven through the public API.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use echeveria_transition::headless::{HeadlessContainer, OwnerEvent, RecordingOwner};
use echeveria_transition::{
	Container, EdgePanTracker, LayerState, PanDecision, PanGesture, Placement, Size,
	TransitionEngine, TransitionError, TransitionHint, TransitionOutcome, TransitionPhase,
	TransitionSettings, TransitionSlot, ViewId,
};
use rstest::{fixture, rstest};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

const BOUNDS: Size = Size::new(400.0, 800.0);

struct Screen {
	owner: RecordingOwner,
	container: HeadlessContainer,
	slot: TransitionSlot,
	current: ViewId,
	previous: ViewId,
}

#[fixture]
fn screen() -> Screen {
	let current = ViewId::next();
	let mut container = HeadlessContainer::new(BOUNDS);
	container.insert(current, Placement::Above);
	Screen {
		owner: RecordingOwner::default(),
		container,
		slot: TransitionSlot::new(),
		current,
		previous: ViewId::next(),
	}
}

fn pop_engine(screen: &Screen) -> TransitionEngine {
	TransitionEngine::for_hint(
		TransitionHint::Pop,
		Some(screen.current),
		screen.previous,
		&TransitionSettings::default(),
	)
}

fn drive(screen: &mut Screen, gestures: &[PanGesture]) -> Option<PanDecision> {
	let tracker = EdgePanTracker::default();
	let engine = pop_engine(screen);
	let engine = screen.slot.begin(engine).unwrap();
	let mut ctx = engine.context(&mut screen.owner, &mut screen.container);
	let mut decision = None;
	for gesture in gestures {
		decision = tracker.handle(*gesture, engine, &mut ctx).unwrap();
	}
	decision
}

fn settle(screen: &mut Screen) -> TransitionOutcome {
	loop {
		let outcome = screen
			.slot
			.tick(Duration::from_millis(16), &mut screen.owner, &mut screen.container)
			.unwrap();
		if let Some(outcome) = outcome {
			return outcome;
		}
	}
}

#[rstest]
fn test_long_swipe_commits_pop(mut screen: Screen) {
	// Arrange
	let gestures = [
		PanGesture::Began { translation: 0.0 },
		PanGesture::Changed { translation: 120.0 },
		PanGesture::Changed { translation: 240.0 },
		PanGesture::Ended {
			translation: 260.0,
			velocity: 30.0,
		},
	];

	// Act
	let decision = drive(&mut screen, &gestures);
	let outcome = settle(&mut screen);

	// Assert
	assert_eq!(decision, Some(PanDecision::Commit));
	assert_eq!(outcome.live(), Some(screen.previous));
	assert_eq!(screen.container.children(), &[screen.previous]);
	assert_eq!(
		screen.container.state(screen.previous),
		Some(LayerState::at_rest(BOUNDS))
	);
}

#[rstest]
fn test_short_swipe_rolls_back(mut screen: Screen) {
	// Arrange
	let gestures = [
		PanGesture::Began { translation: 0.0 },
		PanGesture::Changed { translation: 80.0 },
		PanGesture::Ended {
			translation: 90.0,
			velocity: 10.0,
		},
	];

	// Act
	let decision = drive(&mut screen, &gestures);
	let outcome = settle(&mut screen);

	// Assert
	assert_eq!(decision, Some(PanDecision::Rollback));
	assert_eq!(
		outcome,
		TransitionOutcome::Cancelled {
			live: Some(screen.current),
			released: screen.previous,
		}
	);
	assert_eq!(screen.container.children(), &[screen.current]);
	assert_eq!(
		screen.owner.events(),
		&[OwnerEvent::Cancel {
			live: Some(screen.current),
			released: screen.previous,
		}]
	);
}

#[rstest]
fn test_interrupted_gesture_always_cancels(mut screen: Screen) {
	// Arrange
	let gestures = [
		PanGesture::Began { translation: 0.0 },
		PanGesture::Changed { translation: 390.0 },
		PanGesture::Cancelled,
	];

	// Act
	let decision = drive(&mut screen, &gestures);
	let outcome = settle(&mut screen);

	// Assert
	assert_eq!(decision, Some(PanDecision::Rollback));
	assert!(!outcome.is_committed());
}

#[rstest]
fn test_programmatic_transition_waits_for_gesture(mut screen: Screen) {
	// Arrange
	struct WarnCapture {
		warnings: Arc<Mutex<Vec<String>>>,
	}

	impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCapture {
		fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
			if *event.metadata().level() == tracing::Level::WARN {
				self.warnings
					.lock()
					.unwrap()
					.push(event.metadata().target().to_string());
			}
		}
	}

	let warnings = Arc::new(Mutex::new(Vec::new()));
	let _guard = tracing_subscriber::registry()
		.with(WarnCapture {
			warnings: warnings.clone(),
		})
		.set_default();
	drive(
		&mut screen,
		&[
			PanGesture::Began { translation: 0.0 },
			PanGesture::Changed { translation: 100.0 },
		],
	);
	let push = TransitionEngine::for_hint(
		TransitionHint::Push,
		Some(screen.current),
		ViewId::next(),
		&TransitionSettings::default(),
	);

	// Act
	let result = screen.slot.begin(push);

	// Assert
	assert!(matches!(result, Err(TransitionError::Busy)));
	assert_eq!(
		screen.slot.engine().map(|engine| engine.phase()),
		Some(TransitionPhase::Preparing)
	);
	assert_eq!(warnings.lock().unwrap().len(), 1);
}

#[rstest]
fn test_pan_before_container_layout_rolls_back() {
	// Arrange
	let mut owner = RecordingOwner::default();
	let mut container = HeadlessContainer::new(Size::new(0.0, 0.0));
	let current = ViewId::next();
	container.insert(current, Placement::Above);
	let mut engine = TransitionEngine::for_hint(
		TransitionHint::Pop,
		Some(current),
		ViewId::next(),
		&TransitionSettings::default(),
	);
	let mut ctx = engine.context(&mut owner, &mut container);
	let tracker = EdgePanTracker::default();

	// Act
	tracker.began(&mut engine, &mut ctx).unwrap();
	let decision = tracker.ended(50.0, 500.0, &mut engine, &mut ctx).unwrap();
	let outcome = engine.run_to_end(&mut ctx).unwrap();

	// Assert
	assert_eq!(decision, PanDecision::Rollback);
	assert!(!outcome.is_committed());
	assert!(container.contains(current));
}
