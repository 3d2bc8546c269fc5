//! Transition hints attached to routes and navigation intents.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scenes::{
	CoverTransition, DiscoverTransition, InstantTransition, PopTransition, PushTransition,
	SceneTransition, SlideTransition,
};

/// Selects the visual transition used for one navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionHint {
	/// Swap without animation.
	Instant,
	/// Destination slides in from the trailing edge over the source.
	#[default]
	Push,
	/// Source slides out to the trailing edge revealing the destination.
	Pop,
	/// Destination rises from the bottom and hides the launcher.
	Cover,
	/// Source drops to the bottom and shows the launcher.
	Discover,
	/// Root switch towards a later root.
	SlideLeft,
	/// Root switch towards an earlier root.
	SlideRight,
}

impl TransitionHint {
	/// All hints in declaration order.
	pub const ALL: [TransitionHint; 7] = [
		TransitionHint::Instant,
		TransitionHint::Push,
		TransitionHint::Pop,
		TransitionHint::Cover,
		TransitionHint::Discover,
		TransitionHint::SlideLeft,
		TransitionHint::SlideRight,
	];

	/// The symmetric transition used when navigating back.
	pub fn back(self) -> Self {
		match self {
			Self::Instant => Self::Instant,
			Self::Push => Self::Pop,
			Self::Pop => Self::Push,
			Self::Cover => Self::Discover,
			Self::Discover => Self::Cover,
			Self::SlideLeft => Self::SlideRight,
			Self::SlideRight => Self::SlideLeft,
		}
	}

	/// Instantiates the scene implementing this hint.
	pub fn scene(self) -> Box<dyn SceneTransition> {
		match self {
			Self::Instant => Box::new(InstantTransition),
			Self::Push => Box::new(PushTransition),
			Self::Pop => Box::new(PopTransition),
			Self::Cover => Box::new(CoverTransition),
			Self::Discover => Box::new(DiscoverTransition),
			Self::SlideLeft => Box::new(SlideTransition::left()),
			Self::SlideRight => Box::new(SlideTransition::right()),
		}
	}

	fn as_str(self) -> &'static str {
		match self {
			Self::Instant => "instant",
			Self::Push => "push",
			Self::Pop => "pop",
			Self::Cover => "cover",
			Self::Discover => "discover",
			Self::SlideLeft => "slide-left",
			Self::SlideRight => "slide-right",
		}
	}
}

impl fmt::Display for TransitionHint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(TransitionHint::Push, TransitionHint::Pop)]
	#[case(TransitionHint::Cover, TransitionHint::Discover)]
	#[case(TransitionHint::SlideLeft, TransitionHint::SlideRight)]
	#[case(TransitionHint::Instant, TransitionHint::Instant)]
	fn test_back_is_symmetric(#[case] hint: TransitionHint, #[case] expected: TransitionHint) {
		assert_eq!(hint.back(), expected);
		assert_eq!(expected.back(), hint);
	}

	#[rstest]
	fn test_scene_reports_its_hint() {
		for hint in TransitionHint::ALL {
			assert_eq!(hint.scene().hint(), hint);
		}
	}

	#[rstest]
	#[case(TransitionHint::SlideLeft, "slide-left")]
	#[case(TransitionHint::Discover, "discover")]
	fn test_display_matches_serde_name(#[case] hint: TransitionHint, #[case] name: &str) {
		assert_eq!(hint.to_string(), name);
		assert_eq!(
			serde_json::to_string(&hint).unwrap(),
			format!("\"{name}\"")
		);
	}
}
