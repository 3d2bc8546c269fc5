//! Renderable content returned by route resolvers.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::not_found::NotFoundReport;

/// Application content behind a [`View::Custom`].
///
/// The hosting surface downcasts or inspects this however its toolkit
/// requires; the router only needs a textual description for logs.
pub trait Render: Send + Sync + fmt::Debug {
	/// Short description used in logs and headless snapshots.
	fn describe(&self) -> String;

	/// Navigation-bar title, if the content declares one.
	fn title(&self) -> Option<String> {
		None
	}
}

/// Content produced for a resolved route.
#[derive(Debug, Clone, Default)]
pub enum View {
	/// Renders nothing.
	#[default]
	Empty,
	/// A text node.
	Text(Cow<'static, str>),
	/// Several views side by side.
	Fragment(Vec<View>),
	/// Placeholder registered for `/` when the application declares none.
	Welcome,
	/// Built-in not-found content.
	NotFound(NotFoundReport),
	/// Application content.
	Custom(Arc<dyn Render>),
}

impl View {
	/// A view showing plain text.
	pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(text.into())
	}

	/// Wraps toolkit-specific content.
	pub fn custom(content: impl Render + 'static) -> Self {
		Self::Custom(Arc::new(content))
	}

	/// Whether this is [`View::Empty`].
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	/// Whether the view came from the not-found route.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound(_))
	}

	/// Title for chrome, taken from custom content.
	pub fn title(&self) -> Option<String> {
		match self {
			Self::Custom(content) => content.title(),
			Self::Fragment(children) => children.iter().find_map(View::title),
			_ => None,
		}
	}
}

impl fmt::Display for View {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty => Ok(()),
			Self::Text(text) => f.write_str(text),
			Self::Fragment(children) => {
				for child in children {
					write!(f, "{child}")?;
				}
				Ok(())
			}
			Self::Welcome => f.write_str("Welcome"),
			Self::NotFound(report) => write!(f, "{report}"),
			Self::Custom(content) => f.write_str(&content.describe()),
		}
	}
}

impl PartialEq for View {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Empty, Self::Empty) | (Self::Welcome, Self::Welcome) => true,
			(Self::Text(a), Self::Text(b)) => a == b,
			(Self::Fragment(a), Self::Fragment(b)) => a == b,
			(Self::NotFound(a), Self::NotFound(b)) => a == b,
			(Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

/// Conversion into a [`View`].
pub trait IntoView {
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for () {
	fn into_view(self) -> View {
		View::Empty
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::Fragment(self.into_iter().map(IntoView::into_view).collect())
	}
}
