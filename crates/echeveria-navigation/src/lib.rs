//! Navigation state for Echeveria.
//!
//! [`NavigationHistory`] tracks one stack of paths per root and emits
//! [`TransitionIntent`]s. [`NavigationHost`] drains those intents, resolves
//! each destination through the [`Router`](echeveria_urls::Router) and runs
//! the matching transition on a [`Surface`]:
//!
//! ```ignore
//! let mut host = NavigationHost::new(router, HeadlessSurface::new(Size::new(390.0, 844.0)));
//! host.launch()?;
//!
//! let navigator = host.navigator();
//! navigator.move_to("/article/42");
//! host.run_until_idle()?;
//! ```

pub mod error;
pub mod events;
pub mod headless;
pub mod history;
pub mod host;
pub mod navigator;
pub mod pool;
pub mod settings;
pub mod state;
pub mod surface;

pub use error::{NavigationError, NavigationResult};
pub use events::{IntentKind, NavigationEvent, NavigationEvents, TransitionIntent};
pub use headless::{HeadlessSurface, MountedView};
pub use history::{NavigationHistory, ROOT_PATH};
pub use host::NavigationHost;
pub use navigator::{Navigator, NavigatorHandle, PassthroughNavigator};
pub use pool::ContentPool;
pub use settings::NavigationSettings;
pub use state::RoutingState;
pub use surface::Surface;
