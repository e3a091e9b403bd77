//! Input handling module for keyboard events.
//!
//! Key handling is not scattered through the app; every key event is:
//!
//! 1. Translated to an [`Intent`] by the [`IntentRegistry`]
//! 2. Applied by `App::apply_intent`
//!
//! # Architecture
//!
//! ```text
//! KeyEvent -> IntentRegistry::dispatch() -> Intent -> App -> Store / Scheduler
//! ```
//!
//! # Example
//!
//! ```ignore
//! use blockdash::input::{InputContext, IntentRegistry};
//!
//! let registry = IntentRegistry::new();
//! let context = app.input_context();
//!
//! if let Some(intent) = registry.dispatch(key_event, &context) {
//!     app.apply_intent(intent);
//! }
//! ```

pub mod context;
pub mod intent;
pub mod keybindings;
pub mod registry;

pub use context::InputContext;
pub use intent::Intent;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::IntentRegistry;
