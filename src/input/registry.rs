//! Intent registry for dispatching key events to intents.
//!
//! Dispatch priority:
//!
//! 1. Ctrl+C always quits
//! 2. Search box bindings, then printable characters, while searching
//! 3. Global bindings
//! 4. Screen bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::context::InputContext;
use super::intent::Intent;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Maps key events to [`Intent`]s for the current [`InputContext`].
///
/// # Example
///
/// ```
/// use blockdash::app::Screen;
/// use blockdash::input::{InputContext, Intent, IntentRegistry};
/// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
///
/// let registry = IntentRegistry::new();
/// let r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
///
/// let browsing = InputContext::new(Screen::Dashboard, false);
/// assert_eq!(registry.dispatch(r, &browsing), Some(Intent::Refresh));
///
/// // While searching the same key is typed into the search box
/// let searching = InputContext::new(Screen::Dashboard, true);
/// assert_eq!(registry.dispatch(r, &searching), Some(Intent::SearchChar('r')));
/// ```
#[derive(Debug, Clone)]
pub struct IntentRegistry {
    config: KeybindingConfig,
}

impl Default for IntentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentRegistry {
    /// Registry with the default bindings.
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Registry using custom bindings. Ctrl+C still always quits.
    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Resolve a key event to an intent, or `None` when the key is unbound.
    ///
    /// While the search box has focus this never returns `None`: unbound
    /// keys become [`Intent::Noop`] so they cannot leak through to the
    /// dashboard bindings.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Intent> {
        let combo = KeyCombo::new(key.code, key.modifiers);

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Intent::Quit);
        }

        if context.is_search_active() {
            return self.dispatch_search(key, &combo);
        }

        if let Some(intent) = self.config.get_global(&combo) {
            return Some(intent.clone());
        }

        self.config.get_screen(context.screen, &combo).cloned()
    }

    fn dispatch_search(&self, key: KeyEvent, combo: &KeyCombo) -> Option<Intent> {
        if let Some(intent) = self.config.get_search(combo) {
            return Some(intent.clone());
        }

        if let KeyCode::Char(c) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
            {
                return Some(Intent::SearchChar(c));
            }
        }

        Some(Intent::Noop)
    }
}
