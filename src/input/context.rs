//! Input context for determining which intents are available.

use crate::app::Screen;

/// The parts of app state that decide how a key is interpreted.
///
/// Built fresh from the app for every key event by `App::input_context`, so
/// it never goes stale between events.
///
/// # Example
///
/// ```
/// use blockdash::app::Screen;
/// use blockdash::input::InputContext;
///
/// let context = InputContext::new(Screen::Dashboard, true);
/// assert!(context.is_search_active());
///
/// // A search flag left over on the home screen does not capture keys
/// assert!(!InputContext::new(Screen::Home, true).is_search_active());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    /// Current screen
    pub screen: Screen,
    /// Search box has focus; printable keys edit the search text
    pub search_active: bool,
}

impl InputContext {
    pub fn new(screen: Screen, search_active: bool) -> Self {
        Self {
            screen,
            search_active,
        }
    }

    /// Whether printable keys go to the search box.
    ///
    /// True only while the dashboard is shown and the search box has focus.
    pub fn is_search_active(&self) -> bool {
        self.search_active && self.screen == Screen::Dashboard
    }
}
