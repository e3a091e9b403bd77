//! Default keybindings for the application.
//!
//! Bindings live in three tables: global, per-screen and search. The
//! [`IntentRegistry`](super::IntentRegistry) decides which table is
//! consulted for a given [`InputContext`](super::InputContext).
//!
//! | Key | Intent | Table |
//! |-----|--------|-------|
//! | `q`, `Ctrl+C` | `Quit` | global |
//! | `h` / `d` | `NavigateHome` / `NavigateDashboard` | global |
//! | `Enter` | `NavigateDashboard` | home |
//! | `r` | `Refresh` | dashboard |
//! | `Tab`, `1`, `2` | `ToggleTab`, `SelectTab` | dashboard |
//! | `n`/`Right`, `N`/`Left` | `NextNetwork`, `PrevNetwork` | dashboard |
//! | `c` | `CopyAddress` | dashboard |
//! | `/`, `Esc` | `StartSearch`, `ClearSearch` | dashboard |
//! | `Enter`, `Esc`, `Backspace` | `EndSearch`, `ClearSearch`, `SearchBackspace` | search |

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::intent::Intent;
use crate::app::Screen;
use crate::models::Tab;

/// Represents a key combination (key code + modifiers).
///
/// Lookups are exact: `KeyCombo::plain(KeyCode::Char('c'))` does not match
/// a Ctrl+C event.
///
/// # Example
///
/// ```
/// use blockdash::input::KeyCombo;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let combo = KeyCombo::ctrl(KeyCode::Char('c'));
/// assert_eq!(combo.modifiers, KeyModifiers::CONTROL);
/// assert_ne!(combo, KeyCombo::plain(KeyCode::Char('c')));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Keybinding configuration for the application.
///
/// The tables are public so a caller can rebind keys before handing the
/// config to [`IntentRegistry::with_config`](super::IntentRegistry::with_config).
///
/// # Example
///
/// ```
/// use blockdash::app::Screen;
/// use blockdash::input::{Intent, KeyCombo, KeybindingConfig};
/// use crossterm::event::KeyCode;
///
/// let mut config = KeybindingConfig::new();
/// config
///     .screen
///     .entry(Screen::Dashboard)
///     .or_default()
///     .insert(KeyCombo::plain(KeyCode::F(5)), Intent::Refresh);
///
/// assert_eq!(
///     config.get_screen(Screen::Dashboard, &KeyCombo::plain(KeyCode::F(5))),
///     Some(&Intent::Refresh)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active on every screen unless the search box has focus
    pub global: HashMap<KeyCombo, Intent>,
    /// Per-screen bindings
    pub screen: HashMap<Screen, HashMap<KeyCombo, Intent>>,
    /// Bindings while the search box has focus
    pub search: HashMap<KeyCombo, Intent>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            screen: HashMap::new(),
            search: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_screen_bindings();
        config.setup_search_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Intent::Quit);
        self.global
            .insert(KeyCombo::plain(KeyCode::Char('q')), Intent::Quit);
        self.global
            .insert(KeyCombo::plain(KeyCode::Char('h')), Intent::NavigateHome);
        self.global
            .insert(KeyCombo::plain(KeyCode::Char('d')), Intent::NavigateDashboard);
    }

    fn setup_screen_bindings(&mut self) {
        let mut home = HashMap::new();
        home.insert(KeyCombo::plain(KeyCode::Enter), Intent::NavigateDashboard);
        self.screen.insert(Screen::Home, home);

        let mut dashboard = HashMap::new();
        dashboard.insert(KeyCombo::plain(KeyCode::Char('r')), Intent::Refresh);
        dashboard.insert(KeyCombo::plain(KeyCode::Tab), Intent::ToggleTab);
        dashboard.insert(
            KeyCombo::plain(KeyCode::Char('1')),
            Intent::SelectTab(Tab::Transactions),
        );
        dashboard.insert(
            KeyCombo::plain(KeyCode::Char('2')),
            Intent::SelectTab(Tab::Blocks),
        );
        dashboard.insert(KeyCombo::plain(KeyCode::Char('n')), Intent::NextNetwork);
        dashboard.insert(KeyCombo::plain(KeyCode::Right), Intent::NextNetwork);
        // Terminals report Shift+n as either SHIFT+'N' or a bare 'N'
        dashboard.insert(KeyCombo::shift(KeyCode::Char('N')), Intent::PrevNetwork);
        dashboard.insert(KeyCombo::plain(KeyCode::Char('N')), Intent::PrevNetwork);
        dashboard.insert(KeyCombo::plain(KeyCode::Left), Intent::PrevNetwork);
        dashboard.insert(KeyCombo::plain(KeyCode::Char('c')), Intent::CopyAddress);
        dashboard.insert(KeyCombo::plain(KeyCode::Char('/')), Intent::StartSearch);
        dashboard.insert(KeyCombo::plain(KeyCode::Esc), Intent::ClearSearch);
        self.screen.insert(Screen::Dashboard, dashboard);
    }

    fn setup_search_bindings(&mut self) {
        self.search
            .insert(KeyCombo::plain(KeyCode::Enter), Intent::EndSearch);
        self.search
            .insert(KeyCombo::plain(KeyCode::Esc), Intent::ClearSearch);
        self.search
            .insert(KeyCombo::plain(KeyCode::Backspace), Intent::SearchBackspace);
    }

    /// Binding active on every screen, if any.
    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Intent> {
        self.global.get(combo)
    }

    /// Binding for `screen` only.
    pub fn get_screen(&self, screen: Screen, combo: &KeyCombo) -> Option<&Intent> {
        self.screen.get(&screen).and_then(|map| map.get(combo))
    }

    /// Binding while the search box has focus.
    pub fn get_search(&self, combo: &KeyCombo) -> Option<&Intent> {
        self.search.get(combo)
    }
}
