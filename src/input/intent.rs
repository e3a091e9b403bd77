//! Intent definitions for keyboard input handling.
//!
//! An [`Intent`] is a user request to change state. Key bindings resolve to
//! intents, and the app routes every intent through the store's mutation
//! entry points (or the scheduler, for refresh).

use crate::models::Tab;

/// A user request, independent of the key that produced it.
///
/// Intents carry no state of their own. `App::apply_intent` routes each one
/// to a single store mutation or scheduler call; intents for which
/// [`needs_dashboard`](Intent::needs_dashboard) is true are dropped while
/// the dashboard is not mounted.
///
/// # Example
///
/// ```
/// use blockdash::input::Intent;
/// use blockdash::models::Tab;
///
/// assert!(Intent::SelectTab(Tab::Blocks).needs_dashboard());
/// assert!(!Intent::Quit.needs_dashboard());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,
    /// Show the home view (h)
    NavigateHome,
    /// Show the dashboard view (d)
    NavigateDashboard,

    // =========================================================================
    // Dashboard
    // =========================================================================
    /// Manual refresh (r)
    Refresh,
    /// Switch between transactions and blocks (Tab)
    ToggleTab,
    /// Select a specific tab (1, 2)
    SelectTab(Tab),
    /// Cycle the active network forward (n, Right)
    NextNetwork,
    /// Cycle the active network backward (N, Left)
    PrevNetwork,
    /// Copy the wallet address to the clipboard (c)
    CopyAddress,

    // =========================================================================
    // Search
    // =========================================================================
    /// Focus the search box (/)
    StartSearch,
    /// Append a character to the search text
    SearchChar(char),
    /// Delete the last character of the search text
    SearchBackspace,
    /// Leave the search box keeping the text (Enter)
    EndSearch,
    /// Leave the search box and clear the text (Esc)
    ClearSearch,

    /// Key consumed without effect
    Noop,
}

impl Intent {
    /// Whether this intent only applies while the dashboard is mounted.
    ///
    /// Navigation, quit and [`Intent::Noop`] work on every screen.
    pub fn needs_dashboard(&self) -> bool {
        !matches!(
            self,
            Intent::Quit | Intent::NavigateHome | Intent::NavigateDashboard | Intent::Noop
        )
    }
}
