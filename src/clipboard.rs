//! System clipboard access.
//!
//! Uses `arboard` to reach the OS clipboard (NSPasteboard on macOS,
//! X11/Wayland on Linux). No coupling to UI or application state.

use crate::error::{DashboardError, DashboardResult};

/// Put `text` on the system clipboard.
pub fn copy_text(text: &str) -> DashboardResult<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| DashboardError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_owned())
        .map_err(|e| DashboardError::Clipboard(e.to_string()))
}
