//! AppMessage enum for async communication within the application.

use crate::scheduler::RefreshEvent;

/// Messages received from async tasks
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Refresh timer tick or fetch result
    Refresh(RefreshEvent),
}
