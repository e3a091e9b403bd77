//! Terminal lifecycle for the dashboard.
//!
//! [`TerminalManager`] owns the ratatui terminal and restores the user's
//! shell when dropped. The panic hook covers the paths where `Drop` never
//! runs.
//!
//! ```no_run
//! use blockdash::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {})?;
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Restores the terminal exactly once.
struct RestoreGuard {
    restored: bool,
}

impl RestoreGuard {
    fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: RestoreGuard,
}

impl TerminalManager {
    /// Enter raw mode on the alternate screen and build a cleared terminal.
    pub fn new() -> Result<Self> {
        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;
        // From here on the guard owns cleanup, including on the error paths below.
        let guard = RestoreGuard { restored: false };

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal now instead of at drop. Later calls do nothing.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.restore();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
