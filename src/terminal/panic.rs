//! Panic hook that puts the terminal back before the panic message prints.
//!
//! A panic while the dashboard owns the terminal would otherwise leave the
//! shell in raw mode on the alternate screen, with the panic message lost.
//! The hook restores the terminal first and then hands over to whatever
//! hook was installed before it (the `color-eyre` report in the binary).

use super::setup::emergency_restore;
use std::panic;

/// Install the restoring panic hook.
///
/// The previously installed hook is captured and chained, so call this
/// after `color_eyre::install()` and before entering TUI mode. Restoration
/// uses [`emergency_restore`], which ignores errors and is safe to run when
/// the terminal was never switched to raw mode.
///
/// # Example
///
/// ```no_run
/// use blockdash::terminal::{setup_panic_hook, TerminalManager};
///
/// color_eyre::install().ok();
/// setup_panic_hook();
/// let manager = TerminalManager::new()?;
/// # drop(manager);
/// # Ok::<(), color_eyre::Report>(())
/// ```
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_can_be_installed() {
        setup_panic_hook();
        let _ = panic::take_hook();
    }
}
