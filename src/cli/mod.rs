//! Command-line interface.
//!
//! Flags are handled before the terminal is touched:
//!
//! ```ignore
//! use blockdash::cli::{parse_args, run_cli_command};
//!
//! if run_cli_command(parse_args(std::env::args())) {
//!     return Ok(());
//! }
//! // continue to the dashboard
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{usage, version_line, VERSION};

/// Print output for informational commands.
///
/// Returns `true` when the command was handled and the process should exit,
/// `false` for [`CliCommand::Run`].
pub fn run_cli_command(command: CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            true
        }
        CliCommand::Help => {
            println!("{}", usage());
            true
        }
        CliCommand::Run => false,
    }
}
