//! Command-line argument parsing.

/// What the binary should do.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Start the dashboard (default)
    Run,
}

/// Parse arguments, including the program name in position zero.
///
/// The first recognized flag wins. Unknown arguments are ignored.
///
/// ```
/// use blockdash::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["blockdash".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }
    CliCommand::Run
}
