//! CLI module for dragnum.
//!
//! Flags that print and exit are handled here before the terminal is
//! touched; everything else becomes [`DemoOptions`] for the demo.

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, DemoOptions};
pub use version::{handle_help_command, handle_version_command, USAGE, VERSION};

/// Resolve a parsed command.
///
/// Returns the demo options to run with. `Version` and `Help` print and
/// exit the process.
pub fn run_cli_command(command: CliCommand) -> DemoOptions {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunDemo(options) => options,
    }
}
