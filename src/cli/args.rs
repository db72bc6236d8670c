//! Command-line argument parsing for dragnum.
//!
//! Arguments are few enough to parse by hand. Unknown flags are ignored.

use std::path::PathBuf;

use crate::gesture::Axis;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the interactive demo (default)
    RunDemo(DemoOptions),
}

/// Options for the interactive demo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoOptions {
    /// Config file to load instead of the default location
    pub config_path: Option<PathBuf>,
    /// Force every control onto this axis
    pub axis: Option<Axis>,
    /// Write tracing output here; no file means no logging
    pub log_file: Option<PathBuf>,
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use dragnum::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["dragnum".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = DemoOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--config" | "-c" => options.config_path = args.next().map(PathBuf::from),
            "--log-file" => options.log_file = args.next().map(PathBuf::from),
            "--axis" => options.axis = args.next().as_deref().and_then(Axis::parse),
            _ => {}
        }
    }

    CliCommand::RunDemo(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        std::iter::once("dragnum".to_string())
            .chain(list.iter().map(|s| s.to_string()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse_args(args(&["--version"])), CliCommand::Version);
        assert_eq!(parse_args(args(&["-V"])), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse_args(args(&["-h"])), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(
            parse_args(args(&[])),
            CliCommand::RunDemo(DemoOptions::default())
        );
    }

    #[test]
    fn test_parse_demo_options() {
        let command = parse_args(args(&[
            "--config",
            "/tmp/c.json",
            "--axis",
            "y",
            "--log-file",
            "/tmp/d.log",
        ]));
        assert_eq!(
            command,
            CliCommand::RunDemo(DemoOptions {
                config_path: Some(PathBuf::from("/tmp/c.json")),
                axis: Some(Axis::Vertical),
                log_file: Some(PathBuf::from("/tmp/d.log")),
            })
        );
    }

    #[test]
    fn test_parse_invalid_axis_is_ignored() {
        let command = parse_args(args(&["--axis", "diagonal"]));
        assert_eq!(command, CliCommand::RunDemo(DemoOptions::default()));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse_args(args(&["--unknown"])),
            CliCommand::RunDemo(DemoOptions::default())
        );
    }

    #[test]
    fn test_flag_missing_value() {
        let command = parse_args(args(&["--config"]));
        assert_eq!(command, CliCommand::RunDemo(DemoOptions::default()));
    }
}
