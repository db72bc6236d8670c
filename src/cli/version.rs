//! Version and usage output.

/// The current version of dragnum, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: dragnum [OPTIONS]

Drag the arrows with the left mouse button to adjust the numbers.

Options:
  -c, --config <PATH>    Load controls from this JSON file
      --axis <x|y>       Put every control on the given axis
      --log-file <PATH>  Write trace logs to PATH (RUST_LOG overrides the level)
  -h, --help             Print this help
  -V, --version          Print version";

/// Handle the --version command.
pub fn handle_version_command() -> ! {
    println!("dragnum {}", VERSION);
    std::process::exit(0)
}

/// Handle the --help command.
pub fn handle_help_command() -> ! {
    println!("{}", USAGE);
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_usage_mentions_every_flag() {
        for flag in ["--config", "--axis", "--log-file", "--help", "--version"] {
            assert!(USAGE.contains(flag), "usage is missing {}", flag);
        }
    }
}
