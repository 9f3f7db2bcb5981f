//! Command-line interface definitions for geometry-tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;

/// Command-line interface for the `geometry-tool` binary.
#[derive(Parser, Debug)]
#[command(
    name = "geometry-tool",
    about = "Inspect and edit persisted window geometry",
    version
)]
pub struct Cli {
    /// Logging controls shared across workspace binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// Which operation to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every window stored in a geometry file.
    Show(ShowArgs),
    /// Overwrite one window's geometry in a geometry file.
    Set(SetArgs),
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Geometry file to read.
    #[arg(long, short, value_name = "PATH")]
    pub file: PathBuf,
}

/// Arguments for the `set` subcommand.
#[derive(Args, Debug, Clone)]
pub struct SetArgs {
    /// Geometry file to update; created if it does not exist.
    #[arg(long, short, value_name = "PATH")]
    pub file: PathBuf,

    /// Window identifier.
    pub id: String,

    /// Horizontal position.
    #[arg(allow_negative_numbers = true)]
    pub x: i32,

    /// Vertical position.
    #[arg(allow_negative_numbers = true)]
    pub y: i32,

    /// Window width.
    pub width: i32,

    /// Window height.
    pub height: i32,

    /// Record the window as maximized.
    #[arg(long)]
    pub maximized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show() {
        let cli = Cli::try_parse_from(["geometry-tool", "show", "--file", "g.bin"]).unwrap();
        match cli.command {
            Commands::Show(args) => assert_eq!(args.file, PathBuf::from("g.bin")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_set_with_negative_position() {
        let cli = Cli::try_parse_from([
            "geometry-tool",
            "--debug",
            "set",
            "-f",
            "g.bin",
            "main",
            "-1920",
            "-4",
            "800",
            "600",
            "--maximized",
        ])
        .unwrap();
        assert!(cli.log.debug);
        match cli.command {
            Commands::Set(args) => {
                assert_eq!(args.id, "main");
                assert_eq!((args.x, args.y), (-1920, -4));
                assert_eq!((args.width, args.height), (800, 600));
                assert!(args.maximized);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn set_requires_full_rectangle() {
        assert!(Cli::try_parse_from(["geometry-tool", "set", "-f", "g.bin", "main", "1", "2"]).is_err());
    }
}
