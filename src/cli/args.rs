//! CLI argument definitions
//!
//! Global options shared by every subcommand.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "gitmate")]
#[command(
    about = "Register local Git repositories and aggregate their commit logs",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (show processing details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_overrides_always() {
        let cli = Cli::try_parse_from(["gitmate", "--color", "always", "--no-color"]).unwrap();
        assert!(!cli.use_color());
    }

    #[test]
    fn color_always_enables_color() {
        let cli = Cli::try_parse_from(["gitmate", "--color", "always"]).unwrap();
        assert!(cli.use_color());
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::try_parse_from(["gitmate", "list", "--json", "--debug"]).unwrap();
        assert!(cli.json);
        assert!(cli.debug);
    }
}
