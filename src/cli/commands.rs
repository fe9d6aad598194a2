//! CLI subcommand definitions

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::project::LayoutMode;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List registered projects (default)
    List,
    /// Register a Git repository
    Add {
        /// Path to the repository
        path: PathBuf,
        /// Display name (defaults to the directory name)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Change a project's name or path
    Edit {
        /// Project name or id
        project: String,
        /// New display name
        #[arg(short, long)]
        name: Option<String>,
        /// New repository path
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Unregister a project
    Remove {
        /// Project name or id
        project: String,
    },
    /// Toggle a project's pinned flag
    Pin {
        /// Project name or id
        project: String,
    },
    /// Set the layout mode, or toggle it when omitted
    Layout {
        #[arg(value_enum)]
        mode: Option<LayoutArg>,
    },
    /// Show commit logs for a date range
    Logs {
        /// Projects to query (all valid projects when omitted)
        projects: Vec<String>,
        /// Start date (YYYYMMDD or YYYY-MM-DD, defaults to the end date)
        #[arg(short, long)]
        since: Option<String>,
        /// End date (YYYYMMDD or YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        until: Option<String>,
    },
    /// Run `git pull` across projects
    Pull {
        /// Projects to pull (all valid projects when omitted)
        projects: Vec<String>,
    },
    /// Open a terminal at a project's path
    Open {
        /// Project name or id
        project: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum LayoutArg {
    Horizontal,
    Vertical,
}

impl From<LayoutArg> for LayoutMode {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Horizontal => LayoutMode::Horizontal,
            LayoutArg::Vertical => LayoutMode::Vertical,
        }
    }
}
