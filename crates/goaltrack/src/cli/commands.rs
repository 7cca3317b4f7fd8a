//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::loaders::SlugMode;

/// Serve command arguments.
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Address to listen on (overrides `server.bind_addr`)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// How `/goal/:slug` interprets its slug (overrides `routes.slug_mode`)
    #[arg(long, value_enum)]
    pub slug_mode: Option<SlugModeArg>,
}

/// Offline loader commands.
#[derive(Debug, Subcommand)]
pub enum GoalsCommand {
    /// Print the home page data
    Home {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print the goal listing
    List {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print one goal
    Show {
        /// Goal id or title
        slug: String,

        /// Interpret the slug as an id or a title (defaults to `routes.slug_mode`)
        #[arg(long, value_enum)]
        by: Option<SlugModeArg>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Slug mode argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SlugModeArg {
    /// Slug is a goal id
    Id,
    /// Slug is a goal title
    Title,
}

impl From<SlugModeArg> for SlugMode {
    fn from(arg: SlugModeArg) -> Self {
        match arg {
            SlugModeArg::Id => Self::Id,
            SlugModeArg::Title => Self::Title,
        }
    }
}
