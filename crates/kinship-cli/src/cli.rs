//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kinship CLI - Ask how members of a family tree are related.
#[derive(Debug, Parser)]
#[command(name = "kinship")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Family dataset (JSON); overrides the profile's dataset
    #[arg(short, long, global = true, env = "KINSHIP_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare phrases)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Describe how one member is related to another
    Resolve(ResolveArgs),

    /// Describe a member relative to a signed-in viewer
    Viewer(ViewerArgs),

    /// List every member with their relationship to one member
    Relatives(RelativesArgs),

    /// List a member's ancestors or descendants by generation
    Lineage(LineageArgs),

    /// Manage configuration profiles
    Profile(ProfileArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the resolve command.
#[derive(Debug, Parser)]
pub struct ResolveArgs {
    /// Member whose point of view is used (id or login identity)
    pub from: String,

    /// Member being described (id or login identity)
    pub to: String,
}

/// Arguments for the viewer command.
#[derive(Debug, Parser)]
pub struct ViewerArgs {
    /// Member being described (id or login identity)
    pub member: String,

    /// Viewer login identity; defaults to the profile's viewer
    #[arg(long = "as")]
    pub identity: Option<String>,
}

/// Arguments for the relatives command.
#[derive(Debug, Parser)]
pub struct RelativesArgs {
    /// Member whose point of view is used (id or login identity)
    pub member: String,
}

/// Arguments for the lineage command.
#[derive(Debug, Parser)]
pub struct LineageArgs {
    /// Member to trace from (id or login identity)
    pub member: String,

    /// Walk down to descendants instead of up to ancestors
    #[arg(long)]
    pub descendants: bool,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,
        /// Family dataset (JSON); the bundled sample when omitted
        #[arg(long)]
        file: Option<PathBuf>,
        /// Default viewer login identity
        #[arg(long)]
        viewer: Option<String>,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
