use clap::{Parser, Subcommand};
use clap_verbosity_flag::{OffLevel, Verbosity};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "authdesk",
    version,
    about = "Print manual auth dashboard settings and check local email templates"
)]
pub struct Cli {
    /// Config file (default: $AUTHDESK_CONFIG, ./authdesk.toml, then user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the configured email template directory
    #[arg(long, global = true, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: Verbosity<OffLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Print the full report (default)
    Report,

    /// Print only the desired auth settings and manual steps
    Settings,

    /// Check which email templates exist
    Templates {
        /// Exit with status 1 if any template is not found
        #[arg(long)]
        strict: bool,
    },

    /// Print the closing next-steps checklist
    Checklist,

    /// Print a template's HTML for pasting into the dashboard
    Show {
        /// Template file name, with or without .html
        name: String,
    },

    /// List the expected templates
    List,

    /// Write a sample authdesk.toml
    Init {
        /// Target directory or file (default: current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
