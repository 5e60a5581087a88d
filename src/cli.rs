use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "vsxcheck",
    version,
    about = "Release-readiness checks for a VS Code theme/snippet extension"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Extension working tree root"
    )]
    pub root: PathBuf,
    #[arg(
        long,
        global = true,
        help = "Editor CLI used to list installed extensions (overrides profile)"
    )]
    pub editor_bin: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Packaged artifact path relative to the root (overrides profile and manifest-derived name)"
    )]
    pub artifact: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Check,
    Installation,
    Themes,
    Snippets,
    Manifest,
    Size,
    History {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}
