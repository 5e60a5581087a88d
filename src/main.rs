use clap::Parser;

mod cli;
mod commands;
mod domain;
mod extension;
mod services;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let profile = services::storage::load_profile(&cli.root)?;
    let ok = commands::handle_commands(&cli, &profile)?;
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
