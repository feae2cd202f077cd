//! streamprefs CLI - inspect and edit per-host stream settings profiles
//!
//! Drives the same profile store a streaming client uses, backed by a JSON
//! blob store and a JSON host list on disk.

mod cli;
mod commands;
mod config;
mod error;


use clap::Parser;

use crate::cli::{Cli, Commands, HostsCommands};
use crate::commands::completions::run_completions;
use crate::commands::hosts::{run_hosts_add, run_hosts_list, run_hosts_remove};
use crate::commands::profile::{run_reset, run_select, run_set, run_show};
use crate::config::CliPaths;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let default_directive = "streamprefs=info"
        .parse::<tracing_subscriber::filter::Directive>()
        .map_err(|error| CliError::Config(format!("invalid log directive: {error}")))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_directive),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Commands::Completions { shell, output } = &cli.command {
        return run_completions(*shell, output.as_deref());
    }

    let paths = CliPaths::resolve(cli.store, cli.hosts_file)?;
    match cli.command {
        Commands::Hosts { command } => match command {
            HostsCommands::List { json } => run_hosts_list(&paths, json)?,
            HostsCommands::Add { id, name } => run_hosts_add(&paths, &id, &name)?,
            HostsCommands::Remove { id } => run_hosts_remove(&paths, &id)?,
        },
        Commands::Select { host_id } => run_select(&paths, &host_id)?,
        Commands::Show { json } => run_show(&paths, json)?,
        Commands::Set { field, value } => run_set(&paths, field, &value)?,
        Commands::Reset => run_reset(&paths)?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
