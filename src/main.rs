use clap::Parser;

mod build;
mod cli;
mod commands;
mod config;
mod error;
mod freeze;
mod process;
mod project;
mod session;
mod tmux;

use cli::{Args, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("REVIVE_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Freeze { session } => commands::freeze_command(session),
        Commands::Build { project } => commands::build_command(&project),
        Commands::New { project } => commands::new_command(&project),
        Commands::List {
            porcelain,
            json,
            number,
        } => commands::list_command(porcelain, json, number),
        Commands::Delete { project } => commands::delete_command(&project),
        Commands::Edit { project } => commands::edit_command(&project),
    }
}
