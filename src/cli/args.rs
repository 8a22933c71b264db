use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "revive")]
#[command(about = "Freeze tmux sessions into YAML projects and build them back")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Save the layout of a running tmux session as a project")]
    Freeze {
        #[arg(help = "Session to freeze (defaults to the current or only session)")]
        session: Option<String>,
    },
    #[command(alias = "run", about = "Recreate a tmux session from a project")]
    Build {
        #[arg(help = "Name of the project")]
        project: String,
    },
    #[command(about = "Create a new project from a template")]
    New {
        #[arg(help = "Name of the project")]
        project: String,
    },
    #[command(about = "List saved projects")]
    List {
        #[arg(long, help = "Machine-readable output (tab-separated values)")]
        porcelain: bool,

        #[arg(long, help = "JSON output")]
        json: bool,

        #[arg(short = 'n', long = "number", help = "Show at most this many projects")]
        number: Option<usize>,
    },
    #[command(about = "Delete a saved project")]
    Delete {
        #[arg(help = "Name of the project")]
        project: String,
    },
    #[command(about = "Open a project in $EDITOR")]
    Edit {
        #[arg(help = "Name of the project")]
        project: String,
    },
}
