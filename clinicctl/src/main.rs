use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod prompt;

use commands::menu::{self, MenuArgs};

#[derive(Parser)]
#[command(name = "clinicctl", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive clinic menu (default)
    Menu(MenuArgs),
    /// Print version and exit
    Version,
}

fn init_tracing() {
    // stdout belongs to the menu; diagnostics go to stderr
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd.unwrap_or_else(|| Commands::Menu(MenuArgs::default())) {
        Commands::Menu(args) => menu::run(args)?,
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
    }
    Ok(())
}
