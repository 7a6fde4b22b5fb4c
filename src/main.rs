use anyhow::Result;
use clap::Parser;
use devorbit::cli::{self, Cli, Commands};
use log::{info, LevelFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logger
    let log_level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .init();

    if matches!(cli.command, Commands::Swarm) {
        print_banner();
    }

    info!("Starting DevOrbit");

    cli::run(cli).await?;

    Ok(())
}

fn print_banner() {
    println!("\n==============================================");
    println!("  DevOrbit - Hyperlocal Swarm v0.1.0");
    println!("==============================================");
    println!("  type `help` for commands, `quit` to leave");
    println!("==============================================\n");
}
