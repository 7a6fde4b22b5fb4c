//! Command line front end.

pub mod repl;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tokio::io::BufReader;

use crate::core::config::Config;
use crate::core::error::DevOrbitError;
use crate::nav::{MenuState, NavShell, NAV_ITEMS};
use crate::render::{render_developer_card, render_nav, render_orbit_match};
use crate::roster::{load_roster, source_from_config};
use crate::swarm::{top_skills, ParticleField, SwarmScreen, SwarmSettings, TokioScheduler};

#[derive(Parser, Debug)]
#[clap(author, version, about = "DevOrbit - discover developers in your orbit")]
pub struct Cli {
    /// Path to config file
    #[clap(short, long)]
    pub config: Option<String>,

    /// Debug mode
    #[clap(short, long)]
    pub debug: bool,

    /// JSON file with nearby developers (overrides the config)
    #[clap(long)]
    pub data: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the hyperlocal swarm screen and read commands from stdin
    Swarm,

    /// Print the most common skills among nearby developers
    Skills {
        /// Number of skills to show
        #[clap(long)]
        limit: Option<usize>,
    },

    /// List nearby developers
    Devs,

    /// Print the navigation bar for a route
    Nav {
        /// Current route
        #[clap(long, default_value = "/hyperlocal")]
        path: String,

        /// Show the mobile menu expanded
        #[clap(long)]
        menu: bool,

        /// Page scroll offset in pixels
        #[clap(long, default_value_t = 0.0)]
        scroll: f64,

        /// Follow a menu link by item id (e.g. `events`), closing the menu
        #[clap(long)]
        go: Option<String>,
    },

    /// Show the OrbitMatch page
    Match,
}

impl Cli {
    /// Load configuration with command line overrides applied
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref().map(Path::new))?;
        if let Some(data) = &self.data {
            config.data.path = Some(data.clone());
        }
        Ok(config)
    }
}

/// Execute a parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Swarm => {
            let developers = load_roster(source_from_config(&config.data).as_ref()).await?;
            let particles =
                ParticleField::generate(config.swarm.particle_count, &mut rand::rng());
            let screen = SwarmScreen::mount(
                developers,
                SwarmSettings::from(&config.swarm),
                TokioScheduler,
                Duration::from_millis(config.swarm.tick_interval_ms),
            );

            let stdin = BufReader::new(tokio::io::stdin());
            repl::run_swarm_session(screen, &particles, stdin, &mut out)
                .await
                .context("Swarm session failed")?;
        }
        Commands::Skills { limit } => {
            let developers = load_roster(source_from_config(&config.data).as_ref()).await?;
            let limit = limit.unwrap_or(config.swarm.top_skill_limit);
            for skill in top_skills(&developers, limit) {
                writeln!(out, "{}", skill)?;
            }
        }
        Commands::Devs => {
            let developers = load_roster(source_from_config(&config.data).as_ref()).await?;
            for dev in &developers {
                writeln!(out, "{}\n", render_developer_card(dev))?;
            }
        }
        Commands::Nav {
            path,
            menu,
            scroll,
            go,
        } => {
            let mut shell = NavShell::new(path, config.user_context());
            let mut state = MenuState::default();
            if menu {
                state.toggle();
            }
            state.on_scroll(scroll);

            if let Some(id) = go {
                let item = NAV_ITEMS.iter().find(|item| item.id == id).ok_or_else(|| {
                    DevOrbitError::CommandError(format!("unknown navigation item '{}'", id))
                })?;
                state.navigate(item);
                shell = NavShell::new(item.href, config.user_context());
            }

            if shell.shows_nav() {
                writeln!(out, "{}", render_nav(&shell, &state))?;
            } else {
                info!("Navigation hidden on {}", shell.path());
                writeln!(out, "(navigation hidden on {})", shell.path())?;
            }
        }
        Commands::Match => {
            writeln!(out, "{}", render_orbit_match())?;
        }
    }

    Ok(())
}
