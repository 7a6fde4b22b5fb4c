//! Interactive hyperlocal swarm session driven by line commands.

use anyhow::Result;
use log::{info, warn};
use std::io::Write;
use std::str::FromStr;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::core::error::DevOrbitError;
use crate::render::{render_developer_card, render_swarm};
use crate::swarm::{ParticleField, Scheduler, SwarmScreen};

pub const HELP: &str = "\
Commands:
  activate        Trigger swarm activation
  deactivate      Leave swarm mode (the countdown keeps its value)
  select <id>     Open a developer's details
  dismiss         Close the developer details
  status          Show the current screen
  skills          Show the most common nearby skills
  list            List nearby developers
  wait <seconds>  Let the countdown run
  help            Show this help
  quit            Leave the session";

/// One line of input
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Activate,
    Deactivate,
    Select(String),
    Dismiss,
    Status,
    Skills,
    List,
    Wait(Duration),
    Help,
    Quit,
}

impl FromStr for ReplCommand {
    type Err = DevOrbitError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next();

        let parsed = match (command.as_str(), arg) {
            ("activate", None) => ReplCommand::Activate,
            ("deactivate", None) => ReplCommand::Deactivate,
            ("select", Some(id)) => ReplCommand::Select(id.to_string()),
            ("select", None) => {
                return Err(DevOrbitError::CommandError(
                    "select needs a developer id".to_string(),
                ))
            }
            ("dismiss", None) => ReplCommand::Dismiss,
            ("status", None) => ReplCommand::Status,
            ("skills", None) => ReplCommand::Skills,
            ("list", None) => ReplCommand::List,
            ("wait", Some(secs)) => {
                let secs: f64 = secs.parse().map_err(|_| {
                    DevOrbitError::CommandError(format!("invalid number of seconds '{}'", secs))
                })?;
                let duration = Duration::try_from_secs_f64(secs).map_err(|_| {
                    DevOrbitError::CommandError(format!("invalid number of seconds '{}'", secs))
                })?;
                ReplCommand::Wait(duration)
            }
            ("help", None) => ReplCommand::Help,
            ("quit", None) | ("exit", None) => ReplCommand::Quit,
            _ => {
                return Err(DevOrbitError::CommandError(format!(
                    "unknown command '{}'",
                    line.trim()
                )))
            }
        };

        if parts.next().is_some() {
            return Err(DevOrbitError::CommandError(format!(
                "too many arguments in '{}'",
                line.trim()
            )));
        }

        Ok(parsed)
    }
}

/// Run a swarm session until `quit` or end of input, then unmount the screen
pub async fn run_swarm_session<S, R, W>(
    mut screen: SwarmScreen<S>,
    particles: &ParticleField,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: Scheduler,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}\n", render_swarm(&screen.snapshot().await, particles))?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ReplCommand>() {
            Ok(command) => command,
            Err(e) => {
                warn!("{}", e);
                writeln!(out, "{} (type `help` for commands)", e)?;
                continue;
            }
        };

        match command {
            ReplCommand::Activate => {
                screen.activate().await;
                writeln!(out, "{}", render_swarm(&screen.snapshot().await, particles))?;
            }
            ReplCommand::Deactivate => {
                screen.deactivate().await;
                writeln!(out, "{}", render_swarm(&screen.snapshot().await, particles))?;
            }
            ReplCommand::Select(id) => {
                if screen.select(&id).await {
                    writeln!(out, "{}", render_swarm(&screen.snapshot().await, particles))?;
                } else {
                    writeln!(out, "No developer with id {} nearby", id)?;
                }
            }
            ReplCommand::Dismiss => {
                screen.dismiss().await;
                writeln!(out, "{}", render_swarm(&screen.snapshot().await, particles))?;
            }
            ReplCommand::Status => {
                let snapshot = screen.snapshot().await;
                writeln!(out, "{}", render_swarm(&snapshot, particles))?;
                let state = if snapshot.active { "active" } else { "inactive" };
                match snapshot.activated_at {
                    Some(at) => writeln!(
                        out,
                        "Swarm {}, {} remaining, last activated {}",
                        state,
                        snapshot.remaining,
                        at.format("%H:%M:%S UTC")
                    )?,
                    None => writeln!(out, "Swarm {}, {} remaining", state, snapshot.remaining)?,
                }
            }
            ReplCommand::Skills => {
                let snapshot = screen.snapshot().await;
                writeln!(out, "{}", snapshot.top_skills.join(", "))?;
            }
            ReplCommand::List => {
                for dev in screen.snapshot().await.developers {
                    writeln!(out, "{}\n", render_developer_card(&dev))?;
                }
            }
            ReplCommand::Wait(duration) => tokio::time::sleep(duration).await,
            ReplCommand::Help => writeln!(out, "{}", HELP)?,
            ReplCommand::Quit => break,
        }
        out.flush()?;
    }

    screen.unmount();
    info!("Swarm session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("activate".parse::<ReplCommand>().unwrap(), ReplCommand::Activate);
        assert_eq!("  Select 3 ".parse::<ReplCommand>().unwrap(), ReplCommand::Select("3".into()));
        assert_eq!(
            "wait 1.5".parse::<ReplCommand>().unwrap(),
            ReplCommand::Wait(Duration::from_millis(1500))
        );
        assert_eq!("exit".parse::<ReplCommand>().unwrap(), ReplCommand::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!("select".parse::<ReplCommand>().is_err());
        assert!("wait -1".parse::<ReplCommand>().is_err());
        assert!("wait soon".parse::<ReplCommand>().is_err());
        assert!("wait NaN".parse::<ReplCommand>().is_err());
        assert!("wait 1e300".parse::<ReplCommand>().is_err());
        assert!("activate now".parse::<ReplCommand>().is_err());

        let err = "launch".parse::<ReplCommand>().unwrap_err();
        assert_eq!(err.to_string(), "Command failed: unknown command 'launch'");
    }
}
