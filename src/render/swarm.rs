use crate::roster::{Developer, Status};
use crate::swarm::{ParticleField, SwarmSnapshot};

const TITLE: &str = "Hyperlocal Swarm Mode";

const SWARM_ACTIONS: [&str; 3] = ["Join Swarm Chat", "Form Instant Team", "Share with All"];

const BOTTOM_ACTIONS: [&str; 5] = [
    "Start Micro Meetup",
    "Ping to Co-work",
    "Share My Highlights",
    "Find Co-organizer",
    "Stealth Mode",
];

const DETAIL_ACTIONS: [&str; 3] = ["Connect", "Share", "View"];

/// Skills shown on a developer card
const CARD_SKILLS: usize = 3;

const STARFIELD_WIDTH: usize = 48;
const STARFIELD_HEIGHT: usize = 6;

fn status_dot(status: Status) -> &'static str {
    match status {
        Status::Online => "●",
        Status::Busy => "◐",
        Status::Away => "○",
    }
}

/// Render the swarm screen for a snapshot
pub fn render_swarm(snapshot: &SwarmSnapshot, particles: &ParticleField) -> String {
    let mut out = if snapshot.active {
        render_active(snapshot)
    } else {
        render_idle(snapshot, particles)
    };

    if let Some(dev) = &snapshot.selected {
        out.push_str("\n\n");
        out.push_str(&render_detail(dev));
    }

    out
}

fn render_idle(snapshot: &SwarmSnapshot, particles: &ParticleField) -> String {
    let mut lines = particles.to_grid(STARFIELD_WIDTH, STARFIELD_HEIGHT);
    lines.push(String::new());
    lines.push(TITLE.to_string());
    lines.push("Discover & connect with developers in your vicinity".to_string());
    lines.push(String::new());
    lines.push("  ⚡ Trigger Swarm Activation  (type `activate`)".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Your location is fuzzed to ~200m. Active for {} minutes.",
        snapshot.session_seconds / 60
    ));
    lines.join("\n")
}

fn render_active(snapshot: &SwarmSnapshot) -> String {
    let count = snapshot.developers.len();
    let mut lines = vec![
        format!("{}  |  {} developers detected", TITLE, count),
        format!("[ Deactivate ({}) ]", snapshot.remaining),
        String::new(),
        "( Hyperlocal Swarm Activated )".to_string(),
        format!("{} Developers Nearby", count),
    ];

    if !snapshot.top_skills.is_empty() {
        lines.push(
            snapshot
                .top_skills
                .iter()
                .map(|s| format!("‹{}›", s))
                .collect::<Vec<_>>()
                .join(" "),
        );
    }
    lines.push(SWARM_ACTIONS.map(|a| format!("[{}]", a)).join(" "));
    lines.push(String::new());

    lines.push("Developers Nearby".to_string());
    lines.push(format!("{} dev-swarm detected", count));
    for dev in &snapshot.developers {
        lines.push(String::new());
        lines.push(render_developer_card(dev));
    }

    lines.push(String::new());
    lines.push(BOTTOM_ACTIONS.map(|a| format!("[{}]", a)).join(" "));
    lines.join("\n")
}

/// One entry of the nearby developer list
pub fn render_developer_card(dev: &Developer) -> String {
    let skills: Vec<&str> = dev
        .skills
        .iter()
        .take(CARD_SKILLS)
        .map(String::as_str)
        .collect();

    let mut lines = vec![
        format!(
            "({}){} {}  {}km  #{}",
            dev.initial(),
            status_dot(dev.status),
            dev.name,
            dev.distance_km,
            dev.id
        ),
        format!("     @{} · {}", dev.handle, dev.status),
        format!("     {}", skills.join(", ")),
    ];

    if dev.open_for_collab {
        lines.push("     Open for collab".to_string());
    }

    lines.join("\n")
}

/// The detail modal for a focused developer
pub fn render_detail(dev: &Developer) -> String {
    let lines = [
        "┌─ Developer ──────────────────────────".to_string(),
        format!("│ ({})  {}", dev.initial(), dev.name),
        format!("│ @{}", dev.handle),
        format!("│ {}km away", dev.distance_km),
        "│".to_string(),
        "│ Top Skills".to_string(),
        format!("│   {}", dev.skills.join(", ")),
        "│ DevOrbit Badges".to_string(),
        format!("│   {}", dev.badges.join(" ")),
        "│".to_string(),
        format!(
            "│ Open for collab: {}",
            if dev.open_for_collab { "Yes" } else { "No" }
        ),
        format!("│ {}", DETAIL_ACTIONS.map(|a| format!("[{}]", a)).join(" ")),
        "└─ (type `dismiss` to close) ─────────".to_string(),
    ];
    lines.join("\n")
}
