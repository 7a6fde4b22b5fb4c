//! Built-in sample of nearby developers.

use super::models::{Developer, Status};

#[allow(clippy::too_many_arguments)]
fn developer(
    id: &str,
    name: &str,
    handle: &str,
    distance_km: f64,
    skills: &[&str],
    status: Status,
    badges: &[&str],
    open_for_collab: bool,
) -> Developer {
    Developer {
        id: id.into(),
        name: name.into(),
        handle: handle.into(),
        distance_km,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        status,
        badges: badges.iter().map(|b| b.to_string()).collect(),
        open_for_collab,
    }
}

/// The developers shown by the hyperlocal swarm when no data file is configured
pub fn nearby_developers() -> Vec<Developer> {
    vec![
        developer(
            "1",
            "Alex Chen",
            "alexchen",
            0.8,
            &["React", "TypeScript", "Node.js"],
            Status::Online,
            &["🏆", "⭐", "🚀", "💎"],
            true,
        ),
        developer(
            "2",
            "Sarah Park",
            "sarahp",
            1.2,
            &["Python", "AI/ML", "TensorFlow"],
            Status::Online,
            &["🔥", "☕", "⚡", "☀️"],
            false,
        ),
        developer(
            "3",
            "Marcus Johnson",
            "marcusj",
            2.1,
            &["Next.js", "Security", "React"],
            Status::Busy,
            &["💻", "🎯", "🌟"],
            true,
        ),
    ]
}
