//! OrbitMatch landing page.

/// A feature card on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub blurb: &'static str,
}

/// Badge shown above the page title
pub const TAGLINE: &str = "AI-Powered Connections";

pub const FEATURES: [FeatureCard; 3] = [
    FeatureCard {
        title: "Skill Synergy",
        blurb: "Match with developers whose skills complement yours for potential collaborations",
    },
    FeatureCard {
        title: "Interest Alignment",
        blurb: "Connect with people attending similar events and hackathons",
    },
    FeatureCard {
        title: "Community Fit",
        blurb: "Discover communities where you'll thrive based on your profile",
    },
];

/// Render the OrbitMatch landing page
pub fn render_orbit_match() -> String {
    let mut lines = vec![
        format!("✦ {}", TAGLINE),
        "OrbitMatch".to_string(),
        "Find developers who complement your skills, share your interests, and align with your journey"
            .to_string(),
        String::new(),
    ];

    for card in FEATURES {
        lines.push(format!("• {}", card.title));
        lines.push(format!("  {}", card.blurb));
    }

    lines.push(String::new());
    lines.push(
        "OrbitMatch uses AI to analyze your tech journey and suggest meaningful connections"
            .to_string(),
    );
    lines.push("[ ✦ Start Matching ]".to_string());
    lines.join("\n")
}
