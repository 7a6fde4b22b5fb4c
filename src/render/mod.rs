//! Plain-text views for the terminal client.

mod nav;
mod orbit_match;
mod swarm;

pub use nav::render_nav;
pub use orbit_match::{render_orbit_match, FeatureCard, FEATURES};
pub use swarm::{render_detail, render_developer_card, render_swarm};
