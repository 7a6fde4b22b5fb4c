//! Hyperlocal swarm: nearby-developer discovery with a timed session.

pub mod particles;
pub mod screen;
pub mod session;
pub mod skills;
pub mod ticker;

pub use particles::*;
pub use screen::*;
pub use session::*;
pub use skills::top_skills;
pub use ticker::*;
