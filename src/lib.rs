pub mod cli;
pub mod core;
pub mod nav;
pub mod render;
pub mod roster;
pub mod swarm;
