//! Navigation shell shared by every DevOrbit page.

mod items;
mod shell;

pub use items::{NavItem, NAV_ITEMS};
pub use shell::{MenuState, NavShell};
