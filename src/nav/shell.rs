use log::debug;

use crate::core::context::UserContext;

use super::items::{NavItem, NAV_ITEMS};

/// Routes that render without navigation chrome
const BARE_ROUTES: [&str; 2] = ["/", "/create-id"];

/// Scroll offset after which the bar gets its solid backdrop
const SCROLL_THRESHOLD: f64 = 20.0;

/// Navigation chrome decisions for one route and user
#[derive(Debug, Clone)]
pub struct NavShell {
    path: String,
    user: UserContext,
}

impl NavShell {
    pub fn new(path: impl Into<String>, user: UserContext) -> Self {
        Self {
            path: path.into(),
            user,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the navigation bar is rendered at all
    pub fn shows_nav(&self) -> bool {
        !BARE_ROUTES.contains(&self.path.as_str())
    }

    /// Rows of padding the page content needs below the bar
    pub fn content_offset(&self) -> usize {
        if self.shows_nav() {
            1
        } else {
            0
        }
    }

    /// The highlighted item, if the route belongs to one
    pub fn active_item(&self) -> Option<&'static NavItem> {
        NAV_ITEMS.iter().find(|item| item.matches(&self.path))
    }

    pub fn items(&self) -> &'static [NavItem] {
        &NAV_ITEMS
    }

    /// Where the avatar link points
    pub fn profile_href(&self) -> String {
        match self.user.dev_id() {
            Some(dev_id) => format!("/profile/{}", dev_id),
            None => "/create-id".to_string(),
        }
    }
}

/// Mobile menu and scroll state of the navigation bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    scrolled: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a menu link closes the menu
    pub fn navigate(&mut self, item: &NavItem) {
        debug!("Navigating to {}", item.href);
        self.open = false;
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }
}
