/// A top-level destination in the navigation ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    /// Gradient accent, as `from-to` orbit colour tokens
    pub accent: &'static str,
}

/// Navigation items in display order
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        id: "orbit-match",
        label: "OrbitMatch",
        href: "/orbit-match",
        accent: "orbit-2:orbit-3",
    },
    NavItem {
        id: "hackathons",
        label: "Hackathons",
        href: "/hackathons",
        accent: "orbit-3:orbit-4",
    },
    NavItem {
        id: "events",
        label: "Events",
        href: "/events",
        accent: "orbit-4:orbit-1",
    },
    NavItem {
        id: "communities",
        label: "Communities",
        href: "/communities",
        accent: "orbit-1:orbit-3",
    },
    NavItem {
        id: "hyperlocal",
        label: "Hyperlocal",
        href: "/hyperlocal",
        accent: "orbit-2:orbit-4",
    },
];

impl NavItem {
    /// Whether this item is highlighted for `path`
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(self.href)
    }
}
