use crate::nav::{MenuState, NavShell};

const BRAND: &str = "DevOrbit";

/// Render the navigation bar, or nothing on bare routes
pub fn render_nav(shell: &NavShell, menu: &MenuState) -> String {
    if !shell.shows_nav() {
        return String::new();
    }

    let active = shell.active_item();
    let ring: Vec<String> = shell
        .items()
        .iter()
        .map(|item| {
            if Some(item) == active {
                format!("[{}]", item.label)
            } else {
                item.label.to_string()
            }
        })
        .collect();

    let bar = format!(
        "{}  ( {} )  ◉ {}",
        BRAND,
        ring.join(" · "),
        shell.profile_href()
    );

    let mut lines = vec![bar.clone()];
    if menu.is_scrolled() {
        lines.push("─".repeat(bar.chars().count()));
    }

    if menu.is_open() {
        for item in shell.items() {
            let marker = if Some(item) == active { "›" } else { " " };
            lines.push(format!("  {} {:<12} {}", marker, item.label, item.href));
        }
    }

    lines.extend((0..shell.content_offset()).map(|_| String::new()));
    lines.join("\n")
}
