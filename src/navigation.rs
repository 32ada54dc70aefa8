//! Navigation and profile configuration
//!
//! Static arrays rendered by the sidebar and mobile navigation. Nothing here
//! is computed from the snapshot.

use serde::Serialize;

/// Brand name shown in the navigation chrome
pub const APP_NAME: &str = "LevelUp Life";

/// Single-letter brand mark
pub const APP_MARK: &str = "L";

/// A navigation menu entry
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

impl NavItem {
    /// Whether this item points at the given location path
    pub fn is_active(&self, path: &str) -> bool {
        let path = path.trim_end_matches('/');
        let href = self.href.trim_end_matches('/');
        path == href
    }
}

/// Full desktop sidebar menu
pub const SIDEBAR_ITEMS: &[NavItem] = &[
    NavItem { name: "Dashboard", href: "/", icon: "📊" },
    NavItem { name: "Goals", href: "/goals", icon: "🎯" },
    NavItem { name: "Analytics", href: "/analytics", icon: "📈" },
    NavItem { name: "Challenges", href: "/challenges", icon: "⚡" },
    NavItem { name: "Community", href: "/community", icon: "👥" },
    NavItem { name: "Settings", href: "/settings", icon: "⚙️" },
];

/// Mobile menu and bottom tab bar (subset of the sidebar)
pub fn mobile_items() -> &'static [NavItem] {
    &SIDEBAR_ITEMS[..4]
}

/// Find the menu entry for a path
pub fn find_item(path: &str) -> Option<&'static NavItem> {
    SIDEBAR_ITEMS.iter().find(|item| item.is_active(path))
}

/// Profile card shown at the bottom of the navigation
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ProfileCard {
    pub initial: &'static str,
    pub title: &'static str,
    pub level: u32,
    pub xp: u32,
    /// Fraction toward the next level
    pub progress: f64,
}

impl ProfileCard {
    pub fn xp_label(&self) -> String {
        format!("{} XP", crate::dashboard::group_thousands(self.xp))
    }

    pub fn next_level_label(&self) -> String {
        format!("Progress to Level {}", self.level + 1)
    }

    pub fn progress_percent(&self) -> u32 {
        (self.progress.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

pub const PROFILE: ProfileCard = ProfileCard {
    initial: "U",
    title: "Level 12 Achiever",
    level: 12,
    xp: 2847,
    progress: 0.73,
};

/// Labels of the call-to-action buttons under the dashboard grid
pub const QUICK_ACTIONS: &[&str] = &["Add New Goal", "Start Focus Session", "View Analytics"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_items_prefix_of_sidebar() {
        let mobile = mobile_items();
        assert_eq!(mobile.len(), 4);
        assert_eq!(mobile, &SIDEBAR_ITEMS[..4]);
        assert_eq!(mobile[3].name, "Challenges");
    }

    #[test]
    fn test_active_matching() {
        assert_eq!(find_item("/").map(|i| i.name), Some("Dashboard"));
        assert_eq!(find_item("/goals/").map(|i| i.name), Some("Goals"));
        assert!(find_item("/unknown").is_none());

        let dashboard = &SIDEBAR_ITEMS[0];
        assert!(dashboard.is_active(""));
        assert!(!dashboard.is_active("/goals"));
    }

    #[test]
    fn test_profile_labels() {
        assert_eq!(PROFILE.xp_label(), "2,847 XP");
        assert_eq!(PROFILE.next_level_label(), "Progress to Level 13");
        assert_eq!(PROFILE.progress_percent(), 73);
    }
}
