//! UI Components
//!
//! Presentational Leptos components for the dashboard.

pub mod adaptive_feedback;
pub mod badge_wall;
pub mod daily_goal_progress;
pub mod dashboard_header;
pub mod growth_chart;
pub mod heatmap;
pub mod leaderboard;
pub mod loading;
pub mod mobile_nav;
pub mod motion;
pub mod profile_card;
pub mod sidebar;
pub mod stats_cards;

pub use adaptive_feedback::AdaptiveFeedback;
pub use badge_wall::BadgeWall;
pub use daily_goal_progress::DailyGoalProgress;
pub use dashboard_header::DashboardHeader;
pub use growth_chart::GrowthChart;
pub use heatmap::Heatmap;
pub use leaderboard::Leaderboard;
pub use loading::Loading;
pub use mobile_nav::MobileNav;
pub use motion::{Offset, Reveal};
pub use sidebar::Sidebar;
pub use stats_cards::StatsCards;
