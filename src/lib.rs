//! # LevelUp Life
//!
//! Gamified self-improvement dashboard. This crate holds everything the
//! dashboard displays, independent of how it is rendered.
//!
//! ## Features
//!
//! - **Mock data**: A generator that fabricates streaks, XP, heatmaps, badges and leaderboards
//! - **Reproducible**: Optional RNG seed for stable demo snapshots
//! - **Portable**: No native-only dependencies without the `cli` feature, so the
//!   same generator runs in the browser
//!
//! ## Modules
//!
//! - [`dashboard`]: Snapshot types and the generator
//! - [`navigation`]: Static menu and profile configuration
//! - [`render`]: Plain-text rendering of a snapshot
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use levelup::{generate_dashboard_data, render_snapshot};
//!
//! let data = generate_dashboard_data();
//! println!("{}", render_snapshot(&data));
//! ```

pub mod config;
pub mod dashboard;
pub mod navigation;
pub mod render;

// Re-export top-level types for convenience
pub use dashboard::{
    generate_dashboard_data, AdaptiveFeedback, Badge, ChartPoint, DashboardData,
    DashboardGenerator, FeedbackCategory, HeatmapCell, LeaderboardEntry, Rarity, Stat, StatKind,
};

pub use navigation::{NavItem, ProfileCard, PROFILE, SIDEBAR_ITEMS};

pub use render::{render_leaderboard, render_snapshot};

pub use config::{Config, ConfigError, GeneratorConfig, LoggingConfig};
