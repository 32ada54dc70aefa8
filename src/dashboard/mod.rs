//! LevelUp Dashboard Snapshot
//!
//! This module provides the data behind every dashboard panel:
//!
//! - **types**: The snapshot shape (DashboardData, Stat, Badge, ...)
//! - **samples**: Fixed pools of quotes, tips, badges and rival names
//! - **generator**: Builds a fresh snapshot from random draws
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use levelup::dashboard::{generate_dashboard_data, DashboardGenerator};
//!
//! // One-off snapshot with fresh randomness
//! let data = generate_dashboard_data();
//! assert!((0.0..=1.0).contains(&data.daily_progress));
//!
//! // Reproducible snapshot for a fixed date
//! let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let a = DashboardGenerator::default().with_seed(7).generate_on(day);
//! let b = DashboardGenerator::default().with_seed(7).generate_on(day);
//! assert_eq!(a, b);
//! ```

pub mod generator;
pub mod samples;
pub mod types;

pub use generator::{generate_dashboard_data, generate_with_rng, DashboardGenerator};
pub use types::{
    group_thousands, level_for_xp, AdaptiveFeedback, Badge, ChartPoint, DashboardData,
    FeedbackCategory, HeatmapCell, LeaderboardEntry, Rarity, Stat, StatKind, MAX_INTENSITY,
    XP_PER_LEVEL,
};
