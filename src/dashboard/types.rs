//! Core data types for the LevelUp dashboard snapshot
//!
//! This module defines the shape handed from the generator to every display
//! component:
//! - `DashboardData`: the aggregate snapshot for one page load
//! - `Stat`, `ChartPoint`, `HeatmapCell`: numeric panels
//! - `Badge`, `AdaptiveFeedback`, `LeaderboardEntry`: gamification panels

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Highest heatmap intensity level (inclusive)
pub const MAX_INTENSITY: u8 = 4;

/// XP needed to advance one level
pub const XP_PER_LEVEL: u32 = 250;

/// Complete snapshot of everything the dashboard displays
///
/// Created once per page mount and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    /// Quote shown in the page header
    pub motivational_quote: String,
    /// Short coaching tip shown under the quote
    pub ai_tip: String,
    /// Fraction of today's goal completed, in [0, 1]
    pub daily_progress: f64,
    /// Headline stats, one per `StatKind`
    pub stats: Vec<Stat>,
    /// Growth series, oldest first
    pub chart_data: Vec<ChartPoint>,
    /// Activity grid, oldest first, a whole number of weeks
    pub heatmap_data: Vec<HeatmapCell>,
    /// Achievement catalogue with earned state
    pub badges: Vec<Badge>,
    /// Message chosen from today's progress
    pub adaptive_feedback: AdaptiveFeedback,
    /// Ranked users, highest score first
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl DashboardData {
    /// Look up a stat by kind
    pub fn stat(&self, kind: StatKind) -> Option<&Stat> {
        self.stats.iter().find(|s| s.kind == kind)
    }

    /// Total XP according to the stats panel
    pub fn total_xp(&self) -> u32 {
        self.stat(StatKind::TotalXp).map(|s| s.value).unwrap_or(0)
    }

    /// Current level derived from total XP
    pub fn level(&self) -> u32 {
        level_for_xp(self.total_xp())
    }

    /// Fraction of the way from the current level to the next
    pub fn level_progress(&self) -> f64 {
        let xp = self.total_xp();
        (xp % XP_PER_LEVEL) as f64 / XP_PER_LEVEL as f64
    }

    /// Number of badges already earned
    pub fn earned_badge_count(&self) -> usize {
        self.badges.iter().filter(|b| b.earned).count()
    }

    /// The leaderboard row belonging to the viewer
    pub fn current_user_entry(&self) -> Option<&LeaderboardEntry> {
        self.leaderboard.iter().find(|e| e.is_current_user)
    }

    /// Heatmap split into 7-day columns
    pub fn heatmap_weeks(&self) -> impl Iterator<Item = &[HeatmapCell]> {
        self.heatmap_data.chunks(7)
    }
}

/// Level reached with the given amount of XP (levels start at 1)
pub fn level_for_xp(xp: u32) -> u32 {
    xp / XP_PER_LEVEL + 1
}

/// Which headline number a stat card shows
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Streak,
    TotalXp,
    Level,
    GoalsCompleted,
}

impl StatKind {
    /// All kinds in display order
    pub const ALL: [StatKind; 4] = [
        StatKind::Streak,
        StatKind::TotalXp,
        StatKind::Level,
        StatKind::GoalsCompleted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Streak => "Current Streak",
            StatKind::TotalXp => "Total XP",
            StatKind::Level => "Level",
            StatKind::GoalsCompleted => "Goals Completed",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StatKind::Streak => "🔥",
            StatKind::TotalXp => "⚡",
            StatKind::Level => "🏆",
            StatKind::GoalsCompleted => "🎯",
        }
    }

    pub fn unit(&self) -> Option<&'static str> {
        match self {
            StatKind::Streak => Some("days"),
            StatKind::TotalXp => Some("XP"),
            StatKind::Level | StatKind::GoalsCompleted => None,
        }
    }
}

/// A labeled headline metric
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub kind: StatKind,
    pub label: String,
    pub value: u32,
    #[serde(default)]
    pub unit: Option<String>,
    pub icon: String,
    /// Week-over-week change in percent
    pub change: f64,
}

impl Stat {
    /// Build a stat with the kind's default label, icon and unit
    pub fn new(kind: StatKind, value: u32, change: f64) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            value,
            unit: kind.unit().map(str::to_string),
            icon: kind.icon().to_string(),
            change,
        }
    }

    /// Value with thousands separators, e.g. `2,847`
    pub fn formatted_value(&self) -> String {
        group_thousands(self.value)
    }
}

/// Format an integer with comma thousands separators
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One day on the growth chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub date: NaiveDate,
    /// Cumulative XP at the end of the day
    pub xp: u32,
    /// Goals completed on that day
    pub goals_completed: u32,
}

/// One day on the activity heatmap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub date: NaiveDate,
    /// Activity level in `0..=MAX_INTENSITY`
    pub intensity: u8,
}

/// Badge rarity tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

/// Achievement descriptor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub rarity: Rarity,
    pub earned: bool,
}

/// Tone of the adaptive feedback panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    Celebration,
    Encouragement,
    Nudge,
}

impl FeedbackCategory {
    /// Pick the tone for a given daily progress ratio
    pub fn for_progress(progress: f64) -> Self {
        if progress >= 0.75 {
            FeedbackCategory::Celebration
        } else if progress >= 0.35 {
            FeedbackCategory::Encouragement
        } else {
            FeedbackCategory::Nudge
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FeedbackCategory::Celebration => "🎉",
            FeedbackCategory::Encouragement => "💪",
            FeedbackCategory::Nudge => "🧭",
        }
    }
}

/// Message tailored to today's progress
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveFeedback {
    pub category: FeedbackCategory,
    pub title: String,
    pub message: String,
}

/// A ranked leaderboard row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: u32,
    pub name: String,
    pub avatar: String,
    pub score: u32,
    #[serde(default)]
    pub is_current_user: bool,
}
