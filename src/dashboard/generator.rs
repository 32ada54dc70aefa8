//! Mock dashboard data generator
//!
//! Fabricates a plausible `DashboardData` snapshot from random draws and the
//! fixed pools in [`samples`](super::samples). Generation is synchronous,
//! has no I/O, and cannot fail: out-of-range sizes are clamped first.

use chrono::{Duration, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::samples;
use super::types::*;
use crate::config::GeneratorConfig;

/// Generate a snapshot with default settings and fresh randomness
pub fn generate_dashboard_data() -> DashboardData {
    DashboardGenerator::default().generate()
}

/// Snapshot generator with configurable sizes and optional seed
#[derive(Debug, Clone, Default)]
pub struct DashboardGenerator {
    config: GeneratorConfig,
}

impl DashboardGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Builder method: fix the RNG seed so output is reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produce one snapshot dated today
    pub fn generate(&self) -> DashboardData {
        self.generate_on(Local::now().date_naive())
    }

    /// Produce one snapshot whose series end on `today`
    pub fn generate_on(&self, today: NaiveDate) -> DashboardData {
        match self.config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                generate_with_rng(&self.config, &mut rng, today)
            }
            None => generate_with_rng(&self.config, &mut rand::thread_rng(), today),
        }
    }
}

/// Build a full snapshot from the given RNG
pub fn generate_with_rng<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
    today: NaiveDate,
) -> DashboardData {
    let config = config.normalized();

    let daily_progress = round_to(rng.gen_range(0.0..=1.0), 2).clamp(0.0, 1.0);
    let streak = rng.gen_range(1..=45u32);

    let chart_data = generate_chart(config.chart_days, streak, rng, today);
    let total_xp = chart_data.last().map(|p| p.xp).unwrap_or(0);
    let recent_goals: u32 = chart_data.iter().map(|p| p.goals_completed).sum();
    let goals_completed = recent_goals + rng.gen_range(20..=80u32);

    let stats = vec![
        Stat::new(StatKind::Streak, streak, random_change(rng)),
        Stat::new(StatKind::TotalXp, total_xp, random_change(rng)),
        Stat::new(StatKind::Level, level_for_xp(total_xp), 0.0),
        Stat::new(StatKind::GoalsCompleted, goals_completed, random_change(rng)),
    ];

    let heatmap_data = generate_heatmap(config.heatmap_weeks, streak, rng, today);
    let badges = generate_badges(rng);
    let adaptive_feedback = generate_feedback(daily_progress, rng);
    let leaderboard = generate_leaderboard(config.leaderboard_size, total_xp, rng);

    let data = DashboardData {
        motivational_quote: pick(samples::MOTIVATIONAL_QUOTES, rng).to_string(),
        ai_tip: pick(samples::AI_TIPS, rng).to_string(),
        daily_progress,
        stats,
        chart_data,
        heatmap_data,
        badges,
        adaptive_feedback,
        leaderboard,
    };

    tracing::debug!(
        total_xp,
        level = data.level(),
        daily_progress = data.daily_progress,
        badges_earned = data.earned_badge_count(),
        leaderboard_size = data.leaderboard.len(),
        "Generated dashboard snapshot"
    );

    data
}

/// Cumulative XP growth over `days` consecutive days ending `today`
///
/// Rest days never fall inside the current streak.
fn generate_chart<R: Rng>(
    days: usize,
    streak: u32,
    rng: &mut R,
    today: NaiveDate,
) -> Vec<ChartPoint> {
    let mut xp = rng.gen_range(500..=2000u32);

    (0..days)
        .map(|i| {
            let days_ago = (days - 1 - i) as u32;
            let date = today - Duration::days(days_ago as i64);

            let rest_day = days_ago >= streak && rng.gen_bool(0.1);
            let goals = if rest_day { 0 } else { rng.gen_range(1..=5u32) };
            let bonus = rng.gen_range(0..=40u32) * u32::from(goals > 0);
            xp = xp.saturating_add(goals * 30 + bonus);

            ChartPoint {
                date,
                xp,
                goals_completed: goals,
            }
        })
        .collect()
}

/// Activity grid of `weeks * 7` days ending `today`
///
/// Days inside the current streak always show some activity.
fn generate_heatmap<R: Rng>(
    weeks: usize,
    streak: u32,
    rng: &mut R,
    today: NaiveDate,
) -> Vec<HeatmapCell> {
    let days = weeks * 7;

    (0..days)
        .map(|i| {
            let days_ago = (days - 1 - i) as u32;
            let in_streak = days_ago < streak;

            let intensity = if !in_streak && rng.gen_bool(0.25) {
                0
            } else {
                rng.gen_range(1..=MAX_INTENSITY)
            };

            HeatmapCell {
                date: today - Duration::days(days_ago as i64),
                intensity,
            }
        })
        .collect()
}

fn generate_badges<R: Rng>(rng: &mut R) -> Vec<Badge> {
    samples::BADGES
        .iter()
        .enumerate()
        .map(|(idx, &(id, name, description, icon, rarity))| {
            let chance = match rarity {
                Rarity::Common => 0.85,
                Rarity::Rare => 0.6,
                Rarity::Epic => 0.35,
                Rarity::Legendary => 0.1,
            };

            Badge {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                icon: icon.to_string(),
                rarity,
                // The opening badge is always earned
                earned: idx == 0 || rng.gen_bool(chance),
            }
        })
        .collect()
}

fn generate_feedback<R: Rng>(progress: f64, rng: &mut R) -> AdaptiveFeedback {
    let category = FeedbackCategory::for_progress(progress);
    let options = samples::feedback_copy(category);
    let (title, message) = options[rng.gen_range(0..options.len())];

    AdaptiveFeedback {
        category,
        title: title.to_string(),
        message: message.to_string(),
    }
}

/// Rivals plus the current user, sorted by descending score
fn generate_leaderboard<R: Rng>(
    size: usize,
    user_score: u32,
    rng: &mut R,
) -> Vec<LeaderboardEntry> {
    let low = user_score / 2;
    let high = user_score.saturating_mul(2).max(low + 1);

    let mut entries: Vec<LeaderboardEntry> = samples::RIVALS
        .choose_multiple(rng, size - 1)
        .map(|&(name, avatar)| LeaderboardEntry {
            rank: 0,
            name: name.to_string(),
            avatar: avatar.to_string(),
            score: rng.gen_range(low..=high),
            is_current_user: false,
        })
        .collect();

    entries.push(LeaderboardEntry {
        rank: 0,
        name: samples::CURRENT_USER_NAME.to_string(),
        avatar: samples::CURRENT_USER_AVATAR.to_string(),
        score: user_score,
        is_current_user: true,
    });

    entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.rank = idx as u32 + 1;
    }

    entries
}

fn pick<'a, R: Rng>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

fn random_change<R: Rng>(rng: &mut R) -> f64 {
    round_to(rng.gen_range(-15.0..=35.0), 1)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn seeded(seed: u64) -> DashboardData {
        DashboardGenerator::default().with_seed(seed).generate_on(today())
    }

    #[test]
    fn test_all_fields_populated() {
        for seed in 0..50 {
            let data = seeded(seed);
            assert!(!data.motivational_quote.is_empty());
            assert!(!data.ai_tip.is_empty());
            let kinds: Vec<StatKind> = data.stats.iter().map(|s| s.kind).collect();
            assert_eq!(kinds, StatKind::ALL);
            assert!(!data.chart_data.is_empty());
            assert!(!data.heatmap_data.is_empty());
            assert!(!data.badges.is_empty());
            assert!(!data.adaptive_feedback.message.is_empty());
            assert!(!data.leaderboard.is_empty());
        }
    }

    #[test]
    fn test_daily_progress_in_unit_range() {
        for seed in 0..200 {
            let data = seeded(seed);
            assert!((0.0..=1.0).contains(&data.daily_progress));
        }
    }

    #[test]
    fn test_leaderboard_sorted_and_ranked() {
        for seed in 0..100 {
            let data = seeded(seed);
            for pair in data.leaderboard.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }
            for (idx, entry) in data.leaderboard.iter().enumerate() {
                assert_eq!(entry.rank, idx as u32 + 1);
            }
            assert_eq!(
                data.leaderboard.iter().filter(|e| e.is_current_user).count(),
                1
            );
        }
    }

    #[test]
    fn test_current_user_score_matches_total_xp() {
        let data = seeded(7);
        let me = data.current_user_entry().unwrap();
        assert_eq!(me.score, data.total_xp());
    }

    #[test]
    fn test_heatmap_intensity_range_and_shape() {
        let config = GeneratorConfig::default();
        for seed in 0..100 {
            let data = seeded(seed);
            assert_eq!(data.heatmap_data.len(), config.heatmap_weeks * 7);
            assert!(data.heatmap_data.iter().all(|c| c.intensity <= MAX_INTENSITY));
            assert!(data.heatmap_weeks().all(|week| week.len() == 7));
            assert_eq!(data.heatmap_data.last().unwrap().date, today());
        }
    }

    #[test]
    fn test_streak_days_show_activity() {
        for seed in 0..50 {
            let data = seeded(seed);
            let streak = data.stat(StatKind::Streak).unwrap().value as usize;
            let active = data
                .heatmap_data
                .iter()
                .rev()
                .take(streak)
                .all(|c| c.intensity > 0);
            assert!(active);
        }
    }

    #[test]
    fn test_streak_days_have_goals_on_chart() {
        for seed in 0..100 {
            let data = seeded(seed);
            let streak = data.stat(StatKind::Streak).unwrap().value as usize;
            assert!(data
                .chart_data
                .iter()
                .rev()
                .take(streak)
                .all(|p| p.goals_completed > 0));
        }
    }

    #[test]
    fn test_chart_is_consecutive_and_non_decreasing() {
        let data = seeded(11);
        assert_eq!(data.chart_data.len(), GeneratorConfig::default().chart_days);
        assert_eq!(data.chart_data.last().unwrap().date, today());

        for pair in data.chart_data.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
            assert!(pair[1].xp >= pair[0].xp);
        }
    }

    #[test]
    fn test_level_stat_consistent_with_xp() {
        let data = seeded(3);
        let level = data.stat(StatKind::Level).unwrap().value;
        assert_eq!(level, level_for_xp(data.total_xp()));
        assert_eq!(level, data.level());
    }

    #[test]
    fn test_feedback_matches_progress() {
        for seed in 0..100 {
            let data = seeded(seed);
            assert_eq!(
                data.adaptive_feedback.category,
                FeedbackCategory::for_progress(data.daily_progress)
            );
        }
    }

    #[test]
    fn test_first_badge_always_earned() {
        for seed in 0..50 {
            let data = seeded(seed);
            assert!(data.badges[0].earned);
            assert!(data.earned_badge_count() >= 1);
        }
    }

    #[test]
    fn test_same_seed_same_snapshot() {
        assert_eq!(seeded(42), seeded(42));
    }

    #[test]
    fn test_zero_sizes_are_clamped() {
        let config = GeneratorConfig {
            chart_days: 0,
            heatmap_weeks: 0,
            leaderboard_size: 0,
            ..GeneratorConfig::default()
        };
        let data = DashboardGenerator::new(config)
            .with_seed(1)
            .generate_on(today());

        assert_eq!(data.chart_data.len(), 2);
        assert_eq!(data.heatmap_data.len(), 7);
        assert_eq!(data.leaderboard.len(), 2);
    }

    #[test]
    fn test_oversized_leaderboard_is_clamped() {
        let config = GeneratorConfig {
            leaderboard_size: 500,
            ..GeneratorConfig::default()
        };
        let data = DashboardGenerator::new(config)
            .with_seed(1)
            .generate_on(today());
        assert_eq!(data.leaderboard.len(), samples::RIVALS.len() + 1);
    }

    #[test]
    fn test_oversized_ranges_are_clamped() {
        let config = GeneratorConfig {
            chart_days: 45_000_000,
            heatmap_weeks: 14_000_000,
            ..GeneratorConfig::default()
        };
        let data = DashboardGenerator::new(config)
            .with_seed(1)
            .generate_on(today());

        assert_eq!(data.chart_data.len(), crate::config::MAX_CHART_DAYS);
        assert_eq!(
            data.heatmap_data.len(),
            crate::config::MAX_HEATMAP_WEEKS * 7
        );
        for pair in data.chart_data.windows(2) {
            assert!(pair[1].xp >= pair[0].xp);
        }
    }

    #[test]
    fn test_unseeded_generation_succeeds() {
        let data = generate_dashboard_data();
        assert!((0.0..=1.0).contains(&data.daily_progress));
        assert!(data.current_user_entry().is_some());
    }
}
