//! Plain-text rendering of a dashboard snapshot
//!
//! Every function here is a pure function of its input: the same snapshot
//! always renders to the same text.

use std::fmt::Write;

use crate::dashboard::{group_thousands, DashboardData, LeaderboardEntry, MAX_INTENSITY};

/// Characters for heatmap intensity levels 0..=4
const HEATMAP_GLYPHS: [char; MAX_INTENSITY as usize + 1] = ['·', '░', '▒', '▓', '█'];

const PROGRESS_BAR_WIDTH: usize = 20;

/// Render the full dashboard as a text report
pub fn render_snapshot(data: &DashboardData) -> String {
    let mut out = String::new();

    // writeln! into a String cannot fail
    let _ = writeln!(out, "\"{}\"", data.motivational_quote);
    let _ = writeln!(out, "Tip: {}", data.ai_tip);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Daily goal  {} {:>3}%",
        progress_bar(data.daily_progress, PROGRESS_BAR_WIDTH),
        (data.daily_progress * 100.0).round() as u32
    );
    let level = data.level();
    let _ = writeln!(
        out,
        "Level {:<5} {} {:>3}% to level {}",
        level,
        progress_bar(data.level_progress(), PROGRESS_BAR_WIDTH),
        (data.level_progress() * 100.0).floor() as u32,
        level + 1
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "{:<18} {:>10} {:>9}", "Stat", "Value", "Change");
    let _ = writeln!(out, "{}", "-".repeat(39));
    for stat in &data.stats {
        let value = match &stat.unit {
            Some(unit) => format!("{} {}", stat.formatted_value(), unit),
            None => stat.formatted_value(),
        };
        let _ = writeln!(
            out,
            "{:<18} {:>10} {:>8}%",
            format!("{} {}", stat.icon, stat.label),
            value,
            format!("{:+.1}", stat.change)
        );
    }
    let _ = writeln!(out);

    if let (Some(first), Some(last)) = (data.chart_data.first(), data.chart_data.last()) {
        let _ = writeln!(
            out,
            "Growth      {} XP -> {} XP ({} to {})",
            group_thousands(first.xp),
            group_thousands(last.xp),
            first.date.format("%b %d"),
            last.date.format("%b %d")
        );
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Activity");
    out.push_str(&render_heatmap(data));
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{} {}: {}",
        data.adaptive_feedback.category.icon(),
        data.adaptive_feedback.title,
        data.adaptive_feedback.message
    );
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Badges ({}/{})",
        data.earned_badge_count(),
        data.badges.len()
    );
    for badge in &data.badges {
        let mark = if badge.earned { "✓" } else { " " };
        let _ = writeln!(
            out,
            "  [{}] {} {:<18} {}",
            mark,
            badge.icon,
            badge.name,
            badge.rarity.as_str()
        );
    }
    let _ = writeln!(out);

    out.push_str(&render_leaderboard(&data.leaderboard));
    out
}

/// Render the leaderboard as a ranked table
pub fn render_leaderboard(entries: &[LeaderboardEntry]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{:<6} {:<20} {:>10}", "Rank", "Name", "XP");
    let _ = writeln!(out, "{}", "-".repeat(38));

    for entry in entries {
        let marker = if entry.is_current_user { " <" } else { "" };
        let _ = writeln!(
            out,
            "{:<6} {:<20} {:>10}{}",
            format!("#{}", entry.rank),
            format!("{} {}", entry.avatar, entry.name),
            group_thousands(entry.score),
            marker
        );
    }

    out
}

/// Render the heatmap as one column per 7-day block, oldest on the left.
///
/// Row `n` holds the `n`th day of each block, so rows are day offsets
/// rather than fixed weekdays.
pub fn render_heatmap(data: &DashboardData) -> String {
    let weeks: Vec<_> = data.heatmap_weeks().collect();
    let mut out = String::new();

    for day in 0..7 {
        out.push_str("  ");
        for week in &weeks {
            let glyph = week
                .get(day)
                .map(|cell| HEATMAP_GLYPHS[cell.intensity.min(MAX_INTENSITY) as usize])
                .unwrap_or(' ');
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}

/// Fixed-width bar for a ratio in [0, 1]
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardGenerator;
    use chrono::NaiveDate;

    fn snapshot(seed: u64) -> DashboardData {
        DashboardGenerator::default()
            .with_seed(seed)
            .generate_on(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    #[test]
    fn test_render_is_stable() {
        let data = snapshot(5);
        assert_eq!(render_snapshot(&data), render_snapshot(&data.clone()));
    }

    #[test]
    fn test_render_contains_panels() {
        let data = snapshot(5);
        let text = render_snapshot(&data);

        assert!(text.contains(&data.motivational_quote));
        assert!(text.contains(&data.ai_tip));
        assert!(text.contains(&data.adaptive_feedback.title));
        for stat in &data.stats {
            assert!(text.contains(&stat.label));
        }
        for entry in &data.leaderboard {
            assert!(text.contains(&entry.name));
        }
    }

    #[test]
    fn test_render_shows_level_progress() {
        let data = snapshot(5);
        let text = render_snapshot(&data);
        let percent = (data.level_progress() * 100.0).floor() as u32;

        assert!(text.contains(&format!("{}% to level {}", percent, data.level() + 1)));
    }

    #[test]
    fn test_heatmap_grid_shape() {
        let data = snapshot(5);
        let grid = render_heatmap(&data);
        let rows: Vec<_> = grid.lines().collect();

        assert_eq!(rows.len(), 7);
        let weeks = data.heatmap_data.len() / 7;
        for row in rows {
            assert_eq!(row.trim_start().chars().count(), weeks);
        }
    }

    #[test]
    fn test_leaderboard_marks_current_user() {
        let data = snapshot(5);
        let text = render_leaderboard(&data.leaderboard);
        let marked: Vec<_> = text.lines().filter(|l| l.ends_with(" <")).collect();

        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("You"));
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 4), "[----]");
        assert_eq!(progress_bar(0.5, 4), "[##--]");
        assert_eq!(progress_bar(1.0, 4), "[####]");
        assert_eq!(progress_bar(3.0, 4), "[####]");
    }
}
