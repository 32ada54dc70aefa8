//! Heatmap Component
//!
//! Activity grid, one column per 7-day block and one row per day offset
//! within the block.

use leptos::*;
use levelup::{dashboard::MAX_INTENSITY, HeatmapCell};

/// Tailwind class for an intensity level
pub fn intensity_class(intensity: u8) -> &'static str {
    match intensity.min(MAX_INTENSITY) {
        0 => "bg-muted",
        1 => "bg-neon-green/25",
        2 => "bg-neon-green/50",
        3 => "bg-neon-green/75",
        _ => "bg-neon-green",
    }
}

/// Hover text for a cell
pub fn cell_title(cell: &HeatmapCell) -> String {
    let activity = match cell.intensity {
        0 => "No activity",
        1 => "Light activity",
        2 => "Moderate activity",
        3 => "High activity",
        _ => "Peak activity",
    };
    format!("{}: {}", cell.date.format("%b %d, %Y"), activity)
}

/// Heatmap card
#[component]
pub fn Heatmap(data: Vec<HeatmapCell>) -> impl IntoView {
    let active_days = data.iter().filter(|c| c.intensity > 0).count();
    let total_days = data.len();

    let columns = data
        .chunks(7)
        .map(|week| {
            let cells = week
                .iter()
                .map(|cell| {
                    view! {
                        <div
                            class=format!("w-3 h-3 md:w-4 md:h-4 rounded-sm {}", intensity_class(cell.intensity))
                            title=cell_title(cell)
                        />
                    }
                })
                .collect_view();

            view! { <div class="flex flex-col gap-1">{cells}</div> }
        })
        .collect_view();

    view! {
        <div class="bg-card border border-border rounded-2xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold text-white">"Activity"</h2>
                <span class="text-sm text-gray-400">
                    {format!("{} of {} days active", active_days, total_days)}
                </span>
            </div>

            <div class="flex gap-1 overflow-x-auto pb-2">{columns}</div>

            // Scale legend
            <div class="flex items-center justify-end gap-1 mt-3 text-xs text-gray-400">
                <span class="mr-1">"Less"</span>
                {(0..=MAX_INTENSITY)
                    .map(|level| view! {
                        <div class=format!("w-3 h-3 rounded-sm {}", intensity_class(level)) />
                    })
                    .collect_view()}
                <span class="ml-1">"More"</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_intensity_class_covers_range() {
        assert_eq!(intensity_class(0), "bg-muted");
        assert_eq!(intensity_class(MAX_INTENSITY), "bg-neon-green");
        // Out-of-range values use the top colour
        assert_eq!(intensity_class(200), "bg-neon-green");
    }

    #[test]
    fn test_cell_title() {
        let cell = HeatmapCell {
            date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            intensity: 2,
        };
        assert_eq!(cell_title(&cell), "Jun 15, 2024: Moderate activity");
    }
}
