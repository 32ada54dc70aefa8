//! Stats Cards Component
//!
//! Grid of headline stats with week-over-week change.

use leptos::*;
use levelup::Stat;

/// Arrow and text colour for a percentage change
pub fn change_indicator(change: f64) -> (&'static str, &'static str) {
    if change > 0.05 {
        ("↑", "text-neon-green")
    } else if change < -0.05 {
        ("↓", "text-red-400")
    } else {
        ("→", "text-gray-400")
    }
}

/// Two-by-two grid of stat cards
#[component]
pub fn StatsCards(stats: Vec<Stat>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-4 h-full">
            {stats.into_iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
        </div>
    }
}

#[component]
fn StatCard(stat: Stat) -> impl IntoView {
    let (arrow, color) = change_indicator(stat.change);
    let value = stat.formatted_value();

    view! {
        <div class="bg-card border border-border rounded-2xl p-4 hover:scale-105 transition-transform duration-200">
            <div class="flex items-center justify-between">
                <span class="text-2xl">{stat.icon.clone()}</span>
                <span class=format!("text-xs font-medium {}", color)>
                    {format!("{} {:+.1}%", arrow, stat.change)}
                </span>
            </div>

            <div class="mt-3 text-2xl font-bold text-white">
                {value}
                {stat.unit.clone().map(|u| view! {
                    <span class="text-sm text-gray-400 font-normal ml-1">{u}</span>
                })}
            </div>

            <p class="text-xs text-gray-400 mt-1">{stat.label.clone()}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_indicator() {
        assert_eq!(change_indicator(12.5), ("↑", "text-neon-green"));
        assert_eq!(change_indicator(-3.0), ("↓", "text-red-400"));
        assert_eq!(change_indicator(0.0), ("→", "text-gray-400"));
    }
}
