//! Leaderboard Component
//!
//! Ranked list with medals for the podium and the viewer highlighted.

use leptos::*;
use levelup::{dashboard::group_thousands, LeaderboardEntry};

/// Medal for the top three, `#n` below that
pub fn rank_label(rank: u32) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{}", n),
    }
}

/// Leaderboard card
#[component]
pub fn Leaderboard(leaderboard: Vec<LeaderboardEntry>) -> impl IntoView {
    view! {
        <div class="bg-card border border-border rounded-2xl p-6">
            <h2 class="text-lg font-semibold text-white mb-4">"Leaderboard"</h2>

            <div class="space-y-2">
                {leaderboard
                    .into_iter()
                    .map(|entry| {
                        let name_class = if entry.is_current_user {
                            "text-sm font-semibold text-neon-blue"
                        } else {
                            "text-sm text-gray-200"
                        };
                        let row_class = if entry.is_current_user {
                            "bg-neon-blue/10 border border-neon-blue/40"
                        } else {
                            "bg-background/40 border border-transparent"
                        };

                        view! {
                            <div class=format!("flex items-center justify-between rounded-xl px-3 py-2 {}", row_class)>
                                <div class="flex items-center space-x-3">
                                    <span class="w-8 text-center text-sm font-semibold text-gray-300">
                                        {rank_label(entry.rank)}
                                    </span>
                                    <span class="text-xl">{entry.avatar}</span>
                                    <span class=name_class>
                                        {entry.name}
                                    </span>
                                </div>
                                <span class="text-sm font-mono text-gray-300">
                                    {format!("{} XP", group_thousands(entry.score))}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_label() {
        assert_eq!(rank_label(1), "🥇");
        assert_eq!(rank_label(3), "🥉");
        assert_eq!(rank_label(4), "#4");
    }
}
