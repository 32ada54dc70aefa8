//! Badge Wall Component
//!
//! Achievement grid; unearned badges are greyed out.

use leptos::*;
use levelup::{Badge, Rarity};

/// Border colour for a rarity tier
pub fn rarity_class(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "border-gray-500/40",
        Rarity::Rare => "border-neon-blue/60",
        Rarity::Epic => "border-neon-purple/60",
        Rarity::Legendary => "border-yellow-400/80 neon-glow-gold",
    }
}

/// Badge wall card
#[component]
pub fn BadgeWall(badges: Vec<Badge>) -> impl IntoView {
    let earned = badges.iter().filter(|b| b.earned).count();
    let total = badges.len();

    view! {
        <div class="bg-card border border-border rounded-2xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold text-white">"Badges"</h2>
                <span class="text-sm text-gray-400">{format!("{}/{}", earned, total)}</span>
            </div>

            <div class="grid grid-cols-3 gap-3">
                {badges
                    .into_iter()
                    .map(|badge| {
                        let state = if badge.earned {
                            "hover:scale-110"
                        } else {
                            "grayscale opacity-40"
                        };

                        view! {
                            <div
                                class=format!(
                                    "flex flex-col items-center p-3 rounded-xl border bg-background/40 \
                                     transition-transform duration-200 {} {}",
                                    rarity_class(badge.rarity),
                                    state
                                )
                                title=badge.description.clone()
                            >
                                <span class="text-2xl">{badge.icon}</span>
                                <span class="text-[10px] text-center text-gray-300 mt-1 leading-tight">
                                    {badge.name}
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
    fn test_legendary_glows() {
        assert!(rarity_class(Rarity::Legendary).contains("neon-glow-gold"));
        assert!(!rarity_class(Rarity::Common).contains("glow"));
    }
}
