//! Dashboard Page
//!
//! Generates a fresh snapshot after a simulated load delay and lays out
//! every panel with staggered enter animations.

use gloo_timers::callback::Timeout;
use leptos::*;
use levelup::navigation::QUICK_ACTIONS;
use levelup::{DashboardData, DashboardGenerator, GeneratorConfig};

use crate::components::{
    AdaptiveFeedback, BadgeWall, DailyGoalProgress, DashboardHeader, GrowthChart, Heatmap,
    Leaderboard, Loading, Offset, Reveal, StatsCards,
};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let (snapshot, set_snapshot) = create_signal(None::<DashboardData>);

    // Simulated loading; the timer is cancelled if the page unmounts first
    let config = GeneratorConfig::default();
    let delay_ms = config.load_delay_ms.min(u32::MAX as u64) as u32;
    let timer = Timeout::new(delay_ms, move || {
        let data = DashboardGenerator::new(config).generate();
        web_sys::console::log_1(
            &format!(
                "Dashboard snapshot ready: level {}, {} XP",
                data.level(),
                data.total_xp()
            )
            .into(),
        );
        set_snapshot.set(Some(data));
    });
    on_cleanup(move || drop(timer));

    move || match snapshot.get() {
        None => view! { <Loading /> }.into_view(),
        Some(data) => view! { <DashboardContent data=data /> }.into_view(),
    }
}

/// Dashboard grid for a loaded snapshot
#[component]
fn DashboardContent(data: DashboardData) -> impl IntoView {
    let DashboardData {
        motivational_quote,
        ai_tip,
        daily_progress,
        stats,
        chart_data,
        heatmap_data,
        badges,
        adaptive_feedback,
        leaderboard,
    } = data;

    view! {
        <div class="container mx-auto px-4 py-6 lg:px-8 pb-24 lg:pb-6">
            <DashboardHeader motivational_quote=motivational_quote ai_tip=ai_tip />

            <div class="grid grid-cols-1 lg:grid-cols-12 gap-6">
                // Left column - primary metrics
                <div class="lg:col-span-8 space-y-6">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <Reveal from={Offset::X(-20)} delay=0.2>
                            <DailyGoalProgress progress=daily_progress />
                        </Reveal>
                        <Reveal from={Offset::X(20)} delay=0.3>
                            <StatsCards stats=stats />
                        </Reveal>
                    </div>

                    <Reveal from={Offset::Y(20)} delay=0.4>
                        <GrowthChart data=chart_data />
                    </Reveal>

                    <Reveal from={Offset::Y(20)} delay=0.5>
                        <Heatmap data=heatmap_data />
                    </Reveal>
                </div>

                // Right column - secondary metrics
                <div class="lg:col-span-4 space-y-6">
                    <Reveal from={Offset::X(20)} delay=0.6>
                        <AdaptiveFeedback feedback=adaptive_feedback />
                    </Reveal>
                    <Reveal from={Offset::X(20)} delay=0.7>
                        <BadgeWall badges=badges />
                    </Reveal>
                    <Reveal from={Offset::X(20)} delay=0.8>
                        <Leaderboard leaderboard=leaderboard />
                    </Reveal>
                </div>
            </div>

            // Quick actions
            <Reveal from={Offset::Y(20)} delay=0.9 class="mt-8 grid grid-cols-1 md:grid-cols-3 gap-4">
                {QUICK_ACTIONS
                    .iter()
                    .enumerate()
                    .map(|(idx, label)| view! {
                        <button class=format!(
                            "{} p-4 rounded-2xl text-white font-semibold hover:scale-105 transition-transform duration-200",
                            quick_action_style(idx)
                        )>
                            {*label}
                        </button>
                    })
                    .collect_view()}
            </Reveal>
        </div>
    }
}

/// Gradient and glow for the nth quick-action button
pub fn quick_action_style(index: usize) -> &'static str {
    match index % 3 {
        0 => "bg-gradient-to-r from-neon-blue to-neon-purple neon-glow-blue",
        1 => "bg-gradient-to-r from-neon-purple to-neon-pink neon-glow-purple",
        _ => "bg-gradient-to-r from-neon-green to-neon-cyan neon-glow-green",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_actions_have_distinct_styles() {
        let styles: Vec<_> = (0..QUICK_ACTIONS.len()).map(quick_action_style).collect();
        assert_eq!(styles.len(), 3);
        assert_ne!(styles[0], styles[1]);
        assert_ne!(styles[1], styles[2]);
    }
}
