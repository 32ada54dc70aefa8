//! Daily Goal Progress Component
//!
//! Circular progress ring for today's goal.

use leptos::*;

use super::motion::use_mounted;

const RING_RADIUS: f64 = 52.0;
const RING_STROKE: f64 = 10.0;

/// Stroke dash offset that leaves `progress` of the ring drawn
pub fn ring_dash_offset(progress: f64, radius: f64) -> f64 {
    let circumference = 2.0 * std::f64::consts::PI * radius;
    circumference * (1.0 - progress.clamp(0.0, 1.0))
}

/// Headline under the ring for a progress ratio
pub fn progress_caption(progress: f64) -> &'static str {
    match (progress.clamp(0.0, 1.0) * 100.0).round() as u32 {
        100 => "Goal complete!",
        75..=99 => "Almost there",
        35..=74 => "Halfway hero",
        _ => "Just getting started",
    }
}

/// Progress ring with percentage label
#[component]
pub fn DailyGoalProgress(progress: f64) -> impl IntoView {
    let mounted = use_mounted();
    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
    let size = (RING_RADIUS + RING_STROKE) * 2.0;
    let center = size / 2.0;
    let percent = (progress.clamp(0.0, 1.0) * 100.0).round() as u32;

    // Start empty and sweep to the target on mount
    let dash_offset = move || {
        if mounted.get() {
            ring_dash_offset(progress, RING_RADIUS)
        } else {
            circumference
        }
    };

    view! {
        <div class="bg-card border border-border rounded-2xl p-6 h-full flex flex-col items-center justify-center">
            <h2 class="text-lg font-semibold text-white mb-4 self-start">"Daily Goal"</h2>

            <div class="relative">
                <svg width=size height=size class="-rotate-90">
                    <circle
                        cx=center
                        cy=center
                        r=RING_RADIUS
                        fill="none"
                        stroke="currentColor"
                        stroke-width=RING_STROKE
                        class="text-muted"
                    />
                    <circle
                        cx=center
                        cy=center
                        r=RING_RADIUS
                        fill="none"
                        stroke="url(#goal-gradient)"
                        stroke-width=RING_STROKE
                        stroke-linecap="round"
                        stroke-dasharray=circumference
                        stroke-dashoffset=dash_offset
                        style="transition: stroke-dashoffset 1s ease-out 0.4s;"
                    />
                    <defs>
                        <linearGradient id="goal-gradient" x1="0%" y1="0%" x2="100%" y2="0%">
                            <stop offset="0%" stop-color="#00d4ff" />
                            <stop offset="100%" stop-color="#a855f7" />
                        </linearGradient>
                    </defs>
                </svg>
                <div class="absolute inset-0 flex flex-col items-center justify-center">
                    <span class="text-3xl font-bold text-white">{format!("{}%", percent)}</span>
                    <span class="text-xs text-gray-400">"complete"</span>
                </div>
            </div>

            <p class="mt-4 text-sm text-gray-300">{progress_caption(progress)}</p>
        </div>
    }
}
