//! Dashboard Header Component

use leptos::*;

use super::motion::{Offset, Reveal};

/// Page heading with the quote of the day and an AI tip
#[component]
pub fn DashboardHeader(
    #[prop(into)]
    motivational_quote: String,
    #[prop(into)]
    ai_tip: String,
) -> impl IntoView {
    view! {
        <Reveal from={Offset::Y(-20)} class="mb-8">
            <div class="flex flex-col md:flex-row md:items-end md:justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-bold text-white">"Welcome back, Achiever"</h1>
                    <p class="text-gray-400 mt-2 italic">{format!("\u{201c}{}\u{201d}", motivational_quote)}</p>
                </div>
            </div>

            <div class="mt-4 flex items-start space-x-3 bg-card border border-neon-blue/30 rounded-2xl p-4 neon-glow-blue">
                <span class="text-2xl">"🤖"</span>
                <div class="flex-1">
                    <p class="text-xs uppercase tracking-wide text-neon-blue font-semibold">"AI Tip"</p>
                    <p class="text-gray-200 leading-relaxed mt-1">{ai_tip}</p>
                </div>
            </div>
        </Reveal>
    }
}
