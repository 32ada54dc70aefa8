//! Loading Component
//!
//! Full-screen state shown during the simulated load delay.

use leptos::*;

use super::motion::{Offset, Reveal};

/// Full-page loading spinner with progress copy
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-background flex items-center justify-center">
            <Reveal from={Offset::Scale(0.8)} class="text-center">
                <div class="w-16 h-16 border-4 border-neon-blue border-t-transparent rounded-full animate-spin mx-auto mb-4" />
                <h2 class="text-2xl font-bold text-white mb-2">"Loading Your Progress"</h2>
                <p class="text-gray-400">"Preparing your personalized dashboard..."</p>
            </Reveal>
        </div>
    }
}
