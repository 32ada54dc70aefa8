//! Placeholder Pages
//!
//! Navigation targets without their own screen yet, and the 404 page.

use leptos::*;
use leptos_router::*;
use levelup::navigation::find_item;

use crate::components::{Offset, Reveal};

/// Placeholder for menu entries other than the dashboard
#[component]
pub fn ComingSoon() -> impl IntoView {
    let location = use_location();
    let title = move || {
        find_item(&location.pathname.get())
            .map(|item| format!("{} {}", item.icon, item.name))
            .unwrap_or_default()
    };

    view! {
        <Reveal from={Offset::Y(20)} class="flex flex-col items-center justify-center min-h-[60vh] text-center px-4">
            <h1 class="text-3xl font-bold text-white mb-2">{title}</h1>
            <p class="text-gray-400 mb-6">"This area is still leveling up. Check back soon!"</p>
            <A
                href="/"
                class="px-6 py-3 bg-gradient-to-r from-neon-blue to-neon-purple rounded-2xl text-white font-semibold"
            >
                "Back to Dashboard"
            </A>
        </Reveal>
    }
}

/// 404 Not Found page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center px-4">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold text-white mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-gradient-to-r from-neon-blue to-neon-purple rounded-2xl text-white font-semibold"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
