//! Profile Card Component
//!
//! User summary shown at the bottom of the sidebar and mobile menu.

use leptos::*;
use levelup::navigation::{ProfileCard as Profile, PROFILE};

use super::motion::use_mounted;

/// Inline style for the level progress bar fill
pub fn progress_fill_style(percent: u32, animate: bool, visible: bool) -> String {
    let width = if visible || !animate { percent } else { 0 };
    if animate {
        format!("width: {}%; transition: width 1s ease-out 1s;", width)
    } else {
        format!("width: {}%;", width)
    }
}

/// Profile card with level progress
#[component]
pub fn ProfileCard(
    /// Grow the progress bar in after mount
    #[prop(default = false)]
    animate: bool,
) -> impl IntoView {
    let profile: Profile = PROFILE;
    let percent = profile.progress_percent();
    let mounted = use_mounted();

    view! {
        <div class="border-t border-border p-4">
            <div class="bg-gradient-to-r from-card to-card/50 border border-border/50 rounded-xl p-4">
                <div class="flex items-center space-x-3">
                    <div class="w-10 h-10 bg-gradient-to-r from-neon-purple to-neon-pink rounded-full
                                flex items-center justify-center text-white font-bold">
                        {profile.initial}
                    </div>
                    <div class="flex-1 min-w-0">
                        <p class="text-sm font-medium text-foreground truncate">{profile.title}</p>
                        <p class="text-xs text-muted-foreground truncate">{profile.xp_label()}</p>
                    </div>
                </div>

                <div class="mt-3">
                    <div class="flex items-center justify-between text-xs text-muted-foreground mb-1">
                        <span>{profile.next_level_label()}</span>
                        <span>{format!("{}%", percent)}</span>
                    </div>
                    <div class="w-full bg-muted rounded-full h-2">
                        <div
                            class="bg-gradient-to-r from-neon-blue to-neon-purple h-2 rounded-full"
                            style=move || progress_fill_style(percent, animate, mounted.get())
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
