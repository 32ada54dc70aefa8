//! Mobile Navigation Component
//!
//! Sticky header with a menu toggle, a slide-in menu panel and a bottom tab
//! bar. Shown below the `lg` breakpoint only.

use leptos::*;
use leptos_router::*;
use levelup::navigation::{mobile_items, NavItem};

use super::motion::{Offset, Reveal};
use super::profile_card::ProfileCard;
use super::sidebar::Brand;

/// Inline style for one of the three hamburger bars (0 = top)
///
/// When open the outer bars rotate into an X and the middle one fades out.
pub fn hamburger_bar_style(bar: usize, open: bool) -> &'static str {
    match (bar, open) {
        (0, false) => "transform: translateY(-6px) rotate(0deg); transition: transform 0.2s;",
        (0, true) => "transform: translateY(0px) rotate(45deg); transition: transform 0.2s;",
        (1, false) => "opacity: 1; transition: opacity 0.2s;",
        (1, true) => "opacity: 0; transition: opacity 0.2s;",
        (_, false) => "transform: translateY(6px) rotate(0deg); transition: transform 0.2s;",
        (_, true) => "transform: translateY(0px) rotate(-45deg); transition: transform 0.2s;",
    }
}

/// Class list for the slide-in panel
pub fn panel_class(open: bool) -> &'static str {
    if open {
        "lg:hidden fixed left-0 top-0 z-50 h-full w-80 max-w-[85vw] bg-card border-r border-border \
         transform transition-transform duration-300 ease-out translate-x-0"
    } else {
        "lg:hidden fixed left-0 top-0 z-50 h-full w-80 max-w-[85vw] bg-card border-r border-border \
         transform transition-transform duration-300 ease-out -translate-x-full"
    }
}

/// Class list for the dimmed backdrop behind the panel
pub fn backdrop_class(open: bool) -> &'static str {
    if open {
        "lg:hidden fixed inset-0 z-40 bg-black/50 backdrop-blur-sm transition-opacity duration-300 opacity-100"
    } else {
        "lg:hidden fixed inset-0 z-40 bg-black/50 backdrop-blur-sm transition-opacity duration-300 \
         opacity-0 pointer-events-none"
    }
}

/// Mobile header, menu overlay and bottom tab bar
#[component]
pub fn MobileNav() -> impl IntoView {
    let (is_open, set_open) = create_signal(false);
    let close = move || set_open.set(false);

    view! {
        // Mobile header
        <div class="lg:hidden sticky top-0 z-50 bg-card/95 backdrop-blur-sm border-b border-border">
            <div class="flex items-center justify-between px-4 py-3">
                <Brand size="text-lg" />

                // Menu button
                <button
                    on:click=move |_| set_open.update(|open| *open = !*open)
                    aria-label="Toggle menu"
                    aria-expanded=move || is_open.get().to_string()
                    class="relative w-10 h-10 p-0 flex items-center justify-center rounded-md hover:bg-accent"
                >
                    {(0..3)
                        .map(|bar| view! {
                            <span
                                class="w-6 h-0.5 bg-foreground block absolute"
                                style=move || hamburger_bar_style(bar, is_open.get())
                            />
                        })
                        .collect_view()}
                </button>
            </div>
        </div>

        // Backdrop
        <div class=move || backdrop_class(is_open.get()) on:click=move |_| close() />

        // Menu panel
        <div class=move || panel_class(is_open.get())>
            <div class="flex h-full flex-col">
                <div class="flex h-16 items-center justify-center border-b border-border">
                    <Brand />
                </div>

                <nav class="flex-1 space-y-2 p-4">
                    {move || {
                        // Re-render on open so the staggered entrance replays
                        is_open.get().then(|| {
                            mobile_items()
                                .iter()
                                .enumerate()
                                .map(|(index, item)| view! {
                                    <MenuLink item=*item index=index on_select=close />
                                })
                                .collect_view()
                        })
                    }}
                </nav>

                <ProfileCard />
            </div>
        </div>

        // Bottom navigation
        <div class="lg:hidden fixed bottom-0 left-0 right-0 z-30 bg-card/95 backdrop-blur-sm border-t border-border">
            <div class="grid grid-cols-4 gap-1 p-2">
                {mobile_items()
                    .iter()
                    .map(|item| view! { <TabLink item=*item /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Link inside the slide-in menu; selecting it closes the menu
#[component]
fn MenuLink(
    item: NavItem,
    index: usize,
    on_select: impl Fn() + 'static,
) -> impl IntoView {
    let location = use_location();
    let is_active = create_memo(move |_| item.is_active(&location.pathname.get()));

    view! {
        <Reveal from={Offset::X(-20)} delay={0.1 * index as f64} duration=0.3>
            <a
                href=item.href
                on:click=move |_| on_select()
                class=move || {
                    let base = "flex items-center space-x-3 rounded-xl px-4 py-3 text-sm font-medium transition-all duration-200";
                    if is_active.get() {
                        format!("{} bg-gradient-to-r from-neon-blue/20 to-neon-purple/20 text-neon-blue border border-neon-blue/30", base)
                    } else {
                        format!("{} text-muted-foreground hover:text-foreground hover:bg-accent", base)
                    }
                }
            >
                <span class="text-lg">{item.icon}</span>
                <span>{item.name}</span>
                <Show when=move || is_active.get()>
                    <div class="ml-auto w-2 h-2 bg-neon-blue rounded-full" />
                </Show>
            </a>
        </Reveal>
    }
}

/// Bottom tab bar entry
#[component]
fn TabLink(item: NavItem) -> impl IntoView {
    let location = use_location();
    let is_active = create_memo(move |_| item.is_active(&location.pathname.get()));

    view! {
        <a
            href=item.href
            class=move || {
                let base = "flex flex-col items-center justify-center py-2 px-1 rounded-lg text-xs font-medium transition-all duration-200";
                if is_active.get() {
                    format!("{} text-neon-blue bg-neon-blue/10", base)
                } else {
                    format!("{} text-muted-foreground hover:text-foreground hover:bg-accent", base)
                }
            }
        >
            <span class="text-lg mb-1">{item.icon}</span>
            <span class="truncate">{item.name}</span>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamburger_morphs_to_x() {
        assert!(hamburger_bar_style(0, true).contains("rotate(45deg)"));
        assert!(hamburger_bar_style(2, true).contains("rotate(-45deg)"));
        assert!(hamburger_bar_style(1, true).contains("opacity: 0"));
        assert!(hamburger_bar_style(1, false).contains("opacity: 1"));
    }

    #[test]
    fn test_panel_and_backdrop_follow_state() {
        assert!(panel_class(true).ends_with("translate-x-0"));
        assert!(panel_class(false).ends_with("-translate-x-full"));
        assert!(backdrop_class(false).contains("pointer-events-none"));
        assert!(!backdrop_class(true).contains("pointer-events-none"));
    }
}
