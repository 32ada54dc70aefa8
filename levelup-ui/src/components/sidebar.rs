//! Sidebar Component
//!
//! Fixed desktop navigation column with brand, menu and profile card.

use leptos::*;
use leptos_router::*;
use levelup::navigation::{NavItem, APP_MARK, APP_NAME, SIDEBAR_ITEMS};

use super::motion::{Offset, Reveal};
use super::profile_card::ProfileCard;

/// Class list for a sidebar link
pub fn sidebar_link_class(active: bool) -> &'static str {
    if active {
        "flex items-center space-x-3 rounded-xl px-4 py-3 text-sm font-medium transition-all duration-200 \
         hover:scale-105 bg-gradient-to-r from-neon-blue/20 to-neon-purple/20 text-neon-blue \
         border border-neon-blue/30 neon-glow-blue"
    } else {
        "flex items-center space-x-3 rounded-xl px-4 py-3 text-sm font-medium transition-all duration-200 \
         hover:scale-105 text-muted-foreground hover:text-foreground hover:bg-accent"
    }
}

/// Desktop sidebar, hidden below the `lg` breakpoint
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <Reveal
            from={Offset::X(-300)}
            class="fixed left-0 top-0 z-40 h-screen w-64 bg-card border-r border-border hidden lg:block"
        >
            <div class="flex h-full flex-col">
                // Logo and brand
                <div class="flex h-16 items-center justify-center border-b border-border">
                    <Reveal from={Offset::Scale(0.0)} delay=0.2>
                        <Brand />
                    </Reveal>
                </div>

                // Navigation links
                <nav class="flex-1 space-y-2 p-4">
                    {SIDEBAR_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(index, item)| view! { <SidebarLink item=*item index=index /> })
                        .collect_view()}
                </nav>

                <ProfileCard animate=true />
            </div>
        </Reveal>
    }
}

/// Brand mark and app name
#[component]
pub fn Brand(
    #[prop(default = "text-xl")]
    size: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div class="w-8 h-8 bg-gradient-to-r from-neon-blue to-neon-purple rounded-lg
                        flex items-center justify-center text-white font-bold">
                {APP_MARK}
            </div>
            <span class=format!(
                "{} font-bold bg-gradient-to-r from-neon-blue to-neon-purple bg-clip-text text-transparent",
                size
            )>
                {APP_NAME}
            </span>
        </div>
    }
}

/// Individual sidebar link with staggered entrance
#[component]
fn SidebarLink(item: NavItem, index: usize) -> impl IntoView {
    let location = use_location();
    let is_active = create_memo(move |_| item.is_active(&location.pathname.get()));

    view! {
        <Reveal from={Offset::X(-20)} delay={0.1 * index as f64} duration=0.3>
            <a href=item.href class=move || sidebar_link_class(is_active.get())>
                <span class="text-lg">{item.icon}</span>
                <span>{item.name}</span>
                <Show when=move || is_active.get()>
                    <div class="ml-auto w-2 h-2 bg-neon-blue rounded-full" />
                </Show>
            </a>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_class_highlights_active() {
        assert!(sidebar_link_class(true).contains("text-neon-blue"));
        assert!(!sidebar_link_class(false).contains("text-neon-blue"));
        assert!(sidebar_link_class(false).contains("hover:bg-accent"));
    }
}
