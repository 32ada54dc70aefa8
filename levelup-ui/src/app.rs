//! App Root Component
//!
//! Layout chrome and routing.

use leptos::*;
use leptos_router::*;

use crate::components::{MobileNav, Sidebar};
use crate::pages::{ComingSoon, Dashboard, NotFound};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            // Dark theme is the only theme
            <div class="dark min-h-screen bg-background text-foreground font-sans antialiased">
                // Mobile header, menu and tab bar
                <MobileNav />

                // Desktop sidebar
                <Sidebar />

                // Main content area
                <main class="lg:ml-64">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/goals" view=ComingSoon />
                        <Route path="/analytics" view=ComingSoon />
                        <Route path="/challenges" view=ComingSoon />
                        <Route path="/community" view=ComingSoon />
                        <Route path="/settings" view=ComingSoon />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    const INDEX_HTML: &str = include_str!("../index.html");

    #[test]
    fn test_theme_defines_component_tokens() {
        assert!(INDEX_HTML.contains("darkMode: 'class'"));
        for color in ["background:", "foreground:", "card:", "border:", "muted:", "accent:"] {
            assert!(INDEX_HTML.contains(color), "missing theme color {}", color);
        }
        for neon in ["blue:", "purple:", "pink:", "green:", "cyan:"] {
            assert!(INDEX_HTML.contains(neon), "missing neon color {}", neon);
        }
        for glow in ["blue", "purple", "green", "gold"] {
            assert!(INDEX_HTML.contains(&format!(".neon-glow-{}", glow)));
        }
    }
}
