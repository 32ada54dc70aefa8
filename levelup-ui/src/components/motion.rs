//! Motion Component
//!
//! Declarative enter animations rendered as CSS transitions.

use leptos::*;

/// Where an element starts before sliding into place
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    /// Fade only
    None,
    /// Horizontal slide in pixels (negative = from the left)
    X(i32),
    /// Vertical slide in pixels (positive = from below)
    Y(i32),
    /// Grow from a scale factor
    Scale(f64),
}

impl Offset {
    fn transform(&self) -> String {
        match self {
            Offset::None => "none".to_string(),
            Offset::X(px) => format!("translateX({}px)", px),
            Offset::Y(px) => format!("translateY({}px)", px),
            Offset::Scale(s) => format!("scale({})", s),
        }
    }
}

/// Timing of an enter animation, in seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub delay: f64,
    pub duration: f64,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration: 0.5,
        }
    }
}

impl Transition {
    fn css(&self) -> String {
        format!(
            "opacity {d}s ease-out {w}s, transform {d}s ease-out {w}s",
            d = self.duration,
            w = self.delay
        )
    }
}

/// Inline style for an element at the start or end of its enter animation
pub fn reveal_style(from: Offset, transition: Transition, visible: bool) -> String {
    let (opacity, transform) = if visible {
        (1, "none".to_string())
    } else {
        (0, from.transform())
    };

    format!(
        "opacity: {}; transform: {}; transition: {};",
        opacity,
        transform,
        transition.css()
    )
}

/// Signal that flips to `true` on the first frame after mount
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = create_signal(false);
    request_animation_frame(move || set_mounted.set(true));
    mounted
}

/// Wrapper that animates its children into view on mount
#[component]
pub fn Reveal(
    #[prop(default = Offset::None)]
    from: Offset,
    /// Seconds before the animation starts
    #[prop(default = 0.0)]
    delay: f64,
    #[prop(default = 0.5)]
    duration: f64,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let mounted = use_mounted();
    let transition = Transition { delay, duration };

    view! {
        <div
            class=class
            style=move || reveal_style(from, transition, mounted.get())
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_style_uses_offset() {
        let style = reveal_style(
            Offset::X(-20),
            Transition {
                delay: 0.2,
                ..Transition::default()
            },
            false,
        );
        assert_eq!(
            style,
            "opacity: 0; transform: translateX(-20px); \
             transition: opacity 0.5s ease-out 0.2s, transform 0.5s ease-out 0.2s;"
        );
    }

    #[test]
    fn test_visible_style_resets_transform() {
        let style = reveal_style(Offset::Scale(0.8), Transition::default(), true);
        assert!(style.starts_with("opacity: 1; transform: none;"));
    }

    #[test]
    fn test_style_is_stable() {
        let t = Transition {
            delay: 0.9,
            duration: 0.3,
        };
        assert_eq!(
            reveal_style(Offset::Y(20), t, false),
            reveal_style(Offset::Y(20), t, false)
        );
    }
}
