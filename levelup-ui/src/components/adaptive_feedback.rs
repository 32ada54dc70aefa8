//! Adaptive Feedback Component

use leptos::*;
use levelup::{AdaptiveFeedback as Feedback, FeedbackCategory};

/// Card gradient for each feedback tone
pub fn category_class(category: FeedbackCategory) -> &'static str {
    match category {
        FeedbackCategory::Celebration => "from-neon-green/20 to-neon-cyan/20 border-neon-green/40",
        FeedbackCategory::Encouragement => "from-neon-blue/20 to-neon-purple/20 border-neon-blue/40",
        FeedbackCategory::Nudge => "from-neon-purple/20 to-neon-pink/20 border-neon-pink/40",
    }
}

/// Feedback card tailored to today's progress
#[component]
pub fn AdaptiveFeedback(feedback: Feedback) -> impl IntoView {
    view! {
        <div class=format!(
            "bg-gradient-to-br {} border rounded-2xl p-6",
            category_class(feedback.category)
        )>
            <div class="flex items-start space-x-3">
                <span class="text-3xl">{feedback.category.icon()}</span>
                <div class="flex-1">
                    <h2 class="text-lg font-semibold text-white">{feedback.title}</h2>
                    <p class="text-gray-200 text-sm leading-relaxed mt-1">{feedback.message}</p>
                </div>
            </div>
        </div>
    }
}
