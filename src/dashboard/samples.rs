//! Fixed sample pools the generator draws from

use super::types::{FeedbackCategory, Rarity};

pub const MOTIVATIONAL_QUOTES: &[&str] = &[
    "Small daily improvements are the key to staggering long-term results.",
    "You don't have to be great to start, but you have to start to be great.",
    "Discipline is choosing between what you want now and what you want most.",
    "Progress, not perfection.",
    "The secret of getting ahead is getting started.",
    "Every level you gain was once a level you thought you couldn't reach.",
    "Consistency beats intensity when intensity doesn't last.",
    "Your future self is watching. Make them proud.",
];

pub const AI_TIPS: &[&str] = &[
    "You complete 40% more goals before noon. Try scheduling your hardest task first.",
    "Your streak survives best on weekends when you set a goal the night before.",
    "Pairing a new habit with an existing one doubles your completion rate.",
    "Short focus sessions of 25 minutes have given you the best XP per hour.",
    "You've been skipping evening reflections. A 2-minute recap keeps momentum.",
    "Goals with a clear finish line are 3x more likely to be completed. Make one specific today.",
    "Hydration goals are your easiest wins. Stack one early to start the day with XP.",
];

/// (id, name, description, icon, rarity)
pub const BADGES: &[(&str, &str, &str, &str, Rarity)] = &[
    ("first-step", "First Step", "Complete your first goal", "👣", Rarity::Common),
    ("early-bird", "Early Bird", "Finish a goal before 8 AM", "🌅", Rarity::Common),
    ("week-warrior", "Week Warrior", "Keep a 7-day streak", "🔥", Rarity::Rare),
    ("focus-master", "Focus Master", "Log 10 hours of focus sessions", "🧠", Rarity::Rare),
    ("goal-getter", "Goal Getter", "Complete 50 goals", "🎯", Rarity::Epic),
    ("social-butterfly", "Social Butterfly", "Join a community challenge", "🦋", Rarity::Common),
    ("night-owl", "Night Owl", "Finish a goal after 10 PM", "🦉", Rarity::Rare),
    ("unstoppable", "Unstoppable", "Keep a 30-day streak", "⚡", Rarity::Epic),
    ("legend", "Legend", "Reach level 25", "👑", Rarity::Legendary),
];

/// (name, avatar) pairs for simulated rivals
pub const RIVALS: &[(&str, &str)] = &[
    ("Alex Chen", "🦊"),
    ("Maya Patel", "🐼"),
    ("Jordan Lee", "🐯"),
    ("Sam Rivera", "🦁"),
    ("Priya Singh", "🐨"),
    ("Noah Kim", "🐸"),
    ("Lena Novak", "🦄"),
    ("Omar Haddad", "🐺"),
    ("Chloe Martin", "🐧"),
    ("Diego Alvarez", "🐻"),
    ("Aiko Tanaka", "🐰"),
    ("Ben Okafor", "🦉"),
    ("Sara Lindqvist", "🐹"),
    ("Ravi Kumar", "🐙"),
];

pub const CURRENT_USER_NAME: &str = "You";
pub const CURRENT_USER_AVATAR: &str = "⭐";

/// (title, message) options for each feedback tone
pub fn feedback_copy(category: FeedbackCategory) -> &'static [(&'static str, &'static str)] {
    match category {
        FeedbackCategory::Celebration => &[
            (
                "You're on fire!",
                "Today's goal is at or near the finish line. Wrap it up and claim the bonus XP.",
            ),
            (
                "Crushing it",
                "You're well ahead of your usual pace. Consider stretching into a bonus challenge.",
            ),
        ],
        FeedbackCategory::Encouragement => &[
            (
                "Solid momentum",
                "A good chunk of today's goal is done. A couple of focused blocks get you there.",
            ),
            (
                "Keep it rolling",
                "Steady progress today. A quick win now keeps your streak safe.",
            ),
        ],
        FeedbackCategory::Nudge => &[
            (
                "Let's get moving",
                "Pick the smallest goal on your list and knock it out in the next 10 minutes.",
            ),
            (
                "Fresh start",
                "Slow days happen. A single completed goal still protects your streak.",
            ),
        ],
    }
}
