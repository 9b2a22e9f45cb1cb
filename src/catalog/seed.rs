use crate::models::ActivityRecord;

pub(super) fn categories() -> Vec<String> {
    [
        "All",
        "Creative",
        "Mindfulness",
        "Outdoor",
        "Entertainment",
        "Educational",
        "Productive",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: u32,
    title: &str,
    emoji: &str,
    category: &str,
    difficulty: &str,
    time_needed: &str,
    description: &str,
    tips: &[&str],
    featured: bool,
) -> ActivityRecord {
    ActivityRecord {
        id,
        title: title.to_string(),
        emoji: emoji.to_string(),
        category: category.to_string(),
        difficulty: difficulty.to_string(),
        time_needed: time_needed.to_string(),
        description: description.to_string(),
        tips: tips.iter().map(|t| t.to_string()).collect(),
        featured,
    }
}

pub(super) fn activities() -> Vec<ActivityRecord> {
    vec![
        record(
            1,
            "Learn a New Recipe",
            "👨‍🍳",
            "Creative",
            "Easy",
            "1-2 hours",
            "Cooking is a fun and rewarding way to spend your time. Try making something you've never made before!",
            &[
                "Start with simple recipes",
                "Watch cooking tutorials on YouTube",
                "Don't be afraid to experiment with flavors",
                "Take photos of your creations",
            ],
            true,
        ),
        record(
            2,
            "Start a Journal",
            "📓",
            "Mindfulness",
            "Easy",
            "15-30 minutes",
            "Writing down your thoughts can help clear your mind and boost creativity.",
            &[
                "Write without judgment",
                "Try gratitude journaling",
                "Use prompts if you're stuck",
                "Make it a daily habit",
            ],
            false,
        ),
        record(
            3,
            "Learn to Play an Instrument",
            "🎸",
            "Creative",
            "Medium",
            "30+ minutes daily",
            "Pick up that guitar or keyboard you've been ignoring! There are tons of free tutorials online.",
            &[
                "Start with basic chords",
                "Practice for short sessions regularly",
                "Learn songs you love",
                "Be patient with yourself",
            ],
            true,
        ),
        record(
            4,
            "Go for a Nature Walk",
            "🌲",
            "Outdoor",
            "Easy",
            "30-60 minutes",
            "Fresh air and nature can do wonders for your mood. Explore a local park or trail!",
            &[
                "Leave your phone behind (or on silent)",
                "Pay attention to sounds and smells",
                "Take photos of interesting plants",
                "Try to identify local birds",
            ],
            false,
        ),
        record(
            5,
            "Start a DIY Project",
            "🔨",
            "Creative",
            "Medium",
            "2-4 hours",
            "Build something with your hands! From simple crafts to home improvements.",
            &[
                "Start with upcycling old items",
                "Watch tutorials before starting",
                "Gather all materials first",
                "Don't aim for perfection",
            ],
            true,
        ),
        record(
            6,
            "Have a Movie Marathon",
            "🎬",
            "Entertainment",
            "Easy",
            "4-6 hours",
            "Pick a theme or franchise and binge-watch! Make it special with snacks and cozy blankets.",
            &[
                "Choose a theme (80s classics, horror, etc.)",
                "Prepare snacks in advance",
                "Invite friends virtually or in person",
                "Take breaks between movies",
            ],
            false,
        ),
        record(
            7,
            "Learn a New Language",
            "🗣️",
            "Educational",
            "Hard",
            "30 minutes daily",
            "Apps like Duolingo make it easy and fun to learn new languages from your couch!",
            &[
                "Set realistic daily goals",
                "Practice with native speakers online",
                "Watch shows in your target language",
                "Learn phrases, not just words",
            ],
            true,
        ),
        record(
            8,
            "Organize Your Space",
            "🧹",
            "Productive",
            "Medium",
            "1-3 hours",
            "A clean space leads to a clear mind. Tackle that messy closet or desk drawer!",
            &[
                "Start with one small area",
                "Use the 'spark joy' method",
                "Donate items you don't need",
                "Create a system that works for you",
            ],
            false,
        ),
    ]
}
