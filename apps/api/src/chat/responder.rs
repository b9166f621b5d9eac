//! Keyword responder. Memoryless: a reply depends only on the latest input.

/// Ordered trigger table. The first trigger found in the lowercased input wins.
const TRIGGERS: &[(&str, &str)] = &[
    (
        "how does matching work",
        "We match you based on your skills, education, location preference, and sector interest. Higher matches mean better fit!",
    ),
    (
        "what skills should i add",
        "Add skills you're confident in or learning. Popular ones include Python, JavaScript, HTML, CSS, SQL, and AWS.",
    ),
    (
        "can i change my preferences",
        "Yes! You can go back and update your preferences anytime using the back button.",
    ),
    (
        "how to apply for internships",
        "Click 'Apply on PM Internship Portal' on any recommendation card to visit the official portal and apply.",
    ),
];

pub const DEFAULT_REPLY: &str =
    "I'm here to help! You can ask about matching, skills, preferences, or applications. Try the quick options below!";

const QUICK_REPLIES: &[&str] = &[
    "How does matching work?",
    "What skills should I add?",
    "Can I change my preferences?",
    "How to apply for internships?",
];

pub fn respond(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    TRIGGERS
        .iter()
        .find(|(trigger, _)| lowered.contains(trigger))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY)
}

/// Suggested prompts, each guaranteed to hit a trigger.
pub fn quick_replies() -> &'static [&'static str] {
    QUICK_REPLIES
}
