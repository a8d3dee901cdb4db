//! Spoken-text composition — welcome flows, prompts, and phrase tables.
//!
//! Pure string construction. Phrase strings carry their SSML markup and
//! trailing spaces verbatim; missing session keys fall back to defaults
//! instead of failing.

use rand::seq::SliceRandom;

use crate::session::SessionAttributes;

/// Permission scopes requested on the launch consent card.
pub const PERMISSIONS: &[&str] = &["read::alexa:device:all:address"];

/// Meal periods with their own greeting phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Breakfast,
    Brunch,
    Lunch,
    Dinner,
    Midnight,
}

impl TimeOfDay {
    /// Parse the `timeOfDay` session attribute. Unrecognized values read
    /// as absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "breakfast" => Some(Self::Breakfast),
            "brunch" => Some(Self::Brunch),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "midnight" => Some(Self::Midnight),
            _ => None,
        }
    }

    /// The fixed greeting candidates for this period.
    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            Self::Breakfast => &[
                "It looks like it's breakfast. ",
                "<say-as interpret-as=\"interjection\">cock a doodle doo</say-as> It's time for breakfast. ",
                "Good morning! Time for breakfast",
            ],
            Self::Brunch => &[
                "<say-as interpret-as=\"interjection\">cock a doodle doo</say-as> Let's get some brunch! ",
                "It's time for brunch. ",
            ],
            Self::Lunch => &["Lunch time! ", "Time for lunch. "],
            Self::Dinner => &["It's dinner time. ", "It's supper time. "],
            Self::Midnight => &[
                "<say-as interpret-as=\"interjection\">wowza</say-as> You're up late! You looking for a midnight snack? ",
                "It's time for a midnight snack. ",
            ],
        }
    }
}

/// Pick one greeting for the period, uniformly at random.
pub fn time_of_day_message(time_of_day: TimeOfDay) -> &'static str {
    random_phrase(time_of_day.phrases())
}

fn random_phrase(phrases: &'static [&'static str]) -> &'static str {
    phrases
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
}

/// Build the welcome line for a launch request.
///
/// The branch is keyed on attribute presence exactly as the skill shipped:
/// a populated store gets the first-time introduction, an empty store gets
/// the returning-user flow. See DESIGN.md on the inversion.
pub fn welcome_message(attrs: &SessionAttributes<'_>) -> String {
    if !attrs.is_empty() {
        return concat!(
            "<say-as interpret-as=\"interjection\">Howdy!</say-as> ",
            "Welcome to The Foodie! ",
            "I'll help you find the right food right now. ",
            "To make that easier, you can give me permission to access your location, ",
            "just check the Alexa app. "
        )
        .to_string();
    }

    let mut speech = String::from("Welcome back!! ");

    match attrs.get_str("timeOfDay").and_then(TimeOfDay::parse) {
        Some(time_of_day) => speech.push_str(time_of_day_message(time_of_day)),
        None => speech.push_str("It's time to stuff your face with delicious food. "),
    }

    if let Some(meal) = attrs.get_path_str(&["recommendations", "previous", "meal"]) {
        speech.push_str(&format!("It looks like last time you had {}. ", meal));
        speech.push_str("I wonder what it will be today. ");
    }

    speech
}

/// Follow-up question appended after the welcome line.
pub fn follow_up_prompt(attrs: &SessionAttributes<'_>) -> String {
    if attrs.is_empty() {
        concat!(
            "Let's narrow it down. What flavors do you feel like?",
            "You can say things like spicy, savory, greasy, and fresh."
        )
        .to_string()
    } else {
        "How rude of me. I forgot to ask. What's your name?".to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
