//! Built-in starter content for a fresh catalog.

use super::definition::{Card, Difficulty};
use super::preset::DifficultyPreset;

use Difficulty::{Easy, Hard, Medium};

const DARES: [(&str, Difficulty, &str); 10] = [
    ("d1", Easy, "Do your best impression of a chicken for 10 seconds."),
    ("d2", Easy, "Sing the chorus of a pop song loudly."),
    ("d3", Medium, "Let the group look through your photo gallery for 1 minute."),
    ("d4", Medium, "Speak in an accent chosen by the group for the next round."),
    ("d5", Hard, "Call a random contact and ask \"Where did you hide the body?\"."),
    ("d6", Hard, "Lick the floor."),
    ("d7", Easy, "Hold your breath for 20 seconds."),
    ("d8", Medium, "Do 10 pushups immediately."),
    ("d9", Hard, "Let another player draw on your face with a marker (washable!)."),
    ("d10", Easy, "Tell a joke. If no one laughs, you fail."),
];

const DODGES: [(&str, Difficulty, &str); 10] = [
    ("do1", Easy, "Drink a glass of water without using your hands."),
    ("do2", Easy, "Spin around 10 times and try to walk in a straight line."),
    ("do3", Medium, "Eat a spoonful of hot sauce or a lemon slice."),
    ("do4", Medium, "Plank for 45 seconds."),
    ("do5", Hard, "Send a risky text to your crush (or ex)."),
    ("do6", Easy, "Balance a spoon on your nose for 10 seconds."),
    ("do7", Medium, "Let the person to your right tickle you for 10 seconds."),
    ("do8", Hard, "Post an embarrassing photo on your social media story."),
    ("do9", Easy, "Do 20 jumping jacks."),
    ("do10", Medium, "Sit on an imaginary chair (wall sit) for 1 minute."),
];

/// Starter dares d1-d10, all active.
#[must_use]
pub fn dares() -> Vec<Card> {
    DARES
        .iter()
        .map(|&(id, difficulty, text)| Card::dare(id, text, difficulty))
        .collect()
}

/// Starter dodges do1-do10, all active.
#[must_use]
pub fn dodges() -> Vec<Card> {
    DODGES
        .iter()
        .map(|&(id, difficulty, text)| Card::dodge(id, text, difficulty))
        .collect()
}

/// Standard, Family Friendly, and Spicy.
#[must_use]
pub fn presets() -> Vec<DifficultyPreset> {
    vec![
        DifficultyPreset::new("p1", "Standard", [Easy, Medium, Hard]),
        DifficultyPreset::new("p2", "Family Friendly", [Easy]),
        DifficultyPreset::new("p3", "Spicy", [Medium, Hard]),
    ]
}
