//! Random bot nickname generator.
//!
//! Produces nicknames in the format `AdjectiveNounBotNN` (e.g. `RustyCrabBot7`)
//! for configs that do not name the bot. Every result stays well under the
//! length at which senders stop counting as users.

use rand::RngExt;

const ADJECTIVES: &[&str] = &[
    "Rusty", "Tidal", "Salty", "Sandy", "Coral", "Brisk", "Quiet", "Swift", "Amber", "Misty",
    "Lucky", "Sunny",
];

const NOUNS: &[&str] = &[
    "Crab", "Shell", "Claw", "Reef", "Kelp", "Tide", "Wave", "Pearl", "Shore", "Dune",
];

/// Generate a random nickname like `RustyCrabBot7`.
pub fn generate_nickname() -> String {
    let mut rng = rand::rng();
    let adj = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let num: u8 = rng.random_range(0..100);
    format!("{}{}Bot{}", adj, noun, num)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::irc::message::MAX_USER_NICK_LEN;

    #[test]
    fn test_generated_nick_shape() {
        for _ in 0..50 {
            let nick = generate_nickname();
            assert!(nick.len() < MAX_USER_NICK_LEN, "{} too long", nick);
            assert!(nick.contains("Bot"));
            assert!(!nick.contains(' '));
        }
    }
}
