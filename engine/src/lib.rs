use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod character;
pub mod error;
pub mod roll;
pub mod roster;
pub mod store;

pub use character::{
    AbilityModifiers, Character, IdentifySkills, Proficiencies, Proficiency, Saves, Statistic,
};
pub use error::Error;
pub use roll::{resolve, Degree, RollOutcome};
pub use roster::{CharacterUpdate, Roster, Selector};

/// d20 source. Scripted faces, when present, are consumed before the RNG is
/// touched, so tests can pin exact rolls.
pub struct Dice {
    rng: ChaCha8Rng,
    script: VecDeque<u8>,
}

impl Dice {
    /// Freshly seeded from OS entropy; successive instances roll independently.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            script: VecDeque::new(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            script: VecDeque::new(),
        }
    }

    /// Rolls the given faces in order, then falls back to a fixed-seed RNG.
    pub fn from_scripted(faces: Vec<u8>) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(0),
            script: faces.into(),
        }
    }

    pub fn d20(&mut self) -> u8 {
        if let Some(face) = self.script.pop_front() {
            return face;
        }
        self.rng.gen_range(1..=20)
    }
}
