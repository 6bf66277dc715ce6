//! Synthetic roster generation.
//!
//! Generated players are trusted inserts: they go straight to the
//! repository and skip the name and enum checks applied to API requests.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::enums::{POSITIONS, SKILL_NAMES};
use crate::player::{Player, PlayerId, Skill};
use crate::repository::PlayerRepository;

pub const MIN_SKILL_LEVEL: i32 = 1;
pub const MAX_SKILL_LEVEL: i32 = 100;

/// One random player: uniform position, one entry per known skill with an
/// independent level in `MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL`.
pub fn random_player<R: Rng + ?Sized>(rng: &mut R, name: String) -> Player {
    let position = POSITIONS[rng.gen_range(0..POSITIONS.len())];
    let skills = SKILL_NAMES
        .iter()
        .map(|skill| Skill::new(*skill, rng.gen_range(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL)))
        .collect();

    Player::new(name, position, skills)
}

/// A batch of `count` players named "Random Player 1" upward.
pub fn random_roster<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| random_player(&mut *rng, format!("Random Player {}", i + 1)))
        .collect()
}

/// Owns the randomness source used for roster generation.
pub struct RosterGenerator {
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl RosterGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(Box::new(StdRng::from_entropy())),
        }
    }

    /// Reproducible generator for demos and tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(Box::new(XorShiftRng::seed_from_u64(seed))),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Build `count` players and add each to `repository`. Returns the new ids
    /// in insertion order.
    pub async fn generate(&self, count: usize, repository: &dyn PlayerRepository) -> Vec<PlayerId> {
        // The guard must be gone before the first await.
        let players = {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            random_roster(&mut *rng, count)
        };

        let mut ids = Vec::with_capacity(players.len());
        for player in players {
            ids.push(player.id);
            repository.add(player).await;
        }

        log::info!("Generated {} random players", ids.len());
        ids
    }
}

impl Default for RosterGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl std::fmt::Debug for RosterGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterGenerator")
            .field("rng", &"<RngCore>")
            .finish()
    }
}
