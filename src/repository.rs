use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::enums::{Position, SkillName};
use crate::player::{Player, PlayerId, Skill};

/// Storage contract for the roster.
///
/// Implementations never signal errors: updating or deleting an identity
/// that is not stored is a no-op, and identity uniqueness is the caller's
/// responsibility.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Append a player that already carries its identity
    async fn add(&self, player: Player);

    /// Replace the stored player with the same identity, if any
    async fn update(&self, player: Player);

    /// Snapshot of every player in insertion order
    async fn get_all(&self) -> Vec<Player>;

    async fn get_by_id(&self, id: PlayerId) -> Option<Player>;

    /// First player whose name matches, ignoring case
    async fn get_by_name(&self, name: &str) -> Option<Player>;

    /// Remove the player with the given identity, if any
    async fn delete(&self, id: PlayerId);
}

/// Roster held in process memory; lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryPlayerRepository {
    players: RwLock<Vec<Player>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Five forwards, "John Doe 1" through "John Doe 5", each rated only on
    /// Strength at a level equal to their number.
    pub fn with_demo_roster() -> Self {
        let players = (1..=5)
            .map(|i| {
                Player::new(
                    format!("John Doe {}", i),
                    Position::Forward,
                    vec![Skill::new(SkillName::Strength, i)],
                )
            })
            .collect();

        Self {
            players: RwLock::new(players),
        }
    }
}

fn names_match(stored: &str, wanted: &str) -> bool {
    stored.to_lowercase() == wanted.to_lowercase()
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn add(&self, player: Player) {
        let mut players = self.players.write().await;
        players.push(player);
    }

    async fn update(&self, player: Player) {
        let mut players = self.players.write().await;
        match players.iter_mut().find(|existing| existing.id == player.id) {
            Some(existing) => *existing = player,
            None => log::debug!("Update skipped, no player with id {}", player.id),
        }
    }

    async fn get_all(&self) -> Vec<Player> {
        self.players.read().await.clone()
    }

    async fn get_by_id(&self, id: PlayerId) -> Option<Player> {
        let players = self.players.read().await;
        players.iter().find(|player| player.id == id).cloned()
    }

    async fn get_by_name(&self, name: &str) -> Option<Player> {
        let players = self.players.read().await;
        players
            .iter()
            .find(|player| names_match(&player.name, name))
            .cloned()
    }

    async fn delete(&self, id: PlayerId) {
        let mut players = self.players.write().await;
        match players.iter().position(|player| player.id == id) {
            Some(index) => {
                players.remove(index);
            }
            None => log::debug!("Delete skipped, no player with id {}", id),
        }
    }
}
