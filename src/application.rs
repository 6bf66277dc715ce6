use std::sync::Arc;

use crate::enums::{Position, SkillName, SKILL_NAMES};
use crate::errors::{RosterError, RosterResult};
use crate::generator::RosterGenerator;
use crate::player::{Player, PlayerIdentifier, PlayerPayload};
use crate::repository::PlayerRepository;
use crate::selection::select_best;
use crate::validation::validate_player_name;

/// Core application service for roster management.
/// Sits between the HTTP boundary and the repository; the only place where
/// validation, identity assignment and selection are wired together.
#[derive(Clone)]
pub struct PlayerService {
    repository: Arc<dyn PlayerRepository>,
    generator: Arc<RosterGenerator>,
}

impl PlayerService {
    pub fn new(repository: Arc<dyn PlayerRepository>, generator: RosterGenerator) -> Self {
        Self {
            repository,
            generator: Arc::new(generator),
        }
    }

    pub async fn list_players(&self) -> Vec<Player> {
        self.repository.get_all().await
    }

    /// Skill names in enumeration order
    pub fn list_skills(&self) -> Vec<&'static str> {
        SKILL_NAMES.iter().map(SkillName::as_str).collect()
    }

    /// Validate and store a new player. The identity is always minted here.
    pub async fn create_player(&self, payload: PlayerPayload) -> RosterResult<Player> {
        if let Err(error) = validate_player_name(&payload.name) {
            log::warn!("Rejected player '{}': {}", payload.name, error);
            return Err(error.into());
        }

        let player = payload.into_player(uuid::Uuid::new_v4());
        self.repository.add(player.clone()).await;

        log::info!("Created player {} ({})", player.name, player.id);
        Ok(player)
    }

    /// Look a player up by identity or, failing UUID parsing, by name
    pub async fn find_player(&self, identifier: &str) -> RosterResult<Player> {
        let found = match PlayerIdentifier::parse(identifier) {
            PlayerIdentifier::Id(id) => self.repository.get_by_id(id).await,
            PlayerIdentifier::Name(name) => self.repository.get_by_name(&name).await,
        };

        found.ok_or_else(|| RosterError::not_found(identifier))
    }

    /// Replace every field of the addressed player except its identity
    pub async fn update_player(
        &self,
        identifier: &str,
        payload: PlayerPayload,
    ) -> RosterResult<Player> {
        let existing = self.find_player(identifier).await?;
        let updated = payload.into_player(existing.id);

        // A concurrent delete between lookup and write leaves this a no-op.
        self.repository.update(updated.clone()).await;

        log::info!("Updated player {} ({})", updated.name, updated.id);
        Ok(updated)
    }

    pub async fn delete_player(&self, identifier: &str) -> RosterResult<()> {
        let existing = self.find_player(identifier).await?;
        self.repository.delete(existing.id).await;

        log::info!("Deleted player {} ({})", existing.name, existing.id);
        Ok(())
    }

    pub async fn select_best_player(
        &self,
        position: Position,
        skill: SkillName,
        excluded: &[String],
    ) -> RosterResult<Player> {
        let players = self.repository.get_all().await;

        match select_best(&players, position, skill, excluded) {
            Some(player) => Ok(player.clone()),
            None => {
                log::debug!(
                    "No {} with {} outside {} excluded names",
                    position,
                    skill,
                    excluded.len()
                );
                Err(RosterError::NoSuitablePlayer)
            }
        }
    }

    /// Add `count` random players, bypassing name validation
    pub async fn generate_random_players(&self, count: usize) -> usize {
        self.generator
            .generate(count, self.repository.as_ref())
            .await
            .len()
    }
}

impl std::fmt::Debug for PlayerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerService")
            .field("repository", &"<PlayerRepository>")
            .field("generator", &self.generator)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use crate::player::Skill;
    use crate::repository::InMemoryPlayerRepository;
    use std::collections::HashSet;
    use uuid::Uuid;

    fn service() -> PlayerService {
        PlayerService::new(Arc::new(InMemoryPlayerRepository::new()), RosterGenerator::seeded(11))
    }

    fn payload(name: &str, position: Position, skills: Vec<Skill>) -> PlayerPayload {
        PlayerPayload {
            id: None,
            name: name.to_string(),
            position,
            skills,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_identity() {
        let service = service();
        let mut seen = HashSet::new();

        for name in ["Alex", "Sam", "Robin", "Kai"] {
            let mut body = payload(name, Position::Forward, vec![]);
            body.id = seen.iter().next().copied();
            let created = service.create_player(body).await.unwrap();
            assert!(seen.insert(created.id));
        }

        assert_eq!(service.list_players().await.len(), 4);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_name_without_storing() {
        let service = service();

        let result = service
            .create_player(payload("John_Doe", Position::Defender, vec![]))
            .await;

        assert_eq!(
            result,
            Err(RosterError::Validation(ValidationError::InvalidCharacters))
        );
        assert!(service.list_players().await.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_name_ignores_case() {
        let service = service();
        let alex = service
            .create_player(payload("Alex", Position::Midfielder, vec![]))
            .await
            .unwrap();

        assert_eq!(service.find_player("alex").await.unwrap().id, alex.id);
        assert_eq!(service.find_player("ALEX").await.unwrap().id, alex.id);
        assert_eq!(service.find_player(&alex.id.to_string()).await.unwrap().id, alex.id);
    }

    #[tokio::test]
    async fn test_find_unknown_is_not_found() {
        let service = service();
        assert_eq!(
            service.find_player("nobody").await,
            Err(RosterError::not_found("nobody"))
        );

        let id = Uuid::new_v4().to_string();
        assert_eq!(service.find_player(&id).await, Err(RosterError::not_found(id)));
    }

    #[tokio::test]
    async fn test_update_keeps_identity() {
        let service = service();
        let original = service
            .create_player(payload("Alex", Position::Forward, vec![]))
            .await
            .unwrap();

        let mut body = payload(
            "Alexander",
            Position::Defender,
            vec![Skill::new(SkillName::Defense, 80)],
        );
        body.id = Some(Uuid::new_v4());

        let updated = service.update_player("alex", body).await.unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, "Alexander");

        let stored = service.find_player(&original.id.to_string()).await.unwrap();
        assert_eq!(stored, updated);
        assert_eq!(service.list_players().await.len(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let service = service();
        let result = service
            .update_player("ghost", payload("Ghost", Position::Forward, vec![]))
            .await;

        assert_eq!(result, Err(RosterError::not_found("ghost")));
        assert!(service.list_players().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_leaves_roster_unchanged() {
        let service = PlayerService::new(
            Arc::new(InMemoryPlayerRepository::with_demo_roster()),
            RosterGenerator::seeded(1),
        );

        let result = service.delete_player(&Uuid::new_v4().to_string()).await;
        assert!(matches!(result, Err(RosterError::PlayerNotFound { .. })));
        assert_eq!(service.list_players().await.len(), 5);

        service.delete_player("john doe 3").await.unwrap();
        let names: Vec<String> = service.list_players().await.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["John Doe 1", "John Doe 2", "John Doe 4", "John Doe 5"]);
    }

    #[tokio::test]
    async fn test_select_best_player_against_demo_roster() {
        let service = PlayerService::new(
            Arc::new(InMemoryPlayerRepository::with_demo_roster()),
            RosterGenerator::seeded(1),
        );

        let best = service
            .select_best_player(Position::Forward, SkillName::Strength, &[])
            .await
            .unwrap();
        assert_eq!(best.name, "John Doe 5");

        let excluded = vec!["John Doe 5".to_string(), "John Doe 4".to_string()];
        let best = service
            .select_best_player(Position::Forward, SkillName::Strength, &excluded)
            .await
            .unwrap();
        assert_eq!(best.name, "John Doe 3");

        assert_eq!(
            service
                .select_best_player(Position::Defender, SkillName::Strength, &[])
                .await,
            Err(RosterError::NoSuitablePlayer)
        );
    }

    #[tokio::test]
    async fn test_generated_players_skip_name_validation() {
        let service = service();
        assert_eq!(service.generate_random_players(100).await, 100);

        let players = service.list_players().await;
        assert_eq!(players.len(), 100);
        // "Random Player 1" has spaces and would be refused by the API.
        assert!(validate_player_name(&players[0].name).is_err());
    }

    #[test]
    fn test_list_skills() {
        assert_eq!(
            service().list_skills(),
            vec!["Strength", "Defense", "Attack", "Speed", "Stamina"]
        );
    }
}
