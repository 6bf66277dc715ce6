// Player Manager Library - Core Module Organization
//
// Roster domain (players, positions, skills), the in-memory store behind it,
// and the axum HTTP surface the React client talks to.

// Core data structures and enums
pub mod enums;
pub mod errors;
pub mod player;

// Roster logic
pub mod generator;
pub mod repository;
pub mod selection;
pub mod validation;

// Server implementation
pub mod application;
pub mod config;
pub mod http;

use std::sync::Arc;

// Re-export common types for convenient access
pub use crate::application::PlayerService;
pub use crate::config::ServerConfig;
pub use crate::enums::{Position, SkillName, POSITIONS, SKILL_NAMES};
pub use crate::errors::{RosterError, RosterResult, ValidationError};
pub use crate::generator::RosterGenerator;
pub use crate::player::{Player, PlayerId, PlayerIdentifier, PlayerPayload, Skill};
pub use crate::repository::{InMemoryPlayerRepository, PlayerRepository};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wire up repository, generator, service and router for the given settings
pub fn build_app(config: &ServerConfig) -> axum::Router {
    let repository: Arc<dyn PlayerRepository> = if config.no_demo_roster {
        Arc::new(InMemoryPlayerRepository::new())
    } else {
        Arc::new(InMemoryPlayerRepository::with_demo_roster())
    };

    let state = Arc::new(http::AppState {
        players: PlayerService::new(repository, RosterGenerator::new(config.roster_seed)),
        random_batch_size: config.random_batch_size,
    });

    http::router(state).layer(http::cors_layer(&config.cors_origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    async fn player_count(app: axum::Router) -> usize {
        let resp = app
            .oneshot(Request::builder().uri("/api/players").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let players: Vec<Player> = serde_json::from_slice(&bytes).unwrap();
        players.len()
    }

    #[tokio::test]
    async fn test_build_app_seeds_demo_roster_by_default() {
        let app = build_app(&ServerConfig::default());
        assert_eq!(player_count(app).await, 5);
    }

    #[tokio::test]
    async fn test_build_app_can_start_empty() {
        let config = ServerConfig {
            no_demo_roster: true,
            ..ServerConfig::default()
        };
        assert_eq!(player_count(build_app(&config)).await, 0);
    }
}
