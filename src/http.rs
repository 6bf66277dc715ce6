use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequest, Path, Query, Request, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::application::PlayerService;
use crate::enums::{Position, SkillName};
use crate::errors::{RosterError, ValidationError};
use crate::player::{Player, PlayerPayload};

/// Application state shared by every handler
#[derive(Clone, Debug)]
pub struct AppState {
    pub players: PlayerService,
    pub random_batch_size: usize,
}

pub type SharedState = Arc<AppState>;

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status = match &self {
            RosterError::Validation(_) => StatusCode::BAD_REQUEST,
            RosterError::PlayerNotFound { .. } | RosterError::NoSuitablePlayer => {
                StatusCode::NOT_FOUND
            }
        };

        (status, Json(self.to_string())).into_response()
    }
}

/// JSON body extractor that reports every parse failure as a 400 with the
/// serde message, instead of axum's 415/422 split.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RosterError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidatedJson(value)),
            Err(rejection) => Err(RosterError::malformed(rejection.body_text())),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectParams {
    pub position_str: String,
    pub skill_str: String,
    pub existing_players: Option<String>,
}

impl SelectParams {
    pub fn parse(&self) -> Result<(Position, SkillName, Vec<String>), ValidationError> {
        let position = self.position_str.parse::<Position>()?;
        let skill = self.skill_str.parse::<SkillName>()?;
        let excluded = self
            .existing_players
            .as_deref()
            .map(|names| names.split(',').map(str::to_string).collect())
            .unwrap_or_default();

        Ok((position, skill, excluded))
    }
}

// API Routes

async fn api_root() -> &'static str {
    "Player Management API"
}

async fn list_players(State(state): State<SharedState>) -> Json<Vec<Player>> {
    Json(state.players.list_players().await)
}

async fn list_skills(State(state): State<SharedState>) -> Json<Vec<&'static str>> {
    Json(state.players.list_skills())
}

async fn create_player(
    State(state): State<SharedState>,
    ValidatedJson(payload): ValidatedJson<PlayerPayload>,
) -> Result<Response, RosterError> {
    let player = state.players.create_player(payload).await?;
    let location = HeaderValue::from_str(&format!("/api/players/{}", player.id))
        .map_err(|e| RosterError::malformed(e.to_string()))?;

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(player)).into_response())
}

async fn get_player(
    State(state): State<SharedState>,
    Path(identifier): Path<String>,
) -> Result<Json<Player>, RosterError> {
    state.players.find_player(&identifier).await.map(Json)
}

async fn update_player(
    State(state): State<SharedState>,
    Path(identifier): Path<String>,
    ValidatedJson(payload): ValidatedJson<PlayerPayload>,
) -> Result<Json<Player>, RosterError> {
    state
        .players
        .update_player(&identifier, payload)
        .await
        .map(Json)
}

async fn delete_player(
    State(state): State<SharedState>,
    Path(identifier): Path<String>,
) -> Result<StatusCode, RosterError> {
    state.players.delete_player(&identifier).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn select_player(
    State(state): State<SharedState>,
    params: Result<Query<SelectParams>, QueryRejection>,
) -> Result<Json<Player>, RosterError> {
    let Query(params) = params.map_err(|rejection| RosterError::malformed(rejection.body_text()))?;
    let (position, skill, excluded) = params.parse()?;

    state
        .players
        .select_best_player(position, skill, &excluded)
        .await
        .map(Json)
}

async fn generate_random_players(State(state): State<SharedState>) -> StatusCode {
    state
        .players
        .generate_random_players(state.random_batch_size)
        .await;
    StatusCode::NO_CONTENT
}

/// CORS policy admitting the browser client's origin; falls back to any
/// origin when the configured one is not a valid header value.
pub fn cors_layer(origin: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    match HeaderValue::from_str(origin) {
        Ok(origin) => cors.allow_origin(origin),
        Err(_) => {
            log::warn!("Invalid CORS origin '{}', allowing any origin", origin);
            cors.allow_origin(Any)
        }
    }
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api", get(api_root))
        .route("/api/", get(api_root))
        .route("/api/players", get(list_players).post(create_player))
        .route(
            "/api/players/{identifier}",
            get(get_player).put(update_player).delete(delete_player),
        )
        .route("/api/skills", get(list_skills))
        .route("/api/select", post(select_player))
        .route("/api/getrandomplayerlist", post(generate_random_players))
        .with_state(state)
}
