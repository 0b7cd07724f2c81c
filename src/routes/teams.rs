use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::{
    dto::team_dto::{CreateLeague, CreateTeam},
    error::DraftError,
    services::engine::DraftEngine,
};

/**
 * POST request to create a new league.
 */
pub async fn create_league(
    Extension(engine): Extension<Arc<DraftEngine>>,
    Json(payload): Json<CreateLeague>,
) -> Result<impl IntoResponse, DraftError> {
    info!("Creating league {}", payload.name);

    if payload.name.trim().is_empty() {
        return Err(DraftError::Validation("league name must not be empty".to_string()));
    }
    if payload.max_teams.is_some_and(|max| max <= 0) {
        return Err(DraftError::Validation("max teams must be positive".to_string()));
    }

    let league = engine.directory().create_league(&payload).await?;
    Ok((StatusCode::CREATED, Json(league)))
}

/**
 * GET request to get all the teams of a league.
 */
pub async fn get_teams(
    Path(league_id): Path<i64>,
    Extension(engine): Extension<Arc<DraftEngine>>,
) -> Result<impl IntoResponse, DraftError> {
    info!("Fetching teams of league {}.", league_id);

    let directory = engine.directory();
    if directory.league(league_id).await?.is_none() {
        return Err(DraftError::NotFound("league not found".to_string()));
    }

    let teams = directory.league_teams(league_id).await?;
    Ok(Json(teams))
}

/**
 * POST request to create a new team.
 */
pub async fn create_team(
    Path(league_id): Path<i64>,
    Extension(engine): Extension<Arc<DraftEngine>>,
    Json(payload): Json<CreateTeam>,
) -> Result<impl IntoResponse, DraftError> {
    info!("Creating a team {} in league {}", payload.name, league_id);

    if payload.name.trim().is_empty() {
        return Err(DraftError::Validation("team name must not be empty".to_string()));
    }

    let directory = engine.directory();
    let league = directory
        .league(league_id)
        .await?
        .ok_or_else(|| DraftError::NotFound("league not found".to_string()))?;

    let existing = directory.league_teams(league_id).await?;
    if existing.len() as i64 >= league.max_teams {
        return Err(DraftError::Conflict(format!(
            "league {} already has {} teams",
            league.name, league.max_teams
        )));
    }

    let team = directory
        .create_team(league_id, &payload.name, &payload.abbreviation)
        .await?;
    Ok((StatusCode::CREATED, Json(team)))
}
