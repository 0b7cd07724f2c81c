use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use tracing::info;

use crate::{dto::player_dto::CreatePlayer, error::DraftError, services::engine::DraftEngine};

/**
 * POST request to add a player to the pool every draft picks from.
 */
pub async fn create_player(
    Extension(engine): Extension<Arc<DraftEngine>>,
    Json(payload): Json<CreatePlayer>,
) -> Result<impl IntoResponse, DraftError> {
    info!(
        "Adding player {} {} ({}).",
        payload.first_name, payload.last_name, payload.primary_position
    );

    if payload.first_name.trim().is_empty() && payload.last_name.trim().is_empty() {
        return Err(DraftError::Validation("player needs a name".to_string()));
    }

    let player = engine.directory().create_player(&payload).await?;
    Ok((StatusCode::CREATED, Json(player)))
}
