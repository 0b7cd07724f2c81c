use std::sync::Arc;

use axum::{
    extract::{Extension, Json, Path, Query},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use crate::{
    dto::{
        draft_dto::{CreateDraft, PauseDraft, UpdateDraft},
        pick_dto::{MakePick, SetDraftOrder, TradePick},
        player_dto::AvailablePlayersQuery,
    },
    error::DraftError,
    services::engine::DraftEngine,
};

/**
 * POST request to create a draft in a league.
 */
pub async fn create_draft(
    Path(league_id): Path<i64>,
    Extension(engine): Extension<Arc<DraftEngine>>,
    Json(payload): Json<CreateDraft>,
) -> Result<impl IntoResponse, DraftError> {
    info!("Creating draft '{}' in league {}.", payload.name, league_id);

    let draft = engine.create_draft(league_id, payload).await?;
    Ok((StatusCode::CREATED, Json(draft)))
}

/**
 * GET request for every draft of a league.
 */
pub async fn list_drafts(
    Path(league_id): Path<i64>,
    Extension(engine): Extension<Arc<DraftEngine>>,
) -> Result<impl IntoResponse, DraftError> {
    info!("Fetching drafts of league {}.", league_id);

    let drafts = engine.list_drafts(league_id).await?;
    Ok(Json(drafts))
}

pub async fn get_draft(
    Path((league_id, draft_id)): Path<(i64, i64)>,
    Extension(engine): Extension<Arc<DraftEngine>>,
) -> Result<impl IntoResponse, DraftError> {
    info!("Fetching draft {}.", draft_id);

    let draft = engine.get_draft(league_id, draft_id).await?;
    Ok(Json(draft))
}

/**
 * PATCH request to change settings of a draft that has not started.
 */
pub async fn update_draft(
    Path((league_id, draft_id)): Path<(i64, i64)>,
    Extension(engine): Extension<Arc<DraftEngine>>,
    Json(payload): Json<UpdateDraft>,
) -> Result<impl IntoResponse, DraftError> {
    info!("Updating draft {}.", draft_id);

    let draft = engine.update_draft(league_id, draft_id, payload).await?;
    Ok(Json(draft))
}

pub async fn get_order(
    Path((league_id, draft_id)): Path<(i64, i64)>,
    Extension(engine): Extension<Arc<DraftEngine>>,
) -> Result<impl IntoResponse, DraftError> {
    info!("Fetching order of draft {}.", draft_id);

    let order = engine.list_order(league_id, draft_id).await?;
    Ok(Json(order))
}

/**
 * POST request to set the pick order. Replaces any order set before.
 */
pub async fn set_order(
    Path((league_id, draft_id)): Path<(i64, i64)>,
    Extension(engine): Extension<Arc<DraftEngine>>,
    Json(payload): Json<SetDraftOrder>,
) -> Result<impl IntoResponse, DraftError> {
    info!(
        "Setting order of draft {} ({} teams, randomize: {}).",
        draft_id,
        payload.order.len(),
        payload.randomize
    );

    let order = engine.set_order(league_id, draft_id, payload).await?;
    Ok(Json(order))
}

pub async fn start_draft(
    Path((league_id, draft_id)): Path<(i64, i64)>,
    Extension(engine): Extension<Arc<DraftEngine>>,
) -> Result<impl IntoResponse, DraftError> {
    info!("Starting draft {}.", draft_id);

    let draft = engine.start_draft(league_id, draft_id).await?;
    Ok(Json(draft))
}

/**
 * POST request to pause a draft. The body and its reason are optional.
 */
pub async fn pause_draft(
    Path((league_id, draft_id)): Path<(i64, i64)>,
    Extension(engine): Extension<Arc<DraftEngine>>,
    payload: Option<Json<PauseDraft>>,
) -> Result<impl IntoResponse, DraftError> {
    info!("Pausing draft {}.", draft_id);

    let reason = payload.and_then(|Json(body)| body.reason);
    let draft = engine.pause_draft(league_id, draft_id, reason).await?;
    Ok(Json(draft))
}

pub async fn resume_draft(
    Path((league_id, draft_id)): Path<(i64, i64)>,
    Extension(engine): Extension<Arc<DraftEngine>>,
) -> Result<impl IntoResponse, DraftError> {
    info!("Resuming draft {}.", draft_id);

    let draft = engine.resume_draft(league_id, draft_id).await?;
    Ok(Json(draft))
}

pub async fn cancel_draft(
    Path((league_id, draft_id)): Path<(i64, i64)>,
    Extension(engine): Extension<Arc<DraftEngine>>,
) -> Result<impl IntoResponse, DraftError> {
    info!("Cancelling draft {}.", draft_id);

    let draft = engine.cancel_draft(league_id, draft_id).await?;
    Ok(Json(draft))
}

pub async fn get_picks(
    Path((league_id, draft_id)): Path<(i64, i64)>,
    Extension(engine): Extension<Arc<DraftEngine>>,
) -> Result<impl IntoResponse, DraftError> {
    info!("Fetching picks of draft {}.", draft_id);

    let picks = engine.list_picks(league_id, draft_id).await?;
    Ok(Json(picks))
}

/**
 * POST request for the team on the clock to draft a player.
 */
pub async fn make_pick(
    Path((league_id, draft_id)): Path<(i64, i64)>,
    Extension(engine): Extension<Arc<DraftEngine>>,
    Json(payload): Json<MakePick>,
) -> Result<impl IntoResponse, DraftError> {
    info!(
        "Team {} picking player {} in draft {}.",
        payload.team_id, payload.player_id, draft_id
    );

    let pick = engine.make_pick(league_id, draft_id, payload).await?;
    Ok(Json(pick))
}

/**
 * POST request to move an unused pick to another team.
 */
pub async fn trade_pick(
    Path((league_id, draft_id, pick_number)): Path<(i64, i64, i64)>,
    Extension(engine): Extension<Arc<DraftEngine>>,
    Json(payload): Json<TradePick>,
) -> Result<impl IntoResponse, DraftError> {
    info!(
        "Trading pick {} of draft {} to team {}.",
        pick_number, draft_id, payload.team_id
    );

    let pick = engine
        .trade_pick(league_id, draft_id, pick_number, payload)
        .await?;
    Ok(Json(pick))
}

pub async fn available_players(
    Path((league_id, draft_id)): Path<(i64, i64)>,
    Query(query): Query<AvailablePlayersQuery>,
    Extension(engine): Extension<Arc<DraftEngine>>,
) -> Result<impl IntoResponse, DraftError> {
    info!("Fetching available players for draft {}.", draft_id);

    let players = engine
        .available_players(league_id, draft_id, query.limit)
        .await?;
    Ok(Json(players))
}
