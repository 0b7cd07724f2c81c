use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::{error::DraftError, services::engine::DraftEngine};

/**
 * GET the audit trail of a league, oldest first.
 */
pub async fn get_transactions(
    Path(league_id): Path<i64>,
    Extension(engine): Extension<Arc<DraftEngine>>,
) -> Result<impl IntoResponse, DraftError> {
    info!("Fetching transactions of league {}.", league_id);

    let transactions = engine.league_transactions(league_id).await?;
    Ok(Json(transactions))
}
