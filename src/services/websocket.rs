use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Extension, Path,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{error, info, warn};

use crate::{
    dto::event_dto::DraftEvent,
    error::DraftError,
    services::{engine::DraftEngine, notifier::DraftHub},
};

/* Web Socket stuff */
pub async fn draft_socket_handler(
    ws: WebSocketUpgrade,
    Path((league_id, draft_id)): Path<(i64, i64)>,
    Extension(engine): Extension<Arc<DraftEngine>>,
    Extension(hub): Extension<Arc<DraftHub>>,
) -> Result<impl IntoResponse, DraftError> {
    // Reject unknown drafts before upgrading.
    let draft = engine.get_draft(league_id, draft_id).await?;
    if draft.status.is_terminal() {
        return Err(DraftError::InvalidState("draft has already finished".to_string()));
    }

    // A draft closed after the check above hands back an already-closed receiver.
    let rx = hub.subscribe(draft.id);
    info!(
        "Observer joined draft {} ({} watching).",
        draft.id,
        hub.observer_count(draft.id)
    );
    Ok(ws.on_upgrade(move |socket| handle_socket(socket, draft_id, rx)))
}

async fn handle_socket(socket: WebSocket, draft_id: i64, mut rx: broadcast::Receiver<DraftEvent>) {
    let (mut sender, mut receiver) = socket.split();

    // Task to send draft events to this client
    let mut send_task = tokio::spawn(async move {
        loop {
            let event = match rx.recv().await {
                Ok(event) => event,
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Observer of draft {} fell behind by {} events.", draft_id, skipped);
                    continue;
                }
                Err(RecvError::Closed) => break,
            };

            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(e) => {
                    error!("Failed to serialize draft event: {}", e);
                    continue;
                }
            };

            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    // Observers are read-only; inbound frames only tell us when they leave.
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            if let Message::Close(_) = msg {
                break;
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    info!("Observer left draft {}.", draft_id);
}
