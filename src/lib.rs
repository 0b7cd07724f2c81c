//! Draft orchestration for fantasy baseball leagues: builds the pick order,
//! keeps the pick ledger, drives each draft through its lifecycle and pushes
//! live events to observers over WebSocket.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

pub mod config;
pub mod db;
pub mod error;

pub mod dto {
    pub mod draft_dto;
    pub mod event_dto;
    pub mod pick_dto;
    pub mod player_dto;
    pub mod team_dto;
    pub mod transaction_dto;
}

pub mod draft {
    pub mod arbiter;
    pub mod ledger;
    pub mod machine;
    pub mod order;
}

pub mod services {
    pub mod auto_pick;
    pub mod directory;
    pub mod engine;
    pub mod notifier;
    pub mod store;
    pub mod timers;
    pub mod websocket;
}

pub mod routes {
    pub mod draft;
    pub mod players;
    pub mod teams;
    pub mod transactions;
}

use routes::{draft as drafts, players, teams, transactions};
use services::{engine::DraftEngine, notifier::DraftHub, websocket::draft_socket_handler};

pub fn app(engine: Arc<DraftEngine>, hub: Arc<DraftHub>) -> Router {
    Router::new()
        .route("/leagues", post(teams::create_league))
        .route(
            "/leagues/{league_id}/teams",
            get(teams::get_teams).post(teams::create_team),
        )
        .route(
            "/leagues/{league_id}/transactions",
            get(transactions::get_transactions),
        )
        .route("/players", post(players::create_player))
        .route(
            "/leagues/{league_id}/drafts",
            get(drafts::list_drafts).post(drafts::create_draft),
        )
        .route(
            "/leagues/{league_id}/drafts/{draft_id}",
            get(drafts::get_draft).patch(drafts::update_draft),
        )
        .route(
            "/leagues/{league_id}/drafts/{draft_id}/order",
            get(drafts::get_order).post(drafts::set_order),
        )
        .route(
            "/leagues/{league_id}/drafts/{draft_id}/start",
            post(drafts::start_draft),
        )
        .route(
            "/leagues/{league_id}/drafts/{draft_id}/pause",
            post(drafts::pause_draft),
        )
        .route(
            "/leagues/{league_id}/drafts/{draft_id}/resume",
            post(drafts::resume_draft),
        )
        .route(
            "/leagues/{league_id}/drafts/{draft_id}/cancel",
            post(drafts::cancel_draft),
        )
        .route(
            "/leagues/{league_id}/drafts/{draft_id}/picks",
            get(drafts::get_picks),
        )
        .route(
            "/leagues/{league_id}/drafts/{draft_id}/pick",
            post(drafts::make_pick),
        )
        .route(
            "/leagues/{league_id}/drafts/{draft_id}/picks/{pick_number}/trade",
            post(drafts::trade_pick),
        )
        .route(
            "/leagues/{league_id}/drafts/{draft_id}/available-players",
            get(drafts::available_players),
        )
        .route(
            "/leagues/{league_id}/drafts/{draft_id}/ws",
            get(draft_socket_handler),
        )
        .layer(Extension(engine))
        .layer(Extension(hub))
        .layer(CorsLayer::permissive())
}
