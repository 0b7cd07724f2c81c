#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use sqlx::SqlitePool;
use tokio::sync::broadcast::{self, error::TryRecvError};

use league_draft_backend::{
    db,
    dto::{
        draft_dto::CreateDraft,
        event_dto::DraftEvent,
        pick_dto::{OrderPosition, SetDraftOrder},
        player_dto::CreatePlayer,
        team_dto::CreateLeague,
    },
    services::{
        auto_pick::BestAvailable,
        directory::LeagueDirectory,
        engine::{DraftEngine, EngineSettings},
        notifier::DraftHub,
        store::DraftStore,
    },
};

pub const TICK: Duration = Duration::from_millis(50);

pub struct Harness {
    pub pool: SqlitePool,
    pub engine: Arc<DraftEngine>,
    pub hub: Arc<DraftHub>,
    pub league_id: i64,
    /// Teams A, B, C and D in creation order.
    pub teams: Vec<i64>,
    /// Players ranked 1..=n, best first.
    pub players: Vec<i64>,
}

impl Harness {
    pub fn team(&self, index: usize) -> i64 {
        self.teams[index]
    }

    pub fn player(&self, rank: usize) -> i64 {
        self.players[rank - 1]
    }
}

pub fn engine_for(pool: &SqlitePool, hub: Arc<DraftHub>) -> Arc<DraftEngine> {
    let directory = LeagueDirectory::new(pool.clone());
    Arc::new(DraftEngine::new(
        DraftStore::new(pool.clone()),
        directory.clone(),
        hub,
        Arc::new(BestAvailable::new(directory)),
        EngineSettings { timer_tick: TICK },
    ))
}

pub async fn harness() -> Harness {
    let pool = db::memory_pool().await.unwrap();
    let hub = Arc::new(DraftHub::new(64));
    let engine = engine_for(&pool, hub.clone());
    let directory = engine.directory().clone();

    let league = directory
        .create_league(&CreateLeague {
            name: "Sunday League".to_string(),
            max_teams: Some(12),
            roster_size: Some(25),
        })
        .await
        .unwrap();

    let mut teams = Vec::new();
    for (name, abbreviation) in [("Aces", "ACE"), ("Bombers", "BOM"), ("Cyclones", "CYC"), ("Dukes", "DUK")] {
        let team = directory
            .create_team(league.id, name, abbreviation)
            .await
            .unwrap();
        teams.push(team.id);
    }

    let mut players = Vec::new();
    for rank in 1..=24 {
        let player = directory
            .create_player(&CreatePlayer {
                first_name: "Player".to_string(),
                last_name: format!("{rank}"),
                primary_position: if rank % 2 == 0 { "SP" } else { "OF" }.to_string(),
                mlb_team: None,
                draft_rank: Some(rank),
            })
            .await
            .unwrap();
        players.push(player.id);
    }

    Harness {
        pool,
        engine,
        hub,
        league_id: league.id,
        teams,
        players,
    }
}

pub fn draft_request(total_rounds: i64, pick_time_limit_seconds: i64) -> CreateDraft {
    CreateDraft {
        name: "Spring draft".to_string(),
        mode: league_draft_backend::dto::draft_dto::DraftMode::Synchronous,
        total_rounds,
        scheduled_start_time: None,
        pick_time_limit_seconds,
        snake_draft: true,
        allow_trading: true,
    }
}

pub async fn create_draft(h: &Harness, total_rounds: i64) -> i64 {
    h.engine
        .create_draft(h.league_id, draft_request(total_rounds, 120))
        .await
        .unwrap()
        .id
}

pub fn order_of(teams: &[i64]) -> SetDraftOrder {
    SetDraftOrder {
        order: teams
            .iter()
            .enumerate()
            .map(|(i, team_id)| OrderPosition {
                team_id: *team_id,
                position: i as i64 + 1,
            })
            .collect(),
        traded_picks: Vec::new(),
        randomize: false,
    }
}

/// A started draft with `teams` in that order.
pub async fn started_draft(h: &Harness, teams: &[i64], total_rounds: i64) -> i64 {
    let draft_id = create_draft(h, total_rounds).await;
    h.engine
        .set_order(h.league_id, draft_id, order_of(teams))
        .await
        .unwrap();
    h.engine.start_draft(h.league_id, draft_id).await.unwrap();
    draft_id
}

/// Everything queued on `rx` except clock ticks.
pub fn drain(rx: &mut broadcast::Receiver<DraftEvent>) -> Vec<DraftEvent> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(DraftEvent::TimerUpdate { .. }) => continue,
            Ok(event) => events.push(event),
            Err(TryRecvError::Lagged(_)) => continue,
            Err(_) => return events,
        }
    }
}
