use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum DraftMode {
    Synchronous,
    Asynchronous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum DraftStatus {
    Scheduled,
    InProgress,
    Paused,
    Completed,
    Cancelled,
}

impl DraftStatus {
    /// No transition leaves a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// A draft row. `current_team_on_clock` stays set while paused so resume can
/// hand the clock back to the same team; the deadline does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Draft {
    pub id: i64,
    pub league_id: i64,
    pub name: String,
    pub mode: DraftMode,
    pub status: DraftStatus,
    pub total_rounds: i64,
    pub current_round: i64,
    pub current_pick: i64,
    pub current_team_on_clock: Option<i64>,
    pub current_pick_deadline: Option<DateTime<Utc>>,
    pub pick_time_limit_seconds: i64,
    pub snake_draft: bool,
    pub allow_trading: bool,
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub actual_start_time: Option<DateTime<Utc>>,
    pub completed_time: Option<DateTime<Utc>>,
}

fn default_mode() -> DraftMode {
    DraftMode::Synchronous
}

fn default_pick_time_limit() -> i64 {
    120
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDraft {
    pub name: String,
    #[serde(default = "default_mode")]
    pub mode: DraftMode,
    pub total_rounds: i64,
    #[serde(default)]
    pub scheduled_start_time: Option<DateTime<Utc>>,
    #[serde(default = "default_pick_time_limit")]
    pub pick_time_limit_seconds: i64,
    #[serde(default = "default_true")]
    pub snake_draft: bool,
    #[serde(default = "default_true")]
    pub allow_trading: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDraft {
    pub name: Option<String>,
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub pick_time_limit_seconds: Option<i64>,
    pub allow_trading: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PauseDraft {
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftResponse {
    pub id: i64,
    pub league_id: i64,
    pub name: String,
    pub mode: DraftMode,
    pub status: DraftStatus,
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub actual_start_time: Option<DateTime<Utc>>,
    pub completed_time: Option<DateTime<Utc>>,
    pub total_rounds: i64,
    pub current_round: i64,
    pub current_pick: i64,
    pub pick_time_limit_seconds: i64,
    pub current_pick_deadline: Option<DateTime<Utc>>,
    pub current_team_on_clock: Option<i64>,
    pub current_team_name: Option<String>,
    pub snake_draft: bool,
    pub allow_trading: bool,
    pub total_picks: i64,
    pub picks_made: i64,
}

impl DraftResponse {
    pub fn new(draft: Draft, current_team_name: Option<String>, total_picks: i64, picks_made: i64) -> Self {
        Self {
            id: draft.id,
            league_id: draft.league_id,
            name: draft.name,
            mode: draft.mode,
            status: draft.status,
            scheduled_start_time: draft.scheduled_start_time,
            actual_start_time: draft.actual_start_time,
            completed_time: draft.completed_time,
            total_rounds: draft.total_rounds,
            current_round: draft.current_round,
            current_pick: draft.current_pick,
            pick_time_limit_seconds: draft.pick_time_limit_seconds,
            current_pick_deadline: draft.current_pick_deadline,
            current_team_on_clock: draft.current_team_on_clock,
            current_team_name,
            snake_draft: draft.snake_draft,
            allow_trading: draft.allow_trading,
            total_picks,
            picks_made,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DraftSummary {
    pub id: i64,
    pub name: String,
    pub mode: DraftMode,
    pub status: DraftStatus,
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub total_rounds: i64,
}
