use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::pick_dto::DraftPickResponse;

/// Real-time events pushed to draft observers, serialized as
/// `{"type": "pick_made", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DraftEvent {
    DraftStarted {
        draft_id: i64,
        first_team_id: i64,
        pick_deadline: DateTime<Utc>,
    },
    PickMade {
        draft_id: i64,
        pick: DraftPickResponse,
        next_team_id: Option<i64>,
        next_pick_deadline: Option<DateTime<Utc>>,
        current_round: i64,
        current_pick: i64,
    },
    TimerUpdate {
        draft_id: i64,
        seconds_remaining: i64,
    },
    DraftPaused {
        draft_id: i64,
        reason: String,
    },
    DraftResumed {
        draft_id: i64,
        current_team_id: i64,
        pick_deadline: DateTime<Utc>,
    },
    DraftCompleted {
        draft_id: i64,
        completed_time: DateTime<Utc>,
    },
}
