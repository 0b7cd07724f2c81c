use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Audit-trail row; one is written alongside every committed pick.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub league_id: i64,
    pub team_id: i64,
    pub player_id: i64,
    pub draft_id: Option<i64>,
    pub draft_round: Option<i64>,
    pub draft_pick_number: Option<i64>,
    pub transaction_type: String,
    pub transaction_date: DateTime<Utc>,
    pub notes: Option<String>,
}
