use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One ledger slot. Empty until `player_id` is set, which happens exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DraftPick {
    pub id: i64,
    pub draft_id: i64,
    pub round: i64,
    pub overall_pick_number: i64,
    pub team_id: i64,
    pub original_team_id: Option<i64>,
    pub player_id: Option<i64>,
    pub pick_made_at: Option<DateTime<Utc>>,
    pub is_auto_pick: bool,
}

impl DraftPick {
    pub fn is_open(&self) -> bool {
        self.player_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DraftOrderEntry {
    pub id: i64,
    pub draft_id: i64,
    pub round: i64,
    pub pick_number: i64,
    pub position_in_round: i64,
    pub team_id: i64,
    pub original_team_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MakePick {
    pub team_id: i64,
    pub player_id: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderPosition {
    pub team_id: i64,
    pub position: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TradedPick {
    pub pick_number: i64,
    pub team_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetDraftOrder {
    #[serde(default)]
    pub order: Vec<OrderPosition>,
    #[serde(default)]
    pub traded_picks: Vec<TradedPick>,
    #[serde(default)]
    pub randomize: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradePick {
    pub team_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DraftPickResponse {
    pub id: i64,
    pub round: i64,
    pub overall_pick_number: i64,
    pub team_id: i64,
    pub team_name: String,
    pub player_id: Option<i64>,
    pub player_name: Option<String>,
    pub player_position: Option<String>,
    pub pick_made_at: Option<DateTime<Utc>>,
    pub is_auto_pick: bool,
    pub original_team_id: Option<i64>,
    pub original_team_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DraftOrderResponse {
    pub team_id: i64,
    pub team_name: String,
    pub round: i64,
    pub pick_number: i64,
    pub position_in_round: i64,
    pub original_team_id: Option<i64>,
    pub original_team_name: Option<String>,
}
