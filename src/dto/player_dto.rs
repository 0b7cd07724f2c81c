use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub primary_position: String,
    pub mlb_team: Option<String>,
    /// Lower is better; unranked players sort after every ranked one.
    pub draft_rank: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreatePlayer {
    pub first_name: String,
    pub last_name: String,
    pub primary_position: String,
    #[serde(default)]
    pub mlb_team: Option<String>,
    #[serde(default)]
    pub draft_rank: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct AvailablePlayersQuery {
    pub limit: Option<i64>,
}
