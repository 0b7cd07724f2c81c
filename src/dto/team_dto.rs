use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct League {
    pub id: i64,
    pub name: String,
    pub max_teams: i64,
    pub roster_size: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateLeague {
    pub name: String,
    pub max_teams: Option<i64>,
    pub roster_size: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Team {
    pub id: i64,
    pub league_id: i64,
    pub name: String,
    pub abbreviation: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTeam {
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
}
