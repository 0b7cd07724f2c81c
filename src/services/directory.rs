use sqlx::SqlitePool;

use crate::{
    dto::{
        player_dto::{CreatePlayer, Player},
        team_dto::{CreateLeague, League, Team},
    },
    error::DraftError,
};

const PLAYER_COLUMNS: &str = "id, first_name, last_name, primary_position, mlb_team, draft_rank";

/// Lookups over the league, team and player records a draft refers to.
#[derive(Clone)]
pub struct LeagueDirectory {
    pool: SqlitePool,
}

impl LeagueDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn league(&self, league_id: i64) -> Result<Option<League>, DraftError> {
        let league = sqlx::query_as::<_, League>(
            "SELECT id, name, max_teams, roster_size FROM leagues WHERE id = ?",
        )
        .bind(league_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(league)
    }

    pub async fn create_league(&self, payload: &CreateLeague) -> Result<League, DraftError> {
        let league = sqlx::query_as::<_, League>(
            r#"
            INSERT INTO leagues (name, max_teams, roster_size)
            VALUES (?, ?, ?)
            RETURNING id, name, max_teams, roster_size
            "#,
        )
        .bind(&payload.name)
        .bind(payload.max_teams.unwrap_or(30))
        .bind(payload.roster_size.unwrap_or(40))
        .fetch_one(&self.pool)
        .await?;

        Ok(league)
    }

    pub async fn team(&self, league_id: i64, team_id: i64) -> Result<Option<Team>, DraftError> {
        let team = sqlx::query_as::<_, Team>(
            "SELECT id, league_id, name, abbreviation FROM teams WHERE id = ? AND league_id = ?",
        )
        .bind(team_id)
        .bind(league_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(team)
    }

    pub async fn league_teams(&self, league_id: i64) -> Result<Vec<Team>, DraftError> {
        let teams = sqlx::query_as::<_, Team>(
            "SELECT id, league_id, name, abbreviation FROM teams WHERE league_id = ? ORDER BY id",
        )
        .bind(league_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn create_team(
        &self,
        league_id: i64,
        name: &str,
        abbreviation: &str,
    ) -> Result<Team, DraftError> {
        let created = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (league_id, name, abbreviation)
            VALUES (?, ?, ?)
            RETURNING id, league_id, name, abbreviation
            "#,
        )
        .bind(league_id)
        .bind(name)
        .bind(abbreviation)
        .fetch_one(&self.pool)
        .await;

        match created {
            Ok(team) => Ok(team),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(DraftError::Conflict(
                format!("a team named '{}' already exists in this league", name),
            )),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn player(&self, player_id: i64) -> Result<Option<Player>, DraftError> {
        let player = sqlx::query_as::<_, Player>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?"
        ))
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(player)
    }

    pub async fn create_player(&self, payload: &CreatePlayer) -> Result<Player, DraftError> {
        let player = sqlx::query_as::<_, Player>(&format!(
            r#"
            INSERT INTO players (first_name, last_name, primary_position, mlb_team, draft_rank)
            VALUES (?, ?, ?, ?, ?)
            RETURNING {PLAYER_COLUMNS}
            "#
        ))
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.primary_position)
        .bind(&payload.mlb_team)
        .bind(payload.draft_rank)
        .fetch_one(&self.pool)
        .await?;

        Ok(player)
    }

    /// Players not yet taken in `draft_id`, best ranked first.
    pub async fn available_players(
        &self,
        draft_id: i64,
        limit: i64,
    ) -> Result<Vec<Player>, DraftError> {
        let players = sqlx::query_as::<_, Player>(&format!(
            r#"
            SELECT {PLAYER_COLUMNS}
            FROM players
            WHERE id NOT IN (
                SELECT player_id FROM draft_picks
                WHERE draft_id = ? AND player_id IS NOT NULL
            )
            ORDER BY draft_rank IS NULL, draft_rank, id
            LIMIT ?
            "#
        ))
        .bind(draft_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(players)
    }
}
