// SQLite pool setup and schema.

use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS leagues (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    max_teams   INTEGER NOT NULL DEFAULT 30,
    roster_size INTEGER NOT NULL DEFAULT 40
);

CREATE TABLE IF NOT EXISTS teams (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    league_id    INTEGER NOT NULL REFERENCES leagues(id) ON DELETE CASCADE,
    name         TEXT NOT NULL,
    abbreviation TEXT NOT NULL DEFAULT '',
    UNIQUE(league_id, name)
);

CREATE TABLE IF NOT EXISTS players (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name       TEXT NOT NULL,
    last_name        TEXT NOT NULL,
    primary_position TEXT NOT NULL,
    mlb_team         TEXT,
    draft_rank       INTEGER
);

CREATE TABLE IF NOT EXISTS drafts (
    id                      INTEGER PRIMARY KEY AUTOINCREMENT,
    league_id               INTEGER NOT NULL REFERENCES leagues(id) ON DELETE CASCADE,
    name                    TEXT NOT NULL,
    mode                    TEXT NOT NULL,
    status                  TEXT NOT NULL,
    total_rounds            INTEGER NOT NULL,
    current_round           INTEGER NOT NULL DEFAULT 1,
    current_pick            INTEGER NOT NULL DEFAULT 1,
    current_team_on_clock   INTEGER REFERENCES teams(id),
    current_pick_deadline   TEXT,
    pick_time_limit_seconds INTEGER NOT NULL,
    snake_draft             INTEGER NOT NULL,
    allow_trading           INTEGER NOT NULL,
    scheduled_start_time    TEXT,
    actual_start_time       TEXT,
    completed_time          TEXT
);

CREATE TABLE IF NOT EXISTS draft_order (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    draft_id          INTEGER NOT NULL REFERENCES drafts(id) ON DELETE CASCADE,
    round             INTEGER NOT NULL,
    pick_number       INTEGER NOT NULL,
    position_in_round INTEGER NOT NULL,
    team_id           INTEGER NOT NULL REFERENCES teams(id),
    original_team_id  INTEGER REFERENCES teams(id),
    UNIQUE(draft_id, pick_number)
);

CREATE TABLE IF NOT EXISTS draft_picks (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    draft_id            INTEGER NOT NULL REFERENCES drafts(id) ON DELETE CASCADE,
    round               INTEGER NOT NULL,
    overall_pick_number INTEGER NOT NULL,
    team_id             INTEGER NOT NULL REFERENCES teams(id),
    original_team_id    INTEGER REFERENCES teams(id),
    player_id           INTEGER REFERENCES players(id),
    pick_made_at        TEXT,
    is_auto_pick        INTEGER NOT NULL DEFAULT 0,
    UNIQUE(draft_id, overall_pick_number),
    UNIQUE(draft_id, player_id)
);

CREATE TABLE IF NOT EXISTS transactions (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    league_id         INTEGER NOT NULL REFERENCES leagues(id) ON DELETE CASCADE,
    team_id           INTEGER NOT NULL REFERENCES teams(id),
    player_id         INTEGER NOT NULL REFERENCES players(id),
    draft_id          INTEGER REFERENCES drafts(id) ON DELETE SET NULL,
    draft_round       INTEGER,
    draft_pick_number INTEGER,
    transaction_type  TEXT NOT NULL,
    transaction_date  TEXT NOT NULL,
    notes             TEXT
);

CREATE INDEX IF NOT EXISTS idx_drafts_league_id ON drafts(league_id);
CREATE INDEX IF NOT EXISTS idx_transactions_league_id ON transactions(league_id);
"#;

/// Open a pool against `url`, creating the database file if needed.
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Single-connection in-memory database with the schema applied. The
/// connection is never recycled, since closing it would drop the data.
pub async fn memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;
    Ok(pool)
}
