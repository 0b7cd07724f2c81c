use sqlx::{Executor, Sqlite, SqlitePool};

use crate::{
    draft::{ledger::PickLedger, order::OrderSlot},
    dto::{
        draft_dto::{CreateDraft, Draft, DraftStatus, DraftSummary},
        pick_dto::{DraftOrderEntry, DraftOrderResponse, DraftPick, DraftPickResponse},
        transaction_dto::Transaction,
    },
    error::DraftError,
};

const DRAFT_COLUMNS: &str = r#"
    id, league_id, name, mode, status, total_rounds, current_round, current_pick,
    current_team_on_clock, current_pick_deadline, pick_time_limit_seconds,
    snake_draft, allow_trading, scheduled_start_time, actual_start_time, completed_time
"#;

const PICK_RESPONSE_SELECT: &str = r#"
    SELECT p.id, p.round, p.overall_pick_number, p.team_id, t.name AS team_name,
           p.player_id,
           CASE WHEN pl.id IS NULL THEN NULL
                ELSE pl.first_name || ' ' || pl.last_name END AS player_name,
           pl.primary_position AS player_position,
           p.pick_made_at, p.is_auto_pick, p.original_team_id,
           ot.name AS original_team_name
    FROM draft_picks p
    JOIN teams t ON t.id = p.team_id
    LEFT JOIN players pl ON pl.id = p.player_id
    LEFT JOIN teams ot ON ot.id = p.original_team_id
"#;

/// Persistence for drafts, their order, their pick ledger and the audit trail.
#[derive(Clone)]
pub struct DraftStore {
    pool: SqlitePool,
}

impl DraftStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert_draft(
        &self,
        league_id: i64,
        payload: &CreateDraft,
    ) -> Result<Draft, DraftError> {
        let draft = sqlx::query_as::<_, Draft>(&format!(
            r#"
            INSERT INTO drafts (
                league_id, name, mode, status, total_rounds, current_round, current_pick,
                pick_time_limit_seconds, snake_draft, allow_trading, scheduled_start_time
            )
            VALUES (?, ?, ?, ?, ?, 1, 1, ?, ?, ?, ?)
            RETURNING {DRAFT_COLUMNS}
            "#
        ))
        .bind(league_id)
        .bind(&payload.name)
        .bind(payload.mode)
        .bind(DraftStatus::Scheduled)
        .bind(payload.total_rounds)
        .bind(payload.pick_time_limit_seconds)
        .bind(payload.snake_draft)
        .bind(payload.allow_trading)
        .bind(payload.scheduled_start_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(draft)
    }

    pub async fn find_draft(&self, league_id: i64, draft_id: i64) -> Result<Option<Draft>, DraftError> {
        let draft = sqlx::query_as::<_, Draft>(&format!(
            "SELECT {DRAFT_COLUMNS} FROM drafts WHERE id = ? AND league_id = ?"
        ))
        .bind(draft_id)
        .bind(league_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(draft)
    }

    pub async fn list_drafts(&self, league_id: i64) -> Result<Vec<DraftSummary>, DraftError> {
        let drafts = sqlx::query_as::<_, DraftSummary>(
            r#"
            SELECT id, name, mode, status, scheduled_start_time, total_rounds
            FROM drafts
            WHERE league_id = ?
            ORDER BY scheduled_start_time IS NULL, scheduled_start_time DESC, id DESC
            "#,
        )
        .bind(league_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(drafts)
    }

    pub async fn in_progress_drafts(&self) -> Result<Vec<Draft>, DraftError> {
        let drafts = sqlx::query_as::<_, Draft>(&format!(
            "SELECT {DRAFT_COLUMNS} FROM drafts WHERE status = ? ORDER BY id"
        ))
        .bind(DraftStatus::InProgress)
        .fetch_all(&self.pool)
        .await?;

        Ok(drafts)
    }

    pub async fn save_draft(&self, draft: &Draft) -> Result<(), DraftError> {
        write_draft(&self.pool, draft).await
    }

    /// `(total slots, filled slots)` for a draft.
    pub async fn pick_counts(&self, draft_id: i64) -> Result<(i64, i64), DraftError> {
        let counts: (i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*), COUNT(player_id)
            FROM draft_picks
            WHERE draft_id = ?
            "#,
        )
        .bind(draft_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(counts)
    }

    pub async fn load_ledger(&self, draft_id: i64) -> Result<PickLedger, DraftError> {
        let slots = sqlx::query_as::<_, DraftPick>(
            r#"
            SELECT id, draft_id, round, overall_pick_number, team_id, original_team_id,
                   player_id, pick_made_at, is_auto_pick
            FROM draft_picks
            WHERE draft_id = ?
            ORDER BY overall_pick_number
            "#,
        )
        .bind(draft_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(PickLedger::new(slots))
    }

    pub async fn first_order_entry(&self, draft_id: i64) -> Result<Option<DraftOrderEntry>, DraftError> {
        let entry = sqlx::query_as::<_, DraftOrderEntry>(
            r#"
            SELECT id, draft_id, round, pick_number, position_in_round, team_id, original_team_id
            FROM draft_order
            WHERE draft_id = ?
            ORDER BY pick_number
            LIMIT 1
            "#,
        )
        .bind(draft_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    pub async fn order_responses(&self, draft_id: i64) -> Result<Vec<DraftOrderResponse>, DraftError> {
        let order = sqlx::query_as::<_, DraftOrderResponse>(
            r#"
            SELECT o.team_id, t.name AS team_name, o.round, o.pick_number,
                   o.position_in_round, o.original_team_id, ot.name AS original_team_name
            FROM draft_order o
            JOIN teams t ON t.id = o.team_id
            LEFT JOIN teams ot ON ot.id = o.original_team_id
            WHERE o.draft_id = ?
            ORDER BY o.pick_number
            "#,
        )
        .bind(draft_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(order)
    }

    /// Delete the draft's order and ledger and write `slots` in their place,
    /// one order entry and one empty pick per slot.
    pub async fn replace_order(&self, draft_id: i64, slots: &[OrderSlot]) -> Result<(), DraftError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM draft_order WHERE draft_id = ?")
            .bind(draft_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM draft_picks WHERE draft_id = ?")
            .bind(draft_id)
            .execute(&mut *tx)
            .await?;

        for slot in slots {
            sqlx::query(
                r#"
                INSERT INTO draft_order (
                    draft_id, round, pick_number, position_in_round, team_id, original_team_id
                )
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(draft_id)
            .bind(slot.round)
            .bind(slot.pick_number)
            .bind(slot.position_in_round)
            .bind(slot.team_id)
            .bind(slot.original_team_id)
            .execute(&mut *tx)
            .await?;

            sqlx::query(
                r#"
                INSERT INTO draft_picks (
                    draft_id, round, overall_pick_number, team_id, original_team_id
                )
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(draft_id)
            .bind(slot.round)
            .bind(slot.pick_number)
            .bind(slot.team_id)
            .bind(slot.original_team_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Persist a pick in one transaction: fill the ledger slot, advance the
    /// draft and append the audit row. The fill only applies to an empty slot,
    /// so a pick committed elsewhere first surfaces as a conflict.
    pub async fn commit_pick(&self, draft: &Draft, pick: &DraftPick) -> Result<(), DraftError> {
        let player_id = pick.player_id.ok_or_else(|| {
            DraftError::Invariant(format!(
                "pick {} of draft {} was committed without a player",
                pick.overall_pick_number, draft.id
            ))
        })?;

        let mut tx = self.pool.begin().await?;

        let filled = sqlx::query(
            r#"
            UPDATE draft_picks
            SET player_id = ?, pick_made_at = ?, is_auto_pick = ?
            WHERE draft_id = ? AND overall_pick_number = ? AND player_id IS NULL
            "#,
        )
        .bind(player_id)
        .bind(pick.pick_made_at)
        .bind(pick.is_auto_pick)
        .bind(draft.id)
        .bind(pick.overall_pick_number)
        .execute(&mut *tx)
        .await;

        let filled = match filled {
            Ok(result) => result,
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(DraftError::Conflict("player already drafted".to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        if filled.rows_affected() != 1 {
            return Err(DraftError::Conflict(format!(
                "pick {} has already been made",
                pick.overall_pick_number
            )));
        }

        write_draft(&mut *tx, draft).await?;

        let notes = if pick.is_auto_pick {
            format!("auto-pick, round {} pick {}", pick.round, pick.overall_pick_number)
        } else {
            format!("round {} pick {}", pick.round, pick.overall_pick_number)
        };

        sqlx::query(
            r#"
            INSERT INTO transactions (
                league_id, team_id, player_id, draft_id, draft_round, draft_pick_number,
                transaction_type, transaction_date, notes
            )
            VALUES (?, ?, ?, ?, ?, ?, 'draft', ?, ?)
            "#,
        )
        .bind(draft.league_id)
        .bind(pick.team_id)
        .bind(player_id)
        .bind(draft.id)
        .bind(pick.round)
        .bind(pick.overall_pick_number)
        .bind(pick.pick_made_at)
        .bind(notes)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Move an open slot, and its order entry, to `team_id`.
    pub async fn reassign_pick(
        &self,
        draft_id: i64,
        pick_number: i64,
        team_id: i64,
        original_team_id: Option<i64>,
    ) -> Result<(), DraftError> {
        let mut tx = self.pool.begin().await?;

        let moved = sqlx::query(
            r#"
            UPDATE draft_picks
            SET team_id = ?, original_team_id = ?
            WHERE draft_id = ? AND overall_pick_number = ? AND player_id IS NULL
            "#,
        )
        .bind(team_id)
        .bind(original_team_id)
        .bind(draft_id)
        .bind(pick_number)
        .execute(&mut *tx)
        .await?;

        if moved.rows_affected() != 1 {
            return Err(DraftError::InvalidState(format!(
                "pick {} has already been made",
                pick_number
            )));
        }

        sqlx::query(
            r#"
            UPDATE draft_order
            SET team_id = ?, original_team_id = ?
            WHERE draft_id = ? AND pick_number = ?
            "#,
        )
        .bind(team_id)
        .bind(original_team_id)
        .bind(draft_id)
        .bind(pick_number)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn pick_responses(&self, draft_id: i64) -> Result<Vec<DraftPickResponse>, DraftError> {
        let picks = sqlx::query_as::<_, DraftPickResponse>(&format!(
            "{PICK_RESPONSE_SELECT} WHERE p.draft_id = ? ORDER BY p.overall_pick_number"
        ))
        .bind(draft_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(picks)
    }

    pub async fn pick_response(
        &self,
        draft_id: i64,
        pick_number: i64,
    ) -> Result<Option<DraftPickResponse>, DraftError> {
        let pick = sqlx::query_as::<_, DraftPickResponse>(&format!(
            "{PICK_RESPONSE_SELECT} WHERE p.draft_id = ? AND p.overall_pick_number = ?"
        ))
        .bind(draft_id)
        .bind(pick_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(pick)
    }

    pub async fn team_name(&self, team_id: i64) -> Result<Option<String>, DraftError> {
        let name = sqlx::query_scalar::<_, String>("SELECT name FROM teams WHERE id = ?")
            .bind(team_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(name)
    }

    pub async fn league_transactions(&self, league_id: i64) -> Result<Vec<Transaction>, DraftError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, league_id, team_id, player_id, draft_id, draft_round, draft_pick_number,
                   transaction_type, transaction_date, notes
            FROM transactions
            WHERE league_id = ?
            ORDER BY id
            "#,
        )
        .bind(league_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }
}

async fn write_draft<'e, E>(executor: E, draft: &Draft) -> Result<(), DraftError>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        UPDATE drafts SET
            name = ?,
            status = ?,
            current_round = ?,
            current_pick = ?,
            current_team_on_clock = ?,
            current_pick_deadline = ?,
            pick_time_limit_seconds = ?,
            allow_trading = ?,
            scheduled_start_time = ?,
            actual_start_time = ?,
            completed_time = ?
        WHERE id = ?
        "#,
    )
    .bind(&draft.name)
    .bind(draft.status)
    .bind(draft.current_round)
    .bind(draft.current_pick)
    .bind(draft.current_team_on_clock)
    .bind(draft.current_pick_deadline)
    .bind(draft.pick_time_limit_seconds)
    .bind(draft.allow_trading)
    .bind(draft.scheduled_start_time)
    .bind(draft.actual_start_time)
    .bind(draft.completed_time)
    .bind(draft.id)
    .execute(executor)
    .await?;

    Ok(())
}
