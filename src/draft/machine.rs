//! Draft lifecycle transitions.
//!
//! `Scheduled -> InProgress <-> Paused -> Completed`, with `Cancelled`
//! reachable from any non-terminal status. Transitions mutate the draft (and
//! ledger) in memory only; the engine persists the result.

use chrono::{DateTime, Duration, Utc};

use crate::{
    draft::ledger::PickLedger,
    dto::{
        draft_dto::{Draft, DraftStatus},
        pick_dto::{DraftOrderEntry, DraftPick},
    },
    error::DraftError,
};

impl Draft {
    pub fn deadline_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::seconds(self.pick_time_limit_seconds)
    }

    /// Order and settings may only change before the draft starts.
    pub fn ensure_scheduled(&self, message: &str) -> Result<(), DraftError> {
        if self.status != DraftStatus::Scheduled {
            return Err(DraftError::InvalidState(message.to_string()));
        }
        Ok(())
    }

    /// Put the first slot's team on the clock. Returns that team.
    pub fn start(
        &mut self,
        first_entry: Option<&DraftOrderEntry>,
        now: DateTime<Utc>,
    ) -> Result<i64, DraftError> {
        self.ensure_scheduled("draft is not in scheduled status")?;
        let first = first_entry.ok_or(DraftError::OrderNotSet)?;

        self.status = DraftStatus::InProgress;
        self.current_round = 1;
        self.current_pick = 1;
        self.current_team_on_clock = Some(first.team_id);
        self.current_pick_deadline = Some(self.deadline_from(now));
        self.actual_start_time = Some(now);

        Ok(first.team_id)
    }

    /// Fill the current slot and move the clock to the next open one, or
    /// complete the draft when none is left. Returns the filled slot.
    pub fn record_pick(
        &mut self,
        ledger: &mut PickLedger,
        player_id: i64,
        now: DateTime<Utc>,
        is_auto_pick: bool,
    ) -> Result<DraftPick, DraftError> {
        if self.status != DraftStatus::InProgress {
            return Err(DraftError::InvalidState("draft is not in progress".to_string()));
        }

        let filled = ledger
            .fill(self.current_pick, player_id, now, is_auto_pick)
            .ok_or_else(|| {
                DraftError::Invariant(format!(
                    "draft {} has no open slot at pick {}",
                    self.id, self.current_pick
                ))
            })?;

        match ledger.next_open_after(self.current_pick) {
            Some(next) => {
                self.current_pick = next.overall_pick_number;
                self.current_round = next.round;
                self.current_team_on_clock = Some(next.team_id);
                self.current_pick_deadline = Some(self.deadline_from(now));
            }
            None => {
                self.status = DraftStatus::Completed;
                self.completed_time = Some(now);
                self.current_team_on_clock = None;
                self.current_pick_deadline = None;
            }
        }

        Ok(filled)
    }

    /// Stop the clock. Round, pick and team on the clock are kept for resume.
    pub fn pause(&mut self) -> Result<(), DraftError> {
        if self.status != DraftStatus::InProgress {
            return Err(DraftError::InvalidState("draft is not in progress".to_string()));
        }

        self.status = DraftStatus::Paused;
        self.current_pick_deadline = None;
        Ok(())
    }

    /// Restart the clock for the team already on it. Returns that team.
    pub fn resume(&mut self, now: DateTime<Utc>) -> Result<i64, DraftError> {
        if self.status != DraftStatus::Paused {
            return Err(DraftError::InvalidState("draft is not paused".to_string()));
        }
        let team_id = self.current_team_on_clock.ok_or_else(|| {
            DraftError::Invariant(format!("paused draft {} has no team on the clock", self.id))
        })?;

        self.status = DraftStatus::InProgress;
        self.current_pick_deadline = Some(self.deadline_from(now));
        Ok(team_id)
    }

    pub fn cancel(&mut self) -> Result<(), DraftError> {
        if self.status.is_terminal() {
            return Err(DraftError::InvalidState(
                "draft has already finished".to_string(),
            ));
        }

        self.status = DraftStatus::Cancelled;
        self.current_team_on_clock = None;
        self.current_pick_deadline = None;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn scheduled_draft(pick_time_limit_seconds: i64) -> Draft {
    use crate::dto::draft_dto::DraftMode;

    Draft {
        id: 1,
        league_id: 1,
        name: "Spring draft".to_string(),
        mode: DraftMode::Synchronous,
        status: DraftStatus::Scheduled,
        total_rounds: 2,
        current_round: 1,
        current_pick: 1,
        current_team_on_clock: None,
        current_pick_deadline: None,
        pick_time_limit_seconds,
        snake_draft: true,
        allow_trading: true,
        scheduled_start_time: None,
        actual_start_time: None,
        completed_time: None,
    }
}
