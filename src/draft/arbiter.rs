//! Admission checks for a pick attempt.

use crate::{
    draft::ledger::PickLedger,
    dto::draft_dto::{Draft, DraftStatus},
    error::DraftError,
};

#[derive(Debug, Clone, Copy)]
pub struct PickAttempt {
    pub team_id: i64,
    pub player_id: i64,
    /// Whether the player directory knows `player_id`.
    pub player_known: bool,
}

/// Run the checks in order; the first failure is returned and nothing is
/// mutated. On success the draft the pick applies to is handed back.
pub fn admit<'a>(
    draft: Option<&'a Draft>,
    ledger: &PickLedger,
    attempt: &PickAttempt,
) -> Result<&'a Draft, DraftError> {
    let draft = draft.ok_or_else(|| DraftError::NotFound("draft not found".to_string()))?;

    if draft.status != DraftStatus::InProgress {
        return Err(DraftError::InvalidState("draft is not in progress".to_string()));
    }

    if draft.current_team_on_clock != Some(attempt.team_id) {
        return Err(DraftError::Forbidden("not your turn".to_string()));
    }

    if !attempt.player_known {
        return Err(DraftError::NotFound("player not found".to_string()));
    }

    if ledger.contains_player(attempt.player_id) {
        return Err(DraftError::Conflict("player already drafted".to_string()));
    }

    match ledger.slot(draft.current_pick) {
        Some(slot) if slot.is_open() => Ok(draft),
        Some(_) => Err(DraftError::Invariant(format!(
            "draft {} is on pick {} but that slot is already filled",
            draft.id, draft.current_pick
        ))),
        None => Err(DraftError::Invariant(format!(
            "draft {} is on pick {} but the ledger has no such slot",
            draft.id, draft.current_pick
        ))),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{
        draft::{ledger::open_slot, machine::scheduled_draft},
        dto::pick_dto::DraftOrderEntry,
    };

    const A: i64 = 10;
    const B: i64 = 20;

    fn running() -> (Draft, PickLedger) {
        let mut draft = scheduled_draft(60);
        let first = DraftOrderEntry {
            id: 1,
            draft_id: 1,
            round: 1,
            pick_number: 1,
            position_in_round: 1,
            team_id: A,
            original_team_id: None,
        };
        draft.start(Some(&first), Utc::now()).unwrap();
        let ledger = PickLedger::new(vec![open_slot(1, 1, 1, A), open_slot(1, 1, 2, B)]);
        (draft, ledger)
    }

    fn attempt(team_id: i64, player_id: i64) -> PickAttempt {
        PickAttempt {
            team_id,
            player_id,
            player_known: true,
        }
    }

    #[test]
    fn on_clock_team_is_admitted() {
        let (draft, ledger) = running();
        let admitted = admit(Some(&draft), &ledger, &attempt(A, 1)).unwrap();
        assert_eq!(admitted.id, draft.id);
    }

    #[test]
    fn missing_draft_is_not_found() {
        let ledger = PickLedger::default();
        let err = admit(None, &ledger, &attempt(A, 1)).unwrap_err();
        assert!(matches!(err, DraftError::NotFound(_)));
    }

    #[test]
    fn status_is_checked_before_turn() {
        let draft = scheduled_draft(60);
        let ledger = PickLedger::default();
        let err = admit(Some(&draft), &ledger, &attempt(B, 1)).unwrap_err();
        assert!(matches!(err, DraftError::InvalidState(_)));
    }

    #[test]
    fn wrong_team_is_forbidden() {
        let (draft, ledger) = running();
        let err = admit(Some(&draft), &ledger, &attempt(B, 1)).unwrap_err();
        assert!(matches!(err, DraftError::Forbidden(ref reason) if reason == "not your turn"));
    }

    #[test]
    fn unknown_player_is_not_found() {
        let (draft, ledger) = running();
        let unknown = PickAttempt {
            player_known: false,
            ..attempt(A, 1)
        };
        assert!(matches!(
            admit(Some(&draft), &ledger, &unknown),
            Err(DraftError::NotFound(_))
        ));
    }

    #[test]
    fn drafted_player_is_a_conflict() {
        let (draft, mut ledger) = running();
        ledger.fill(2, 55, Utc::now(), false);
        let err = admit(Some(&draft), &ledger, &attempt(A, 55)).unwrap_err();
        assert!(matches!(err, DraftError::Conflict(_)));
    }

    #[test]
    fn ledger_desync_is_an_invariant_violation() {
        let (mut draft, ledger) = running();
        draft.current_pick = 9;
        let err = admit(Some(&draft), &ledger, &attempt(A, 1)).unwrap_err();
        assert!(matches!(err, DraftError::Invariant(_)));

        let (draft, mut ledger) = running();
        ledger.fill(1, 77, Utc::now(), false);
        let err = admit(Some(&draft), &ledger, &attempt(A, 1)).unwrap_err();
        assert!(matches!(err, DraftError::Invariant(_)));
    }
}
