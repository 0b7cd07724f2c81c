//! In-memory view of a draft's pick slots.

use chrono::{DateTime, Utc};

use crate::dto::pick_dto::DraftPick;

/// Ordered slots of one draft, keyed by overall pick number.
///
/// The ledger reports what is there; whether a fill is allowed is decided by
/// the arbiter before it gets here.
#[derive(Debug, Clone, Default)]
pub struct PickLedger {
    slots: Vec<DraftPick>,
}

impl PickLedger {
    pub fn new(mut slots: Vec<DraftPick>) -> Self {
        slots.sort_by_key(|slot| slot.overall_pick_number);
        Self { slots }
    }

    pub fn slots(&self) -> &[DraftPick] {
        &self.slots
    }

    pub fn slot(&self, pick_number: i64) -> Option<&DraftPick> {
        self.position(pick_number).map(|idx| &self.slots[idx])
    }

    /// First open slot with a pick number strictly greater than `pick_number`.
    pub fn next_open_after(&self, pick_number: i64) -> Option<&DraftPick> {
        self.slots
            .iter()
            .find(|slot| slot.overall_pick_number > pick_number && slot.is_open())
    }

    pub fn contains_player(&self, player_id: i64) -> bool {
        self.slots.iter().any(|slot| slot.player_id == Some(player_id))
    }

    pub fn drafted_players(&self) -> impl Iterator<Item = i64> + '_ {
        self.slots.iter().filter_map(|slot| slot.player_id)
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_open()).count()
    }

    /// Fill an open slot and return a copy of it. Returns `None` when there is
    /// no slot at `pick_number` or it is already filled.
    pub fn fill(
        &mut self,
        pick_number: i64,
        player_id: i64,
        at: DateTime<Utc>,
        is_auto_pick: bool,
    ) -> Option<DraftPick> {
        let idx = self.position(pick_number)?;
        let slot = &mut self.slots[idx];
        if !slot.is_open() {
            return None;
        }

        slot.player_id = Some(player_id);
        slot.pick_made_at = Some(at);
        slot.is_auto_pick = is_auto_pick;
        Some(slot.clone())
    }

    fn position(&self, pick_number: i64) -> Option<usize> {
        self.slots
            .binary_search_by_key(&pick_number, |slot| slot.overall_pick_number)
            .ok()
    }
}

#[cfg(test)]
pub(crate) fn open_slot(draft_id: i64, round: i64, pick_number: i64, team_id: i64) -> DraftPick {
    DraftPick {
        id: pick_number,
        draft_id,
        round,
        overall_pick_number: pick_number,
        team_id,
        original_team_id: None,
        player_id: None,
        pick_made_at: None,
        is_auto_pick: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> PickLedger {
        // Deliberately unsorted.
        PickLedger::new(vec![
            open_slot(1, 2, 3, 20),
            open_slot(1, 1, 1, 10),
            open_slot(1, 2, 4, 10),
            open_slot(1, 1, 2, 20),
        ])
    }

    #[test]
    fn slots_are_ordered_and_addressable() {
        let ledger = ledger();
        let numbers: Vec<i64> = ledger.slots().iter().map(|s| s.overall_pick_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(ledger.slot(3).map(|s| s.team_id), Some(20));
        assert!(ledger.slot(5).is_none());
    }

    #[test]
    fn fill_sets_player_once() {
        let mut ledger = ledger();
        let now = Utc::now();

        let filled = ledger.fill(1, 99, now, false).unwrap();
        assert_eq!(filled.player_id, Some(99));
        assert_eq!(filled.pick_made_at, Some(now));
        assert!(ledger.contains_player(99));
        assert_eq!(ledger.filled(), 1);

        assert!(ledger.fill(1, 100, now, false).is_none());
        assert_eq!(ledger.slot(1).unwrap().player_id, Some(99));
        assert!(ledger.fill(42, 100, now, false).is_none());
    }

    #[test]
    fn next_open_skips_filled_slots() {
        let mut ledger = ledger();
        let now = Utc::now();
        ledger.fill(2, 7, now, true);

        assert_eq!(ledger.next_open_after(1).map(|s| s.overall_pick_number), Some(3));
        assert_eq!(ledger.next_open_after(0).map(|s| s.overall_pick_number), Some(1));
        assert!(ledger.next_open_after(4).is_none());
        assert_eq!(ledger.drafted_players().collect::<Vec<_>>(), vec![7]);
    }
}
