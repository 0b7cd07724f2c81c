//! Pick order construction.
//!
//! Turns a base team ordering into one slot per (round, team), reversing even
//! rounds for snake drafts and applying traded-pick overrides.

use std::collections::HashMap;

use crate::dto::pick_dto::OrderPosition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSlot {
    pub round: i64,
    pub pick_number: i64,
    pub position_in_round: i64,
    pub team_id: i64,
    /// Set when `team_id` came from a traded-pick override.
    pub original_team_id: Option<i64>,
}

/// Base team order from submitted positions. Sorting is stable, so entries that
/// share a position keep the order they were submitted in.
pub fn base_order(entries: &[OrderPosition]) -> Vec<i64> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|entry| entry.position);
    sorted.into_iter().map(|entry| entry.team_id).collect()
}

/// Build every slot of the draft.
///
/// `traded` maps an overall pick number to the team that now owns it. An
/// override naming the slot's own team is ignored.
pub fn build_order(
    teams: &[i64],
    total_rounds: i64,
    snake_draft: bool,
    traded: &HashMap<i64, i64>,
) -> Vec<OrderSlot> {
    if teams.is_empty() || total_rounds <= 0 {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut pick_number = 1;

    for round in 1..=total_rounds {
        let reversed = snake_draft && round % 2 == 0;
        let round_order: Box<dyn Iterator<Item = &i64>> = if reversed {
            Box::new(teams.iter().rev())
        } else {
            Box::new(teams.iter())
        };

        for (idx, &base_team) in round_order.enumerate() {
            let (team_id, original_team_id) = match traded.get(&pick_number) {
                Some(&new_team) if new_team != base_team => (new_team, Some(base_team)),
                _ => (base_team, None),
            };

            slots.push(OrderSlot {
                round,
                pick_number,
                position_in_round: idx as i64 + 1,
                team_id,
                original_team_id,
            });
            pick_number += 1;
        }
    }

    slots
}
