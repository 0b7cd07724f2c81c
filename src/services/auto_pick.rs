use std::collections::HashSet;

use async_trait::async_trait;

use crate::{
    draft::ledger::PickLedger,
    dto::draft_dto::Draft,
    error::DraftError,
    services::directory::LeagueDirectory,
};

/// Chooses the player taken on a team's behalf when its pick clock runs out.
#[async_trait]
pub trait AutoPickPolicy: Send + Sync {
    async fn choose(
        &self,
        draft: &Draft,
        team_id: i64,
        ledger: &PickLedger,
    ) -> Result<Option<i64>, DraftError>;
}

/// Takes the best ranked player still on the board.
pub struct BestAvailable {
    directory: LeagueDirectory,
}

impl BestAvailable {
    pub fn new(directory: LeagueDirectory) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl AutoPickPolicy for BestAvailable {
    async fn choose(
        &self,
        draft: &Draft,
        _team_id: i64,
        ledger: &PickLedger,
    ) -> Result<Option<i64>, DraftError> {
        let taken: HashSet<i64> = ledger.drafted_players().collect();
        let candidates = self
            .directory
            .available_players(draft.id, taken.len() as i64 + 1)
            .await?;

        Ok(candidates
            .into_iter()
            .map(|player| player.id)
            .find(|id| !taken.contains(id)))
    }
}
