use std::{
    collections::{HashMap, HashSet},
    future::Future,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use chrono::{DateTime, Utc};
use rand::{rng, seq::SliceRandom};
use tokio::{sync::Mutex as AsyncMutex, time::MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::{
    draft::{
        arbiter::{self, PickAttempt},
        ledger::PickLedger,
        order,
    },
    dto::{
        draft_dto::{CreateDraft, Draft, DraftResponse, DraftStatus, DraftSummary, UpdateDraft},
        event_dto::DraftEvent,
        pick_dto::{DraftOrderResponse, DraftPickResponse, MakePick, SetDraftOrder, TradePick},
        player_dto::Player,
        transaction_dto::Transaction,
    },
    error::DraftError,
    services::{
        auto_pick::AutoPickPolicy, directory::LeagueDirectory, notifier::DraftPublisher,
        store::DraftStore, timers::DraftTimers,
    },
};

const DEFAULT_PAUSE_REASON: &str = "paused by commissioner";
const MAX_TOTAL_ROUNDS: i64 = 100;

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub timer_tick: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            timer_tick: Duration::from_secs(1),
        }
    }
}

/// Runs every draft operation.
///
/// Operations that change a draft hold that draft's lock from the first read
/// until the resulting events are published, so picks, clock expiries and
/// pause/resume on one draft are applied one at a time and their events go
/// out in commit order. Different drafts never share a lock.
pub struct DraftEngine {
    store: DraftStore,
    directory: LeagueDirectory,
    publisher: Arc<dyn DraftPublisher>,
    auto_picker: Arc<dyn AutoPickPolicy>,
    timers: DraftTimers,
    locks: Mutex<HashMap<i64, Arc<AsyncMutex<()>>>>,
    settings: EngineSettings,
}

impl DraftEngine {
    pub fn new(
        store: DraftStore,
        directory: LeagueDirectory,
        publisher: Arc<dyn DraftPublisher>,
        auto_picker: Arc<dyn AutoPickPolicy>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            store,
            directory,
            publisher,
            auto_picker,
            timers: DraftTimers::new(),
            locks: Mutex::new(HashMap::new()),
            settings,
        }
    }

    pub fn store(&self) -> &DraftStore {
        &self.store
    }

    pub fn directory(&self) -> &LeagueDirectory {
        &self.directory
    }

    /// Whether a pick clock is currently running for the draft.
    pub fn timer_armed(&self, draft_id: i64) -> bool {
        self.timers.is_armed(draft_id)
    }

    /// Only locks someone still holds a handle to are kept, so ids that never
    /// named a draft and drafts nobody is touching cost nothing.
    fn draft_lock(&self, draft_id: i64) -> Arc<AsyncMutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        Arc::clone(locks.entry(draft_id).or_default())
    }

    async fn require_draft(&self, league_id: i64, draft_id: i64) -> Result<Draft, DraftError> {
        self.store
            .find_draft(league_id, draft_id)
            .await?
            .ok_or_else(|| DraftError::NotFound("draft not found".to_string()))
    }

    async fn require_league(&self, league_id: i64) -> Result<(), DraftError> {
        match self.directory.league(league_id).await? {
            Some(_) => Ok(()),
            None => Err(DraftError::NotFound("league not found".to_string())),
        }
    }

    async fn draft_response(&self, draft: Draft) -> Result<DraftResponse, DraftError> {
        let (total_picks, picks_made) = self.store.pick_counts(draft.id).await?;
        let team_name = match draft.current_team_on_clock {
            Some(team_id) => self.store.team_name(team_id).await?,
            None => None,
        };

        Ok(DraftResponse::new(draft, team_name, total_picks, picks_made))
    }

    pub async fn create_draft(
        &self,
        league_id: i64,
        payload: CreateDraft,
    ) -> Result<DraftResponse, DraftError> {
        self.require_league(league_id).await?;

        if payload.name.trim().is_empty() {
            return Err(DraftError::Validation("draft name must not be empty".to_string()));
        }
        if !(1..=MAX_TOTAL_ROUNDS).contains(&payload.total_rounds) {
            return Err(DraftError::Validation(format!(
                "total rounds must be between 1 and {}",
                MAX_TOTAL_ROUNDS
            )));
        }
        if payload.pick_time_limit_seconds <= 0 {
            return Err(DraftError::Validation("pick time limit must be positive".to_string()));
        }

        let draft = self.store.insert_draft(league_id, &payload).await?;
        info!(
            "Created draft {} '{}' in league {}",
            draft.id, draft.name, league_id
        );

        self.draft_response(draft).await
    }

    pub async fn get_draft(&self, league_id: i64, draft_id: i64) -> Result<DraftResponse, DraftError> {
        let draft = self.require_draft(league_id, draft_id).await?;
        self.draft_response(draft).await
    }

    pub async fn list_drafts(&self, league_id: i64) -> Result<Vec<DraftSummary>, DraftError> {
        self.require_league(league_id).await?;
        self.store.list_drafts(league_id).await
    }

    pub async fn update_draft(
        &self,
        league_id: i64,
        draft_id: i64,
        payload: UpdateDraft,
    ) -> Result<DraftResponse, DraftError> {
        let lock = self.draft_lock(draft_id);
        let _guard = lock.lock().await;

        let mut draft = self.require_draft(league_id, draft_id).await?;
        draft.ensure_scheduled("draft settings can only change before the draft starts")?;

        if let Some(name) = payload.name {
            if name.trim().is_empty() {
                return Err(DraftError::Validation("draft name must not be empty".to_string()));
            }
            draft.name = name;
        }
        if let Some(limit) = payload.pick_time_limit_seconds {
            if limit <= 0 {
                return Err(DraftError::Validation("pick time limit must be positive".to_string()));
            }
            draft.pick_time_limit_seconds = limit;
        }
        if let Some(start) = payload.scheduled_start_time {
            draft.scheduled_start_time = Some(start);
        }
        if let Some(allow_trading) = payload.allow_trading {
            draft.allow_trading = allow_trading;
        }

        self.store.save_draft(&draft).await?;
        info!("Updated settings of draft {}", draft.id);

        self.draft_response(draft).await
    }

    pub async fn list_picks(
        &self,
        league_id: i64,
        draft_id: i64,
    ) -> Result<Vec<DraftPickResponse>, DraftError> {
        let draft = self.require_draft(league_id, draft_id).await?;
        self.store.pick_responses(draft.id).await
    }

    pub async fn list_order(
        &self,
        league_id: i64,
        draft_id: i64,
    ) -> Result<Vec<DraftOrderResponse>, DraftError> {
        let draft = self.require_draft(league_id, draft_id).await?;
        self.store.order_responses(draft.id).await
    }

    /// Replace the draft's order and ledger. Only allowed while scheduled.
    pub async fn set_order(
        &self,
        league_id: i64,
        draft_id: i64,
        request: SetDraftOrder,
    ) -> Result<Vec<DraftOrderResponse>, DraftError> {
        let lock = self.draft_lock(draft_id);
        let _guard = lock.lock().await;

        let draft = self.require_draft(league_id, draft_id).await?;
        draft.ensure_scheduled("cannot modify draft order after draft has started")?;

        let league = self
            .directory
            .league(league_id)
            .await?
            .ok_or_else(|| DraftError::NotFound("league not found".to_string()))?;
        let teams = self.directory.league_teams(league_id).await?;
        let known: HashSet<i64> = teams.iter().map(|team| team.id).collect();

        let mut base = if request.order.is_empty() && request.randomize {
            teams.iter().map(|team| team.id).collect()
        } else {
            order::base_order(&request.order)
        };

        let mut seen = HashSet::new();
        for team_id in &base {
            if !known.contains(team_id) {
                return Err(DraftError::NotFound(format!("team {} not found in league", team_id)));
            }
            if !seen.insert(*team_id) {
                return Err(DraftError::Conflict(format!(
                    "team {} appears more than once in the order",
                    team_id
                )));
            }
        }
        if base.len() as i64 > league.max_teams {
            return Err(DraftError::Validation(format!(
                "league allows at most {} teams",
                league.max_teams
            )));
        }

        if request.randomize {
            shuffle_teams(&mut base);
        }

        if !request.traded_picks.is_empty() && !draft.allow_trading {
            return Err(DraftError::Forbidden("trading is disabled for this draft".to_string()));
        }

        let total_picks = (base.len() as i64)
            .checked_mul(draft.total_rounds)
            .ok_or_else(|| DraftError::Validation("draft has too many picks".to_string()))?;
        let mut traded = HashMap::new();
        for trade in &request.traded_picks {
            if !(1..=total_picks).contains(&trade.pick_number) {
                return Err(DraftError::Validation(format!(
                    "pick {} is outside the draft",
                    trade.pick_number
                )));
            }
            if !known.contains(&trade.team_id) {
                return Err(DraftError::NotFound(format!(
                    "team {} not found in league",
                    trade.team_id
                )));
            }
            traded.insert(trade.pick_number, trade.team_id);
        }

        let slots = order::build_order(&base, draft.total_rounds, draft.snake_draft, &traded);
        self.store.replace_order(draft.id, &slots).await?;
        info!(
            "Set order for draft {}: {} teams, {} picks",
            draft.id,
            base.len(),
            slots.len()
        );

        self.store.order_responses(draft.id).await
    }

    pub async fn start_draft(
        self: &Arc<Self>,
        league_id: i64,
        draft_id: i64,
    ) -> Result<DraftResponse, DraftError> {
        let lock = self.draft_lock(draft_id);
        let _guard = lock.lock().await;

        let mut draft = self.require_draft(league_id, draft_id).await?;
        let first = self.store.first_order_entry(draft.id).await?;
        let first_team_id = draft.start(first.as_ref(), Utc::now())?;
        self.store.save_draft(&draft).await?;

        let pick_deadline = draft.current_pick_deadline.ok_or_else(|| {
            DraftError::Invariant(format!("draft {} started without a deadline", draft.id))
        })?;

        info!("Started draft {}; team {} is on the clock", draft.id, first_team_id);
        self.publisher.publish(
            draft.id,
            DraftEvent::DraftStarted {
                draft_id: draft.id,
                first_team_id,
                pick_deadline,
            },
        );
        self.arm_timer(&draft);

        self.draft_response(draft).await
    }

    /// Submit a pick for the team on the clock.
    ///
    /// The pick runs to completion even if the caller goes away once it has
    /// started.
    pub async fn make_pick(
        self: &Arc<Self>,
        league_id: i64,
        draft_id: i64,
        request: MakePick,
    ) -> Result<DraftPickResponse, DraftError> {
        let engine = Arc::clone(self);
        detached(async move { engine.admit_pick(league_id, draft_id, request).await }).await
    }

    async fn admit_pick(
        self: &Arc<Self>,
        league_id: i64,
        draft_id: i64,
        request: MakePick,
    ) -> Result<DraftPickResponse, DraftError> {
        let lock = self.draft_lock(draft_id);
        let _guard = lock.lock().await;

        let draft = self.store.find_draft(league_id, draft_id).await?;
        let player_known = self.directory.player(request.player_id).await?.is_some();
        let ledger = match &draft {
            Some(draft) => self.store.load_ledger(draft.id).await?,
            None => PickLedger::default(),
        };

        let attempt = PickAttempt {
            team_id: request.team_id,
            player_id: request.player_id,
            player_known,
        };
        let draft = match arbiter::admit(draft.as_ref(), &ledger, &attempt) {
            Ok(admitted) => admitted.clone(),
            Err(e) => {
                info!(
                    "Rejected pick of player {} by team {} in draft {}: {}",
                    request.player_id, request.team_id, draft_id, e
                );
                return Err(e);
            }
        };

        self.commit_pick(draft, ledger, request.player_id, false).await
    }

    /// Make the pick for the team on the clock, as when its deadline elapses.
    ///
    /// Returns `Ok(None)` without touching anything if the draft is no longer
    /// in progress on `expected_pick`.
    pub async fn auto_pick(
        self: &Arc<Self>,
        league_id: i64,
        draft_id: i64,
        expected_pick: i64,
    ) -> Result<Option<DraftPickResponse>, DraftError> {
        let engine = Arc::clone(self);
        detached(async move { engine.expire_pick(league_id, draft_id, expected_pick).await }).await
    }

    async fn expire_pick(
        self: &Arc<Self>,
        league_id: i64,
        draft_id: i64,
        expected_pick: i64,
    ) -> Result<Option<DraftPickResponse>, DraftError> {
        let lock = self.draft_lock(draft_id);
        let _guard = lock.lock().await;

        let Some(draft) = self.store.find_draft(league_id, draft_id).await? else {
            return Ok(None);
        };
        if draft.status != DraftStatus::InProgress || draft.current_pick != expected_pick {
            debug!(
                "Skipping auto-pick for draft {} pick {}; draft has moved on",
                draft_id, expected_pick
            );
            return Ok(None);
        }

        let team_id = draft.current_team_on_clock.ok_or_else(|| {
            DraftError::Invariant(format!("draft {} is in progress with nobody on the clock", draft.id))
        })?;
        let ledger = self.store.load_ledger(draft.id).await?;

        let player_id = self
            .auto_picker
            .choose(&draft, team_id, &ledger)
            .await?
            .ok_or_else(|| DraftError::Conflict("no undrafted players remain".to_string()))?;
        let player_known = self.directory.player(player_id).await?.is_some();

        let attempt = PickAttempt {
            team_id,
            player_id,
            player_known,
        };
        let draft = arbiter::admit(Some(&draft), &ledger, &attempt)?.clone();

        info!(
            "Clock expired on pick {} of draft {}; auto-picking for team {}",
            expected_pick, draft_id, team_id
        );
        self.commit_pick(draft, ledger, player_id, true).await.map(Some)
    }

    async fn commit_pick(
        self: &Arc<Self>,
        mut draft: Draft,
        mut ledger: PickLedger,
        player_id: i64,
        is_auto_pick: bool,
    ) -> Result<DraftPickResponse, DraftError> {
        let now = Utc::now();
        let filled = draft.record_pick(&mut ledger, player_id, now, is_auto_pick)?;
        self.store.commit_pick(&draft, &filled).await?;

        let pick = self
            .store
            .pick_response(draft.id, filled.overall_pick_number)
            .await?
            .ok_or_else(|| {
                DraftError::Invariant(format!(
                    "pick {} of draft {} vanished after commit",
                    filled.overall_pick_number, draft.id
                ))
            })?;

        info!(
            "Pick {} in draft {}: {} to {}{}",
            pick.overall_pick_number,
            draft.id,
            pick.player_name.as_deref().unwrap_or("unknown player"),
            pick.team_name,
            if is_auto_pick { " (auto)" } else { "" }
        );

        self.publisher.publish(
            draft.id,
            DraftEvent::PickMade {
                draft_id: draft.id,
                pick: pick.clone(),
                next_team_id: draft.current_team_on_clock,
                next_pick_deadline: draft.current_pick_deadline,
                current_round: draft.current_round,
                current_pick: draft.current_pick,
            },
        );

        if draft.status == DraftStatus::Completed {
            let completed_time = draft.completed_time.unwrap_or(now);
            info!("Draft {} completed", draft.id);
            self.publisher.publish(
                draft.id,
                DraftEvent::DraftCompleted {
                    draft_id: draft.id,
                    completed_time,
                },
            );
            self.publisher.close(draft.id);
            self.timers.cancel(draft.id);
        } else {
            self.arm_timer(&draft);
        }

        Ok(pick)
    }

    pub async fn pause_draft(
        &self,
        league_id: i64,
        draft_id: i64,
        reason: Option<String>,
    ) -> Result<DraftResponse, DraftError> {
        let lock = self.draft_lock(draft_id);
        let _guard = lock.lock().await;

        let mut draft = self.require_draft(league_id, draft_id).await?;
        draft.pause()?;
        self.store.save_draft(&draft).await?;
        self.timers.cancel(draft.id);

        let reason = reason
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PAUSE_REASON.to_string());
        info!("Paused draft {}: {}", draft.id, reason);
        self.publisher.publish(
            draft.id,
            DraftEvent::DraftPaused {
                draft_id: draft.id,
                reason,
            },
        );

        self.draft_response(draft).await
    }

    pub async fn resume_draft(
        self: &Arc<Self>,
        league_id: i64,
        draft_id: i64,
    ) -> Result<DraftResponse, DraftError> {
        let lock = self.draft_lock(draft_id);
        let _guard = lock.lock().await;

        let mut draft = self.require_draft(league_id, draft_id).await?;
        let current_team_id = draft.resume(Utc::now())?;
        self.store.save_draft(&draft).await?;

        let pick_deadline = draft.current_pick_deadline.ok_or_else(|| {
            DraftError::Invariant(format!("draft {} resumed without a deadline", draft.id))
        })?;

        info!("Resumed draft {}; team {} is on the clock", draft.id, current_team_id);
        self.publisher.publish(
            draft.id,
            DraftEvent::DraftResumed {
                draft_id: draft.id,
                current_team_id,
                pick_deadline,
            },
        );
        self.arm_timer(&draft);

        self.draft_response(draft).await
    }

    pub async fn cancel_draft(&self, league_id: i64, draft_id: i64) -> Result<DraftResponse, DraftError> {
        let lock = self.draft_lock(draft_id);
        let _guard = lock.lock().await;

        let mut draft = self.require_draft(league_id, draft_id).await?;
        draft.cancel()?;
        self.store.save_draft(&draft).await?;
        self.timers.cancel(draft.id);
        self.publisher.close(draft.id);
        info!("Cancelled draft {}", draft.id);

        self.draft_response(draft).await
    }

    /// Hand an open slot to another team of the league.
    pub async fn trade_pick(
        &self,
        league_id: i64,
        draft_id: i64,
        pick_number: i64,
        request: TradePick,
    ) -> Result<DraftPickResponse, DraftError> {
        let lock = self.draft_lock(draft_id);
        let _guard = lock.lock().await;

        let draft = self.require_draft(league_id, draft_id).await?;
        if draft.status.is_terminal() {
            return Err(DraftError::InvalidState("draft has already finished".to_string()));
        }
        if !draft.allow_trading {
            return Err(DraftError::Forbidden("trading is disabled for this draft".to_string()));
        }
        if self.directory.team(league_id, request.team_id).await?.is_none() {
            return Err(DraftError::NotFound("team not found".to_string()));
        }

        let ledger = self.store.load_ledger(draft.id).await?;
        let slot = ledger
            .slot(pick_number)
            .ok_or_else(|| DraftError::NotFound(format!("pick {} not found", pick_number)))?;
        if !slot.is_open() {
            return Err(DraftError::InvalidState(format!(
                "pick {} has already been made",
                pick_number
            )));
        }
        let on_clock = matches!(draft.status, DraftStatus::InProgress | DraftStatus::Paused)
            && draft.current_pick == pick_number;
        if on_clock {
            return Err(DraftError::InvalidState(
                "cannot trade the pick that is on the clock".to_string(),
            ));
        }

        let original = slot.original_team_id.unwrap_or(slot.team_id);
        let original_team_id = (request.team_id != original).then_some(original);
        self.store
            .reassign_pick(draft.id, pick_number, request.team_id, original_team_id)
            .await?;
        info!(
            "Pick {} of draft {} moved from team {} to team {}",
            pick_number, draft.id, slot.team_id, request.team_id
        );

        self.store
            .pick_response(draft.id, pick_number)
            .await?
            .ok_or_else(|| DraftError::Invariant(format!("pick {} vanished after trade", pick_number)))
    }

    pub async fn available_players(
        &self,
        league_id: i64,
        draft_id: i64,
        limit: Option<i64>,
    ) -> Result<Vec<Player>, DraftError> {
        let draft = self.require_draft(league_id, draft_id).await?;
        let limit = limit.unwrap_or(50).clamp(1, 500);
        self.directory.available_players(draft.id, limit).await
    }

    pub async fn league_transactions(&self, league_id: i64) -> Result<Vec<Transaction>, DraftError> {
        self.require_league(league_id).await?;
        self.store.league_transactions(league_id).await
    }

    /// Re-arm pick clocks for drafts that were in progress when the process
    /// stopped. A deadline that passed meanwhile triggers an auto-pick on the
    /// first tick.
    pub async fn restore_timers(self: &Arc<Self>) -> Result<usize, DraftError> {
        let drafts = self.store.in_progress_drafts().await?;

        for draft in &drafts {
            let lock = self.draft_lock(draft.id);
            let _guard = lock.lock().await;
            self.arm_timer(draft);
            info!(
                "Restored pick clock for draft {} at pick {}",
                draft.id, draft.current_pick
            );
        }

        Ok(drafts.len())
    }

    /// Replace the draft's pick clock. Callers hold the draft lock.
    fn arm_timer(self: &Arc<Self>, draft: &Draft) {
        let Some(deadline) = draft.current_pick_deadline else {
            self.timers.cancel(draft.id);
            return;
        };

        let generation = self.timers.next_generation();
        let engine = Arc::clone(self);
        let (league_id, draft_id, pick_number) = (draft.league_id, draft.id, draft.current_pick);

        let handle = tokio::spawn(async move {
            engine
                .run_timer(league_id, draft_id, pick_number, deadline, generation)
                .await;
        });
        self.timers.install(draft_id, generation, handle);
    }

    async fn run_timer(
        self: Arc<Self>,
        league_id: i64,
        draft_id: i64,
        pick_number: i64,
        deadline: DateTime<Utc>,
        generation: u64,
    ) {
        self.watch_clock(league_id, draft_id, pick_number, deadline, generation)
            .await;
        self.timers.finish(draft_id, generation);
    }

    async fn watch_clock(
        self: &Arc<Self>,
        league_id: i64,
        draft_id: i64,
        pick_number: i64,
        deadline: DateTime<Utc>,
        generation: u64,
    ) {
        let mut ticker = tokio::time::interval(self.settings.timer_tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            {
                let lock = self.draft_lock(draft_id);
                let _guard = lock.lock().await;
                if !self.timers.is_current(draft_id, generation) {
                    return;
                }

                let remaining_ms = (deadline - Utc::now()).num_milliseconds();
                if remaining_ms > 0 {
                    self.publisher.publish(
                        draft_id,
                        DraftEvent::TimerUpdate {
                            draft_id,
                            seconds_remaining: (remaining_ms + 999) / 1000,
                        },
                    );
                    continue;
                }
            }

            match self.auto_pick(league_id, draft_id, pick_number).await {
                Ok(Some(_)) => return,
                Ok(None) => {
                    if let Err(e) = self.recover_clock(league_id, draft_id, generation).await {
                        error!("Could not check the clock of draft {}: {}", draft_id, e);
                    }
                    return;
                }
                Err(e @ (DraftError::Invariant(_) | DraftError::Database(_))) => {
                    error!(
                        "Auto-pick for draft {} pick {} failed, retrying next tick: {}",
                        draft_id, pick_number, e
                    );
                }
                Err(e) => {
                    warn!(
                        "Auto-pick for draft {} pick {} failed, retrying next tick: {}",
                        draft_id, pick_number, e
                    );
                }
            }
        }
    }

    /// The clock's pick was made but no clock took over. Arm one for wherever
    /// the draft stands now.
    async fn recover_clock(
        self: &Arc<Self>,
        league_id: i64,
        draft_id: i64,
        generation: u64,
    ) -> Result<(), DraftError> {
        let lock = self.draft_lock(draft_id);
        let _guard = lock.lock().await;
        if !self.timers.is_current(draft_id, generation) {
            return Ok(());
        }

        match self.store.find_draft(league_id, draft_id).await? {
            Some(draft) if draft.status == DraftStatus::InProgress => {
                warn!(
                    "Draft {} reached pick {} without a clock; re-arming",
                    draft.id, draft.current_pick
                );
                // Replaces the calling clock task; nothing after this may await.
                self.arm_timer(&draft);
            }
            _ => {}
        }
        Ok(())
    }
}

/// Runs a draft transition on its own task, so a caller dropped partway
/// cannot leave it committed with its events unsent or its clock unarmed.
async fn detached<T, F>(work: F) -> Result<T, DraftError>
where
    T: Send + 'static,
    F: Future<Output = Result<T, DraftError>> + Send + 'static,
{
    match tokio::spawn(work).await {
        Ok(result) => result,
        Err(e) => Err(DraftError::Invariant(format!("draft task did not finish: {}", e))),
    }
}

fn shuffle_teams(teams: &mut [i64]) {
    teams.shuffle(&mut rng());
}
