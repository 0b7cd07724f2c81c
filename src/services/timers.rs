use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex, PoisonError,
    },
};

use tokio::task::JoinHandle;

struct ArmedTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

/// At most one pick clock task per draft. Installing a new clock aborts the
/// previous one; a clock task that finds its generation superseded must exit
/// without acting.
#[derive(Default)]
pub struct DraftTimers {
    armed: Mutex<HashMap<i64, ArmedTimer>>,
    next_generation: AtomicU64,
}

impl DraftTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_generation(&self) -> u64 {
        self.next_generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn install(&self, draft_id: i64, generation: u64, handle: JoinHandle<()>) {
        let mut armed = self.armed.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = armed.insert(draft_id, ArmedTimer { generation, handle }) {
            previous.handle.abort();
        }
    }

    pub fn cancel(&self, draft_id: i64) {
        let mut armed = self.armed.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = armed.remove(&draft_id) {
            previous.handle.abort();
        }
    }

    pub fn is_current(&self, draft_id: i64, generation: u64) -> bool {
        let armed = self.armed.lock().unwrap_or_else(PoisonError::into_inner);
        armed
            .get(&draft_id)
            .is_some_and(|timer| timer.generation == generation)
    }

    /// Called by a clock task on its way out. Leaves a newer clock alone.
    pub fn finish(&self, draft_id: i64, generation: u64) {
        let mut armed = self.armed.lock().unwrap_or_else(PoisonError::into_inner);
        if armed
            .get(&draft_id)
            .is_some_and(|timer| timer.generation == generation)
        {
            armed.remove(&draft_id);
        }
    }

    pub fn is_armed(&self, draft_id: i64) -> bool {
        let armed = self.armed.lock().unwrap_or_else(PoisonError::into_inner);
        armed
            .get(&draft_id)
            .is_some_and(|timer| !timer.handle.is_finished())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn sleeper() -> JoinHandle<()> {
        tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        })
    }

    #[tokio::test]
    async fn installing_supersedes_the_previous_clock() {
        let timers = DraftTimers::new();
        let first_gen = timers.next_generation();
        let first = sleeper();
        let first_abort = first.abort_handle();
        timers.install(1, first_gen, first);
        assert!(timers.is_current(1, first_gen));

        let second_gen = timers.next_generation();
        timers.install(1, second_gen, sleeper());
        assert!(!timers.is_current(1, first_gen));
        assert!(timers.is_current(1, second_gen));

        for _ in 0..100 {
            if first_abort.is_finished() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(first_abort.is_finished());
    }

    #[tokio::test]
    async fn cancel_disarms() {
        let timers = DraftTimers::new();
        let generation = timers.next_generation();
        timers.install(4, generation, sleeper());
        assert!(timers.is_armed(4));

        timers.cancel(4);
        assert!(!timers.is_armed(4));
        assert!(!timers.is_current(4, generation));
        // Cancelling an idle draft is harmless.
        timers.cancel(5);
    }

    #[tokio::test]
    async fn finished_clock_is_not_armed() {
        let timers = DraftTimers::new();
        let generation = timers.next_generation();
        let handle = tokio::spawn(async {});
        let done = handle.abort_handle();
        timers.install(2, generation, handle);

        for _ in 0..100 {
            if done.is_finished() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(done.is_finished());
        assert!(!timers.is_armed(2));
    }

    #[tokio::test]
    async fn finish_only_removes_its_own_generation() {
        let timers = DraftTimers::new();
        let old = timers.next_generation();
        timers.install(6, old, sleeper());
        let new = timers.next_generation();
        timers.install(6, new, sleeper());

        timers.finish(6, old);
        assert!(timers.is_current(6, new));
        assert!(timers.is_armed(6));

        timers.finish(6, new);
        assert!(!timers.is_armed(6));
        assert!(!timers.is_current(6, new));
    }
}
