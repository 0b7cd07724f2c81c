use std::{
    collections::{HashMap, HashSet},
    sync::{Mutex, PoisonError},
};

use tokio::sync::broadcast;
use tracing::debug;

use crate::dto::event_dto::DraftEvent;

/// Sink for draft events. Publishing must not block or fail the transition
/// that produced the event.
pub trait DraftPublisher: Send + Sync {
    fn publish(&self, draft_id: i64, event: DraftEvent);

    /// The draft will produce no further events.
    fn close(&self, _draft_id: i64) {}
}

#[derive(Default)]
struct Channels {
    open: HashMap<i64, broadcast::Sender<DraftEvent>>,
    closed: HashSet<i64>,
}

/// One broadcast channel per draft. Each subscriber sees events in the order
/// they were published; a subscriber that falls more than `capacity` events
/// behind loses the oldest ones. Once a draft is closed its channel is never
/// reopened.
pub struct DraftHub {
    channels: Mutex<Channels>,
    capacity: usize,
}

impl DraftHub {
    pub fn new(capacity: usize) -> Self {
        Self {
            channels: Mutex::new(Channels::default()),
            capacity: capacity.max(1),
        }
    }

    /// Subscribing to a closed draft yields a receiver that reports `Closed`
    /// straight away.
    pub fn subscribe(&self, draft_id: i64) -> broadcast::Receiver<DraftEvent> {
        let mut channels = self.channels.lock().unwrap_or_else(PoisonError::into_inner);
        if channels.closed.contains(&draft_id) {
            let (tx, rx) = broadcast::channel(1);
            drop(tx);
            return rx;
        }

        channels
            .open
            .entry(draft_id)
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .subscribe()
    }

    pub fn observer_count(&self, draft_id: i64) -> usize {
        let channels = self.channels.lock().unwrap_or_else(PoisonError::into_inner);
        channels.open.get(&draft_id).map_or(0, |tx| tx.receiver_count())
    }
}

impl DraftPublisher for DraftHub {
    fn publish(&self, draft_id: i64, event: DraftEvent) {
        let channels = self.channels.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(tx) = channels.open.get(&draft_id) else {
            debug!("No channel open for draft {}; dropping event", draft_id);
            return;
        };

        if tx.send(event).is_err() {
            debug!("No observers connected to draft {}", draft_id);
        }
    }

    fn close(&self, draft_id: i64) {
        // Dropping the sender lets receivers drain what is buffered, then see Closed.
        let mut channels = self.channels.lock().unwrap_or_else(PoisonError::into_inner);
        channels.open.remove(&draft_id);
        channels.closed.insert(draft_id);
    }
}
