//! # Event Publisher
//!
//! Only the transaction executor publishes. It does so after a commit has
//! become the visible snapshot, once per event, in the order the
//! transaction produced them. Every event carries the journal sequence of
//! its transaction (genesis is sequence 0), so the bus can tell whether
//! the stream it hands out still follows commit order.

use crate::events::{EventFilter, LedgerEvent};
use crate::subscriber::{EventStream, Subscription};
use crate::DEFAULT_CHANNEL_CAPACITY;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::{trace, warn};

/// Post-commit sink for ledger events.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Hand one committed event to every live subscriber.
    ///
    /// Returns how many subscribers were reachable. Zero is not an error:
    /// the commit already happened and nobody has to hear about it.
    async fn publish(&self, event: LedgerEvent) -> usize;

    /// Events accepted since the bus was created.
    fn events_published(&self) -> u64;

    /// Highest journal sequence seen so far.
    fn last_sequence(&self) -> u64;
}

/// Broadcast-backed bus living next to the executor.
///
/// Subscribers that fall more than `capacity` events behind lose the
/// oldest ones; publishing never waits on a reader.
pub struct InMemoryEventBus {
    sender: broadcast::Sender<LedgerEvent>,
    published: AtomicU64,
    high_water: AtomicU64,
    capacity: usize,
}

impl InMemoryEventBus {
    /// Bus with [`DEFAULT_CHANNEL_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Bus buffering up to `capacity` events per subscriber.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            published: AtomicU64::new(0),
            high_water: AtomicU64::new(0),
            capacity,
        }
    }

    /// Subscribe from the next commit onward. Earlier events are not
    /// replayed; read the journal for history.
    #[must_use]
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        trace!(topics = ?filter.topics, subsystems = ?filter.source_subsystems, "Subscriber attached");
        Subscription::new(self.sender.subscribe(), filter)
    }

    /// Same as [`subscribe`](Self::subscribe), as a `Stream`.
    #[must_use]
    pub fn event_stream(&self, filter: EventFilter) -> EventStream {
        EventStream::new(self.sender.subscribe(), filter)
    }

    /// Live subscriptions and streams.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Per-subscriber buffer size.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: LedgerEvent) -> usize {
        let sequence = event.sequence();
        let previous = self.high_water.fetch_max(sequence, Ordering::AcqRel);
        if sequence < previous {
            warn!(sequence, previous, "Event published behind the commit order");
        }
        self.published.fetch_add(1, Ordering::Relaxed);

        let topic = event.topic().as_str();
        let reached = self.sender.send(event).unwrap_or(0);
        trace!(topic, sequence, reached, "Event published");
        reached
    }

    fn events_published(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }

    fn last_sequence(&self) -> u64 {
        self.high_water.load(Ordering::Acquire)
    }
}
