//! Delayed item renders.
//!
//! Renders are queued with the target they were issued for and released in
//! issue order once due. Every write to the display, delayed or immediate,
//! takes a sequence number; a delayed render older than the last applied
//! write is stale and gets dropped instead of overwriting newer content.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::display::RenderTarget;

/// A queued render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRender {
    /// Captured render parameters
    pub target: RenderTarget,
    /// Sequence number assigned at issue time
    pub seq: u64,
    /// When the render becomes due
    pub due: Instant,
}

/// FIFO of delayed renders plus the sequence bookkeeping for stale drops.
#[derive(Debug, Default)]
pub struct RenderScheduler {
    queue: VecDeque<PendingRender>,
    next_seq: u64,
    last_applied: u64,
}

impl RenderScheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the sequence number for an immediate display write and
    /// marks it applied.
    pub fn immediate(&mut self) -> u64 {
        let seq = self.allocate();
        self.last_applied = seq;
        seq
    }

    /// Queues a render of `target` due `delay` after `now`.
    ///
    /// The returned sequence number is also marked applied, since the caller
    /// shows the loading state for this render right away.
    pub fn schedule(&mut self, target: RenderTarget, now: Instant, delay: Duration) -> u64 {
        let seq = self.immediate();
        self.queue.push_back(PendingRender {
            target,
            seq,
            due: now + delay,
        });
        seq
    }

    /// Removes and returns every render due at `now`, in issue order,
    /// skipping stale ones.
    pub fn take_due(&mut self, now: Instant) -> Vec<PendingRender> {
        let mut due = Vec::new();
        while let Some(pending) = self.queue.front().copied() {
            if pending.due > now {
                break;
            }
            self.queue.pop_front();

            if pending.seq < self.last_applied {
                tracing::debug!(
                    seq = pending.seq,
                    latest = self.last_applied,
                    render = ?pending.target,
                    "Dropping stale render"
                );
                continue;
            }
            self.last_applied = pending.seq;
            due.push(pending);
        }
        due
    }

    /// Whether any render is still queued.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Number of queued renders.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the next queued render.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.queue.front().map(|pending| pending.due)
    }

    fn allocate(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::models::Category;

    const DELAY: Duration = Duration::from_millis(300);

    fn target(index: usize) -> RenderTarget {
        RenderTarget {
            category: Category::Web,
            index,
            language: Language::En,
        }
    }

    #[test]
    fn test_render_not_released_before_due() {
        let mut scheduler = RenderScheduler::new();
        let now = Instant::now();
        scheduler.schedule(target(0), now, DELAY);

        assert!(scheduler.take_due(now).is_empty());
        assert!(scheduler.has_pending());
        assert_eq!(scheduler.next_due(), Some(now + DELAY));

        let released = scheduler.take_due(now + DELAY);
        assert_eq!(released.len(), 1);
        assert_eq!(released[0].target, target(0));
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_superseded_render_is_dropped() {
        let mut scheduler = RenderScheduler::new();
        let now = Instant::now();
        scheduler.schedule(target(0), now, DELAY);
        scheduler.schedule(target(1), now + Duration::from_millis(50), DELAY);
        assert_eq!(scheduler.pending_count(), 2);

        let released = scheduler.take_due(now + Duration::from_secs(1));
        assert_eq!(released.len(), 1);
        assert_eq!(released[0].target, target(1));
    }

    #[test]
    fn test_immediate_write_supersedes_queued_render() {
        let mut scheduler = RenderScheduler::new();
        let now = Instant::now();
        scheduler.schedule(target(0), now, DELAY);
        scheduler.immediate();

        assert!(scheduler.take_due(now + DELAY).is_empty());
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_sequence_numbers_increase() {
        let mut scheduler = RenderScheduler::new();
        let first = scheduler.immediate();
        let second = scheduler.schedule(target(0), Instant::now(), DELAY);
        assert!(second > first);
    }
}
