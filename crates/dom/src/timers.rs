//! Deterministic single-shot deferred-task scheduling.
//!
//! Responsibilities:
//! - Model the host's deferred-callback facility on a virtual clock.
//! - Fire due tasks in (deadline, schedule order) when time is advanced.
//!
//! Does NOT handle:
//! - Cancellation. Superseded tasks are expected to no-op through their
//!   own guards once they fire, never to be aborted.
//! - Wall-clock time. The embedder drives the clock explicitly.

use tracing::trace;

/// Identifier of a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<T> {
    due_at: u64,
    seq: u64,
    task: T,
}

/// Single-shot task queue over a virtual millisecond clock.
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    now_ms: u64,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            now_ms: 0,
            next_seq: 0,
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of tasks that have not fired yet.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedule a task to fire once `delay_ms` has elapsed.
    pub fn schedule(&mut self, delay_ms: u64, task: T) -> TimerId {
        let id = TimerId(self.next_seq);
        let due_at = self.now_ms.saturating_add(delay_ms);
        let entry = Entry {
            due_at,
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;
        self.entries.push(entry);
        trace!("scheduled deferred task {:?} due at {}ms", id, due_at);
        id
    }

    /// Advance the clock and drain every task that came due, ordered by
    /// deadline first and schedule order among equal deadlines.
    pub fn advance(&mut self, delta_ms: u64) -> Vec<T> {
        let from = self.now_ms;
        self.now_ms = self.now_ms.saturating_add(delta_ms);

        let mut due = Vec::new();
        let mut index = 0;
        while index < self.entries.len() {
            if self.entries[index].due_at <= self.now_ms {
                due.push(self.entries.remove(index));
            } else {
                index += 1;
            }
        }
        due.sort_by_key(|entry| (entry.due_at, entry.seq));
        trace!(
            "clock advanced {}ms -> {}ms, fired {} task(s)",
            from,
            self.now_ms,
            due.len()
        );
        due.into_iter().map(|entry| entry.task).collect()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasks_fire_at_deadline_not_before() {
        let mut queue = TimerQueue::new();
        queue.schedule(10, "reveal");
        assert_eq!(queue.advance(9), Vec::<&str>::new());
        assert_eq!(queue.advance(1), vec!["reveal"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_equal_deadlines_fire_in_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(5, 1);
        queue.schedule(5, 2);
        queue.schedule(5, 3);
        assert_eq!(queue.advance(5), vec![1, 2, 3]);
    }

    #[test]
    fn test_deadline_order_beats_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(300, "remove");
        queue.schedule(10, "reveal");
        assert_eq!(queue.advance(400), vec!["reveal", "remove"]);
    }

    #[test]
    fn test_zero_delay_fires_on_zero_advance() {
        let mut queue = TimerQueue::new();
        queue.schedule(0, ());
        assert_eq!(queue.advance(0).len(), 1);
    }

    #[test]
    fn test_clock_accumulates_across_advances() {
        let mut queue = TimerQueue::new();
        queue.schedule(30, ());
        assert!(queue.advance(10).is_empty());
        assert!(queue.advance(10).is_empty());
        assert_eq!(queue.now_ms(), 20);
        assert_eq!(queue.advance(10).len(), 1);
        assert_eq!(queue.now_ms(), 30);
    }

    #[test]
    fn test_late_schedule_is_relative_to_now() {
        let mut queue = TimerQueue::new();
        queue.advance(100);
        queue.schedule(10, ());
        assert!(queue.advance(9).is_empty());
        assert_eq!(queue.advance(1).len(), 1);
    }
}
