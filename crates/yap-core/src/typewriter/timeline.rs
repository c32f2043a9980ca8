use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Schedule/cancel capability injected into the typewriter.
pub trait Scheduler {
    /// Registers a one-shot wake-up `delay` from the scheduler's current time.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancels a pending wake-up. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Deterministic deadline queue over a monotonic clock.
///
/// Time only moves when the owner says so (`run_until` / `pop_due`), which
/// makes it usable both for simulated time in tests and for wall-clock time
/// in the TUI runtime (fed with `Instant::elapsed`).
///
/// When a timer fires, `now` jumps to its deadline rather than to the target
/// time, so a callback that reschedules itself does so relative to when it was
/// due. Consecutive wake-ups therefore never accumulate drift.
#[derive(Debug, Default)]
pub struct Timeline {
    now: Duration,
    next_id: u64,
    queue: BTreeSet<(Duration, TimerId)>,
    deadlines: HashMap<TimerId, Duration>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time on this timeline.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.first().map(|(deadline, _)| *deadline)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Pops the earliest timer due at or before `until`.
    ///
    /// Timers with equal deadlines fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerId> {
        let &(deadline, id) = self.queue.first()?;
        if deadline > until {
            return None;
        }
        self.queue.remove(&(deadline, id));
        self.deadlines.remove(&id);
        self.now = self.now.max(deadline);
        Some(id)
    }

    /// Fires every timer due up to `until`, in deadline order, then moves the
    /// clock to `until`.
    ///
    /// `on_fire` may schedule or cancel timers; anything it schedules that is
    /// still due before `until` fires in the same call.
    pub fn run_until<F>(&mut self, until: Duration, mut on_fire: F)
    where
        F: FnMut(&mut Self, TimerId),
    {
        while let Some(id) = self.pop_due(until) {
            on_fire(self, id);
        }
        self.now = self.now.max(until);
    }
}

impl Scheduler for Timeline {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let deadline = self.now.saturating_add(delay);
        self.queue.insert((deadline, id));
        self.deadlines.insert(id, deadline);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(deadline) = self.deadlines.remove(&id) {
            self.queue.remove(&(deadline, id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut timeline = Timeline::new();
        let late = timeline.schedule(ms(30));
        let early = timeline.schedule(ms(10));

        let mut fired = Vec::new();
        timeline.run_until(ms(100), |_, id| fired.push(id));
        assert_eq!(fired, vec![early, late]);
        assert_eq!(timeline.now(), ms(100));
    }

    #[test]
    fn test_equal_deadlines_fire_fifo() {
        let mut timeline = Timeline::new();
        let first = timeline.schedule(ms(5));
        let second = timeline.schedule(ms(5));
        assert_eq!(timeline.pop_due(ms(5)), Some(first));
        assert_eq!(timeline.pop_due(ms(5)), Some(second));
    }

    #[test]
    fn test_not_due_yet() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(50));
        assert_eq!(timeline.pop_due(ms(49)), None);
        assert_eq!(timeline.next_deadline(), Some(ms(50)));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut timeline = Timeline::new();
        let id = timeline.schedule(ms(10));
        timeline.cancel(id);
        timeline.cancel(id);
        assert!(!timeline.is_pending(id));
        assert_eq!(timeline.pending_count(), 0);
        assert_eq!(timeline.pop_due(ms(100)), None);
    }

    #[test]
    fn test_reschedule_from_callback_is_drift_free() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(50));

        let mut fire_times = Vec::new();
        // One big jump: the chain must still land on exact multiples of 50.
        timeline.run_until(ms(175), |tl, _| {
            fire_times.push(tl.now());
            tl.schedule(ms(50));
        });
        assert_eq!(fire_times, vec![ms(50), ms(100), ms(150)]);
        assert_eq!(timeline.next_deadline(), Some(ms(200)));
    }
}
