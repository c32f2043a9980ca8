use super::{Script, Scheduler, Sequencer, TimerId, Timing};

/// A sequencer bound to a scheduler.
///
/// Exactly one wake-up is pending while running, so ticks are strictly
/// sequential. After [`Typewriter::stop`] nothing is pending and every timer
/// event is ignored; the rendered buffer is frozen.
#[derive(Debug)]
pub struct Typewriter {
    sequencer: Sequencer,
    pending: Option<TimerId>,
}

impl Typewriter {
    /// Creates the sequencer and schedules its first wake-up.
    pub fn start<S: Scheduler>(script: Script, timing: Timing, scheduler: &mut S) -> Self {
        let sequencer = Sequencer::new(script, timing);
        let pending = Some(scheduler.schedule(sequencer.initial_delay()));
        tracing::debug!(
            phrases = sequencer.script().len(),
            typing_speed_ms = timing.typing_speed.as_millis() as u64,
            pause_ms = timing.pause.as_millis() as u64,
            "typewriter started"
        );
        Self { sequencer, pending }
    }

    /// Handles a fired timer.
    ///
    /// Returns `true` if `id` was this typewriter's pending wake-up (the
    /// buffer may have changed). Stale ids and stopped typewriters return
    /// `false` without touching any state.
    pub fn on_timer<S: Scheduler>(&mut self, id: TimerId, scheduler: &mut S) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        let delay = self.sequencer.advance();
        self.pending = Some(scheduler.schedule(delay));
        true
    }

    /// Cancels the pending wake-up. Safe to call any number of times.
    pub fn stop<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
            tracing::debug!("typewriter stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn rendered(&self) -> &str {
        self.sequencer.rendered()
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::typewriter::{Phase, Timeline};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn start(phrases: &[&str], timeline: &mut Timeline) -> Typewriter {
        let script = Script::new(phrases.iter().copied()).unwrap();
        Typewriter::start(script, Timing::from_millis(50, 2000), timeline)
    }

    fn run_to(tw: &mut Typewriter, timeline: &mut Timeline, at: u64) {
        timeline.run_until(ms(at), |tl, id| {
            tw.on_timer(id, tl);
        });
    }

    #[test]
    fn test_hi_bye_scenario() {
        let mut timeline = Timeline::new();
        let mut tw = start(&["Hi", "Bye"], &mut timeline);

        run_to(&mut tw, &mut timeline, 0);
        assert_eq!(tw.rendered(), "");

        run_to(&mut tw, &mut timeline, 50);
        assert_eq!(tw.rendered(), "H");

        run_to(&mut tw, &mut timeline, 100);
        assert_eq!(tw.rendered(), "Hi");
        assert_eq!(tw.sequencer().phase(), Phase::Paused);

        run_to(&mut tw, &mut timeline, 2099);
        assert_eq!(tw.rendered(), "Hi");

        run_to(&mut tw, &mut timeline, 2100);
        assert_eq!(tw.rendered(), "");
        assert_eq!(tw.sequencer().cursor().text_index, 1);
        assert_eq!(tw.sequencer().phase(), Phase::Typing);

        run_to(&mut tw, &mut timeline, 2150);
        assert_eq!(tw.rendered(), "B");
    }

    #[test]
    fn test_full_typing_duration_renders_first_phrase() {
        let phrases = ["Read people's thoughts and stories here..."];
        let mut timeline = Timeline::new();
        let mut tw = start(&phrases, &mut timeline);

        let len = phrases[0].chars().count() as u64;
        run_to(&mut tw, &mut timeline, 50 * len);
        assert_eq!(tw.rendered(), phrases[0]);
    }

    #[test]
    fn test_large_time_jump_does_not_skip_phrases() {
        let mut timeline = Timeline::new();
        let mut tw = start(&["Hi", "Bye"], &mut timeline);

        // Hi: 100 + 2000, Bye: 150 + 2000 => back on "Hi" at 4250.
        run_to(&mut tw, &mut timeline, 4250);
        assert_eq!(tw.sequencer().cursor().text_index, 0);
        assert_eq!(tw.rendered(), "");

        run_to(&mut tw, &mut timeline, 4300);
        assert_eq!(tw.rendered(), "H");
    }

    #[test]
    fn test_stop_freezes_buffer() {
        let mut timeline = Timeline::new();
        let mut tw = start(&["Hi", "Bye"], &mut timeline);

        run_to(&mut tw, &mut timeline, 50);
        tw.stop(&mut timeline);
        assert!(!tw.is_running());
        assert_eq!(timeline.pending_count(), 0);

        run_to(&mut tw, &mut timeline, 10_000);
        assert_eq!(tw.rendered(), "H");
    }

    #[test]
    fn test_stop_twice_is_same_as_once() {
        let mut timeline = Timeline::new();
        let mut tw = start(&["Hi"], &mut timeline);
        tw.stop(&mut timeline);
        tw.stop(&mut timeline);
        assert!(!tw.is_running());
        assert_eq!(tw.rendered(), "");
    }

    #[test]
    fn test_ignores_foreign_timer() {
        let mut timeline = Timeline::new();
        let mut tw = start(&["Hi"], &mut timeline);
        let foreign = timeline.schedule(ms(1));

        let id = timeline.pop_due(ms(1)).unwrap();
        assert_eq!(id, foreign);
        assert!(!tw.on_timer(id, &mut timeline));
        assert_eq!(tw.rendered(), "");
    }

    #[test]
    fn test_two_typewriters_share_a_timeline_independently() {
        let mut timeline = Timeline::new();
        let mut a = start(&["ab"], &mut timeline);
        let mut b = start(&["xyz"], &mut timeline);
        b.stop(&mut timeline);

        timeline.run_until(ms(100), |tl, id| {
            a.on_timer(id, tl);
            b.on_timer(id, tl);
        });
        assert_eq!(a.rendered(), "ab");
        assert_eq!(b.rendered(), "");
    }
}
