use std::time::Duration;

use super::Script;

/// Delays that drive the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay between two revealed characters.
    pub typing_speed: Duration,
    /// Hold on a finished phrase before moving to the next one.
    pub pause: Duration,
}

impl Timing {
    pub const DEFAULT_TYPING_SPEED_MS: u64 = 50;
    pub const DEFAULT_PAUSE_MS: u64 = 2000;

    pub fn from_millis(typing_speed_ms: u64, pause_ms: u64) -> Self {
        Self {
            typing_speed: Duration::from_millis(typing_speed_ms),
            pause: Duration::from_millis(pause_ms),
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::from_millis(Self::DEFAULT_TYPING_SPEED_MS, Self::DEFAULT_PAUSE_MS)
    }
}

/// Progress through the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub text_index: usize,
    pub char_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Characters are being revealed.
    #[default]
    Typing,
    /// The phrase is complete and held before advancing.
    Paused,
}

/// Pure typewriter state machine.
///
/// Each call to [`Sequencer::advance`] is one wake-up; it returns how long to
/// wait before the next one. The caller owns the clock.
#[derive(Debug, Clone)]
pub struct Sequencer {
    script: Script,
    timing: Timing,
    cursor: Cursor,
    phase: Phase,
    /// Phrases moved past since the start. Never wraps with the script.
    completed: u64,
}

impl Sequencer {
    pub fn new(script: Script, timing: Timing) -> Self {
        let mut sequencer = Self {
            script,
            timing,
            cursor: Cursor::default(),
            phase: Phase::Typing,
            completed: 0,
        };
        sequencer.settle();
        sequencer
    }

    /// Delay before the first wake-up.
    pub fn initial_delay(&self) -> Duration {
        self.delay()
    }

    /// Handles one wake-up and returns the delay until the next one.
    ///
    /// While typing, reveals one character; finishing the phrase switches to
    /// `Paused` in the same step. While paused, clears the buffer and moves to
    /// the next phrase (wrapping around).
    pub fn advance(&mut self) -> Duration {
        match self.phase {
            Phase::Typing => {
                if self.cursor.char_index < self.current_len() {
                    self.cursor.char_index += 1;
                }
            }
            Phase::Paused => {
                self.cursor.char_index = 0;
                self.cursor.text_index = (self.cursor.text_index + 1) % self.script.len();
                self.phase = Phase::Typing;
                self.completed += 1;
                tracing::trace!(text_index = self.cursor.text_index, "typewriter next phrase");
            }
        }
        self.settle();
        self.delay()
    }

    /// The visible prefix of the current phrase.
    pub fn rendered(&self) -> &str {
        self.script
            .prefix(self.cursor.text_index, self.cursor.char_index)
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Number of phrases finished and cleared so far.
    pub fn completed(&self) -> u64 {
        self.completed
    }

    fn current_len(&self) -> usize {
        self.script.char_len(self.cursor.text_index)
    }

    /// Typing → Paused as soon as the phrase is fully revealed.
    fn settle(&mut self) {
        if self.phase == Phase::Typing && self.cursor.char_index == self.current_len() {
            self.phase = Phase::Paused;
        }
    }

    fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.timing.typing_speed,
            Phase::Paused => self.timing.pause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequencer(phrases: &[&str]) -> Sequencer {
        Sequencer::new(
            Script::new(phrases.iter().copied()).unwrap(),
            Timing::from_millis(50, 2000),
        )
    }

    #[test]
    fn test_starts_typing_with_empty_buffer() {
        let seq = sequencer(&["Hi", "Bye"]);
        assert_eq!(seq.rendered(), "");
        assert_eq!(seq.phase(), Phase::Typing);
        assert_eq!(seq.cursor(), Cursor::default());
        assert_eq!(seq.initial_delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_reveals_one_character_per_step() {
        let mut seq = sequencer(&["Hi", "Bye"]);
        assert_eq!(seq.advance(), Duration::from_millis(50));
        assert_eq!(seq.rendered(), "H");
        assert_eq!(seq.phase(), Phase::Typing);
    }

    #[test]
    fn test_last_character_pauses_in_same_step() {
        let mut seq = sequencer(&["Hi", "Bye"]);
        seq.advance();
        let delay = seq.advance();
        assert_eq!(seq.rendered(), "Hi");
        assert_eq!(seq.phase(), Phase::Paused);
        assert_eq!(delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_pause_end_resets_and_moves_to_next_phrase() {
        let mut seq = sequencer(&["Hi", "Bye"]);
        seq.advance();
        seq.advance();
        let delay = seq.advance();
        assert_eq!(seq.rendered(), "");
        assert_eq!(seq.phase(), Phase::Typing);
        assert_eq!(seq.cursor().text_index, 1);
        assert_eq!(delay, Duration::from_millis(50));
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut seq = sequencer(&["a", "b"]);
        // a: type, pause-end; b: type, pause-end
        for _ in 0..4 {
            seq.advance();
        }
        assert_eq!(seq.cursor().text_index, 0);
        assert_eq!(seq.rendered(), "");
        assert_eq!(seq.completed(), 2);
    }

    #[test]
    fn test_single_phrase_counts_every_pass() {
        let mut seq = sequencer(&["Hi"]);
        // H, i, pause-end, repeated
        for _ in 0..9 {
            seq.advance();
        }
        assert_eq!(seq.cursor(), Cursor::default());
        assert_eq!(seq.completed(), 3);
    }

    #[test]
    fn test_empty_phrase_pauses_immediately() {
        let mut seq = sequencer(&["a", "", "b"]);
        seq.advance(); // "a", paused
        let delay = seq.advance(); // onto ""
        assert_eq!(seq.cursor().text_index, 1);
        assert_eq!(seq.phase(), Phase::Paused);
        assert_eq!(seq.rendered(), "");
        assert_eq!(delay, Duration::from_millis(2000));

        seq.advance();
        assert_eq!(seq.cursor().text_index, 2);
        assert_eq!(seq.phase(), Phase::Typing);
    }

    #[test]
    fn test_empty_first_phrase_starts_paused() {
        let seq = sequencer(&["", "x"]);
        assert_eq!(seq.phase(), Phase::Paused);
        assert_eq!(seq.initial_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_rendered_is_always_prefix_of_current_phrase() {
        let mut seq = sequencer(&["Read people's thoughts", "", "But yeah, it's cool."]);
        for _ in 0..200 {
            let cursor = seq.cursor();
            let text = seq.script().text(cursor.text_index);
            assert!(cursor.char_index <= seq.script().char_len(cursor.text_index));
            assert!(text.starts_with(seq.rendered()));
            assert_eq!(seq.rendered().chars().count(), cursor.char_index);
            seq.advance();
        }
    }

    #[test]
    fn test_text_index_visits_strictly_cyclic_order() {
        let mut seq = sequencer(&["ab", "c", "", "de"]);
        let mut visited = vec![seq.cursor().text_index];
        for _ in 0..40 {
            seq.advance();
            let index = seq.cursor().text_index;
            if visited.last() != Some(&index) {
                visited.push(index);
            }
        }
        for pair in visited.windows(2) {
            assert_eq!(pair[1], (pair[0] + 1) % 4);
        }
        assert!(visited.len() > 4);
    }
}
