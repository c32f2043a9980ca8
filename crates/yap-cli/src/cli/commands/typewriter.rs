//! `yap type`: the hero typewriter on plain stdout.
//!
//! The typewriter runs on its own task and publishes snapshots on a watch
//! channel, which only keeps the latest value. `LinePrinter` rebuilds a
//! lossless stream from whatever snapshots arrive: every phrase is printed
//! in full on its own line, even when updates were coalesced.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use yap_core::config::Config;
use yap_core::interrupt;
use yap_core::typewriter::{self, Cursor, Script, Snapshot, Timing};

/// How often the wait for the next update checks for Ctrl+C.
const INTERRUPT_POLL: Duration = Duration::from_millis(50);

pub struct TypeOptions {
    pub cycles: Option<u32>,
    pub speed_ms: Option<u64>,
    pub pause_ms: Option<u64>,
}

pub async fn run(config: &Config, options: TypeOptions) -> Result<()> {
    let script = config.typewriter.script()?;
    let timing = Timing::from_millis(
        options
            .speed_ms
            .unwrap_or(config.typewriter.typing_speed_ms),
        options.pause_ms.unwrap_or(config.typewriter.pause_ms),
    );
    tracing::info!(
        phrases = script.len(),
        typing_speed_ms = timing.typing_speed.as_millis() as u64,
        pause_ms = timing.pause.as_millis() as u64,
        cycles = ?options.cycles,
        "typing to stdout"
    );

    let handle = typewriter::spawn(script.clone(), timing);
    let mut printer = LinePrinter::new(script, &handle.current(), options.cycles);
    let mut rx = handle.subscribe();
    let mut stdout = io::stdout();

    while !printer.is_done() {
        if let Err(e) = interrupt::check() {
            let _ = writeln!(stdout);
            return Err(e);
        }
        match tokio::time::timeout(INTERRUPT_POLL, rx.changed()).await {
            Err(_) => continue,
            Ok(Err(_)) => break,
            Ok(Ok(())) => {}
        }
        let snapshot = rx.borrow_and_update().clone();
        let out = printer.feed(&snapshot);
        if !out.is_empty() {
            stdout.write_all(out.as_bytes())?;
            stdout.flush()?;
        }
    }

    handle.stop();
    tracing::info!(passes = printer.passes(), "typing finished");
    Ok(())
}

/// Turns typewriter snapshots into append-only output.
///
/// Phrase boundaries come from the snapshot's `completed` counter, so a
/// one-phrase script and updates coalesced across whole passes are both
/// printed in full.
struct LinePrinter {
    script: Script,
    /// Phrase currently being printed.
    index: usize,
    /// Characters of that phrase already written.
    printed: usize,
    /// Phrases moved past since the start.
    advances: u64,
    /// Stop once this many phrases have been moved past.
    limit: Option<u64>,
}

impl LinePrinter {
    fn new(script: Script, start: &Snapshot, cycles: Option<u32>) -> Self {
        let limit = cycles.map(|c| u64::from(c) * script.len() as u64);
        Self {
            script,
            index: start.cursor.text_index,
            printed: start.cursor.char_index,
            advances: start.completed,
            limit: limit.map(|l| l + start.completed),
        }
    }

    fn is_done(&self) -> bool {
        self.limit.is_some_and(|limit| self.advances >= limit)
    }

    /// Completed passes over the whole script.
    fn passes(&self) -> u64 {
        self.advances / self.script.len() as u64
    }

    /// Returns what to write so the output catches up with `snapshot`.
    fn feed(&mut self, snapshot: &Snapshot) -> String {
        let mut out = String::new();

        while self.advances < snapshot.completed && !self.is_done() {
            let text = self.script.text(self.index);
            let written = self.script.prefix(self.index, self.printed).len();
            out.push_str(&text[written..]);
            if !text.is_empty() {
                out.push('\n');
            }
            self.index = (self.index + 1) % self.script.len();
            self.printed = 0;
            self.advances += 1;
        }

        let target = snapshot.cursor;
        if self.advances == snapshot.completed
            && !self.is_done()
            && target.char_index > self.printed
        {
            let from = self.script.prefix(self.index, self.printed).len();
            out.push_str(&self.script.prefix(self.index, target.char_index)[from..]);
            self.printed = target.char_index;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use yap_core::typewriter::Phase;

    use super::*;

    /// Snapshot after `completed` phrases, `char_index` into phrase `text_index`.
    fn snapshot(
        script: &Script,
        completed: u64,
        text_index: usize,
        char_index: usize,
    ) -> Snapshot {
        Snapshot {
            text: script.prefix(text_index, char_index).to_string(),
            cursor: Cursor {
                text_index,
                char_index,
            },
            phase: Phase::Typing,
            completed,
        }
    }

    fn printer(phrases: &[&str], cycles: Option<u32>) -> (LinePrinter, Script) {
        let script = Script::new(phrases.iter().copied()).unwrap();
        let start = snapshot(&script, 0, 0, 0);
        (LinePrinter::new(script.clone(), &start, cycles), script)
    }

    #[test]
    fn test_appends_typed_characters() {
        let (mut p, script) = printer(&["Hi", "Bye"], None);
        assert_eq!(p.feed(&snapshot(&script, 0, 0, 1)), "H");
        assert_eq!(p.feed(&snapshot(&script, 0, 0, 2)), "i");
        assert_eq!(p.feed(&snapshot(&script, 0, 0, 2)), "");
        assert_eq!(p.feed(&snapshot(&script, 1, 1, 0)), "\n");
        assert_eq!(p.feed(&snapshot(&script, 1, 1, 2)), "By");
    }

    #[test]
    fn test_coalesced_updates_still_print_every_phrase() {
        let (mut p, script) = printer(&["one", "two", "three"], None);
        assert_eq!(p.feed(&snapshot(&script, 0, 0, 1)), "o");
        assert_eq!(p.feed(&snapshot(&script, 2, 2, 2)), "ne\ntwo\nth");
    }

    #[test]
    fn test_updates_coalesced_across_a_full_pass() {
        let (mut p, script) = printer(&["ab", "c"], None);
        assert_eq!(p.feed(&snapshot(&script, 0, 0, 1)), "a");
        assert_eq!(p.feed(&snapshot(&script, 2, 0, 1)), "b\nc\na");
    }

    #[test]
    fn test_stops_after_requested_cycles() {
        let (mut p, script) = printer(&["ab", "c"], Some(1));
        let mut out = p.feed(&snapshot(&script, 1, 1, 1));
        out.push_str(&p.feed(&snapshot(&script, 2, 0, 1)));
        assert_eq!(out, "ab\nc\n");
        assert!(p.is_done());
        assert_eq!(p.passes(), 1);
        assert_eq!(p.feed(&snapshot(&script, 3, 1, 1)), "");
    }

    #[test]
    fn test_single_phrase_repeats_and_stops() {
        let (mut p, script) = printer(&["Hi"], Some(2));
        let mut out = String::new();
        for (completed, chars) in [(0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1)] {
            out.push_str(&p.feed(&snapshot(&script, completed, 0, chars)));
        }
        assert_eq!(out, "Hi\nHi\n");
        assert!(p.is_done());
        assert_eq!(p.passes(), 2);
    }

    #[test]
    fn test_empty_phrases_print_nothing() {
        let (mut p, script) = printer(&["a", "", "b"], None);
        assert_eq!(p.feed(&snapshot(&script, 2, 2, 1)), "a\nb");
    }

    #[test]
    fn test_graphemes_are_not_split() {
        let (mut p, script) = printer(&["👋🏽!"], None);
        assert_eq!(p.feed(&snapshot(&script, 0, 0, 1)), "👋🏽");
        assert_eq!(p.feed(&snapshot(&script, 0, 0, 2)), "!");
    }
}
