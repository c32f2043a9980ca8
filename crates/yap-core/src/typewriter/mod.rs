//! Typewriter sequencer.
//!
//! Cycles through a fixed [`Script`], revealing each phrase one character at a
//! time, holding the finished phrase, then moving on to the next one (wrapping
//! around forever).
//!
//! Structure:
//! - `script.rs`: the immutable phrase list (grapheme-aware)
//! - `sequencer.rs`: the pure state machine (cursor + phase)
//! - `timeline.rs`: the `Scheduler` seam and a deterministic deadline queue
//! - `handle.rs`: `Typewriter`, a sequencer bound to one pending timer
//! - `live.rs`: async handle driven by tokio timers, publishing on a watch channel
//!
//! The sequencer never sleeps or spawns anything itself. Every wake-up comes
//! from a scheduler, which makes the whole thing testable on simulated time.

mod handle;
mod live;
mod script;
mod sequencer;
mod timeline;

pub use handle::Typewriter;
pub use live::{Snapshot, TypewriterHandle, spawn};
pub use script::Script;
pub use sequencer::{Cursor, Phase, Sequencer, Timing};
pub use timeline::{Scheduler, TimerId, Timeline};
