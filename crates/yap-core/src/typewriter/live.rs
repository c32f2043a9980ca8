use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::{Cursor, Phase, Script, Sequencer, Timing};

/// One published state of a live typewriter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub text: String,
    pub cursor: Cursor,
    pub phase: Phase,
    /// Phrases finished since the typewriter started.
    pub completed: u64,
}

impl Snapshot {
    fn of(sequencer: &Sequencer) -> Self {
        Self {
            text: sequencer.rendered().to_string(),
            cursor: sequencer.cursor(),
            phase: sequencer.phase(),
            completed: sequencer.completed(),
        }
    }
}

type Publisher = Arc<Mutex<Option<watch::Sender<Snapshot>>>>;

fn lock(publisher: &Publisher) -> MutexGuard<'_, Option<watch::Sender<Snapshot>>> {
    publisher.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to a typewriter running on a tokio task.
///
/// Every wake-up publishes a [`Snapshot`] on a watch channel. Stopping drops
/// the publisher under the same lock the task holds while advancing, so once
/// `stop` returns no further update can be observed. Dropping the handle
/// stops it.
#[derive(Debug)]
pub struct TypewriterHandle {
    rx: watch::Receiver<Snapshot>,
    publisher: Publisher,
    cancel: CancellationToken,
}

impl TypewriterHandle {
    /// Subscribes to buffer updates.
    ///
    /// After `stop`, `changed()` on the receiver resolves with an error.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.rx.clone()
    }

    /// Latest published snapshot.
    pub fn current(&self) -> Snapshot {
        self.rx.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        lock(&self.publisher).is_some()
    }

    /// Stops the typewriter. Idempotent.
    pub fn stop(&self) {
        if lock(&self.publisher).take().is_some() {
            tracing::debug!("live typewriter stopped");
        }
        self.cancel.cancel();
    }
}

impl Drop for TypewriterHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Starts a typewriter on the current tokio runtime.
///
/// Deadlines are chained from the previous deadline, not from when the task
/// actually woke up, so a late wake-up does not shift the rest of the
/// animation.
///
/// # Panics
/// Panics if called outside a tokio runtime.
pub fn spawn(script: Script, timing: Timing) -> TypewriterHandle {
    let mut sequencer = Sequencer::new(script, timing);
    let (tx, rx) = watch::channel(Snapshot::of(&sequencer));
    let publisher: Publisher = Arc::new(Mutex::new(Some(tx)));
    let cancel = CancellationToken::new();

    let task_publisher = Arc::clone(&publisher);
    let task_cancel = cancel.clone();
    tokio::spawn(async move {
        let mut deadline = Instant::now() + sequencer.initial_delay();
        loop {
            tokio::select! {
                () = task_cancel.cancelled() => break,
                () = tokio::time::sleep_until(deadline) => {}
            }

            let delay = {
                let guard = lock(&task_publisher);
                let Some(tx) = guard.as_ref() else {
                    break;
                };
                let delay = sequencer.advance();
                tx.send_replace(Snapshot::of(&sequencer));
                delay
            };
            deadline += delay;
        }
        tracing::trace!("live typewriter task finished");
    });

    TypewriterHandle {
        rx,
        publisher,
        cancel,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn hi_bye() -> TypewriterHandle {
        spawn(
            Script::new(["Hi", "Bye"]).unwrap(),
            Timing::from_millis(50, 2000),
        )
    }

    async fn sleep_ms(n: u64) {
        tokio::time::sleep(Duration::from_millis(n)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_publishes_scenario_timeline() {
        let handle = hi_bye();
        assert_eq!(handle.current().text, "");

        sleep_ms(60).await;
        assert_eq!(handle.current().text, "H");

        sleep_ms(50).await; // t=110
        assert_eq!(handle.current().text, "Hi");
        assert_eq!(handle.current().phase, Phase::Paused);

        sleep_ms(2000).await; // t=2110
        assert_eq!(handle.current().text, "");
        assert_eq!(handle.current().cursor.text_index, 1);

        sleep_ms(50).await; // t=2160
        assert_eq!(handle.current().text, "B");
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriber_sees_cyclic_phrases() {
        let handle = spawn(
            Script::new(["a", "b", "c"]).unwrap(),
            Timing::from_millis(10, 100),
        );
        let mut rx = handle.subscribe();

        let mut order = Vec::new();
        while order.len() < 7 {
            rx.changed().await.unwrap();
            let snapshot = rx.borrow_and_update().clone();
            if snapshot.phase == Phase::Paused {
                order.push(snapshot.cursor.text_index);
            }
        }
        assert_eq!(order, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_updates_after_stop() {
        let handle = hi_bye();
        let mut rx = handle.subscribe();

        sleep_ms(60).await;
        handle.stop();
        assert!(!handle.is_running());
        let frozen = handle.current();

        sleep_ms(10_000).await;
        assert_eq!(handle.current(), frozen);
        assert_eq!(frozen.text, "H");

        rx.borrow_and_update();
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let handle = hi_bye();
        handle.stop();
        handle.stop();
        assert!(!handle.is_running());
        assert_eq!(handle.current().text, "");
    }
}
