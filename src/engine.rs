//! Cancellable countdown tick source

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

/// Nominal wall-clock spacing between ticks.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Buffered ticks before the producer waits on the consumer.
const TICK_CHANNEL_CAPACITY: usize = 8;

/// Produces countdown tick streams, at most one active at a time.
///
/// `start` spawns a background task that emits the starting remaining-seconds
/// value immediately, then one decremented value per tick period, ending
/// after it emits `0`. Starting again or calling [`cancel`](Self::cancel)
/// stops the active task; cancellation is a normal outcome, not an error.
#[derive(Debug)]
pub struct CountdownEngine {
    tick_period: Duration,
    active: Option<CountdownHandle>,
}

#[derive(Debug)]
struct CountdownHandle {
    cancel_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl CountdownEngine {
    pub fn new() -> Self {
        Self::with_tick_period(DEFAULT_TICK_PERIOD)
    }

    /// Engine with a custom tick period. Tests use short periods so a
    /// virtual-time runtime can drive whole countdowns instantly.
    pub fn with_tick_period(tick_period: Duration) -> Self {
        Self {
            tick_period,
            active: None,
        }
    }

    /// Start a countdown of `duration_ms`, cancelling any active one first.
    ///
    /// Returns the receiving end of the tick stream. The channel closes once
    /// `0` has been emitted or the countdown is cancelled. A partial trailing
    /// second still counts as one tick, so 1500 ms starts at 2.
    pub fn start(&mut self, duration_ms: u64) -> mpsc::Receiver<u64> {
        self.cancel();

        let starting_seconds = duration_ms.div_ceil(1_000);
        let (tick_tx, tick_rx) = mpsc::channel(TICK_CHANNEL_CAPACITY);
        let (cancel_tx, cancel_rx) = watch::channel(false);

        debug!("starting countdown task from {} s", starting_seconds);
        let task = tokio::spawn(run_countdown(
            starting_seconds,
            self.tick_period,
            tick_tx,
            cancel_rx,
        ));

        self.active = Some(CountdownHandle { cancel_tx, task });
        tick_rx
    }

    /// Stop the active countdown, if any. No further ticks are emitted once
    /// the task observes the request.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.active.take() {
            if !handle.task.is_finished() {
                debug!("cancelling active countdown task");
            }
            let _ = handle.cancel_tx.send(true);
        }
    }

    /// Whether a countdown task is currently producing ticks.
    pub fn is_active(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|handle| !handle.task.is_finished())
    }
}

impl Default for CountdownEngine {
    fn default() -> Self {
        Self::new()
    }
}

async fn run_countdown(
    starting_seconds: u64,
    tick_period: Duration,
    tick_tx: mpsc::Sender<u64>,
    mut cancel_rx: watch::Receiver<bool>,
) {
    let mut interval = tokio::time::interval(tick_period);
    let mut remaining = starting_seconds;

    loop {
        tokio::select! {
            // Cancellation wins over a simultaneously due tick.
            biased;

            _ = cancel_rx.changed() => {
                debug!("countdown task cancelled at {} s", remaining);
                break;
            }

            _ = interval.tick() => {
                if tick_tx.send(remaining).await.is_err() {
                    // Receiver dropped; nobody is listening anymore.
                    break;
                }
                if remaining == 0 {
                    debug!("countdown task completed");
                    break;
                }
                remaining -= 1;
            }
        }
    }
}
