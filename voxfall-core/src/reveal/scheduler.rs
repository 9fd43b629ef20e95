use std::sync::Arc;
use std::time::Duration;

use tokio::task::{JoinError, JoinHandle};
use tokio::time::{Instant, sleep_until};
use tokio::{select, spawn};
use tokio_util::sync::CancellationToken;

use super::RevealPlan;
use crate::world::WorldStore;

/// A running reveal.
///
/// Cancelling only stops waves that have not fired yet. Cells already revealed
/// stay revealed and cells still hidden stay hidden.
#[derive(Debug)]
pub struct RevealHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl RevealHandle {
    /// Stops the reveal before its next wave.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// True once cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// True once the reveal task has exited, either done or cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the reveal task to exit.
    pub async fn join(self) -> Result<(), JoinError> {
        self.task.await
    }
}

/// Starts revealing `plan` on `store`, one wave every `step`.
///
/// The first wave fires immediately. Each wave checks `token` while holding the
/// store's write lock, so a wave can never land after the token was cancelled
/// by a writer that publishes afterwards.
pub fn spawn_reveal(
    plan: RevealPlan,
    step: Duration,
    token: CancellationToken,
    store: Arc<WorldStore>,
) -> RevealHandle {
    let task_token = token.clone();
    let task = spawn(async move {
        let start = Instant::now();
        let waves = plan.into_waves();
        let total = waves.len();

        for (index, wave) in waves.into_iter().enumerate() {
            if index > 0 {
                let deadline = start + step * index as u32;
                select! {
                    () = task_token.cancelled() => {
                        log::debug!("Reveal cancelled before wave {index} of {total}");
                        return;
                    }
                    () = sleep_until(deadline) => {}
                }
            }

            let mut cancelled = false;
            store.update(|world| {
                if task_token.is_cancelled() {
                    cancelled = true;
                    return false;
                }
                world.activate(&wave.coordinates) > 0
            });
            if cancelled {
                log::debug!("Reveal cancelled before wave {index} of {total}");
                return;
            }

            log::trace!(
                "Revealed wave {index} ({} cells at distance² {})",
                wave.coordinates.len(),
                wave.distance_squared
            );
        }
    });

    RevealHandle { token, task }
}
