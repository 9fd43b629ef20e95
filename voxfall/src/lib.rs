//! # Voxfall
//!
//! A headless driver for the voxfall sandbox. It plays a short scripted
//! session against the preset levels and logs what the world looks like after
//! each step.

use std::sync::Arc;

use anyhow::Result;
use tokio::task::JoinHandle;
use tokio::{select, spawn};
use tokio_util::sync::CancellationToken;
use voxfall_core::{PlaceOutcome, Sandbox, SandboxConfig, World};
use voxfall_registry::Item;
use voxfall_utils::Coordinate;

/// Log setup.
pub mod logger;

/// A sandbox together with a watcher that reports every published world.
pub struct VoxfallSession {
    /// Cancels the watcher.
    pub cancel_token: CancellationToken,
    /// The sandbox being driven.
    pub sandbox: Arc<Sandbox>,
    watcher: Option<JoinHandle<()>>,
}

impl VoxfallSession {
    /// Creates a session over the preset levels.
    pub fn new(config: SandboxConfig) -> Result<Self> {
        let sandbox = Sandbox::with_presets(config)?;
        Ok(Self {
            cancel_token: CancellationToken::new(),
            sandbox: Arc::new(sandbox),
            watcher: None,
        })
    }

    /// Starts logging world changes until [`stop`](Self::stop) is called.
    pub fn start(&mut self) {
        let mut receiver = self.sandbox.subscribe();
        let cancel_token = self.cancel_token.clone();

        self.watcher = Some(spawn(async move {
            loop {
                select! {
                    () = cancel_token.cancelled() => {
                        break;
                    }
                    changed = receiver.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let world = receiver.borrow_and_update().clone();
                        log::trace!(
                            "World changed: {} blocks, {} hidden",
                            world.len(),
                            world.inactive_count()
                        );
                    }
                }
            }
        }));
    }

    /// Runs the scripted session.
    #[tracing::instrument(name = "session", skip_all)]
    pub async fn run(&self) -> Result<()> {
        let sandbox = &self.sandbox;
        let start_level = sandbox.selected_level();

        sandbox.select_level(0).await?;
        report("meadow", &sandbox.world());

        // A small tower beside the tree.
        sandbox.select_item(Item::Stone);
        for levitation in 1..=3 {
            sandbox.place(Coordinate::new(4, 12, levitation)).await?;
        }
        let removed = sandbox.remove(Coordinate::new(4, 12, 3)).await?;
        log::info!("Built a tower (top removed: {removed})");

        sandbox.select_item(Item::Bucket);
        let outcome = sandbox.place(Coordinate::new(0, 0, 5)).await?;
        log_outcome("water on the hilltop", outcome);
        sandbox.wait_for_reveal().await?;
        report("meadow after pouring", &sandbox.world());

        sandbox.select_level(2).await?;
        let outcome = sandbox
            .place_item(Coordinate::new(3, 5, 4), Item::LavaBucket)
            .await?;
        log_outcome("lava on the plateau", outcome);
        sandbox.wait_for_reveal().await?;
        report("nether after pouring", &sandbox.world());

        let cleared = sandbox.clear_liquids().await?;
        log::info!("Drained the nether ({cleared} blocks)");

        sandbox.select_level(start_level).await?;
        report("final", &sandbox.world());
        Ok(())
    }

    /// Stops the watcher.
    pub async fn stop(&mut self) {
        self.cancel_token.cancel();
        if let Some(watcher) = self.watcher.take()
            && let Err(error) = watcher.await
        {
            log::warn!("World watcher exited abnormally: {error}");
        }
    }
}

fn log_outcome(what: &str, outcome: PlaceOutcome) {
    match outcome {
        PlaceOutcome::Poured { added, waves } => {
            log::info!("Poured {what}: {added} cells revealed in {waves} waves");
        }
        PlaceOutcome::Placed => log::info!("Placed {what}"),
        PlaceOutcome::Ignored => log::info!("Nothing happened for {what}"),
    }
}

fn report(label: &str, world: &World) {
    let liquids = world.liquid_count();
    log::info!(
        "{label}: {}x{} world, {} solid blocks, {liquids} liquid blocks",
        world.width,
        world.height,
        world.len() - liquids
    );
}

#[cfg(test)]
mod tests {
    use voxfall_registry::BlockKind;

    use super::*;

    #[tokio::test]
    async fn test_scripted_session_completes() {
        let config = SandboxConfig {
            reveal_step_millis: 1,
            ..SandboxConfig::default()
        };
        let mut session = VoxfallSession::new(config).unwrap_or_else(|error| panic!("{error}"));
        session.start();

        let result = session.run().await;
        session.stop().await;
        assert!(result.is_ok(), "{result:?}");

        let sandbox = &session.sandbox;
        assert_eq!(sandbox.selected_level(), 0);
        let meadow = sandbox.world();
        let kind_at = |levitation| {
            meadow
                .block_at(&Coordinate::new(4, 12, levitation))
                .map(|block| block.kind)
        };
        assert_eq!(kind_at(2), Some(BlockKind::Stone));
        assert_ne!(kind_at(3), Some(BlockKind::Stone));
        assert!(meadow.liquid_count() > 0);
        assert_eq!(meadow.inactive_count(), 0);

        assert!(sandbox.select_level(2).await.is_ok());
        assert_eq!(sandbox.world().liquid_count(), 0);
    }
}
