//! The sandbox controller.
//!
//! `Sandbox` owns the levels and the published world. Edits are serialised:
//! each one cancels the running reveal, computes on a detached snapshot on a
//! blocking worker, then publishes the finished world in a single step.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{Mutex as AsyncMutex, watch};
use tokio::task::spawn_blocking;
use tokio_util::sync::CancellationToken;
use voxfall_registry::Item;
use voxfall_utils::Coordinate;

use crate::config::SandboxConfig;
use crate::error::SandboxError;
use crate::level::{self, Level};
use crate::placement::{self, Placement};
use crate::reveal::{RevealHandle, RevealPlan, spawn_reveal};
use crate::world::{World, WorldStore};

/// What a placement did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The item cannot be placed. The world is unchanged.
    Ignored,
    /// A solid block was placed.
    Placed,
    /// Liquid was poured.
    Poured {
        /// Liquid cells the pour added.
        added: usize,
        /// Reveal waves scheduled for the pour.
        waves: usize,
    },
}

struct State {
    levels: Vec<Level>,
    selected_level: usize,
    selected_item: Item,
    reveal: Option<RevealHandle>,
}

/// Owns the levels, the selection and the observable world.
pub struct Sandbox {
    config: SandboxConfig,
    store: Arc<WorldStore>,
    /// Levels as first loaded, for [`Sandbox::reset_level`].
    originals: Vec<Level>,
    state: Mutex<State>,
    /// Held for the whole of an edit so edits never interleave.
    edit_lock: AsyncMutex<()>,
}

impl Sandbox {
    /// Creates a sandbox over `levels`, starting at `config.starting_level`.
    pub fn new(levels: Vec<Level>, config: SandboxConfig) -> Result<Self, SandboxError> {
        let index = config.starting_level;
        let Some(level) = levels.get(index) else {
            return Err(SandboxError::UnknownLevel {
                index,
                count: levels.len(),
            });
        };

        let store = Arc::new(WorldStore::new(level.world.clone()));
        let selected_item = first_item(level);
        log::info!("Sandbox starting on level {index} ({})", level.name);

        Ok(Self {
            config,
            store,
            originals: levels.clone(),
            state: Mutex::new(State {
                levels,
                selected_level: index,
                selected_item,
                reveal: None,
            }),
            edit_lock: AsyncMutex::new(()),
        })
    }

    /// Creates a sandbox over the built-in levels.
    pub fn with_presets(config: SandboxConfig) -> Result<Self, SandboxError> {
        Self::new(level::presets(), config)
    }

    /// Subscribes to world changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<World>> {
        self.store.subscribe()
    }

    /// The currently published world.
    #[must_use]
    pub fn world(&self) -> Arc<World> {
        self.store.current()
    }

    /// Index of the level being played.
    #[must_use]
    pub fn selected_level(&self) -> usize {
        self.state.lock().selected_level
    }

    /// The level being played, with its world as currently edited.
    #[must_use]
    pub fn current_level(&self) -> Level {
        let state = self.state.lock();
        let mut level = state.levels[state.selected_level].clone();
        level.world = World::clone(&self.store.current());
        level
    }

    /// Selects the hotbar item used by [`Sandbox::place`].
    pub fn select_item(&self, item: Item) {
        self.state.lock().selected_item = item;
    }

    /// The selected hotbar item.
    #[must_use]
    pub fn selected_item(&self) -> Item {
        self.state.lock().selected_item
    }

    /// Places the selected item at `coordinate`.
    pub async fn place(&self, coordinate: Coordinate) -> Result<PlaceOutcome, SandboxError> {
        let item = self.selected_item();
        self.place_item(coordinate, item).await
    }

    /// Places `item` at `coordinate`.
    ///
    /// Solids replace whatever occupies the cell. Buckets pour liquid and
    /// start revealing it. Tools and food are ignored.
    pub async fn place_item(
        &self,
        coordinate: Coordinate,
        item: Item,
    ) -> Result<PlaceOutcome, SandboxError> {
        let _edit = self.edit_lock.lock().await;
        self.cancel_reveal();

        match Placement::for_item(item) {
            Placement::Ignored => {
                log::debug!("Ignored placing {item:?} at {coordinate}");
                Ok(PlaceOutcome::Ignored)
            }
            Placement::Solid(kind) => {
                let world = self.store.snapshot();
                let world =
                    spawn_blocking(move || placement::place(world, coordinate, kind)).await?;
                self.store.publish(world);
                log::debug!("Placed {kind:?} at {coordinate}");
                Ok(PlaceOutcome::Placed)
            }
            Placement::Pour(pair) => {
                let world = self.store.snapshot();
                let spread = self.config.spread();
                let (poured, plan) = spawn_blocking(move || {
                    let poured = placement::pour(&world, coordinate, pair, spread);
                    let plan = RevealPlan::for_pour(poured.world.blocks(), coordinate);
                    (poured, plan)
                })
                .await?;

                let added = poured.added;
                let waves = plan.len();
                self.store.publish(poured.world);

                if !plan.is_empty() {
                    let handle = spawn_reveal(
                        plan,
                        self.config.reveal_step(),
                        CancellationToken::new(),
                        self.store.clone(),
                    );
                    self.state.lock().reveal = Some(handle);
                }

                log::info!(
                    "Poured {:?} at {coordinate}: {added} new cells in {waves} waves",
                    pair.source
                );
                Ok(PlaceOutcome::Poured { added, waves })
            }
        }
    }

    /// Removes the block at `coordinate`. Returns whether a block was there.
    pub async fn remove(&self, coordinate: Coordinate) -> Result<bool, SandboxError> {
        let _edit = self.edit_lock.lock().await;
        self.cancel_reveal();

        let world = self.store.snapshot();
        if !world.contains(&coordinate) {
            return Ok(false);
        }
        let world = spawn_blocking(move || placement::remove(world, &coordinate)).await?;
        self.store.publish(world);
        log::debug!("Removed block at {coordinate}");
        Ok(true)
    }

    /// Removes every liquid block. Returns how many were removed.
    pub async fn clear_liquids(&self) -> Result<usize, SandboxError> {
        let _edit = self.edit_lock.lock().await;
        self.cancel_reveal();

        let world = self.store.snapshot();
        let before = world.len();
        let world = spawn_blocking(move || placement::clear_liquids(world)).await?;
        let removed = before - world.len();
        if removed > 0 {
            self.store.publish(world);
        }
        log::info!("Cleared {removed} liquid blocks");
        Ok(removed)
    }

    /// Replaces the world of the current level wholesale.
    pub async fn replace_world(&self, world: World) {
        let _edit = self.edit_lock.lock().await;
        self.cancel_reveal();
        self.store.publish(world);
    }

    /// Switches to the level at `index`, keeping edits made to the one left behind.
    pub async fn select_level(&self, index: usize) -> Result<(), SandboxError> {
        let _edit = self.edit_lock.lock().await;
        self.cancel_reveal();

        let mut state = self.state.lock();
        let count = state.levels.len();
        if index >= count {
            return Err(SandboxError::UnknownLevel { index, count });
        }

        let previous = state.selected_level;
        state.levels[previous].world = World::clone(&self.store.current());

        let level = &state.levels[index];
        let world = level.world.clone();
        let name = level.name;
        let item = if level.items.contains(&state.selected_item) {
            state.selected_item
        } else {
            first_item(level)
        };
        state.selected_item = item;
        state.selected_level = index;
        drop(state);

        self.store.publish(world);
        log::info!("Selected level {index} ({name})");
        Ok(())
    }

    /// Restores the level at `index` to how it was first loaded.
    pub async fn reset_level(&self, index: usize) -> Result<(), SandboxError> {
        let _edit = self.edit_lock.lock().await;

        let Some(original) = self.originals.get(index) else {
            return Err(SandboxError::UnknownLevel {
                index,
                count: self.originals.len(),
            });
        };

        let mut state = self.state.lock();
        state.levels[index] = original.clone();
        let is_current = state.selected_level == index;
        drop(state);

        if is_current {
            self.cancel_reveal();
            self.store.publish(original.world.clone());
        }
        log::info!("Reset level {index} ({})", original.name);
        Ok(())
    }

    /// Stops the running reveal, if any. Cells not yet revealed stay hidden.
    pub fn cancel_reveal(&self) {
        if let Some(handle) = self.state.lock().reveal.take() {
            handle.cancel();
            log::debug!("Cancelled running reveal");
        }
    }

    /// Takes ownership of the running reveal. Later edits will no longer cancel it.
    #[must_use]
    pub fn take_reveal(&self) -> Option<RevealHandle> {
        self.state.lock().reveal.take()
    }

    /// Waits until the running reveal, if any, has finished.
    pub async fn wait_for_reveal(&self) -> Result<(), SandboxError> {
        let handle = self.take_reveal();
        if let Some(handle) = handle {
            handle.join().await?;
        }
        Ok(())
    }
}

fn first_item(level: &Level) -> Item {
    level.items.first().copied().unwrap_or(Item::Pick)
}
