//! The published, observable copy of the active world.

use std::sync::Arc;

use tokio::sync::watch;

use super::World;

/// Holds the authoritative world and notifies observers on every change.
///
/// Writers never publish a half-built world: a computation works on a
/// [`snapshot`](Self::snapshot) and hands the finished value to
/// [`publish`](Self::publish), or mutates in place through
/// [`update`](Self::update) while the channel's write lock is held.
pub struct WorldStore {
    sender: watch::Sender<Arc<World>>,
}

impl WorldStore {
    /// Creates a store publishing `world`.
    #[must_use]
    pub fn new(world: World) -> Self {
        let (sender, _) = watch::channel(Arc::new(world));
        Self { sender }
    }

    /// Subscribes to world changes. The receiver starts at the current world.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<World>> {
        self.sender.subscribe()
    }

    /// The currently published world.
    #[must_use]
    pub fn current(&self) -> Arc<World> {
        self.sender.borrow().clone()
    }

    /// An owned copy of the current world to compute on.
    #[must_use]
    pub fn snapshot(&self) -> World {
        World::clone(&self.sender.borrow())
    }

    /// Replaces the world wholesale and notifies observers.
    pub fn publish(&self, world: World) {
        self.sender.send_replace(Arc::new(world));
    }

    /// Mutates the world in place.
    ///
    /// Observers are notified only when `f` returns `true`. `f` runs under the
    /// channel's write lock, so it must not block.
    pub fn update(&self, f: impl FnOnce(&mut World) -> bool) -> bool {
        self.sender
            .send_if_modified(|world| f(Arc::make_mut(world)))
    }
}

#[cfg(test)]
mod tests {
    use voxfall_registry::BlockKind;
    use voxfall_utils::Coordinate;

    use super::*;
    use crate::block::Block;

    #[test]
    fn test_publish_notifies_subscribers() {
        let store = WorldStore::new(World::new(4, 4));
        let mut receiver = store.subscribe();
        assert!(!receiver.has_changed().unwrap_or(true));

        let mut world = store.snapshot();
        world.place(Block::new(Coordinate::new(0, 0, 0), BlockKind::Dirt));
        store.publish(world);

        assert!(receiver.has_changed().unwrap_or(false));
        assert_eq!(receiver.borrow_and_update().len(), 1);
    }

    #[test]
    fn test_update_without_change_is_silent() {
        let store = WorldStore::new(World::new(4, 4));
        let mut receiver = store.subscribe();

        assert!(!store.update(|_| false));
        assert!(!receiver.has_changed().unwrap_or(true));

        assert!(store.update(|world| {
            world.place(Block::new(Coordinate::new(1, 1, 0), BlockKind::Stone));
            true
        }));
        assert!(receiver.has_changed().unwrap_or(false));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = WorldStore::new(World::new(4, 4));
        let held = store.current();

        store.update(|world| {
            world.place(Block::new(Coordinate::new(1, 1, 0), BlockKind::Stone));
            true
        });

        assert!(held.is_empty());
        assert_eq!(store.current().len(), 1);
    }
}
