use rapier2d::prelude::*;
use std::sync::{Arc, Mutex};

/// Collision groups for filtering what objects can collide with each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// The player body
    Player = 0b0000_0001,

    /// Level blocks and platforms
    Block = 0b0000_0010,

    /// Invisible walls around the level
    Bounds = 0b0000_0100,

    /// Checkpoint triggers
    Checkpoint = 0b0000_1000,

    /// Finish flag trigger
    Finish = 0b0001_0000,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // The player touches everything in the level
            CollisionGroups::Player => Group::from_bits_truncate(
                CollisionGroups::Block as u32
                    | CollisionGroups::Bounds as u32
                    | CollisionGroups::Checkpoint as u32
                    | CollisionGroups::Finish as u32,
            ),

            // Static geometry only needs to stop the player
            CollisionGroups::Block | CollisionGroups::Bounds => {
                Group::from_bits_truncate(CollisionGroups::Player as u32)
            }

            // Triggers only care about the player
            CollisionGroups::Checkpoint | CollisionGroups::Finish => {
                Group::from_bits_truncate(CollisionGroups::Player as u32)
            }
        };

        InteractionGroups::new(memberships, filter)
    }

    /// Solid groups ground and ceiling rays should hit
    pub fn solid_filter() -> InteractionGroups {
        InteractionGroups::new(
            Group::ALL,
            Group::from_bits_truncate(CollisionGroups::Block as u32 | CollisionGroups::Bounds as u32),
        )
    }
}

/// Custom collision event for game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    /// Two colliders started touching
    Started {
        collider1: ColliderHandle,
        collider2: ColliderHandle,
    },

    /// Two colliders stopped touching
    Stopped {
        collider1: ColliderHandle,
        collider2: ColliderHandle,
    },
}

impl CollisionEvent {
    /// The other collider if `handle` is part of this event
    pub fn other(&self, handle: ColliderHandle) -> Option<ColliderHandle> {
        let (a, b) = match *self {
            CollisionEvent::Started {
                collider1,
                collider2,
            }
            | CollisionEvent::Stopped {
                collider1,
                collider2,
            } => (collider1, collider2),
        };
        if a == handle {
            Some(b)
        } else if b == handle {
            Some(a)
        } else {
            None
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, CollisionEvent::Started { .. })
    }
}

/// Queue for storing collision events during physics step
pub struct CollisionEventQueue {
    events: Arc<Mutex<Vec<CollisionEvent>>>,
}

impl CollisionEventQueue {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::with_capacity(16))),
        }
    }

    /// Clear all events (call at start of physics step)
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    /// Get all collision events from this step
    pub fn events(&self) -> Vec<CollisionEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn push(&self, event: CollisionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Default for CollisionEventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for CollisionEventQueue {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: rapier2d::prelude::CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        match event {
            rapier2d::prelude::CollisionEvent::Started(h1, h2, _flags) => {
                self.push(CollisionEvent::Started {
                    collider1: h1,
                    collider2: h2,
                });
            }
            rapier2d::prelude::CollisionEvent::Stopped(h1, h2, _flags) => {
                self.push(CollisionEvent::Stopped {
                    collider1: h1,
                    collider2: h2,
                });
            }
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CollisionGroups; 5] = [
        CollisionGroups::Player,
        CollisionGroups::Block,
        CollisionGroups::Bounds,
        CollisionGroups::Checkpoint,
        CollisionGroups::Finish,
    ];

    #[test]
    fn test_collision_groups_bits() {
        for (i, group1) in ALL.iter().enumerate() {
            for (j, group2) in ALL.iter().enumerate() {
                if i != j {
                    assert_ne!(
                        *group1 as u32, *group2 as u32,
                        "Groups must have unique bits"
                    );
                }
            }
        }
    }

    #[test]
    fn test_player_touches_everything() {
        let player = CollisionGroups::Player.to_interaction_groups();
        for group in ALL.iter().skip(1) {
            let other = group.to_interaction_groups();
            assert!(player.test(other), "{:?} should interact with the player", group);
        }
    }

    #[test]
    fn test_static_groups_ignore_each_other() {
        let block = CollisionGroups::Block.to_interaction_groups();
        let checkpoint = CollisionGroups::Checkpoint.to_interaction_groups();
        let bounds = CollisionGroups::Bounds.to_interaction_groups();
        assert!(!block.test(checkpoint));
        assert!(!block.test(bounds));
    }

    #[test]
    fn test_event_other() {
        let a = ColliderHandle::from_raw_parts(1, 0);
        let b = ColliderHandle::from_raw_parts(2, 0);
        let c = ColliderHandle::from_raw_parts(3, 0);
        let event = CollisionEvent::Started {
            collider1: a,
            collider2: b,
        };
        assert_eq!(event.other(a), Some(b));
        assert_eq!(event.other(b), Some(a));
        assert_eq!(event.other(c), None);
        assert!(event.is_started());
    }
}
