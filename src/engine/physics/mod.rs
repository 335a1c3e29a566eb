// Physics system using rapier2d

pub mod body;
mod collision;
mod debug;
mod world;

pub use body::{presets, ColliderHandle, RigidBodyHandle};
pub use collision::{CollisionEvent, CollisionGroups};
pub use debug::DebugRenderer;
pub use world::{DebugData, PhysicsWorld, GRAVITY};

// Re-export commonly used rapier types for convenience
pub use rapier2d::prelude::{QueryFilter, Real, Vector};
