use rapier2d::prelude::*;
use std::collections::HashMap;

use super::collision::{CollisionEvent as GameCollisionEvent, CollisionEventQueue};

/// Handle to identify rigid bodies
pub type RigidBodyHandle = rapier2d::prelude::RigidBodyHandle;

/// Handle to identify colliders
pub type ColliderHandle = rapier2d::prelude::ColliderHandle;

/// Default downward acceleration in world units per second squared
pub const GRAVITY: Real = -30.0;

/// Physics world that manages all physics simulation
pub struct PhysicsWorld {
    /// Gravity vector
    gravity: Vector<Real>,

    /// Integration parameters for the physics simulation
    integration_parameters: IntegrationParameters,

    /// Physics pipeline handles collision detection and solving
    physics_pipeline: PhysicsPipeline,

    /// Island manager for sleeping bodies
    island_manager: IslandManager,

    /// Broad phase collision detection
    broad_phase: DefaultBroadPhase,

    /// Narrow phase collision detection
    narrow_phase: NarrowPhase,

    /// Impulse joint set
    impulse_joint_set: ImpulseJointSet,

    /// Multibody joint set
    multibody_joint_set: MultibodyJointSet,

    /// CCD solver for fast-moving objects
    ccd_solver: CCDSolver,

    /// Query pipeline for raycasts
    query_pipeline: QueryPipeline,

    /// Rigid body set
    rigid_body_set: RigidBodySet,

    /// Collider set
    collider_set: ColliderSet,

    /// Collision event handler
    collision_event_queue: CollisionEventQueue,

    /// User data mapping from colliders to game entity IDs
    collider_to_entity: HashMap<ColliderHandle, u64>,
}

impl PhysicsWorld {
    /// Create a new physics world with the default platformer gravity
    pub fn new() -> Self {
        Self::with_gravity(vector![0.0, GRAVITY])
    }

    /// Create a new physics world with custom gravity
    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        // Fixed timestep of 1/60 seconds (60 FPS)
        integration_parameters.dt = 1.0 / 60.0;

        Self {
            gravity,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            collision_event_queue: CollisionEventQueue::new(),
            collider_to_entity: HashMap::new(),
        }
    }

    /// Step the physics simulation forward by one timestep
    pub fn step(&mut self) {
        // Clear previous step's collision events
        self.collision_event_queue.clear();

        let event_handler = &self.collision_event_queue;

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            event_handler,
        );
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set)
    }

    /// Remove a collider from the physics world
    pub fn remove_collider(&mut self, handle: ColliderHandle) {
        self.collider_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.rigid_body_set,
            true, // wake up attached body
        );
        self.collider_to_entity.remove(&handle);
    }

    /// Get a reference to a rigid body
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Get a mutable reference to a rigid body
    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }

    /// Get a reference to a collider
    pub fn get_collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.collider_set.get(handle)
    }

    /// Associate a game entity ID with a collider
    pub fn set_entity_mapping(&mut self, collider: ColliderHandle, entity_id: u64) {
        self.collider_to_entity.insert(collider, entity_id);
    }

    /// Get the entity ID associated with a collider
    pub fn get_entity_id(&self, collider: ColliderHandle) -> Option<u64> {
        self.collider_to_entity.get(&collider).copied()
    }

    /// Cast a ray and return the first hit
    pub fn raycast(
        &self,
        ray_origin: Vector<Real>,
        ray_dir: Vector<Real>,
        max_toi: Real,
        solid: bool,
        filter: QueryFilter,
    ) -> Option<(ColliderHandle, Real)> {
        let ray = Ray::new(point![ray_origin.x, ray_origin.y], ray_dir);
        self.query_pipeline.cast_ray(
            &self.rigid_body_set,
            &self.collider_set,
            &ray,
            max_toi,
            solid,
            filter,
        )
    }

    /// Get all collision events from the last step
    pub fn get_collision_events(&self) -> Vec<GameCollisionEvent> {
        self.collision_event_queue.events()
    }

    /// Get current gravity
    pub fn gravity(&self) -> Vector<Real> {
        self.gravity
    }

    /// Get the current timestep
    pub fn timestep(&self) -> Real {
        self.integration_parameters.dt
    }

    /// Number of colliders in the world
    pub fn collider_count(&self) -> usize {
        self.collider_set.len()
    }

    /// Get references to internal components for debug rendering
    pub fn debug_data(&self) -> DebugData<'_> {
        DebugData {
            rigid_bodies: &self.rigid_body_set,
            colliders: &self.collider_set,
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Data structure for debug rendering
pub struct DebugData<'a> {
    pub rigid_bodies: &'a RigidBodySet,
    pub colliders: &'a ColliderSet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::presets;
    use crate::engine::physics::CollisionGroups;

    fn ground(world: &mut PhysicsWorld) -> ColliderHandle {
        let body = world.add_rigid_body(presets::static_body(0.0, -0.5));
        world.add_collider(presets::block_collider(20.0, 1.0), body)
    }

    #[test]
    fn test_body_falls_and_lands() {
        let mut world = PhysicsWorld::new();
        ground(&mut world);
        let player = world.add_rigid_body(presets::player_body(0.0, 3.0));
        world.add_collider(presets::player_collider(0.8, 1.5, 0.0), player);

        for _ in 0..120 {
            world.step();
        }

        let body = world.get_rigid_body(player).unwrap();
        // Resting on top of the ground with its half height above y = 0
        assert!((body.translation().y - 0.75).abs() < 0.05);
        assert!(body.linvel().y.abs() < 0.1);
    }

    #[test]
    fn test_raycast_hits_ground() {
        let mut world = PhysicsWorld::new();
        let ground_collider = ground(&mut world);
        world.step();

        let hit = world.raycast(
            vector![0.0, 2.0],
            vector![0.0, -1.0],
            5.0,
            true,
            QueryFilter::default(),
        );
        let (handle, toi) = hit.unwrap();
        assert_eq!(handle, ground_collider);
        assert!((toi - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_sensor_reports_events() {
        let mut world = PhysicsWorld::new();
        let trigger_body = world.add_rigid_body(presets::static_body(0.0, 0.0));
        let trigger = world.add_collider(
            presets::sensor_collider(1.0, 1.0, CollisionGroups::Checkpoint),
            trigger_body,
        );
        world.set_entity_mapping(trigger, 4);

        let player = world.add_rigid_body(presets::player_body(0.0, 0.0));
        let player_collider = world.add_collider(presets::player_collider(0.8, 1.5, 0.0), player);

        let mut events = Vec::new();
        for _ in 0..3 {
            world.step();
            events.extend(world.get_collision_events());
        }
        let other = events
            .iter()
            .filter(|e| e.is_started())
            .find_map(|e| e.other(player_collider));
        assert_eq!(other, Some(trigger));
        assert_eq!(world.get_entity_id(trigger), Some(4));
    }

}
