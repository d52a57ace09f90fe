//! Player Controller
//!
//! Owns the per-frame movement and interaction loop for a first-person
//! walker. The camera is supplied by the caller through [`CameraControl`];
//! world objects stay in the [`World`] and are referenced by handle.
//!
//! # Frame Order
//!
//! ```text
//! update(dt)
//!   ├─ skip everything unless the pointer is locked
//!   ├─ integrate (skipped for dt <= 0, dt clamped to max_frame_delta)
//!   │    drag → gravity → intent → probes → clamp → translate → floor
//!   └─ pointer probe → hover bookkeeping
//! ```
//!
//! Edge events (jump, select trigger, lock changes, look deltas) go through
//! [`PlayerController::handle_input`] and take effect immediately.
//!
//! # Example
//!
//! ```rust,ignore
//! use walkabout_engine::camera::FpsCamera;
//! use walkabout_engine::player::{PlayerConfig, PlayerController};
//!
//! let mut player = PlayerController::new(FpsCamera::with_position(eye), PlayerConfig::default());
//! player.set_collidables(world.ids());
//!
//! // Each frame
//! player.update(dt, &mut world);
//! let pose = player.pose();
//! ```

use crate::camera::{CameraControl, Pose};
use crate::input::{InputAction, InputEvent};
use crate::physics::Ray;
use crate::world::{ObjectId, World};

use super::config::{PlayerConfig, VerticalMode};
use super::interaction::{InteractionState, TriggerOutcome};
use super::movement::{
    CollisionFlags, apply_drag, apply_gravity, apply_intent, clamp_velocity, effective_delta,
    sense_collisions, translate,
};
use super::state::PlayerState;

/// First-person movement and object interaction over a camera capability.
#[derive(Debug, Clone)]
pub struct PlayerController<C: CameraControl> {
    camera: C,
    config: PlayerConfig,
    state: PlayerState,
    interaction: InteractionState,
    /// Objects considered by every probe
    collidables: Vec<ObjectId>,
    /// Probe results from the last integrated frame
    collisions: CollisionFlags,
}

impl<C: CameraControl> PlayerController<C> {
    pub fn new(mut camera: C, config: PlayerConfig) -> Self {
        let mut position = camera.position();
        if position.y < config.floor_height {
            position.y = config.floor_height;
            camera.set_position(position);
        }
        let state = PlayerState::new(position);
        Self {
            camera,
            config,
            state,
            interaction: InteractionState::new(),
            collidables: Vec::new(),
            collisions: CollisionFlags::default(),
        }
    }

    /// Replace the set of objects probes are cast against.
    pub fn set_collidables(&mut self, ids: impl IntoIterator<Item = ObjectId>) {
        self.collidables = ids.into_iter().collect();
        log::debug!("player probes {} collidables", self.collidables.len());
    }

    pub fn collidables(&self) -> &[ObjectId] {
        &self.collidables
    }

    /// Camera position and orientation for the renderer.
    pub fn pose(&self) -> Pose {
        self.camera.pose()
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// Which probes were blocked on the last integrated frame.
    pub fn collisions(&self) -> CollisionFlags {
        self.collisions
    }

    /// Whether input currently drives the player.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.camera.is_locked()
    }

    /// Apply one input edge.
    pub fn handle_input(&mut self, event: InputEvent, world: &mut World) {
        match event {
            InputEvent::Lock => self.camera.lock(),
            InputEvent::Unlock => {
                self.camera.unlock();
                self.release_held_keys();
            }
            InputEvent::Look { dx, dy } => {
                if self.is_active() {
                    self.camera.look(dx, dy);
                }
            }
            InputEvent::Action {
                action: InputAction::Jump,
                pressed,
            } => {
                if pressed && self.is_active() {
                    self.jump();
                }
            }
            InputEvent::Action { action, pressed } => {
                self.state.movement_intent.set(action, pressed);
            }
            InputEvent::Trigger => {
                if self.is_active() {
                    self.trigger(world);
                }
            }
        }
    }

    /// Forget every held movement key.
    ///
    /// Call when key-ups can no longer reach the window: on unlock and on
    /// focus loss.
    pub fn release_held_keys(&mut self) {
        if self.state.movement_intent.any() {
            log::debug!("releasing held movement keys");
        }
        self.state.movement_intent.clear();
    }

    /// Start a jump if grounded. Only meaningful in gravity mode.
    pub fn jump(&mut self) -> bool {
        if self.config.vertical_mode != VerticalMode::Gravity || !self.state.can_jump {
            return false;
        }
        self.state.velocity.y = self.config.jump_impulse;
        self.state.can_jump = false;
        log::debug!("jump");
        true
    }

    /// Pick up or drop an object, see [`InteractionState::trigger`].
    pub fn trigger(&mut self, world: &mut World) -> TriggerOutcome {
        let pose = self.camera.pose();
        self.interaction.trigger(world, &self.config, &pose)
    }

    /// Advance one frame. `dt` is in seconds.
    pub fn update(&mut self, dt: f32, world: &mut World) {
        if !self.is_active() {
            return;
        }

        match effective_delta(dt, self.config.max_frame_delta) {
            Some(dt) => self.integrate(dt, world),
            None if dt != 0.0 => log::trace!("skipping movement for frame delta {dt}"),
            None => {}
        }

        self.update_pointer(world);
        self.state.position = self.camera.position();
    }

    fn integrate(&mut self, dt: f32, world: &World) {
        let gravity = self.config.vertical_mode == VerticalMode::Gravity;

        apply_drag(&mut self.state.velocity, self.config.drag, dt);
        if gravity {
            apply_gravity(&mut self.state.velocity, self.config.gravity_acceleration(), dt);
        }
        apply_intent(
            &mut self.state.velocity,
            &self.state.movement_intent,
            self.config.speed,
            dt,
        );

        // The carried object rides with the camera, never block on it
        let carried = self.interaction.selected();
        let collisions = sense_collisions(
            &self.camera,
            &self.config,
            world,
            &self.collidables,
            carried,
            gravity,
        );
        clamp_velocity(&mut self.state.velocity, &collisions);
        if collisions.bottom {
            self.state.can_jump = true;
        }
        self.collisions = collisions;

        translate(&mut self.camera, self.state.velocity, dt);

        let mut position = self.camera.position();
        if gravity {
            position.y += self.state.velocity.y * dt;
        }
        if position.y < self.config.floor_height {
            position.y = self.config.floor_height;
            self.state.velocity.y = 0.0;
            if gravity {
                self.state.can_jump = true;
            }
        }
        self.camera.set_position(position);
    }

    fn update_pointer(&mut self, world: &mut World) {
        let pose = self.camera.pose();
        let ray = Ray::new(pose.position, pose.forward(), self.config.interactivity_distance);
        let exclude = if self.config.carried_object_hoverable {
            None
        } else {
            self.interaction.selected()
        };
        let candidate = ray
            .nearest_hit(world, &self.collidables, &pose, exclude)
            .map(|hit| hit.object);
        self.interaction.update_hover(candidate, world, &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::FpsCamera;
    use crate::world::{Appearance, BoxObject, Parent};
    use glam::Vec3;

    const DT: f32 = 1.0 / 60.0;

    fn locked_player(position: Vec3, config: PlayerConfig) -> PlayerController<FpsCamera> {
        let mut player = PlayerController::new(FpsCamera::with_position(position), config);
        player.handle_input(InputEvent::Lock, &mut World::new());
        assert!(player.is_active());
        player
    }

    fn press(player: &mut PlayerController<FpsCamera>, world: &mut World, action: InputAction) {
        player.handle_input(InputEvent::Action { action, pressed: true }, world);
    }

    /// Boxes laid out like the demo scene
    fn box_row(count: u32) -> World {
        let mut world = World::new();
        for i in 0..count {
            world.add(BoxObject::new(Vec3::new(i as f32 * 30.0, 10.0, -30.0)));
        }
        world
    }

    fn hovering_count(world: &World) -> usize {
        world
            .iter()
            .filter(|(_, o)| o.appearance() == Appearance::Hovering)
            .count()
    }

    #[test]
    fn test_idle_player_stays_put() {
        let mut world = World::new();
        let mut player = locked_player(Vec3::new(0.0, 10.0, 0.0), PlayerConfig::default());
        for _ in 0..30 {
            player.update(DT, &mut world);
        }
        assert_eq!(player.state().velocity, Vec3::ZERO);
        assert_eq!(player.state().position, Vec3::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn test_unlocked_update_is_noop() {
        let mut world = World::new();
        let mut player =
            PlayerController::new(FpsCamera::with_position(Vec3::new(0.0, 10.0, 0.0)), PlayerConfig::default());
        press(&mut player, &mut world, InputAction::MoveForward);
        player.update(DT, &mut world);
        assert_eq!(player.state().velocity, Vec3::ZERO);
        assert_eq!(player.pose().position, Vec3::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn test_zero_delta_changes_nothing() {
        let mut world = World::new();
        let mut player = locked_player(Vec3::new(0.0, 10.0, 0.0), PlayerConfig::default());
        press(&mut player, &mut world, InputAction::MoveForward);
        for _ in 0..5 {
            player.update(DT, &mut world);
        }
        let before = *player.state();
        for _ in 0..10 {
            player.update(0.0, &mut world);
        }
        assert_eq!(player.state().position, before.position);
        assert_eq!(player.state().velocity, before.velocity);
    }

    #[test]
    fn test_invalid_delta_skips_movement() {
        let mut world = World::new();
        let mut player = locked_player(Vec3::new(0.0, 10.0, 0.0), PlayerConfig::default());
        press(&mut player, &mut world, InputAction::MoveForward);
        player.update(f32::NAN, &mut world);
        player.update(-1.0, &mut world);
        assert_eq!(player.state().velocity, Vec3::ZERO);
    }

    #[test]
    fn test_forward_velocity_matches_closed_form() {
        let mut world = World::new();
        let config = PlayerConfig::default();
        let mut player = locked_player(Vec3::new(0.0, 10.0, 0.0), config);
        press(&mut player, &mut world, InputAction::MoveForward);

        for _ in 0..60 {
            player.update(DT, &mut world);
        }

        let (s, d) = (config.speed, config.drag);
        let expected = -(s / d) * (1.0 - (1.0 - d * DT).powi(60));
        let v = player.state().velocity;
        assert!(
            (v.z - expected).abs() < 1e-2,
            "v.z = {}, expected {}",
            v.z,
            expected
        );
        assert_eq!(v.x, 0.0);
        // Forward at yaw 0 is -Z
        assert!(player.state().position.z < 0.0);
        assert_eq!(player.state().position.y, 10.0);
    }

    #[test]
    fn test_large_delta_is_clamped() {
        let mut world = World::new();
        let config = PlayerConfig::default();
        let mut player = locked_player(Vec3::new(0.0, 10.0, 0.0), config);
        press(&mut player, &mut world, InputAction::MoveForward);
        player.update(5.0, &mut world);
        let expected = -config.speed * config.max_frame_delta;
        assert!((player.state().velocity.z - expected).abs() < 1e-3);
    }

    #[test]
    fn test_box_at_exact_probe_range_blocks_each_side() {
        let cases = [
            (InputAction::MoveForward, Vec3::new(0.0, 10.0, -20.0)),
            (InputAction::MoveBackward, Vec3::new(0.0, 10.0, 20.0)),
            (InputAction::MoveLeft, Vec3::new(-20.0, 10.0, 0.0)),
            (InputAction::MoveRight, Vec3::new(20.0, 10.0, 0.0)),
        ];
        for (action, center) in cases {
            let mut world = World::new();
            let id = world.add(BoxObject::new(center));
            let mut player = locked_player(Vec3::new(0.0, 10.0, 0.0), PlayerConfig::default());
            player.set_collidables([id]);
            press(&mut player, &mut world, action);

            player.update(DT, &mut world);

            assert_eq!(player.state().velocity, Vec3::ZERO, "{action:?}");
            assert_eq!(player.pose().position, Vec3::new(0.0, 10.0, 0.0), "{action:?}");
        }
    }

    #[test]
    fn test_blocked_front_still_allows_backing_away() {
        let mut world = World::new();
        let id = world.add(BoxObject::new(Vec3::new(0.0, 10.0, -20.0)));
        let mut player = locked_player(Vec3::new(0.0, 10.0, 0.0), PlayerConfig::default());
        player.set_collidables([id]);
        press(&mut player, &mut world, InputAction::MoveBackward);

        player.update(DT, &mut world);

        assert!(player.collisions().front);
        assert!(player.state().velocity.z > 0.0);
        assert!(player.pose().position.z > 0.0);
    }

    #[test]
    fn test_ground_probe_at_exact_range() {
        // Box top at y = 20; ground probe starts at y = 30 and reaches 10
        let mut world = World::new();
        let id = world.add(BoxObject::new(Vec3::new(0.0, 10.0, 0.0)));
        let config = PlayerConfig::default().with_vertical_mode(VerticalMode::Gravity);
        let mut player = locked_player(Vec3::new(0.0, 40.0, 0.0), config);
        player.set_collidables([id]);

        player.update(DT, &mut world);

        assert!(player.collisions().bottom);
        assert_eq!(player.state().velocity.y, 0.0);
        assert!(player.state().can_jump);
        assert_eq!(player.pose().position.y, 40.0);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut world = World::new();
        let config = PlayerConfig::default().with_vertical_mode(VerticalMode::Gravity);
        let mut player = locked_player(Vec3::new(0.0, 10.0, 0.0), config);

        // Not grounded until the first frame lands on the floor
        assert!(!player.jump());
        player.update(DT, &mut world);
        assert!(player.state().can_jump);

        press(&mut player, &mut world, InputAction::Jump);
        assert_eq!(player.state().velocity.y, config.jump_impulse);
        assert!(!player.state().can_jump);

        player.update(DT, &mut world);
        assert!(player.pose().position.y > 10.0);
        let vy = player.state().velocity.y;
        press(&mut player, &mut world, InputAction::Jump);
        assert_eq!(player.state().velocity.y, vy);

        for _ in 0..120 {
            player.update(DT, &mut world);
        }
        assert_eq!(player.pose().position.y, config.floor_height);
        assert_eq!(player.state().velocity.y, 0.0);
        assert!(player.state().can_jump);
    }

    #[test]
    fn test_height_locked_ignores_jump() {
        let mut world = World::new();
        let mut player = locked_player(Vec3::new(0.0, 10.0, 0.0), PlayerConfig::default());
        player.update(DT, &mut world);
        press(&mut player, &mut world, InputAction::Jump);
        player.update(DT, &mut world);
        assert_eq!(player.state().velocity.y, 0.0);
        assert_eq!(player.pose().position.y, 10.0);
    }

    #[test]
    fn test_floor_clamp_in_height_locked_mode() {
        let mut world = World::new();
        let mut player = locked_player(Vec3::new(0.0, 2.0, 0.0), PlayerConfig::default());
        player.update(DT, &mut world);
        assert_eq!(player.pose().position.y, 10.0);
        assert!(!player.state().can_jump);
    }

    #[test]
    fn test_single_hover_follows_pointer() {
        let mut world = box_row(5);
        let mut player = locked_player(Vec3::new(0.0, 10.0, 0.0), PlayerConfig::default());
        player.set_collidables(world.ids());

        player.update(DT, &mut world);
        assert_eq!(player.interaction().hovered(), Some(ObjectId(0)));
        assert_eq!(hovering_count(&world), 1);

        // Turn toward the second box
        player.camera_mut().yaw = std::f32::consts::FRAC_PI_4;
        player.update(DT, &mut world);
        assert_eq!(player.interaction().hovered(), Some(ObjectId(1)));
        assert_eq!(hovering_count(&world), 1);
        let first = world.get(ObjectId(0)).unwrap();
        assert_eq!(first.appearance(), Appearance::Default);
        assert_eq!(first.scale(), Vec3::ONE);

        // Look at the sky
        player.camera_mut().set_pitch(1.2);
        player.update(DT, &mut world);
        assert_eq!(player.interaction().hovered(), None);
        assert_eq!(hovering_count(&world), 0);
    }

    #[test]
    fn test_select_then_deselect_restores_object() {
        let mut world = box_row(3);
        let mut player = locked_player(Vec3::new(0.0, 10.0, 0.0), PlayerConfig::default());
        player.set_collidables(world.ids());
        let target = ObjectId(0);

        player.update(DT, &mut world);
        player.handle_input(InputEvent::Trigger, &mut world);
        assert_eq!(player.interaction().selected(), Some(target));

        // Walk a little while carrying
        press(&mut player, &mut world, InputAction::MoveRight);
        for _ in 0..10 {
            player.update(DT, &mut world);
        }
        {
            let carried = world.get(target).unwrap();
            assert_eq!(carried.parent(), Parent::Camera);
            assert_eq!(carried.appearance(), Appearance::Selected);
        }
        // The carried box sits under the pointer
        assert_eq!(player.interaction().hovered(), Some(target));

        player.handle_input(InputEvent::Trigger, &mut world);
        assert!(!player.interaction().is_carrying());

        let object = world.get(target).unwrap();
        assert_eq!(object.parent(), Parent::World);
        assert_eq!(object.position(), Vec3::new(0.0, 10.0, -30.0));
        assert_eq!(object.scale(), Vec3::ONE);
        assert_eq!(object.appearance(), Appearance::Default);
    }

    #[test]
    fn test_carried_object_not_hoverable_when_disabled() {
        let mut world = box_row(1);
        let config = PlayerConfig {
            carried_object_hoverable: false,
            ..PlayerConfig::default()
        };
        let mut player = locked_player(Vec3::new(0.0, 10.0, 0.0), config);
        player.set_collidables(world.ids());

        player.update(DT, &mut world);
        player.handle_input(InputEvent::Trigger, &mut world);
        player.update(DT, &mut world);

        assert_eq!(player.interaction().hovered(), None);
        // Nothing hovered, so the trigger cannot drop it
        assert_eq!(player.trigger(&mut world), TriggerOutcome::Ignored);
        assert!(player.interaction().is_carrying());
    }

    #[test]
    fn test_carried_object_does_not_block_movement() {
        let mut world = box_row(1);
        // Probes at eye height would run straight through the carried box
        let config = PlayerConfig {
            probe_height_offset: 0.0,
            ..PlayerConfig::default()
        };
        let mut player = locked_player(Vec3::new(0.0, 10.0, 0.0), config);
        player.set_collidables(world.ids());

        player.update(DT, &mut world);
        player.handle_input(InputEvent::Trigger, &mut world);
        press(&mut player, &mut world, InputAction::MoveForward);
        player.update(DT, &mut world);

        assert!(!player.collisions().front);
        assert!(player.state().velocity.z < 0.0);
    }

    #[test]
    fn test_trigger_and_look_ignored_while_unlocked() {
        let mut world = box_row(1);
        let mut player = locked_player(Vec3::new(0.0, 10.0, 0.0), PlayerConfig::default());
        player.set_collidables(world.ids());
        player.update(DT, &mut world);

        player.handle_input(InputEvent::Unlock, &mut world);
        player.handle_input(InputEvent::Trigger, &mut world);
        player.handle_input(InputEvent::Look { dx: 100.0, dy: 0.0 }, &mut world);

        assert!(!player.interaction().is_carrying());
        assert_eq!(player.pose().yaw, 0.0);
    }

    #[test]
    fn test_unlock_clears_held_keys() {
        let mut world = World::new();
        let mut player = locked_player(Vec3::new(0.0, 10.0, 0.0), PlayerConfig::default());
        press(&mut player, &mut world, InputAction::MoveForward);
        player.handle_input(InputEvent::Unlock, &mut world);
        assert!(!player.state().movement_intent.any());
    }

    #[test]
    fn test_focus_loss_releases_held_keys() {
        let mut world = World::new();
        let start = Vec3::new(0.0, 10.0, 0.0);
        let mut player = locked_player(start, PlayerConfig::default());
        press(&mut player, &mut world, InputAction::MoveForward);

        // The key-up lands in another window
        player.camera_mut().pointer_mut().handle_focus_lost();
        player.release_held_keys();
        player.camera_mut().pointer_mut().handle_focus_gained();
        assert!(player.is_active());

        for _ in 0..60 {
            player.update(DT, &mut world);
        }
        assert!(!player.state().movement_intent.any());
        assert_eq!(player.pose().position, start);
    }

    #[test]
    fn test_box_at_exact_pointer_range_is_hovered() {
        // Box face at z = -100, pointer range 100 from the origin
        let mut world = World::new();
        let id = world.add(BoxObject::new(Vec3::new(0.0, 10.0, -110.0)));
        let mut player = locked_player(Vec3::new(0.0, 10.0, 0.0), PlayerConfig::default());
        player.set_collidables([id]);

        player.update(0.0, &mut world);
        assert_eq!(player.interaction().hovered(), Some(id));

        // One step further back is out of reach
        let mut world = World::new();
        let id = world.add(BoxObject::new(Vec3::new(0.0, 10.0, -110.5)));
        player.set_collidables([id]);
        player.update(0.0, &mut world);
        assert_eq!(player.interaction().hovered(), None);
    }

    #[test]
    fn test_new_clamps_start_to_floor() {
        let player = PlayerController::new(
            FpsCamera::with_position(Vec3::new(3.0, -4.0, 1.0)),
            PlayerConfig::default(),
        );
        assert!(!player.is_active());
        assert_eq!(player.state().position, Vec3::new(3.0, 10.0, 1.0));
        assert_eq!(player.pose().position, Vec3::new(3.0, 10.0, 1.0));
    }
}
