//! Direct orbit/drag motion.

use glam::Vec3;

use super::pose::CameraPose;
use crate::host::ReferencePose;
use crate::input::InputFrame;
use crate::options::OrbitDragOptions;
use crate::util::math::{euler_deg_to_quat, move_towards, quat_to_euler_deg};

/// Scene-view-style control: the camera is moved directly by held
/// gestures, with no decoupled target and no smoothing.
///
/// Per tick: drag (held) translates along the local right/up plane,
/// else look (held) rotates and applies momentum movement, else the rig
/// is passthrough. The dolly zoom along local forward is always active
/// and intentionally unbounded — unlike free-flight's clamped FOV zoom,
/// dolly distance has no limit.
#[derive(Debug, Default)]
pub struct OrbitDrag {
    /// Euler accumulator in degrees (pitch, yaw, roll unused).
    euler_deg: Vec3,
    speed: f32,
    last_move_dir: Vec3,
}

impl OrbitDrag {
    /// Create a model at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when this mode becomes active. Momentum resets; with a
    /// reference the camera snaps to it, without one the accumulator
    /// re-syncs to the current camera orientation.
    pub fn activate(
        &mut self,
        camera: &mut CameraPose,
        reference: Option<&ReferencePose>,
    ) {
        self.speed = 0.0;
        if let Some(r) = reference {
            camera.position = r.position;
            self.euler_deg = r.euler_deg;
            camera.rotation = euler_deg_to_quat(self.euler_deg);
        } else {
            self.euler_deg = quat_to_euler_deg(camera.rotation);
        }
    }

    /// Advance one tick. Returns whether the cursor should be grabbed
    /// (confined/hidden) this tick — an observable side effect the rig
    /// forwards to the host.
    pub fn tick(
        &mut self,
        camera: &mut CameraPose,
        frame: &InputFrame,
        reference: &ReferencePose,
        opts: &OrbitDragOptions,
        dt: f32,
    ) -> bool {
        // Drag wins when both gestures are held.
        let grabbed = if frame.held.drag {
            self.drag(camera, frame, opts, dt);
            true
        } else if frame.held.look {
            self.look(camera, frame, opts, dt);
            self.advance(camera, frame, opts, dt);
            true
        } else {
            false
        };

        self.dolly(camera, frame, opts, dt);
        self.apply_edges(camera, frame, reference);
        grabbed
    }

    /// Rotate from look input, directly on the camera.
    fn look(
        &mut self,
        camera: &mut CameraPose,
        frame: &InputFrame,
        opts: &OrbitDragOptions,
        dt: f32,
    ) {
        self.euler_deg.x += frame.mouse_look.y * opts.look_sensitivity * dt;
        self.euler_deg.y += frame.mouse_look.x * opts.look_sensitivity * dt;
        camera.rotation = euler_deg_to_quat(self.euler_deg);
    }

    /// Momentum movement while looking, directly on the camera.
    fn advance(
        &mut self,
        camera: &mut CameraPose,
        frame: &InputFrame,
        opts: &OrbitDragOptions,
        dt: f32,
    ) {
        if frame.move_axis.length_squared() > 0.0 {
            self.last_move_dir = frame.move_axis;
            let rate = opts.acceleration
                * if frame.held.speed_modifier {
                    opts.speed_modifier_multiplier
                } else {
                    1.0
                };
            self.speed = move_towards(self.speed, opts.max_speed, rate * dt);
        } else {
            self.speed = move_towards(self.speed, 0.0, opts.deceleration * dt);
        }

        camera.position +=
            camera.rotation * (self.last_move_dir * self.speed * dt);
    }

    /// Translate along the local right/up plane from look input. No
    /// momentum.
    fn drag(
        &self,
        camera: &mut CameraPose,
        frame: &InputFrame,
        opts: &OrbitDragOptions,
        dt: f32,
    ) {
        let multiplier = if frame.held.speed_modifier {
            opts.speed_modifier_multiplier
        } else {
            1.0
        };
        let plane = Vec3::new(-frame.mouse_look.x, frame.mouse_look.y, 0.0);
        camera.position += camera.rotation
            * (plane * opts.drag_sensitivity * dt * multiplier);
    }

    /// Dolly along local forward. Always active, unbounded.
    fn dolly(
        &self,
        camera: &mut CameraPose,
        frame: &InputFrame,
        opts: &OrbitDragOptions,
        dt: f32,
    ) {
        let zoom = frame.dolly_zoom();
        if zoom == 0.0 {
            return;
        }
        camera.position += camera.rotation
            * (Vec3::new(0.0, 0.0, zoom) * opts.zoom_sensitivity * dt);
    }

    /// Apply this tick's edge-triggered actions directly to the camera.
    fn apply_edges(
        &mut self,
        camera: &mut CameraPose,
        frame: &InputFrame,
        reference: &ReferencePose,
    ) {
        if frame.pressed.reset_position {
            camera.position = reference.position;
        }
        if frame.pressed.reset_rotation {
            self.euler_deg = Vec3::ZERO;
            camera.rotation = glam::Quat::IDENTITY;
        }
    }

    /// Current momentum speed in world units per second.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }
}
