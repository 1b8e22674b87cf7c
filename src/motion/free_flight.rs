//! Target-chasing free-flight motion.

use glam::{Quat, Vec3};

use super::clamp_fov;
use super::pose::{CameraPose, Pose};
use crate::host::ReferencePose;
use crate::input::InputFrame;
use crate::options::FreeFlightOptions;
use crate::util::math::{
    euler_deg_to_quat, lerp, move_towards, quat_to_euler_deg, smooth_factor,
};

/// 6-DOF flight toward a decoupled target pose.
///
/// Look and move input integrate into the *target*; the live camera
/// either snaps to it or eases toward it with an exponential approach,
/// depending on the smoothing flag. Zoom is a clamped FOV accumulator
/// that gets the same low-pass treatment.
///
/// Orientation is a plain Euler accumulator (degrees) composed in YXZ
/// order every tick. This is an accepted approximation: no gimbal
/// correction, no quaternion-stable orbit.
#[derive(Debug)]
pub struct FreeFlight {
    target: Pose,
    /// Euler accumulator in degrees (pitch, yaw, roll).
    euler_deg: Vec3,
    speed: f32,
    last_move_dir: Vec3,
    /// Clamped FOV accumulator in degrees.
    zoom_deg: f32,
    /// Low-pass-filtered zoom, written to the camera while smoothing.
    smoothed_zoom_deg: f32,
    smoothing: bool,
}

impl FreeFlight {
    /// Create a model at rest with the configured starting FOV and
    /// smoothing default.
    #[must_use]
    pub fn new(opts: &FreeFlightOptions) -> Self {
        let fov = clamp_fov(opts.fov);
        Self {
            target: Pose::default(),
            euler_deg: Vec3::ZERO,
            speed: 0.0,
            last_move_dir: Vec3::ZERO,
            zoom_deg: fov,
            smoothed_zoom_deg: fov,
            smoothing: opts.smoothing,
        }
    }

    /// Called when this mode becomes active. Momentum always resets;
    /// with a reference the camera and target both snap to it, without
    /// one the target re-syncs to the current camera so activation
    /// never jumps.
    pub fn activate(
        &mut self,
        camera: &mut CameraPose,
        reference: Option<&ReferencePose>,
    ) {
        self.speed = 0.0;
        if let Some(r) = reference {
            self.euler_deg = r.euler_deg;
            self.target = Pose {
                position: r.position,
                rotation: euler_deg_to_quat(r.euler_deg),
            };
            camera.position = self.target.position;
            camera.rotation = self.target.rotation;
        } else {
            self.target = camera.pose();
            self.euler_deg = quat_to_euler_deg(camera.rotation);
        }
    }

    /// Advance one tick. `dt` is unscaled elapsed seconds.
    pub fn tick(
        &mut self,
        camera: &mut CameraPose,
        frame: &InputFrame,
        reference: &ReferencePose,
        opts: &FreeFlightOptions,
        dt: f32,
    ) {
        self.integrate_look(frame, opts, dt);
        self.integrate_move(frame, opts, dt);
        self.integrate_zoom(frame, opts, dt);
        // Edges go last so a reset wins its tick over concurrent input.
        self.apply_edges(camera, frame, reference);
        self.write_camera(camera, opts, dt);
    }

    /// Integrate look/roll input into the Euler accumulator.
    fn integrate_look(
        &mut self,
        frame: &InputFrame,
        opts: &FreeFlightOptions,
        dt: f32,
    ) {
        let look =
            frame.mouse_look * opts.mouse_look_multiplier + frame.key_look;
        self.euler_deg.x += look.y * opts.look_speed * dt;
        self.euler_deg.y += look.x * opts.look_speed * dt;
        self.euler_deg.z += frame.roll * opts.roll_speed * dt;
        self.target.rotation = euler_deg_to_quat(self.euler_deg);
    }

    /// Momentum model: accelerate toward max speed while move input is
    /// held, glide to a stop after release.
    fn integrate_move(
        &mut self,
        frame: &InputFrame,
        opts: &FreeFlightOptions,
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
            self.speed =
                move_towards(self.speed, opts.max_speed, rate * dt);
        } else {
            self.speed = move_towards(self.speed, 0.0, opts.deceleration * dt);
        }

        self.target.position +=
            self.target.rotation * (self.last_move_dir * self.speed * dt);
    }

    /// Advance the clamped FOV accumulator.
    fn integrate_zoom(
        &mut self,
        frame: &InputFrame,
        opts: &FreeFlightOptions,
        dt: f32,
    ) {
        self.zoom_deg =
            clamp_fov(self.zoom_deg + frame.fov_zoom() * opts.zoom_speed * dt);
    }

    /// Apply this tick's edge-triggered actions.
    fn apply_edges(
        &mut self,
        camera: &mut CameraPose,
        frame: &InputFrame,
        reference: &ReferencePose,
    ) {
        if frame.pressed.reset_position {
            // Zero smoothing lag: the live camera snaps too.
            self.target.position = reference.position;
            camera.position = reference.position;
        }
        if frame.pressed.reset_rotation {
            self.euler_deg = Vec3::ZERO;
            self.target.rotation = Quat::IDENTITY;
        }
        if frame.pressed.toggle_smoothing {
            self.smoothing = !self.smoothing;
            log::debug!("free-flight smoothing {}", self.smoothing);
        }
    }

    /// Write the camera pose: snap or exponential approach.
    fn write_camera(
        &mut self,
        camera: &mut CameraPose,
        opts: &FreeFlightOptions,
        dt: f32,
    ) {
        if self.smoothing {
            let t = smooth_factor(opts.smoothing_speed, dt);
            camera.position = camera.position.lerp(self.target.position, t);
            camera.rotation = camera.rotation.slerp(self.target.rotation, t);
            self.smoothed_zoom_deg =
                lerp(self.smoothed_zoom_deg, self.zoom_deg, t);
        } else {
            camera.position = self.target.position;
            camera.rotation = self.target.rotation;
            self.smoothed_zoom_deg = self.zoom_deg;
        }
        camera.fov = clamp_fov(self.smoothed_zoom_deg);
    }

    /// Current momentum speed in world units per second.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// The pose the camera is chasing.
    #[must_use]
    pub fn target(&self) -> &Pose {
        &self.target
    }

    /// Euler accumulator in degrees (pitch, yaw, roll).
    #[must_use]
    pub fn euler_deg(&self) -> Vec3 {
        self.euler_deg
    }

    /// Whether smoothing is currently enabled.
    #[must_use]
    pub fn smoothing_enabled(&self) -> bool {
        self.smoothing
    }
}
