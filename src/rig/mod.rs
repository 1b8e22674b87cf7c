//! The rig state machine.
//!
//! [`CameraRig`] owns which motion model is active, the enable/disable
//! lifecycle of the whole rig, and the handshake with the host
//! environment. Transitions and motion all happen inside
//! [`CameraRig::tick`], driven once per rendered frame.

mod suspend;

use glam::{Quat, Vec3};
pub use suspend::{SuspendedHostState, MODAL_NAME, MODAL_PRIORITY};

use crate::host::HostEnv;
use crate::input::{BindingSource, InputFrame, InputSampler};
use crate::motion::{CameraPose, FreeFlight, MotionMode, OrbitDrag};
use crate::options::Options;

/// Which behavior currently owns the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigMode {
    /// The host's own camera and input are active; the rig is dormant.
    Disabled,
    /// Rig enabled, free-flight model active.
    FreeFlight,
    /// Rig enabled, orbit/drag model active.
    OrbitDrag,
}

/// Snapshot of the rig camera for the render boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCamera {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Near clipping plane distance.
    pub near_clip: f32,
    /// Far clipping plane distance.
    pub far_clip: f32,
    /// Render-layer mask.
    pub layer_mask: i32,
}

/// State of the directional light attached to the rig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    /// Whether the light is switched on.
    pub enabled: bool,
    /// Light intensity.
    pub intensity: f32,
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Culling-layer mask.
    pub layer_mask: i32,
}

/// The detachable camera rig.
///
/// Drives the frame tick: samples input, resolves enable/disable and
/// mode-switch transitions (same tick they are requested), then
/// delegates motion to the active model. While enabled it holds a
/// [`SuspendedHostState`] recording exactly what it overrode on the
/// host; disabling reverses every override.
#[derive(Debug)]
pub struct CameraRig {
    sampler: InputSampler,
    free: FreeFlight,
    orbit: OrbitDrag,
    camera: CameraPose,
    active: MotionMode,
    suspended: Option<SuspendedHostState>,
    layer_mask: i32,
    light_on: bool,
    overlay_visible: bool,
    cursor_grabbed: bool,
}

impl CameraRig {
    /// Create a disabled rig.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            sampler: InputSampler::new(),
            free: FreeFlight::new(&options.free_flight),
            orbit: OrbitDrag::new(),
            camera: CameraPose::with_fov(options.free_flight.fov),
            active: options.rig.initial_mode,
            suspended: None,
            layer_mask: options.camera.layer_mask,
            light_on: false,
            overlay_visible: true,
            cursor_grabbed: false,
        }
    }

    /// Advance one frame. `dt` is elapsed wall time in seconds,
    /// unaffected by the host time scale.
    ///
    /// Input is sampled first (the master toggle must stay observable
    /// even while disabled), transitions are resolved next, and the
    /// motion model active *after* any transition runs within the same
    /// tick.
    pub fn tick(
        &mut self,
        host: &mut dyn HostEnv,
        source: &dyn BindingSource,
        options: &Options,
        dt: f32,
    ) {
        let frame = self.sampler.sample(source);

        if frame.pressed.toggle_rig {
            let enable = self.suspended.is_none();
            self.set_enabled(enable, host, options);
        }

        if self.suspended.is_none() {
            return;
        }

        if frame.pressed.switch_mode {
            let next = self.active.other();
            self.switch_mode(next, host, options);
        }
        if frame.pressed.toggle_light {
            self.light_on = !self.light_on;
            log::debug!("rig light {}", if self.light_on { "on" } else { "off" });
        }
        if frame.pressed.toggle_overlay {
            self.overlay_visible = !self.overlay_visible;
        }

        // Configuration is re-read every tick; a live freeze_time change
        // takes effect without re-suspending.
        if let Some(suspended) = self.suspended.as_mut() {
            suspended.sync_time_freeze(host, options.rig.freeze_time);
        }

        self.run_motion(host, &frame, options, dt);
    }

    /// Delegate to the active motion model and forward its cursor-grab
    /// side effect.
    fn run_motion(
        &mut self,
        host: &mut dyn HostEnv,
        frame: &InputFrame,
        options: &Options,
        dt: f32,
    ) {
        let reference = host.reference_pose();
        match self.active {
            MotionMode::FreeFlight => {
                self.free.tick(
                    &mut self.camera,
                    frame,
                    &reference,
                    &options.free_flight,
                    dt,
                );
            }
            MotionMode::OrbitDrag => {
                let grabbed = self.orbit.tick(
                    &mut self.camera,
                    frame,
                    &reference,
                    &options.orbit_drag,
                    dt,
                );
                self.set_cursor(host, grabbed);
            }
        }
    }

    /// Enable or disable the rig. Idempotent: asking for the current
    /// state is a no-op. This is also the host-facing activation entry
    /// point, equivalent to the master toggle input.
    pub fn set_enabled(
        &mut self,
        enabled: bool,
        host: &mut dyn HostEnv,
        options: &Options,
    ) {
        if enabled == self.suspended.is_some() {
            return;
        }

        if enabled {
            self.suspended = Some(SuspendedHostState::acquire(
                host,
                options.rig.freeze_time,
            ));
            self.layer_mask = if options.camera.copy_host_layer_mask {
                host.layer_mask()
            } else {
                options.camera.layer_mask
            };
            self.activate(self.active, host, options);
            log::info!("camera rig enabled ({:?})", self.active);
        } else {
            if let Some(suspended) = self.suspended.take() {
                suspended.restore(host);
            }
            self.set_cursor(host, false);
            log::info!("camera rig disabled");
        }
    }

    /// Switch the enabled rig to the given motion mode. The host stays
    /// suspended throughout; only the models swap.
    fn switch_mode(
        &mut self,
        mode: MotionMode,
        host: &mut dyn HostEnv,
        options: &Options,
    ) {
        debug_assert!(
            self.suspended.is_some(),
            "mode switch requires an enabled rig"
        );
        self.set_cursor(host, false);
        self.activate(mode, host, options);
        log::info!("camera rig mode switched to {mode:?}");
    }

    /// Activate a motion model, applying the snap-to-reference policy.
    fn activate(
        &mut self,
        mode: MotionMode,
        host: &mut dyn HostEnv,
        options: &Options,
    ) {
        let reference = options
            .rig
            .snap_to_reference
            .then(|| host.reference_pose());
        match mode {
            MotionMode::FreeFlight => {
                self.free.activate(&mut self.camera, reference.as_ref());
            }
            MotionMode::OrbitDrag => {
                self.orbit.activate(&mut self.camera, reference.as_ref());
            }
        }
        self.active = mode;
    }

    /// Forward cursor-grab state to the host, only on change.
    fn set_cursor(&mut self, host: &mut dyn HostEnv, grabbed: bool) {
        if self.cursor_grabbed != grabbed {
            self.cursor_grabbed = grabbed;
            host.set_cursor_grabbed(grabbed);
        }
    }

    /// Current rig mode.
    #[must_use]
    pub fn mode(&self) -> RigMode {
        if self.suspended.is_none() {
            RigMode::Disabled
        } else {
            match self.active {
                MotionMode::FreeFlight => RigMode::FreeFlight,
                MotionMode::OrbitDrag => RigMode::OrbitDrag,
            }
        }
    }

    /// Whether the rig currently owns the camera.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.suspended.is_some()
    }

    /// The live camera pose mutated by the active motion model.
    #[must_use]
    pub fn camera_pose(&self) -> &CameraPose {
        &self.camera
    }

    /// Full camera snapshot for the render boundary.
    #[must_use]
    pub fn render_camera(&self, options: &Options) -> RenderCamera {
        RenderCamera {
            position: self.camera.position,
            rotation: self.camera.rotation,
            fov: self.camera.fov,
            near_clip: options.camera.near_clip,
            far_clip: options.camera.far_clip,
            layer_mask: self.layer_mask,
        }
    }

    /// Current rig-light state.
    #[must_use]
    pub fn light(&self, options: &Options) -> LightState {
        LightState {
            enabled: self.light_on,
            intensity: options.light.intensity,
            color: options.light.color,
            layer_mask: options.light.layer_mask,
        }
    }

    /// Whether the help overlay should be drawn.
    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::host::{
        HostCamera, HostClock, HostCursor, HostModalStack, HostPlayer,
        HostUi, ModalOverride, ModalStack, ReferencePose,
    };
    use crate::input::RigAction;

    const DT: f32 = 1.0 / 60.0;

    /// Records every host-side mutation the rig performs.
    struct FakeHost {
        camera_enabled: bool,
        camera_layer_mask: i32,
        movement_enabled: bool,
        ui_opacity: f32,
        time_scale: f32,
        cursor_grabbed: bool,
        reference: ReferencePose,
        modal: ModalStack,
        pushes: usize,
        pops: usize,
    }

    impl Default for FakeHost {
        fn default() -> Self {
            Self {
                camera_enabled: true,
                camera_layer_mask: -1,
                movement_enabled: true,
                ui_opacity: 1.0,
                time_scale: 1.0,
                cursor_grabbed: false,
                reference: ReferencePose::default(),
                modal: ModalStack::new(),
                pushes: 0,
                pops: 0,
            }
        }
    }

    impl HostCamera for FakeHost {
        fn is_enabled(&self) -> bool {
            self.camera_enabled
        }
        fn set_enabled(&mut self, enabled: bool) {
            self.camera_enabled = enabled;
        }
        fn layer_mask(&self) -> i32 {
            self.camera_layer_mask
        }
    }

    impl HostPlayer for FakeHost {
        fn reference_pose(&self) -> ReferencePose {
            self.reference
        }
        fn movement_enabled(&self) -> bool {
            self.movement_enabled
        }
        fn set_movement_enabled(&mut self, enabled: bool) {
            self.movement_enabled = enabled;
        }
    }

    impl HostUi for FakeHost {
        fn opacity(&self) -> f32 {
            self.ui_opacity
        }
        fn set_opacity(&mut self, alpha: f32) {
            self.ui_opacity = alpha;
        }
    }

    impl HostClock for FakeHost {
        fn time_scale(&self) -> f32 {
            self.time_scale
        }
        fn set_time_scale(&mut self, scale: f32) {
            self.time_scale = scale;
        }
    }

    impl HostCursor for FakeHost {
        fn set_cursor_grabbed(&mut self, grabbed: bool) {
            self.cursor_grabbed = grabbed;
        }
    }

    impl HostModalStack for FakeHost {
        fn push_override(&mut self, entry: ModalOverride) {
            self.pushes += 1;
            self.modal.push(entry);
        }
        fn pop_override(&mut self, name: &str) {
            self.pops += 1;
            self.modal.pop(name);
        }
    }

    #[derive(Default)]
    struct FakeSource {
        held: FxHashSet<RigAction>,
        look: Vec2,
        scroll: f32,
    }

    impl FakeSource {
        fn hold(&mut self, action: RigAction) {
            let _ = self.held.insert(action);
        }

        fn release(&mut self, action: RigAction) {
            let _ = self.held.remove(&action);
        }

        fn tap(action: RigAction) -> Self {
            let mut source = Self::default();
            source.hold(action);
            source
        }
    }

    impl BindingSource for FakeSource {
        fn is_held(&self, action: RigAction) -> bool {
            self.held.contains(&action)
        }
        fn look_delta(&self) -> Vec2 {
            self.look
        }
        fn scroll_delta(&self) -> f32 {
            self.scroll
        }
    }

    fn enabled_rig(
        host: &mut FakeHost,
        options: &Options,
    ) -> (CameraRig, FakeSource) {
        let mut rig = CameraRig::new(options);
        let mut source = FakeSource::tap(RigAction::ToggleRig);
        rig.tick(host, &source, options, DT);
        assert!(rig.is_enabled());
        source.release(RigAction::ToggleRig);
        rig.tick(host, &source, options, DT);
        (rig, source)
    }

    #[test]
    fn enable_then_disable_restores_host_exactly() {
        let mut host = FakeHost {
            ui_opacity: 0.8,
            time_scale: 1.0,
            ..Default::default()
        };
        let options = Options::default();
        let (mut rig, mut source) = enabled_rig(&mut host, &options);

        // Suspended: every override applied.
        assert!(!host.camera_enabled);
        assert!(!host.movement_enabled);
        assert_eq!(host.ui_opacity, 0.0);
        assert_eq!(host.time_scale, 0.0);
        assert_eq!(host.modal.len(), 1);
        assert_eq!(host.modal.active().unwrap().name, MODAL_NAME);
        assert_eq!(host.modal.active().unwrap().priority, MODAL_PRIORITY);

        source.hold(RigAction::ToggleRig);
        rig.tick(&mut host, &source, &options, DT);
        assert_eq!(rig.mode(), RigMode::Disabled);

        // Restored: every value exactly as captured.
        assert!(host.camera_enabled);
        assert!(host.movement_enabled);
        assert_eq!(host.ui_opacity, 0.8);
        assert_eq!(host.time_scale, 1.0);
        assert!(host.modal.is_empty());
    }

    #[test]
    fn master_toggle_observable_while_disabled() {
        let mut host = FakeHost::default();
        let options = Options::default();
        let mut rig = CameraRig::new(&options);
        assert_eq!(rig.mode(), RigMode::Disabled);

        let source = FakeSource::tap(RigAction::ToggleRig);
        rig.tick(&mut host, &source, &options, DT);
        assert_eq!(rig.mode(), RigMode::FreeFlight);
    }

    #[test]
    fn holding_toggle_five_ticks_fires_once() {
        let mut host = FakeHost::default();
        let options = Options::default();
        let mut rig = CameraRig::new(&options);

        let source = FakeSource::tap(RigAction::ToggleRig);
        for _ in 0..5 {
            rig.tick(&mut host, &source, &options, DT);
        }
        // A re-firing edge would have toggled the rig back off.
        assert!(rig.is_enabled());
        assert_eq!(host.pushes, 1);
    }

    #[test]
    fn mode_switch_keeps_host_suspended() {
        let mut host = FakeHost::default();
        let options = Options::default();
        let (mut rig, mut source) = enabled_rig(&mut host, &options);

        for _ in 0..3 {
            source.hold(RigAction::SwitchMode);
            rig.tick(&mut host, &source, &options, DT);
            source.release(RigAction::SwitchMode);
            rig.tick(&mut host, &source, &options, DT);
        }
        assert_eq!(rig.mode(), RigMode::OrbitDrag);
        assert_eq!(host.pushes, 1);
        assert_eq!(host.pops, 0);

        source.hold(RigAction::ToggleRig);
        rig.tick(&mut host, &source, &options, DT);
        assert_eq!(host.pushes, 1);
        assert_eq!(host.pops, 1);
    }

    #[test]
    fn mode_switch_takes_effect_same_tick() {
        let mut host = FakeHost::default();
        let options = Options::default();
        let (mut rig, mut source) = enabled_rig(&mut host, &options);
        assert_eq!(rig.mode(), RigMode::FreeFlight);

        // Switch and dolly in the same tick: the orbit model must be
        // the one consuming the scroll input.
        source.hold(RigAction::SwitchMode);
        source.scroll = 1.0;
        let before = rig.camera_pose().position;
        rig.tick(&mut host, &source, &options, DT);

        assert_eq!(rig.mode(), RigMode::OrbitDrag);
        let moved = rig.camera_pose().position - before;
        assert!(moved.length() > 0.0);
        // Dolly moved the camera, not free-flight FOV zoom.
        assert_eq!(rig.camera_pose().fov, options.free_flight.fov);
    }

    #[test]
    fn disabled_rig_skips_motion() {
        let mut host = FakeHost::default();
        let options = Options::default();
        let mut rig = CameraRig::new(&options);

        let mut source = FakeSource::default();
        source.hold(RigAction::MoveForward);
        source.look = Vec2::new(10.0, 10.0);
        let before = *rig.camera_pose();
        for _ in 0..10 {
            rig.tick(&mut host, &source, &options, DT);
        }
        assert_eq!(*rig.camera_pose(), before);
    }

    #[test]
    fn time_untouched_when_freeze_disabled() {
        let mut host = FakeHost {
            time_scale: 0.5,
            ..Default::default()
        };
        let mut options = Options::default();
        options.rig.freeze_time = false;

        let (mut rig, mut source) = enabled_rig(&mut host, &options);
        assert_eq!(host.time_scale, 0.5);

        source.hold(RigAction::ToggleRig);
        rig.tick(&mut host, &source, &options, DT);
        assert_eq!(host.time_scale, 0.5);
    }

    #[test]
    fn freeze_config_change_applies_while_enabled() {
        let mut host = FakeHost::default();
        let mut options = Options::default();
        options.rig.freeze_time = false;

        let (mut rig, source) = enabled_rig(&mut host, &options);
        assert_eq!(host.time_scale, 1.0);

        options.rig.freeze_time = true;
        rig.tick(&mut host, &source, &options, DT);
        assert_eq!(host.time_scale, 0.0);

        options.rig.freeze_time = false;
        rig.tick(&mut host, &source, &options, DT);
        assert_eq!(host.time_scale, 1.0);
    }

    #[test]
    fn enable_snaps_to_reference_when_configured() {
        let mut host = FakeHost::default();
        host.reference.position = Vec3::new(9.0, 8.0, 7.0);
        let options = Options::default();
        assert!(options.rig.snap_to_reference);

        let (rig, _) = enabled_rig(&mut host, &options);
        assert_eq!(rig.camera_pose().position, host.reference.position);
    }

    #[test]
    fn layer_mask_copied_from_host_on_enable() {
        let mut host = FakeHost {
            camera_layer_mask: 0x0f00,
            ..Default::default()
        };
        let options = Options::default();
        assert!(options.camera.copy_host_layer_mask);

        let (rig, _) = enabled_rig(&mut host, &options);
        assert_eq!(rig.render_camera(&options).layer_mask, 0x0f00);
    }

    #[test]
    fn cursor_released_on_disable() {
        let mut host = FakeHost::default();
        let options = Options::default();
        let (mut rig, mut source) = enabled_rig(&mut host, &options);

        // Into orbit mode, grab via look hold.
        source.hold(RigAction::SwitchMode);
        rig.tick(&mut host, &source, &options, DT);
        source.release(RigAction::SwitchMode);
        source.hold(RigAction::LookHold);
        rig.tick(&mut host, &source, &options, DT);
        assert!(host.cursor_grabbed);

        source.hold(RigAction::ToggleRig);
        rig.tick(&mut host, &source, &options, DT);
        assert!(!host.cursor_grabbed);
    }

    #[test]
    fn light_and_overlay_toggles() {
        let mut host = FakeHost::default();
        let options = Options::default();
        let (mut rig, mut source) = enabled_rig(&mut host, &options);

        assert!(!rig.light(&options).enabled);
        assert!(rig.overlay_visible());

        source.hold(RigAction::ToggleLight);
        source.hold(RigAction::ToggleOverlay);
        rig.tick(&mut host, &source, &options, DT);
        assert!(rig.light(&options).enabled);
        assert_eq!(rig.light(&options).intensity, options.light.intensity);
        assert!(!rig.overlay_visible());

        // Held, not re-fired.
        rig.tick(&mut host, &source, &options, DT);
        assert!(rig.light(&options).enabled);
    }

    #[test]
    fn repeated_toggle_sequences_stay_balanced() {
        let mut host = FakeHost::default();
        let options = Options::default();
        let mut rig = CameraRig::new(&options);
        let mut source = FakeSource::default();

        for _ in 0..4 {
            source.hold(RigAction::ToggleRig);
            rig.tick(&mut host, &source, &options, DT);
            source.release(RigAction::ToggleRig);
            rig.tick(&mut host, &source, &options, DT);
        }

        assert_eq!(rig.mode(), RigMode::Disabled);
        assert_eq!(host.pushes, 2);
        assert_eq!(host.pops, 2);
        assert!(host.modal.is_empty());
        assert!(host.camera_enabled);
        assert_eq!(host.time_scale, 1.0);
    }
}
