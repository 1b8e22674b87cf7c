use glam::{Vec2, Vec3};
use rustc_hash::FxHashSet;

use super::frame::{EdgeTriggers, HeldInputs};
use super::{BindingSource, InputFrame, RigAction};

/// Snapshots logical input state once per tick.
///
/// The sampler is the only component that remembers input across ticks:
/// it keeps the previous tick's held set so it can report a toggle as
/// "pressed" exactly once per physical press. It has no other side
/// effects and must be sampled every tick even while the rig is
/// disabled, because the master toggle has to stay observable.
#[derive(Debug, Default)]
pub struct InputSampler {
    prev_held: FxHashSet<RigAction>,
}

/// Compose a positive and a negative key into a [-1, 1] axis.
fn axis(positive: bool, negative: bool) -> f32 {
    f32::from(i8::from(positive) - i8::from(negative))
}

impl InputSampler {
    /// Create a sampler with no remembered presses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current state of every logical input and produce this
    /// tick's [`InputFrame`].
    pub fn sample(&mut self, source: &dyn BindingSource) -> InputFrame {
        let mut now = FxHashSet::default();
        for action in RigAction::ALL {
            if source.is_held(action) {
                let _ = now.insert(action);
            }
        }

        let held = |a: RigAction| now.contains(&a);
        let pressed =
            |a: RigAction| now.contains(&a) && !self.prev_held.contains(&a);

        let frame = InputFrame {
            move_axis: Vec3::new(
                axis(held(RigAction::MoveRight), held(RigAction::MoveLeft)),
                axis(held(RigAction::MoveUp), held(RigAction::MoveDown)),
                axis(held(RigAction::MoveForward), held(RigAction::MoveBack)),
            ),
            // Platform mouse axes are +y up; look input is +y down.
            mouse_look: {
                let d = source.look_delta();
                Vec2::new(d.x, -d.y)
            },
            key_look: Vec2::new(
                axis(held(RigAction::YawRight), held(RigAction::YawLeft)),
                axis(held(RigAction::PitchDown), held(RigAction::PitchUp)),
            ),
            roll: axis(held(RigAction::RollLeft), held(RigAction::RollRight)),
            scroll: source.scroll_delta(),
            key_zoom: axis(held(RigAction::ZoomIn), held(RigAction::ZoomOut)),
            pressed: EdgeTriggers {
                toggle_rig: pressed(RigAction::ToggleRig),
                switch_mode: pressed(RigAction::SwitchMode),
                reset_position: pressed(RigAction::ResetPosition),
                reset_rotation: pressed(RigAction::ResetRotation),
                toggle_smoothing: pressed(RigAction::ToggleSmoothing),
                toggle_light: pressed(RigAction::ToggleLight),
                toggle_overlay: pressed(RigAction::ToggleOverlay),
            },
            held: HeldInputs {
                speed_modifier: held(RigAction::SpeedModifier),
                look: held(RigAction::LookHold),
                drag: held(RigAction::DragHold),
            },
        };

        self.prev_held = now;
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn unbound_inputs_read_inactive() {
        let mut sampler = InputSampler::new();
        let frame = sampler.sample(&FakeSource::default());
        assert_eq!(frame, InputFrame::default());
    }

    #[test]
    fn held_toggle_fires_exactly_once() {
        let mut sampler = InputSampler::new();
        let mut source = FakeSource::default();
        source.hold(RigAction::ToggleRig);

        let mut fires = 0;
        for _ in 0..5 {
            if sampler.sample(&source).pressed.toggle_rig {
                fires += 1;
            }
        }
        assert_eq!(fires, 1);
    }

    #[test]
    fn release_and_repress_fires_again() {
        let mut sampler = InputSampler::new();
        let mut source = FakeSource::default();

        source.hold(RigAction::ResetRotation);
        assert!(sampler.sample(&source).pressed.reset_rotation);

        source.release(RigAction::ResetRotation);
        assert!(!sampler.sample(&source).pressed.reset_rotation);

        source.hold(RigAction::ResetRotation);
        assert!(sampler.sample(&source).pressed.reset_rotation);
    }

    #[test]
    fn opposed_movement_keys_cancel() {
        let mut sampler = InputSampler::new();
        let mut source = FakeSource::default();
        source.hold(RigAction::MoveForward);
        source.hold(RigAction::MoveBack);
        source.hold(RigAction::MoveRight);

        let frame = sampler.sample(&source);
        assert_eq!(frame.move_axis, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn mouse_look_y_is_inverted() {
        let mut sampler = InputSampler::new();
        let source = FakeSource {
            look: Vec2::new(3.0, 2.0),
            ..Default::default()
        };
        let frame = sampler.sample(&source);
        assert_eq!(frame.mouse_look, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn zoom_composition_signs() {
        let mut sampler = InputSampler::new();
        let mut source = FakeSource {
            scroll: 1.0,
            ..Default::default()
        };
        source.hold(RigAction::ZoomIn);

        let frame = sampler.sample(&source);
        // Scroll up narrows FOV but dollies forward.
        assert!((frame.fov_zoom() - (-1.0 + 0.15)).abs() < 1e-6);
        assert!((frame.dolly_zoom() - (1.0 + 0.15)).abs() < 1e-6);
    }

    #[test]
    fn holds_are_level_triggered() {
        let mut sampler = InputSampler::new();
        let mut source = FakeSource::default();
        source.hold(RigAction::SpeedModifier);

        for _ in 0..3 {
            assert!(sampler.sample(&source).held.speed_modifier);
        }
    }
}
