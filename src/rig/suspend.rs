//! Host-state suspension record.

use crate::host::{HostEnv, LockFlags, ModalOverride};

/// Name of the rig's modal override entry.
pub const MODAL_NAME: &str = "freerig";
/// Priority of the rig's modal override entry.
pub const MODAL_PRIORITY: i32 = 200;

/// Record of everything the rig overrode on the host side.
///
/// Created when the rig leaves `Disabled`, consumed (and exactly
/// reversed) when it returns there. Exclusively owned by the state
/// machine in between; consuming `restore` makes double-release
/// unrepresentable.
#[derive(Debug)]
pub struct SuspendedHostState {
    camera_enabled: bool,
    movement_enabled: bool,
    ui_opacity: f32,
    /// Original time scale, captured only while time is frozen.
    time_scale: Option<f32>,
}

impl SuspendedHostState {
    /// Capture the host's current state, then apply every override:
    /// host camera off, player movement off, UI transparent, modal
    /// override pushed, and (if requested) simulation time frozen.
    pub fn acquire(host: &mut dyn HostEnv, freeze_time: bool) -> Self {
        let mut state = Self {
            camera_enabled: host.is_enabled(),
            movement_enabled: host.movement_enabled(),
            ui_opacity: host.opacity(),
            time_scale: None,
        };

        host.set_enabled(false);
        host.set_movement_enabled(false);
        host.set_opacity(0.0);
        host.push_override(ModalOverride {
            name: MODAL_NAME.to_owned(),
            priority: MODAL_PRIORITY,
            locks: LockFlags {
                camera_input: true,
                player_input: true,
                cursor: true,
            },
        });

        state.sync_time_freeze(host, freeze_time);
        state
    }

    /// Freeze or thaw simulation time to match the configured policy,
    /// capturing the original scale on the first freeze and restoring
    /// it on thaw. Called once per enabled tick so a live configuration
    /// change takes effect without re-suspending.
    pub fn sync_time_freeze(&mut self, host: &mut dyn HostEnv, freeze: bool) {
        if freeze {
            if self.time_scale.is_none() {
                self.time_scale = Some(host.time_scale());
                host.set_time_scale(0.0);
            }
        } else if let Some(scale) = self.time_scale.take() {
            host.set_time_scale(scale);
        }
    }

    /// Reverse every override captured at acquire time.
    pub fn restore(mut self, host: &mut dyn HostEnv) {
        self.sync_time_freeze(host, false);
        host.set_enabled(self.camera_enabled);
        host.set_movement_enabled(self.movement_enabled);
        host.set_opacity(self.ui_opacity);
        host.pop_override(MODAL_NAME);
    }
}
