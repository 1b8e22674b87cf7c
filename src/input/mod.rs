//! Per-tick input sampling.
//!
//! The host resolves physical controls to logical [`RigAction`]s through
//! whatever binding configuration it owns; this module only sees the
//! resulting held states (plus mouse-look and scroll deltas) through the
//! [`BindingSource`] trait. [`InputSampler`] snapshots them once per
//! tick into an immutable [`InputFrame`], deriving edge triggers so a
//! held key fires its action exactly once per press.

mod action;
mod frame;
mod sampler;

pub use action::RigAction;
pub use frame::{EdgeTriggers, HeldInputs, InputFrame};
use glam::Vec2;
pub use sampler::InputSampler;

/// Resolves the current state of each logical input.
///
/// Implementations report *level* state only; edge detection is the
/// sampler's job. Unbound actions must simply report not-held, which is
/// why there is no error path here.
pub trait BindingSource {
    /// Whether the physical control bound to `action` is currently held.
    fn is_held(&self, action: RigAction) -> bool;

    /// Mouse-look delta for this tick, in the platform's raw axes
    /// (+y = up).
    fn look_delta(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Scroll-wheel delta for this tick (+ = scroll up).
    fn scroll_delta(&self) -> f32 {
        0.0
    }
}
