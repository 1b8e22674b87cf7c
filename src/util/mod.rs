//! Shared helpers.

/// Scalar and rotation math used by the motion models.
pub mod math;
