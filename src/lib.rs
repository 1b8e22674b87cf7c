// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Camera math compares against exact constants (0.0, 1.0, clamp bounds)
#![allow(clippy::float_cmp)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::struct_excessive_bools)]

//! Detachable free-camera rig controller for real-time 3D applications.
//!
//! Freerig lets an operator decouple a virtual camera from the host
//! application's gameplay camera, fly it freely through the scene, and
//! return control cleanly. The crate is the motion/state core only: it
//! maps per-tick input to camera motion, runs the target-based smoothing
//! model, and arbitrates the mode state machine that suspends and
//! restores the host's own camera, input, and UI without leaking state.
//!
//! # Key entry points
//!
//! - [`rig::CameraRig`] - the rig state machine; call
//!   [`tick`](rig::CameraRig::tick) once per rendered frame
//! - [`host`] - capability traits the embedding application implements
//!   ([`host::HostCamera`], [`host::HostClock`], ...) plus the
//!   [`host::ModalStack`] override registry
//! - [`input::BindingSource`] - how logical inputs reach the sampler
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Each tick the rig samples an immutable [`input::InputFrame`], resolves
//! enable/disable and mode-switch transitions, then delegates to the
//! active motion model: [`motion::FreeFlight`] eases the camera toward a
//! decoupled target pose with momentum, [`motion::OrbitDrag`] moves the
//! camera directly via held look/drag/dolly gestures. Everything is
//! single-threaded and synchronous; the host drives the loop.

pub mod error;
pub mod host;
pub mod input;
pub mod motion;
pub mod options;
pub mod rig;
pub mod util;

pub use error::RigError;
pub use host::{HostEnv, ModalOverride, ModalStack, ReferencePose};
pub use input::{BindingSource, InputFrame, InputSampler, RigAction};
pub use motion::{CameraPose, FreeFlight, MotionMode, OrbitDrag, Pose};
pub use options::Options;
pub use rig::{CameraRig, LightState, RenderCamera, RigMode};
