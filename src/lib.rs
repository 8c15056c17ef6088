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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Fly-camera core for a small real-time still-life viewer.
//!
//! A tabletop of primitive shapes under a handful of point lights, seen
//! through a first-person camera steered by pointer and keyboard. The crate
//! owns the camera maths and the input-to-motion mapping; drawing is
//! delegated to a [`renderer::UniformSink`].
//!
//! # Key entry points
//!
//! - [`engine::ViewComposer`] - owns the camera and composes each frame
//! - [`camera::CameraState`] - yaw/pitch orientation and derived basis
//! - [`camera::CameraController`] - pointer, scroll and held-key handling
//! - [`options::Options`] - TOML-backed window, camera and key settings
//! - [`scene::Scene`] - the still life's textures, materials and objects
//!
//! # Frame flow
//!
//! Input events update the camera as they arrive. Once per frame the
//! composer reads the frame delta, moves the camera for every held key,
//! derives view and projection, and uploads them together with the eye
//! position before the scene is submitted.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::ViewComposer;
pub use error::TabletopError;
pub use input::{InputEvent, KeyAction};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
