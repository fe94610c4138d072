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
// Complexity limits (thresholds in clippy.toml)
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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Procedurally animated 3D character viewer core.
//!
//! Diorama animates rigid character parts with small time-driven motions,
//! composes their model matrices under per-character base transforms,
//! drives an orbit camera through named presets with smooth transitions,
//! and pulses emissive tints on glowing parts. Drawing goes through the
//! [`render::RenderBackend`] seam, so any GPU backend can sit underneath.
//!
//! # Key entry points
//!
//! - [`engine::SceneComposer`] - per-frame update and draw submission
//! - [`engine::FrameLoop`] - poll → update → draw → present loop
//! - [`scene::Scene`] - character rigs and their parts
//! - [`camera::CameraRig`] - free/preset orbit camera
//! - [`animation`] - motion profiles and the procedural animator
//! - [`options::Options`] - runtime configuration (display, camera, glow,
//!   animation, layout, keybindings)
//!
//! # Frame order
//!
//! Each frame advances the scene clock and glow counter, then every part's
//! animation, then the camera transition and idle spin. Draws are issued
//! with every non-emissive part first and emissive parts last.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod render;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
mod viewer;

pub use engine::{SceneComposer, ViewerCommand};
pub use error::DioramaError;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
