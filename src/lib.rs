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
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]

//! CPU-side molecular visualization core.
//!
//! Molvis turns parsed molecule data (atom positions, atomic numbers, bond
//! endpoints and orders) into renderable triangle meshes: one sphere per
//! atom, one or two cylinders per bond. It also provides two camera
//! navigation strategies and screen-ray picking of atoms. Everything runs
//! on the calling thread; the consuming renderer reads finished geometry
//! through byte-slice accessors and owns all GPU resources itself.
//!
//! # Key entry points
//!
//! - [`scene::Scene`] - owns the renderable objects built from a molecule
//! - [`geometry::Sphere`] / [`geometry::Cylinder`] - procedural meshes
//! - [`camera::FlyCamera`] / [`camera::OrbitCamera`] - navigation
//! - [`picking::pick`] - screen point to atom resolution
//! - [`options::ViewerOptions`] - runtime configuration with TOML presets
//!
//! # Data flow
//!
//! Mesh generation feeds the scene object model, which the external
//! renderer reads via accessors. Camera state plus a clicked screen point
//! feed the picker, which resolves an atom id; the scene then recolors the
//! selected sphere.

pub mod camera;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod molecule;
pub mod options;
pub mod picking;
pub mod scene;
