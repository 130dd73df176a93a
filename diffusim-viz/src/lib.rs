//! Visualization of diffusion random-walk output.
//!
//! Two kinds of data come out of a walker simulation and routinely need a
//! quick look: the walker trajectories themselves, and the triangular
//! surface mesh that bounds the diffusion substrate. This crate loads the
//! former from the simulator's text format, holds the latter as a triangle
//! soup, and renders both as SVG files or terminal charts.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`trajectory`] | [`Trajectories`] loader for the one-row-per-time-step text format |
//! | [`mesh`] | [`TriangleMesh`] triangle soup with bounds |
//! | [`plot`] | SVG ([`plot::svg`]) and terminal ([`plot::terminal`]) renderers |
//! | [`error`] | [`Error`] and [`Result`] |
//!
//! # Quick Start
//!
//! ```no_run
//! use diffusim_viz::{plot, Trajectories};
//! use std::path::Path;
//!
//! let traj = Trajectories::from_file(Path::new("trajectories.txt"))?;
//! plot::svg::trajectories_svg(&traj, Path::new("trajectories.svg"), "Walker trajectories")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Features
//!
//! - **`cli`** (default) — Enables the `trajview` binary for plotting
//!   trajectory files from the command line.

pub mod error;
pub mod mesh;
pub mod plot;
pub mod trajectory;

pub use error::{Error, Result};
pub use mesh::TriangleMesh;
pub use trajectory::Trajectories;
