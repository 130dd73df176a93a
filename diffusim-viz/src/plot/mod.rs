//! Rendering trajectories and meshes.
//!
//! - [`svg`]: file output via the plotters SVG backend
//! - [`terminal`]: quick-look charts drawn with Braille characters

pub mod svg;
pub mod terminal;
