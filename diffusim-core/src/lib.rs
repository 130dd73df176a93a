//! Geometric building blocks for diffusion random-walk simulations.
//!
//! `diffusim-core` provides the small amount of linear algebra a Monte Carlo
//! diffusion simulator needs on the CPU side: 3D vectors, 3×3 rotation
//! matrices, and the rotation that aligns one direction with another
//! (used to orient substrate geometry and gradient directions).
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`matrix`] | 3×3 rotation matrices and 3D vectors |
//! | [`align`] | Rotation aligning one direction with another (Rodrigues) |
//! | [`constants`] | Numeric constants (π and friends) |
//! | [`errors`] | [`SimError`] and [`SimResult`] |
//!
//! # Aligning Two Directions
//!
//! The central operation is [`align`](align::align): given two non-zero
//! vectors it returns the proper rotation taking the first direction onto
//! the second, falling back to the identity or its negation when the
//! directions are parallel or anti-parallel:
//!
//! ```
//! use diffusim_core::{align, Vector3};
//!
//! let v = Vector3::x_axis();
//! let k = Vector3::y_axis();
//! let r = align(&v, &k)?;
//!
//! let rotated = r * v;
//! assert!((rotated.x - k.x).abs() < 1e-10);
//! assert!((rotated.y - k.y).abs() < 1e-10);
//! # Ok::<(), diffusim_core::SimError>(())
//! ```
//!
//! # Re-exports
//!
//! Common types are re-exported at the crate root for convenience:
//!
//! ```
//! use diffusim_core::{Vector3, RotationMatrix3, Alignment};
//! use diffusim_core::{SimError, SimResult, MathErrorKind};
//! ```
//!
//! # Design Notes
//!
//! - **Radians everywhere**: all angular quantities are radians.
//!
//! - **No implicit state**: everything here is a pure function over value
//!   types; calls are reentrant and safe from any thread.
//!
//! - **Fail fast on bad input**: operations that would otherwise divide by
//!   a zero norm return a typed [`SimError`] instead of letting NaN
//!   propagate into downstream matrices.

pub mod align;
pub mod constants;
pub mod errors;
pub mod matrix;

pub use align::{align, Alignment};
pub use errors::{MathErrorKind, SimError, SimResult};
pub use matrix::{RotationMatrix3, Vector3};
