//! Rotation aligning one 3D direction with another.
//!
//! Substrate meshes and gradient tables are defined in a canonical frame;
//! simulations need them oriented along arbitrary directions. [`align`]
//! produces the 3×3 matrix that rotates the direction of one vector onto
//! the direction of another, handling the two degenerate configurations
//! (parallel and anti-parallel inputs) where no rotation axis exists.
//!
//! The decision between the three regimes is its own step,
//! [`Alignment::classify`], so the case split is inspectable and testable
//! separately from the matrix construction:
//!
//! ```
//! use diffusim_core::{Alignment, Vector3};
//!
//! let v = Vector3::x_axis();
//! match Alignment::classify(&v, &Vector3::new(2.0, 0.0, 0.0))? {
//!     Alignment::Aligned => {}  // same direction, rotation is I
//!     _ => unreachable!(),
//! }
//! # Ok::<(), diffusim_core::SimError>(())
//! ```
//!
//! Inputs with zero (below machine epsilon) norm or non-finite components
//! are rejected with a typed error rather than letting NaN propagate into
//! the matrix.

use crate::constants::PI;
use crate::errors::{MathErrorKind, SimError, SimResult};
use crate::matrix::{RotationMatrix3, Vector3};

/// How two directions relate, and the rotation taking the first onto the
/// second.
///
/// Produced by [`Alignment::classify`]; consumed by [`align`], which turns
/// each variant into its matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alignment {
    /// The directions coincide; the aligning rotation is the identity.
    Aligned,
    /// The directions are opposite; the axis is ambiguous and the
    /// conventional result is `−I`.
    Opposed,
    /// General case: rotate by `angle` radians (in `[0, π]`) around the
    /// unit `axis`.
    Rotation {
        /// Unit rotation axis, `v × k` normalized.
        axis: Vector3,
        /// Rotation angle in radians.
        angle: f64,
    },
}

impl Alignment {
    /// Classifies the rotation needed to align the direction of `v` with
    /// the direction of `k`.
    ///
    /// Magnitudes are normalized away; only directions matter. The cross
    /// product of the unit inputs gives the axis candidate. When its norm
    /// falls below machine epsilon the directions are (anti-)parallel and
    /// the separation `‖v̂ − k̂‖` decides between [`Aligned`](Self::Aligned)
    /// (separation ≤ 1) and [`Opposed`](Self::Opposed) (separation > 1).
    ///
    /// In the general case the angle comes from
    /// `arcsin(‖v̂ × k̂‖)`, which only covers `[0, π/2]`; an obtuse
    /// separation (`v̂ · k̂ < 0`) is corrected to `π − angle`.
    ///
    /// # Errors
    ///
    /// [`MathErrorKind::NotFinite`] if either input has a NaN or infinite
    /// component, [`MathErrorKind::InvalidInput`] if either input's norm is
    /// below machine epsilon. Both would otherwise surface as a silent NaN
    /// matrix.
    pub fn classify(v: &Vector3, k: &Vector3) -> SimResult<Self> {
        let v = unit_direction("source", v)?;
        let k = unit_direction("target", k)?;

        let axis = v.cross(&k);
        let axis_norm = axis.magnitude();

        if axis_norm < f64::EPSILON {
            if (v - k).magnitude() > v.magnitude() {
                return Ok(Self::Opposed);
            }
            return Ok(Self::Aligned);
        }

        // Unit inputs, so asin(‖v × k‖) is the angle; clamp guards the
        // asin domain against roundoff pushing the norm past 1.
        let mut angle = libm::asin(axis_norm.clamp(0.0, 1.0));
        if v.dot(&k) < 0.0 {
            angle = PI - angle;
        }

        Ok(Self::Rotation {
            axis: axis / axis_norm,
            angle,
        })
    }
}

/// Returns the rotation matrix that aligns the direction of `v` with the
/// direction of `k`.
///
/// The result `R` satisfies `R · v̂ = k̂` (unit vectors, up to
/// floating-point tolerance). For parallel inputs `R` is the identity; for
/// anti-parallel inputs it is `−I` (a 180° flip with ambiguous axis, and
/// the one case where `det(R) = −1` rather than `+1`). Otherwise `R` is
/// built from the axis `v × k` and the separation angle via Rodrigues'
/// formula.
///
/// ```
/// use diffusim_core::{align, Vector3};
///
/// let r = align(&Vector3::x_axis(), &Vector3::y_axis())?;
/// let rotated = r * Vector3::x_axis();
/// assert!((rotated - Vector3::y_axis()).magnitude() < 1e-10);
/// # Ok::<(), diffusim_core::SimError>(())
/// ```
///
/// # Errors
///
/// Propagates the input validation of [`Alignment::classify`]: zero-norm
/// or non-finite vectors fail fast instead of producing a NaN matrix.
pub fn align(v: &Vector3, k: &Vector3) -> SimResult<RotationMatrix3> {
    match Alignment::classify(v, k)? {
        Alignment::Aligned => Ok(RotationMatrix3::identity()),
        Alignment::Opposed => Ok(RotationMatrix3::negated_identity()),
        Alignment::Rotation { axis, angle } => {
            Ok(RotationMatrix3::from_axis_angle(&axis, angle))
        }
    }
}

/// Validates a direction input and returns it normalized to unit length.
fn unit_direction(role: &str, v: &Vector3) -> SimResult<Vector3> {
    if !v.is_finite() {
        return Err(SimError::math(
            "align",
            MathErrorKind::NotFinite,
            &format!("{} vector has a non-finite component: {}", role, v),
        ));
    }
    if v.magnitude() < f64::EPSILON {
        return Err(SimError::math(
            "align",
            MathErrorKind::InvalidInput,
            &format!("{} vector has zero norm", role),
        ));
    }
    Ok(v.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn assert_maps_direction(v: Vector3, k: Vector3) {
        let r = align(&v, &k).unwrap();
        let mapped = r * v.normalize();
        let expected = k.normalize();
        assert!(
            (mapped - expected).magnitude() < TOL,
            "align({}, {}) mapped v to {}, expected {}",
            v,
            k,
            mapped,
            expected
        );
    }

    fn assert_orthogonal(r: &RotationMatrix3) {
        let product = r * r.transpose();
        assert!(
            product.max_difference(&RotationMatrix3::identity()) < TOL,
            "R·Rᵗ differs from identity:\n{}",
            product
        );
    }

    #[test]
    fn test_align_maps_unit_source_to_unit_target() {
        assert_maps_direction(Vector3::new(1.0, 2.0, 3.0), Vector3::new(-2.0, 1.0, 0.5));
        assert_maps_direction(Vector3::new(0.0, 0.0, 2.0), Vector3::new(1.0, 1.0, 1.0));
        assert_maps_direction(Vector3::new(-4.0, 0.1, 0.0), Vector3::new(0.3, -0.2, 5.0));
        assert_maps_direction(Vector3::new(1e-3, 0.0, 1e-3), Vector3::new(0.0, -7.0, 0.0));
    }

    #[test]
    fn test_align_same_direction_is_identity() {
        let v = Vector3::new(0.2, -1.4, 3.3);
        let r = align(&v, &v).unwrap();
        assert!(r.max_difference(&RotationMatrix3::identity()) < TOL);
        assert!((r.determinant() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_align_parallel_different_magnitudes() {
        let v = Vector3::new(1.0, 1.0, 0.0);
        let k = v * 42.0;
        let r = align(&v, &k).unwrap();
        assert!(r.max_difference(&RotationMatrix3::identity()) < TOL);
    }

    #[test]
    fn test_align_opposite_direction_is_negated_identity() {
        let v = Vector3::x_axis();
        let r = align(&v, &(-v)).unwrap();
        let expected = RotationMatrix3::from_array([
            [-1.0, 0.0, 0.0],
            [0.0, -1.0, 0.0],
            [0.0, 0.0, -1.0],
        ]);
        assert!(r.max_difference(&expected) < TOL);
        assert!((r.determinant() + 1.0).abs() < TOL);
    }

    #[test]
    fn test_align_anti_parallel_any_axis() {
        let v = Vector3::new(0.3, -2.0, 1.7);
        let r = align(&v, &(v * -5.0)).unwrap();
        assert!(r.max_difference(&RotationMatrix3::negated_identity()) < TOL);
    }

    #[test]
    fn test_align_x_to_y_expected_matrix() {
        let r = align(&Vector3::x_axis(), &Vector3::y_axis()).unwrap();
        let expected = RotationMatrix3::from_array([
            [0.0, -1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        assert!(r.max_difference(&expected) < TOL);
    }

    #[test]
    fn test_align_result_is_orthogonal() {
        let pairs = [
            (Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)),
            (Vector3::new(1.0, 2.0, 3.0), Vector3::new(-1.0, 0.5, 2.0)),
            (Vector3::new(0.1, 0.1, 0.1), Vector3::new(0.1, 0.1, 0.1)),
            (Vector3::new(1.0, 0.0, 1.0), Vector3::new(-1.0, 0.0, -1.0)),
        ];
        for (v, k) in pairs {
            let r = align(&v, &k).unwrap();
            assert_orthogonal(&r);
        }
    }

    #[test]
    fn test_align_general_determinant_is_one() {
        let r = align(&Vector3::new(2.0, -1.0, 0.4), &Vector3::new(0.3, 3.0, -2.0)).unwrap();
        assert!((r.determinant() - 1.0).abs() < TOL);
        assert!(r.is_rotation_matrix(TOL));
    }

    #[test]
    fn test_align_obtuse_separation() {
        // dot(v, k) < 0 exercises the π − arcsin correction
        let v = Vector3::x_axis();
        let k = Vector3::new(-1.0, 0.2, 0.0);
        assert_maps_direction(v, k);

        match Alignment::classify(&v, &k).unwrap() {
            Alignment::Rotation { angle, .. } => {
                assert!(angle > crate::constants::HALF_PI);
                assert!(angle < PI);
            }
            other => panic!("expected Rotation, got {:?}", other),
        }
    }

    #[test]
    fn test_align_near_parallel_stays_general() {
        let v = Vector3::x_axis();
        let k = Vector3::new(1.0, 1e-8, 0.0);

        match Alignment::classify(&v, &k).unwrap() {
            Alignment::Rotation { .. } => {}
            other => panic!("1e-8 separation misclassified as {:?}", other),
        }
        assert_maps_direction(v, k);
    }

    #[test]
    fn test_align_near_parallel_continuity() {
        // A smaller perturbation must give a rotation closer to identity
        let v = Vector3::x_axis();
        let identity = RotationMatrix3::identity();

        let r_tight = align(&v, &Vector3::new(1.0, 1e-8, 0.0)).unwrap();
        let r_loose = align(&v, &Vector3::new(1.0, 1e-6, 0.0)).unwrap();

        let d_tight = r_tight.max_difference(&identity);
        let d_loose = r_loose.max_difference(&identity);
        assert!(d_tight < 1e-7);
        assert!(d_tight < d_loose);
    }

    #[test]
    fn test_align_near_anti_parallel() {
        let v = Vector3::x_axis();
        let k = Vector3::new(-1.0, 1e-8, 0.0);
        assert_maps_direction(v, k);

        let r = align(&v, &k).unwrap();
        assert!((r.determinant() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_classify_variants() {
        let v = Vector3::new(0.0, 3.0, 0.0);
        assert_eq!(
            Alignment::classify(&v, &(v * 2.0)).unwrap(),
            Alignment::Aligned
        );
        assert_eq!(
            Alignment::classify(&v, &(v * -1.0)).unwrap(),
            Alignment::Opposed
        );
        match Alignment::classify(&v, &Vector3::z_axis()).unwrap() {
            Alignment::Rotation { axis, angle } => {
                assert!((axis.magnitude() - 1.0).abs() < TOL);
                assert!((angle - crate::constants::HALF_PI).abs() < TOL);
            }
            other => panic!("expected Rotation, got {:?}", other),
        }
    }

    #[test]
    fn test_align_zero_source_rejected() {
        let err = align(&Vector3::zeros(), &Vector3::x_axis()).unwrap_err();
        assert_eq!(err.kind(), MathErrorKind::InvalidInput);
        assert!(err.to_string().contains("source"));
    }

    #[test]
    fn test_align_zero_target_rejected() {
        let err = align(&Vector3::x_axis(), &Vector3::zeros()).unwrap_err();
        assert_eq!(err.kind(), MathErrorKind::InvalidInput);
        assert!(err.to_string().contains("target"));
    }

    #[test]
    fn test_align_subepsilon_norm_rejected() {
        let tiny = Vector3::new(1e-17, 0.0, 0.0);
        let err = align(&tiny, &Vector3::x_axis()).unwrap_err();
        assert_eq!(err.kind(), MathErrorKind::InvalidInput);
    }

    #[test]
    fn test_align_non_finite_rejected() {
        let nan = Vector3::new(f64::NAN, 0.0, 0.0);
        let err = align(&nan, &Vector3::x_axis()).unwrap_err();
        assert_eq!(err.kind(), MathErrorKind::NotFinite);

        let inf = Vector3::new(0.0, f64::INFINITY, 0.0);
        let err = align(&Vector3::x_axis(), &inf).unwrap_err();
        assert_eq!(err.kind(), MathErrorKind::NotFinite);
    }

    #[test]
    fn test_align_never_returns_nan() {
        let pairs = [
            (Vector3::new(1e-8, 0.0, 0.0), Vector3::new(0.0, 1e-8, 0.0)),
            (Vector3::new(1e8, 0.0, 0.0), Vector3::new(0.0, 0.0, -1e8)),
        ];
        for (v, k) in pairs {
            let r = align(&v, &k).unwrap();
            for i in 0..3 {
                for j in 0..3 {
                    assert!(r.get(i, j).is_finite());
                }
            }
        }
    }
}
