//! Triangular surface meshes bounding the diffusion substrate.
//!
//! A mesh is a triangle soup of shape (n, 3, 3): n triangles, each with
//! three vertices, each vertex a Cartesian `(x, y, z)` coordinate. No
//! connectivity is tracked; plotting only needs the triangles themselves
//! and the axis-aligned bounds of the whole surface.

use crate::error::{Error, Result};
use crate::trajectory::bounds_of;
use diffusim_core::Vector3;

/// A triangle soup: every triangle is three vertices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TriangleMesh {
    triangles: Vec<[Vector3; 3]>,
}

impl TriangleMesh {
    /// Creates a mesh from triangles.
    pub fn new(triangles: Vec<[Vector3; 3]>) -> Self {
        Self { triangles }
    }

    /// Creates a mesh from a flat coordinate slice.
    ///
    /// The values are read nine at a time as one triangle
    /// (`v1x v1y v1z v2x v2y v2z v3x v3y v3z`); the slice length must be
    /// divisible by 9.
    ///
    /// ```
    /// use diffusim_viz::TriangleMesh;
    ///
    /// let mesh = TriangleMesh::from_flat(&[
    ///     0.0, 0.0, 0.0,  1.0, 0.0, 0.0,  0.0, 1.0, 0.0,
    /// ])?;
    /// assert_eq!(mesh.len(), 1);
    /// # Ok::<(), diffusim_viz::Error>(())
    /// ```
    pub fn from_flat(values: &[f64]) -> Result<Self> {
        if values.len() % 9 != 0 {
            return Err(Error::Shape(format!(
                "{} values, expected a multiple of 9 (three x,y,z vertices per triangle)",
                values.len()
            )));
        }
        let triangles = values
            .chunks_exact(9)
            .map(|c| {
                [
                    Vector3::new(c[0], c[1], c[2]),
                    Vector3::new(c[3], c[4], c[5]),
                    Vector3::new(c[6], c[7], c[8]),
                ]
            })
            .collect();
        Ok(Self { triangles })
    }

    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` when the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The triangles as a slice.
    pub fn triangles(&self) -> &[[Vector3; 3]] {
        &self.triangles
    }

    /// Component-wise bounds over every vertex of every triangle.
    pub fn bounds(&self) -> Option<(Vector3, Vector3)> {
        bounds_of(self.triangles.iter().flatten())
    }
}
