use plotters::prelude::*;
use std::path::Path;

use crate::mesh::TriangleMesh;
use crate::trajectory::Trajectories;
use diffusim_core::Vector3;

type PlotResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Renders every walker's path as a 3D polyline, one palette color per
/// walker.
pub fn trajectories_svg(traj: &Trajectories, path: &Path, title: &str) -> PlotResult {
    let Some((lo, hi)) = traj.bounds() else {
        return Ok(());
    };
    let (xs, ys, zs) = padded_ranges(&lo, &hi);

    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .build_cartesian_3d(xs, ys, zs)?;
    chart.configure_axes().draw()?;

    for walker in 0..traj.n_walkers() {
        let points: Vec<(f64, f64, f64)> = traj
            .walker_path(walker)
            .iter()
            .map(|p| (p.x, p.y, p.z))
            .collect();
        chart.draw_series(LineSeries::new(points, &Palette99::pick(walker)))?;
    }

    root.present()?;
    Ok(())
}

/// Renders a triangle mesh as translucent filled polygons, axis ranges set
/// to the mesh bounds and a deterministic palette color per triangle.
pub fn mesh_svg(mesh: &TriangleMesh, path: &Path, title: &str) -> PlotResult {
    let Some((lo, hi)) = mesh.bounds() else {
        return Ok(());
    };
    let (xs, ys, zs) = exact_ranges(&lo, &hi);

    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .build_cartesian_3d(xs, ys, zs)?;
    chart.configure_axes().draw()?;

    for (i, triangle) in mesh.triangles().iter().enumerate() {
        let vertices: Vec<(f64, f64, f64)> =
            triangle.iter().map(|v| (v.x, v.y, v.z)).collect();
        let face_color = Palette99::pick(i).mix(0.5);
        chart.draw_series(std::iter::once(Polygon::new(vertices, face_color.filled())))?;
    }

    root.present()?;
    Ok(())
}

/// Bounds expanded by 10% on each axis, for data drawn without a frame.
fn padded_ranges(
    lo: &Vector3,
    hi: &Vector3,
) -> (
    std::ops::Range<f64>,
    std::ops::Range<f64>,
    std::ops::Range<f64>,
) {
    (
        padded_axis(lo.x, hi.x),
        padded_axis(lo.y, hi.y),
        padded_axis(lo.z, hi.z),
    )
}

fn padded_axis(lo: f64, hi: f64) -> std::ops::Range<f64> {
    let pad = (hi - lo).abs() * 0.1 + 1e-6;
    (lo - pad)..(hi + pad)
}

/// Axis ranges exactly at the bounds, widened only when an axis is flat.
fn exact_ranges(
    lo: &Vector3,
    hi: &Vector3,
) -> (
    std::ops::Range<f64>,
    std::ops::Range<f64>,
    std::ops::Range<f64>,
) {
    (
        exact_axis(lo.x, hi.x),
        exact_axis(lo.y, hi.y),
        exact_axis(lo.z, hi.z),
    )
}

fn exact_axis(lo: f64, hi: f64) -> std::ops::Range<f64> {
    if (hi - lo).abs() < 1e-12 {
        (lo - 0.5)..(hi + 0.5)
    } else {
        lo..hi
    }
}
