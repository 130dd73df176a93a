use textplots::{Chart, Plot, Shape};

use crate::mesh::TriangleMesh;
use crate::trajectory::Trajectories;

/// Draws the x/y ground track of every walker as a terminal scatter chart.
pub fn trajectories_terminal(traj: &Trajectories, title: &str) -> String {
    let points: Vec<(f64, f64)> = (0..traj.n_walkers())
        .flat_map(|w| traj.walker_path(w))
        .map(|p| (p.x, p.y))
        .collect();
    render_points(&points, title)
}

/// Draws the x/y projection of every mesh vertex as a terminal scatter
/// chart.
pub fn mesh_terminal(mesh: &TriangleMesh, title: &str) -> String {
    let points: Vec<(f64, f64)> = mesh
        .triangles()
        .iter()
        .flatten()
        .map(|v| (v.x, v.y))
        .collect();
    render_points(&points, title)
}

fn render_points(points: &[(f64, f64)], title: &str) -> String {
    if points.is_empty() {
        return format!("{title}\n  (no data)\n");
    }
    let f32_pts = to_f32_points(points);
    let (xmin, xmax) = f32_extent(f32_pts.iter().map(|p| p.0));
    let shape = Shape::Points(&f32_pts);
    let mut chart = Chart::new(80, 24, xmin, xmax);
    let rendered = chart.lineplot(&shape);
    rendered.axis();
    rendered.figures();
    format!("{title}\n  y vs x\n{rendered}")
}

fn to_f32_points(points: &[(f64, f64)]) -> Vec<(f32, f32)> {
    points.iter().map(|&(x, y)| (x as f32, y as f32)).collect()
}

fn f32_extent(iter: impl Iterator<Item = f32>) -> (f32, f32) {
    let (lo, hi) = iter.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if (hi - lo).abs() < 1e-6 {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}
