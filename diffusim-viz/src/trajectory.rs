//! Loading walker trajectories from the simulator's text format.
//!
//! A trajectories file is a plain text matrix: every line is one time
//! point, and every line contains the walker positions flattened as
//!
//! ```text
//! walker_1_x walker_1_y walker_1_z walker_2_x walker_2_y walker_2_z ...
//! ```
//!
//! so the field count of every row must be the same and divisible by 3.
//! [`Trajectories::parse`] validates both while reading and reshapes the
//! matrix into per-step, per-walker [`Vector3`] positions.

use crate::error::{Error, Result};
use diffusim_core::Vector3;
use std::fs;
use std::path::Path;

/// Walker positions over time, reshaped from the flat text matrix.
///
/// Indexed as time step × walker. Every step holds the same number of
/// walkers; the parser rejects ragged input.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectories {
    steps: Vec<Vec<Vector3>>,
}

impl Trajectories {
    /// Reads and parses a trajectories file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses trajectories from text.
    ///
    /// Empty lines are skipped. Every remaining line must hold the same
    /// number of whitespace-separated numeric fields, non-zero and
    /// divisible by 3.
    ///
    /// ```
    /// use diffusim_viz::Trajectories;
    ///
    /// let traj = Trajectories::parse("0 0 0 1 1 1\n0.5 0 0 1 1.5 1\n")?;
    /// assert_eq!(traj.n_steps(), 2);
    /// assert_eq!(traj.n_walkers(), 2);
    /// # Ok::<(), diffusim_viz::Error>(())
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let mut steps = Vec::new();
        let mut expected_fields = None;

        for (line_no, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let fields = parse_step_line(trimmed, line_no + 1)?;
            match expected_fields {
                None => {
                    if fields.is_empty() || fields.len() % 3 != 0 {
                        return Err(Error::Shape(format!(
                            "line {}: {} values, expected a non-zero multiple of 3",
                            line_no + 1,
                            fields.len()
                        )));
                    }
                    expected_fields = Some(fields.len());
                }
                Some(n) if fields.len() != n => {
                    return Err(Error::Shape(format!(
                        "line {}: {} values, but previous lines have {}",
                        line_no + 1,
                        fields.len(),
                        n
                    )));
                }
                Some(_) => {}
            }
            steps.push(reshape_step(&fields));
        }

        if steps.is_empty() {
            return Err(Error::Shape("no time steps found".into()));
        }
        Ok(Self { steps })
    }

    /// Number of time steps (rows of the source file).
    pub fn n_steps(&self) -> usize {
        self.steps.len()
    }

    /// Number of walkers (source row width / 3).
    pub fn n_walkers(&self) -> usize {
        self.steps.first().map_or(0, |s| s.len())
    }

    /// Position of one walker at one time step.
    pub fn position(&self, step: usize, walker: usize) -> Option<Vector3> {
        self.steps.get(step).and_then(|s| s.get(walker)).copied()
    }

    /// One walker's positions across all time steps, in order.
    pub fn walker_path(&self, walker: usize) -> Vec<Vector3> {
        self.steps
            .iter()
            .filter_map(|s| s.get(walker))
            .copied()
            .collect()
    }

    /// Component-wise bounds over every position of every walker.
    pub fn bounds(&self) -> Option<(Vector3, Vector3)> {
        bounds_of(self.steps.iter().flatten())
    }
}

fn parse_step_line(line: &str, line_no: usize) -> Result<Vec<f64>> {
    line.split_whitespace()
        .map(|field| {
            field
                .parse::<f64>()
                .map_err(|e| Error::Parse(format!("line {}: '{}': {}", line_no, field, e)))
        })
        .collect()
}

fn reshape_step(fields: &[f64]) -> Vec<Vector3> {
    fields
        .chunks_exact(3)
        .map(|c| Vector3::new(c[0], c[1], c[2]))
        .collect()
}

/// Component-wise min/max over an iterator of positions.
pub(crate) fn bounds_of<'a>(
    positions: impl Iterator<Item = &'a Vector3>,
) -> Option<(Vector3, Vector3)> {
    positions.fold(None, |acc, p| match acc {
        None => Some((*p, *p)),
        Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
    })
}
