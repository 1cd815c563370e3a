//! Planar straight-line graph assembled from traced contours.
//!
//! The longest contour is the outer boundary of the meshed region. Every other
//! contour becomes a hole: its ring of facets is kept and one point strictly
//! inside it is recorded so the triangulator can clear the enclosed triangles.

mod interior;

pub use interior::{contains_strictly, find_interior_point};

use crate::contours::Contour;
use crate::error::ExtractionError;
use log::{debug, warn};
use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Sub-pixel perturbation applied to contour points before meshing.
///
/// Marching-squares vertices are collinear along straight runs and cocircular
/// at every lattice corner; a small positive offset on each coordinate breaks
/// those ties for the Delaunay predicates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JitterParams {
    /// Upper bound of the offset added to each coordinate (pixels).
    pub amplitude: f64,
    /// Seed for reproducible runs; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for JitterParams {
    fn default() -> Self {
        Self {
            amplitude: 0.1,
            seed: None,
        }
    }
}

/// Points, boundary facets and hole markers handed to the triangulator.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub points: Vec<Point2<f64>>,
    pub facets: Vec<[usize; 2]>,
    pub holes: Vec<Point2<f64>>,
}

/// Mesh plus the indices of hole contours that had to be left out.
#[derive(Clone, Debug)]
pub struct MeshOutput {
    pub mesh: Mesh,
    /// Index of the contour used as outer boundary.
    pub outer: usize,
    /// Contours dropped because no interior point could be placed in them.
    pub dropped: Vec<usize>,
}

/// Facets closing the index range `start..=end` into a ring.
pub fn round_trip_connect(start: usize, end: usize) -> Vec<[usize; 2]> {
    let mut facets: Vec<[usize; 2]> = (start..end).map(|i| [i, i + 1]).collect();
    facets.push([end, start]);
    facets
}

/// Build the mesh input from thresholded contours.
pub fn build_mesh(
    contours: &[Contour],
    jitter: &JitterParams,
    interior_offset: f64,
) -> Result<MeshOutput, ExtractionError> {
    if contours.is_empty() {
        return Err(ExtractionError::EmptyInput);
    }

    let mut rng = match jitter.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let jittered: Vec<Contour> = contours
        .iter()
        .map(|c| {
            c.iter()
                .map(|p| {
                    let dx: f64 = rng.gen::<f64>() * jitter.amplitude;
                    let dy: f64 = rng.gen::<f64>() * jitter.amplitude;
                    Point2::new(p.x + dx, p.y + dy)
                })
                .collect()
        })
        .collect();

    let mut outer = 0;
    for (i, c) in jittered.iter().enumerate() {
        if c.len() > jittered[outer].len() {
            outer = i;
        }
    }

    let mut mesh = Mesh::default();
    append_ring(&mut mesh, &jittered[outer]);

    let mut dropped = Vec::new();
    for (i, contour) in jittered.iter().enumerate() {
        if i == outer {
            continue;
        }
        match find_interior_point(contour, interior_offset, i) {
            Ok(hole) => {
                append_ring(&mut mesh, contour);
                mesh.holes.push(hole);
            }
            Err(err) => {
                warn!("MeshBuilder: dropping contour {}: {}", i, err);
                dropped.push(i);
            }
        }
    }

    debug!(
        "MeshBuilder: contours={} outer={} points={} facets={} holes={} dropped={}",
        contours.len(),
        outer,
        mesh.points.len(),
        mesh.facets.len(),
        mesh.holes.len(),
        dropped.len()
    );
    Ok(MeshOutput {
        mesh,
        outer,
        dropped,
    })
}

fn append_ring(mesh: &mut Mesh, contour: &[Point2<f64>]) {
    let start = mesh.points.len();
    mesh.points.extend_from_slice(contour);
    mesh.facets
        .extend(round_trip_connect(start, mesh.points.len() - 1));
}
