//! Error types for the extraction pipeline.

use thiserror::Error;

/// Failures raised by the triangulator. Any of them aborts the current slice.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    /// Fewer than three points were supplied.
    #[error("too few points to triangulate: {0}")]
    TooFewPoints(usize),

    /// A point coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the offending point.
        index: usize,
    },

    /// A facet references a point index that does not exist.
    #[error("facet {facet} references point {point}, but only {len} points exist")]
    InvalidFacet {
        /// Facet index.
        facet: usize,
        /// Referenced point index.
        point: usize,
        /// Number of points.
        len: usize,
    },

    /// A facet starts and ends at the same location.
    #[error("facet {facet} has zero length")]
    DegenerateFacet {
        /// Facet index.
        facet: usize,
    },

    /// Two facets cross each other, so no triangulation can preserve both.
    #[error("facet ({a}, {b}) crosses another facet")]
    IntersectingFacets {
        /// First endpoint of the facet being inserted.
        a: usize,
        /// Second endpoint of the facet being inserted.
        b: usize,
    },

    /// Point location or constraint walking lost track of the mesh.
    #[error("point location failed near ({x:.3}, {y:.3})")]
    LocateFailed {
        /// x coordinate of the query.
        x: f64,
        /// y coordinate of the query.
        y: f64,
    },
}

/// Errors surfaced by the extraction stages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractionError {
    /// The mask has no foreground pixels, or no contour survived thresholding.
    #[error("mask contains no usable foreground")]
    EmptyInput,

    /// Mask and distance map do not cover the same pixel grid.
    #[error("mask is {mask_w}x{mask_h} but distance map is {dist_w}x{dist_h}")]
    DimensionMismatch {
        /// Mask width.
        mask_w: usize,
        /// Mask height.
        mask_h: usize,
        /// Distance map width.
        dist_w: usize,
        /// Distance map height.
        dist_h: usize,
    },

    /// The interior-point search swept a full turn without landing inside.
    #[error("no interior point found for contour {contour} ({points} points)")]
    UnresolvedInteriorPoint {
        /// Index of the contour in the thresholded contour list.
        contour: usize,
        /// Number of points of the contour.
        points: usize,
    },

    /// The constrained triangulation could not be built.
    #[error("triangulation failed: {0}")]
    Triangulation(#[from] TriangulationError),
}
