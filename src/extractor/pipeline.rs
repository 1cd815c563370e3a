//! Per-slice extraction pipeline.
//!
//! ```no_run
//! use filament_network::{ExtractorParams, NetworkExtractor};
//! use filament_network::image::ImageU8;
//!
//! # fn example(mask: ImageU8) -> Result<(), filament_network::ExtractionError> {
//! let extractor = NetworkExtractor::new(ExtractorParams::default());
//! let report = extractor.process_mask(mask)?;
//! let summary = report.graph.summary();
//! println!("nodes={} edges={}", summary.nodes, summary.edges);
//! # Ok(())
//! # }
//! ```
use super::params::ExtractorParams;
use crate::contours::{extract_contours, threshold_contours};
use crate::diagnostics::{
    elapsed_ms, ClassificationStage, ComponentStage, ContourStage, ExtractionTrace,
    InputDescriptor, MeshStage, PruningStage, SimplificationStage, TimingBreakdown,
    TriangulationStage,
};
use crate::distance::euclidean_distance_transform;
use crate::error::ExtractionError;
use crate::graph::{build_graph, remove_redundant_nodes, FilamentGraph};
use crate::image::{ImageF32, ImageU8, ImageView};
use crate::mesh::build_mesh;
use crate::triangles::{
    bruteforce_pruning, build_triangles, count_kinds, relabel, sample_radii, TriangleKind,
};
use crate::triangulate::triangulate_mesh;
use crate::types::{ExtractionReport, LevelGraph};
use log::debug;
use std::time::Instant;

/// Turns binary filament masks into attributed branch/endpoint graphs.
#[derive(Clone, Debug, Default)]
pub struct NetworkExtractor {
    params: ExtractorParams,
}

impl NetworkExtractor {
    pub fn new(params: ExtractorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ExtractorParams {
        &self.params
    }

    pub fn set_params(&mut self, params: ExtractorParams) {
        self.params = params;
    }

    /// Extract the graph of `mask`, computing its distance map first.
    pub fn process_mask(&self, mask: ImageU8) -> Result<ExtractionReport, ExtractionError> {
        let start = Instant::now();
        let distance = euclidean_distance_transform(&mask);
        let distance_ms = elapsed_ms(start);
        self.run(mask, &distance, Some(distance_ms))
    }

    /// Extract the graph of `mask` using a precomputed distance map of the
    /// same size.
    pub fn process(
        &self,
        mask: ImageU8,
        distance: &ImageF32,
    ) -> Result<ExtractionReport, ExtractionError> {
        self.run(mask, distance, None)
    }

    fn run(
        &self,
        mask: ImageU8,
        distance: &ImageF32,
        distance_ms: Option<f64>,
    ) -> Result<ExtractionReport, ExtractionError> {
        if !mask.same_size(distance) {
            return Err(ExtractionError::DimensionMismatch {
                mask_w: mask.width(),
                mask_h: mask.height(),
                dist_w: distance.width(),
                dist_h: distance.height(),
            });
        }
        let total_start = Instant::now();
        let params = &self.params;
        let mut trace = ExtractionTrace {
            input: InputDescriptor {
                width: mask.width(),
                height: mask.height(),
                foreground_pixels: mask.foreground_count(),
            },
            ..ExtractionTrace::default()
        };
        let mut timings = TimingBreakdown::default();
        if let Some(ms) = distance_ms {
            timings.push("distance", ms);
        }

        if trace.input.foreground_pixels == 0 {
            debug!(
                "NetworkExtractor: empty mask {}x{}, skipping extraction",
                mask.width(),
                mask.height()
            );
            return Ok(empty_report(params, trace, timings, total_start));
        }

        let contours = timings.time("contours", || {
            let traced = extract_contours(&mask, params.approximation);
            let count = traced.len();
            (count, threshold_contours(traced, params.min_contour_points))
        });
        let (traced, contours) = contours;
        trace.contours = Some(ContourStage {
            traced,
            kept: contours.len(),
            points: contours.iter().map(|c| c.len()).sum(),
            min_points: params.min_contour_points,
        });
        debug!(
            "ContourExtractor: traced={} kept={}",
            traced,
            contours.len()
        );
        if contours.is_empty() {
            return Ok(empty_report(params, trace, timings, total_start));
        }

        let meshed = timings.time("mesh", || {
            build_mesh(&contours, &params.jitter, params.interior_offset)
        })?;
        trace.mesh = Some(MeshStage {
            points: meshed.mesh.points.len(),
            facets: meshed.mesh.facets.len(),
            holes: meshed.mesh.holes.len(),
            outer_contour: meshed.outer,
            dropped_contours: meshed.dropped.clone(),
        });

        let triangulation = timings.time("triangulate", || triangulate_mesh(&meshed.mesh))?;
        trace.triangulation = Some(TriangulationStage {
            triangles: triangulation.len(),
        });

        let classify_start = Instant::now();
        let mut triangles = build_triangles(&triangulation);
        let defaulted = sample_radii(&mut triangles, distance);
        let counts = count_kinds(&triangles);
        triangles.retain(|t| t.kind != TriangleKind::Isolated);
        timings.push("classify", elapsed_ms(classify_start));
        debug!(
            "TriangleClassifier: junction={} normal={} end={} isolated={} defaulted_radii={}",
            counts.junction, counts.normal, counts.end, counts.isolated, defaulted
        );
        trace.classification = Some(ClassificationStage {
            counts,
            isolated_dropped: counts.isolated,
            defaulted_radii: defaulted,
        });

        let prune_start = Instant::now();
        let pruned = bruteforce_pruning(triangles, params.pruning);
        let mut triangles = pruned.triangles;
        relabel(&mut triangles);
        let defaulted = sample_radii(&mut triangles, distance);
        let before = triangles.len();
        triangles.retain(|t| t.kind != TriangleKind::Isolated);
        timings.push("prune", elapsed_ms(prune_start));
        trace.pruning = Some(PruningStage {
            order: params.pruning,
            rounds: pruned.rounds,
            removed: pruned.removed,
            isolated_dropped: before - triangles.len(),
            defaulted_radii: defaulted,
            counts: count_kinds(&triangles),
        });

        let mut graph = timings.time("graph", || build_graph(&triangles));

        let (nodes_before, edges_before) = (graph.node_count(), graph.edge_count());
        let outcome = timings.time("simplify", || {
            remove_redundant_nodes(&mut graph, params.redundancy)
        });
        trace.simplification = Some(SimplificationStage {
            mode: params.redundancy,
            nodes_before,
            edges_before,
            outcome,
        });

        let coarser = timings.time("coarser", || coarser_levels(&graph, params));

        if params.keep_largest_component {
            let before = graph.node_count();
            let components = timings.time("component", || graph.retain_largest_component());
            trace.component = Some(ComponentStage {
                components,
                kept_nodes: graph.node_count(),
                discarded_nodes: before - graph.node_count(),
            });
        }

        Ok(finish(graph, coarser, params, trace, timings, total_start))
    }
}

/// Graphs of the levels coarser than `params.redundancy`. Each level continues
/// simplifying the previous one and is restricted to its own largest
/// component when configured.
fn coarser_levels(graph: &FilamentGraph, params: &ExtractorParams) -> Vec<LevelGraph> {
    if !params.coarser_levels {
        return Vec::new();
    }
    let mut current = graph.clone();
    let mut levels = Vec::new();
    for &redundancy in &params.redundancy.emitted()[1..] {
        remove_redundant_nodes(&mut current, redundancy);
        let mut graph = current.clone();
        if params.keep_largest_component {
            graph.retain_largest_component();
        }
        levels.push(LevelGraph { redundancy, graph });
    }
    levels
}

fn empty_report(
    params: &ExtractorParams,
    trace: ExtractionTrace,
    timings: TimingBreakdown,
    total_start: Instant,
) -> ExtractionReport {
    let graph = FilamentGraph::new();
    let coarser = coarser_levels(&graph, params);
    finish(graph, coarser, params, trace, timings, total_start)
}

fn finish(
    graph: FilamentGraph,
    coarser: Vec<LevelGraph>,
    params: &ExtractorParams,
    mut trace: ExtractionTrace,
    mut timings: TimingBreakdown,
    total_start: Instant,
) -> ExtractionReport {
    let distance_ms = timings.stage_ms("distance").unwrap_or(0.0);
    timings.total_ms = elapsed_ms(total_start) + distance_ms;
    debug!(
        "NetworkExtractor::process done nodes={} edges={} latency_ms={:.3}",
        graph.node_count(),
        graph.edge_count(),
        timings.total_ms
    );
    trace.timings = timings;
    ExtractionReport {
        graph,
        redundancy: params.redundancy,
        coarser,
        trace,
    }
}
