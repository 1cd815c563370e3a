mod common;

use common::synthetic_image::{fill_rect, line_mask, ring_mask, three_arm_mask};
use filament_network::distance::euclidean_distance_transform;
use filament_network::image::{ImageF32, MaskU8};
use filament_network::mesh::JitterParams;
use filament_network::{
    ExtractionError, ExtractorParams, NetworkExtractor, Redundancy, SliceInput,
};

fn seeded(pruning: usize, redundancy: Redundancy, seed: u64) -> ExtractorParams {
    ExtractorParams {
        pruning,
        redundancy,
        jitter: JitterParams {
            amplitude: 0.1,
            seed: Some(seed),
        },
        ..Default::default()
    }
}

#[test]
fn mismatched_distance_map_is_rejected() {
    let mask = MaskU8::new(10, 8);
    let distance = ImageF32::new(8, 10);
    let err = NetworkExtractor::default()
        .process(mask.as_view(), &distance)
        .unwrap_err();
    assert_eq!(
        err,
        ExtractionError::DimensionMismatch {
            mask_w: 10,
            mask_h: 8,
            dist_w: 8,
            dist_h: 10
        }
    );
}

#[test]
fn ring_keeps_its_cycle_in_keep_mode() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mask = ring_mask(80, 80, 40.0, 40.0, 12.0, 18.0);
    let report = NetworkExtractor::new(seeded(10, Redundancy::Keep, 3))
        .process_mask(mask.as_view())
        .expect("ring extraction succeeds");

    let mesh = report.trace.mesh.as_ref().expect("mesh stage ran");
    assert_eq!(mesh.holes, 1);
    assert!(mesh.dropped_contours.is_empty());

    let graph = &report.graph;
    assert!(graph.node_count() > 20);
    // A connected graph with at least as many edges as nodes has a cycle.
    assert!(graph.edge_count() >= graph.node_count());
    for node in graph.nodes() {
        let r = ((node.attrs.x - 40.0).powi(2) + (node.attrs.y - 40.0).powi(2)).sqrt();
        assert!((11.0..19.0).contains(&r), "node outside the ring: {node:?}");
    }
}

#[test]
fn all_mode_leaves_no_degree_two_nodes() {
    let mask = ring_mask(80, 80, 40.0, 40.0, 12.0, 18.0);
    let report = NetworkExtractor::new(seeded(10, Redundancy::All, 3))
        .process_mask(mask.as_view())
        .expect("ring extraction succeeds");
    let graph = &report.graph;
    assert!(graph.node_count() >= 2);
    assert!(graph.node_ids().iter().all(|&v| graph.degree(v) != 2));
    let simplification = report.trace.simplification.expect("simplification ran");
    assert_eq!(
        simplification.nodes_before - simplification.outcome.removed,
        graph.node_count() + report.trace.component.map_or(0, |c| c.discarded_nodes)
    );
}

#[test]
fn keep_half_and_all_shrink_in_order_and_conserve_length() {
    let mask = three_arm_mask(140, 100, 70, 30, 50, 3);
    let half = NetworkExtractor::new(seeded(10, Redundancy::Half, 1))
        .process_mask(mask.as_view())
        .expect("extraction succeeds");
    let all = NetworkExtractor::new(seeded(10, Redundancy::All, 1))
        .process_mask(mask.as_view())
        .expect("extraction succeeds");
    let keep = NetworkExtractor::new(seeded(10, Redundancy::Keep, 1))
        .process_mask(mask.as_view())
        .expect("extraction succeeds");
    // Chains numbered consecutively can fold in a single pass, so Half may
    // already reach the All fixed point.
    assert!(keep.graph.node_count() > half.graph.node_count());
    assert!(half.graph.node_count() >= all.graph.node_count());
    assert_eq!(all.graph.node_count(), 4);
    let total = |r: &filament_network::ExtractionReport| r.graph.summary().total_weight;
    assert!((total(&keep) - total(&half)).abs() < 1e-6 * total(&keep));
    assert!((total(&keep) - total(&all)).abs() < 1e-6 * total(&keep));
}

#[test]
fn coarser_levels_match_direct_runs() {
    let mask = three_arm_mask(140, 100, 70, 30, 50, 3);
    let params = ExtractorParams {
        coarser_levels: true,
        ..seeded(10, Redundancy::Keep, 1)
    };
    let report = NetworkExtractor::new(params)
        .process_mask(mask.as_view())
        .expect("extraction succeeds");
    let levels: Vec<Redundancy> = report.coarser.iter().map(|l| l.redundancy).collect();
    assert_eq!(levels, [Redundancy::Half, Redundancy::All]);

    for mode in [Redundancy::Keep, Redundancy::Half, Redundancy::All] {
        let direct = NetworkExtractor::new(seeded(10, mode, 1))
            .process_mask(mask.as_view())
            .expect("extraction succeeds");
        let derived = report.graph_at(mode).expect("level carried by the report");
        assert_eq!(derived.summary(), direct.graph.summary(), "{mode:?}");
    }

    let all_only = NetworkExtractor::new(ExtractorParams {
        coarser_levels: true,
        ..seeded(10, Redundancy::All, 1)
    })
    .process_mask(mask.as_view())
    .expect("extraction succeeds");
    assert!(all_only.coarser.is_empty());
    assert!(all_only.graph_at(Redundancy::Half).is_none());
}

#[test]
fn secondary_blobs_are_carved_out() {
    let mut mask = line_mask(120, 40, 10, 10, 100);
    fill_rect(&mut mask, 10, 9, 110, 12);
    fill_rect(&mut mask, 40, 25, 52, 33);
    let report = NetworkExtractor::new(seeded(5, Redundancy::All, 11))
        .process_mask(mask.as_view())
        .expect("extraction succeeds");
    let contours = report.trace.contours.as_ref().expect("contours traced");
    assert_eq!(contours.kept, 2);
    assert_eq!(report.graph.node_count(), 2);
    for node in report.graph.nodes() {
        assert!(node.attrs.y < 13.0, "node in the carved blob: {node:?}");
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let mask = three_arm_mask(140, 100, 70, 30, 50, 3);
    let extractor = NetworkExtractor::new(seeded(5, Redundancy::Keep, 21));
    let a = extractor.process_mask(mask.as_view()).expect("first run");
    let b = extractor.process_mask(mask.as_view()).expect("second run");
    assert_eq!(a.graph.summary(), b.graph.summary());
    assert_eq!(
        a.graph.nodes().iter().map(|n| n.attrs).collect::<Vec<_>>(),
        b.graph.nodes().iter().map(|n| n.attrs).collect::<Vec<_>>()
    );
}

#[test]
fn batch_results_follow_slice_order_and_isolate_failures() {
    let line = line_mask(120, 21, 10, 10, 100);
    let empty = MaskU8::new(50, 50);
    let arms = three_arm_mask(140, 100, 70, 30, 50, 3);
    let line_distance = euclidean_distance_transform(&line.as_view());
    let wrong = ImageF32::new(3, 3);

    let slices = vec![
        SliceInput::with_distance(line.as_view(), &line_distance),
        SliceInput::new(empty.as_view()),
        SliceInput::with_distance(arms.as_view(), &wrong),
        SliceInput::new(arms.as_view()),
    ];
    let extractor = NetworkExtractor::new(seeded(10, Redundancy::All, 100));
    let results = extractor.process_batch(&slices);
    assert_eq!(results.len(), 4);

    let line_report = results[0].as_ref().expect("line slice");
    assert_eq!(line_report.graph.node_count(), 2);
    assert_eq!(line_report.trace.input.width, 120);

    let empty_report = results[1].as_ref().expect("empty slice");
    assert!(empty_report.graph.is_empty());

    assert!(matches!(
        results[2],
        Err(ExtractionError::DimensionMismatch { .. })
    ));

    let arms_report = results[3].as_ref().expect("arms slice");
    assert_eq!(arms_report.graph.summary().branch_points, 1);

    let single = NetworkExtractor::new(seeded(10, Redundancy::All, 103))
        .process_mask(arms.as_view())
        .expect("arms alone");
    assert_eq!(single.graph.summary(), arms_report.graph.summary());
}

#[test]
fn report_exports_camel_case_json() {
    let mask = line_mask(60, 11, 5, 5, 50);
    let report = NetworkExtractor::new(seeded(2, Redundancy::All, 5))
        .process_mask(mask.as_view())
        .expect("extraction succeeds");
    let json = serde_json::to_value(report.export()).expect("serializable report");
    assert_eq!(json["summary"]["nodes"], 2);
    assert_eq!(json["edges"].as_array().map(|e| e.len()), Some(1));
    assert!(json["edges"][0]["weight"].as_f64().is_some());
    assert!(json["trace"]["timings"]["totalMs"].as_f64().is_some());
    assert!(json["trace"]["classification"]["defaultedRadii"].is_number());
}
