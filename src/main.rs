use filament_network::image::MaskU8;
use filament_network::{ExtractorParams, NetworkExtractor, Redundancy};

fn main() {
    // Demo: a synthetic Y-shaped filament, extracted with full simplification.
    let (w, h) = (160usize, 160usize);
    let mut mask = MaskU8::new(w, h);
    let centre = (80.0f64, 80.0f64);
    for angle_deg in [90.0f64, 210.0, 330.0] {
        let (s, c) = angle_deg.to_radians().sin_cos();
        for step in 0..600 {
            let t = step as f64 * 0.1;
            let (px, py) = (centre.0 + c * t, centre.1 + s * t);
            for dy in -3i32..=3 {
                for dx in -3i32..=3 {
                    let (x, y) = (px.round() as i32 + dx, py.round() as i32 + dy);
                    if dx * dx + dy * dy <= 9 && x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
                        mask.set(x as usize, y as usize, 255);
                    }
                }
            }
        }
    }

    let extractor = NetworkExtractor::new(ExtractorParams {
        redundancy: Redundancy::All,
        ..Default::default()
    });
    match extractor.process_mask(mask.as_view()) {
        Ok(report) => {
            let summary = report.graph.summary();
            println!(
                "nodes={} edges={} endpoints={} branch_points={} latency_ms={:.3}",
                summary.nodes,
                summary.edges,
                summary.endpoints,
                summary.branch_points,
                report.trace.timings.total_ms
            );
        }
        Err(err) => eprintln!("extraction failed: {err}"),
    }
}
