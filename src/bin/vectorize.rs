use filament_network::config::vectorize::{collect_inputs, graph_file_names, load_config};
use filament_network::distance::euclidean_distance_transform;
use filament_network::image::io::{load_mask_image, save_distance_map, write_json_file};
use filament_network::image::{ImageF32, MaskU8};
use filament_network::{GraphExport, NetworkExtractor, SliceInput};
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let inputs = collect_inputs(&config.input, &config.extensions)?;
    let mut masks: Vec<MaskU8> = Vec::with_capacity(inputs.len());
    for path in &inputs {
        let mask = load_mask_image(path)?;
        masks.push(config.preprocess.apply(mask));
    }
    let distances: Vec<ImageF32> = masks
        .iter()
        .map(|m| euclidean_distance_transform(&m.as_view()))
        .collect();

    if config.save_distance_maps {
        for (path, distance) in inputs.iter().zip(&distances) {
            let out = config
                .output
                .join(format!("{}_distance.png", file_stem(path)));
            save_distance_map(distance, &out)?;
        }
    }

    let slices: Vec<SliceInput<'_>> = masks
        .iter()
        .zip(&distances)
        .map(|(m, d)| SliceInput::with_distance(m.as_view(), d))
        .collect();
    let mut params = config.extractor.clone();
    params.coarser_levels = true;
    let extractor = NetworkExtractor::new(params);
    let results = extractor.process_batch(&slices);

    let mut failed = 0usize;
    for (path, result) in inputs.iter().zip(results) {
        match result {
            Ok(report) => {
                let mut written = Vec::new();
                for (redundancy, name) in graph_file_names(&file_stem(path), extractor.params()) {
                    let Some(graph) = report.graph_at(redundancy) else {
                        continue;
                    };
                    let out: PathBuf = config.output.join(name);
                    write_json_file(&out, &GraphExport::new(graph, &report.trace))?;
                    written.push(out.display().to_string());
                }
                let summary = report.graph.summary();
                println!(
                    "{}: nodes={} edges={} endpoints={} branch_points={} total_ms={:.1} -> {}",
                    path.display(),
                    summary.nodes,
                    summary.edges,
                    summary.endpoints,
                    summary.branch_points,
                    report.trace.timings.total_ms,
                    written.join(", ")
                );
            }
            Err(err) => {
                failed += 1;
                eprintln!("{}: extraction failed: {err}", path.display());
            }
        }
    }

    if failed == inputs.len() {
        return Err(format!("All {failed} slices failed"));
    }
    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "slice".to_string())
}

fn usage() -> String {
    "Usage: vectorize <config.json>".to_string()
}
