use crate::extractor::ExtractorParams;
use crate::graph::Redundancy;
use crate::image::MaskU8;
use crate::morphology::{invert_mask, smooth_mask};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `vectorize` tool.
///
/// ```json
/// {
///   "input": "masks/",
///   "output": "graphs/",
///   "invert": false,
///   "smoothing": 2,
///   "extractor": { "pruning": 5, "redundancy": "half" }
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorizeConfig {
    /// A mask image or a directory of masks (processed as one stack).
    pub input: PathBuf,
    /// Directory receiving the JSON reports: one per slice and emitted
    /// redundancy level (see [`Redundancy::emitted`]).
    pub output: PathBuf,
    #[serde(flatten)]
    pub preprocess: PreprocessConfig,
    #[serde(default)]
    pub extractor: ExtractorParams,
    /// File extensions picked up from an input directory.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Also write the distance map of every slice as a 16-bit PNG.
    #[serde(default)]
    pub save_distance_maps: bool,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreprocessConfig {
    /// Swap foreground and background (white-background acquisitions).
    pub invert: bool,
    /// Radius of the disk used for opening/closing; `None` disables smoothing.
    pub smoothing: Option<usize>,
}

impl PreprocessConfig {
    pub fn apply(&self, mask: MaskU8) -> MaskU8 {
        let mask = if self.invert {
            invert_mask(&mask.as_view())
        } else {
            mask
        };
        match self.smoothing {
            Some(radius) => smooth_mask(&mask.as_view(), radius),
            None => mask,
        }
    }
}

fn default_extensions() -> Vec<String> {
    ["png", "tif", "tiff", "bmp", "pgm"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn load_config(path: &Path) -> Result<VectorizeConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

/// The input file itself, or the matching files of a directory sorted by name.
pub fn collect_inputs(input: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, String> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    let entries = fs::read_dir(input)
        .map_err(|e| format!("Failed to list {}: {e}", input.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| format!("Failed to list {}: {e}", input.display()))?
            .path();
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)));
        if path.is_file() && matches {
            files.push(path);
        }
    }
    files.sort();
    if files.is_empty() {
        return Err(format!("No input images found in {}", input.display()));
    }
    Ok(files)
}

/// `<stem>_graph_r<R>_p<P>.json`, naming the redundancy level and pruning order.
pub fn graph_file_name(stem: &str, redundancy: Redundancy, pruning: usize) -> String {
    format!("{stem}_graph_r{}_p{pruning}.json", redundancy.level())
}

/// One output file per level emitted for `params.redundancy`, finest first.
pub fn graph_file_names(stem: &str, params: &ExtractorParams) -> Vec<(Redundancy, String)> {
    params
        .redundancy
        .emitted()
        .iter()
        .map(|&r| (r, graph_file_name(stem, r, params.pruning)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg: VectorizeConfig =
            serde_json::from_str(r#"{ "input": "a.png", "output": "out" }"#).expect("valid json");
        assert!(!cfg.preprocess.invert);
        assert_eq!(cfg.preprocess.smoothing, None);
        assert_eq!(cfg.extractor, ExtractorParams::default());
        assert!(cfg.extensions.iter().any(|e| e == "tif"));
    }

    #[test]
    fn file_name_encodes_parameters() {
        assert_eq!(
            graph_file_name("slice_03", Redundancy::All, 7),
            "slice_03_graph_r0_p7.json"
        );
    }

    #[test]
    fn coarser_levels_get_their_own_files() {
        let names = |redundancy| {
            let params = ExtractorParams {
                pruning: 7,
                redundancy,
                ..ExtractorParams::default()
            };
            graph_file_names("s", &params)
                .into_iter()
                .map(|(_, name)| name)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            names(Redundancy::Keep),
            ["s_graph_r2_p7.json", "s_graph_r1_p7.json", "s_graph_r0_p7.json"]
        );
        assert_eq!(
            names(Redundancy::Half),
            ["s_graph_r1_p7.json", "s_graph_r0_p7.json"]
        );
        assert_eq!(names(Redundancy::All), ["s_graph_r0_p7.json"]);
    }

    #[test]
    fn preprocessing_inverts_then_smooths() {
        let mask = MaskU8::from_vec(3, 1, vec![0, 255, 255]).expect("valid mask");
        let cfg = PreprocessConfig {
            invert: true,
            smoothing: None,
        };
        assert_eq!(cfg.apply(mask).data, vec![255, 0, 0]);
    }
}
