use super::NetworkExtractor;
use crate::error::ExtractionError;
use crate::types::{ExtractionReport, SliceInput};
use log::warn;
use rayon::prelude::*;

impl NetworkExtractor {
    /// Process independent slices in parallel.
    ///
    /// Results come back in slice order. A failing slice is reported in its
    /// own entry and does not affect the others. With a configured jitter
    /// seed, slice `i` uses `seed + i`.
    pub fn process_batch(
        &self,
        slices: &[SliceInput<'_>],
    ) -> Vec<Result<ExtractionReport, ExtractionError>> {
        slices
            .par_iter()
            .enumerate()
            .map(|(i, slice)| {
                let extractor = NetworkExtractor::new(self.params().for_slice(i));
                let result = match slice.distance {
                    Some(distance) => extractor.process(slice.mask, distance),
                    None => extractor.process_mask(slice.mask),
                };
                if let Err(err) = &result {
                    warn!("NetworkExtractor: slice {} failed: {}", i, err);
                }
                result
            })
            .collect()
    }
}
