use ndarray::{Array3, ArrayView2, ArrayView3, Axis};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlideviewError};

/// Value interval mapped onto the bins.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistogramRange {
    pub min: f32,
    pub max: f32,
}

impl HistogramRange {
    pub fn range(&self) -> f32 {
        self.max - self.min
    }
}

/// Smallest and largest bin count over all channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinInfo {
    pub min: u64,
    pub max: u64,
}

/// Per-channel histogram of a layer, consumed by the histogram display.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramData {
    range: HistogramRange,
    bin_info: BinInfo,
    data: Vec<Vec<u64>>,
    nbins: usize,
    available: bool,
}

impl Default for HistogramData {
    fn default() -> Self {
        Self {
            range: HistogramRange { min: 0.0, max: 1.0 },
            bin_info: BinInfo::default(),
            data: Vec::new(),
            nbins: 0,
            available: false,
        }
    }
}

impl HistogramData {
    /// Bin a `[channel, row, col]` buffer into `nbins` bins over `[0, max]`.
    ///
    /// Values outside the range land in the edge bins; NaNs are skipped.
    pub fn compute(pixels: ArrayView3<'_, f32>, nbins: usize, max: f32) -> Result<Self> {
        if nbins == 0 {
            return Err(SlideviewError::InvalidHistogram("bin count must be > 0".into()));
        }
        if !max.is_finite() || max <= 0.0 {
            return Err(SlideviewError::InvalidHistogram(format!(
                "value range [0, {max}] is empty"
            )));
        }
        let range = HistogramRange { min: 0.0, max };

        let data: Vec<Vec<u64>> = (0..pixels.len_of(Axis(0)))
            .into_par_iter()
            .map(|c| bin_channel(pixels.index_axis(Axis(0), c), nbins, range))
            .collect();

        let bin_info = data
            .iter()
            .flatten()
            .fold(None, |acc: Option<BinInfo>, &v| {
                Some(match acc {
                    Some(b) => BinInfo {
                        min: b.min.min(v),
                        max: b.max.max(v),
                    },
                    None => BinInfo { min: v, max: v },
                })
            })
            .unwrap_or_default();

        Ok(Self {
            range,
            bin_info,
            data,
            nbins,
            available: true,
        })
    }

    /// Bin a flat buffer laid out as `[c * H * W + h * W + w]`.
    pub fn from_raw(
        values: &[f32],
        channels: usize,
        height: usize,
        width: usize,
        nbins: usize,
        max: f32,
    ) -> Result<Self> {
        let expected = channels * height * width;
        let size_error = || SlideviewError::PixelBufferSize {
            expected,
            actual: values.len(),
        };
        if values.len() != expected {
            return Err(size_error());
        }
        let view =
            ArrayView3::from_shape((channels, height, width), values).map_err(|_| size_error())?;
        Self::compute(view, nbins, max)
    }

    pub fn from_array(pixels: &Array3<f32>, nbins: usize, max: f32) -> Result<Self> {
        Self::compute(pixels.view(), nbins, max)
    }

    pub fn available(&self) -> bool {
        self.available
    }

    pub fn bins(&self) -> usize {
        self.nbins
    }

    pub fn channels(&self) -> usize {
        self.data.len()
    }

    /// Count of `channel` values in `bin`, 0 for indices out of range.
    pub fn amount(&self, channel: usize, bin: usize) -> u64 {
        self.data
            .get(channel)
            .and_then(|c| c.get(bin))
            .copied()
            .unwrap_or(0)
    }

    pub fn range(&self) -> HistogramRange {
        self.range
    }

    pub fn bin_info(&self) -> BinInfo {
        self.bin_info
    }
}

fn bin_channel(channel: ArrayView2<'_, f32>, nbins: usize, range: HistogramRange) -> Vec<u64> {
    let mut bins = vec![0u64; nbins];
    let span = range.range();
    let last = (nbins - 1) as f32;
    for &v in channel.iter() {
        if v.is_nan() {
            continue;
        }
        let pos = ((v - range.min) / span * nbins as f32).clamp(0.0, last);
        bins[pos as usize] += 1;
    }
    bins
}
