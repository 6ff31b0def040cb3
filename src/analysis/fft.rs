//! Spectrum frames for pushing into a line plot
//!
//! [`SpectrumAnalyzer`] turns a frame of real samples into frequency-domain
//! buffers together with the [`AxisData`] that places them on a frequency
//! axis, ready for [`LinePlot::push`](crate::LinePlot::push):
//!
//! - [`Spectrum::psd_db`] - one-sided power spectral density in dB (scalar)
//! - [`SpectrumAnalyzer::fft`] - full complex FFT, interleaved re/im (complex)

use crate::types::{AxisData, AxisUnits};
use rustfft::{num_complex::Complex, FftPlanner};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Floor for dB values of empty bins
pub const DB_FLOOR: f64 = -200.0;

/// Window function type for FFT preprocessing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowFunction {
    /// Rectangular window (no windowing)
    #[default]
    Rectangular,
    /// Hann window (good general purpose)
    Hann,
    /// Hamming window (reduced side lobes)
    Hamming,
    /// Blackman window (very low side lobes)
    Blackman,
}

impl WindowFunction {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WindowFunction::Rectangular => "Rectangular",
            WindowFunction::Hann => "Hann",
            WindowFunction::Hamming => "Hamming",
            WindowFunction::Blackman => "Blackman",
        }
    }

    /// Get all window functions
    pub fn all() -> &'static [WindowFunction] {
        &[
            WindowFunction::Rectangular,
            WindowFunction::Hann,
            WindowFunction::Hamming,
            WindowFunction::Blackman,
        ]
    }

    /// Compute window coefficient at position i out of n samples
    pub fn coefficient(&self, i: usize, n: usize) -> f64 {
        let phase = 2.0 * PI * i as f64 / n as f64;
        match self {
            WindowFunction::Rectangular => 1.0,
            WindowFunction::Hann => 0.5 * (1.0 - phase.cos()),
            WindowFunction::Hamming => 0.54 - 0.46 * phase.cos(),
            // Exactly 0 at the endpoints; clamp the -ε rounding produces
            WindowFunction::Blackman => {
                (0.42 - 0.5 * phase.cos() + 0.08 * (2.0 * phase).cos()).max(0.0)
            }
        }
    }

    /// Generate window coefficients for n samples
    pub fn generate(&self, n: usize) -> Vec<f64> {
        (0..n).map(|i| self.coefficient(i, n)).collect()
    }
}

/// One-sided spectrum of a real frame
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Linear magnitude per bin
    pub magnitudes: Vec<f64>,
    /// Power spectral density per bin (dB)
    pub psd_db: Vec<f64>,
    /// Frequency axis (start 0 Hz, bin spacing)
    pub axis: AxisData,
}

impl Spectrum {
    /// Frequency resolution in Hz per bin
    pub fn resolution(&self) -> f64 {
        self.axis.xdelta.unwrap_or(0.0)
    }

    /// Frequency and magnitude of the strongest non-DC bin
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.magnitudes
            .iter()
            .enumerate()
            .skip(1)
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, &m)| (i as f64 * self.resolution(), m))
    }
}

/// Windowed FFT over frames of real samples
pub struct SpectrumAnalyzer {
    planner: FftPlanner<f64>,
    window: WindowFunction,
}

impl std::fmt::Debug for SpectrumAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpectrumAnalyzer")
            .field("window", &self.window)
            .finish()
    }
}

impl SpectrumAnalyzer {
    /// Create an analyzer with the given window
    pub fn new(window: WindowFunction) -> Self {
        Self {
            planner: FftPlanner::new(),
            window,
        }
    }

    /// Window in use
    pub fn window(&self) -> WindowFunction {
        self.window
    }

    /// Change the window
    pub fn set_window(&mut self, window: WindowFunction) {
        self.window = window;
    }

    fn transform(&mut self, samples: &[f64]) -> Vec<Complex<f64>> {
        let n = samples.len();
        let window = self.window.generate(n);
        let mut buffer: Vec<Complex<f64>> = samples
            .iter()
            .zip(&window)
            .map(|(&s, &w)| Complex::new(s * w, 0.0))
            .collect();

        let fft = self.planner.plan_fft_forward(n);
        fft.process(&mut buffer);
        buffer
    }

    /// Full complex FFT, interleaved as `[re0, im0, re1, im1, ...]`
    ///
    /// Push the result with [`FormatSize::Complex`](crate::types::FormatSize).
    pub fn fft(&mut self, samples: &[f64], sample_rate: f64) -> (Vec<f64>, AxisData) {
        let n = samples.len();
        let axis = frequency_axis(n, sample_rate);
        if n == 0 {
            return (Vec::new(), axis);
        }
        let interleaved = self
            .transform(samples)
            .into_iter()
            .flat_map(|c| [c.re, c.im])
            .collect();
        (interleaved, axis)
    }

    /// One-sided magnitude and PSD of a frame
    pub fn spectrum(&mut self, samples: &[f64], sample_rate: f64) -> Spectrum {
        let n = samples.len();
        let axis = frequency_axis(n, sample_rate);
        if n == 0 {
            return Spectrum {
                magnitudes: Vec::new(),
                psd_db: Vec::new(),
                axis,
            };
        }

        let num_bins = n / 2 + 1;
        let magnitudes: Vec<f64> = self
            .transform(samples)
            .iter()
            .take(num_bins)
            .map(|c| 2.0 * c.norm() / n as f64)
            .collect();

        let psd_db = magnitudes
            .iter()
            .map(|&m| if m > 1e-10 { 20.0 * m.log10() } else { DB_FLOOR })
            .collect();

        Spectrum {
            magnitudes,
            psd_db,
            axis,
        }
    }
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::new(WindowFunction::default())
    }
}

/// Frequency axis for an `n`-point transform
pub fn frequency_axis(n: usize, sample_rate: f64) -> AxisData {
    let xdelta = if n == 0 { 0.0 } else { sample_rate / n as f64 };
    AxisData::new()
        .with_start(0.0)
        .with_delta(xdelta)
        .with_units(AxisUnits::Frequency)
}
