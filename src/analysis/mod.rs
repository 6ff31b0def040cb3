//! Analysis module for signal processing
//!
//! Produces frequency-domain frames (FFT, PSD) that can be pushed into a
//! line plot alongside time-domain data.

pub mod fft;

pub use fft::{frequency_axis, Spectrum, SpectrumAnalyzer, WindowFunction};
