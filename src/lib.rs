//! # lineplot-rs: Layer-Tracking Line Plot Adapter
//!
//! A one-dimensional line plot that maps signal identifiers onto the layers
//! of a plot host. Callers push buffers tagged with a data ID; the adapter
//! creates one host layer per ID, resizes it when the frame length changes,
//! and forwards settings and highlight operations to it.
//!
//! ## Architecture
//!
//! - **Adapter**: [`LinePlot`] and its [`LayerRegistry`] of data IDs
//! - **Host**: the [`PlotHost`]/[`Layer1D`] traits, with the in-process
//!   [`MemoryHost`] as the reference implementation
//! - **Frontend**: egui_plot rendering of a [`MemoryHost`] and an eframe demo
//! - **Analysis**: rustfft spectrum frames for PSD/FFT plots
//!
//! ## Configuration
//!
//! [`PlotConfig`] is stored as JSON in the platform-appropriate data
//! directory under `dev.hxyulin.lineplot-rs`:
//!
//! - **Linux**: `~/.local/share/dev.hxyulin.lineplot-rs/`
//! - **macOS**: `~/Library/Application Support/dev.hxyulin.lineplot-rs/`
//! - **Windows**: `%APPDATA%\dev.hxyulin.lineplot-rs\`
//!
//! ## Example
//!
//! ```ignore
//! use lineplot_rs::{AxisData, FormatSize, FormatType, Highlight, LayerSettings, LinePlot, MemoryHost};
//!
//! let mut plot = LinePlot::new(MemoryHost::new());
//!
//! // One layer per data ID
//! plot.push(&samples, FormatSize::Scalar, FormatType::Float32, &AxisData::time(0.0, 8e3), "sig1")?;
//! plot.push(&psd, FormatSize::Scalar, FormatType::Float64, &freq_axis, "psd")?;
//!
//! plot.change_layer_settings(&LayerSettings::new().line_width(2.0), "sig1");
//! plot.add_highlight(Highlight::new(400.0, 480.0), "psd")?;
//! ```

pub mod analysis;
pub mod app;
pub mod config;
pub mod error;
pub mod frontend;
pub mod header;
pub mod host;
pub mod layer;
pub mod line_plot;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use app::DemoApp;
pub use config::{PlotConfig, DEFAULT_SIGNAL};
pub use error::{LinePlotError, Result};
pub use header::HeaderOptions;
pub use host::{Layer1D, LayerNumber, MemoryHost, PlotHost};
pub use layer::{Highlight, LayerColor, LayerSettings};
pub use line_plot::LinePlot;
pub use registry::{DataLayer, LayerRegistry};
pub use types::{AxisData, AxisUnits, FormatSize, FormatType};
