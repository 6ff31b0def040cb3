//! Plot host interface
//!
//! A plot host owns the visual layers and does the actual buffering and
//! drawing. [`LinePlot`](crate::LinePlot) only talks to it through the
//! [`PlotHost`] and [`Layer1D`] traits, so any host (the in-process
//! [`MemoryHost`], a remote renderer, a test double) can sit underneath.

pub mod memory;

pub use memory::{MemoryHost, PipeLayer};

use crate::error::Result;
use crate::header::HeaderOptions;
use crate::layer::{Highlight, LayerSettings};
use serde::{Deserialize, Serialize};

/// Host-assigned layer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerNumber(pub u32);

impl std::fmt::Display for LayerNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A one-dimensional layer owned by a host
pub trait Layer1D {
    /// Current settings of the layer
    fn settings(&self) -> &LayerSettings;

    /// Direct access to the settings fields
    ///
    /// Writes here bypass [`Layer1D::change_settings`], so no side effects
    /// such as pipe resizing happen.
    fn settings_mut(&mut self) -> &mut LayerSettings;

    /// Apply a partial settings update, including its side effects
    fn change_settings(&mut self, settings: &LayerSettings);

    /// Add a highlight
    fn add_highlight(&mut self, highlight: Highlight);

    /// Remove every highlight matching `highlight`
    fn remove_highlight(&mut self, highlight: &Highlight);

    /// Remove all highlights
    fn clear_highlights(&mut self);

    /// Current highlights
    fn highlights(&self) -> &[Highlight];
}

/// Interface of a plot host
///
/// # Example
///
/// ```ignore
/// fn show_signal<H: PlotHost>(host: &mut H, samples: &[f64]) -> Result<LayerNumber> {
///     let header = HeaderOptions::default();
///     let n = host.overlay_pipe(Some(&header), LayerSettings::new().name("signal"))?;
///     host.push(n, samples, &header)?;
///     Ok(n)
/// }
/// ```
pub trait PlotHost {
    /// Layer type handed out by this host
    type Layer: Layer1D;

    /// Create a new pipe layer and return its number
    ///
    /// # Arguments
    /// * `header` - Initial buffer layout, host default when `None`
    /// * `settings` - Initial settings (frame size and legend name)
    fn overlay_pipe(
        &mut self,
        header: Option<&HeaderOptions>,
        settings: LayerSettings,
    ) -> Result<LayerNumber>;

    /// Look up a layer
    fn get_layer(&self, layer: LayerNumber) -> Option<&Self::Layer>;

    /// Look up a layer mutably
    fn get_layer_mut(&mut self, layer: LayerNumber) -> Option<&mut Self::Layer>;

    /// Remove a layer
    fn remove_layer(&mut self, layer: LayerNumber) -> Result<()>;

    /// Push a buffer into a layer
    fn push(&mut self, layer: LayerNumber, buffer: &[f64], header: &HeaderOptions) -> Result<()>;
}
