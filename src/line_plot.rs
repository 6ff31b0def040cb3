//! Line plot adapter
//!
//! [`LinePlot`] is a one-dimensional view of signal data (sinusoids, PSD,
//! FFT). Several lines can be plotted at once by pushing with distinct data
//! IDs; each ID gets its own host layer and becomes that layer's legend
//! name.
//!
//! # Example
//!
//! ```ignore
//! use lineplot_rs::{AxisData, FormatSize, FormatType, LinePlot, MemoryHost};
//!
//! let mut plot = LinePlot::new(MemoryHost::new());
//! plot.push(&samples, FormatSize::Scalar, FormatType::Float32, &AxisData::time(0.0, 1e3), "sig1")?;
//! plot.add_highlight(Highlight::new(0.1, 0.2), "sig1")?;
//! ```

use crate::config::{PlotConfig, DEFAULT_SIGNAL};
use crate::error::{Result, ResultExt};
use crate::header::HeaderOptions;
use crate::host::{Layer1D, PlotHost};
use crate::layer::{Highlight, LayerSettings};
use crate::registry::{DataLayer, LayerRegistry};
use crate::types::{AxisData, FormatSize, FormatType};

/// Line plot over a plot host
#[derive(Debug)]
pub struct LinePlot<H: PlotHost> {
    host: H,
    layers: LayerRegistry,
    default_signal: String,
    default_size: FormatSize,
    default_type: FormatType,
}

impl<H: PlotHost> LinePlot<H> {
    /// Wrap a host with the default signal name and format
    pub fn new(host: H) -> Self {
        Self {
            host,
            layers: LayerRegistry::new(),
            default_signal: DEFAULT_SIGNAL.to_string(),
            default_size: FormatSize::default(),
            default_type: FormatType::default(),
        }
    }

    /// Wrap a host using the defaults from `config`
    pub fn with_config(host: H, config: &PlotConfig) -> Self {
        Self {
            host,
            layers: LayerRegistry::new(),
            default_signal: config.default_signal.clone(),
            default_size: config.default_format_size,
            default_type: config.default_format_type,
        }
    }

    /// The wrapped host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The wrapped host, mutably
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Unwrap the host
    pub fn into_host(self) -> H {
        self.host
    }

    /// Signal identifier used by the `*_signal` helpers
    pub fn default_signal(&self) -> &str {
        &self.default_signal
    }

    /// Layer bookkeeping
    pub fn registry(&self) -> &LayerRegistry {
        &self.layers
    }

    /// Layer record for `data_id`, without creating one
    pub fn data_layer(&self, data_id: &str) -> Option<DataLayer> {
        self.layers.get(data_id)
    }

    /// Push a data buffer to the plot
    ///
    /// # Arguments
    /// * `buffer` - Data to plot
    /// * `size` - Shape of the data (complex, real)
    /// * `format_type` - Numeric encoding of the buffer
    /// * `x_axis` - Description of the X-axis
    /// * `data_id` - Identifier of the signal; selects the layer
    ///
    /// The first push for an identifier creates its layer. A push whose
    /// length differs from the previous one resizes the layer first.
    pub fn push(
        &mut self,
        buffer: &[f64],
        size: FormatSize,
        format_type: FormatType,
        x_axis: &AxisData,
        data_id: &str,
    ) -> Result<()> {
        let header = HeaderOptions::type1000(size, format_type, x_axis);
        let record = self
            .layers
            .resolve(&mut self.host, data_id, Some(&header), Some(buffer.len()))
            .with_context(|| format!("Failed to resolve layer for '{}'", data_id))?;

        tracing::trace!(
            "Pushing {} values ({}) to layer {}",
            buffer.len(),
            header.format(),
            record.layer_number
        );
        self.host
            .push(record.layer_number, buffer, &header)
            .with_context(|| format!("Failed to push '{}'", data_id))
    }

    /// Push to the default signal with the default format and an empty axis
    pub fn push_signal(&mut self, buffer: &[f64]) -> Result<()> {
        let data_id = self.default_signal.clone();
        self.push(
            buffer,
            self.default_size,
            self.default_type,
            &AxisData::default(),
            &data_id,
        )
    }

    /// Get the host layer for `data_id`
    ///
    /// Creates the layer when the identifier was never referenced. Returns
    /// `None` when the host no longer has the recorded layer.
    pub fn layer(&mut self, data_id: &str) -> Result<Option<&mut H::Layer>> {
        let record = self.layers.resolve(&mut self.host, data_id, None, None)?;
        Ok(self.host.get_layer_mut(record.layer_number))
    }

    /// Get the host layer for `data_id` without creating anything
    pub fn try_layer(&self, data_id: &str) -> Option<&H::Layer> {
        let record = self.layers.get(data_id)?;
        self.host.get_layer(record.layer_number)
    }

    fn try_layer_mut(&mut self, data_id: &str) -> Option<&mut H::Layer> {
        let record = self.layers.get(data_id)?;
        self.host.get_layer_mut(record.layer_number)
    }

    /// Remove the host layer of `data_id`
    ///
    /// The registry entry is kept, so later operations on the same
    /// identifier see a stale layer number. Use [`LinePlot::forget_layer`]
    /// to drop both. An identifier that was never referenced is ignored.
    pub fn remove_layer(&mut self, data_id: &str) -> Result<()> {
        let Some(record) = self.layers.get(data_id) else {
            tracing::debug!("remove_layer: no layer recorded for '{}'", data_id);
            return Ok(());
        };
        tracing::debug!("Removing layer {} for '{}'", record.layer_number, data_id);
        self.host.remove_layer(record.layer_number)
    }

    /// Remove the host layer of `data_id` and its registry entry
    ///
    /// A later push for the same identifier creates a fresh layer. A host
    /// layer that is already gone is not an error.
    pub fn forget_layer(&mut self, data_id: &str) -> Result<()> {
        let Some(record) = self.layers.forget(data_id) else {
            return Ok(());
        };
        if self.host.get_layer(record.layer_number).is_some() {
            self.host.remove_layer(record.layer_number)?;
        }
        tracing::debug!("Forgot layer {} for '{}'", record.layer_number, data_id);
        Ok(())
    }

    /// Change settings of the layer for `data_id`
    ///
    /// Every field set in `settings` is assigned onto the layer's settings
    /// as-is; no other field changes and no resize is triggered. Silent
    /// no-op when there is no such layer.
    pub fn change_layer_settings(&mut self, settings: &LayerSettings, data_id: &str) {
        match self.try_layer_mut(data_id) {
            Some(layer) => settings.apply_to(layer.settings_mut()),
            None => tracing::debug!("change_layer_settings: no layer for '{}'", data_id),
        }
    }

    /// Change settings from a `name -> value` map
    ///
    /// # Errors
    ///
    /// Unknown setting names or ill-typed values are rejected before
    /// anything is applied.
    pub fn change_layer_settings_from_map(
        &mut self,
        settings: &serde_json::Map<String, serde_json::Value>,
        data_id: &str,
    ) -> Result<()> {
        let settings = LayerSettings::from_map(settings)?;
        self.change_layer_settings(&settings, data_id);
        Ok(())
    }

    /// Add a highlight to the layer of `data_id`
    pub fn add_highlight(&mut self, highlight: Highlight, data_id: &str) -> Result<()> {
        match self.layer(data_id)? {
            Some(layer) => layer.add_highlight(highlight),
            None => tracing::warn!("add_highlight: layer for '{}' is gone", data_id),
        }
        Ok(())
    }

    /// Remove a highlight from the layer of `data_id`
    pub fn remove_highlight(&mut self, highlight: &Highlight, data_id: &str) -> Result<()> {
        match self.layer(data_id)? {
            Some(layer) => layer.remove_highlight(highlight),
            None => tracing::warn!("remove_highlight: layer for '{}' is gone", data_id),
        }
        Ok(())
    }

    /// Clear all highlights on the layer of `data_id`
    pub fn clear_highlights(&mut self, data_id: &str) -> Result<()> {
        match self.layer(data_id)? {
            Some(layer) => layer.clear_highlights(),
            None => tracing::warn!("clear_highlights: layer for '{}' is gone", data_id),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use crate::layer::LayerColor;

    fn scalar_push(plot: &mut LinePlot<MemoryHost>, len: usize, data_id: &str) {
        let buffer: Vec<f64> = (0..len).map(|i| i as f64).collect();
        plot.push(
            &buffer,
            FormatSize::Scalar,
            FormatType::Float64,
            &AxisData::default(),
            data_id,
        )
        .unwrap();
    }

    #[test]
    fn test_push_reuses_layer() {
        let mut plot = LinePlot::new(MemoryHost::new());
        scalar_push(&mut plot, 16, "sig1");
        scalar_push(&mut plot, 16, "sig1");
        scalar_push(&mut plot, 8, "sig2");

        assert_eq!(plot.host().layer_count(), 2);
        let sig1 = plot.try_layer("sig1").unwrap();
        assert_eq!(sig1.frames_pushed(), 2);
        assert_eq!(sig1.len(), 16);
    }

    #[test]
    fn test_push_signal_uses_defaults() {
        let mut plot = LinePlot::new(MemoryHost::new());
        plot.push_signal(&[1.0, 0.0, 0.0, 1.0]).unwrap();

        let layer = plot.try_layer(DEFAULT_SIGNAL).unwrap();
        assert_eq!(layer.header().format(), "CF");
        assert_eq!(layer.name(), "signal");
        assert_eq!(plot.data_layer("signal").unwrap().frame_size, Some(4));
    }

    #[test]
    fn test_with_config_defaults() {
        let config = PlotConfig {
            default_signal: "trace".to_string(),
            default_format_size: FormatSize::Scalar,
            default_format_type: FormatType::Int16,
            ..Default::default()
        };
        let mut plot = LinePlot::with_config(MemoryHost::new(), &config);
        plot.push_signal(&[1.0, 2.0]).unwrap();

        assert_eq!(plot.default_signal(), "trace");
        assert_eq!(plot.try_layer("trace").unwrap().header().format(), "SI");
    }

    #[test]
    fn test_layer_creates_on_miss() {
        let mut plot = LinePlot::new(MemoryHost::new());
        assert!(plot.try_layer("sig").is_none());
        assert!(plot.layer("sig").unwrap().is_some());
        assert_eq!(plot.data_layer("sig").unwrap().frame_size, None);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut plot = LinePlot::new(MemoryHost::new());
        plot.remove_layer("never").unwrap();
        assert_eq!(plot.host().layer_count(), 0);
        assert!(plot.registry().is_empty());
    }

    #[test]
    fn test_forget_layer_allows_recreation() {
        let mut plot = LinePlot::new(MemoryHost::new());
        scalar_push(&mut plot, 4, "sig1");
        let old = plot.data_layer("sig1").unwrap().layer_number;

        plot.forget_layer("sig1").unwrap();
        assert!(plot.data_layer("sig1").is_none());
        assert_eq!(plot.host().layer_count(), 0);

        scalar_push(&mut plot, 4, "sig1");
        assert_ne!(plot.data_layer("sig1").unwrap().layer_number, old);
    }

    #[test]
    fn test_change_settings_on_missing_layer_is_noop() {
        let mut plot = LinePlot::new(MemoryHost::new());
        plot.change_layer_settings(&LayerSettings::new().color(LayerColor::RED), "none");
        assert_eq!(plot.host().layer_count(), 0);
        assert!(plot.registry().is_empty());
    }

    #[test]
    fn test_highlights_forwarded() {
        let mut plot = LinePlot::new(MemoryHost::new());
        scalar_push(&mut plot, 4, "sig1");

        plot.add_highlight(Highlight::new(0.0, 1.0), "sig1").unwrap();
        plot.add_highlight(Highlight::new(2.0, 3.0), "sig1").unwrap();
        assert_eq!(plot.try_layer("sig1").unwrap().highlights().len(), 2);

        plot.remove_highlight(&Highlight::new(0.0, 1.0), "sig1").unwrap();
        assert_eq!(plot.try_layer("sig1").unwrap().highlights().len(), 1);

        plot.clear_highlights("sig1").unwrap();
        assert!(plot.try_layer("sig1").unwrap().highlights().is_empty());
    }

    #[test]
    fn test_highlight_on_removed_layer_is_noop() {
        let mut plot = LinePlot::new(MemoryHost::new());
        scalar_push(&mut plot, 4, "sig1");
        plot.remove_layer("sig1").unwrap();

        plot.add_highlight(Highlight::new(0.0, 1.0), "sig1").unwrap();
        assert_eq!(plot.host().layer_count(), 0);
    }
}
