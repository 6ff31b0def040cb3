//! Plot host that records every call made to it

use lineplot_rs::{
    Highlight, HeaderOptions, Layer1D, LayerNumber, LayerSettings, LinePlotError, PlotHost,
    Result,
};
use std::collections::BTreeMap;

/// Layer that counts settings changes and keeps its pushes
#[derive(Debug, Default)]
pub struct RecordingLayer {
    pub settings: LayerSettings,
    pub header: Option<HeaderOptions>,
    pub highlights: Vec<Highlight>,
    /// Arguments of every `change_settings` call
    pub settings_changes: Vec<LayerSettings>,
    /// Length of every buffer pushed
    pub pushes: Vec<usize>,
}

impl Layer1D for RecordingLayer {
    fn settings(&self) -> &LayerSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut LayerSettings {
        &mut self.settings
    }

    fn change_settings(&mut self, settings: &LayerSettings) {
        self.settings_changes.push(settings.clone());
        settings.apply_to(&mut self.settings);
    }

    fn add_highlight(&mut self, highlight: Highlight) {
        self.highlights.push(highlight);
    }

    fn remove_highlight(&mut self, highlight: &Highlight) {
        self.highlights.retain(|h| !h.matches(highlight));
    }

    fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }
}

/// Host that records calls for later assertions
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub layers: BTreeMap<LayerNumber, RecordingLayer>,
    next_layer: u32,
    /// Settings passed to every `overlay_pipe` call
    pub created: Vec<LayerSettings>,
    /// Every `remove_layer` call
    pub removed: Vec<LayerNumber>,
    /// Every `push` call with the buffer length
    pub pushed: Vec<(LayerNumber, usize)>,
    /// Make the next `overlay_pipe` call fail
    pub fail_create: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer by number, panicking when absent
    pub fn layer(&self, number: LayerNumber) -> &RecordingLayer {
        self.layers
            .get(&number)
            .unwrap_or_else(|| panic!("layer {} should exist", number))
    }

    /// Total `change_settings` calls across live layers
    pub fn settings_change_count(&self) -> usize {
        self.layers.values().map(|l| l.settings_changes.len()).sum()
    }
}

impl PlotHost for RecordingHost {
    type Layer = RecordingLayer;

    fn overlay_pipe(
        &mut self,
        header: Option<&HeaderOptions>,
        settings: LayerSettings,
    ) -> Result<LayerNumber> {
        if std::mem::take(&mut self.fail_create) {
            return Err(LinePlotError::Host("overlay refused".to_string()));
        }
        let number = LayerNumber(self.next_layer);
        self.next_layer += 1;
        self.created.push(settings.clone());
        self.layers.insert(
            number,
            RecordingLayer {
                settings,
                header: header.cloned(),
                ..Default::default()
            },
        );
        Ok(number)
    }

    fn get_layer(&self, layer: LayerNumber) -> Option<&RecordingLayer> {
        self.layers.get(&layer)
    }

    fn get_layer_mut(&mut self, layer: LayerNumber) -> Option<&mut RecordingLayer> {
        self.layers.get_mut(&layer)
    }

    fn remove_layer(&mut self, layer: LayerNumber) -> Result<()> {
        self.removed.push(layer);
        self.layers
            .remove(&layer)
            .map(|_| ())
            .ok_or(LinePlotError::LayerNotFound(layer))
    }

    fn push(&mut self, layer: LayerNumber, buffer: &[f64], header: &HeaderOptions) -> Result<()> {
        self.pushed.push((layer, buffer.len()));
        let target = self
            .layers
            .get_mut(&layer)
            .ok_or(LinePlotError::LayerNotFound(layer))?;
        target.header = Some(header.clone());
        target.pushes.push(buffer.len());
        Ok(())
    }
}
