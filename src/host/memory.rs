//! In-process plot host
//!
//! [`MemoryHost`] keeps every layer's pipe buffer, settings, and highlights
//! in memory. It is the host behind the egui renderer and the demo app, and
//! is small enough to inspect directly in tests.
//!
//! # Pipe semantics
//!
//! - With a frame size set, a layer's pipe holds the most recent
//!   `framesize` values: pushes append and the oldest values fall off.
//! - Without a frame size, each push replaces the pipe contents.
//! - Changing the frame size keeps the most recent values that still fit.

use super::{Layer1D, LayerNumber, PlotHost};
use crate::config::DEFAULT_LINE_WIDTH;
use crate::error::{LinePlotError, Result};
use crate::header::HeaderOptions;
use crate::layer::{Highlight, LayerColor, LayerSettings};
use std::collections::{BTreeMap, VecDeque};

/// A pipe layer held by [`MemoryHost`]
#[derive(Debug, Clone)]
pub struct PipeLayer {
    header: HeaderOptions,
    settings: LayerSettings,
    pipe: VecDeque<f64>,
    highlights: Vec<Highlight>,
    frames_pushed: u64,
}

impl PipeLayer {
    fn new(header: HeaderOptions, settings: LayerSettings) -> Self {
        let capacity = settings.framesize.unwrap_or(0);
        Self {
            header,
            settings,
            pipe: VecDeque::with_capacity(capacity),
            highlights: Vec::new(),
            frames_pushed: 0,
        }
    }

    /// Header of the most recent push
    pub fn header(&self) -> &HeaderOptions {
        &self.header
    }

    /// Raw values currently in the pipe
    pub fn buffer(&self) -> Vec<f64> {
        self.pipe.iter().copied().collect()
    }

    /// Number of values currently in the pipe
    pub fn len(&self) -> usize {
        self.pipe.len()
    }

    /// Whether the pipe is empty
    pub fn is_empty(&self) -> bool {
        self.pipe.is_empty()
    }

    /// Number of pushes received
    pub fn frames_pushed(&self) -> u64 {
        self.frames_pushed
    }

    /// Legend name
    pub fn name(&self) -> &str {
        self.settings.name.as_deref().unwrap_or("")
    }

    /// Whether the layer should be drawn
    pub fn is_visible(&self) -> bool {
        self.settings.visible.unwrap_or(true)
    }

    /// Line color with opacity applied
    pub fn effective_color(&self) -> LayerColor {
        let base = self.settings.color.unwrap_or(LayerColor::BLACK);
        match self.settings.opacity {
            Some(opacity) => base.with_opacity(opacity),
            None => base,
        }
    }

    /// Line width
    pub fn line_width(&self) -> f32 {
        self.settings.line_width.unwrap_or(DEFAULT_LINE_WIDTH)
    }

    /// Pipe contents as `[x, y]` points
    ///
    /// Complex data is de-interleaved and reduced with the layer's
    /// [`ComplexMode`](crate::layer::ComplexMode); a trailing half pair is
    /// dropped.
    pub fn points(&self) -> Vec<[f64; 2]> {
        if self.header.is_complex() {
            let mode = self.settings.cx_mode.unwrap_or_default();
            let values: Vec<f64> = self.pipe.iter().copied().collect();
            values
                .chunks_exact(2)
                .enumerate()
                .map(|(i, pair)| [self.header.x_at(i), mode.reduce(pair[0], pair[1])])
                .collect()
        } else {
            self.pipe
                .iter()
                .enumerate()
                .map(|(i, &y)| [self.header.x_at(i), y])
                .collect()
        }
    }

    /// Minimum and maximum Y over the plotted points
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.points()
            .iter()
            .map(|p| p[1])
            .filter(|y| y.is_finite())
            .fold(None, |acc, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }

    fn accept(&mut self, buffer: &[f64], header: &HeaderOptions) {
        if self.header != *header {
            self.header = header.clone();
        }
        match self.settings.framesize {
            Some(framesize) => {
                self.pipe.extend(buffer.iter().copied());
                self.trim_to(framesize);
            }
            None => {
                self.pipe.clear();
                self.pipe.extend(buffer.iter().copied());
            }
        }
        self.frames_pushed += 1;
    }

    fn trim_to(&mut self, framesize: usize) {
        let excess = self.pipe.len().saturating_sub(framesize);
        self.pipe.drain(..excess);
    }
}

impl Layer1D for PipeLayer {
    fn settings(&self) -> &LayerSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut LayerSettings {
        &mut self.settings
    }

    fn change_settings(&mut self, settings: &LayerSettings) {
        settings.apply_to(&mut self.settings);
        if let Some(framesize) = settings.framesize {
            self.trim_to(framesize);
        }
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

/// In-memory plot host
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    layers: BTreeMap<LayerNumber, PipeLayer>,
    next_layer: u32,
    palette: Vec<LayerColor>,
    line_width: Option<f32>,
}

impl MemoryHost {
    /// Create an empty host
    pub fn new() -> Self {
        Self::default()
    }

    /// Colors handed to new layers that do not set one, in order
    ///
    /// Once the palette runs out, colors are generated.
    pub fn with_palette(mut self, palette: Vec<LayerColor>) -> Self {
        self.palette = palette;
        self
    }

    /// Line width given to new layers that do not set one
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    /// Layers in creation order
    pub fn layers(&self) -> impl Iterator<Item = (LayerNumber, &PipeLayer)> {
        self.layers.iter().map(|(n, l)| (*n, l))
    }

    /// Number of live layers
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Axis units of the first layer, used for axis labels
    pub fn x_units_label(&self) -> &'static str {
        self.layers
            .values()
            .next()
            .map(|l| l.header.xunits.label())
            .unwrap_or("")
    }

    fn color_for(&self, index: u32) -> LayerColor {
        self.palette
            .get(index as usize)
            .copied()
            .unwrap_or_else(|| LayerColor::generate(index))
    }
}

impl PlotHost for MemoryHost {
    type Layer = PipeLayer;

    fn overlay_pipe(
        &mut self,
        header: Option<&HeaderOptions>,
        mut settings: LayerSettings,
    ) -> Result<LayerNumber> {
        let number = LayerNumber(self.next_layer);
        self.next_layer += 1;

        if settings.color.is_none() {
            settings.color = Some(self.color_for(number.0));
        }
        if settings.line_width.is_none() {
            settings.line_width = self.line_width;
        }

        let header = header.cloned().unwrap_or_default();
        tracing::trace!("Created pipe layer {} ({})", number, header.format());
        self.layers.insert(number, PipeLayer::new(header, settings));
        Ok(number)
    }

    fn get_layer(&self, layer: LayerNumber) -> Option<&PipeLayer> {
        self.layers.get(&layer)
    }

    fn get_layer_mut(&mut self, layer: LayerNumber) -> Option<&mut PipeLayer> {
        self.layers.get_mut(&layer)
    }

    fn remove_layer(&mut self, layer: LayerNumber) -> Result<()> {
        self.layers
            .remove(&layer)
            .map(|_| ())
            .ok_or(LinePlotError::LayerNotFound(layer))
    }

    fn push(&mut self, layer: LayerNumber, buffer: &[f64], header: &HeaderOptions) -> Result<()> {
        let target = self
            .layers
            .get_mut(&layer)
            .ok_or(LinePlotError::LayerNotFound(layer))?;
        target.accept(buffer, header);
        Ok(())
    }
}
