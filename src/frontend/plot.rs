//! Plot rendering module using egui_plot
//!
//! This module draws the layers of a [`MemoryHost`] with the egui_plot
//! crate.
//!
//! # Features
//!
//! - **One item per layer**: lines, or point markers when a symbol is set
//! - **Legend names**: each layer's `name` setting labels its line
//! - **Highlights**: translucent spans over the visible Y range
//! - **Auto-scaling**: Y bounds fit the visible data with padding
//!
//! # Main Types
//!
//! - [`PlotView`] - Display toggles and rendering

use crate::config::PlotConfig;
use crate::host::{Layer1D, MemoryHost, PipeLayer};
use crate::layer::{Highlight, LineStyle, Symbol};
use egui::{Color32, Stroke, Ui};
use egui_plot::{Corner, Legend, Line, MarkerShape, Plot, PlotPoints, PlotUi, Points, Polygon, VLine};

/// Plot view configuration and state
#[derive(Debug, Clone)]
pub struct PlotView {
    /// Unique egui id of the plot widget
    pub id: String,
    /// Whether to show the legend
    pub show_legend: bool,
    /// Whether to show grid lines
    pub show_grid: bool,
    /// Whether to auto-scale the Y axis
    pub auto_scale_y: bool,
    /// Y axis label
    pub y_label: String,
    /// Plot height, fills the available space when `None`
    pub height: Option<f32>,
}

impl Default for PlotView {
    fn default() -> Self {
        Self {
            id: "line_plot".to_string(),
            show_legend: true,
            show_grid: true,
            auto_scale_y: true,
            y_label: "Value".to_string(),
            height: None,
        }
    }
}

impl PlotView {
    /// Create a view with the given widget id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Create a view from plot configuration
    pub fn from_config(id: impl Into<String>, config: &PlotConfig) -> Self {
        Self {
            id: id.into(),
            show_legend: config.show_legend,
            show_grid: config.show_grid,
            ..Default::default()
        }
    }

    /// Set the Y axis label
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Set a fixed height
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Render every visible layer of `host`
    pub fn render(&self, ui: &mut Ui, host: &MemoryHost) {
        let mut plot = Plot::new(&self.id)
            .show_axes(true)
            .show_grid(self.show_grid)
            .auto_bounds([true, self.auto_scale_y])
            .x_axis_label(host.x_units_label())
            .y_axis_label(self.y_label.clone());

        if self.show_legend {
            plot = plot.legend(
                Legend::default()
                    .position(Corner::RightTop)
                    .background_alpha(0.8),
            );
        }
        if let Some(height) = self.height {
            plot = plot.height(height);
        }

        let y_bounds = y_bounds(host);

        plot.show(ui, |plot_ui| {
            for (number, layer) in host.layers() {
                if !layer.is_visible() || layer.is_empty() {
                    continue;
                }
                render_layer(plot_ui, layer, &format!("layer-{}", number));
                for highlight in layer.highlights() {
                    render_highlight(plot_ui, highlight, y_bounds);
                }
            }
        });
    }
}

/// Draw one layer as a line or as point markers
fn render_layer(plot_ui: &mut PlotUi, layer: &PipeLayer, fallback_name: &str) {
    let name = if layer.name().is_empty() {
        fallback_name.to_string()
    } else {
        layer.name().to_string()
    };
    let color: Color32 = layer.effective_color().into();
    let points = PlotPoints::from(layer.points());
    let settings = layer.settings();

    match settings.symbol.and_then(marker_shape) {
        Some(shape) => {
            let radius = settings.radius.unwrap_or(layer.line_width() * 2.0);
            let markers = Points::new(name, points)
                .shape(shape)
                .color(color)
                .radius(radius);
            plot_ui.points(markers);
        }
        None => {
            let line = Line::new(name, points)
                .color(color)
                .width(layer.line_width())
                .style(line_style(settings.line_style.unwrap_or_default()));
            plot_ui.line(line);
        }
    }
}

/// Draw a highlight as a filled span with edge lines
fn render_highlight(plot_ui: &mut PlotUi, highlight: &Highlight, (y_min, y_max): (f64, f64)) {
    let fill: Color32 = highlight.fill_color().into();
    let edge = Color32::from_rgba_unmultiplied(fill.r(), fill.g(), fill.b(), 160);
    let label = highlight.id.clone().unwrap_or_default();

    let span = vec![
        [highlight.xstart, y_min],
        [highlight.xend, y_min],
        [highlight.xend, y_max],
        [highlight.xstart, y_max],
    ];
    plot_ui.polygon(
        Polygon::new(label.clone(), PlotPoints::from(span))
            .fill_color(fill)
            .stroke(Stroke::NONE),
    );
    for x in [highlight.xstart, highlight.xend] {
        plot_ui.vline(VLine::new(label.clone(), x).color(edge).width(1.0));
    }
}

/// Y range of all visible layers with 10% padding
fn y_bounds(host: &MemoryHost) -> (f64, f64) {
    let range = host
        .layers()
        .filter(|(_, l)| l.is_visible())
        .filter_map(|(_, l)| l.y_range())
        .fold(None, |acc: Option<(f64, f64)>, (lo, hi)| match acc {
            None => Some((lo, hi)),
            Some((a, b)) => Some((a.min(lo), b.max(hi))),
        });

    match range {
        Some((y_min, y_max)) => {
            let y_range = y_max - y_min;
            let padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
            (y_min - padding, y_max + padding)
        }
        None => (-1.0, 1.0),
    }
}

fn line_style(style: LineStyle) -> egui_plot::LineStyle {
    match style {
        LineStyle::Solid => egui_plot::LineStyle::Solid,
        LineStyle::Dashed => egui_plot::LineStyle::dashed_loose(),
        LineStyle::Dotted => egui_plot::LineStyle::dotted_dense(),
    }
}

fn marker_shape(symbol: Symbol) -> Option<MarkerShape> {
    match symbol {
        Symbol::None => None,
        Symbol::Circle => Some(MarkerShape::Circle),
        Symbol::Square => Some(MarkerShape::Square),
        Symbol::Diamond => Some(MarkerShape::Diamond),
        Symbol::Cross => Some(MarkerShape::Cross),
        Symbol::Plus => Some(MarkerShape::Plus),
        Symbol::Up => Some(MarkerShape::Up),
        Symbol::Down => Some(MarkerShape::Down),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::HeaderOptions;
    use crate::host::PlotHost;
    use crate::layer::LayerSettings;

    #[test]
    fn test_plot_view_default() {
        let view = PlotView::default();
        assert!(view.show_legend);
        assert!(view.show_grid);
        assert!(view.auto_scale_y);
        assert!(view.height.is_none());
    }

    #[test]
    fn test_from_config() {
        let config = PlotConfig {
            show_legend: false,
            ..Default::default()
        };
        let view = PlotView::from_config("psd", &config).with_height(200.0);
        assert_eq!(view.id, "psd");
        assert!(!view.show_legend);
        assert_eq!(view.height, Some(200.0));
    }

    #[test]
    fn test_y_bounds_empty_host() {
        assert_eq!(y_bounds(&MemoryHost::new()), (-1.0, 1.0));
    }

    #[test]
    fn test_y_bounds_padded_and_skip_hidden() {
        let mut host = MemoryHost::new();
        let header = HeaderOptions::default();
        let a = host.overlay_pipe(Some(&header), LayerSettings::new()).unwrap();
        let b = host
            .overlay_pipe(Some(&header), LayerSettings::new().visible(false))
            .unwrap();
        host.push(a, &[0.0, 10.0], &header).unwrap();
        host.push(b, &[-100.0, 100.0], &header).unwrap();

        let (lo, hi) = y_bounds(&host);
        assert!((lo - -1.0).abs() < 1e-9);
        assert!((hi - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_symbol_mapping() {
        assert!(marker_shape(Symbol::None).is_none());
        assert_eq!(marker_shape(Symbol::Diamond), Some(MarkerShape::Diamond));
    }
}
