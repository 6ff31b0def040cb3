//! Frontend module for the lineplot demo
//!
//! [`DemoApp`] drives two [`LinePlot`]s over in-memory hosts: a time plot
//! fed with a synthetic tone frame every repaint, and a spectrum plot fed
//! with the PSD (and optionally the complex FFT) of the same frame. The side
//! panel exercises every adapter operation: changing the frame length
//! resizes layers, and the buttons add/clear highlights, recolor layers, and
//! remove or forget layers.

pub mod plot;

pub use plot::PlotView;

use crate::analysis::{Spectrum, SpectrumAnalyzer};
use crate::analysis::WindowFunction;
use crate::config::PlotConfig;
use crate::error::Result;
use crate::host::MemoryHost;
use crate::layer::{ComplexMode, Highlight, LayerColor, LayerSettings, LineStyle};
use crate::line_plot::LinePlot;
use crate::types::{AxisData, FormatSize, FormatType};
use egui::Color32;
use std::f64::consts::PI;
use std::path::PathBuf;

/// Data ID of the time-domain tone
pub const TIME_SIGNAL: &str = "tone";
/// Data ID of the PSD
pub const PSD_SIGNAL: &str = "psd";
/// Data ID of the complex FFT
pub const FFT_SIGNAL: &str = "fft";
/// Highlight ID of the spectral peak marker
pub const PEAK_HIGHLIGHT: &str = "peak";

/// Frame lengths offered in the UI
pub const FRAME_LENGTHS: &[usize] = &[256, 512, 1024, 2048, 4096];

/// Generate one frame of a tone plus its third harmonic
///
/// `start` is the index of the first sample, so consecutive frames are
/// phase-continuous.
pub fn tone_frame(
    start: u64,
    len: usize,
    sample_rate: f64,
    tone_hz: f64,
    harmonic: f64,
) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = (start + i as u64) as f64 / sample_rate;
            let phase = 2.0 * PI * tone_hz * t;
            phase.sin() + harmonic * (3.0 * phase).sin()
        })
        .collect()
}

/// The demo application
pub struct DemoApp {
    config: PlotConfig,
    config_path: Option<PathBuf>,
    time_plot: LinePlot<MemoryHost>,
    spectrum_plot: LinePlot<MemoryHost>,
    time_view: PlotView,
    spectrum_view: PlotView,
    analyzer: SpectrumAnalyzer,
    last_spectrum: Option<Spectrum>,
    sample_index: u64,
    paused: bool,
    show_fft: bool,
    show_tone: bool,
    time_color: Color32,
    last_error: Option<String>,
}

impl DemoApp {
    /// Create the app from a loaded configuration
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: PlotConfig,
        config_path: Option<PathBuf>,
    ) -> Self {
        Self::with_config(config, config_path)
    }

    /// Create the app state without an egui context
    pub fn with_config(config: PlotConfig, config_path: Option<PathBuf>) -> Self {
        let time_plot = LinePlot::with_config(config.memory_host(), &config);
        let spectrum_plot = LinePlot::with_config(config.memory_host(), &config);
        let time_view = PlotView::from_config("time_plot", &config).with_y_label("Amplitude");
        let spectrum_view = PlotView::from_config("spectrum_plot", &config).with_y_label("dB");
        let analyzer = SpectrumAnalyzer::new(config.demo.window);
        let time_color = config
            .palette
            .first()
            .copied()
            .unwrap_or(LayerColor::BLUE)
            .into();

        Self {
            config,
            config_path,
            time_plot,
            spectrum_plot,
            time_view,
            spectrum_view,
            analyzer,
            last_spectrum: None,
            sample_index: 0,
            paused: false,
            show_fft: false,
            show_tone: true,
            time_color,
            last_error: None,
        }
    }

    /// Time plot
    pub fn time_plot(&self) -> &LinePlot<MemoryHost> {
        &self.time_plot
    }

    /// Spectrum plot
    pub fn spectrum_plot(&self) -> &LinePlot<MemoryHost> {
        &self.spectrum_plot
    }

    /// Generate and push one frame to both plots
    ///
    /// The spectrum is pushed even when the tone push fails; the tone error
    /// is returned afterwards.
    pub fn step(&mut self) -> Result<()> {
        let demo = &self.config.demo;
        let frame = tone_frame(
            self.sample_index,
            demo.frame_length,
            demo.sample_rate,
            demo.tone_hz,
            demo.harmonic,
        );
        let start = self.sample_index as f64 / demo.sample_rate;
        let sample_rate = demo.sample_rate;
        self.sample_index += frame.len() as u64;

        let time_result = self.time_plot.push(
            &frame,
            FormatSize::Scalar,
            FormatType::Float64,
            &AxisData::time(start, sample_rate),
            TIME_SIGNAL,
        );

        let spectrum = self.analyzer.spectrum(&frame, sample_rate);
        self.spectrum_plot.push(
            &spectrum.psd_db,
            FormatSize::Scalar,
            FormatType::Float64,
            &spectrum.axis,
            PSD_SIGNAL,
        )?;
        self.last_spectrum = Some(spectrum);

        if self.show_fft {
            let (fft, axis) = self.analyzer.fft(&frame, sample_rate);
            // Keep only the positive-frequency half (interleaved pairs)
            let half = (frame.len() / 2 + 1) * 2;
            self.spectrum_plot.push(
                &fft[..half.min(fft.len())],
                FormatSize::Complex,
                FormatType::Float64,
                &axis,
                FFT_SIGNAL,
            )?;
        }
        time_result
    }

    /// Replace the peak highlight on the PSD layer
    ///
    /// Uses the spectrum of the last pushed frame; does nothing before the
    /// first push.
    pub fn highlight_peak(&mut self) -> Result<()> {
        let Some(ref spectrum) = self.last_spectrum else {
            return Ok(());
        };
        let Some((peak_hz, _)) = spectrum.peak() else {
            return Ok(());
        };

        let half_width = 2.0 * spectrum.resolution();
        let marker = Highlight::new(peak_hz - half_width, peak_hz + half_width)
            .with_id(PEAK_HIGHLIGHT)
            .with_color(LayerColor::rgba(255, 215, 0, 64));

        self.spectrum_plot
            .remove_highlight(&Highlight::new(0.0, 0.0).with_id(PEAK_HIGHLIGHT), PSD_SIGNAL)?;
        self.spectrum_plot.add_highlight(marker, PSD_SIGNAL)?;
        tracing::info!("Highlighted spectral peak at {:.1} Hz", peak_hz);
        Ok(())
    }

    fn set_fft_enabled(&mut self, enabled: bool) -> Result<()> {
        self.show_fft = enabled;
        if enabled {
            self.step()?;
            self.spectrum_plot.change_layer_settings(
                &LayerSettings::new()
                    .cx_mode(ComplexMode::PowerDb)
                    .line_style(LineStyle::Dashed),
                FFT_SIGNAL,
            );
        } else {
            self.spectrum_plot.forget_layer(FFT_SIGNAL)?;
        }
        Ok(())
    }

    /// Show or hide the tone layer
    pub fn set_tone_visible(&mut self, visible: bool) {
        self.show_tone = visible;
        self.time_plot
            .change_layer_settings(&LayerSettings::new().visible(visible), TIME_SIGNAL);
    }

    fn report(&mut self, result: Result<()>) {
        if let Err(e) = result {
            tracing::warn!("{}", e);
            self.last_error = Some(e.to_string());
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Signal");
        ui.checkbox(&mut self.paused, "Paused");

        let mut frame_length = self.config.demo.frame_length;
        egui::ComboBox::from_label("Frame length")
            .selected_text(frame_length.to_string())
            .show_ui(ui, |ui| {
                for &len in FRAME_LENGTHS {
                    ui.selectable_value(&mut frame_length, len, len.to_string());
                }
            });
        if frame_length != self.config.demo.frame_length {
            tracing::info!("Frame length changed to {}", frame_length);
            self.config.demo.frame_length = frame_length;
        }

        let nyquist = self.config.demo.sample_rate / 2.0;
        ui.add(egui::Slider::new(&mut self.config.demo.tone_hz, 10.0..=nyquist).text("Tone (Hz)"));
        ui.add(egui::Slider::new(&mut self.config.demo.harmonic, 0.0..=1.0).text("3rd harmonic"));

        let mut window = self.analyzer.window();
        egui::ComboBox::from_label("Window")
            .selected_text(window.display_name())
            .show_ui(ui, |ui| {
                for &w in WindowFunction::all() {
                    ui.selectable_value(&mut window, w, w.display_name());
                }
            });
        if window != self.analyzer.window() {
            self.analyzer.set_window(window);
            self.config.demo.window = window;
        }

        ui.separator();
        ui.heading("Layers");

        ui.horizontal(|ui| {
            ui.label("Tone color");
            if ui.color_edit_button_srgba(&mut self.time_color).changed() {
                let settings = LayerSettings::new().color(self.time_color.into());
                self.time_plot.change_layer_settings(&settings, TIME_SIGNAL);
            }
        });

        let mut show_fft = self.show_fft;
        if ui.checkbox(&mut show_fft, "Show complex FFT").changed() {
            let result = self.set_fft_enabled(show_fft);
            self.report(result);
        }

        ui.horizontal(|ui| {
            let mut show_tone = self.show_tone;
            if ui.checkbox(&mut show_tone, "Show tone").changed() {
                self.set_tone_visible(show_tone);
            }
            if ui.button("Reset tone").clicked() {
                let result = self.time_plot.forget_layer(TIME_SIGNAL);
                self.report(result);
                self.show_tone = true;
            }
        });

        ui.separator();
        ui.heading("Highlights");
        ui.horizontal(|ui| {
            if ui.button("Mark peak").clicked() {
                let result = self.highlight_peak();
                self.report(result);
            }
            if ui.button("Clear").clicked() {
                let result = self.spectrum_plot.clear_highlights(PSD_SIGNAL);
                self.report(result);
            }
        });

        ui.separator();
        ui.checkbox(&mut self.time_view.show_legend, "Legend");
        self.spectrum_view.show_legend = self.time_view.show_legend;
        ui.checkbox(&mut self.time_view.show_grid, "Grid");
        self.spectrum_view.show_grid = self.time_view.show_grid;
        if self.config_path.is_some() && ui.button("Save settings").clicked() {
            self.save_config();
        }

        if let Some(ref err) = self.last_error {
            ui.separator();
            ui.colored_label(Color32::from_rgb(255, 99, 71), err.as_str());
        }
    }

    fn save_config(&self) {
        let Some(ref path) = self.config_path else {
            return;
        };
        let mut config = self.config.clone();
        config.show_legend = self.time_view.show_legend;
        config.show_grid = self.time_view.show_grid;
        match config.save(path) {
            Ok(()) => tracing::info!("Saved config to {:?}", path),
            Err(e) => tracing::warn!("Failed to save config: {}", e),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.paused {
            let result = self.step();
            self.report(result);
            ctx.request_repaint();
        }

        egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| self.controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let half = ui.available_height() / 2.0 - 8.0;
            self.time_view.height = Some(half);
            self.spectrum_view.height = Some(half);
            self.time_view.render(ui, self.time_plot.host());
            self.spectrum_view.render(ui, self.spectrum_plot.host());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Layer1D;

    #[test]
    fn test_tone_frame_is_continuous() {
        let whole = tone_frame(0, 64, 1000.0, 50.0, 0.2);
        let first = tone_frame(0, 32, 1000.0, 50.0, 0.2);
        let second = tone_frame(32, 32, 1000.0, 50.0, 0.2);
        assert_eq!(&whole[..32], &first[..]);
        for (a, b) in whole[32..].iter().zip(&second) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_step_creates_one_layer_per_signal() {
        let mut app = DemoApp::with_config(PlotConfig::default(), None);
        app.step().unwrap();
        app.step().unwrap();

        assert_eq!(app.time_plot().host().layer_count(), 1);
        assert_eq!(app.spectrum_plot().host().layer_count(), 1);
        let tone = app.time_plot().try_layer(TIME_SIGNAL).unwrap();
        assert_eq!(tone.len(), 1024);
        assert_eq!(tone.frames_pushed(), 2);
    }

    #[test]
    fn test_frame_length_change_resizes() {
        let mut app = DemoApp::with_config(PlotConfig::default(), None);
        app.step().unwrap();
        app.config.demo.frame_length = 2048;
        app.step().unwrap();

        let record = app.time_plot().data_layer(TIME_SIGNAL).unwrap();
        assert_eq!(record.frame_size, Some(2048));
        let psd = app.spectrum_plot().data_layer(PSD_SIGNAL).unwrap();
        assert_eq!(psd.frame_size, Some(1025));
    }

    #[test]
    fn test_peak_highlight_is_replaced() {
        let mut app = DemoApp::with_config(PlotConfig::default(), None);
        app.step().unwrap();
        app.highlight_peak().unwrap();
        app.highlight_peak().unwrap();

        let psd = app.spectrum_plot().try_layer(PSD_SIGNAL).unwrap();
        assert_eq!(psd.highlights().len(), 1);
        let peak = &psd.highlights()[0];
        assert!(peak.contains(440.0), "peak highlight {:?} should cover 440 Hz", peak);
    }

    #[test]
    fn test_fft_toggle() {
        let mut app = DemoApp::with_config(PlotConfig::default(), None);
        app.set_fft_enabled(true).unwrap();
        let fft = app.spectrum_plot().try_layer(FFT_SIGNAL).unwrap();
        assert_eq!(fft.settings().cx_mode, Some(ComplexMode::PowerDb));
        assert_eq!(fft.points().len(), 513);

        app.set_fft_enabled(false).unwrap();
        assert!(app.spectrum_plot().data_layer(FFT_SIGNAL).is_none());
        assert_eq!(app.spectrum_plot().host().layer_count(), 1);
    }

    #[test]
    fn test_spectrum_keeps_updating_after_tone_removed() {
        let mut app = DemoApp::with_config(PlotConfig::default(), None);
        app.step().unwrap();
        app.time_plot.remove_layer(TIME_SIGNAL).unwrap();

        let before = app.spectrum_plot().try_layer(PSD_SIGNAL).unwrap().frames_pushed();
        let err = app.step().unwrap_err();
        assert!(err.to_string().contains("not found"));

        let after = app.spectrum_plot().try_layer(PSD_SIGNAL).unwrap().frames_pushed();
        assert_eq!(after, before + 1);
    }

    #[test]
    fn test_hidden_tone_still_steps() {
        let mut app = DemoApp::with_config(PlotConfig::default(), None);
        app.step().unwrap();
        app.set_tone_visible(false);
        app.step().unwrap();

        let tone = app.time_plot().try_layer(TIME_SIGNAL).unwrap();
        assert!(!tone.is_visible());
        assert_eq!(tone.frames_pushed(), 2);
        let psd = app.spectrum_plot().try_layer(PSD_SIGNAL).unwrap();
        assert_eq!(psd.frames_pushed(), 2);

        app.set_tone_visible(true);
        assert!(app.time_plot().try_layer(TIME_SIGNAL).unwrap().is_visible());
    }

    #[test]
    fn test_peak_highlight_before_first_frame_is_noop() {
        let mut app = DemoApp::with_config(PlotConfig::default(), None);
        app.highlight_peak().unwrap();
        assert!(app.spectrum_plot().registry().is_empty());
    }

    #[test]
    fn test_peak_highlight_uses_pushed_spectrum() {
        let mut app = DemoApp::with_config(PlotConfig::default(), None);
        app.step().unwrap();
        // Not pushed yet, so the marker must stay on the 440 Hz frame
        app.config.demo.tone_hz = 2000.0;
        app.highlight_peak().unwrap();

        let psd = app.spectrum_plot().try_layer(PSD_SIGNAL).unwrap();
        assert!(psd.highlights()[0].contains(440.0));
        assert!(!psd.highlights()[0].contains(2000.0));
    }
}
