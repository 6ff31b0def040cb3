//! Per-layer display settings
//!
//! [`LayerSettings`] is a set of optional fields. A value with only some
//! fields set is a partial update: [`LayerSettings::apply_to`] copies the set
//! fields onto a target and leaves everything else alone.
//!
//! Setting names are fixed. Untyped updates go through
//! [`LayerSettings::from_map`], which rejects any name not listed in
//! [`LayerSettings::KNOWN_KEYS`].

use super::color::LayerColor;
use crate::error::{LinePlotError, Result};
use serde::{Deserialize, Serialize};

/// Stroke style of a line layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Marker drawn at each point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    /// Plain line, no markers
    #[default]
    None,
    Circle,
    Square,
    Diamond,
    Cross,
    Plus,
    Up,
    Down,
}

/// How complex elements are reduced to a single Y value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComplexMode {
    #[default]
    Magnitude,
    Real,
    Imaginary,
    Phase,
    /// 10*log10 of the power
    PowerDb,
}

impl ComplexMode {
    /// Reduce one complex element
    pub fn reduce(&self, re: f64, im: f64) -> f64 {
        match self {
            ComplexMode::Magnitude => re.hypot(im),
            ComplexMode::Real => re,
            ComplexMode::Imaginary => im,
            ComplexMode::Phase => im.atan2(re),
            ComplexMode::PowerDb => 10.0 * (re * re + im * im).max(f64::MIN_POSITIVE).log10(),
        }
    }
}

/// Display settings of a single layer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayerSettings {
    /// Legend name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of elements held by the layer's pipe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framesize: Option<usize>,
    /// Line color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<LayerColor>,
    /// Line width in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f32>,
    /// Line stroke style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    /// Opacity multiplier (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Point marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<Symbol>,
    /// Point marker radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    /// Complex reduction mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cx_mode: Option<ComplexMode>,
    /// Whether the layer is drawn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl LayerSettings {
    /// Every setting name accepted by [`LayerSettings::from_map`]
    pub const KNOWN_KEYS: &'static [&'static str] = &[
        "name",
        "framesize",
        "color",
        "line_width",
        "line_style",
        "opacity",
        "symbol",
        "radius",
        "cx_mode",
        "visible",
    ];

    /// Empty partial update
    pub fn new() -> Self {
        Self::default()
    }

    /// Update that only changes the frame size
    pub fn with_framesize(framesize: usize) -> Self {
        Self {
            framesize: Some(framesize),
            ..Default::default()
        }
    }

    /// Set the legend name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the frame size
    pub fn framesize(mut self, framesize: usize) -> Self {
        self.framesize = Some(framesize);
        self
    }

    /// Set the line color
    pub fn color(mut self, color: LayerColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the line width
    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    /// Set the line style
    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    /// Set the opacity
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Set the point marker and its radius
    pub fn symbol(mut self, symbol: Symbol, radius: f32) -> Self {
        self.symbol = Some(symbol);
        self.radius = Some(radius);
        self
    }

    /// Set the complex reduction mode
    pub fn cx_mode(mut self, mode: ComplexMode) -> Self {
        self.cx_mode = Some(mode);
        self
    }

    /// Set visibility
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Names of the fields that are set
    pub fn set_keys(&self) -> Vec<&'static str> {
        let flags = [
            self.name.is_some(),
            self.framesize.is_some(),
            self.color.is_some(),
            self.line_width.is_some(),
            self.line_style.is_some(),
            self.opacity.is_some(),
            self.symbol.is_some(),
            self.radius.is_some(),
            self.cx_mode.is_some(),
            self.visible.is_some(),
        ];
        Self::KNOWN_KEYS
            .iter()
            .zip(flags)
            .filter_map(|(key, set)| set.then_some(*key))
            .collect()
    }

    /// Copy every set field onto `target`, field by field
    pub fn apply_to(&self, target: &mut LayerSettings) {
        if let Some(ref name) = self.name {
            target.name = Some(name.clone());
        }
        if let Some(framesize) = self.framesize {
            target.framesize = Some(framesize);
        }
        if let Some(color) = self.color {
            target.color = Some(color);
        }
        if let Some(width) = self.line_width {
            target.line_width = Some(width);
        }
        if let Some(style) = self.line_style {
            target.line_style = Some(style);
        }
        if let Some(opacity) = self.opacity {
            target.opacity = Some(opacity);
        }
        if let Some(symbol) = self.symbol {
            target.symbol = Some(symbol);
        }
        if let Some(radius) = self.radius {
            target.radius = Some(radius);
        }
        if let Some(mode) = self.cx_mode {
            target.cx_mode = Some(mode);
        }
        if let Some(visible) = self.visible {
            target.visible = Some(visible);
        }
    }

    /// Build a partial update from a `name -> value` map
    ///
    /// Fails on the first unknown name or ill-typed value; nothing is
    /// returned in that case, so callers never apply half an update.
    pub fn from_map(map: &serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        if let Some(unknown) = map
            .keys()
            .find(|k| !Self::KNOWN_KEYS.contains(&k.as_str()))
        {
            return Err(LinePlotError::UnknownSetting(unknown.clone()));
        }

        let mut settings = LayerSettings::default();
        for (key, value) in map {
            let mut single = serde_json::Map::new();
            single.insert(key.clone(), value.clone());
            let field: LayerSettings = serde_json::from_value(serde_json::Value::Object(single))
                .map_err(|e| LinePlotError::InvalidSetting {
                    name: key.clone(),
                    message: e.to_string(),
                })?;
            field.apply_to(&mut settings);
        }
        Ok(settings)
    }

    /// Build a partial update from a JSON object value
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Object(map) => Self::from_map(map),
            other => Err(LinePlotError::Serialization(format!(
                "Layer settings must be an object, got {}",
                other
            ))),
        }
    }
}
