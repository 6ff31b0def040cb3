//! Core data format types for lineplot-rs
//!
//! This module describes how a pushed buffer should be interpreted by the
//! plot host: the shape of each element, its numeric encoding, and the
//! X-axis that maps sample index to abscissa.
//!
//! # Main Types
//!
//! - [`FormatSize`] - Element shape (scalar or complex)
//! - [`FormatType`] - Element numeric encoding (int8 .. float64)
//! - [`AxisUnits`] - Unit code for an axis
//! - [`AxisData`] - X-axis start, spacing, and units
//!
//! Each enum maps to a single format character so that a size and a type
//! combine into the two-letter format code carried in
//! [`HeaderOptions`](crate::header::HeaderOptions), e.g. `"CF"` for complex
//! float32.

use serde::{Deserialize, Serialize};

/// Shape of each element in a pushed buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FormatSize {
    /// One value per element
    Scalar,
    /// Interleaved real/imaginary pairs
    #[default]
    Complex,
}

impl FormatSize {
    /// Format character for this size
    pub fn code(&self) -> char {
        match self {
            FormatSize::Scalar => 'S',
            FormatSize::Complex => 'C',
        }
    }

    /// Parse a format character
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'S' => Some(FormatSize::Scalar),
            'C' => Some(FormatSize::Complex),
            _ => None,
        }
    }

    /// Number of buffer values that make up one element
    pub fn values_per_element(&self) -> usize {
        match self {
            FormatSize::Scalar => 1,
            FormatSize::Complex => 2,
        }
    }

    /// Get the display name for this size
    pub fn display_name(&self) -> &'static str {
        match self {
            FormatSize::Scalar => "Scalar",
            FormatSize::Complex => "Complex",
        }
    }
}

/// Numeric encoding of each value in a pushed buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FormatType {
    /// 8-bit signed integer
    Int8,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 32-bit floating point
    #[default]
    Float32,
    /// 64-bit floating point
    Float64,
}

impl FormatType {
    /// Format character for this type
    pub fn code(&self) -> char {
        match self {
            FormatType::Int8 => 'B',
            FormatType::Int16 => 'I',
            FormatType::Int32 => 'L',
            FormatType::Int64 => 'X',
            FormatType::Float32 => 'F',
            FormatType::Float64 => 'D',
        }
    }

    /// Parse a format character
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'B' => Some(FormatType::Int8),
            'I' => Some(FormatType::Int16),
            'L' => Some(FormatType::Int32),
            'X' => Some(FormatType::Int64),
            'F' => Some(FormatType::Float32),
            'D' => Some(FormatType::Float64),
            _ => None,
        }
    }

    /// Returns the size in bytes of one value of this type
    pub fn size_bytes(&self) -> usize {
        match self {
            FormatType::Int8 => 1,
            FormatType::Int16 => 2,
            FormatType::Int32 | FormatType::Float32 => 4,
            FormatType::Int64 | FormatType::Float64 => 8,
        }
    }

    /// Get all format types
    pub fn all() -> &'static [FormatType] {
        &[
            FormatType::Int8,
            FormatType::Int16,
            FormatType::Int32,
            FormatType::Int64,
            FormatType::Float32,
            FormatType::Float64,
        ]
    }
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FormatType::Int8 => "int8",
            FormatType::Int16 => "int16",
            FormatType::Int32 => "int32",
            FormatType::Int64 => "int64",
            FormatType::Float32 => "float32",
            FormatType::Float64 => "float64",
        };
        write!(f, "{}", name)
    }
}

/// Unit code attached to an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisUnits {
    /// No units
    #[default]
    None,
    /// Time in seconds
    Time,
    /// Delay in seconds
    Delay,
    /// Frequency in Hz
    Frequency,
    /// Time code
    TimeCode,
    /// Distance in meters
    Distance,
    /// Velocity in meters per second
    Velocity,
    /// Acceleration in meters per second squared
    Acceleration,
}

impl AxisUnits {
    /// Numeric unit code
    pub fn code(&self) -> u32 {
        match self {
            AxisUnits::None => 0,
            AxisUnits::Time => 1,
            AxisUnits::Delay => 2,
            AxisUnits::Frequency => 3,
            AxisUnits::TimeCode => 4,
            AxisUnits::Distance => 5,
            AxisUnits::Velocity => 6,
            AxisUnits::Acceleration => 7,
        }
    }

    /// Axis label for this unit
    pub fn label(&self) -> &'static str {
        match self {
            AxisUnits::None => "",
            AxisUnits::Time => "Time (s)",
            AxisUnits::Delay => "Delay (s)",
            AxisUnits::Frequency => "Frequency (Hz)",
            AxisUnits::TimeCode => "Time code",
            AxisUnits::Distance => "Distance (m)",
            AxisUnits::Velocity => "Velocity (m/s)",
            AxisUnits::Acceleration => "Acceleration (m/s²)",
        }
    }
}

/// Description of the X-axis of a pushed buffer
///
/// Every field is optional; unset fields fall back to the header defaults
/// (start 0, spacing 1, no units).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisData {
    /// Abscissa of the first element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xstart: Option<f64>,
    /// Abscissa spacing between elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xdelta: Option<f64>,
    /// Units of the abscissa
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xunits: Option<AxisUnits>,
}

impl AxisData {
    /// Create an empty axis description
    pub fn new() -> Self {
        Self::default()
    }

    /// Time axis for a given sample rate, starting at `start` seconds
    pub fn time(start: f64, sample_rate: f64) -> Self {
        Self {
            xstart: Some(start),
            xdelta: Some(1.0 / sample_rate),
            xunits: Some(AxisUnits::Time),
        }
    }

    /// Set the start abscissa
    pub fn with_start(mut self, xstart: f64) -> Self {
        self.xstart = Some(xstart);
        self
    }

    /// Set the abscissa spacing
    pub fn with_delta(mut self, xdelta: f64) -> Self {
        self.xdelta = Some(xdelta);
        self
    }

    /// Set the axis units
    pub fn with_units(mut self, xunits: AxisUnits) -> Self {
        self.xunits = Some(xunits);
        self
    }
}
