//! Header options for pushed buffers
//!
//! A [`HeaderOptions`] value travels with every push and tells the host how
//! to read the buffer. Only type-1000 headers (one-dimensional records) are
//! built here.

use crate::types::{AxisData, AxisUnits, FormatSize, FormatType};
use serde::{Deserialize, Serialize};

/// Record type code for one-dimensional data
pub const TYPE_1000: u32 = 1000;

/// Header describing the layout of a pushed buffer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderOptions {
    /// Record type code
    pub file_type: u32,
    /// Element shape
    pub size: FormatSize,
    /// Element encoding
    pub format_type: FormatType,
    /// Abscissa of the first element
    pub xstart: f64,
    /// Abscissa spacing between elements
    pub xdelta: f64,
    /// Abscissa units
    pub xunits: AxisUnits,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self::type1000(FormatSize::Scalar, FormatType::Float64, &AxisData::default())
    }
}

impl HeaderOptions {
    /// Build a type-1000 header from format size, type, and X-axis
    pub fn type1000(size: FormatSize, format_type: FormatType, x_axis: &AxisData) -> Self {
        Self {
            file_type: TYPE_1000,
            size,
            format_type,
            xstart: x_axis.xstart.unwrap_or(0.0),
            xdelta: x_axis.xdelta.unwrap_or(1.0),
            xunits: x_axis.xunits.unwrap_or_default(),
        }
    }

    /// Two-letter format code, e.g. `"CF"`
    pub fn format(&self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.size.code());
        code.push(self.format_type.code());
        code
    }

    /// Whether elements are interleaved complex pairs
    pub fn is_complex(&self) -> bool {
        self.size == FormatSize::Complex
    }

    /// Abscissa of element `index`
    pub fn x_at(&self, index: usize) -> f64 {
        self.xstart + index as f64 * self.xdelta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type1000_format_code() {
        let header = HeaderOptions::type1000(
            FormatSize::Complex,
            FormatType::Float32,
            &AxisData::default(),
        );
        assert_eq!(header.file_type, TYPE_1000);
        assert_eq!(header.format(), "CF");
        assert!(header.is_complex());

        let header =
            HeaderOptions::type1000(FormatSize::Scalar, FormatType::Int16, &AxisData::default());
        assert_eq!(header.format(), "SI");
        assert!(!header.is_complex());
    }

    #[test]
    fn test_type1000_axis_defaults() {
        let header = HeaderOptions::type1000(
            FormatSize::Scalar,
            FormatType::Float64,
            &AxisData::default(),
        );
        assert_eq!(header.xstart, 0.0);
        assert_eq!(header.xdelta, 1.0);
        assert_eq!(header.xunits, AxisUnits::None);
    }

    #[test]
    fn test_type1000_uses_axis() {
        let axis = AxisData::new()
            .with_start(10.0)
            .with_delta(0.25)
            .with_units(AxisUnits::Frequency);
        let header = HeaderOptions::type1000(FormatSize::Scalar, FormatType::Float32, &axis);
        assert_eq!(header.xunits, AxisUnits::Frequency);
        assert_eq!(header.x_at(0), 10.0);
        assert_eq!(header.x_at(4), 11.0);
    }
}
