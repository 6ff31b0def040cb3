//! Test data builders for buffers and axes

use lineplot_rs::{AxisData, AxisUnits};
use std::f64::consts::PI;

/// Builder for test sample buffers
pub struct BufferBuilder {
    len: usize,
    complex: bool,
    tone: Option<(f64, f64)>,
}

impl BufferBuilder {
    /// Ramp `0, 1, 2, ...` of `len` elements
    pub fn new(len: usize) -> Self {
        Self {
            len,
            complex: false,
            tone: None,
        }
    }

    /// Interleave `(value, 0.0)` pairs, doubling the buffer length
    pub fn complex(mut self) -> Self {
        self.complex = true;
        self
    }

    /// Sine of `freq` Hz at `sample_rate` instead of a ramp
    pub fn tone(mut self, freq: f64, sample_rate: f64) -> Self {
        self.tone = Some((freq, sample_rate));
        self
    }

    pub fn build(self) -> Vec<f64> {
        let values = (0..self.len).map(|i| match self.tone {
            Some((freq, rate)) => (2.0 * PI * freq * i as f64 / rate).sin(),
            None => i as f64,
        });
        if self.complex {
            values.flat_map(|v| [v, 0.0]).collect()
        } else {
            values.collect()
        }
    }
}

/// Time axis at 1 kHz
pub fn time_axis() -> AxisData {
    AxisData::time(0.0, 1000.0)
}

/// Frequency axis with 1 Hz bins
pub fn frequency_axis() -> AxisData {
    AxisData::new()
        .with_start(0.0)
        .with_delta(1.0)
        .with_units(AxisUnits::Frequency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_builder() {
        assert_eq!(BufferBuilder::new(3).build(), vec![0.0, 1.0, 2.0]);
        assert_eq!(
            BufferBuilder::new(2).complex().build(),
            vec![0.0, 0.0, 1.0, 0.0]
        );
        assert_eq!(BufferBuilder::new(8).tone(1.0, 8.0).build().len(), 8);
    }
}
