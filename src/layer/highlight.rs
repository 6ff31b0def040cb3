//! Highlighted X ranges drawn over a layer

use super::color::LayerColor;
use serde::{Deserialize, Serialize};

/// Default highlight color (translucent gold)
pub const DEFAULT_HIGHLIGHT_COLOR: LayerColor = LayerColor::rgba(255, 215, 0, 64);

/// A shaded X range on a layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    /// Start of the range (abscissa units)
    pub xstart: f64,
    /// End of the range (abscissa units)
    pub xend: f64,
    /// Fill color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<LayerColor>,
    /// Optional identifier used for removal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Highlight {
    /// Create a highlight; the bounds are stored in ascending order
    pub fn new(xstart: f64, xend: f64) -> Self {
        let (xstart, xend) = if xstart <= xend {
            (xstart, xend)
        } else {
            (xend, xstart)
        };
        Self {
            xstart,
            xend,
            color: None,
            id: None,
        }
    }

    /// Set the fill color
    pub fn with_color(mut self, color: LayerColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Fill color, falling back to the default
    pub fn fill_color(&self) -> LayerColor {
        self.color.unwrap_or(DEFAULT_HIGHLIGHT_COLOR)
    }

    /// Width of the range
    pub fn width(&self) -> f64 {
        self.xend - self.xstart
    }

    /// Whether `x` lies inside the range
    pub fn contains(&self, x: f64) -> bool {
        x >= self.xstart && x <= self.xend
    }

    /// Whether `other` refers to this highlight
    ///
    /// Matches by id when `other` carries one, otherwise by range.
    pub fn matches(&self, other: &Highlight) -> bool {
        match other.id {
            Some(ref id) => self.id.as_deref() == Some(id.as_str()),
            None => self.xstart == other.xstart && self.xend == other.xend,
        }
    }
}
