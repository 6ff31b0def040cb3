//! Layer-level types shared by the adapter and the hosts
//!
//! - [`LayerSettings`] - Partial/complete display settings of a layer
//! - [`Highlight`] - Shaded X range drawn over a layer
//! - [`LayerColor`] - RGBA color with string parsing

pub mod color;
pub mod highlight;
pub mod settings;

pub use color::LayerColor;
pub use highlight::{Highlight, DEFAULT_HIGHLIGHT_COLOR};
pub use settings::{ComplexMode, LayerSettings, LineStyle, Symbol};
