//! Application module
//!
//! This module re-exports the demo application from the frontend module.

pub use crate::frontend::DemoApp;

// Re-export the data IDs the demo pushes to
pub use crate::frontend::{FFT_SIGNAL, PSD_SIGNAL, TIME_SIGNAL};
