//! Signal identifier to layer bookkeeping
//!
//! The registry remembers, per signal identifier, which host layer holds
//! that signal and the length of the last buffer pushed to it.
//!
//! Lookups come in two flavors:
//!
//! - [`LayerRegistry::get`] never touches the host.
//! - [`LayerRegistry::resolve`] creates the host layer on a miss and resizes
//!   it when the frame size changes.
//!
//! Entries are only removed through [`LayerRegistry::forget`]. Removing the
//! host layer alone leaves a stale entry behind.

use crate::error::{LinePlotError, Result};
use crate::header::HeaderOptions;
use crate::host::{Layer1D, LayerNumber, PlotHost};
use crate::layer::LayerSettings;
use std::collections::HashMap;

/// Layer record of one signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataLayer {
    /// Host layer holding the signal
    pub layer_number: LayerNumber,
    /// Length of the last buffer pushed, if any
    pub frame_size: Option<usize>,
}

/// Map of signal identifiers to their layer records
#[derive(Debug, Clone, Default)]
pub struct LayerRegistry {
    layers: HashMap<String, DataLayer>,
}

impl LayerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a record without creating one
    pub fn get(&self, data_id: &str) -> Option<DataLayer> {
        self.layers.get(data_id).copied()
    }

    /// Get the record for `data_id`, creating a host layer if needed
    ///
    /// On a hit, a defined `frame_size` different from the stored one makes
    /// the host layer resize before the new size is recorded. On a miss, a
    /// pipe layer named after `data_id` is created with `header` and
    /// `frame_size`.
    ///
    /// # Errors
    ///
    /// Host failures propagate. A resize of a layer the host no longer has
    /// fails with [`LinePlotError::LayerNotFound`] and leaves the stored
    /// frame size unchanged.
    pub fn resolve<H: PlotHost>(
        &mut self,
        host: &mut H,
        data_id: &str,
        header: Option<&HeaderOptions>,
        frame_size: Option<usize>,
    ) -> Result<DataLayer> {
        if let Some(entry) = self.layers.get_mut(data_id) {
            if let Some(new_size) = frame_size {
                if entry.frame_size != Some(new_size) {
                    let layer = host
                        .get_layer_mut(entry.layer_number)
                        .ok_or(LinePlotError::LayerNotFound(entry.layer_number))?;
                    layer.change_settings(&LayerSettings::with_framesize(new_size));
                    tracing::debug!(
                        "Resized layer {} for '{}': {:?} -> {}",
                        entry.layer_number,
                        data_id,
                        entry.frame_size,
                        new_size
                    );
                    entry.frame_size = Some(new_size);
                }
            }
            return Ok(*entry);
        }

        let mut settings = LayerSettings::new().name(data_id);
        settings.framesize = frame_size;
        let layer_number = host.overlay_pipe(header, settings)?;
        tracing::debug!(
            "Created layer {} for '{}' (frame size {:?})",
            layer_number,
            data_id,
            frame_size
        );

        let record = DataLayer {
            layer_number,
            frame_size,
        };
        self.layers.insert(data_id.to_string(), record);
        Ok(record)
    }

    /// Drop the record for `data_id`, returning it
    pub fn forget(&mut self, data_id: &str) -> Option<DataLayer> {
        self.layers.remove(data_id)
    }

    /// Whether a record exists for `data_id`
    pub fn contains(&self, data_id: &str) -> bool {
        self.layers.contains_key(data_id)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Iterate over all records
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataLayer)> {
        self.layers.iter().map(|(k, v)| (k.as_str(), v))
    }
}
