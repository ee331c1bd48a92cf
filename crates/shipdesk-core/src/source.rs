//! Shipment sources.
//!
//! A [`ShipmentSource`] is anything that can list shipments and accept a
//! name edit. The REST backend lives in [`crate::client`]; this module
//! holds the trait and the local JSON file source.

use std::path::{Path, PathBuf};

use serde_json::Value;
use shipdesk_common::constants::SHIPMENTS_KEY;
use shipdesk_common::error::{Result, ShipdeskError};
use shipdesk_common::types::{Shipment, ShipmentId};

/// Backend seam for fetching shipments and pushing name edits.
pub trait ShipmentSource {
    /// Fetches every shipment.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unreachable or its data is malformed.
    fn fetch_shipments(&self) -> Result<Vec<Shipment>>;

    /// Stores a new name for the shipment with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shipment is unknown or the write fails.
    fn update_name(&self, id: &ShipmentId, name: &str) -> Result<()>;

    /// Human-readable location of this source.
    fn describe(&self) -> String;
}

impl<S: ShipmentSource + ?Sized> ShipmentSource for Box<S> {
    fn fetch_shipments(&self) -> Result<Vec<Shipment>> {
        (**self).fetch_shipments()
    }

    fn update_name(&self, id: &ShipmentId, name: &str) -> Result<()> {
        (**self).update_name(id, name)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Shipments stored in a local JSON file.
///
/// The file is either a bare array of shipments or a json-server database
/// object with a `shipments` array. Writes keep whichever layout was read.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Value> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| ShipdeskError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_document(&self, document: &Value) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        std::fs::write(&self.path, json).map_err(|e| ShipdeskError::Io {
            path: self.path.clone(),
            source: e,
        })
    }

    fn records_mut<'a>(&self, document: &'a mut Value) -> Result<&'a mut Vec<Value>> {
        let records = match document {
            Value::Object(map) => map.get_mut(SHIPMENTS_KEY),
            other => Some(other),
        };
        records
            .and_then(Value::as_array_mut)
            .ok_or_else(|| self.layout_error())
    }

    fn layout_error(&self) -> ShipdeskError {
        ShipdeskError::Config {
            message: format!(
                "{} must hold a shipments array or an object with a \"{SHIPMENTS_KEY}\" array",
                self.path.display()
            ),
        }
    }
}

impl ShipmentSource for FileSource {
    fn fetch_shipments(&self) -> Result<Vec<Shipment>> {
        let mut document = self.read_document()?;
        let records = std::mem::take(self.records_mut(&mut document)?);
        let shipments: Vec<Shipment> = serde_json::from_value(Value::Array(records))?;
        tracing::info!(
            path = %self.path.display(),
            count = shipments.len(),
            "loaded shipments from file"
        );
        Ok(shipments)
    }

    fn update_name(&self, id: &ShipmentId, name: &str) -> Result<()> {
        let mut document = self.read_document()?;
        let record = self
            .records_mut(&mut document)?
            .iter_mut()
            .find(|record| record.get("id").and_then(Value::as_str) == Some(id.as_str()))
            .ok_or_else(|| ShipdeskError::NotFound {
                kind: "shipment",
                id: id.to_string(),
            })?;
        if let Some(fields) = record.as_object_mut() {
            let _ = fields.insert("name".to_string(), Value::String(name.to_string()));
        }
        self.write_document(&document)?;
        tracing::info!(path = %self.path.display(), id = %id, "persisted shipment name");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
