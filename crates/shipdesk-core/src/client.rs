//! REST client for the shipments backend.
//!
//! Speaks the json-server dialect: `GET /shipments` returns a JSON array,
//! `PATCH /shipments/{id}` merges the given fields into one record.

use std::time::Duration;

use serde::Serialize;
use shipdesk_common::constants::{DEFAULT_TIMEOUT_SECS, SHIPMENTS_PATH};
use shipdesk_common::error::{Result, ShipdeskError};
use shipdesk_common::types::{Shipment, ShipmentId};

use crate::source::ShipmentSource;

/// Body of a name edit.
#[derive(Debug, Serialize)]
struct NamePatch<'a> {
    name: &'a str,
}

/// Shipment source backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Creates a client for `base_url` with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a client for `base_url` with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ShipdeskError::Http {
                url: base_url.clone(),
                message: e.to_string(),
            })?;
        Ok(Self { base_url, client })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the shipments collection.
    #[must_use]
    pub fn shipments_url(&self) -> String {
        format!("{}/{SHIPMENTS_PATH}", self.base_url)
    }

    /// URL of a single shipment, with the id percent-encoded as one path
    /// segment.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for ids that cannot name a single record (empty,
    /// `.` or `..`), and an HTTP error if the base URL does not parse.
    pub fn shipment_url(&self, id: &ShipmentId) -> Result<String> {
        if matches!(id.as_str(), "" | "." | "..") {
            return Err(ShipdeskError::NotFound {
                kind: "shipment",
                id: id.to_string(),
            });
        }
        let collection = self.shipments_url();
        let invalid = |message: String| ShipdeskError::Http {
            url: collection.clone(),
            message,
        };
        let mut url = reqwest::Url::parse(&collection).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("base URL cannot take a path".to_string()))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url.into())
    }

    fn check_status(url: &str, response: &reqwest::blocking::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ShipdeskError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

impl ShipmentSource for HttpSource {
    fn fetch_shipments(&self) -> Result<Vec<Shipment>> {
        let url = self.shipments_url();
        tracing::debug!(url = %url, "fetching shipments");
        let response = self.client.get(&url).send().map_err(|e| ShipdeskError::Http {
            url: url.clone(),
            message: e.to_string(),
        })?;
        Self::check_status(&url, &response)?;

        let body = response.text().map_err(|e| ShipdeskError::Http {
            url: url.clone(),
            message: format!("failed to read response body: {e}"),
        })?;
        let shipments: Vec<Shipment> = serde_json::from_str(&body)?;
        tracing::info!(url = %url, count = shipments.len(), "fetched shipments");
        Ok(shipments)
    }

    fn update_name(&self, id: &ShipmentId, name: &str) -> Result<()> {
        let url = self.shipment_url(id)?;
        tracing::debug!(url = %url, "patching shipment name");
        let response = self
            .client
            .patch(&url)
            .json(&NamePatch { name })
            .send()
            .map_err(|e| ShipdeskError::Http {
                url: url.clone(),
                message: e.to_string(),
            })?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ShipdeskError::NotFound {
                kind: "shipment",
                id: id.to_string(),
            });
        }
        Self::check_status(&url, &response)?;
        tracing::info!(url = %url, "persisted shipment name");
        Ok(())
    }

    fn describe(&self) -> String {
        self.shipments_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_from_trimmed_base() {
        let source = HttpSource::new("http://localhost:3000/").expect("client failed");
        assert_eq!(source.base_url(), "http://localhost:3000");
        assert_eq!(source.shipments_url(), "http://localhost:3000/shipments");
        assert_eq!(
            source
                .shipment_url(&ShipmentId::new("S1000"))
                .expect("url failed"),
            "http://localhost:3000/shipments/S1000"
        );
    }

    #[test]
    fn shipment_url_encodes_id_as_single_segment() {
        let source = HttpSource::new("http://localhost:3000").expect("client failed");
        let url = source
            .shipment_url(&ShipmentId::new("S1/../../admin?x=1#f"))
            .expect("url failed");
        assert_eq!(
            url,
            "http://localhost:3000/shipments/S1%2F..%2F..%2Fadmin%3Fx=1%23f"
        );
        let parsed = reqwest::Url::parse(&url).expect("parse failed");
        assert_eq!(parsed.query(), None);
        assert_eq!(parsed.fragment(), None);
        assert_eq!(parsed.path_segments().map(Iterator::count), Some(2));
    }

    #[test]
    fn shipment_url_rejects_dot_segments() {
        let source = HttpSource::new("http://localhost:3000").expect("client failed");
        for id in ["", ".", ".."] {
            assert!(matches!(
                source.shipment_url(&ShipmentId::new(id)),
                Err(ShipdeskError::NotFound { .. })
            ));
        }
    }

    #[test]
    fn describe_names_collection_url() {
        let source = HttpSource::new("https://ships.example.com").expect("client failed");
        assert_eq!(source.describe(), "https://ships.example.com/shipments");
    }

    #[test]
    fn name_patch_serializes_only_name() {
        let json = serde_json::to_string(&NamePatch { name: "Cap" }).expect("serialize failed");
        assert_eq!(json, r#"{"name":"Cap"}"#);
    }

    #[test]
    fn unreachable_backend_returns_http_error() {
        let source = HttpSource::with_timeout("http://127.0.0.1:9", Duration::from_secs(1))
            .expect("client failed");
        assert!(matches!(
            source.fetch_shipments(),
            Err(ShipdeskError::Http { .. })
        ));
    }
}
