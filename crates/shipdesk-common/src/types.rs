//! Domain types for shipment records and their list projection.
//!
//! The serialized form matches the JSON served by the shipments backend:
//! camelCase keys, `type` for the kind fields, and every scalar as a string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShipdeskError;

/// Unique identifier of a shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentId(String);

impl ShipmentId {
    /// Creates a shipment ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of cargo carried by a shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CargoItem {
    /// Cargo category, e.g. "Fabric".
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form description of the goods.
    pub description: String,
    /// Volume as reported by the backend.
    pub volume: String,
}

/// An additional service booked for a shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Service category, e.g. "customs".
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional service parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A full shipment record as served by the backend.
///
/// Missing keys deserialize to empty values so partially populated records
/// still show up in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Shipment {
    /// Shipment identifier.
    pub id: ShipmentId,
    /// Human-readable shipment name; the only editable field.
    pub name: String,
    /// Cargo lines.
    pub cargo: Vec<CargoItem>,
    /// Transport mode, e.g. "sea" or "air".
    pub mode: String,
    /// Shipment type, e.g. "FCL".
    #[serde(rename = "type")]
    pub kind: String,
    /// Destination location.
    pub destination: String,
    /// Origin location.
    pub origin: String,
    /// Booked services.
    pub services: Vec<Service>,
    /// Total amount as reported by the backend.
    pub total: String,
    /// Shipment status, e.g. "ACTIVE".
    pub status: String,
    /// Owning user.
    pub user_id: String,
}

impl Shipment {
    /// Returns the labelled detail fields in display order.
    #[must_use]
    pub fn detail_fields(&self) -> [(&'static str, &str); 9] {
        [
            ("id", self.id.as_str()),
            ("name", &self.name),
            ("origin", &self.origin),
            ("destination", &self.destination),
            ("mode", &self.mode),
            ("total", &self.total),
            ("status", &self.status),
            ("userId", &self.user_id),
            ("type", &self.kind),
        ]
    }
}

/// Row of the shipment list: the subset of a [`Shipment`] shown in the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Shipment identifier.
    pub id: ShipmentId,
    /// Shipment name.
    pub name: String,
    /// Transport mode.
    pub mode: String,
    /// Destination location.
    pub destination: String,
    /// Origin location.
    pub origin: String,
    /// Shipment status.
    pub status: String,
}

impl From<&Shipment> for ListItem {
    fn from(shipment: &Shipment) -> Self {
        Self {
            id: shipment.id.clone(),
            name: shipment.name.clone(),
            mode: shipment.mode.clone(),
            destination: shipment.destination.clone(),
            origin: shipment.origin.clone(),
            status: shipment.status.clone(),
        }
    }
}

/// Sortable column of the shipment list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListColumn {
    /// Shipment identifier.
    #[default]
    Id,
    /// Shipment name.
    Name,
    /// Transport mode.
    Mode,
    /// Destination location.
    Destination,
    /// Origin location.
    Origin,
    /// Shipment status.
    Status,
}

impl ListColumn {
    /// All columns in display order.
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::Name,
        Self::Mode,
        Self::Destination,
        Self::Origin,
        Self::Status,
    ];

    /// Returns the header label of this column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Mode => "mode",
            Self::Destination => "destination",
            Self::Origin => "origin",
            Self::Status => "status",
        }
    }

    /// Returns the value of this column for a list row.
    #[must_use]
    pub fn value(self, item: &ListItem) -> &str {
        match self {
            Self::Id => item.id.as_str(),
            Self::Name => &item.name,
            Self::Mode => &item.mode,
            Self::Destination => &item.destination,
            Self::Origin => &item.origin,
            Self::Status => &item.status,
        }
    }
}

impl fmt::Display for ListColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ListColumn {
    type Err = ShipdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ShipdeskError::Config {
                message: format!("unknown list column: {s}"),
            })
    }
}

/// Direction of the list sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ShipdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ShipdeskError::Config {
                message: format!("unknown sort order: {s}"),
            }),
        }
    }
}
