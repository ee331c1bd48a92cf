//! In-memory shipment store.
//!
//! Holds the fetched shipment records, the list projection derived from
//! them, and the currently selected shipment. The projection is rebuilt on
//! every change so it never drifts from the records.

use shipdesk_common::error::{Result, ShipdeskError};
use shipdesk_common::types::{ListItem, Shipment, ShipmentId};

/// Fetched shipments plus derived list rows and the current selection.
#[derive(Debug, Clone, Default)]
pub struct ShipmentStore {
    shipments: Vec<Shipment>,
    list_items: Vec<ListItem>,
    selected: Option<ShipmentId>,
}

impl ShipmentStore {
    /// Creates a store holding `shipments`.
    #[must_use]
    pub fn new(shipments: Vec<Shipment>) -> Self {
        let mut store = Self::default();
        store.replace(shipments);
        store
    }

    /// Replaces all records and rebuilds the list projection.
    ///
    /// The selection survives if a record with the same id is still present.
    pub fn replace(&mut self, shipments: Vec<Shipment>) {
        self.shipments = shipments;
        self.rebuild_list();
        if let Some(id) = &self.selected {
            if self.position(id).is_none() {
                tracing::debug!(id = %id, "selected shipment vanished after reload");
                self.selected = None;
            }
        }
        tracing::debug!(count = self.shipments.len(), "shipment store replaced");
    }

    /// All records in fetch order.
    #[must_use]
    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    /// The list projection, one row per record in the same order.
    #[must_use]
    pub fn list_items(&self) -> &[ListItem] {
        &self.list_items
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &ShipmentId) -> Option<&Shipment> {
        self.shipments.iter().find(|s| &s.id == id)
    }

    /// Makes the record with `id` the selected shipment.
    ///
    /// # Errors
    ///
    /// Returns `ShipdeskError::NotFound` if no record has that id; the
    /// previous selection is kept.
    pub fn select(&mut self, id: &ShipmentId) -> Result<&Shipment> {
        let index = self.position(id).ok_or_else(|| ShipdeskError::NotFound {
            kind: "shipment",
            id: id.to_string(),
        })?;
        self.selected = Some(id.clone());
        tracing::debug!(id = %id, "shipment selected");
        Ok(&self.shipments[index])
    }

    /// The selected shipment, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Shipment> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Renames the selected shipment in place.
    ///
    /// Only the name changes; the record keeps its position and every
    /// other field. Empty names are accepted.
    ///
    /// # Errors
    ///
    /// Returns `ShipdeskError::NoSelection` if nothing is selected.
    pub fn edit_name(&mut self, new_name: impl Into<String>) -> Result<&Shipment> {
        let index = self
            .selected
            .as_ref()
            .and_then(|id| self.position(id))
            .ok_or(ShipdeskError::NoSelection)?;
        let new_name = new_name.into();
        tracing::info!(
            id = %self.shipments[index].id,
            from = %self.shipments[index].name,
            to = %new_name,
            "shipment renamed"
        );
        self.shipments[index].name = new_name;
        self.list_items[index] = ListItem::from(&self.shipments[index]);
        Ok(&self.shipments[index])
    }

    fn position(&self, id: &ShipmentId) -> Option<usize> {
        self.shipments.iter().position(|s| &s.id == id)
    }

    fn rebuild_list(&mut self) {
        self.list_items = self.shipments.iter().map(ListItem::from).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipment(id: &str, name: &str) -> Shipment {
        Shipment {
            id: ShipmentId::new(id),
            name: name.into(),
            mode: "sea".into(),
            origin: "Shanghai Port".into(),
            destination: "Hamburg".into(),
            status: "ACTIVE".into(),
            total: "1000".into(),
            ..Shipment::default()
        }
    }

    fn sample_store() -> ShipmentStore {
        ShipmentStore::new(vec![
            shipment("S1000", "T-shirts"),
            shipment("S1001", "Cap"),
            shipment("S1002", "Shoes"),
        ])
    }

    #[test]
    fn new_store_projects_every_record_in_order() {
        let store = sample_store();
        let ids: Vec<_> = store.list_items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["S1000", "S1001", "S1002"]);
        assert_eq!(store.list_items()[1].name, "Cap");
    }

    #[test]
    fn empty_store_has_no_selection() {
        let store = ShipmentStore::default();
        assert!(store.list_items().is_empty());
        assert!(store.selected().is_none());
    }

    #[test]
    fn select_existing_id_sets_selection() {
        let mut store = sample_store();
        let selected = store.select(&ShipmentId::new("S1001")).expect("select failed");
        assert_eq!(selected.name, "Cap");
        assert_eq!(store.selected().map(|s| s.id.as_str()), Some("S1001"));
    }

    #[test]
    fn select_unknown_id_keeps_previous_selection() {
        let mut store = sample_store();
        let _ = store.select(&ShipmentId::new("S1000")).expect("select failed");
        let err = store.select(&ShipmentId::new("S9999")).expect_err("must fail");
        assert!(matches!(err, ShipdeskError::NotFound { .. }));
        assert_eq!(store.selected().map(|s| s.id.as_str()), Some("S1000"));
    }

    #[test]
    fn edit_name_updates_record_and_projection_only() {
        let mut store = sample_store();
        let _ = store.select(&ShipmentId::new("S1001")).expect("select failed");
        let before = store.shipments()[1].clone();

        let edited = store.edit_name("Baseball caps").expect("edit failed");
        assert_eq!(edited.name, "Baseball caps");

        let after = &store.shipments()[1];
        assert_eq!(after.id, before.id);
        assert_eq!(after.origin, before.origin);
        assert_eq!(after.total, before.total);
        assert_eq!(store.list_items()[1].name, "Baseball caps");
        assert_eq!(store.selected().map(|s| s.name.as_str()), Some("Baseball caps"));
        assert_eq!(store.shipments()[0].name, "T-shirts");
        assert_eq!(store.shipments()[2].name, "Shoes");
    }

    #[test]
    fn edit_name_accepts_empty_name() {
        let mut store = sample_store();
        let _ = store.select(&ShipmentId::new("S1002")).expect("select failed");
        let edited = store.edit_name("").expect("edit failed");
        assert!(edited.name.is_empty());
    }

    #[test]
    fn edit_name_without_selection_returns_error() {
        let mut store = sample_store();
        assert!(matches!(
            store.edit_name("anything"),
            Err(ShipdeskError::NoSelection)
        ));
        assert_eq!(store.shipments()[2].name, "Shoes");
    }

    #[test]
    fn replace_keeps_selection_when_id_survives() {
        let mut store = sample_store();
        let _ = store.select(&ShipmentId::new("S1001")).expect("select failed");
        store.replace(vec![shipment("S1001", "Cap (reloaded)")]);
        assert_eq!(store.selected().map(|s| s.name.as_str()), Some("Cap (reloaded)"));
        assert_eq!(store.list_items().len(), 1);
    }

    #[test]
    fn replace_clears_selection_when_id_vanishes() {
        let mut store = sample_store();
        let _ = store.select(&ShipmentId::new("S1001")).expect("select failed");
        store.replace(vec![shipment("S2000", "Other")]);
        assert!(store.selected().is_none());
    }

    #[test]
    fn get_finds_record_by_id() {
        let store = sample_store();
        assert_eq!(
            store.get(&ShipmentId::new("S1002")).map(|s| s.name.as_str()),
            Some("Shoes")
        );
        assert!(store.get(&ShipmentId::new("nope")).is_none());
    }
}
