//! # shipdesk-core
//!
//! Shipment data handling shared by the console and the CLI.
//!
//! - [`ShipmentSource`](source::ShipmentSource): where shipments come from
//!   and where name edits are pushed ([`HttpSource`](client::HttpSource)
//!   for the REST backend, [`FileSource`](source::FileSource) for a local
//!   JSON file).
//! - [`ShipmentStore`](store::ShipmentStore): fetched records, their list
//!   projection, the current selection, and in-place name edits.
//! - [`TableQuery`](table::TableQuery): search, sort, and pagination of the
//!   shipment list.
//!
//! # Example
//!
//! ```rust,no_run
//! use shipdesk_core::client::HttpSource;
//! use shipdesk_core::source::ShipmentSource;
//! use shipdesk_core::store::ShipmentStore;
//! use shipdesk_core::table::TableQuery;
//!
//! # fn main() -> shipdesk_common::error::Result<()> {
//! let source = HttpSource::new("http://localhost:3000")?;
//! let store = ShipmentStore::new(source.fetch_shipments()?);
//! let page = TableQuery::default().apply(store.list_items());
//! println!("{}", page.range_label());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod client;
pub mod source;
pub mod store;
pub mod table;
