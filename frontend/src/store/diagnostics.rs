//! Store connectivity probe for the setup/debug screen.
//!
//! Selects one row from every table the site uses and reports per table
//! whether the call went through. The probe itself never fails: an
//! unreachable table is part of the report, not an error.

use common::model::{BlogPost, ContactInquiry, Event, Faq, GalleryItem, Inquiry, Service};
use common::Resource;
use log::{info, warn};

use super::client::StoreClient;
use super::request::TableRequest;
use super::transport::Transport;

/// Every table the site reads or writes.
pub const TABLES: [&str; 7] = [
    Service::TABLE,
    BlogPost::TABLE,
    GalleryItem::TABLE,
    Faq::TABLE,
    ContactInquiry::TABLE,
    Inquiry::TABLE,
    Event::TABLE,
];

#[derive(Debug, Clone, PartialEq)]
pub struct TableProbe {
    pub table: &'static str,
    /// Rows returned by the one-row sample, or the failure message.
    pub outcome: Result<usize, String>,
}

impl TableProbe {
    pub fn is_reachable(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Probes the tables one after another, in [`TABLES`] order.
pub async fn probe_tables<T: Transport>(store: &StoreClient<T>) -> Vec<TableProbe> {
    let mut report = Vec::with_capacity(TABLES.len());
    for table in TABLES {
        let outcome = store
            .execute(TableRequest::sample(table, 1))
            .await
            .map(|rows| rows.len())
            .map_err(|err| err.to_string());
        match &outcome {
            Ok(rows) => info!("event=store_probe table={table} status=ok rows={rows}"),
            Err(err) => warn!("event=store_probe table={table} status=error error={err}"),
        }
        report.push(TableProbe { table, outcome });
    }
    report
}
