//! Remote table access.
//!
//! - `client`: typed per-entity operations ([`ResourceClient`]).
//! - `transport`: the seam between the client and a concrete store.
//! - `rest`: PostgREST over `fetch`, used by the site.
//! - `memory`: in-process tables with the same observable behaviour.
//! - `dashboard`, `diagnostics`: admin helpers built on the client.

pub mod client;
pub mod dashboard;
pub mod diagnostics;
pub mod error;
pub mod memory;
pub mod request;
pub mod rest;
pub mod transport;

pub use client::{ResourceClient, StoreClient, StoreHandle};
pub use dashboard::DashboardSummary;
pub use diagnostics::{probe_tables, TableProbe, TABLES};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryTransport;
pub use request::{Filter, Operation, TableRequest};
pub use rest::RestTransport;
pub use transport::Transport;
