//! Shared data model for the site and its admin back-office.
//!
//! Every table the site reads or writes has one draft type in [`model`]
//! (the domain fields a caller supplies) and one patch type (the same fields,
//! all optional, for partial updates). [`resource`] ties a draft type to its
//! table and list ordering and wraps stored rows in [`resource::Record`].

pub mod model;
pub mod resource;

pub use resource::{Direction, OrderBy, Record, RecordId, Resource, StatusTracked, ValidationError};
