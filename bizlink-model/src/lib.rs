//! Business entity model for bizlink.
//!
//! Defines the types the link router resolves against:
//! - [`BusinessEntity`]: a customer, vendor, employee, job or invoice
//! - [`Account`]: a ledger account, the optional subject of an owner report
//! - [`Owner`]: the party a report is about, as an explicit sum type
//! - [`Book`]: the in-memory store of one open data file, exposed to
//!   lookups through the [`EntityStore`] trait

mod book;
mod entity;
mod error;
mod owner;

pub use book::{Book, Collection, EntityStore};
pub use entity::{Account, BusinessEntity};
pub use error::{ModelError, ModelResult};
pub use owner::Owner;
