//! # Banner Record Store
//!
//! In-memory store for the banner collection. Owns the records, the id
//! counter, and the locking discipline; everything else goes through the
//! four operations on [`BannerService`].

pub mod errors;
pub mod service;

pub use errors::ServiceError;
pub use service::{Banner, BannerService};
