//! Domain logic for the cinema catalog.
//!
//! Everything in this crate is pure: no locks, no I/O. The store and the
//! HTTP layer build on these types and rules.

pub mod account;
pub mod error;
pub mod pagination;
pub mod rating;
pub mod review;
pub mod search;
pub mod types;
