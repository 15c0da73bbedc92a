//! Data access layer repositories.
//!
//! One repository per table, generic over [`sea_orm::ConnectionTrait`] so the
//! same query code runs on the plain connection for advisory reads and inside
//! a transaction for the invariant-bearing writes.

pub mod allocation;
pub mod charge;
pub mod payment;
pub mod room;
pub mod student;
