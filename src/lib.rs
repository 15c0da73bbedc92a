//! Room allocation and fee ledger engine.
//!
//! The core decides whether a room assignment is legal, materializes the
//! billing charge tied to each assignment, reconciles payments against
//! charges, and derives a student's displayed fee status. It is storage- and
//! protocol-agnostic: callers drive it through typed in-process calls on the
//! services in [`service`], and authentication/authorization is the caller's
//! responsibility.

pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod util;

pub use error::Error;
