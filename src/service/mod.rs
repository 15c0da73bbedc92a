//! Service layer for the allocation and fee ledger business logic.
//!
//! Services own validation, the ledger invariants, and the transaction
//! boundaries; they coordinate the repositories in `crate::data`. Callers are
//! expected to have already established the acting identity and role; no
//! authorization happens here.

pub mod allocation;
pub mod billing;
pub mod fees;
pub mod payment;
pub mod room;
