//! Date helpers and the transaction discipline shared by the services.

pub mod time;
pub mod txn;
