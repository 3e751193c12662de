//! Command handlers, one module per command group.

pub mod categories;
pub mod entries;
pub mod init;
pub mod stardate;
pub mod status;
