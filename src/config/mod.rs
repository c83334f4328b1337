//! Read-only configuration consumed by the scheduler, movers and cursor.

pub(crate) mod settings;
