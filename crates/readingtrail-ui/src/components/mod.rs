//! Yew components mounted into page-provided hosts.
pub(crate) mod achievements;
pub(crate) mod alerts;
