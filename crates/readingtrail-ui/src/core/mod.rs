//! Core, DOM-free primitives and view-models for the web UI.
pub mod achievements;
pub mod alerts;
pub mod badge;
pub mod config;
pub mod controller;
pub mod counters;
pub mod endpoints;
pub mod error;
pub mod loan;
pub mod page;
pub mod rating;
pub mod shortcuts;
