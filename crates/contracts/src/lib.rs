//! Общие типы и чистая логика калькулятора воронки.
//!
//! Shared by the Leptos frontend and the axum backend. Nothing in this crate
//! performs I/O.

pub mod dashboards;
pub mod shared;
