//! Shared UI crate for Tallyboard. Cross-platform views and dashboard logic live here.

pub mod core;
pub mod dashboard;
pub mod views;
