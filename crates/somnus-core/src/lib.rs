//! somnus-core
//!
//! Pure domain types for sleep-survey scoring. No scoring logic lives here;
//! this is the shared vocabulary between the instrument, roster, batch and
//! HTTP crates.

pub mod loose;
pub mod models;
