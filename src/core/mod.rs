// Sovereign Navigator - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, serde, chrono, csv.
// Must NOT depend on: ui, platform, app, or any network crate.

pub mod export;
pub mod filter;
pub mod forms;
pub mod model;
pub mod progress;
pub mod suggestion;
