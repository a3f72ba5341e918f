// Sovereign Navigator - app/mod.rs
//
// Application layer: backend client, background requests, state management,
// session persistence, document export.
// Dependencies: core layer, reqwest.
// Must NOT depend on: ui, egui.

pub mod api;
pub mod exports;
pub mod requests;
pub mod session;
pub mod state;
