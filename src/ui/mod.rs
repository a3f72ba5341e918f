// Sovereign Navigator - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state, exports), core (read-only models), egui.
// Must NOT depend on: platform, network.

pub mod panels;
pub mod theme;
