// Sovereign Navigator - lib.rs
//
// Library entry point, exposing all non-GUI-shell modules for integration
// testing. The `gui` module lives with `main.rs`.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
