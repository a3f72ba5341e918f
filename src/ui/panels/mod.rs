// Sovereign Navigator - ui/panels/mod.rs

pub mod about;
pub mod affidavit;
pub mod bills;
pub mod creditors;
pub mod dashboard;
pub mod dispatch;
pub mod document;
pub mod intelligence;
pub mod notices;
pub mod profile;
pub mod statute;
pub mod timeline;
pub mod violations;
