// fixtures/sheets/mod.rs
//
// Each sample sheet is a unit struct implementing TestSheet.

pub mod gems;

pub use gems::{GemsSheet, MixedIdsSheet, ReorderedColumnsSheet};
