// fixtures/mod.rs - Test fixtures module
//
// A fixture is reusable test setup. Instead of pasting CSV into every test,
// the sample sheets are written once here and shared by unit tests,
// integration tests and the demo tooling.
//
// - sheets/: canned CSV exports with the ids they should normalize to
// - sources: stub transports that serve canned bodies or fail on demand

pub mod sheets;

#[cfg(feature = "sheet-tools")]
pub mod sources;

/// A simple trait that all sample sheets implement
pub trait TestSheet {
    /// The raw CSV export, header row first
    fn csv() -> &'static str;

    /// Ids of the normalized gems, in output order
    fn expected_ids() -> &'static [&'static str];
}
