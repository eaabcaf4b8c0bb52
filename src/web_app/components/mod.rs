// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loading, EmptyState, Badge, ImageModal)
// - search.rs: Search box and pagination
// - gem.rs: Gem display components (GemCard, GemGrid)

pub mod common;
pub mod search;
pub mod gem;

// Re-export commonly used components for convenience
pub use common::*;
pub use search::*;
pub use gem::*;
