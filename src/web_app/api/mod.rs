// web_app/api/mod.rs - Server-side sheet loading
//
// This module contains the sheet loader, its transport and configuration,
// and the process-wide loader registration used by server functions.

pub mod config;
pub mod error;
pub mod sheet;
pub mod source;
pub mod state;

pub use config::SheetConfig;
pub use error::LoaderError;
pub use sheet::{normalize_csv, SheetDataLoader};
pub use source::{HttpSheetSource, SheetSource};
