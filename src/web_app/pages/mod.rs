// web_app/pages/mod.rs - Page components module
//
// - GalleryPage: the searchable, paginated gem gallery

pub mod gallery;

// Re-export page components
pub use gallery::GalleryPage;
