pub mod export;
pub mod import;

// Re-export main functions for convenience
pub use export::export_bookmarks;
pub use import::import_bookmarks;
