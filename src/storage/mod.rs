//! Content-addressed storage for images and metadata documents.

pub mod content_store;

pub use content_store::ContentStore;
