//! Service implementations
//!
//! Real implementations of the service traits for production use

pub mod catalog_files;

pub use catalog_files::FileCatalogSource;
