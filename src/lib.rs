pub mod config;
pub mod core;
pub mod error;
pub mod graph;
pub mod utils;

pub use config::Configuration;
pub use core::{CatalogExtraction, CatalogExtractor, CinemaCatalog, CinemaRecord, MovieRecord};
pub use error::ExportError;
pub use graph::OntologyGraph;
