pub mod extractor;
pub mod records;

pub use extractor::{CatalogExtraction, CatalogExtractor};
pub use records::{CinemaCatalog, CinemaRecord, MovieRecord};
