pub mod names;
pub mod serialization;

pub use names::{local_name, pretty_name};
pub use serialization::write_catalog;
