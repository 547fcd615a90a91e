pub mod catalog_use_cases;
pub mod ports;
pub mod use_cases;

pub use catalog_use_cases::CatalogUseCases;
