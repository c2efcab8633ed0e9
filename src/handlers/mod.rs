pub mod catalog;
pub mod docs;
pub mod health;

pub use catalog::{catalog_handler, section_handler};
pub use docs::docs_handler;
pub use health::health_handler;
