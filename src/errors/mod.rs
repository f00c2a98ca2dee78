pub mod types;
pub mod classification;

pub use types::NotifierError;
pub use classification::{ErrorClassification, EXIT_CONFIG, RESULT_DELIVERED, RESULT_FAILED};
