pub mod provider;
pub mod ecr;

pub use provider::FindingsSource;
pub use ecr::EcrFindingsSource;
