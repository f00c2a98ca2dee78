pub mod formatter;

pub use formatter::{format_message, severity_properties, SeverityProperties};
