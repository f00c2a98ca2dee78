pub mod finding;
pub mod scan_result;
pub mod event;
pub mod message;

pub use finding::*;
pub use scan_result::*;
pub use event::*;
pub use message::*;
