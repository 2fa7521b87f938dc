pub mod batch_processor;
pub mod report;
pub mod session;

pub use batch_processor::BatchProcessor;
pub use report::{FailureKind, LineFailure, ParseReport};
pub use session::Session;
