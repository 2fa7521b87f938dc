pub mod chain;
pub(crate) mod patterns;
pub mod recognizers;

pub use chain::{parse_coordinate, FormatChain, ParsedCoordinate};
pub use recognizers::{Candidate, Recognizer};
