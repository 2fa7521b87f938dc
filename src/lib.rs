pub mod analyzers;
pub mod cli;
pub mod error;
pub mod models;
pub mod parsers;
pub mod processors;
pub mod readers;
pub mod settings;
pub mod utils;
pub mod writers;

pub use error::{ParseError, ProcessingError, RangeError, Result};
pub use models::{CanonicalPoint, PointCollection};
pub use parsers::{parse_coordinate, FormatChain, ParsedCoordinate};
