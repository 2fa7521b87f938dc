pub mod input_reader;

pub use input_reader::{InputLine, InputReader};
