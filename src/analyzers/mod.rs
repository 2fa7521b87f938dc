pub mod point_analyzer;

pub use point_analyzer::{GeographicBounds, PointAnalyzer, PointStatistics};
