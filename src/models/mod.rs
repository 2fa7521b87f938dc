pub mod collection;
pub mod direction;
pub mod feature;
pub mod notation;
pub mod point;

pub use collection::PointCollection;
pub use direction::{Axis, Direction};
pub use feature::{Feature, FeatureCollection, Geometry, Properties};
pub use notation::Notation;
pub use point::{build_point, CanonicalPoint};
