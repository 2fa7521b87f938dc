use crate::models::feature::{Feature, FeatureCollection};
use crate::models::point::CanonicalPoint;

/// Append-only, ordered set of points accepted during a session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCollection {
    points: Vec<CanonicalPoint>,
}

impl PointCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: CanonicalPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[CanonicalPoint] {
        &self.points
    }

    pub fn to_feature_collection(&self) -> FeatureCollection {
        FeatureCollection::new(self.points.iter().map(Feature::from).collect())
    }
}

impl Extend<CanonicalPoint> for PointCollection {
    fn extend<T: IntoIterator<Item = CanonicalPoint>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::point::build_point;

    #[test]
    fn test_collection_preserves_order() {
        let mut collection = PointCollection::new();
        assert!(collection.is_empty());

        collection.push(build_point(1.0, 2.0, "a").unwrap());
        collection.push(build_point(3.0, 4.0, "b").unwrap());

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.points()[0].label(), "a");
        assert_eq!(collection.points()[1].label(), "b");

        let features = collection.to_feature_collection();
        assert_eq!(features.features.len(), 2);
        assert_eq!(features.features[1].geometry.coordinates, [4.0, 3.0]);
    }
}
