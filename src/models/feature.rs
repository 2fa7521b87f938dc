use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, Result};
use crate::models::point::{build_point, CanonicalPoint};

const FEATURE_TYPE: &str = "Feature";
const POINT_TYPE: &str = "Point";
const COLLECTION_TYPE: &str = "FeatureCollection";

/// GeoJSON `Feature` holding a single point geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: Geometry,
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<Feature>,
}

impl From<&CanonicalPoint> for Feature {
    fn from(point: &CanonicalPoint) -> Self {
        Self {
            feature_type: FEATURE_TYPE.to_string(),
            geometry: Geometry {
                geometry_type: POINT_TYPE.to_string(),
                coordinates: point.position(),
            },
            properties: Properties {
                name: point.label().to_string(),
            },
        }
    }
}

impl TryFrom<&Feature> for CanonicalPoint {
    type Error = ProcessingError;

    fn try_from(feature: &Feature) -> Result<Self> {
        if feature.feature_type != FEATURE_TYPE {
            return Err(ProcessingError::InvalidFormat(format!(
                "Expected a Feature, got '{}'",
                feature.feature_type
            )));
        }

        if feature.geometry.geometry_type != POINT_TYPE {
            return Err(ProcessingError::InvalidFormat(format!(
                "Expected Point geometry, got '{}'",
                feature.geometry.geometry_type
            )));
        }

        let [longitude, latitude] = feature.geometry.coordinates;
        Ok(build_point(
            latitude,
            longitude,
            feature.properties.name.clone(),
        )?)
    }
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            collection_type: COLLECTION_TYPE.to_string(),
            features,
        }
    }

    /// Convert every feature back into a validated point
    pub fn to_points(&self) -> Result<Vec<CanonicalPoint>> {
        if self.collection_type != COLLECTION_TYPE {
            return Err(ProcessingError::InvalidFormat(format!(
                "Expected a FeatureCollection, got '{}'",
                self.collection_type
            )));
        }

        self.features.iter().map(CanonicalPoint::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_feature_json_layout() {
        let point = build_point(-45.9, 170.5, "Dunedin").unwrap();
        let value = serde_json::to_value(Feature::from(&point)).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [170.5, -45.9]},
                "properties": {"name": "Dunedin"}
            })
        );
    }

    #[test]
    fn test_feature_parse_back() {
        let point = build_point(40.712776, -74.005974, "NYC").unwrap();
        let json = serde_json::to_string(&Feature::from(&point)).unwrap();

        let feature: Feature = serde_json::from_str(&json).unwrap();
        let restored = CanonicalPoint::try_from(&feature).unwrap();

        assert!((restored.latitude() - point.latitude()).abs() < 1e-9);
        assert!((restored.longitude() - point.longitude()).abs() < 1e-9);
        assert_eq!(restored.label(), "NYC");
    }

    #[test]
    fn test_parse_back_rejects_non_point_geometry() {
        let feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {"type": "LineString", "coordinates": [0.0, 0.0]},
            "properties": {"name": "x"}
        }))
        .unwrap();

        assert!(matches!(
            CanonicalPoint::try_from(&feature),
            Err(ProcessingError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_back_revalidates_range() {
        let feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [10.0, 95.0]},
            "properties": {"name": "x"}
        }))
        .unwrap();

        assert!(matches!(
            CanonicalPoint::try_from(&feature),
            Err(ProcessingError::Range(_))
        ));
    }

    #[test]
    fn test_collection_layout() {
        let collection = FeatureCollection::new(vec![]);
        let value = serde_json::to_value(&collection).unwrap();

        assert_eq!(value, json!({"type": "FeatureCollection", "features": []}));
        assert!(collection.to_points().unwrap().is_empty());
    }
}
