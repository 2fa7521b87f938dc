use crate::error::RangeError;
use crate::models::direction::Axis;

/// A range-validated point. Only [`build_point`] creates one.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalPoint {
    latitude: f64,
    longitude: f64,
    label: String,
}

impl CanonicalPoint {
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// GeoJSON axis order: longitude first
    pub fn position(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

/// Validate a latitude/longitude pair against the open intervals (-90, 90) and
/// (-180, 180) and build the point. Latitude is checked first.
pub fn build_point(
    latitude: f64,
    longitude: f64,
    label: impl Into<String>,
) -> std::result::Result<CanonicalPoint, RangeError> {
    check_axis(Axis::Latitude, latitude)?;
    check_axis(Axis::Longitude, longitude)?;

    Ok(CanonicalPoint {
        latitude,
        longitude,
        label: label.into(),
    })
}

fn check_axis(axis: Axis, value: f64) -> std::result::Result<(), RangeError> {
    if axis.contains(value) {
        Ok(())
    } else {
        Err(RangeError { axis, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_valid_point() {
        let point = build_point(51.5074, -0.1278, "London").unwrap();

        assert_eq!(point.latitude(), 51.5074);
        assert_eq!(point.longitude(), -0.1278);
        assert_eq!(point.label(), "London");
        assert_eq!(point.position(), [-0.1278, 51.5074]);
    }

    #[test]
    fn test_latitude_endpoints_rejected() {
        for latitude in [90.0, -90.0, 95.0] {
            let err = build_point(latitude, 0.0, "").unwrap_err();
            assert_eq!(err.axis, Axis::Latitude);
        }

        assert!(build_point(89.999999, 0.0, "").is_ok());
        assert!(build_point(-89.999999, 0.0, "").is_ok());
    }

    #[test]
    fn test_longitude_endpoints_rejected() {
        for longitude in [180.0, -180.0, 200.5] {
            let err = build_point(0.0, longitude, "").unwrap_err();
            assert_eq!(err.axis, Axis::Longitude);
        }

        assert!(build_point(0.0, 179.99, "").is_ok());
    }

    #[test]
    fn test_latitude_checked_before_longitude() {
        let err = build_point(91.0, 181.0, "").unwrap_err();
        assert_eq!(err.axis, Axis::Latitude);
    }

    #[test]
    fn test_range_error_cites_axis_bound() {
        let lat = build_point(95.0, 10.0, "").unwrap_err();
        assert_eq!(lat.to_string(), "Latitude 95 must be between -90 & 90");

        let lon = build_point(10.0, -190.0, "").unwrap_err();
        assert_eq!(lon.to_string(), "Longitude -190 must be between -180 & 180");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(build_point(f64::NAN, 0.0, "").is_err());
        assert!(build_point(0.0, f64::INFINITY, "").is_err());
    }
}
