use crate::models::{Axis, CanonicalPoint};
use crate::utils::coordinates::decimal_to_dms;

#[derive(Debug)]
pub struct PointStatistics {
    pub total_points: usize,
    pub labelled_points: usize,
    pub northern: usize,
    pub southern: usize,
    pub eastern: usize,
    pub western: usize,
    pub geographic_bounds: Option<GeographicBounds>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeographicBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

pub struct PointAnalyzer;

impl PointAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_statistics(&self, points: &[CanonicalPoint]) -> PointStatistics {
        let mut stats = PointStatistics {
            total_points: points.len(),
            labelled_points: 0,
            northern: 0,
            southern: 0,
            eastern: 0,
            western: 0,
            geographic_bounds: None,
        };

        for point in points {
            if !point.label().is_empty() {
                stats.labelled_points += 1;
            }

            if point.latitude() < 0.0 {
                stats.southern += 1;
            } else {
                stats.northern += 1;
            }

            if point.longitude() < 0.0 {
                stats.western += 1;
            } else {
                stats.eastern += 1;
            }

            let bounds = stats.geographic_bounds.get_or_insert(GeographicBounds {
                min_lat: point.latitude(),
                max_lat: point.latitude(),
                min_lon: point.longitude(),
                max_lon: point.longitude(),
            });
            bounds.min_lat = bounds.min_lat.min(point.latitude());
            bounds.max_lat = bounds.max_lat.max(point.latitude());
            bounds.min_lon = bounds.min_lon.min(point.longitude());
            bounds.max_lon = bounds.max_lon.max(point.longitude());
        }

        stats
    }

    /// One row per point: label beside its position, as the map view would show it.
    /// `limit` of 0 lists every point.
    pub fn render_listing(&self, points: &[CanonicalPoint], limit: usize) -> String {
        let take = if limit == 0 { points.len() } else { limit };

        points
            .iter()
            .take(take)
            .enumerate()
            .map(|(i, point)| {
                let label = if point.label().is_empty() {
                    "(unlabelled)"
                } else {
                    point.label()
                };
                format!(
                    "{}. {}: {:.6}, {:.6} ({} {})",
                    i + 1,
                    label,
                    point.latitude(),
                    point.longitude(),
                    decimal_to_dms(point.latitude(), Axis::Latitude),
                    decimal_to_dms(point.longitude(), Axis::Longitude)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for PointAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PointStatistics {
    pub fn summary(&self) -> String {
        let coverage = match &self.geographic_bounds {
            Some(b) => format!(
                "{:.4} to {:.4} latitude, {:.4} to {:.4} longitude",
                b.min_lat, b.max_lat, b.min_lon, b.max_lon
            ),
            None => "No points".to_string(),
        };

        format!(
            "Points: {} total, {} labelled\n\
            Hemispheres: {} N / {} S, {} E / {} W\n\
            Coverage: {}",
            self.total_points,
            self.labelled_points,
            self.northern,
            self.southern,
            self.eastern,
            self.western,
            coverage
        )
    }
}
