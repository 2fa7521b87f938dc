use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::models::{Feature, FeatureCollection, PointCollection};
use crate::utils::constants::JSON_INDENT;

pub struct GeoJsonWriter {
    pretty: bool,
}

impl GeoJsonWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Write the whole session as one FeatureCollection. An empty collection is still written.
    pub fn write_collection(&self, collection: &PointCollection, path: &Path) -> Result<()> {
        self.write_feature_collection(&collection.to_feature_collection(), path)
    }

    pub fn write_feature_collection(
        &self,
        feature_collection: &FeatureCollection,
        path: &Path,
    ) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        self.serialize_into(feature_collection, &mut writer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!(
            "Wrote {} features to {}",
            feature_collection.features.len(),
            path.display()
        );
        Ok(())
    }

    /// Render a single feature as JSON text
    pub fn feature_to_string(&self, feature: &Feature) -> Result<String> {
        let mut buffer = Vec::new();
        self.serialize_into(feature, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    pub fn read_feature_collection(&self, path: &Path) -> Result<FeatureCollection> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn get_file_info(&self, path: &Path) -> Result<GeoJsonFileInfo> {
        let feature_collection = self.read_feature_collection(path)?;
        let file_size = std::fs::metadata(path)?.len();

        Ok(GeoJsonFileInfo {
            feature_count: feature_collection.features.len(),
            file_size,
        })
    }

    fn serialize_into<T: Serialize, W: Write>(&self, value: &T, writer: W) -> Result<()> {
        if self.pretty {
            let formatter = PrettyFormatter::with_indent(JSON_INDENT);
            let mut serializer = Serializer::with_formatter(writer, formatter);
            value.serialize(&mut serializer)?;
        } else {
            serde_json::to_writer(writer, value)?;
        }
        Ok(())
    }
}

impl Default for GeoJsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct GeoJsonFileInfo {
    pub feature_count: usize,
    pub file_size: u64,
}

impl GeoJsonFileInfo {
    pub fn summary(&self) -> String {
        format!(
            "GeoJSON File Summary:\n\
            - Features: {}\n\
            - File size: {:.2} KB",
            self.feature_count,
            self.file_size as f64 / 1024.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::build_point;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_collection() -> PointCollection {
        let mut collection = PointCollection::new();
        collection.push(build_point(-45.9, 170.5, "Dunedin").unwrap());
        collection.push(build_point(40.7128, -74.006, "coordinate").unwrap());
        collection
    }

    #[test]
    fn test_write_and_read_back() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("output.geojson");
        let writer = GeoJsonWriter::new();

        writer.write_collection(&sample_collection(), &path)?;

        let restored = writer.read_feature_collection(&path)?;
        assert_eq!(restored, sample_collection().to_feature_collection());

        let info = writer.get_file_info(&path)?;
        assert_eq!(info.feature_count, 2);
        assert!(info.file_size > 0);
        Ok(())
    }

    #[test]
    fn test_pretty_output_uses_two_space_indent() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("output.geojson");

        GeoJsonWriter::new().write_collection(&PointCollection::new(), &path)?;

        let text = std::fs::read_to_string(&path)?;
        assert_eq!(text, "{\n  \"type\": \"FeatureCollection\",\n  \"features\": []\n}\n");
        Ok(())
    }

    #[test]
    fn test_compact_feature() -> Result<()> {
        let point = build_point(1.5, 2.5, "x").unwrap();
        let text = GeoJsonWriter::new()
            .with_pretty(false)
            .feature_to_string(&Feature::from(&point))?;

        assert_eq!(
            text,
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[2.5,1.5]},"properties":{"name":"x"}}"#
        );
        Ok(())
    }
}
