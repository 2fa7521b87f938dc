use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate default batch output filename with format: whereintheworld-{YYMMDD}.geojson
pub fn generate_default_geojson_filename() -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("whereintheworld-{:02}{:02}{:02}.geojson", year, month, day);
    PathBuf::from("output").join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_geojson_filename() {
        let filename = generate_default_geojson_filename();

        assert_eq!(filename.parent(), Some(std::path::Path::new("output")));

        let file_part = filename.file_name().unwrap().to_string_lossy();
        assert!(file_part.starts_with("whereintheworld-"));
        assert!(file_part.ends_with(".geojson"));
        // "whereintheworld-" + YYMMDD + ".geojson"
        assert_eq!(file_part.len(), 16 + 6 + 8);
    }
}
