/// Labels
pub const DEFAULT_LABEL: &str = "coordinate";

/// Session control
pub const SESSION_END_SENTINEL: &str = "display";
pub const SESSION_PROMPT: &str =
    "Enter coordinates, then type 'display' to view coordinates on map:";
pub const ACCEPTED_MESSAGE: &str = "Coordinate received successfully!";
pub const REJECTED_MESSAGE: &str = "Unable to process:";

/// Geographic bounds (open intervals)
pub const LATITUDE_BOUND: f64 = 90.0;
pub const LONGITUDE_BOUND: f64 = 180.0;

/// DMS arithmetic
pub const MINUTES_PER_DEGREE: f64 = 60.0;
pub const SECONDS_PER_DEGREE: f64 = 3600.0;

/// File names
pub const DEFAULT_OUTPUT_FILE: &str = "output.geojson";
pub const DEFAULT_CONFIG_BASENAME: &str = "whereintheworld";
pub const ENV_PREFIX: &str = "WHEREINTHEWORLD";

/// Output formatting
pub const JSON_INDENT: &[u8] = b"  ";
