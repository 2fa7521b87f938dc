pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod logging;
pub mod progress;

pub use constants::*;
pub use coordinates::{decimal_to_dms, to_decimal};
pub use filename::generate_default_geojson_filename;
pub use logging::init_logging;
pub use progress::ProgressReporter;
