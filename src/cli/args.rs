use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "whereintheworld")]
#[command(about = "Normalize free-form coordinates into GeoJSON points")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Settings file [default: whereintheworld.{toml,json,yaml} if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read coordinates from stdin until the sentinel line, then save and display them (default)
    Session {
        #[arg(short, long, help = "Output GeoJSON file [default: output.geojson]")]
        output_file: Option<PathBuf>,

        #[arg(long, help = "Line that ends the session [default: display]")]
        sentinel: Option<String>,

        #[arg(long, default_value = "false", help = "Skip the display step")]
        no_display: bool,
    },

    /// Parse every line of a text file into a FeatureCollection
    Process {
        #[arg(short, long, help = "Input text file, one coordinate per line")]
        input_file: PathBuf,

        #[arg(
            short,
            long,
            help = "Output GeoJSON file path [default: output/whereintheworld-{YYMMDD}.geojson]"
        )]
        output_file: Option<PathBuf>,

        #[arg(long, default_value = "false")]
        validate_only: bool,

        #[arg(long)]
        max_workers: Option<usize>,

        #[arg(short, long, default_value = "false", help = "Hide progress output")]
        quiet: bool,
    },

    /// Parse a single coordinate and print it as a GeoJSON Feature
    Parse {
        #[arg(help = "Coordinate text, e.g. \"45.9 S, 170.5 E\"")]
        coordinate: String,
    },

    /// List the points stored in a GeoJSON file
    Show {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long, default_value = "0", help = "Points to list (0 = all)")]
        sample: usize,
    },
}
