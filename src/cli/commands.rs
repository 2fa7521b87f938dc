use std::path::Path;
use tokio::io::BufReader;
use tracing::{info, warn};

use crate::analyzers::PointAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::{ProcessingError, Result};
use crate::models::{CanonicalPoint, Feature};
use crate::parsers::parse_coordinate;
use crate::processors::{BatchProcessor, Session};
use crate::settings::Settings;
use crate::utils::filename::generate_default_geojson_filename;
use crate::utils::logging::init_logging;
use crate::utils::progress::ProgressReporter;
use crate::writers::GeoJsonWriter;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let mut settings = Settings::load(cli.config.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Session {
        output_file: None,
        sentinel: None,
        no_display: false,
    });

    match command {
        Commands::Session {
            output_file,
            sentinel,
            no_display,
        } => {
            if let Some(sentinel) = sentinel {
                settings.sentinel = sentinel;
            }
            let output_file = output_file.unwrap_or_else(|| settings.output_path());

            let session = Session::new().with_sentinel(&settings.sentinel);
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();

            let (collection, report) = session.run(stdin, &mut stdout).await?;
            info!(
                "Session ended: {} accepted, {} rejected",
                report.accepted,
                report.failures.len()
            );

            let writer = GeoJsonWriter::new().with_pretty(settings.pretty);
            writer.write_collection(&collection, &output_file)?;

            if !no_display {
                display_file(&writer, &output_file, 0)?;
            }
        }

        Commands::Process {
            input_file,
            output_file,
            validate_only,
            max_workers,
            quiet,
        } => {
            let max_workers = max_workers.unwrap_or(settings.max_workers);
            let output_file = output_file.unwrap_or_else(generate_default_geojson_filename);

            println!("Processing coordinates...");
            println!("Input file: {}", input_file.display());
            println!("Workers: {}", max_workers);

            let progress = ProgressReporter::new_spinner("Processing coordinates...", quiet);

            let processor = BatchProcessor::new(max_workers).with_sentinel(&settings.sentinel);
            let (collection, report) = processor.process_file(&input_file, Some(&progress))?;

            println!("\n{}", report.summary());

            if validate_only {
                println!("Validation complete - no output file written");
                return Ok(());
            }

            println!(
                "Writing {} points to {}...",
                collection.len(),
                output_file.display()
            );
            let writer = GeoJsonWriter::new().with_pretty(settings.pretty);
            writer.write_collection(&collection, &output_file)?;

            let file_info = writer.get_file_info(&output_file)?;
            println!("\n{}", file_info.summary());

            println!("Processing complete!");
        }

        Commands::Parse { coordinate } => {
            if coordinate == settings.sentinel {
                return Err(ProcessingError::InvalidFormat(format!(
                    "'{}' is the session sentinel, not a coordinate",
                    coordinate
                )));
            }

            let parsed = parse_coordinate(&coordinate).inspect_err(|e| warn!("{}", e))?;
            info!("Matched as {}", parsed.notation);

            let writer = GeoJsonWriter::new().with_pretty(settings.pretty);
            println!("{}", writer.feature_to_string(&Feature::from(&parsed.point))?);
        }

        Commands::Show { file, sample } => {
            let writer = GeoJsonWriter::new();
            display_file(&writer, &file, sample)?;
        }
    }

    Ok(())
}

/// Print a persisted FeatureCollection: each point with its label, then statistics
fn display_file(writer: &GeoJsonWriter, path: &Path, sample: usize) -> Result<()> {
    let feature_collection = writer.read_feature_collection(path)?;
    let points: Vec<CanonicalPoint> = feature_collection.to_points()?;

    let analyzer = PointAnalyzer::new();
    let stats = analyzer.calculate_statistics(&points);

    println!("\nPoints in {}:", path.display());
    if points.is_empty() {
        println!("(none)");
    } else {
        println!("{}", analyzer.render_listing(&points, sample));
    }

    println!("\n{}", stats.summary());
    println!("\n{}", writer.get_file_info(path)?.summary());

    Ok(())
}
