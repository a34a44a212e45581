//! elastomer-footprints: KiCad footprint generator for elastomeric pad arrays
//!
//! Generates a `.kicad_mod` footprint file for a parameterised
//! elastomeric-connector pad array: the pad grid itself, routed traces
//! within each column, strip cut-line pads and a board outline.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use elastomer_footprints::config;
use elastomer_footprints::footprint::{FootprintAssembler, PadArrayParams};

/// Outline clearance defaults, in inches (7.5 mm and 3.5 mm).
const DEFAULT_CLEARANCE_X_IN: f64 = 7.5 / 25.4;
const DEFAULT_CLEARANCE_Y_IN: f64 = 3.5 / 25.4;

/// KiCad footprint generator for elastomeric connector pad arrays.
///
/// All dimensions are given in inches, matching the connector drawings;
/// they are converted to millimetres internally. Optional dimensions
/// default to zero, which disables the corresponding feature.
#[derive(Parser, Debug)]
#[command(name = "elastomer-footprints")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Footprint name (output file is <NAME>.kicad_mod)
    #[arg(value_name = "NAME")]
    name: String,

    /// Number of pads stacked vertically in each column
    #[arg(long, value_name = "COUNT")]
    pads_per_column: u32,

    /// Number of columns across the array
    #[arg(long, value_name = "COUNT")]
    columns: u32,

    /// Centre-to-centre pitch between columns, in inches
    #[arg(long, value_name = "INCHES")]
    pitch_x: f64,

    /// Centre-to-centre pitch between pads in a column, in inches
    #[arg(long, value_name = "INCHES")]
    pitch_y: f64,

    /// Pad width, in inches
    #[arg(long, value_name = "INCHES")]
    pad_width: f64,

    /// Pad height, in inches
    #[arg(long, value_name = "INCHES")]
    pad_height: f64,

    /// Cut-line pad width, in inches (0 disables cut lines)
    #[arg(long, value_name = "INCHES", default_value_t = 0.0)]
    cut_pad_width: f64,

    /// Cut-line pad height, in inches (0 disables cut lines)
    #[arg(long, value_name = "INCHES", default_value_t = 0.0)]
    cut_pad_height: f64,

    /// Gap between repeated groups, in inches
    #[arg(long, value_name = "INCHES", default_value_t = 0.0)]
    group_gap: f64,

    /// Number of repeated groups (0 lays out a single group)
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    groups: u32,

    /// Vertical offset of the first wrap cut line, in inches
    /// (0 selects the uniform cut-line cadence)
    #[arg(long, value_name = "INCHES", default_value_t = 0.0)]
    cut_line_y_offset: f64,

    /// Blank-fold spacing of a wrapped strip, in inches
    #[arg(long, value_name = "INCHES", default_value_t = 0.0)]
    blank_size: f64,

    /// Routed trace width, in inches
    #[arg(long, value_name = "INCHES", default_value_t = 0.004)]
    trace_width: f64,

    /// Horizontal outline clearance, in inches
    #[arg(long, value_name = "INCHES", default_value_t = DEFAULT_CLEARANCE_X_IN)]
    clearance_x: f64,

    /// Vertical outline clearance, in inches
    #[arg(long, value_name = "INCHES", default_value_t = DEFAULT_CLEARANCE_Y_IN)]
    clearance_y: f64,

    /// Directory the footprint file is written to
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    /// Builds the frozen parameter set from the CLI dimensions.
    fn to_params(&self) -> PadArrayParams {
        PadArrayParams::builder()
            .pads_per_column(self.pads_per_column)
            .column_count(self.columns)
            .pitch_x(self.pitch_x)
            .pitch_y(self.pitch_y)
            .pad_width(self.pad_width)
            .pad_height(self.pad_height)
            .cut_pad_width(self.cut_pad_width)
            .cut_pad_height(self.cut_pad_height)
            .group_gap(self.group_gap)
            .group_count(self.groups)
            .cut_line_y_offset(self.cut_line_y_offset)
            .blank_size(self.blank_size)
            .trace_width(self.trace_width)
            .clearance_x(self.clearance_x)
            .clearance_y(self.clearance_y)
            .build()
    }
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the footprint generator.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        name = %args.name,
        "Generating footprint"
    );

    let params = args.to_params();
    let plan = FootprintAssembler::new(args.name.as_str(), params).assemble();
    let footprint = plan.render(&args.name, &cfg.style);

    let out_dir = args
        .output
        .or(cfg.output_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    match footprint.save_in(&out_dir) {
        Ok(path) => {
            info!(path = %path.display(), "Footprint saved");
            println!("footprint-name: {}", args.name);
            println!("saved: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to write footprint");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn cli_dimensions_reach_the_params_in_millimetres() {
        let args = Args::parse_from([
            "elastomer-footprints",
            "test-pads",
            "--pads-per-column",
            "10",
            "--columns",
            "5",
            "--pitch-x",
            "0.008",
            "--pitch-y",
            "0.275",
            "--pad-width",
            "0.004",
            "--pad-height",
            "0.15",
        ]);
        let params = args.to_params();
        assert_eq!(params.pads_per_column, 10);
        assert_eq!(params.column_count, 5);
        assert!((params.pitch_x - 0.2032).abs() < 1e-9);
        assert!((params.pitch_y - 6.985).abs() < 1e-9);
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(get_log_level(3, true, "warn"), Level::ERROR);
    }

    #[test]
    fn config_level_applies_without_flags() {
        assert_eq!(get_log_level(0, false, "debug"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, "bogus"), Level::WARN);
    }
}
