use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use rect_coords::config::{ENV_HEIGHT, ENV_ORIGIN_X, ENV_ORIGIN_Y, ENV_WIDTH};
use rect_coords::{write_report, Coordinate, OutputFormat, ShapeConfig};
use std::fmt::Display;
use std::io;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{debug, info, Level};

#[derive(Parser, Debug)]
#[command(name = "rect-coords", version, about = "Print a rectangle's area and end-point coordinates")]
struct Cli {
    /// Origin x coordinate [env: RECT_ORIGIN_X] [default: 50]
    #[arg(long, value_name = "number", allow_negative_numbers = true)]
    x: Option<String>,

    /// Origin y coordinate [env: RECT_ORIGIN_Y] [default: 100]
    #[arg(long, value_name = "number", allow_negative_numbers = true)]
    y: Option<String>,

    /// Rectangle width [env: RECT_WIDTH] [default: 90]
    #[arg(long, value_name = "number", allow_negative_numbers = true)]
    width: Option<String>,

    /// Rectangle height [env: RECT_HEIGHT] [default: 10]
    #[arg(long, value_name = "number", allow_negative_numbers = true)]
    height: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Use floating point coordinates instead of integers
    #[arg(long)]
    real: bool,

    /// Verbose output on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn value_for(&self, key: &str) -> Option<String> {
        let value = match key {
            ENV_ORIGIN_X => &self.x,
            ENV_ORIGIN_Y => &self.y,
            ENV_WIDTH => &self.width,
            ENV_HEIGHT => &self.height,
            _ => &None,
        };
        value.clone()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = if cli.real {
        run::<f64>(&cli)
    } else {
        run::<i64>(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run<T>(cli: &Cli) -> Result<()>
where
    T: Coordinate + FromStr,
    T::Err: Display,
{
    let config = ShapeConfig::<T>::from_env_with(|key| cli.value_for(key))
        .context("Failed to resolve rectangle inputs")?;
    debug!(?config, "resolved shape config");

    let rect = config.build_rectangle();
    info!(format = ?cli.format, "rendering rectangle");

    let mut out = io::stdout().lock();
    write_report(&rect, cli.format, &mut out)
}
