// SPDX-License-Identifier: MPL-2.0
use cs_job_finder::app::{self, Flags};
use cs_job_finder::domain::geo::Position;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
CS Job Finder - scout software companies near you

USAGE:
  cs_job_finder [OPTIONS]

OPTIONS:
  --lang <ID>           Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --lat <DEG>           Report this latitude instead of locating
  --lng <DEG>           Report this longitude instead of locating
  --no-geolocation      Start without any location capability
  --auto-locate         Start locating as soon as the window opens
  --no-map              Never fetch map tiles
  -h, --help            Print this help

ENVIRONMENT:
  CS_JOB_FINDER_CONFIG_DIR   Directory holding settings.toml
  RUST_LOG                   Log filter (default: info)
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, String> {
    let lang = args
        .opt_value_from_str("--lang")
        .map_err(|e| e.to_string())?;
    let config_dir = args
        .opt_value_from_str("--config-dir")
        .map_err(|e| e.to_string())?;
    let latitude: Option<f64> = args
        .opt_value_from_str("--lat")
        .map_err(|e| e.to_string())?;
    let longitude: Option<f64> = args
        .opt_value_from_str("--lng")
        .map_err(|e| e.to_string())?;
    let no_geolocation = args.contains("--no-geolocation");
    let auto_locate = args.contains("--auto-locate");
    let no_map = args.contains("--no-map");

    let fixed_position = match (latitude, longitude) {
        (Some(lat), Some(lng)) => {
            Some(Position::validated(lat, lng).map_err(|e| e.to_string())?)
        }
        (None, None) => None,
        _ => return Err("--lat and --lng must be given together".to_string()),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(format!("unexpected arguments: {remaining:?}"));
    }

    Ok(Flags {
        lang,
        config_dir,
        fixed_position,
        no_geolocation,
        auto_locate,
        no_map,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(message) => {
            eprintln!("error: {message}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
