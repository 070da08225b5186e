use blast_effects_core::{Scenario, ScenarioError};
use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Blast effects demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "blast-effects-demo")]
#[command(about = "Nuclear detonation effect radii demo", long_about = None)]
struct Args {
    /// Yield in kilotons
    #[arg(short = 'y', long = "yield", default_value_t = 1000.0)]
    yield_kt: f64,

    /// Peak overpressure in psi for the blast radius
    #[arg(short, long, default_value_t = 5.0)]
    overpressure: f64,

    /// Latitude in degrees
    #[arg(long, default_value_t = 40.7128, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude in degrees
    #[arg(long, default_value_t = -74.006, allow_negative_numbers = true)]
    lon: f64,

    /// Wind speed
    #[arg(short, long, default_value_t = 15.0)]
    wind_speed: f64,

    /// Wind direction in degrees (0=North, 90=East)
    #[arg(long, default_value_t = 270.0, allow_negative_numbers = true)]
    wind_direction: f64,

    /// Overpressures (psi) for the blast radius table
    #[arg(long, value_delimiter = ',', default_values_t = [10.0, 5.0, 2.0, 1.0])]
    overpressures: Vec<f64>,

    /// Yields (kt) for the thermal radius table
    #[arg(long, value_delimiter = ',', default_values_t = [500.0, 1000.0, 2000.0])]
    yields: Vec<f64>,

    /// Leave the overpressure unset
    #[arg(long)]
    no_overpressure: bool,

    /// Leave latitude and longitude unset
    #[arg(long)]
    no_location: bool,

    /// Leave wind speed and direction unset
    #[arg(long)]
    no_wind: bool,

    /// Reject out-of-domain parameters before calculating
    #[arg(long)]
    strict: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn scenario(&self) -> Scenario {
        let mut scenario = Scenario::new(self.yield_kt);
        if !self.no_overpressure {
            scenario = scenario.with_overpressure(self.overpressure);
        }
        if !self.no_location {
            scenario = scenario.with_location(self.lat, self.lon);
        }
        if !self.no_wind {
            scenario = scenario.with_wind(self.wind_speed, self.wind_direction);
        }
        scenario
    }
}

/// One request's outcome in the JSON report
#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Outcome<T: Serialize> {
    Ok(T),
    Error { code: &'static str, message: String },
}

impl<T: Serialize> From<Result<T, ScenarioError>> for Outcome<T> {
    fn from(result: Result<T, ScenarioError>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Error {
                code: error.code(),
                message: error.to_string(),
            },
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    scenario: &'a Scenario,
    blast_radius_km: Outcome<f64>,
    thermal_radius_km: f64,
    fallout: Outcome<blast_effects_core::FalloutEstimate>,
    blast_radius_intervals: Outcome<blast_effects_core::IntervalRadii>,
    thermal_radius_intervals: Outcome<blast_effects_core::IntervalRadii>,
    location: Outcome<blast_effects_core::Location>,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn display<T: std::fmt::Display>(result: &Result<T, ScenarioError>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(error) => error.to_string(),
    }
}

fn print_text(args: &Args, scenario: &Scenario) {
    println!("=== Blast Effects Demo ===\n");
    println!("Yield: {}", scenario.yield_kt());

    let blast = scenario.request_blast_radius();
    match scenario.overpressure() {
        Some(overpressure) => println!("Blast Radius ({}): {}", overpressure, display(&blast)),
        None => println!("Blast Radius: {}", display(&blast)),
    }

    println!("Thermal Radiation Radius: {}", scenario.request_thermal_radius());

    match scenario.request_fallout() {
        Ok(fallout) => println!(
            "Fallout Information: area {:.1}, wind direction {}°, {}",
            fallout.fallout_area, fallout.wind_direction, fallout.description
        ),
        Err(error) => println!("Fallout Information: {error}"),
    }

    println!("Blast Radius at Intervals:");
    match scenario.request_blast_radius_at_intervals(&args.overpressures) {
        Ok(radii) => {
            for (overpressure, radius) in &radii {
                println!("  {:>8} psi: {:.3} km", overpressure, radius);
            }
        }
        Err(error) => println!("  {error}"),
    }

    println!("Thermal Radiation at Intervals:");
    match scenario.request_thermal_radius_at_intervals(&args.yields) {
        Ok(radii) => {
            for (yield_kt, radius) in &radii {
                println!("  {:>8} kt: {:.3} km", yield_kt, radius);
            }
        }
        Err(error) => println!("  {error}"),
    }

    match scenario.get_location() {
        Ok(location) => println!("Location: lat {}, lon {}", location.lat, location.lon),
        Err(error) => println!("Location: {error}"),
    }
}

fn print_json(args: &Args, scenario: &Scenario) -> Result<(), serde_json::Error> {
    let report = Report {
        scenario,
        blast_radius_km: scenario.request_blast_radius().map(|r| r.value()).into(),
        thermal_radius_km: scenario.request_thermal_radius().value(),
        fallout: scenario.request_fallout().into(),
        blast_radius_intervals: scenario
            .request_blast_radius_at_intervals(&args.overpressures)
            .into(),
        thermal_radius_intervals: scenario
            .request_thermal_radius_at_intervals(&args.yields)
            .into(),
        location: scenario.get_location().into(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let scenario = args.scenario();

    if args.strict {
        if let Err(error) = scenario.validate() {
            eprintln!("error: {error}");
            return ExitCode::FAILURE;
        }
    }

    if args.json {
        if let Err(error) = print_json(&args, &scenario) {
            eprintln!("error: failed to write report: {error}");
            return ExitCode::FAILURE;
        }
    } else {
        print_text(&args, &scenario);
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_build_sample_scenario() {
        let args = Args::parse_from(["demo-headless"]);
        let expected = Scenario::new(1000.0)
            .with_overpressure(5.0)
            .with_location(40.7128, -74.006)
            .with_wind(15.0, 270.0);
        assert_eq!(args.scenario(), expected);
        assert_eq!(args.overpressures, vec![10.0, 5.0, 2.0, 1.0]);
        assert_eq!(args.yields, vec![500.0, 1000.0, 2000.0]);
    }

    #[test]
    fn test_omit_flags_drop_fields() {
        let args = Args::parse_from([
            "demo-headless",
            "--no-overpressure",
            "--no-location",
            "--no-wind",
        ]);
        let scenario = args.scenario();
        assert_eq!(
            scenario.request_blast_radius(),
            Err(ScenarioError::MissingOverpressure)
        );
        assert_eq!(scenario.request_fallout(), Err(ScenarioError::MissingWind));
        assert_eq!(scenario.get_location(), Err(ScenarioError::MissingLocation));
    }

    #[test]
    fn test_interval_lists_parse() {
        let args = Args::parse_from(["demo-headless", "--overpressures", "20,3", "--lon", "-0.1"]);
        assert_eq!(args.overpressures, vec![20.0, 3.0]);
        assert_eq!(args.lon, -0.1);
    }

    #[test]
    fn test_negative_wind_direction_passes_through() {
        let args = Args::parse_from(["demo-headless", "--wind-direction", "-90"]);
        assert_eq!(args.wind_direction, -90.0);
        let fallout = args.scenario().request_fallout().unwrap();
        assert_eq!(fallout.wind_direction, -90.0);
    }

    #[test]
    fn test_error_outcome_serializes_code_and_message() {
        let outcome: Outcome<f64> = Err(ScenarioError::MissingLocation).into();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["error"]["code"], "missing_location");
        assert_eq!(json["error"]["message"], "No location data available.");
    }
}
