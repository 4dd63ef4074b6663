//! cardio-risk entrypoint: reads one patient record (file, stdin, or form
//! defaults), assesses it, and prints a text or JSON report.

use cardio_risk::{
    config::{AppConfig, RiskConfig},
    logging::{LogEvent, StructuredLogger},
    model::ModelAssets,
    report,
    risk::{RiskEngine, TierScheme},
    AssessmentError, PatientInput,
};
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Scheme {
    Binary,
    ThreeBand,
}

#[derive(Parser)]
#[command(name = "cardio-risk")]
#[command(about = "Estimate cardiovascular disease risk from a patient record", long_about = None)]
struct Cli {
    /// Patient record as JSON; read from stdin when omitted
    input: Option<PathBuf>,

    /// Configuration file (defaults to $CARDIO_CONFIG_PATH or config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Override the configured tier scheme
    #[arg(long, value_enum)]
    scheme: Option<Scheme>,

    /// Assess the form's default record instead of reading input
    #[arg(long, conflicts_with = "input")]
    defaults: bool,
}

fn read_input(cli: &Cli) -> Result<PatientInput, Box<dyn std::error::Error + Send + Sync>> {
    if cli.defaults {
        return Ok(PatientInput::default());
    }
    let data = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(PatientInput::from_json(&data)?)
}

/// 2 for bad input, 1 for everything else.
fn exit_status(e: &AssessmentError) -> u8 {
    match e {
        AssessmentError::InputValidation { .. } => 2,
        _ => 1,
    }
}

/// A command-line scheme replaces both the configured scheme and any custom bands.
fn apply_scheme(risk: &mut RiskConfig, scheme: Scheme) {
    risk.scheme = match scheme {
        Scheme::Binary => TierScheme::Binary,
        Scheme::ThreeBand => TierScheme::ThreeBand,
    };
    risk.bands = None;
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var("CARDIO_CONFIG_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("config.json"));
    let mut config = match AppConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    StructuredLogger::init(config.log.json, &config.log.level);
    info!(config = %config_path.display(), "cardio-risk starting");

    if let Some(scheme) = cli.scheme {
        apply_scheme(&mut config.risk, scheme);
    }

    let assets = ModelAssets::load(&config.model)?;
    let engine = RiskEngine::from_config(&config, assets)?;

    let input = match read_input(&cli) {
        Ok(input) => input,
        Err(e) => {
            error!(error = %e, "could not read patient record");
            eprintln!("Could not read patient record: {e}");
            return Ok(ExitCode::from(2));
        }
    };

    let mut stdout = std::io::stdout();
    match engine.assess(&input) {
        Ok(assessment) => {
            match cli.format {
                Format::Text => print!("{}", report::render(&assessment)),
                Format::Json => StructuredLogger::emit_json(&assessment, &mut stdout)?,
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            match cli.format {
                Format::Text => eprintln!("{}", report::render_error(&e)),
                Format::Json => StructuredLogger::emit_json(&LogEvent::failure(&e), &mut stdout)?,
            }
            Ok(ExitCode::from(exit_status(&e)))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "cardio-risk failed");
            eprintln!("cardio-risk: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardio_risk::risk::{Band, RiskTier, TierTable};

    #[test]
    fn exit_codes_by_error_kind() {
        assert_eq!(
            exit_status(&AssessmentError::invalid("age", "must be in [18, 100], got 12")),
            2
        );
        for e in [
            AssessmentError::Configuration("prediction model is not loaded".into()),
            AssessmentError::Scaling("shape".into()),
            AssessmentError::Prediction("boom".into()),
        ] {
            assert_eq!(exit_status(&e), 1);
        }
    }

    #[test]
    fn scheme_flag_replaces_custom_bands() {
        let mut risk = RiskConfig {
            scheme: TierScheme::ThreeBand,
            bands: Some(vec![Band::new(0.0, RiskTier::Low), Band::new(0.9, RiskTier::High)]),
        };
        apply_scheme(&mut risk, Scheme::Binary);
        assert_eq!(risk.scheme, TierScheme::Binary);
        assert!(risk.bands.is_none());
        assert_eq!(TierTable::from_config(&risk).unwrap().tier(0.5), RiskTier::High);

        apply_scheme(&mut risk, Scheme::ThreeBand);
        assert_eq!(TierTable::from_config(&risk).unwrap().tier(0.5), RiskTier::Moderate);
    }

    #[test]
    fn defaults_flag_reads_form_defaults() {
        let cli = Cli::try_parse_from(["cardio-risk", "--defaults", "--scheme", "three-band"]).unwrap();
        assert_eq!(read_input(&cli).unwrap(), PatientInput::default());
        assert!(Cli::try_parse_from(["cardio-risk", "--defaults", "patient.json"]).is_err());
    }

    #[test]
    fn unreadable_input_file_is_an_error() {
        let cli = Cli::try_parse_from(["cardio-risk", "nonexistent-patient.json"]).unwrap();
        assert!(read_input(&cli).is_err());
    }

    #[test]
    fn input_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patient.json");
        let mut patient = PatientInput::default();
        patient.age = 12;
        std::fs::write(&path, serde_json::to_string(&patient).unwrap()).unwrap();
        let cli = Cli::try_parse_from([std::ffi::OsStr::new("cardio-risk"), path.as_os_str()]).unwrap();
        assert_eq!(read_input(&cli).unwrap().age, 12);
    }
}
