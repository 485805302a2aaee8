//! CLI definition and command dispatch for the `dt` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dt_common::{Error, OutputFormat, Result};
use dt_config::{
    resolve_model, resolve_registry, ConfigPaths, DiseaseRegistry, SymptomModel, ValidationError,
};
use dt_math::round_dp;

use crate::api::{DiseaseResponse, PredictResponse, PresetResponse, RecommendationResponse};
use crate::inference::{compute_posterior, resolve_preset, DiagnosticQuery, TestOutcome};
use crate::predict;
use crate::recommend::{self, Language};
use crate::server::{self, AppState, ServerConfig};
use crate::session::LastCalculation;

#[derive(Parser, Debug)]
#[command(name = "dt", version, about = "Bayesian diagnostic probability engine")]
pub struct Cli {
    /// Disease registry JSON file (default: DT_REGISTRY, XDG data dir, embedded)
    #[arg(long, global = true, value_name = "PATH")]
    pub registry: Option<PathBuf>,

    /// Symptom model JSON file (default: DT_SYMPTOM_MODEL, XDG data dir, embedded)
    #[arg(long, global = true, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Emit logs as line-delimited JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Output format for command results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the JSON HTTP service
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
        /// Port to listen on
        #[arg(long, default_value_t = 8000, env = "DT_PORT")]
        port: u16,
    },
    /// Compute a posterior from explicit test characteristics
    Calc {
        /// P(disease) before the test
        #[arg(long)]
        prior: f64,
        /// P(test positive | disease)
        #[arg(long)]
        sensitivity: f64,
        /// P(test positive | no disease)
        #[arg(long = "false-positive")]
        false_positive: f64,
        /// Observed test result
        #[arg(long = "test-result", value_enum, default_value_t = TestOutcome::Positive)]
        test_result: TestOutcome,
        /// Disease label for the recommendation text
        #[arg(long = "disease-name")]
        disease_name: Option<String>,
        /// Also generate guidance for the result
        #[arg(long)]
        recommend: bool,
        /// Guidance language (english, spanish, french)
        #[arg(long, default_value = "english")]
        language: String,
    },
    /// Compute a posterior for a registry preset (positive test assumed)
    Preset {
        /// Disease name, matched case-insensitively
        disease: String,
        /// Also generate guidance for the result
        #[arg(long)]
        recommend: bool,
        /// Guidance language (english, spanish, french)
        #[arg(long, default_value = "english")]
        language: String,
    },
    /// List registry presets
    Diseases,
    /// Score symptoms against the model (one disease, or all when omitted)
    Predict {
        /// Model disease key, e.g. heart_disease
        #[arg(long)]
        disease: Option<String>,
        /// Reported symptom key; repeatable
        #[arg(long = "symptom", value_name = "KEY")]
        symptoms: Vec<String>,
    },
}

fn load_registry(paths: &ConfigPaths) -> Result<DiseaseRegistry> {
    Ok(resolve_registry(paths)?)
}

fn load_model(paths: &ConfigPaths) -> Result<SymptomModel> {
    resolve_model(paths).map_err(|e| match e {
        ValidationError::IoError(msg) => Error::Config(msg),
        other => Error::InvalidModel(other.to_string()),
    })
}

/// Execute the parsed command.
pub fn run(cli: Cli) -> Result<()> {
    let paths = ConfigPaths {
        registry: cli.registry.clone(),
        model: cli.model.clone(),
    };
    let format = cli.format;

    match cli.command {
        Command::Serve { bind, port } => {
            let state = AppState {
                registry: load_registry(&paths)?,
                model: load_model(&paths)?,
            };
            server::serve(&ServerConfig { bind, port }, state)
        }
        Command::Calc {
            prior,
            sensitivity,
            false_positive,
            test_result,
            disease_name,
            recommend,
            language,
        } => {
            let query = DiagnosticQuery {
                prior,
                sensitivity,
                false_positive,
                outcome: test_result,
            };
            let outcome = compute_posterior(&query)?;
            let response = DiseaseResponse {
                test_result: outcome.outcome.to_string(),
                p_d_given_result: round_dp(outcome.posterior, 4),
            };
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string(&response)?),
                OutputFormat::Text => println!(
                    "Probability of disease given {} test: {}",
                    response.test_result, response.p_d_given_result
                ),
            }
            if recommend {
                let last = LastCalculation::from_outcome(disease_name, &outcome);
                print_recommendation(&last, &language, format)?;
            }
            Ok(())
        }
        Command::Preset {
            disease,
            recommend,
            language,
        } => {
            let registry = load_registry(&paths)?;
            let canonical = registry
                .lookup(&disease)
                .map(|entry| entry.name.clone())
                .ok_or_else(|| Error::UnknownDisease {
                    name: disease.clone(),
                })?;
            let query = resolve_preset(&registry, &disease)?;
            let outcome = compute_posterior(&query)?;
            let response = PresetResponse {
                prior: outcome.prior,
                p_d_given_pos: round_dp(outcome.posterior, 4),
            };
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string(&response)?),
                OutputFormat::Text => println!(
                    "Probability of disease given positive test for {}: {}",
                    canonical, response.p_d_given_pos
                ),
            }
            if recommend {
                let last = LastCalculation::from_outcome(Some(canonical), &outcome);
                print_recommendation(&last, &language, format)?;
            }
            Ok(())
        }
        Command::Diseases => {
            let registry = load_registry(&paths)?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&registry.diseases)?)
                }
                OutputFormat::Text => {
                    for entry in &registry.diseases {
                        println!(
                            "{} (prevalence {:.4}, sensitivity {:.4}, false positive {:.4})",
                            entry.name, entry.prevalence, entry.sensitivity, entry.false_positive
                        );
                    }
                }
            }
            Ok(())
        }
        Command::Predict { disease, symptoms } => {
            let model = load_model(&paths)?;
            match disease {
                Some(disease) => {
                    let prediction = predict::score(&model, &disease, &symptoms)?;
                    let posterior = predict::bayesian_posterior(&prediction)?;
                    let response = PredictResponse::from_prediction(&prediction, posterior);
                    match format {
                        OutputFormat::Json => {
                            println!("{}", serde_json::to_string_pretty(&response)?)
                        }
                        OutputFormat::Text => {
                            println!(
                                "{}: raw {:.2}%, posterior {:.2}% ({}), {}/{} symptoms matched",
                                response.disease,
                                response.ml_prediction.raw_probability,
                                response.bayesian_analysis.posterior,
                                response.risk_assessment.level,
                                prediction.symptoms_matched,
                                prediction.total_symptoms,
                            );
                        }
                    }
                }
                None => {
                    let predictions = predict::score_all(&model, &symptoms)?;
                    for prediction in &predictions {
                        let posterior = predict::bayesian_posterior(prediction)?;
                        match format {
                            OutputFormat::Json => {
                                let entry = crate::api::DifferentialEntry::from_prediction(
                                    prediction, posterior,
                                );
                                println!("{}", serde_json::to_string(&entry)?);
                            }
                            OutputFormat::Text => {
                                println!(
                                    "{}: raw {:.2}%, posterior {:.2}%",
                                    prediction.display_name,
                                    prediction.raw_probability * 100.0,
                                    posterior * 100.0,
                                );
                            }
                        }
                    }
                }
            }
            Ok(())
        }
    }
}

fn print_recommendation(last: &LastCalculation, language: &str, format: OutputFormat) -> Result<()> {
    let input = last.recommendation_input(Language::parse(language));
    let text = recommend::generate(&input)?;
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(&RecommendationResponse::ok(text))?
        ),
        OutputFormat::Text => println!("\n{}", text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_calc_flags() {
        let cli = Cli::parse_from([
            "dt",
            "calc",
            "--prior",
            "0.01",
            "--sensitivity",
            "0.99",
            "--false-positive",
            "0.05",
            "--test-result",
            "negative",
        ]);
        match cli.command {
            Command::Calc {
                prior,
                sensitivity,
                false_positive,
                test_result,
                ..
            } => {
                assert_eq!(prior, 0.01);
                assert_eq!(sensitivity, 0.99);
                assert_eq!(false_positive, 0.05);
                assert_eq!(test_result, TestOutcome::Negative);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_result_defaults_to_positive() {
        let cli = Cli::parse_from([
            "dt",
            "calc",
            "--prior",
            "0.5",
            "--sensitivity",
            "0.9",
            "--false-positive",
            "0.1",
        ]);
        match cli.command {
            Command::Calc { test_result, .. } => assert_eq!(test_result, TestOutcome::Positive),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_global_format_flag() {
        let cli = Cli::parse_from(["dt", "diseases", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn parses_repeated_symptoms() {
        let cli = Cli::parse_from([
            "dt",
            "predict",
            "--disease",
            "covid19",
            "--symptom",
            "fever",
            "--symptom",
            "dry_cough",
        ]);
        match cli.command {
            Command::Predict { disease, symptoms } => {
                assert_eq!(disease.as_deref(), Some("covid19"));
                assert_eq!(symptoms, vec!["fever", "dry_cough"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
