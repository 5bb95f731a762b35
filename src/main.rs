//! text-insight CLI
//!
//! Reads text from a file or stdin, runs the analysis pipeline, and prints
//! the report as plain text or JSON.
//!
//! ```text
//! text-insight notas.txt --translate --lexicon
//! echo "El gato duerme." | text-insight --lexicon
//! text-insight datos.csv --config config.json --json
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use text_insight::capabilities::http::HttpTranslator;
use text_insight::capabilities::lexicon::LexiconScorer;
use text_insight::capabilities::{IdentityTranslator, NeutralScorer};
use text_insight::config::AnalyzerConfig;
use text_insight::error::AnalyzeError;
use text_insight::input::AnalysisInput;
use text_insight::pipeline::AnalyzerBuilder;
use text_insight::report;
use text_insight::types::AnalysisReport;

/// Analyze text: sentiment, subjectivity, sentences, word frequencies.
#[derive(Parser)]
#[command(name = "text-insight")]
#[command(version)]
#[command(about = "Analyze text: sentiment, subjectivity, sentences, word frequencies")]
struct Cli {
    /// Input file (.txt, .csv, .md). Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Path to a JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Translate via the HTTP endpoint before analyzing.
    #[arg(long)]
    translate: bool,

    /// Score sentiment with the built-in lexicon.
    #[arg(long)]
    lexicon: bool,

    /// Emit the report as JSON instead of plain text.
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AnalyzeError> {
    let config = load_config(cli)?;

    let validation = config.validate();
    for warning in validation.warnings() {
        tracing::warn!(field = %warning.field, "{}", warning.message);
    }
    if validation.has_errors() {
        for error in validation.errors() {
            eprintln!("config error: {}: {}", error.field, error.message);
        }
        return Err(AnalyzeError::ConfigRejected(validation.errors().count()));
    }

    let input = read_input(cli)?;
    if input.is_blank() {
        eprintln!("nothing to analyze: input is empty");
        return Ok(());
    }

    let report = analyze(cli, &config, &input);

    if cli.json {
        println!("{}", report::render_json(&report)?);
    } else {
        print!("{}", report::render_text(&report, &config));
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<AnalyzerConfig, AnalyzeError> {
    match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| AnalyzeError::Io {
                path: path.clone(),
                source,
            })?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(AnalyzerConfig::default()),
    }
}

fn read_input(cli: &Cli) -> Result<AnalysisInput, AnalyzeError> {
    match &cli.file {
        Some(path) => AnalysisInput::from_file(path),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|source| AnalyzeError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(AnalysisInput::from_text(
                String::from_utf8_lossy(&buf).into_owned(),
            ))
        }
    }
}

/// Wire up the chosen capabilities and run the pipeline.
///
/// Four small monomorphized variants instead of trait objects, matching
/// the builder's static dispatch.
fn analyze(cli: &Cli, config: &AnalyzerConfig, input: &AnalysisInput) -> AnalysisReport {
    let builder = AnalyzerBuilder::new(config.clone());
    match (cli.translate, cli.lexicon) {
        (true, true) => builder
            .translator(HttpTranslator::new(&config.source_lang, &config.target_lang))
            .scorer(LexiconScorer)
            .build()
            .analyze(input),
        (true, false) => builder
            .translator(HttpTranslator::new(&config.source_lang, &config.target_lang))
            .scorer(NeutralScorer)
            .build()
            .analyze(input),
        (false, true) => builder
            .translator(IdentityTranslator)
            .scorer(LexiconScorer)
            .build()
            .analyze(input),
        (false, false) => builder
            .translator(IdentityTranslator)
            .scorer(NeutralScorer)
            .build()
            .analyze(input),
    }
}
