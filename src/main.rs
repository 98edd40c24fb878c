use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use cipher_tool::analyzer::{self, FrequencyReport};
use cipher_tool::cipher::{self, CipherScheme, Direction};
use cipher_tool::config::{load_settings, Settings};
use cipher_tool::errors::AppError;
use cipher_tool::logger;
use cipher_tool::metrics::Metrics;

#[derive(Parser)]
#[command(name = "cipher-tool", version)]
#[command(about = "Classical cipher transforms and letter-frequency analysis")]
struct Cli {
    /// Optional JSON settings file
    #[arg(long)]
    settings: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemeArg {
    Shift,
    Keyword,
    Base64,
    Hex,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text under a cipher scheme
    Encode {
        #[arg(short, long, value_enum)]
        scheme: SchemeArg,
        #[arg(long)]
        shift: Option<i32>,
        #[arg(short, long)]
        key: Option<String>,
        #[arg(short, long)]
        text: Option<String>,
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Decode text under a cipher scheme
    Decode {
        #[arg(short, long, value_enum)]
        scheme: SchemeArg,
        #[arg(long)]
        shift: Option<i32>,
        #[arg(short, long)]
        key: Option<String>,
        #[arg(short, long)]
        text: Option<String>,
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Letter-frequency statistics and plaintext/ciphertext classification
    Analyze {
        #[arg(short, long)]
        text: Option<String>,
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,
        #[arg(long)]
        threshold: Option<f64>,
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let Cli { settings, command } = cli;

    let registry = prometheus::Registry::new();
    let metrics = Metrics::new(&registry);

    match command {
        Commands::Encode {
            scheme,
            shift,
            key,
            text,
            input,
            output,
            json,
        } => {
            let settings = load_settings(settings.as_deref(), shift, None)?;
            let sample = read_sample(text, input)?;
            let scheme = build_scheme(scheme, key, &settings);
            info!("encoding {} code points", sample.chars().count());
            let result = cipher::transform(&sample, &scheme, Direction::Encode)?;
            metrics.transform_total.inc();
            emit(&result, output.as_deref(), json)?;
        }
        Commands::Decode {
            scheme,
            shift,
            key,
            text,
            input,
            output,
            json,
        } => {
            let settings = load_settings(settings.as_deref(), shift, None)?;
            let sample = read_sample(text, input)?;
            let scheme = build_scheme(scheme, key, &settings);
            info!("decoding {} code points", sample.chars().count());
            let result = cipher::transform(&sample, &scheme, Direction::Decode)?;
            metrics.transform_total.inc();
            emit(&result, output.as_deref(), json)?;
        }
        Commands::Analyze {
            text,
            input,
            threshold,
            json,
        } => {
            let settings = load_settings(settings.as_deref(), None, threshold)?;
            let sample = read_sample(text, input)?;
            let report = analyzer::analyze_with_threshold(&sample, settings.ic_threshold);
            metrics.analyze_total.inc();
            if json {
                let rendered = serde_json::to_string_pretty(&report)
                    .map_err(|e| AppError::Other(e.to_string()))?;
                println!("{}", rendered);
            } else {
                print_report(&report);
            }
        }
    }
    Ok(())
}

fn build_scheme(arg: SchemeArg, key: Option<String>, settings: &Settings) -> CipherScheme {
    match arg {
        // --shift already took precedence inside the settings layering
        SchemeArg::Shift => CipherScheme::Shift {
            shift: settings.default_shift,
        },
        // A missing key becomes the empty key, rejected by the engine.
        SchemeArg::Keyword => CipherScheme::Keyword {
            key: key.unwrap_or_default(),
        },
        SchemeArg::Base64 => CipherScheme::Base64,
        SchemeArg::Hex => CipherScheme::Hex,
    }
}

fn read_sample(text: Option<String>, input: Option<PathBuf>) -> Result<String, AppError> {
    if let Some(t) = text {
        return Ok(t);
    }
    if let Some(path) = input {
        info!("reading input from {}", path.display());
        return Ok(fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn emit(result: &str, output: Option<&Path>, json: bool) -> Result<(), AppError> {
    let rendered = if json {
        serde_json::to_string_pretty(&serde_json::json!({ "output": result }))
            .map_err(|e| AppError::Other(e.to_string()))?
    } else {
        result.to_string()
    };
    match output {
        Some(path) => {
            fs::write(path, &rendered)?;
            info!("wrote result to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn print_report(report: &FrequencyReport) {
    println!("total length:      {}", report.total_length);
    println!("letters:           {}", report.letter_count);
    match report.coincidence_index {
        Some(ic) => println!("coincidence index: {:.4}", ic),
        None => println!("coincidence index: n/a"),
    }
    println!("classification:    {:?}", report.classification);
    if !report.top_letters.is_empty() {
        println!("top letters:");
        for (letter, count) in &report.top_letters {
            println!("  {}  {}", letter, count);
        }
    }
}
