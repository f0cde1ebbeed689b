use clap::{Args, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use vigenere_analysis::config::DEFAULT_EXHAUSTIVE_MAX_PERIOD;
use vigenere_analysis::fitness::DEFAULT_UNSEEN_PENALTY;
use vigenere_analysis::key_length::DEFAULT_IC_THRESHOLD;
use vigenere_analysis::search::exhaustive::DEFAULT_EARLY_EXIT_SCORE;
use vigenere_analysis::search::stochastic::DEFAULT_STOCHASTIC_THRESHOLD;
use vigenere_analysis::{
    AnalysisConfig, FrequencyModel, KeyLengthEstimator, Result, Strategy, alphabet, crack,
};

/// Command-line arguments for the Vigenère decryptor program.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Quadgram model written by the tetragram tool
    #[arg(short, long, default_value = "tetrafrequencies.bin", help = "Path to the quadgram frequency model")]
    model: String,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: Option<String>,

    /// Seed for the stochastic search, random when omitted
    #[arg(short, long, help = "Seed for reproducible stochastic search")]
    seed: Option<u64>,

    /// Print the average IC of the first N trial periods
    #[arg(long, value_name = "N", help = "Print the IC profile of the first N trial periods")]
    show_ic: Option<usize>,

    #[command(flatten)]
    tuning: TuningArgs,
}

/// Thresholds of the analysis, defaults tuned on Swedish text.
#[derive(Args, Debug, Clone)]
struct TuningArgs {
    #[arg(long, default_value_t = DEFAULT_UNSEEN_PENALTY, allow_negative_numbers = true)]
    unseen_penalty: f64,

    #[arg(long, default_value_t = DEFAULT_IC_THRESHOLD)]
    ic_threshold: f64,

    /// Longest trial period (defaults to the text length)
    #[arg(long)]
    max_period: Option<usize>,

    /// Longest key searched exhaustively
    #[arg(long, default_value_t = DEFAULT_EXHAUSTIVE_MAX_PERIOD)]
    exhaustive_max_period: usize,

    #[arg(long, default_value_t = DEFAULT_EARLY_EXIT_SCORE, allow_negative_numbers = true)]
    early_exit_score: f64,

    /// Enumerate every key instead of stopping at the first good one
    #[arg(long, default_value_t = false)]
    no_early_exit: bool,

    #[arg(long, default_value_t = DEFAULT_STOCHASTIC_THRESHOLD, allow_negative_numbers = true)]
    stochastic_threshold: f64,

    /// Round cap for the stochastic search, 0 for no cap
    #[arg(long, default_value_t = 100_000)]
    max_rounds: u64,

    /// Wall-clock cap for the stochastic search in seconds
    #[arg(long)]
    time_limit: Option<u64>,
}

impl From<&TuningArgs> for AnalysisConfig {
    fn from(args: &TuningArgs) -> Self {
        Self {
            unseen_penalty: args.unseen_penalty,
            ic_threshold: args.ic_threshold,
            max_period: args.max_period,
            exhaustive_max_period: args.exhaustive_max_period,
            early_exit_score: (!args.no_early_exit).then_some(args.early_exit_score),
            stochastic_threshold: args.stochastic_threshold,
            max_rounds: (args.max_rounds > 0).then_some(args.max_rounds),
            time_limit: args.time_limit.map(Duration::from_secs),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input: String = std::fs::read_to_string(&cli.file)?;
    let ciphertext: Vec<u8> = alphabet::normalize(&input);
    let model = FrequencyModel::load(&cli.model)?;
    let config = AnalysisConfig::from(&cli.tuning);

    if let Some(periods) = cli.show_ic {
        let profile = KeyLengthEstimator::new(config.ic_threshold)
            .with_max_period(Some(periods))
            .profile(&ciphertext);
        for (period, ic) in profile {
            println!("{:>4}  {:.3}", period, ic);
        }
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let start = Instant::now();
    let report = crack(&ciphertext, &model, &config, &mut rng)?;
    let elapsed = start.elapsed();

    let outcome = &report.outcome;
    if report.strategy == Strategy::Stochastic && !outcome.converged() {
        warn!(stop = ?outcome.stop, score = outcome.score, "search stopped before reaching the threshold");
    }

    let key = alphabet::render(&outcome.key)?;
    let plaintext = alphabet::render(&outcome.plaintext)?;

    println!("Found key length: {}", report.period);
    println!("The key is: {}", key);
    println!("Decrypted text:");
    println!("{}", plaintext);
    println!("Fitness: {:.3}", outcome.score);
    println!("Time to crack: {:.3?}", elapsed);

    if let Some(path) = &cli.output {
        std::fs::write(path, &plaintext)?;
        info!(output = %path, "decrypted text written");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_library() {
        let cli = Cli::try_parse_from(["vigenere_decrypter", "-f", "secret.txt"]).unwrap();
        let config = AnalysisConfig::from(&cli.tuning);

        assert_eq!(cli.model, "tetrafrequencies.bin");
        assert_eq!(
            config,
            AnalysisConfig {
                max_rounds: Some(100_000),
                ..AnalysisConfig::default()
            }
        );
    }

    #[test]
    fn test_negative_thresholds() {
        let cli = Cli::try_parse_from([
            "vigenere_decrypter",
            "-f",
            "secret.txt",
            "--unseen-penalty",
            "-500",
            "--stochastic-threshold",
            "-80.5",
            "--no-early-exit",
            "--max-rounds",
            "0",
            "--time-limit",
            "30",
        ])
        .unwrap();
        let config = AnalysisConfig::from(&cli.tuning);

        assert_eq!(config.unseen_penalty, -500.0);
        assert_eq!(config.stochastic_threshold, -80.5);
        assert_eq!(config.early_exit_score, None);
        assert_eq!(config.max_rounds, None);
        assert_eq!(config.time_limit, Some(Duration::from_secs(30)));
    }
}
