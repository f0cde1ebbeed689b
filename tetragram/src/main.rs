use clap::Parser;
use std::path::Path;
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use vigenere_analysis::{FrequencyModel, Result, alphabet};

/// Command-line arguments for the quadgram model builder.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Training text in Swedish; several files are concatenated
    #[arg(short, long, required = true, num_args = 1.., help = "Path(s) to the corpus files")]
    corpus: Vec<String>,

    /// Where the model is written
    #[arg(short, long, default_value = "tetrafrequencies.bin", help = "Path to the output model file")]
    output: String,
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
    let model = build_model(&cli.corpus)?;

    if model.observed() == 0 {
        warn!("corpus has fewer than four letters, the model is empty");
    }

    model.save(&cli.output)?;
    println!("Tetrafrequencies saved to {}", cli.output);
    Ok(())
}

/// Normalizes and joins the corpus files, then counts their quadgrams.
fn build_model<P: AsRef<Path>>(paths: &[P]) -> Result<FrequencyModel> {
    let mut corpus: Vec<u8> = Vec::new();

    for path in paths {
        let text = std::fs::read_to_string(path)?;
        let symbols = alphabet::normalize(&text);
        info!(path = %path.as_ref().display(), letters = symbols.len(), "read corpus file");
        corpus.extend(symbols);
    }

    let model = FrequencyModel::from_corpus(&corpus)?;
    info!(letters = corpus.len(), observed = model.observed(), "counted quadgrams");
    Ok(model)
}
