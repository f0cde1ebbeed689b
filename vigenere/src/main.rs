use clap::{Parser, ValueEnum};
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vigenere_analysis::{alphabet, cipher, Direction, Result};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher", conflicts_with = "key_file", required_unless_present = "key_file")]
    key: Option<String>,

    /// File holding the key, surrounding whitespace is ignored
    #[arg(long, help = "Path to a file containing the key")]
    key_file: Option<String>,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, value_enum, default_value_t = OperationMode::Encrypt, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Lower-case the input and drop everything outside the alphabet first
    #[arg(short, long, help = "Normalize the input text before processing")]
    normalize: bool,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

impl From<OperationMode> for Direction {
    fn from(mode: OperationMode) -> Self {
        match mode {
            OperationMode::Encrypt => Direction::Encrypt,
            OperationMode::Decrypt => Direction::Decrypt,
        }
    }
}

/// Main entry point for the Vigenère cipher program.
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
    let content: String = std::fs::read_to_string(&cli.file)?;
    let key: String = read_key(cli)?;

    let text: String = if cli.normalize {
        alphabet::render(&alphabet::normalize(&content))?
    } else {
        content.trim().to_string()
    };

    let result = match Direction::from(cli.mode) {
        Direction::Encrypt => {
            info!(key = %key, "encrypting");
            cipher::encrypt_text(&text, &key)?
        }
        Direction::Decrypt => {
            info!(key = %key, "decrypting");
            cipher::decrypt_text(&text, &key)?
        }
    };

    std::fs::write(&cli.output, result)?;
    info!(output = %cli.output, "operation completed");
    Ok(())
}

/// Takes the key from `--key` or from the key file.
fn read_key(cli: &Cli) -> Result<String> {
    match (&cli.key, &cli.key_file) {
        (Some(key), _) => Ok(key.trim().to_string()),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?.trim().to_string()),
        (None, None) => Err(vigenere_analysis::VigenereError::InvalidKey),
    }
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
    fn test_key_required() {
        let result = Cli::try_parse_from(["vigenere", "-f", "in.txt", "-o", "out.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_key_and_key_file_conflict() {
        let result = Cli::try_parse_from([
            "vigenere", "-f", "in.txt", "-o", "out.txt", "-k", "abc", "--key-file", "key.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_mode_defaults_to_encrypt() {
        let cli = Cli::try_parse_from(["vigenere", "-f", "in.txt", "-o", "out.txt", "-k", "abc"]).unwrap();
        assert!(matches!(cli.mode, OperationMode::Encrypt));
        assert_eq!(read_key(&cli).unwrap(), "abc");
    }

    #[test]
    fn test_mode_maps_to_direction() {
        assert_eq!(Direction::from(OperationMode::Encrypt), Direction::Encrypt);
        assert_eq!(Direction::from(OperationMode::Decrypt), Direction::Decrypt);
    }
}
