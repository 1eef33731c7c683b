//! bch11 - decode GF(11) BCH codewords interactively or from the command line

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;

use bch11_tools::commands::{parse_word_args, run_decode, run_syndrome, show_info};
use bch11_tools::common::{init_logging, load_shell_config};
use bch11_tools::{OutputFormat, Shell};

/// Double-error-correcting BCH decoder over GF(11)
#[derive(Parser)]
#[command(name = "bch11")]
#[command(about = "Decode 10-symbol BCH codewords over GF(11)")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Shell configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive decode loop (default)
    Shell(OutputArgs),
    /// Decode a single codeword
    Decode(WordArgs),
    /// Show syndromes and locator coefficients of a codeword
    Syndrome(SyndromeArgs),
    /// Show code parameters
    Info,
}

/// Output options
#[derive(Args, Clone, Default)]
struct OutputArgs {
    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Print the syndromes with each result
    #[arg(long)]
    show_syndromes: bool,
}

/// A codeword given on the command line
#[derive(Args, Clone)]
struct WordArgs {
    #[command(flatten)]
    output: OutputArgs,

    /// Codeword symbols, e.g. `3745195876` or `3 7 4 5 1 9 5 8 7 6`
    #[arg(required = true, num_args = 1..)]
    word: Vec<String>,
}

/// A codeword to inspect; syndromes are always printed
#[derive(Args, Clone)]
struct SyndromeArgs {
    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Codeword symbols, e.g. `3745195876` or `3 7 4 5 1 9 5 8 7 6`
    #[arg(required = true, num_args = 1..)]
    word: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.debug);
    info!("bch11 starting");

    let config_path = cli.config.as_deref();

    match cli.command.unwrap_or(Commands::Shell(OutputArgs::default())) {
        Commands::Shell(output) => {
            let config = load_shell_config(config_path, output.format, output.show_syndromes)?;
            let stdin = io::stdin();
            let stats = Shell::new(config.clone(), stdin.lock(), io::stdout()).run()?;
            if config.format == OutputFormat::Text {
                println!("\n{}", stats);
            }
        }

        Commands::Decode(args) => {
            let config = load_shell_config(config_path, args.output.format, args.output.show_syndromes)?;
            let word = parse_word_args(&args.word)?;
            run_decode(&word, &config, &mut io::stdout())?;
        }

        Commands::Syndrome(args) => {
            let config = load_shell_config(config_path, args.format, false)?;
            let word = parse_word_args(&args.word)?;
            run_syndrome(&word, config.format, &mut io::stdout())?;
        }

        Commands::Info => {
            show_info(&mut io::stdout())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syndrome_rejects_show_syndromes_flag() {
        assert!(Cli::try_parse_from(["bch11", "syndrome", "--show-syndromes", "3745195876"]).is_err());

        let cli = Cli::try_parse_from(["bch11", "syndrome", "--format", "json", "3745195876"]).unwrap();
        match cli.command {
            Some(Commands::Syndrome(args)) => {
                assert_eq!(args.format, Some(OutputFormat::Json));
                assert_eq!(args.word, vec!["3745195876".to_string()]);
            }
            _ => panic!("expected syndrome subcommand"),
        }
    }

    #[test]
    fn test_decode_accepts_show_syndromes_flag() {
        let cli = Cli::try_parse_from(["bch11", "decode", "--show-syndromes", "3 7 4 5 1 9 5 8 7 6"]).unwrap();
        match cli.command {
            Some(Commands::Decode(args)) => assert!(args.output.show_syndromes),
            _ => panic!("expected decode subcommand"),
        }
    }
}
