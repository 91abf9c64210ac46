mod rank;
mod stats;

use clap::{Parser, Subcommand};
use classicrypt::cli::TextSource;
use classicrypt::Method;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "codebreaker")]
#[command(about = "Cryptanalysis helpers for classical ciphers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bulk-decrypt and order candidates by how English they read
    Rank {
        /// Method to brute force (caesar or rail-fence)
        #[arg(short, long, value_parser = parse_method)]
        method: Method,

        /// Ciphertext (reads --input or stdin when omitted)
        text: Option<String>,

        /// Read ciphertext from a file
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Number of candidates to show
        #[arg(long, default_value_t = 5)]
        top: usize,
    },

    /// Letter frequencies, index of coincidence and chi-square
    Stats {
        /// Text to analyze (reads --input or stdin when omitted)
        text: Option<String>,

        /// Read text from a file
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,
    },
}

fn parse_method(s: &str) -> Result<Method, String> {
    s.parse().map_err(|e: classicrypt::CipherError| format!("{}", e))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Rank {
            method,
            text,
            input,
            top,
        } => {
            let text = TextSource { text, input }.read()?;
            print!("{}", rank::run(method, &text, top)?);
        }
        Commands::Stats { text, input } => {
            let text = TextSource { text, input }.read()?;
            print!("{}", stats::run(&text)?);
        }
    }

    Ok(())
}
