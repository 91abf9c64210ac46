use clap::{Parser, Subcommand};
use classicrypt::cli::{list_methods, run_bulk, run_keygen, run_transform, show_matrix, TextSource};
use classicrypt::{CipherError, Direction, Method, TransformOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Version info from build.rs
const VERSION: &str = env!("CLASSICRYPT_VERSION");
const BUILD: &str = env!("CLASSICRYPT_BUILD");
const PROFILE: &str = env!("CLASSICRYPT_PROFILE");
const GIT_HASH: &str = env!("CLASSICRYPT_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "classicrypt")]
#[command(author, about = "Classical text ciphers: rail fence, Caesar, Vigenère, Polybios, Tapir", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args)]
struct CipherArgs {
    /// Cipher method (rail-fence, caesar, vigenere, polybios, tapir, table-shift)
    #[arg(short, long, value_parser = parse_method)]
    method: Method,

    /// Caesar shift
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    shift: i64,

    /// Rail fence rail count
    #[arg(long, default_value_t = 2)]
    rails: usize,

    /// Key for Vigenère, Polybios and table-shift
    #[arg(short, long)]
    key: Option<String>,

    /// Text to transform (reads --input or stdin when omitted)
    text: Option<String>,

    /// Read text from a file
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Also write the result to a file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CipherArgs {
    fn options(&self) -> TransformOptions {
        TransformOptions {
            method: self.method,
            shift: self.shift,
            rails: self.rails,
            key: self.key.clone(),
        }
    }

    fn source(&self) -> TextSource {
        TextSource {
            text: self.text.clone(),
            input: self.input.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text
    #[command(alias = "e")]
    Encrypt(CipherArgs),

    /// Decrypt text
    #[command(alias = "d")]
    Decrypt(CipherArgs),

    /// Try every key of a small keyspace (caesar, rail-fence)
    #[command(alias = "b")]
    Bulk {
        #[arg(short, long, value_parser = parse_method)]
        method: Method,

        /// Ciphertext (reads --input or stdin when omitted)
        text: Option<String>,

        /// Read ciphertext from a file
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the Polybios square for a key
    #[command(alias = "m")]
    Matrix {
        #[arg(short, long, default_value = "")]
        key: String,
    },

    /// List available methods
    Methods {
        #[arg(long)]
        json: bool,
    },

    /// Generate a random key, shift or rail count
    #[command(alias = "k")]
    Keygen {
        #[arg(short, long, value_parser = parse_method)]
        method: Method,

        /// Length of string keys
        #[arg(short, long, default_value_t = 12)]
        length: usize,

        #[arg(long)]
        json: bool,
    },
}

fn parse_method(s: &str) -> Result<Method, String> {
    s.parse().map_err(|e: CipherError| format!("{}", e))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    if cli.version {
        println!("classicrypt {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if Cli::command().print_help().is_err() {
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt(args) => run_transform(
            Direction::Encrypt,
            &args.options(),
            &args.source(),
            args.output.as_deref(),
        )
        .map(|text| format!("{}\n", text)),

        Commands::Decrypt(args) => run_transform(
            Direction::Decrypt,
            &args.options(),
            &args.source(),
            args.output.as_deref(),
        )
        .map(|text| format!("{}\n", text)),

        Commands::Bulk {
            method,
            text,
            input,
            json,
        } => run_bulk(method, &TextSource { text, input }, json),

        Commands::Matrix { key } => Ok(show_matrix(&key)),

        Commands::Methods { json } => list_methods(json),

        Commands::Keygen {
            method,
            length,
            json,
        } => run_keygen(method, length, json),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
