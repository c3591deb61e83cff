mod cli;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;
use twcss_validator::config::FilePatterns;
use twcss_validator::output::{self, OutputFormat};
use twcss_validator::validate::Validator;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !cli.path.exists() {
        eprintln!("Error: path does not exist: {}", cli.path.display());
        std::process::exit(1);
    }

    let patterns = FilePatterns::new(&cli.patterns).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let results = Validator::new()
        .validate_path(&cli.path, &patterns)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    let format = OutputFormat::from_json_flag(cli.json);
    println!("{}", output::format_report(&results, format));

    std::process::exit(results.exit_code());
}

/// Logs go to stderr so they never mix with the report on stdout.
/// `RUST_LOG` wins over `--verbose` when set.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
