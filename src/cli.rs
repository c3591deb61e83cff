use clap::Parser;
use std::path::PathBuf;
use twcss_validator::config::CLI_DEFAULT_GLOBS;

#[derive(Parser)]
#[command(
    name = "twcss-validator",
    version,
    about = "Checks that templates use Tailwind CSS utilities instead of custom CSS"
)]
pub struct Cli {
    /// File or directory to validate
    pub path: PathBuf,

    /// File patterns to scan when PATH is a directory
    #[arg(
        long,
        short,
        num_args = 1..,
        default_values_t = CLI_DEFAULT_GLOBS.iter().map(|s| s.to_string()),
    )]
    pub patterns: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log scanned files to stderr
    #[arg(long, short)]
    pub verbose: bool,
}
