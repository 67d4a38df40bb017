use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// Command-line interface definition.
/// Extracts unique subdomains from URLs given in a file or on the command line.
///
/// Verbosity levels:
/// 0 - silent (only final output)
/// 1 - errors (default)
/// 2 - warnings + errors
/// 3 - info
/// 4 - debug
/// 5 - trace
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Extract subdomains from a list of URLs."
)]
pub struct Cli {
    /// Input file containing URLs (one per line)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output file for subdomains (default: subdomains.txt)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// List of URLs to process (optional if -f is used)
    #[arg(value_name = "URLS")]
    pub urls: Vec<String>,

    /// Verbosity level (0-5)
    #[arg(long, default_value_t = 1)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not print the extracted subdomains to stdout
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// Where the URLs for a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Urls(Vec<String>),
}

impl Cli {
    /// Parse CLI arguments from process args.
    ///
    /// `--help` and `--version` exit 0; any other argument error exits 1.
    pub fn from_args() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
                _ => {
                    let _ = e.print();
                    std::process::exit(1);
                }
            },
        }
    }

    /// Resolve the input source. The file wins when both are given.
    pub fn input_source(&self) -> Option<InputSource> {
        if let Some(ref path) = self.file {
            Some(InputSource::File(path.clone()))
        } else if !self.urls.is_empty() {
            Some(InputSource::Urls(self.urls.clone()))
        } else {
            None
        }
    }

    /// Whether positional URLs are ignored because `--file` was given.
    pub fn ignores_positional_urls(&self) -> bool {
        self.file.is_some() && !self.urls.is_empty()
    }

    /// Rendered `--help` text.
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }

    /// Convenience: are we in very verbose/debug mode?
    pub fn is_trace(&self) -> bool {
        self.verbose >= 5
    }

    /// Are error-level messages enabled?
    pub fn error_enabled(&self) -> bool {
        self.verbose >= 1
    }

    /// tracing filter directive matching the verbosity level.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "info",
            4 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("substract").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_positional_urls() {
        let cli = parse(&["a.example.com", "https://b.example.com"]);
        assert_eq!(
            cli.input_source(),
            Some(InputSource::Urls(vec![
                "a.example.com".to_string(),
                "https://b.example.com".to_string()
            ]))
        );
        assert_eq!(cli.output, None);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_file_wins_over_urls() {
        let cli = parse(&["-f", "urls.txt", "-o", "out.txt", "a.example.com"]);
        assert_eq!(
            cli.input_source(),
            Some(InputSource::File(PathBuf::from("urls.txt")))
        );
        assert!(cli.ignores_positional_urls());
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_no_input() {
        let cli = parse(&[]);
        assert_eq!(cli.input_source(), None);
        assert!(!cli.ignores_positional_urls());
    }

    #[test]
    fn test_log_filter_levels() {
        assert_eq!(parse(&["--verbose", "0"]).log_filter(), "off");
        assert_eq!(parse(&[]).log_filter(), "error");
        assert_eq!(parse(&["--verbose=2"]).log_filter(), "warn");
        assert_eq!(parse(&["--verbose=9"]).log_filter(), "trace");
        assert!(parse(&["--verbose=5"]).is_trace());
    }

    #[test]
    fn test_usage_mentions_options() {
        let usage = Cli::usage();
        assert!(usage.contains("--file"));
        assert!(usage.contains("--output"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
