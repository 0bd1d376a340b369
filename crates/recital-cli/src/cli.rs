use clap::{Parser, ValueEnum};
use recital_config::{LineEnding, NumberPolicy, RecitalConfig};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages, one per verse (default)
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Report format written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Accuracy line followed by the per-chapter pass/fail grid
    Csv,
    /// Full JSON report with every verse
    Json,
}

/// Corpus line terminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LineEndingArg {
    /// `\r\n`
    Crlf,
    /// `\n`
    Lf,
    /// Either
    Any,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Crlf => LineEnding::Crlf,
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Any => LineEnding::Any,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "recite")]
#[command(about = "recite - Measure how accurately a language model recites Bible verses")]
#[command(version)]
pub struct Cli {
    /// Config file path (defaults to ~/.config/recital/config.toml)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Verse corpus file (overrides config file)
    #[arg(long, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// Book code to evaluate, e.g. Pe2 (can be repeated)
    #[arg(short = 'b', long = "book", value_name = "CODE", conflicts_with = "all_books")]
    pub books: Vec<String>,

    /// Evaluate every book in the corpus
    #[arg(long)]
    pub all_books: bool,

    /// Backend base URL, e.g. http://localhost:1234/v1 (overrides config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Backend API token (overrides RECITAL_API_KEY and the config file)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Model name sent to the backend
    #[arg(short, long)]
    pub model: Option<String>,

    /// Per-verse timeout in seconds
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Skip records whose chapter or verse is not a positive integer
    /// instead of reading them as 0
    #[arg(long)]
    pub strict_numbers: bool,

    /// Line terminator of the corpus file
    #[arg(long, value_enum)]
    pub line_ending: Option<LineEndingArg>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Do not probe the backend before evaluating
    #[arg(long)]
    pub no_health_check: bool,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log level after applying `--verbose`
    pub fn effective_log_level(&self) -> LogLevel {
        match (self.log_level, self.verbose) {
            (Some(level), _) => level,
            (None, true) => LogLevel::Debug,
            (None, false) => LogLevel::Info,
        }
    }

    /// Apply command line overrides on top of file and environment values
    pub fn apply_overrides(&self, config: &mut RecitalConfig) {
        if let Some(path) = &self.corpus {
            config.corpus.path = path.clone();
        }
        if !self.books.is_empty() {
            config.corpus.books = self.books.clone();
            config.corpus.all_books = false;
        }
        if self.all_books {
            config.corpus.all_books = true;
        }
        if let Some(line_ending) = self.line_ending {
            config.corpus.line_ending = line_ending.into();
        }
        if self.strict_numbers {
            config.corpus.numbers = NumberPolicy::Strict;
        }

        if let Some(url) = &self.base_url {
            config.backend.base_url = url.clone();
        }
        if let Some(key) = &self.api_key {
            config.backend.api_key = Some(key.clone());
        }
        if let Some(model) = &self.model {
            config.backend.model = model.clone();
        }
        if let Some(timeout) = self.timeout {
            config.backend.timeout_secs = timeout;
        }
        if let Some(temp) = self.temperature {
            config.backend.temperature = Some(temp);
        }
        if self.no_health_check {
            config.backend.health_check = false;
        }
    }
}
