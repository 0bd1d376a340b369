use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

const CRATES: &[&str] = &["recital_cli", "recital_core", "recital_config", "recital_llm"];

/// Filter directives for our crates at `level`
pub fn filter_directives(level: LogLevel) -> String {
    let level = LevelFilter::from(level).to_string().to_lowercase();
    CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber; `RUST_LOG` takes precedence over `level`
///
/// Events go to stderr so the report on stdout stays machine readable.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            filter_directives(LogLevel::Debug),
            "recital_cli=debug,recital_core=debug,recital_config=debug,recital_llm=debug"
        );
        assert!(filter_directives(LogLevel::Off).starts_with("recital_cli=off"));
    }
}
