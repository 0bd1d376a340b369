//! Startup and the evaluation run

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{error, info, warn};

use recital_config::{resolve_api_key, ConfigLoader, CorpusConfig, RecitalConfig};
use recital_core::{
    book_name, render_csv, render_json, BookSelection, CorpusParser, Evaluator, ParseOptions,
    Summary, TestResult, TextGenerator, TracingObserver,
};
use recital_llm::{OpenAICompatibleProvider, ProviderSettings};

use crate::cli::{Cli, OutputFormat};

/// Load config, read the corpus, connect the backend, evaluate and print the report
pub async fn execute(cli: Cli) -> Result<()> {
    let (config, raw, provider) = match startup(&cli).await {
        Ok(parts) => parts,
        Err(e) => {
            error!("Startup failed: {:#}", e);
            return Err(e);
        }
    };

    let verses = CorpusParser::new(parse_options(&config.corpus)).parse(&raw);
    info!(count = verses.len(), "Loaded verses");
    if verses.is_empty() {
        warn!("No verses matched the book selection");
    }

    let observer = TracingObserver;
    let timeout = Duration::from_secs(config.backend.timeout_secs);
    info!(
        provider = provider.provider_name(),
        model = provider.model(),
        timeout_secs = config.backend.timeout_secs,
        "Starting evaluation"
    );
    let results = Evaluator::new(&provider, &observer, timeout)
        .evaluate(&verses)
        .await;

    print!("{}", render_report(&results, cli.format)?);
    Ok(())
}

async fn startup(cli: &Cli) -> Result<(RecitalConfig, String, OpenAICompatibleProvider)> {
    let config = load_config(cli)?;
    let raw = read_corpus(&config.corpus).await?;
    let provider = connect(cli, &config).await?;
    Ok((config, raw, provider))
}

fn load_config(cli: &Cli) -> Result<RecitalConfig> {
    let mut config =
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    if !config.corpus.all_books {
        for code in config.corpus.books.iter().filter(|c| book_name(c).is_none()) {
            warn!(code = %code, "Unknown book code, it will match no verses");
        }
    }

    Ok(config)
}

async fn read_corpus(corpus: &CorpusConfig) -> Result<String> {
    tokio::fs::read_to_string(&corpus.path)
        .await
        .with_context(|| format!("Failed to read corpus file {}", corpus.path.display()))
}

async fn connect(cli: &Cli, config: &RecitalConfig) -> Result<OpenAICompatibleProvider> {
    let api_key = match &cli.api_key {
        Some(key) => key.clone(),
        None => resolve_api_key(&config.backend, |var| std::env::var(var).ok()),
    };

    let provider =
        OpenAICompatibleProvider::new(ProviderSettings::from_config(&config.backend, api_key))
            .context("Failed to configure backend")?;

    if config.backend.health_check {
        provider
            .health_check()
            .await
            .context("Backend health check failed (use --no-health-check to skip)")?;
    }

    Ok(provider)
}

/// Parser options for the configured corpus selection
pub fn parse_options(corpus: &CorpusConfig) -> ParseOptions {
    let books = if corpus.all_books {
        BookSelection::All
    } else {
        BookSelection::codes(corpus.books.iter().cloned())
    };

    ParseOptions {
        books,
        line_ending: corpus.line_ending,
        numbers: corpus.numbers,
    }
}

/// Render the stdout report
pub fn render_report(results: &[TestResult<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Csv => {
            let summary = Summary::from_results(results);
            Ok(format!("\n{}\n\n{}\n", summary, render_csv(results)))
        }
        OutputFormat::Json => {
            let json = render_json(results).context("Failed to serialize report")?;
            Ok(format!("{}\n", json))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recital_config::{LineEnding, NumberPolicy};
    use recital_core::Verse;

    #[test]
    fn parse_options_from_book_list() {
        let corpus = CorpusConfig {
            books: vec!["Pe1".to_string(), "Pe2".to_string()],
            numbers: NumberPolicy::Strict,
            line_ending: LineEnding::Any,
            ..CorpusConfig::default()
        };

        let options = parse_options(&corpus);

        assert_eq!(options.books, BookSelection::codes(["Pe1", "Pe2"]));
        assert_eq!(options.numbers, NumberPolicy::Strict);
        assert_eq!(options.line_ending, LineEnding::Any);
    }

    #[test]
    fn parse_options_all_books() {
        let corpus = CorpusConfig {
            all_books: true,
            ..CorpusConfig::default()
        };
        assert_eq!(parse_options(&corpus).books, BookSelection::All);
    }

    #[test]
    fn csv_report_layout() {
        let verses = vec![
            Verse::new("2 Peter", 1, 1, "Simon Peter"),
            Verse::new("2 Peter", 1, 2, "Grace"),
            Verse::new("2 Peter", 2, 1, "But there were"),
        ];
        let results = vec![
            TestResult::new(&verses[0], "Simon Peter"),
            TestResult::new(&verses[1], ""),
            TestResult::new(&verses[2], "But there were"),
        ];

        let report = render_report(&results, OutputFormat::Csv).unwrap();

        assert_eq!(
            report,
            "\nAccuracy: 66.67% (2/3 verses)\n\n2 Peter,1,1,0,\n\n2 Peter,2,1,\n"
        );
    }

    #[test]
    fn csv_report_for_empty_run() {
        let report = render_report(&[], OutputFormat::Csv).unwrap();
        assert_eq!(report, "\nAccuracy: n/a (no verses evaluated)\n\n\n");
    }

    #[test]
    fn json_report_ends_with_newline() {
        let report = render_report(&[], OutputFormat::Json).unwrap();
        assert!(report.ends_with("}\n"));
    }
}
