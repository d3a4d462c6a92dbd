use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::info;

use docsense::config::Config;
use docsense::extract::{require_text, DocumentTextExtractor, PlainTextExtractor};
use docsense::language::{classify, resolve_language, Script};
use docsense::output::{JsonRenderer, MarkdownRenderer, ReportMeta, ReportRenderer, TerminalRenderer};
use docsense::pipeline::analyze::Analyzer;
use docsense::pipeline::batch::{analyze_documents, BatchOptions};

/// Docsense: heuristic document analysis.
///
/// Summarizes a document and reports its keywords, sentiment, language and
/// word count.
#[derive(Parser)]
#[command(name = "docsense", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one document (text argument, --file, or stdin)
    Analyze {
        /// Text to analyze
        text: Option<String>,

        /// Read the document from a file instead (.txt or .md)
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value = "terminal")]
        format: Format,

        /// Write the report to this path instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Analyze many documents concurrently
    Batch {
        /// Files to analyze
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Number of documents analyzed in parallel (default: DOCSENSE_CONCURRENCY or 4)
        #[arg(long)]
        concurrency: Option<usize>,

        /// Print results as JSON lines instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Detect the language of a text
    Detect {
        /// Text to inspect
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Also print per-script character counts
        #[arg(long)]
        scripts: bool,
    },

    /// List the recognized script buckets
    Scripts,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Terminal,
    Json,
    Markdown,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docsense=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            text,
            file,
            format,
            output,
        } => {
            let extractor = PlainTextExtractor {
                max_bytes: config.max_upload_bytes,
            };
            let (text, source) = read_input(text, file.as_deref(), &extractor).await?;

            let analyzer = Analyzer::with_backend(config.keyword_backend);
            let result = analyzer.analyze(&text);
            info!(
                words = result.word_count,
                language = %result.language,
                "Analysis complete"
            );

            if output.is_some() {
                colored::control::set_override(false);
            }
            let meta = ReportMeta::now(source);
            let report = match format {
                Format::Terminal => TerminalRenderer::default().render(&result, &meta)?,
                Format::Json => JsonRenderer { pretty: true }.render(&result, &meta)?,
                Format::Markdown => MarkdownRenderer.render(&result, &meta)?,
            };

            match output {
                Some(path) => {
                    tokio::fs::write(&path, report)
                        .await
                        .with_context(|| format!("Failed to write report to {}", path.display()))?;
                    println!("Report written to {}", path.display());
                }
                None => println!("{report}"),
            }
        }

        Commands::Batch {
            files,
            concurrency,
            json,
        } => {
            let extractor = PlainTextExtractor {
                max_bytes: config.max_upload_bytes,
            };
            let options = BatchOptions {
                concurrency: concurrency.unwrap_or(config.concurrency),
                timeout: config.timeout,
                show_progress: !json,
            };
            let analyzer = Arc::new(Analyzer::with_backend(config.keyword_backend));

            let outcomes = analyze_documents(analyzer, &extractor, &files, &options).await;

            if json {
                for outcome in &outcomes {
                    let line = match &outcome.result {
                        Ok(result) => serde_json::json!({
                            "source": outcome.source,
                            "result": result,
                        }),
                        Err(e) => serde_json::json!({
                            "source": outcome.source,
                            "error": e.to_string(),
                        }),
                    };
                    println!("{line}");
                }
            } else {
                docsense::output::terminal::display_batch(&outcomes);
            }

            if outcomes.iter().all(|o| o.result.is_err()) {
                anyhow::bail!("No document could be analyzed");
            }
        }

        Commands::Detect {
            text,
            file,
            scripts,
        } => {
            let extractor = PlainTextExtractor {
                max_bytes: config.max_upload_bytes,
            };
            let (text, _source) = read_input(text, file.as_deref(), &extractor).await?;

            let counts = classify(&text);
            let language = resolve_language(&counts, &text.to_lowercase());
            println!("{}", language.bold());

            if scripts {
                if counts.is_empty() {
                    println!("  {}", "(no classified characters)".dimmed());
                }
                for (script, count) in counts.iter() {
                    println!("  {:<12} {:>8}", script.name(), count);
                }
            }
        }

        Commands::Scripts => {
            println!("\n{}", "=== Recognized Scripts ===".bold());
            println!();
            for script in Script::ALL {
                let language = match script {
                    Script::Latin => "one of 20 languages, or English".dimmed().to_string(),
                    Script::Cyrillic => "Russian, Ukrainian or Bulgarian".dimmed().to_string(),
                    other => docsense::language::script_label(other)
                        .unwrap_or("?")
                        .to_string(),
                };
                println!("  {:<12} {}", script.name(), language);
            }
        }
    }

    Ok(())
}

/// Get the document text from the argument, a file, or stdin.
///
/// Returns the text and a label for where it came from.
async fn read_input(
    text: Option<String>,
    file: Option<&Path>,
    extractor: &dyn DocumentTextExtractor,
) -> Result<(String, Option<String>)> {
    let (text, source) = match (text, file) {
        (Some(text), _) => (text, None),
        (None, Some(path)) => {
            let text = extractor.extract_text(path).await?;
            (text, Some(path.display().to_string()))
        }
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            (buf, Some("stdin".to_string()))
        }
    };

    let label = source.clone().unwrap_or_else(|| "input".to_string());
    let text = require_text(text, &label)?;
    Ok((text, source))
}
