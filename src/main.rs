use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use resume_parser::core::ConfigManager;
use resume_parser::{start_web_server, FieldExtractor, ResumeParser};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "cvlens")]
#[command(about = "Resume parsing and ATS analysis service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API server
    Serve {
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Parse a resume file and print the extracted record as JSON
    Parse {
        file: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// Include the quality report and auxiliary signals
        #[arg(long)]
        report: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resume_parser=info,rocket=warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port } => {
            let mut config = ConfigManager::load()?;
            if let Some(port) = port {
                config.server.port = port;
            }
            start_web_server(config).await
        }
        Command::Parse {
            file,
            pretty,
            report,
        } => {
            let parser = ResumeParser::new();
            let resume = parser.parse_path(&file).await?;

            let output = if report {
                let extractor = FieldExtractor::new();
                let quality = resume_parser::review(&resume);
                let keyword_hits = extractor.keyword_hits(&resume.raw_text);
                let estimated_years = extractor.years_of_experience(&resume.raw_text);
                serde_json::json!({
                    "resume": resume,
                    "report": quality,
                    "keyword_hits": keyword_hits,
                    "estimated_years": estimated_years,
                })
            } else {
                serde_json::to_value(&resume).context("Failed to serialize resume record")?
            };

            let rendered = if pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            println!("{rendered}");
            Ok(())
        }
    }
}
