//! pagescribe - run a single page through the Gemini OCR adapter

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pagescribe::{
    CompletionRequest, Config, ExtractionRequest, GeminiProvider, ModelProvider, ModelRequest,
    OperationMode,
};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "pagescribe", version, about = "Page OCR and schema extraction with Gemini")]
struct Cli {
    /// YAML configuration file; environment variables override its values
    #[arg(long, env = "PAGESCRIBE_CONFIG")]
    config: Option<PathBuf>,

    /// Model identifier, overrides the configured one
    #[arg(long)]
    model: Option<String>,

    /// Log level or filter directive
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Transcribe a page image to markdown
    Ocr {
        /// Page image
        #[arg(long)]
        image: PathBuf,
        /// Markdown of the previous page
        #[arg(long)]
        prior_page: Option<PathBuf>,
        /// Keep formatting consistent with --prior-page
        #[arg(long)]
        maintain_format: bool,
    },
    /// Extract structured data matching a JSON schema
    Extract {
        /// Page image
        #[arg(long)]
        image: PathBuf,
        /// JSON schema file describing the output
        #[arg(long)]
        schema: PathBuf,
    },
}

impl Command {
    fn mode(&self) -> OperationMode {
        match self {
            Self::Ocr { .. } => OperationMode::Ocr,
            Self::Extract { .. } => OperationMode::Extraction,
        }
    }
}

async fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::from_file(path).await?;
            config.apply_env()?;
            config
        }
        None => Config::from_env()?,
    };

    if let Some(model) = &cli.model {
        config.gemini.model = model.clone();
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    config.validate()?;
    Ok(config)
}

async fn build_request(command: &Command) -> anyhow::Result<ModelRequest> {
    let request = match command {
        Command::Ocr {
            image,
            prior_page,
            maintain_format,
        } => {
            let mut request = CompletionRequest::new(pagescribe::utils::load_image(image).await?);
            request.maintain_format = *maintain_format;
            if let Some(path) = prior_page {
                let text = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read prior page {}", path.display()))?;
                request.prior_page = Some(text);
            }
            request.into()
        }
        Command::Extract { image, schema } => {
            let raw = tokio::fs::read_to_string(schema)
                .await
                .with_context(|| format!("Failed to read schema {}", schema.display()))?;
            let schema_value: serde_json::Value = serde_json::from_str(&raw)
                .with_context(|| format!("Schema {} is not valid JSON", schema.display()))?;
            ExtractionRequest::new(pagescribe::utils::load_image(image).await?, schema_value).into()
        }
    };
    Ok(request)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(&cli).await?;
    pagescribe::utils::init_logging(&config.logging)?;

    let mode = cli.command.mode();
    if config.mode != mode {
        warn!(configured = %config.mode, requested = %mode, "Subcommand overrides configured mode");
        config.mode = mode;
    }

    let provider = GeminiProvider::new(config.gemini.clone(), config.mode)?;
    info!(model = provider.model(), mode = %provider.mode(), "Adapter ready");

    let request = build_request(&cli.command).await?;
    let response = provider.get_completion(request).await?;

    let output = match response {
        pagescribe::ModelResponse::Completion(result) => serde_json::to_string_pretty(&result)?,
        pagescribe::ModelResponse::Extraction(result) => serde_json::to_string_pretty(&result)?,
    };
    println!("{}", output);

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
