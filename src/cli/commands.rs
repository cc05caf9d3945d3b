//! Command implementations for the lancet CLI.

use std::fs;
use std::io::{self, Read};
use std::sync::Arc;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::LancetConfig;
use crate::error::{LancetError, Result};
use crate::lexicon::Lexicon;
use crate::processor::TextProcessor;
use crate::server;

/// Execute a CLI command.
pub async fn execute_command(args: LancetArgs) -> Result<()> {
    let mut config = load_config(&args)?;

    match &args.command {
        Command::Serve(serve_args) => {
            apply_serve_overrides(&mut config, serve_args);
            config.validate()?;
            serve(&config).await
        }
        Command::Analyze(analyze_args) => {
            if let Some(threshold) = analyze_args.threshold {
                config.analysis.repetition_threshold = threshold;
            }
            config.validate()?;
            analyze(analyze_args, &config, &args).await
        }
    }
}

/// Load the configuration file named on the command line, or the defaults.
pub fn load_config(args: &LancetArgs) -> Result<LancetConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            LancetConfig::from_file(path)
        }
        None => Ok(LancetConfig::default()),
    }
}

fn apply_serve_overrides(config: &mut LancetConfig, serve_args: &ServeArgs) {
    if let Some(host) = &serve_args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = serve_args.port {
        config.server.port = port;
    }
}

/// Load the lexicon and build a processor as described by `config`.
pub async fn build_processor(config: &LancetConfig) -> Result<TextProcessor> {
    let lexicon = Lexicon::load(&config.stopwords, &config.profanity).await?;

    Ok(TextProcessor::new(&lexicon)?
        .with_repetition_threshold(config.analysis.repetition_threshold))
}

async fn serve(config: &LancetConfig) -> Result<()> {
    let processor = build_processor(config).await?;
    server::serve(&config.server, Arc::new(processor)).await
}

async fn analyze(
    analyze_args: &AnalyzeArgs,
    config: &LancetConfig,
    cli_args: &LancetArgs,
) -> Result<()> {
    let text = read_input(analyze_args)?;
    if text.is_empty() {
        return Err(LancetError::invalid_argument("No text provided"));
    }

    let processor = build_processor(config).await?;
    let result = processor.process(&text)?;

    output_result(&result, cli_args)
}

/// Take the text from the argument, the file or stdin, in that order.
fn read_input(analyze_args: &AnalyzeArgs) -> Result<String> {
    if let Some(text) = &analyze_args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &analyze_args.file {
        return fs::read_to_string(path).map_err(|e| {
            LancetError::invalid_argument(format!("Failed to read {}: {e}", path.display()))
        });
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
