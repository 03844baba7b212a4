use anyhow::{Context, Result};
use clap::Parser;
use spec_syntax::SyntaxBlock;
use spec_syntax_config::{Config, OutputFormat};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

mod render;

/// Dump the tokens or parsed nodes of one syntax stanza.
#[derive(Debug, Parser)]
#[command(name = "spec-syntax", version, about)]
struct Cli {
    /// Stanza file to read; stdin when omitted
    file: Option<PathBuf>,

    /// Print lexer tokens instead of parsed nodes
    #[arg(long)]
    tokens: bool,

    /// Output format: text, json or html
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Document name attached to cross references
    #[arg(short, long)]
    document: Option<String>,

    /// Config file to use instead of ~/.config/spec-syntax/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.format);
    let document_name = cli.document.unwrap_or(config.document_name);

    let input = read_input(cli.file.as_deref())?;
    log::debug!(
        "read {} bytes, rendering as {format} for document {document_name:?}",
        input.len()
    );

    let output = if cli.tokens {
        render::render_tokens(&input, format)?
    } else {
        let block = SyntaxBlock::from_lines(&input.lines().collect::<Vec<_>>(), &document_name);
        log::info!(
            "{} definitions, {} references",
            block.definitions().count(),
            block.references().count()
        );
        render::render_block(&block, format)?
    };

    println!("{output}");
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            log::debug!("Config path: {}", path.display());
            Config::load_from_path(&path)?
                .with_context(|| format!("config file {} does not exist", path.display()))?
        }
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Config::load()?.unwrap_or_default()
        }
    };
    Ok(config)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}
