// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai - command line entrypoint.
//!
//! Loads configuration, initializes logging, and runs one query command
//! against a trie built from a word file.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lanai_lib::config::{ConfigLoader, LanaiConfig, LogConfig, ENV_PREFIX};
use lanai_lib::error::{
    report_error, set_error_reporter, ErrorContext, LanaiError, LanaiResult, TracingErrorReporter,
};
use lanai_lib::greedy::{egyptian_fractions, Fraction};
use lanai_lib::wordlist::load_trie;

/// Command line arguments for Lanai.
#[derive(Parser, Debug)]
#[clap(name = "lanai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Check which queries are stored words
    Search {
        /// Word file, one word per line
        #[clap(short, long, value_parser)]
        words: PathBuf,

        /// Words to look up
        #[clap(required = true)]
        queries: Vec<String>,
    },

    /// Print the longest stored word that prefixes each query
    LongestPrefix {
        /// Word file, one word per line
        #[clap(short, long, value_parser)]
        words: PathBuf,

        /// Words to look up
        #[clap(required = true)]
        queries: Vec<String>,
    },

    /// Print the shortest unique prefix of every stored word
    UniquePrefixes {
        /// Word file, one word per line
        #[clap(short, long, value_parser)]
        words: PathBuf,
    },

    /// Decompose a fraction into distinct unit fractions
    Egyptian {
        /// Numerator of the fraction
        numerator: i64,

        /// Denominator of the fraction
        denominator: i64,
    },

    /// Validate the configuration
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Search { .. } => "search",
            Command::LongestPrefix { .. } => "longest-prefix",
            Command::UniquePrefixes { .. } => "unique-prefixes",
            Command::Egyptian { .. } => "egyptian",
            Command::Validate => "validate",
            Command::GenConfig { .. } => "gen-config",
        }
    }
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let (json_layer, pretty_layer) = if log.json {
        (Some(fmt::layer().json().with_writer(std::io::stderr)), None)
    } else {
        (None, Some(fmt::layer().pretty().with_writer(std::io::stderr)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(pretty_layer)
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn print_json(value: &serde_json::Value) -> LanaiResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn execute(command: Command, config: &LanaiConfig, as_json: bool) -> LanaiResult<()> {
    match command {
        Command::Search { words, queries } => {
            let trie = load_trie(&words, config.trie.clone())?;
            if as_json {
                let results: Vec<_> = queries
                    .iter()
                    .map(|q| json!({ "word": q, "found": trie.search(q) }))
                    .collect();
                return print_json(&json!(results));
            }
            for query in &queries {
                println!("{query}\t{}", trie.search(query));
            }
            Ok(())
        }
        Command::LongestPrefix { words, queries } => {
            let trie = load_trie(&words, config.trie.clone())?;
            if as_json {
                let results: Vec<_> = queries
                    .iter()
                    .map(|q| json!({ "word": q, "prefix": trie.longest_prefix(q) }))
                    .collect();
                return print_json(&json!(results));
            }
            for query in &queries {
                let prefix = trie.longest_prefix(query);
                println!("{query}\t{}", prefix.as_deref().unwrap_or("-"));
            }
            Ok(())
        }
        Command::UniquePrefixes { words } => {
            let trie = load_trie(&words, config.trie.clone())?;
            // Both lists come out in the same depth-first order
            let pairs: Vec<(String, String)> = trie
                .words()
                .into_iter()
                .zip(trie.shortest_unique_prefixes())
                .collect();
            if as_json {
                let results: Vec<_> = pairs
                    .iter()
                    .map(|(word, prefix)| json!({ "word": word, "prefix": prefix }))
                    .collect();
                return print_json(&json!(results));
            }
            for (word, prefix) in &pairs {
                println!("{word}\t{prefix}");
            }
            Ok(())
        }
        Command::Egyptian {
            numerator,
            denominator,
        } => {
            let fraction = Fraction::new(numerator, denominator)?;
            let terms = egyptian_fractions(fraction)?;
            let rendered: Vec<String> = terms.iter().map(Fraction::to_string).collect();
            if as_json {
                return print_json(&json!({ "fraction": fraction.to_string(), "terms": rendered }));
            }
            println!("{fraction} = {}", rendered.join(" + "));
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&LanaiConfig::default())
                .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    let loader = match args.config.as_deref() {
        Some(path) => ConfigLoader::new(Some(path), ENV_PREFIX),
        None => ConfigLoader::default(),
    };

    let config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            report_error(ErrorContext::new(e.into(), "config"));
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.log) {
        report_error(ErrorContext::new(e, "logging"));
        return ExitCode::FAILURE;
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let name = args.command.name();
    let span = tracing::info_span!("command", name);
    let _guard = span.enter();

    match execute(args.command, &config, args.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_error(ErrorContext::new(error, name).with_span_trace());
            ExitCode::FAILURE
        }
    }
}
