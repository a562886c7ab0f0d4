// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fuzzmark::{
    build_pattern, AsHaystack, Filter, FuzzyFilter, SearchOptions, SubstringFilter,
};

mod cli;
use cli::display;
use cli::input::{parse_haystacks, read_input};
use cli::{Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(e) = result {
        eprintln!("Failed to initialize tracing: {}", e);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            needle,
            file,
            limit,
            include_non_matches,
            substring,
            format,
            json,
        } => {
            let raw = read_input(file.as_deref())?;
            let haystacks = parse_haystacks(&raw, format)?;

            let mut options = SearchOptions::default()
                .include_non_matches(include_non_matches)
                .limit(limit);
            if !json {
                options = options.highlight(display::highlight_tags());
            }

            let (strategy, filter): (&str, Box<dyn Filter>) = if substring {
                ("SUBSTRING", Box::new(SubstringFilter::new(options)))
            } else {
                ("FUZZY", Box::new(FuzzyFilter::new(options)))
            };

            let entries: Vec<(usize, &str)> = haystacks
                .iter()
                .enumerate()
                .map(|(index, haystack)| (index, haystack.haystack_text()))
                .collect();
            let results = filter.filter(&needle, &entries);
            tracing::info!(
                strategy,
                haystacks = entries.len(),
                results = results.len(),
                "search finished"
            );

            if json {
                let out = serde_json::to_string_pretty(&results)
                    .context("failed to serialize results")?;
                println!("{}", out);
            } else {
                display::print_results(&needle, strategy, entries.len(), &results);
            }
        }
        Commands::Pattern { needle, json } => {
            let pattern = build_pattern(&needle);
            if json {
                let value = serde_json::json!({
                    "candidates": pattern.candidate_strings(),
                    "alphabet": pattern.alphabet().iter().collect::<String>(),
                });
                let out =
                    serde_json::to_string_pretty(&value).context("failed to serialize pattern")?;
                println!("{}", out);
            } else {
                display::print_pattern(&needle, &pattern);
            }
        }
    }
    Ok(())
}
