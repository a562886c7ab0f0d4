// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading haystacks for the CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use fuzzmark::Haystack;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Haystack input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Auto,
    Lines,
    Json,
}

/// Read raw input from a file, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            Ok(raw)
        }
    }
}

/// Parse raw input into haystacks.
///
/// JSON input that is valid but not an array yields no haystacks, matching
/// the library's lenient normalization. Malformed JSON is an error.
pub fn parse_haystacks(raw: &str, format: InputFormat) -> Result<Vec<Haystack>> {
    let format = match format {
        InputFormat::Auto if raw.trim_start().starts_with('[') => InputFormat::Json,
        InputFormat::Auto => InputFormat::Lines,
        other => other,
    };

    match format {
        InputFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(raw).context("invalid JSON haystack list")?;
            match value {
                serde_json::Value::Array(items) => {
                    Ok(items.into_iter().map(Haystack::from).collect())
                }
                _ => {
                    tracing::warn!("JSON input is not an array, no haystacks to search");
                    Ok(Vec::new())
                }
            }
        }
        _ => Ok(raw
            .lines()
            .map(|line| Haystack::Text(line.to_string()))
            .collect()),
    }
}
