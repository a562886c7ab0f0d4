// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fuzzmark command-line interface.
//!
//! Two subcommands: `search` to filter a list of haystacks read from a file
//! or stdin, and `pattern` to show what a needle expands to before any
//! scanning happens.

pub mod display;
pub mod input;

use clap::{Parser, Subcommand};
use input::InputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fuzzmark",
    about = "Fuzzy filter-as-you-type matching with highlighted results",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank haystacks against a needle and print highlighted results
    Search {
        /// Text to search for
        needle: String,

        /// File with haystacks (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Maximum number of results to return (0 = unbounded)
        #[arg(short, long, default_value = "0")]
        limit: usize,

        /// Keep haystacks that matched nothing
        #[arg(short = 'a', long = "all")]
        include_non_matches: bool,

        /// Require the whole needle as a literal substring instead of fuzzy matching
        #[arg(long)]
        substring: bool,

        /// How to read the haystacks
        ///
        /// `lines` takes one haystack per line. `json` expects an array of
        /// strings or objects with a `text` field. `auto` picks `json` when
        /// the input starts with `[`.
        #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
        format: InputFormat,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the candidate substrings and fallback alphabet of a needle
    Pattern {
        /// Needle to expand
        needle: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
