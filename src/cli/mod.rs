// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cvsift command-line interface.
//!
//! Three subcommands: `search` to rank a corpus against keywords, `list` to
//! show what a corpus contains, and `distance` to check the edit distance
//! between two words (handy when tuning the fuzzy threshold).

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cvsift::Algorithm;

#[derive(Parser)]
#[command(
    name = "cvsift",
    about = "Rank resumes by keyword matches, exact first and fuzzy second",
    version
)]
pub struct Cli {
    /// Log search phases and timings (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the documents come from. Exactly one is required.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct CorpusArgs {
    /// Corpus directory laid out as <dir>/<category>/<file>
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// JSON manifest listing applicants and their resume files
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the corpus and print ranked results
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Keywords to look for (repeat or pass several)
        #[arg(short, long = "keyword", num_args = 1.., required = true)]
        keywords: Vec<String>,

        /// Exact-match algorithm: kmp, bm or ac
        #[arg(short, long, default_value = "kmp")]
        algorithm: Algorithm,

        /// Number of results to show
        #[arg(short, long, default_value = "3")]
        top: usize,

        /// Only search these categories (repeatable)
        #[arg(short, long)]
        category: Vec<String>,

        /// Take at most this many documents per category
        #[arg(long)]
        limit_per_category: Option<usize>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,

        /// JSON config file overriding engine defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the documents in a corpus
    List {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Only list these categories (repeatable)
        #[arg(short, long)]
        category: Vec<String>,
    },

    /// Print the edit distance between two words
    Distance {
        a: String,
        b: String,
    },
}
