// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cvsift::{
    levenshtein_distance, DirectoryCorpus, DocumentSource, ManifestCorpus, Orchestrator,
    PlainTextExtractor, SearchConfig, SearchOutcome, SearchRequest,
};

mod cli;
use cli::{display, Cli, Commands, CorpusArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Tracing to stderr, filtered by `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            corpus,
            keywords,
            algorithm,
            top,
            category,
            limit_per_category,
            json,
            config,
        } => {
            let config = match config {
                Some(path) => SearchConfig::from_json_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => SearchConfig::default(),
            };
            let mut request = SearchRequest::new(keywords, algorithm, top).with_categories(category);
            request.limit_per_category = limit_per_category;

            let source = open_corpus(&corpus)?;
            let orchestrator = Orchestrator::new(source, PlainTextExtractor, config)?;
            let outcome = run_search(&orchestrator, &request, !json)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                for line in display::render_outcome(&outcome) {
                    println!("{}", line);
                }
            }
        }

        Commands::List { corpus, category } => {
            let source = open_corpus(&corpus)?;
            let entries = source
                .list_documents(&category, None)
                .context("listing corpus")?;
            for line in display::render_listing(&entries) {
                println!("{}", line);
            }
        }

        Commands::Distance { a, b } => {
            println!("{}", levenshtein_distance(&a, &b));
        }
    }
    Ok(())
}

fn open_corpus(args: &CorpusArgs) -> Result<Box<dyn DocumentSource>> {
    match (&args.corpus, &args.manifest) {
        (Some(dir), _) => Ok(Box::new(DirectoryCorpus::new(dir))),
        (None, Some(manifest)) => Ok(Box::new(load_manifest(manifest)?)),
        (None, None) => anyhow::bail!("either --corpus or --manifest is required"),
    }
}

fn load_manifest(path: &Path) -> Result<ManifestCorpus> {
    ManifestCorpus::load(path).with_context(|| format!("loading manifest {}", path.display()))
}

/// Run the search, with a progress bar over extraction when stderr is a
/// terminal and the `parallel` feature is on.
fn run_search(
    orchestrator: &Orchestrator<Box<dyn DocumentSource>, PlainTextExtractor>,
    request: &SearchRequest,
    interactive: bool,
) -> Result<SearchOutcome> {
    #[cfg(feature = "parallel")]
    {
        if interactive
            && atty::is(atty::Stream::Stderr)
            && !cvsift::normalize_keywords(&request.keywords).is_empty()
        {
            request.validate(orchestrator.config())?;
            let entries = orchestrator
                .source()
                .list_documents(&request.categories, request.limit_per_category)
                .context("listing corpus")?;

            let progress = indicatif::ProgressBar::new(entries.len() as u64);
            progress.set_style(
                indicatif::ProgressStyle::with_template("{spinner} reading resumes {bar:30} {msg}")
                    .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar()),
            );
            let report =
                cvsift::corpus::load_documents_with_progress(&PlainTextExtractor, entries, &progress);
            progress.finish_and_clear();

            return Ok(orchestrator.search_loaded(report, request)?);
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = interactive;

    Ok(orchestrator.search(request)?)
}
