//! `parsim run` - the full analysis pipeline
//!
//! Reads the corpus, embeds every paragraph in one bulk call, computes both
//! proximity matrices and the closest-paragraphs lists, then exports all
//! three products. Any input or embedding failure aborts before the first
//! export, so the output directory never holds partial results.

use std::fs;
use std::time::Instant;

use parsim_core::aggregate::{article_proximities, DiagonalPolicy};
use parsim_core::config::AnalysisConfig;
use parsim_core::corpus::Corpus;
use parsim_core::embed::{Embedder, HttpEmbedder};
use parsim_core::error::Result;
use parsim_core::export::{
    write_labeled_matrix, write_neighbor_report, ARTICLE_MATRIX_FILE, CLOSEST_PARAGRAPHS_FILE,
    PARAGRAPH_MATRIX_FILE,
};
use parsim_core::input;
use parsim_core::segment::segment_article;
use parsim_core::similarity::paragraph_proximities;

use crate::cli::{Cli, OutputFormat, RunArgs};

pub fn execute(cli: &Cli, args: &RunArgs, start: Instant) -> Result<()> {
    let config = load_config(args)?;

    let articles = input::read_articles(&args.input)?;
    tracing::info!(articles = articles.len(), "files_read");

    let corpus = Corpus::from_articles(
        articles
            .into_iter()
            .map(|(name, raw)| (name, segment_article(&raw))),
    )?;
    tracing::info!(paragraphs = corpus.len(), "corpus_built");
    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "build_corpus");
    }

    let embedder = HttpEmbedder::new(config.embedding.clone());
    let embeddings = embedder.embed(&corpus.texts())?;
    let dimension = embeddings.first().map(Vec::len).unwrap_or(0);
    tracing::info!(dimension, "embeddings_computed");
    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "embed_corpus");
    }

    let proximities = paragraph_proximities(&embeddings, &corpus.ids(), config.top_k);
    tracing::info!("paragraph_proximities_calculated");

    let article_matrix =
        article_proximities(&proximities.matrix, corpus.articles(), config.diagonal)?;
    tracing::info!("article_proximities_calculated");
    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "compute_proximities");
    }

    fs::create_dir_all(&args.output)?;
    write_labeled_matrix(
        &args.output.join(PARAGRAPH_MATRIX_FILE),
        &corpus.labels(),
        &proximities.matrix,
    )?;
    write_labeled_matrix(
        &args.output.join(ARTICLE_MATRIX_FILE),
        &corpus.article_names(),
        &article_matrix,
    )?;
    write_neighbor_report(
        &args.output.join(CLOSEST_PARAGRAPHS_FILE),
        &corpus,
        &proximities.closest,
    )?;
    tracing::info!(output = %args.output.display(), "exports_written");

    print_summary(cli, args, &corpus, dimension, &config);
    Ok(())
}

/// File/default config with CLI flags layered on top.
fn load_config(args: &RunArgs) -> Result<AnalysisConfig> {
    let mut config = AnalysisConfig::load(args.config.as_deref())?;

    if let Some(top_k) = args.top_k {
        config.top_k = top_k;
    }
    if args.exclude_diagonal {
        config.diagonal = DiagonalPolicy::Exclude;
    }
    if let Some(endpoint) = &args.endpoint {
        config.embedding.url = endpoint.clone();
    }
    if let Some(model) = &args.model {
        config.embedding.model = model.clone();
    }
    if let Some(timeout) = args.timeout {
        config.embedding.timeout_seconds = timeout;
    }

    config.validate()?;
    Ok(config)
}

fn print_summary(
    cli: &Cli,
    args: &RunArgs,
    corpus: &Corpus,
    dimension: usize,
    config: &AnalysisConfig,
) {
    if cli.quiet {
        return;
    }

    match cli.format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "articles": corpus.articles().len(),
                "paragraphs": corpus.len(),
                "dimension": dimension,
                "top_k": config.top_k,
                "output": args.output.display().to_string(),
            });
            println!("{summary}");
        }
        OutputFormat::Human => {
            println!(
                "analyzed {} paragraphs across {} articles (dimension {})",
                corpus.len(),
                corpus.articles().len(),
                dimension
            );
            println!(
                "wrote {}, {}, {} to {}",
                PARAGRAPH_MATRIX_FILE,
                ARTICLE_MATRIX_FILE,
                CLOSEST_PARAGRAPHS_FILE,
                args.output.display()
            );
        }
    }
}
