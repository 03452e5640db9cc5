//! Closest-paragraphs report export
//!
//! For each paragraph in corpus order: its label, its wrapped text, then
//! each of its closest paragraphs with label, score, and tab-indented
//! wrapped text in descending-score order. An empty paragraph produces an
//! empty entry rather than failing the export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use textwrap::Options;

use crate::corpus::Corpus;
use crate::error::Result;
use crate::similarity::Neighbor;

const WRAP_WIDTH: usize = 70;

/// Persist the closest-paragraphs report; `closest` is aligned with corpus
/// order.
pub fn write_neighbor_report(path: &Path, corpus: &Corpus, closest: &[Vec<Neighbor>]) -> Result<()> {
    debug_assert_eq!(corpus.len(), closest.len());
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    for (record, neighbors) in corpus.records().iter().zip(closest) {
        writeln!(out, "{}", record.id)?;
        writeln!(out, "{}\n", textwrap::fill(&record.text, WRAP_WIDTH))?;

        for neighbor in neighbors {
            let text = corpus.get(&neighbor.id).unwrap_or_default();
            let options = Options::new(WRAP_WIDTH)
                .initial_indent("\t")
                .subsequent_indent("\t");
            writeln!(out, "\t{} - {}", neighbor.id, neighbor.score)?;
            writeln!(out, "{}\n", textwrap::fill(text, options))?;
        }
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}
