//! Input discovery and reading
//!
//! One plain-text file per article. Files are taken from the top level of
//! the input directory in lexical path order, which fixes the article order
//! for the whole run (corpus order, matrix order, export order).

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ParsimError, Result};

/// Find article files (`*.txt`) in the input directory, lexically sorted.
///
/// Fails with `NoInputFound` when the directory yields no articles, before
/// any embedding work happens.
pub fn discover_articles(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_article_file(path))
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(ParsimError::NoInputFound {
            dir: dir.to_path_buf(),
        });
    }
    Ok(files)
}

fn is_article_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'));
    let txt = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    txt && !hidden
}

/// Read every article as `(stable_name, raw_text)`, name = file stem.
pub fn read_articles(dir: &Path) -> Result<Vec<(String, String)>> {
    let files = discover_articles(dir)?;
    let mut articles = Vec::with_capacity(files.len());

    for path in files {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let raw = fs::read_to_string(&path)?;
        tracing::debug!(article = %name, bytes = raw.len(), "read_article");
        articles.push((name, raw));
    }

    Ok(articles)
}
