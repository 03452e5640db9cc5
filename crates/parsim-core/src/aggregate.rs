//! Aggregation engine
//!
//! Rolls the paragraph proximity matrix up into an article-by-article matrix.
//! Because corpus order groups paragraphs contiguously by article, the block
//! for an article pair is a rectangle located by running row/column offsets
//! over the article length table; the article score is that block's mean.

use serde::{Deserialize, Serialize};

use crate::corpus::ArticleEntry;
use crate::error::{ParsimError, Result};
use crate::similarity::SquareMatrix;

/// Whether an article's self-average keeps the paragraph self-similarity
/// entries on the block diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagonalPolicy {
    /// Keep the diagonal entries (default)
    #[default]
    Include,
    /// Drop the diagonal entries before averaging
    Exclude,
}

/// Reduce the paragraph matrix to article-level average proximities.
///
/// `articles` must be the corpus's length table: same article order as the
/// matrix rows, lengths summing to the matrix size.
pub fn article_proximities(
    matrix: &SquareMatrix,
    articles: &[ArticleEntry],
    policy: DiagonalPolicy,
) -> Result<SquareMatrix> {
    let total: usize = articles.iter().map(|a| a.len).sum();
    if total != matrix.size() {
        return Err(ParsimError::failed(
            "aggregate article proximities",
            format!(
                "length table covers {total} paragraphs but matrix holds {}",
                matrix.size()
            ),
        ));
    }

    let mut result = SquareMatrix::zeroed(articles.len());
    let mut row_offset = 0;
    for (i, article) in articles.iter().enumerate() {
        let mut col_offset = 0;
        for (j, target) in articles.iter().enumerate() {
            let drop_diagonal = i == j && policy == DiagonalPolicy::Exclude;
            let value = block_mean(
                matrix,
                (row_offset, article.len),
                (col_offset, target.len),
                drop_diagonal,
            );
            result.set(i, j, value);
            col_offset += target.len;
        }
        row_offset += article.len;
    }

    Ok(result)
}

/// Mean over one rectangular block. For a self block under `Exclude` the
/// `row == col` entries are skipped; a single-paragraph article then has an
/// empty block and falls back to its lone self-similarity entry.
fn block_mean(
    matrix: &SquareMatrix,
    (row_start, rows): (usize, usize),
    (col_start, cols): (usize, usize),
    drop_diagonal: bool,
) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;

    for row in row_start..row_start + rows {
        for col in col_start..col_start + cols {
            if drop_diagonal && row == col {
                continue;
            }
            sum += matrix.get(row, col);
            count += 1;
        }
    }

    if count == 0 {
        if rows == 1 && cols == 1 {
            return matrix.get(row_start, col_start);
        }
        return 0.0;
    }
    sum / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(lengths: &[(&str, usize)]) -> Vec<ArticleEntry> {
        lengths
            .iter()
            .map(|&(name, len)| ArticleEntry {
                name: name.to_string(),
                len,
            })
            .collect()
    }

    fn matrix_from_rows(rows: &[&[f64]]) -> SquareMatrix {
        let mut matrix = SquareMatrix::zeroed(rows.len());
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                matrix.set(i, j, value);
            }
        }
        matrix
    }

    #[test]
    fn test_cross_block_mean_of_constant_is_constant() {
        // Articles of lengths 2 and 3; cross blocks filled with 0.25.
        let mut matrix = SquareMatrix::zeroed(5);
        for row in 0..2 {
            for col in 2..5 {
                matrix.set(row, col, 0.25);
                matrix.set(col, row, 0.25);
            }
        }
        let articles = table(&[("a", 2), ("b", 3)]);
        let result = article_proximities(&matrix, &articles, DiagonalPolicy::Include).unwrap();
        assert_eq!(result.get(0, 1), 0.25);
        assert_eq!(result.get(1, 0), 0.25);
    }

    #[test]
    fn test_single_paragraph_self_entry_matches_paragraph_matrix() {
        let matrix = matrix_from_rows(&[&[0.8, 0.1], &[0.1, 0.9]]);
        let articles = table(&[("a", 1), ("b", 1)]);

        for policy in [DiagonalPolicy::Include, DiagonalPolicy::Exclude] {
            let result = article_proximities(&matrix, &articles, policy).unwrap();
            assert_eq!(result.get(0, 0), 0.8);
            assert_eq!(result.get(1, 1), 0.9);
            assert_eq!(result.get(0, 1), 0.1);
        }
    }

    #[test]
    fn test_self_block_diagonal_policies() {
        // One article, two paragraphs: self entries 1.0, cross entries 0.5.
        let matrix = matrix_from_rows(&[&[1.0, 0.5], &[0.5, 1.0]]);
        let articles = table(&[("a", 2)]);

        let included =
            article_proximities(&matrix, &articles, DiagonalPolicy::Include).unwrap();
        assert_eq!(included.get(0, 0), 0.75);

        let excluded =
            article_proximities(&matrix, &articles, DiagonalPolicy::Exclude).unwrap();
        assert_eq!(excluded.get(0, 0), 0.5);
    }

    #[test]
    fn test_offsets_advance_in_table_order() {
        let matrix = matrix_from_rows(&[
            &[1.0, 0.0, 0.2],
            &[0.0, 1.0, 0.4],
            &[0.2, 0.4, 1.0],
        ]);
        let articles = table(&[("a", 2), ("b", 1)]);
        let result = article_proximities(&matrix, &articles, DiagonalPolicy::Include).unwrap();

        assert_eq!(result.size(), 2);
        // a x b block is rows 0..2, col 2.
        assert!((result.get(0, 1) - 0.3).abs() < 1e-12);
        assert!((result.get(1, 0) - 0.3).abs() < 1e-12);
        assert_eq!(result.get(1, 1), 1.0);
    }

    #[test]
    fn test_mismatched_length_table_rejected() {
        let matrix = SquareMatrix::zeroed(3);
        let articles = table(&[("a", 2)]);
        assert!(article_proximities(&matrix, &articles, DiagonalPolicy::Include).is_err());
    }
}
