//! Article segmentation
//!
//! Articles arrive as raw text with paragraphs separated by blank lines and
//! the occasional numeric section header ("3. The Soul") on the first line of
//! a block. Headers are dropped from the paragraph content but never change
//! the paragraph count: an article with N raw blocks always yields N entries,
//! so downstream matrix indexes stay aligned with the source.

/// Split one raw article into its ordered paragraph texts
pub fn segment_article(raw: &str) -> Vec<String> {
    raw.split("\n\n").map(segment_block).collect()
}

fn segment_block(block: &str) -> String {
    let lines: Vec<&str> = block.split('\n').collect();
    let body = if lines.len() > 1 && starts_with_digit(lines[0]) {
        &lines[1..]
    } else {
        &lines[..]
    };
    body.join(" ")
}

fn starts_with_digit(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
}
