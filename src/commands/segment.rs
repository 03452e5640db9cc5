//! `parsim segment` - segmentation inspection utility

use std::fs;
use std::path::Path;

use parsim_core::error::Result;
use parsim_core::segment::segment_article;

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, file: &Path) -> Result<()> {
    let raw = fs::read_to_string(file)?;
    let paragraphs = segment_article(&raw);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&paragraphs)?);
        }
        OutputFormat::Human => {
            for (index, paragraph) in paragraphs.iter().enumerate() {
                println!("{index:>4}  {paragraph}");
            }
        }
    }

    Ok(())
}
