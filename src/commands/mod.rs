//! Command dispatch for parsim

mod run;
mod segment;

use std::time::Instant;

use parsim_core::error::Result;

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        Commands::Run(args) => run::execute(cli, args, start),
        Commands::Segment { file } => segment::execute(cli, file),
    }
}
