//! Parsim Core Library
//!
//! Engine for paragraph-level semantic proximity analysis: segmentation,
//! corpus indexing, the embedding boundary, the similarity and aggregation
//! engines, and export adapters.

pub mod aggregate;
pub mod config;
pub mod corpus;
pub mod embed;
pub mod error;
pub mod export;
pub mod format;
pub mod input;
pub mod logging;
pub mod segment;
pub mod similarity;
