//! Ploot library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod ingest;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Glyph set used to draw the plotted line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerKind {
    #[default]
    Braille,
    Dot,
    Block,
    HalfBlock,
}
