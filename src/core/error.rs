use thiserror::Error;

use super::types::BarrenRectangle;

#[derive(Debug, Error)]
pub enum LandError {
    #[error("cannot parse barren area {input:?}: {reason}")]
    Parse { input: String, reason: String },

    #[error("barren area {rect} lies outside the {rows}x{cols} plot")]
    OutOfBounds { rect: BarrenRectangle, rows: usize, cols: usize },

    #[error("barren area {rect} has its lower-left corner beyond its upper-right corner")]
    InvertedRectangle { rect: BarrenRectangle },

    #[error("invalid grid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("internal consistency failure: {0}")]
    InternalConsistency(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LandError {
    pub fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse { input: input.to_string(), reason: reason.into() }
    }

    /// Input errors are reported and skipped; everything else stops the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::OutOfBounds { .. } | Self::InvertedRectangle { .. })
    }
}

pub type Result<T> = std::result::Result<T, LandError>;
