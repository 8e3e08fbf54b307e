//! Error types for board operations.

use std::fmt;

/// Error type for square construction and notation parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for wire piece-code parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceCodeError {
    /// Code must be exactly two symbols (or empty for a vacant square)
    InvalidLength { code: String },
    /// First symbol must be 'w' or 'b'
    InvalidColor { symbol: char },
    /// Second symbol must be one of P, N, B, R, Q, K
    InvalidKind { symbol: char },
}

impl fmt::Display for PieceCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceCodeError::InvalidLength { code } => {
                write!(f, "Piece code '{code}' must be two symbols")
            }
            PieceCodeError::InvalidColor { symbol } => {
                write!(f, "Invalid color symbol '{symbol}', expected 'w' or 'b'")
            }
            PieceCodeError::InvalidKind { symbol } => {
                write!(f, "Invalid piece symbol '{symbol}'")
            }
        }
    }
}

impl std::error::Error for PieceCodeError {}
