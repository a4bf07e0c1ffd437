//! Ordered buffer of emitted output pieces

use std::fmt;

/// Append-only sequence of output fragments.
#[derive(Debug, Clone, Default)]
pub struct Fragments {
    pieces: Vec<String>,
}

impl Fragments {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment. Empty fragments are dropped.
    pub fn push(&mut self, piece: impl Into<String>) {
        let piece = piece.into();
        if !piece.is_empty() {
            self.pieces.push(piece);
        }
    }

    /// Number of fragments written
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Concatenate every fragment written so far
    pub fn concat(&self) -> String {
        self.pieces.concat()
    }
}

impl fmt::Display for Fragments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.pieces {
            f.write_str(piece)?;
        }
        Ok(())
    }
}
