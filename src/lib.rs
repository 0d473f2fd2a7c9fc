//! Word frequency index.
//!
//! Reads text line by line, normalizes every whitespace separated token and
//! records in a [`WordTree`] how often each word occurs and on which lines.

pub mod noise;
pub mod normalize;
pub mod printer;
pub mod reader;
pub mod tree;

use std::path::PathBuf;

use thiserror::Error;

pub use reader::{IndexStats, Token, Tokens, index_file, index_reader};
pub use tree::{Order, Traverse, WordEntry, WordTree};

#[derive(Debug, Error)]
pub enum IndexError {
    /// No word was given to the tree
    #[error("Invalid input: no word given")]
    InvalidInput,

    /// The input file could not be opened
    #[error("Could not open file: '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading the input or writing the report failed halfway through
    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),

    /// Traversal order name not one of in, pre, post, reverse
    #[error("Unknown traversal order '{0}', expected one of: in, pre, post, reverse")]
    UnknownOrder(String),
}
