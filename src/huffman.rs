//! Huffman tree construction and code table derivation.
//!
//! [`build_tree`] merges the two lightest nodes until a single root is left, and
//! [`derive_codes`] walks the finished tree to assign every leaf its bit sequence.

use thiserror::Error;

pub mod code;
pub mod frequency;
pub mod heap;
pub mod node;
pub mod tree;

pub use code::{Code, CodeTable, derive_codes};
pub use frequency::{byte_histogram, count_symbols, entropy};
pub use node::TreeNode;
pub use tree::{HuffmanTree, build_tree};

/// Errors raised while building a tree, deriving its codes, or coding a sequence with them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("cannot build a code for an empty alphabet")]
    EmptyAlphabet,

    #[error("symbol {symbol} has negative frequency {count}")]
    InvalidFrequency { symbol: String, count: i128 },

    #[error("symbol {0} appears more than once in the frequency table")]
    DuplicateSymbol(String),

    #[error("combined frequency overflowed")]
    FrequencyOverflow,

    #[error("cannot derive codes: the tree has no root or repeats a leaf symbol")]
    InvalidTree,

    #[error("symbol {0} has no code in this table")]
    UnknownSymbol(String),

    #[error("{0} trailing bits do not form a complete code")]
    TruncatedCode(usize),

    #[error("the only code in this table is empty, so a bit stream cannot be split into symbols")]
    EmptyCodeStream,
}

pub type Result<T, E = HuffmanError> = core::result::Result<T, E>;
