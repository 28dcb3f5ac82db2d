//! Optimal prefix codes from symbol frequency tables.
//!
//! Frequencies go in, a Huffman tree is built from them, and the tree is walked once to
//! produce a [`CodeTable`]: an encoder (symbol to bits) and its exact inverse, the decoder.
//!
//! ```
//! use huffpack::{CodeTable, HuffmanTree};
//!
//! let tree = HuffmanTree::build([('a', 1), ('b', 3)])?;
//! let table = CodeTable::from_tree(&tree)?;
//! let bits = table.encode(&['b', 'a', 'b'])?;
//! assert_eq!(bits.to_string(), "101");
//! assert_eq!(table.decode(&bits)?, vec!['b', 'a', 'b']);
//! # Ok::<(), huffpack::HuffmanError>(())
//! ```

#[macro_export]
macro_rules! if_tracing {
    {$($body:tt)*} => {
        ::cfg_if::cfg_if! {
            if #[cfg(feature = "tracing")] {
                $($body)*
            }
        }
    };
}

pub mod config;
pub mod huffman;

#[cfg(test)]
mod tests;

pub use config::{CoderConfig, HeavierBit, SingleSymbolCode};
pub use huffman::{
    Code, CodeTable, HuffmanError, HuffmanTree, Result, TreeNode, build_tree, byte_histogram, count_symbols,
    derive_codes, entropy,
};
