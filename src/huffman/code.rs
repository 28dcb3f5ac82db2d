use core::fmt;
use core::hash::Hash;
use core::str::FromStr;
use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::config::{CoderConfig, SingleSymbolCode};
use crate::huffman::node::TreeNode;
use crate::huffman::tree::HuffmanTree;
use crate::huffman::{HuffmanError, Result};

if_tracing! {
    use tracing::{debug, warn};
}

/// A sequence of bits, most significant (first written) bit first.
///
/// Displays and serializes as a string of `'0'` and `'1'` characters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    bits: Vec<bool>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid character {0:?} in bit string, expected '0' or '1'")]
pub struct ParseCodeError(char);

impl Code {
    pub const fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Returns a copy of this code with `bit` appended.
    pub fn with(&self, bit: bool) -> Self {
        let mut bits = Vec::with_capacity(self.bits.len() + 1);
        bits.extend_from_slice(&self.bits);
        bits.push(bit);
        Self { bits }
    }

    pub fn clear(&mut self) {
        self.bits.clear();
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl From<Vec<bool>> for Code {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl Extend<bool> for Code {
    fn extend<T: IntoIterator<Item = bool>>(&mut self, iter: T) {
        self.bits.extend(iter);
    }
}

impl<'a> Extend<&'a bool> for Code {
    fn extend<T: IntoIterator<Item = &'a bool>>(&mut self, iter: T) {
        self.bits.extend(iter);
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(ParseCodeError(other)),
            })
            .collect::<core::result::Result<Vec<_>, _>>()
            .map(Code::from)
    }
}

impl Serialize for Code {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> core::result::Result<Ser::Ok, Ser::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Encoder and decoder for one prefix code, built together from a single tree walk.
///
/// Every encoder value is a decoder key and vice versa; no code is a prefix of another.
#[derive(Clone, Debug)]
pub struct CodeTable<S> {
    encoder: HashMap<S, Code>,
    decoder: HashMap<Code, S>,
}

impl<S: Eq + Hash> PartialEq for CodeTable<S> {
    fn eq(&self, other: &Self) -> bool {
        // the decoder is derived from the encoder
        self.encoder == other.encoder
    }
}

impl<S: Eq + Hash> Eq for CodeTable<S> {}

/// Walks the tree under `root` and assigns each leaf the bits along its path.
///
/// Descending to the heavier child appends `config.heavier_bit`, descending to the lighter
/// child appends the opposite bit. A root that is itself a leaf gets the code chosen by
/// `config.single_symbol`.
///
/// # Errors
///
/// [`HuffmanError::InvalidTree`] if `root` is `None`, or if two leaves carry the same symbol
/// (possible only in a tree assembled by hand rather than by [`build_tree`](crate::build_tree)).
pub fn derive_codes<S>(root: Option<&TreeNode<S>>, config: &CoderConfig) -> Result<CodeTable<S>>
where
    S: Eq + Hash + Clone,
{
    let root = root.ok_or(HuffmanError::InvalidTree)?;
    let heavier_bit = config.heavier_bit.heavier();
    let lighter_bit = config.heavier_bit.lighter();

    let mut encoder = HashMap::new();
    let mut decoder = HashMap::new();

    let mut stack = vec![(root, Code::new())];
    while let Some((node, code)) = stack.pop() {
        match node {
            TreeNode::Leaf { symbol, .. } => {
                let code = if code.is_empty() && config.single_symbol == SingleSymbolCode::SingleBit {
                    code.with(lighter_bit)
                } else {
                    code
                };
                if encoder.insert(symbol.clone(), code.clone()).is_some() {
                    return Err(HuffmanError::InvalidTree);
                }
                decoder.insert(code, symbol.clone());
            }
            TreeNode::Internal { heavier, lighter, .. } => {
                stack.push((lighter, code.with(lighter_bit)));
                stack.push((heavier, code.with(heavier_bit)));
            }
        }
    }

    if_tracing! {
        if root.is_leaf() {
            warn!(target: "huffman", policy = ?config.single_symbol, "single-symbol alphabet");
        }
        debug!(
            target: "huffman",
            symbols = encoder.len(),
            max_code_len = encoder.values().map(Code::len).max().unwrap_or(0),
            "code table derived"
        );
    }

    Ok(CodeTable { encoder, decoder })
}

impl<S> CodeTable<S>
where
    S: Eq + Hash + Clone + fmt::Debug,
{
    /// Derives codes from `tree` with the default configuration.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Result<Self> {
        Self::from_tree_with(tree, &CoderConfig::default())
    }

    pub fn from_tree_with(tree: &HuffmanTree<S>, config: &CoderConfig) -> Result<Self> {
        derive_codes(Some(tree.root()), config)
    }

    pub const fn encoder(&self) -> &HashMap<S, Code> {
        &self.encoder
    }

    pub const fn decoder(&self) -> &HashMap<Code, S> {
        &self.decoder
    }

    pub fn code(&self, symbol: &S) -> Option<&Code> {
        self.encoder.get(symbol)
    }

    /// Symbol whose entire code is `code`.
    pub fn lookup(&self, code: &Code) -> Option<&S> {
        self.decoder.get(code)
    }

    pub fn len(&self) -> usize {
        self.encoder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoder.is_empty()
    }

    pub fn max_code_len(&self) -> usize {
        self.encoder.values().map(Code::len).max().unwrap_or(0)
    }

    /// Checks that no code is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&Code> = self.decoder.keys().collect();
        // a prefix sorts directly before the codes that extend it
        codes.sort();
        codes.windows(2).all(|pair| !pair[0].is_prefix_of(pair[1]))
    }

    /// Concatenates the codes of `symbols`.
    pub fn encode<'a, I>(&self, symbols: I) -> Result<Code>
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        let mut out = Code::new();
        for symbol in symbols {
            let code = self
                .encoder
                .get(symbol)
                .ok_or_else(|| HuffmanError::UnknownSymbol(format!("{:?}", symbol)))?;
            out.extend(code.bits());
        }
        Ok(out)
    }

    /// Splits `bits` back into symbols, reading one bit at a time until the bits read so far
    /// form a whole code.
    ///
    /// # Errors
    ///
    /// * [`HuffmanError::TruncatedCode`] if the stream ends partway through a code.
    /// * [`HuffmanError::EmptyCodeStream`] if the table's only code is empty and `bits` is not.
    ///
    /// A one-symbol table whose code is empty cannot tell how many symbols a stream holds, so
    /// decoding the empty stream returns no symbols. Use [`lookup`](CodeTable::lookup) to map the
    /// empty code itself back to that symbol.
    pub fn decode(&self, bits: &Code) -> Result<Vec<S>> {
        if self.decoder.contains_key(&Code::new()) {
            return if bits.is_empty() { Ok(vec![]) } else { Err(HuffmanError::EmptyCodeStream) };
        }

        let mut out = vec![];
        let mut current = Code::new();
        for &bit in bits.bits() {
            current.push(bit);
            if let Some(symbol) = self.decoder.get(&current) {
                out.push(symbol.clone());
                current.clear();
            }
        }

        if !current.is_empty() {
            return Err(HuffmanError::TruncatedCode(current.len()));
        }
        Ok(out)
    }

    /// Bits needed to code `counts[s]` occurrences of every symbol `s`.
    pub fn expected_bits<'a, I>(&self, counts: I) -> Result<u128>
    where
        I: IntoIterator<Item = (&'a S, u64)>,
        S: 'a,
    {
        let mut total = 0u128;
        for (symbol, count) in counts {
            let code = self
                .encoder
                .get(symbol)
                .ok_or_else(|| HuffmanError::UnknownSymbol(format!("{:?}", symbol)))?;
            total += code.len() as u128 * u128::from(count);
        }
        Ok(total)
    }
}
