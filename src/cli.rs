//! cli component of huffpack.
//!
//! every command reads a file, treats each byte as one symbol, and builds a code over the
//! byte histogram of that file:
//!
//! > `$exename codes <input> [--json] [--output <path>]`
//! > `$exename tree <input>`
//! > `$exename stats <input>`
//! > `$exename roundtrip <input>`
//! > `$exename config`
//!
//! the histogram covers all 256 byte values, zero counts included, unless `--skip-zero` is
//! passed. code shape can be adjusted with `--heavier-bit` and `--single-symbol`, or with a
//! json file passed through `--config`; flags win over the file.
use clap::{Args, Parser, Subcommand};
use huffpack::{CodeTable, CoderConfig, HeavierBit, HuffmanError, HuffmanTree, SingleSymbolCode, byte_histogram};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod codes;
pub mod roundtrip;
pub mod show_config;
pub mod stats;
pub mod tree;

/// Error types for CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("couldn't read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("couldn't write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Coding(#[from] HuffmanError),

    #[error("roundtrip mismatch: {0}")]
    Mismatch(String),
}

/// CLI arguments for huffpack
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub coder: CoderArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands for huffpack
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the code assigned to every byte value
    Codes(CodesArgs),

    /// Draw the Huffman tree sideways
    Tree(InputArgs),

    /// Report entropy and code length statistics
    Stats(InputArgs),

    /// Encode and decode a file in memory and check the result
    Roundtrip(InputArgs),

    /// Print the effective coder configuration
    Config,
}

/// Options shared by every command
#[derive(Args, Debug)]
pub struct CoderArgs {
    /// Load coder settings from a JSON file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Bit appended when descending to the heavier child
    #[arg(long, global = true, value_enum)]
    pub heavier_bit: Option<HeavierBit>,

    /// Code given to the only symbol of a one-symbol alphabet
    #[arg(long, global = true, value_enum)]
    pub single_symbol: Option<SingleSymbolCode>,

    /// Leave byte values that never occur out of the alphabet
    #[arg(long, global = true)]
    pub skip_zero: bool,
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// File whose bytes are the symbols to code
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct CodesArgs {
    /// File whose bytes are the symbols to code
    pub input: PathBuf,

    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON table to this file
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl CoderArgs {
    /// Settings from `--config` (or defaults), overridden by any flags given.
    pub fn effective_config(&self) -> anyhow::Result<CoderConfig> {
        let mut config = match &self.config {
            Some(path) => CoderConfig::from_file(path)?,
            None => CoderConfig::default(),
        };
        if let Some(heavier_bit) = self.heavier_bit {
            config = config.with_heavier_bit(heavier_bit);
        }
        if let Some(single_symbol) = self.single_symbol {
            config = config.with_single_symbol(single_symbol);
        }
        Ok(config)
    }
}

/// Everything a command needs to know about one input file.
pub struct Coded {
    pub data: Vec<u8>,
    pub histogram: Vec<(u8, u64)>,
    pub tree: HuffmanTree<u8>,
    pub table: CodeTable<u8>,
}

pub fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads `path`, counts its bytes and derives a code table for them.
pub fn code_file(path: &Path, coder: &CoderArgs, config: &CoderConfig) -> Result<Coded, CliError> {
    let data = read_input(path)?;
    let mut histogram = byte_histogram(&data);
    if coder.skip_zero {
        histogram.retain(|&(_, count)| count > 0);
    }

    if_tracing! {
        tracing::debug!(input = %path.display(), bytes = data.len(), symbols = histogram.len(), "input counted");
    }

    let tree = HuffmanTree::build(histogram.iter().copied())?;
    let table = CodeTable::from_tree_with(&tree, config)?;
    Ok(Coded {
        data,
        histogram,
        tree,
        table,
    })
}

/// Command execution functions
pub fn execute_command(cli: Cli) -> anyhow::Result<()> {
    let config = cli.coder.effective_config()?;
    match cli.command {
        Command::Codes(args) => codes::codes(args, &cli.coder, &config),
        Command::Tree(args) => tree::tree(args, &cli.coder, &config),
        Command::Stats(args) => stats::stats(args, &cli.coder, &config),
        Command::Roundtrip(args) => roundtrip::roundtrip(args, &cli.coder, &config),
        Command::Config => show_config::show_config(&config),
    }
}

/// Function to parse CLI arguments and execute appropriate command
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    execute_command(cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["huffpack", "stats", "in.bin", "--heavier-bit", "zero", "--skip-zero"]).unwrap();
        assert!(cli.coder.skip_zero);
        assert_eq!(cli.coder.heavier_bit, Some(HeavierBit::Zero));
        assert!(matches!(cli.command, Command::Stats(ref args) if args.input == Path::new("in.bin")));
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from(["huffpack", "--single-symbol", "single-bit", "config"]).unwrap();
        let config = cli.coder.effective_config().unwrap();
        assert_eq!(config.single_symbol, SingleSymbolCode::SingleBit);
        assert_eq!(config.heavier_bit, HeavierBit::One);
    }
}
