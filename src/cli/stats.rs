use huffpack::{CoderConfig, entropy};

use crate::cli::{CoderArgs, InputArgs, code_file};

pub fn stats(args: InputArgs, coder: &CoderArgs, config: &CoderConfig) -> anyhow::Result<()> {
    let coded = code_file(&args.input, coder, config)?;

    let total = coded.tree.total_freq();
    let observed = coded.histogram.iter().filter(|&&(_, count)| count > 0).count();
    let bits = coded.table.expected_bits(coded.histogram.iter().map(|(symbol, count)| (symbol, *count)))?;
    let average = if total == 0 { 0.0 } else { bits as f64 / total as f64 };

    println!("input:           {}", args.input.display());
    println!("symbols:         {} ({} observed)", coded.table.len(), observed);
    println!("total count:     {}", total);
    println!("entropy:         {:.4} bits/symbol", entropy(coded.histogram.iter().map(|&(_, count)| count)));
    println!("average length:  {:.4} bits/symbol", average);
    println!("encoded size:    {} bits ({} bytes)", bits, bits.div_ceil(8));
    println!("max code length: {}", coded.table.max_code_len());
    Ok(())
}
