use std::fs;

use huffpack::{Code, CoderConfig};
use serde::Serialize;

use crate::cli::{CliError, CoderArgs, CodesArgs, code_file};

#[derive(Serialize, Debug)]
struct CodeEntry<'a> {
    symbol: u8,
    count: u64,
    code: &'a Code,
}

pub fn codes(args: CodesArgs, coder: &CoderArgs, config: &CoderConfig) -> anyhow::Result<()> {
    let coded = code_file(&args.input, coder, config)?;

    // histogram order is ascending byte value
    let entries: Vec<CodeEntry> = coded
        .histogram
        .iter()
        .filter_map(|&(symbol, count)| coded.table.code(&symbol).map(|code| CodeEntry { symbol, count, code }))
        .collect();

    if args.json || args.output.is_some() {
        let json = serde_json::to_string_pretty(&entries).map_err(CliError::from)?;
        if let Some(path) = &args.output {
            fs::write(path, &json).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            if_tracing! {
                tracing::info!(event = "codes_written", output = %path.display(), symbols = entries.len(), "code table written");
            }
        }
        if args.json {
            println!("{}", json);
            return Ok(());
        }
    }

    for entry in &entries {
        println!("{:>3} {:>10} {}", entry.symbol, entry.count, entry.code);
    }
    Ok(())
}
