use huffpack::CoderConfig;

use crate::cli::{CliError, CoderArgs, InputArgs, code_file};

pub fn roundtrip(args: InputArgs, coder: &CoderArgs, config: &CoderConfig) -> anyhow::Result<()> {
    if_tracing! {
        let span = tracing::span!(tracing::Level::INFO, "roundtrip", input = %args.input.display());
        let _enter = span.enter();
    }

    let coded = code_file(&args.input, coder, config)?;
    let bits = coded.table.encode(&coded.data).map_err(CliError::from)?;
    let decoded = coded.table.decode(&bits).map_err(CliError::from)?;

    if decoded != coded.data {
        let at = decoded.iter().zip(&coded.data).take_while(|(a, b)| a == b).count();
        return Err(CliError::Mismatch(format!(
            "decoded {} bytes, expected {}, first difference at byte {}",
            decoded.len(),
            coded.data.len(),
            at
        ))
        .into());
    }

    if_tracing! {
        tracing::info!(event = "roundtrip_complete", bytes = coded.data.len(), bits = bits.len(), "roundtrip finished");
    }

    println!("{}: {} bytes -> {} bits, roundtrip ok", args.input.display(), coded.data.len(), bits.len());
    Ok(())
}
