use huffpack::CoderConfig;

use crate::cli::{CoderArgs, InputArgs, code_file};

pub fn tree(args: InputArgs, coder: &CoderArgs, config: &CoderConfig) -> anyhow::Result<()> {
    let coded = code_file(&args.input, coder, config)?;
    print!("{}", coded.tree);
    Ok(())
}
