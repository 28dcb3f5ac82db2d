use huffpack::CoderConfig;

pub fn show_config(config: &CoderConfig) -> anyhow::Result<()> {
    println!("{}", config.to_json()?);
    Ok(())
}
