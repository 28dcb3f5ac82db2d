extern crate anyhow;
extern crate clap;
#[macro_use]
extern crate huffpack;
extern crate serde;
extern crate serde_json;
extern crate thiserror;

use std::process;

if_tracing! {
    use tracing_subscriber::{EnvFilter, fmt};
}

mod cli;

fn main() {
    if_tracing! {
        let subscriber = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }

    if let Err(e) = cli::run() {
        if_tracing! {
            tracing::error!(error = %e, "command failed");
        }
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}
