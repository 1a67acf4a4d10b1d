use std::io;

use anyhow::Context;
use log::info;
use max_min::{Config, ReaderSource, logging};

fn main() -> anyhow::Result<()> {
    logging::init_logger();

    let config = Config::from_env();
    match &config.output_path {
        Some(path) => info!("result goes to {}", path.display()),
        None => info!("result goes to stdout"),
    }
    let sink = config.sink();

    let source = ReaderSource::new(io::stdin().lock());
    let span = max_min::run(source, sink).context("failed to produce the minimum range")?;
    info!("minimum range {}", span);
    Ok(())
}
