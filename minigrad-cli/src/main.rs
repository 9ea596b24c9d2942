use anyhow::Context;
use clap::Parser;
use minigrad_cli::{run, Cli};
use minigrad_data::CsvDataset;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config();
    config.validate().context("invalid training configuration")?;

    let dataset = CsvDataset::from_path(&config.data_path, config.n_features)
        .with_context(|| format!("failed to load dataset {}", config.data_path.display()))?;

    let history = run(&config, dataset)?;
    if let Some(last) = history.last() {
        log::info!(
            "finished after {} epochs: loss {:.6}, accuracy {:.2}%",
            history.len(),
            last.loss,
            last.accuracy
        );
    }
    Ok(())
}
