use minigrad_cli::{run, TrainConfig};
use minigrad_core::MinigradError;
use minigrad_data::{CsvDataset, Dataset};
use std::path::PathBuf;

fn moons_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/moons_dataset.csv")
}

#[test]
fn test_bundled_dataset_loads() -> Result<(), MinigradError> {
    let dataset = CsvDataset::from_path(moons_path(), 2)?;
    assert_eq!(dataset.len(), 200);
    let ones = dataset.points().iter().filter(|p| p.label == 1).count();
    assert_eq!(ones, 100);
    Ok(())
}

#[test]
fn test_short_training_run_on_moons() -> Result<(), MinigradError> {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = TrainConfig {
        data_path: moons_path(),
        epochs: 15,
        learning_rate: 0.005,
        hidden: vec![8, 8],
        seed: Some(2024),
        ..TrainConfig::default()
    };
    let dataset = CsvDataset::from_path(&config.data_path, config.n_features)?;
    let history = run(&config, dataset)?;
    assert_eq!(history.len(), 15);
    assert!(history.iter().all(|s| s.loss.is_finite()));
    let best = history[1..].iter().map(|s| s.loss).fold(f64::INFINITY, f64::min);
    assert!(best < history[0].loss, "{:?}", history);
    Ok(())
}
