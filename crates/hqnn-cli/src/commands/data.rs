//! Data command implementation.

use anyhow::{Context, Result};
use console::style;

use hqnn_data::{Dataset, MinMaxScaler, train_test_split};

/// Load, scale and split a CSV dataset and print a summary.
pub fn execute(input: &str, target: &str, test_size: f64, seed: u64, head: usize) -> Result<()> {
    println!(
        "{} Loading {} (target column {})",
        style("→").cyan().bold(),
        style(input).green(),
        style(target).yellow()
    );

    let dataset = Dataset::from_csv_path(input, target)
        .with_context(|| format!("Failed to load dataset: {input}"))?;
    println!(
        "  Loaded: {} samples, {} features, {:.1}% positive",
        dataset.n_samples(),
        dataset.n_features(),
        dataset.positive_fraction() * 100.0
    );

    if head > 0 {
        println!();
        print!("{}", dataset.head(head));
    }

    let (_, scaled) = MinMaxScaler::fit_transform(dataset.features())?;
    let split = train_test_split(&scaled, dataset.labels(), test_size, seed)?;

    println!();
    println!("{} Scaled features to [0, 1]", style("✓").green().bold());
    println!(
        "  Split: {} train / {} test (test size {}, seed {})",
        style(split.n_train()).yellow(),
        style(split.n_test()).yellow(),
        test_size,
        seed
    );

    Ok(())
}
