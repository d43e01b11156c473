//! Symbols command implementation.

use anyhow::Result;

use super::common::load_config;

/// Print every trainable symbol of the model, one per line.
pub fn execute(layers: Option<usize>, config: Option<&str>) -> Result<()> {
    let model = load_config(config, layers)?.build()?;
    for symbol in model.symbols() {
        println!("{symbol}");
    }
    Ok(())
}
