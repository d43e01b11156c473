//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use hqnn_model::ModelConfig;

/// Resolve the model configuration for a command.
///
/// Precedence, lowest to highest: built-in defaults or the YAML file,
/// `HQNN_*` environment variables, then the `--layers` flag. Validation
/// runs once, on the final values.
pub fn load_config(config: Option<&str>, layers: Option<usize>) -> Result<ModelConfig> {
    if let Some(path) = config {
        if !Path::new(path).exists() {
            anyhow::bail!("File not found: {path}");
        }
    }

    let cfg = ModelConfig::load(config, layers).with_context(|| match config {
        Some(path) => format!("Failed to load config: {path}"),
        None => "Invalid model configuration".to_string(),
    })?;

    debug!(
        layers = cfg.num_layers,
        rows = cfg.grid.rows,
        cols = cfg.grid.cols,
        "resolved model config"
    );
    Ok(cfg)
}

/// Write `content` to `path`, or to stdout when no path is given.
pub fn write_output(content: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write file: {path}"))
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
