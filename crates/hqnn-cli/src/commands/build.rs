//! Build command implementation.

use anyhow::{Context, Result};
use console::style;
use std::fmt::Write as _;

use super::common::{load_config, write_output};

/// Execute the build command.
pub fn execute(
    layers: Option<usize>,
    config: Option<&str>,
    format: &str,
    output: Option<&str>,
) -> Result<()> {
    let cfg = load_config(config, layers)?;
    let model = cfg.build()?;

    match format.to_lowercase().as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&model.manifest())
                .context("Failed to serialize model")?;
            write_output(&json, output)?;
            if let Some(path) = output {
                eprintln!(
                    "{} Wrote {} parameters to {}",
                    style("✓").green().bold(),
                    model.num_parameters(),
                    style(path).green()
                );
            }
        }
        "text" => {
            let circuit = model.circuit();
            let mut text = circuit.to_string();
            let _ = writeln!(text, "readout: {}", model.readout());
            let _ = write!(text, "parameters: {}", model.num_parameters());

            if output.is_none() {
                println!(
                    "{} Built {} with {} layer(s) on a {}x{} grid",
                    style("→").cyan().bold(),
                    style(circuit.name()).green(),
                    cfg.num_layers,
                    cfg.grid.rows,
                    cfg.grid.cols
                );
            }
            write_output(&text, output)?;
        }
        other => anyhow::bail!("Unknown format: '{other}'. Available: text, json"),
    }

    Ok(())
}
