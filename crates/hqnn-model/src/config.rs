//! Model configuration.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with HQNN_ prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Explicit layer count passed to [`ModelConfig::load`]
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values

use hqnn_ir::GridQubit;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::error::{ModelError, ModelResult};
use crate::layer::InteractionKind;
use crate::symbol::{LAYER_PLACEHOLDER, expand_prefix};

/// Shape of the data-qubit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows.
    #[serde(default = "default_grid_side")]
    pub rows: u32,
    /// Number of columns.
    #[serde(default = "default_grid_side")]
    pub cols: u32,
}

/// One entry of the per-layer schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Interaction used for this layer.
    pub kind: InteractionKind,
    /// Prefix template; `{}` is replaced by the 1-based layer number.
    pub prefix: String,
}

impl LayerSpec {
    /// Create a schedule entry.
    pub fn new(kind: InteractionKind, prefix: impl Into<String>) -> Self {
        Self {
            kind,
            prefix: prefix.into(),
        }
    }
}

/// Complete model configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Circuit name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Data-qubit grid, anchored at `(0, 0)`.
    #[serde(default)]
    pub grid: GridConfig,

    /// Readout qubit; must lie outside the data grid.
    #[serde(default = "default_readout")]
    pub readout: GridQubit,

    /// Number of times the schedule is repeated.
    #[serde(default = "default_num_layers")]
    pub num_layers: usize,

    /// Layers appended, in order, for every repetition.
    #[serde(default = "default_schedule")]
    pub schedule: Vec<LayerSpec>,
}

fn default_grid_side() -> u32 {
    4
}

fn default_name() -> String {
    "qnn".to_string()
}

fn default_readout() -> GridQubit {
    GridQubit::new(-1, -1)
}

fn default_num_layers() -> usize {
    1
}

fn default_schedule() -> Vec<LayerSpec> {
    vec![
        LayerSpec::new(InteractionKind::ZZ, "zz1{}"),
        LayerSpec::new(InteractionKind::XX, "xx{}"),
    ]
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_grid_side(),
            cols: default_grid_side(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            grid: GridConfig::default(),
            readout: default_readout(),
            num_layers: default_num_layers(),
            schedule: default_schedule(),
        }
    }
}

impl ModelConfig {
    /// Load configuration from a YAML file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ModelResult<Self> {
        let config = Self::parse_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML file without validating it.
    ///
    /// Use this when overrides are applied afterwards; call
    /// [`ModelConfig::validate`] once they are.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> ModelResult<Self> {
        let path_str = path.as_ref().display().to_string();
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| ModelError::ConfigIo {
            path: path_str.clone(),
            source: e,
        })?;

        serde_yaml_ng::from_str(&contents).map_err(|e| ModelError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Load configuration with the following precedence, lowest first:
    /// 1. Defaults, or the file if one is given
    /// 2. `HQNN_*` environment variables
    /// 3. An explicit layer count
    ///
    /// The result is validated only after every override is applied.
    pub fn load(config_file: Option<&str>, num_layers: Option<usize>) -> ModelResult<Self> {
        let mut config = match config_file {
            Some(path) => Self::parse_file(path)?,
            None => Self::default(),
        };

        config.apply_env();
        if let Some(n) = num_layers {
            config.num_layers = n;
        }

        config.validate()?;
        Ok(config)
    }

    /// Override fields from `HQNN_*` environment variables.
    ///
    /// Unparsable values are ignored with a warning.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    /// Override fields from `HQNN_*` variables looked up through `lookup`.
    pub fn apply_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = parse_var::<usize>(&lookup, "HQNN_NUM_LAYERS") {
            self.num_layers = val;
        }
        if let Some(val) = parse_var::<u32>(&lookup, "HQNN_GRID_ROWS") {
            self.grid.rows = val;
        }
        if let Some(val) = parse_var::<u32>(&lookup, "HQNN_GRID_COLS") {
            self.grid.cols = val;
        }
    }

    /// Set the number of layers.
    #[must_use]
    pub fn with_num_layers(mut self, num_layers: usize) -> Self {
        self.num_layers = num_layers;
        self
    }

    /// Set the data grid shape.
    #[must_use]
    pub fn with_grid(mut self, rows: u32, cols: u32) -> Self {
        self.grid = GridConfig { rows, cols };
        self
    }

    /// Data qubits in coupling order (row-major).
    pub fn data_qubits(&self) -> Vec<GridQubit> {
        GridQubit::rect(self.grid.rows, self.grid.cols)
    }

    /// Every layer prefix the model will use, in append order.
    pub fn prefixes(&self) -> Vec<String> {
        (1..=self.num_layers)
            .flat_map(|layer| {
                self.schedule
                    .iter()
                    .map(move |spec| expand_prefix(&spec.prefix, layer))
            })
            .collect()
    }

    /// Validate configuration.
    pub fn validate(&self) -> ModelResult<()> {
        if self.schedule.is_empty() {
            return Err(ModelError::InvalidConfig(
                "layer schedule must contain at least one entry".into(),
            ));
        }

        if self.readout.is_within(self.grid.rows, self.grid.cols) {
            return Err(ModelError::InvalidConfig(format!(
                "readout {} lies inside the {}x{} data grid",
                self.readout, self.grid.rows, self.grid.cols
            )));
        }

        if self.num_layers > 1 {
            if let Some(spec) = self
                .schedule
                .iter()
                .find(|s| !s.prefix.contains(LAYER_PLACEHOLDER))
            {
                return Err(ModelError::InvalidConfig(format!(
                    "prefix '{}' has no '{LAYER_PLACEHOLDER}' placeholder but {} layers are requested",
                    spec.prefix, self.num_layers
                )));
            }
        }

        let mut seen = FxHashSet::default();
        for prefix in self.prefixes() {
            if !seen.insert(prefix.clone()) {
                return Err(ModelError::PrefixReused { prefix });
            }
        }

        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(val) => Some(val),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_model() {
        let config = ModelConfig::default();
        assert_eq!(config.grid, GridConfig { rows: 4, cols: 4 });
        assert_eq!(config.readout, GridQubit::new(-1, -1));
        assert_eq!(config.num_layers, 1);
        assert_eq!(config.prefixes(), vec!["zz11", "xx1"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_prefixes_two_layers() {
        let config = ModelConfig::default().with_num_layers(2);
        assert_eq!(config.prefixes(), vec!["zz11", "xx1", "zz12", "xx2"]);
    }

    #[test]
    fn test_yaml_partial_uses_defaults() {
        let config: ModelConfig = serde_yaml_ng::from_str("num_layers: 3\n").unwrap();
        assert_eq!(config.num_layers, 3);
        assert_eq!(config.schedule, default_schedule());
        assert_eq!(config.grid.rows, 4);
    }

    #[test]
    fn test_yaml_full() {
        let yaml = r#"
name: small
grid:
  rows: 2
  cols: 3
readout:
  row: 5
  col: 5
num_layers: 2
schedule:
  - kind: yy
    prefix: "yy{}"
"#;
        let config: ModelConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.name, "small");
        assert_eq!(config.data_qubits().len(), 6);
        assert_eq!(config.readout, GridQubit::new(5, 5));
        assert_eq!(config.schedule[0].kind, InteractionKind::YY);
        assert_eq!(config.prefixes(), vec!["yy1", "yy2"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_readout_in_grid() {
        let mut config = ModelConfig::default();
        config.readout = GridQubit::new(1, 1);
        assert!(matches!(
            config.validate(),
            Err(ModelError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_schedule() {
        let mut config = ModelConfig::default();
        config.schedule.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_requires_placeholder_for_many_layers() {
        let mut config = ModelConfig::default().with_num_layers(2);
        config.schedule = vec![LayerSpec::new(InteractionKind::ZZ, "fixed")];
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("placeholder"));

        // A single layer does not need one.
        config.num_layers = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_cross_layer_collision() {
        // "zz1{}" at layer 1 and "zz{}" at layer 11 both expand to "zz11".
        let mut config = ModelConfig::default().with_num_layers(11);
        config.schedule = vec![
            LayerSpec::new(InteractionKind::ZZ, "zz1{}"),
            LayerSpec::new(InteractionKind::XX, "zz{}"),
        ];
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("zz11"));
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: rustc_hash::FxHashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_apply_vars_overrides_each_field() {
        let mut config = ModelConfig::default();
        config.apply_vars(vars(&[
            ("HQNN_NUM_LAYERS", "3"),
            ("HQNN_GRID_ROWS", "2"),
            ("HQNN_GRID_COLS", " 5 "),
        ]));
        assert_eq!(config.num_layers, 3);
        assert_eq!(config.grid, GridConfig { rows: 2, cols: 5 });
    }

    #[test]
    fn test_apply_vars_ignores_bad_values() {
        let mut config = ModelConfig::default();
        config.apply_vars(vars(&[
            ("HQNN_NUM_LAYERS", "many"),
            ("HQNN_GRID_ROWS", "-1"),
            ("HQNN_GRID_COLS", "3"),
        ]));
        assert_eq!(config.num_layers, 1);
        assert_eq!(config.grid, GridConfig { rows: 4, cols: 3 });
    }

    #[test]
    fn test_apply_vars_unset_leaves_config() {
        let mut config = ModelConfig::default();
        config.apply_vars(vars(&[]));
        assert_eq!(config, ModelConfig::default());
    }

    #[test]
    fn test_parse_file_defers_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"num_layers: 3\nschedule:\n  - kind: zz\n    prefix: w\n",
        )
        .unwrap();

        assert!(ModelConfig::from_file(file.path()).is_err());

        let mut config = ModelConfig::parse_file(file.path()).unwrap();
        assert_eq!(config.num_layers, 3);
        config.num_layers = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_missing() {
        let result = ModelConfig::from_file("/nonexistent/hqnn.yaml");
        assert!(matches!(result, Err(ModelError::ConfigIo { .. })));
    }
}
