//! HQNN Model Construction
//!
//! Builds the quantum half of a hybrid classifier: every data qubit on a grid
//! is coupled to a single readout qubit by parameterized two-qubit
//! interactions, one layer at a time. Each coupling's exponent is a named
//! symbol (`<prefix>-<index>`) that the training framework binds a weight to.
//!
//! # Quick start
//!
//! ```rust
//! use hqnn_model::create_quantum_model;
//!
//! let model = create_quantum_model(2).unwrap();
//! // 16 data qubits x (ZZ + XX) x 2 layers
//! assert_eq!(model.circuit().num_ops(), 64);
//! assert_eq!(model.readout().to_string(), "Z(q(-1, -1))");
//! ```
//!
//! Layers can also be appended by hand:
//!
//! ```rust
//! use hqnn_ir::{Circuit, GridQubit};
//! use hqnn_model::{CircuitLayerBuilder, InteractionKind};
//!
//! let mut builder = CircuitLayerBuilder::new(GridQubit::rect(2, 2), GridQubit::new(-1, -1));
//! let mut circuit = Circuit::new("demo");
//! builder.append_layer(&mut circuit, InteractionKind::ZZ, "zz1").unwrap();
//! assert_eq!(circuit.symbols(), ["zz1-0", "zz1-1", "zz1-2", "zz1-3"]);
//! ```

pub mod config;
pub mod error;
pub mod layer;
pub mod model;
pub mod symbol;

pub use config::{GridConfig, LayerSpec, ModelConfig};
pub use error::{ModelError, ModelResult};
pub use layer::{CircuitLayerBuilder, InteractionKind, PrefixPolicy};
pub use model::{ModelManifest, QuantumModel, create_quantum_model};
pub use symbol::{SYMBOL_SEPARATOR, expand_prefix, symbol_name};
