//! QNN model assembly.

use hqnn_ir::{Circuit, GridQubit, ParamResolver, PauliString};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ModelConfig;
use crate::error::ModelResult;
use crate::layer::{CircuitLayerBuilder, PrefixPolicy};
use crate::symbol::expand_prefix;

/// A model circuit together with its readout observable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantumModel {
    circuit: Circuit,
    readout: PauliString,
    readout_qubit: GridQubit,
    data_qubits: Vec<GridQubit>,
}

/// What gets handed to the training framework.
#[derive(Debug, Serialize)]
pub struct ModelManifest<'a> {
    /// The parameterized circuit.
    pub circuit: &'a Circuit,
    /// Observable whose expectation is the model output.
    pub readout: &'a PauliString,
    /// Trainable symbols, in order of first appearance.
    pub symbols: Vec<String>,
}

impl QuantumModel {
    /// The parameterized model circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// The readout observable, `Z` on the readout qubit.
    pub fn readout(&self) -> &PauliString {
        &self.readout
    }

    /// The readout qubit.
    pub fn readout_qubit(&self) -> GridQubit {
        self.readout_qubit
    }

    /// The data qubits in coupling order.
    pub fn data_qubits(&self) -> &[GridQubit] {
        &self.data_qubits
    }

    /// Trainable symbols, in order of first appearance.
    pub fn symbols(&self) -> Vec<String> {
        self.circuit.symbols()
    }

    /// Number of trainable parameters.
    pub fn num_parameters(&self) -> usize {
        self.circuit.symbols().len()
    }

    /// Bind trained weights and return the concrete circuit.
    pub fn resolve(&self, weights: &ParamResolver) -> ModelResult<Circuit> {
        Ok(self.circuit.resolve(weights)?)
    }

    /// Hand-off view for serialization.
    pub fn manifest(&self) -> ModelManifest<'_> {
        ModelManifest {
            circuit: &self.circuit,
            readout: &self.readout,
            symbols: self.symbols(),
        }
    }

    /// Split into circuit and readout.
    pub fn into_parts(self) -> (Circuit, PauliString) {
        (self.circuit, self.readout)
    }
}

impl ModelConfig {
    /// Build the model circuit described by this configuration.
    ///
    /// Prefixes must be unique across the whole model; a collision is
    /// reported here instead of silently sharing weights.
    pub fn build(&self) -> ModelResult<QuantumModel> {
        self.validate()?;

        let data_qubits = self.data_qubits();
        let mut builder = CircuitLayerBuilder::new(data_qubits.iter().copied(), self.readout)
            .with_prefix_policy(PrefixPolicy::Unique);
        let mut circuit = Circuit::new(self.name.clone());

        for layer in 1..=self.num_layers {
            for spec in &self.schedule {
                let prefix = expand_prefix(&spec.prefix, layer);
                builder.append_layer(&mut circuit, spec.kind, &prefix)?;
            }
        }

        info!(
            name = %self.name,
            n_layers = self.num_layers,
            n_ops = circuit.num_ops(),
            depth = circuit.depth(),
            "built QNN model circuit"
        );

        Ok(QuantumModel {
            circuit,
            readout: PauliString::z(self.readout),
            readout_qubit: self.readout,
            data_qubits,
        })
    }
}

/// Create the reference QNN: a 4x4 data grid coupled to readout `(-1, -1)`,
/// with a `ZZ` layer (prefix `zz1<n>`) and an `XX` layer (prefix `xx<n>`)
/// for each layer `n` in `1..=num_layers`.
pub fn create_quantum_model(num_layers: usize) -> ModelResult<QuantumModel> {
    ModelConfig::default().with_num_layers(num_layers).build()
}
