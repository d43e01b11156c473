//! Layered circuit construction.
//!
//! A layer couples every data qubit to one readout qubit with the same
//! two-qubit interaction, each coupling raised to its own symbolic exponent.

use hqnn_ir::{Circuit, GridQubit, Instruction, ParameterExpression, StandardGate};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::error::{ModelError, ModelResult};
use crate::symbol::layer_symbol;

/// Two-qubit interactions a layer can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    /// Z⊗Z coupling.
    ZZ,
    /// X⊗X coupling.
    XX,
    /// Y⊗Y coupling.
    YY,
}

impl InteractionKind {
    /// The gate for this interaction raised to `exponent`.
    pub fn gate(self, exponent: ParameterExpression) -> StandardGate {
        match self {
            InteractionKind::ZZ => StandardGate::ZZPow(exponent),
            InteractionKind::XX => StandardGate::XXPow(exponent),
            InteractionKind::YY => StandardGate::YYPow(exponent),
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InteractionKind::ZZ => "zz",
            InteractionKind::XX => "xx",
            InteractionKind::YY => "yy",
        };
        f.write_str(s)
    }
}

/// How a builder treats a prefix it has already used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixPolicy {
    /// Accept the reuse. The new layer's symbols equal the earlier layer's,
    /// so both layers are driven by the same weights.
    #[default]
    Shared,
    /// Reject the reuse with [`ModelError::PrefixReused`].
    Unique,
}

/// Appends coupling layers between a fixed set of data qubits and a readout qubit.
#[derive(Debug, Clone)]
pub struct CircuitLayerBuilder {
    data_qubits: Vec<GridQubit>,
    readout: GridQubit,
    policy: PrefixPolicy,
    used_prefixes: FxHashSet<String>,
}

impl CircuitLayerBuilder {
    /// Create a builder over `data_qubits` (in coupling order) and `readout`.
    pub fn new(data_qubits: impl IntoIterator<Item = GridQubit>, readout: GridQubit) -> Self {
        Self {
            data_qubits: data_qubits.into_iter().collect(),
            readout,
            policy: PrefixPolicy::default(),
            used_prefixes: FxHashSet::default(),
        }
    }

    /// Set the prefix reuse policy.
    #[must_use]
    pub fn with_prefix_policy(mut self, policy: PrefixPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The data qubits, in coupling order.
    pub fn data_qubits(&self) -> &[GridQubit] {
        &self.data_qubits
    }

    /// The readout qubit.
    pub fn readout(&self) -> GridQubit {
        self.readout
    }

    /// The prefix reuse policy.
    pub fn prefix_policy(&self) -> PrefixPolicy {
        self.policy
    }

    /// Check whether `prefix` has been used by a previous layer.
    pub fn has_used_prefix(&self, prefix: &str) -> bool {
        self.used_prefixes.contains(prefix)
    }

    /// Append one layer of `kind` couplings to `circuit`.
    ///
    /// Data qubit `i` is coupled to the readout with exponent `prefix-i`.
    /// Either the whole layer is appended or, on error, nothing is; see
    /// [`Circuit::extend`].
    pub fn append_layer(
        &mut self,
        circuit: &mut Circuit,
        kind: InteractionKind,
        prefix: &str,
    ) -> ModelResult<()> {
        if self.used_prefixes.contains(prefix) {
            match self.policy {
                PrefixPolicy::Unique => {
                    return Err(ModelError::PrefixReused {
                        prefix: prefix.to_string(),
                    });
                }
                PrefixPolicy::Shared => {
                    warn!(prefix, "layer prefix reused; parameter symbols are shared");
                }
            }
        }

        let layer: Vec<Instruction> = self
            .data_qubits
            .iter()
            .enumerate()
            .map(|(i, &qubit)| {
                Instruction::two_qubit_gate(kind.gate(layer_symbol(prefix, i)), qubit, self.readout)
            })
            .collect();

        circuit.extend(layer)?;
        self.used_prefixes.insert(prefix.to_string());

        debug!(
            kind = %kind,
            prefix,
            n_ops = self.data_qubits.len(),
            "appended coupling layer"
        );
        Ok(())
    }
}
