//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::parameter::ParamResolver;
use crate::qubit::GridQubit;

/// A gate applied to an ordered list of qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate.
    pub gate: StandardGate,
    /// Qubits this instruction operates on, in gate order.
    pub qubits: Vec<GridQubit>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: StandardGate, qubits: impl IntoIterator<Item = GridQubit>) -> Self {
        Self {
            gate,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: GridQubit) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: StandardGate, q1: GridQubit, q2: GridQubit) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Check arity and operand distinctness.
    pub fn validate(&self) -> IrResult<()> {
        let expected = self.gate.num_qubits();
        let got = self.qubits.len() as u32;
        if expected != got {
            return Err(IrError::QubitCountMismatch {
                gate_name: self.gate.name().to_string(),
                expected,
                got,
            });
        }

        for (i, qubit) in self.qubits.iter().enumerate() {
            if self.qubits[..i].contains(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit: *qubit,
                    gate_name: Some(self.gate.name().to_string()),
                });
            }
        }

        Ok(())
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &str {
        self.gate.name()
    }

    /// Check whether this instruction touches `qubit`.
    pub fn acts_on(&self, qubit: GridQubit) -> bool {
        self.qubits.contains(&qubit)
    }

    /// Resolve the gate's parameters.
    pub fn resolve(&self, resolver: &ParamResolver) -> IrResult<Self> {
        Ok(Self {
            gate: self.gate.resolve(resolver)?,
            qubits: self.qubits.clone(),
        })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.gate)?;
        for (i, qubit) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{qubit}")?;
        }
        write!(f, ")")
    }
}
