//! Pauli-product observables used as circuit readouts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::GridQubit;

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl fmt::Display for PauliOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PauliOp::I => "I",
            PauliOp::X => "X",
            PauliOp::Y => "Y",
            PauliOp::Z => "Z",
        };
        f.write_str(s)
    }
}

/// A tensor product of Pauli operators on grid qubits.
///
/// Stored sorted by qubit with identity factors omitted; qubits not listed
/// are implicitly I.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauliString {
    ops: Vec<(GridQubit, PauliOp)>,
}

impl PauliString {
    /// Construct from (qubit, op) pairs.
    ///
    /// Identity operators are dropped; when a qubit appears more than once
    /// the last operator wins.
    pub fn from_ops(ops: impl IntoIterator<Item = (GridQubit, PauliOp)>) -> Self {
        let mut v: Vec<(GridQubit, PauliOp)> = Vec::new();
        for (qubit, op) in ops {
            v.retain(|(q, _)| *q != qubit);
            if op != PauliOp::I {
                v.push((qubit, op));
            }
        }
        v.sort_by_key(|(q, _)| *q);
        Self { ops: v }
    }

    /// Single-qubit Z measurement, the usual classifier readout.
    pub fn z(qubit: GridQubit) -> Self {
        Self::from_ops([(qubit, PauliOp::Z)])
    }

    /// Single-qubit X measurement.
    pub fn x(qubit: GridQubit) -> Self {
        Self::from_ops([(qubit, PauliOp::X)])
    }

    /// Non-identity factors, sorted by qubit.
    pub fn ops(&self) -> &[(GridQubit, PauliOp)] {
        &self.ops
    }

    /// Qubits this observable acts on.
    pub fn qubits(&self) -> impl Iterator<Item = GridQubit> + '_ {
        self.ops.iter().map(|(q, _)| *q)
    }

    /// True if there are no non-identity operators.
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            return f.write_str("I");
        }
        for (i, (qubit, op)) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str("*")?;
            }
            write!(f, "{op}({qubit})")?;
        }
        Ok(())
    }
}
