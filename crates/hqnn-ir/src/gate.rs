//! Quantum gate types.
//!
//! Every gate here is a power gate: `G**t` where `G` is a Pauli operator (or
//! a two-qubit Pauli product) and `t` is the exponent. `t = 1` is the plain
//! Pauli; a symbolic `t` makes the gate trainable.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::IrResult;
use crate::parameter::{ParamResolver, ParameterExpression};

/// Standard gates with known semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Pauli-X raised to an exponent.
    XPow(ParameterExpression),
    /// Pauli-Y raised to an exponent.
    YPow(ParameterExpression),
    /// Pauli-Z raised to an exponent.
    ZPow(ParameterExpression),
    /// X⊗X interaction raised to an exponent.
    XXPow(ParameterExpression),
    /// Y⊗Y interaction raised to an exponent.
    YYPow(ParameterExpression),
    /// Z⊗Z interaction raised to an exponent.
    ZZPow(ParameterExpression),
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::XPow(_) => "X",
            StandardGate::YPow(_) => "Y",
            StandardGate::ZPow(_) => "Z",
            StandardGate::XXPow(_) => "XX",
            StandardGate::YYPow(_) => "YY",
            StandardGate::ZZPow(_) => "ZZ",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::XPow(_) | StandardGate::YPow(_) | StandardGate::ZPow(_) => 1,
            StandardGate::XXPow(_) | StandardGate::YYPow(_) | StandardGate::ZZPow(_) => 2,
        }
    }

    /// The exponent this gate is raised to.
    pub fn exponent(&self) -> &ParameterExpression {
        match self {
            StandardGate::XPow(t)
            | StandardGate::YPow(t)
            | StandardGate::ZPow(t)
            | StandardGate::XXPow(t)
            | StandardGate::YYPow(t)
            | StandardGate::ZZPow(t) => t,
        }
    }

    /// Same gate with a different exponent.
    #[must_use]
    pub fn with_exponent(&self, exponent: ParameterExpression) -> Self {
        match self {
            StandardGate::XPow(_) => StandardGate::XPow(exponent),
            StandardGate::YPow(_) => StandardGate::YPow(exponent),
            StandardGate::ZPow(_) => StandardGate::ZPow(exponent),
            StandardGate::XXPow(_) => StandardGate::XXPow(exponent),
            StandardGate::YYPow(_) => StandardGate::YYPow(exponent),
            StandardGate::ZZPow(_) => StandardGate::ZZPow(exponent),
        }
    }

    /// Check if this gate has symbolic parameters.
    pub fn is_parameterized(&self) -> bool {
        self.exponent().is_symbolic()
    }

    /// Resolve the exponent against `resolver`.
    pub fn resolve(&self, resolver: &ParamResolver) -> IrResult<Self> {
        Ok(self.with_exponent(self.exponent().resolve(resolver)?))
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exponent() {
            ParameterExpression::Constant(v) if *v == 1.0 => write!(f, "{}", self.name()),
            exponent => write!(f, "{}**{}", self.name(), exponent),
        }
    }
}
