//! High-level circuit builder API.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::Instruction;
use crate::parameter::{ParamResolver, ParameterExpression};
use crate::qubit::GridQubit;

/// A quantum circuit.
///
/// Instructions are stored in append order and are never reordered or
/// removed. Each instruction is also assigned to a moment: the earliest time
/// slice after every earlier instruction that shares a qubit with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "CircuitData", try_from = "CircuitData")]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Instructions in append order.
    instructions: Vec<Instruction>,
    /// Moment index of each instruction, parallel to `instructions`.
    moment_of: Vec<usize>,
    /// First free moment on each qubit seen so far.
    frontier: FxHashMap<GridQubit, usize>,
    /// Number of moments.
    depth: usize,
}

/// Serialized form: the name and the instruction list. Moments are rebuilt
/// on load by replaying [`Circuit::append`].
#[derive(Serialize, Deserialize)]
struct CircuitData {
    name: String,
    instructions: Vec<Instruction>,
}

impl From<Circuit> for CircuitData {
    fn from(circuit: Circuit) -> Self {
        Self {
            name: circuit.name,
            instructions: circuit.instructions,
        }
    }
}

impl TryFrom<CircuitData> for Circuit {
    type Error = IrError;

    fn try_from(data: CircuitData) -> IrResult<Self> {
        let mut circuit = Circuit::new(data.name);
        circuit.extend(data.instructions)?;
        Ok(circuit)
    }
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: vec![],
            moment_of: vec![],
            frontier: FxHashMap::default(),
            depth: 0,
        }
    }

    /// Append an instruction at the end of the circuit.
    ///
    /// The instruction is validated first; on error the circuit is unchanged.
    pub fn append(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        instruction.validate()?;
        self.schedule(instruction);
        Ok(self)
    }

    /// Append several instructions in order, all or nothing.
    ///
    /// Every instruction is validated before any is appended, so on error
    /// the circuit is unchanged.
    pub fn extend(
        &mut self,
        instructions: impl IntoIterator<Item = Instruction>,
    ) -> IrResult<&mut Self> {
        let instructions: Vec<Instruction> = instructions.into_iter().collect();
        for instruction in &instructions {
            instruction.validate()?;
        }
        for instruction in instructions {
            self.schedule(instruction);
        }
        Ok(self)
    }

    /// Place an already validated instruction in the earliest free moment.
    fn schedule(&mut self, instruction: Instruction) {
        let moment = instruction
            .qubits
            .iter()
            .map(|q| self.frontier.get(q).copied().unwrap_or(0))
            .max()
            .unwrap_or(0);

        for &qubit in &instruction.qubits {
            self.frontier.insert(qubit, moment + 1);
        }
        self.depth = self.depth.max(moment + 1);
        self.moment_of.push(moment);
        self.instructions.push(instruction);
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply `X**exponent`.
    pub fn x(
        &mut self,
        exponent: impl Into<ParameterExpression>,
        qubit: GridQubit,
    ) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(
            StandardGate::XPow(exponent.into()),
            qubit,
        ))
    }

    /// Apply `Y**exponent`.
    pub fn y(
        &mut self,
        exponent: impl Into<ParameterExpression>,
        qubit: GridQubit,
    ) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(
            StandardGate::YPow(exponent.into()),
            qubit,
        ))
    }

    /// Apply `Z**exponent`.
    pub fn z(
        &mut self,
        exponent: impl Into<ParameterExpression>,
        qubit: GridQubit,
    ) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(
            StandardGate::ZPow(exponent.into()),
            qubit,
        ))
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply `XX**exponent`.
    pub fn xx(
        &mut self,
        exponent: impl Into<ParameterExpression>,
        q1: GridQubit,
        q2: GridQubit,
    ) -> IrResult<&mut Self> {
        self.append(Instruction::two_qubit_gate(
            StandardGate::XXPow(exponent.into()),
            q1,
            q2,
        ))
    }

    /// Apply `YY**exponent`.
    pub fn yy(
        &mut self,
        exponent: impl Into<ParameterExpression>,
        q1: GridQubit,
        q2: GridQubit,
    ) -> IrResult<&mut Self> {
        self.append(Instruction::two_qubit_gate(
            StandardGate::YYPow(exponent.into()),
            q1,
            q2,
        ))
    }

    /// Apply `ZZ**exponent`.
    pub fn zz(
        &mut self,
        exponent: impl Into<ParameterExpression>,
        q1: GridQubit,
        q2: GridQubit,
    ) -> IrResult<&mut Self> {
        self.append(Instruction::two_qubit_gate(
            StandardGate::ZZPow(exponent.into()),
            q1,
            q2,
        ))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of instructions.
    pub fn num_ops(&self) -> usize {
        self.instructions.len()
    }

    /// Alias for [`Circuit::num_ops`].
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// True if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of moments.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Instructions in append order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Moment index of the instruction at `index`.
    pub fn moment_of(&self, index: usize) -> Option<usize> {
        self.moment_of.get(index).copied()
    }

    /// Instructions grouped by moment. Within a moment, append order is kept.
    pub fn moments(&self) -> Vec<Vec<&Instruction>> {
        let mut moments: Vec<Vec<&Instruction>> = vec![Vec::new(); self.depth];
        for (instruction, &moment) in self.instructions.iter().zip(&self.moment_of) {
            moments[moment].push(instruction);
        }
        moments
    }

    /// All qubits touched by the circuit, sorted.
    pub fn qubits(&self) -> Vec<GridQubit> {
        let set: BTreeSet<GridQubit> = self.frontier.keys().copied().collect();
        set.into_iter().collect()
    }

    /// Number of distinct qubits touched.
    pub fn num_qubits(&self) -> usize {
        self.frontier.len()
    }

    /// Parameter symbols in order of first appearance, without repeats.
    pub fn symbols(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut out = Vec::new();
        for instruction in &self.instructions {
            if let Some(symbol) = instruction.gate.exponent().symbol_name() {
                if seen.insert(symbol) {
                    out.push(symbol.to_string());
                }
            }
        }
        out
    }

    /// Symbols that appear on more than one instruction, in order of first appearance.
    ///
    /// A non-empty result means those instructions share a single trainable
    /// weight once the circuit is handed to a training framework.
    pub fn duplicate_symbols(&self) -> Vec<String> {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for instruction in &self.instructions {
            if let Some(symbol) = instruction.gate.exponent().symbol_name() {
                *counts.entry(symbol).or_insert(0) += 1;
            }
        }
        self.symbols()
            .into_iter()
            .filter(|s| counts.get(s.as_str()).copied().unwrap_or(0) > 1)
            .collect()
    }

    /// True if any instruction still has a symbolic exponent.
    pub fn is_parameterized(&self) -> bool {
        self.instructions.iter().any(|i| i.gate.is_parameterized())
    }

    /// Return a copy with every symbol replaced by its bound value.
    pub fn resolve(&self, resolver: &ParamResolver) -> IrResult<Circuit> {
        let mut resolved = Circuit::new(self.name.clone());
        for instruction in &self.instructions {
            resolved.append(instruction.resolve(resolver)?)?;
        }
        Ok(resolved)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "circuit {} ({} ops, {} qubits, depth {})",
            self.name,
            self.num_ops(),
            self.num_qubits(),
            self.depth
        )?;
        for (m, moment) in self.moments().iter().enumerate() {
            write!(f, "  moment {m}:")?;
            for (i, instruction) in moment.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, " {instruction}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
