//! HQNN Circuit Intermediate Representation
//!
//! This crate provides the data structures the QNN model is assembled from:
//! grid-addressed qubits, symbolic gate exponents, power gates, instructions
//! and an append-only circuit with moment scheduling.
//!
//! # Core Components
//!
//! - **Qubits**: [`GridQubit`], addressed by `(row, col)`
//! - **Parameters**: [`ParameterExpression`] for symbolic exponents, [`ParamResolver`]
//!   for binding trained weights to them by name
//! - **Gates**: [`StandardGate`], a closed set of Pauli power gates
//! - **Instructions**: [`Instruction`] combining a gate with its operands
//! - **Circuit**: [`Circuit`], the append-only builder
//! - **Observables**: [`PauliString`] for readouts
//!
//! # Example: A Trainable Coupling
//!
//! ```rust
//! use hqnn_ir::{Circuit, GridQubit, ParamResolver, ParameterExpression};
//!
//! let data = GridQubit::new(0, 0);
//! let readout = GridQubit::new(-1, -1);
//!
//! let mut circuit = Circuit::new("qnn");
//! circuit.zz(ParameterExpression::symbol("zz1-0"), data, readout).unwrap();
//!
//! assert_eq!(circuit.symbols(), vec!["zz1-0".to_string()]);
//!
//! // Later, bind the trained weight by name
//! let bound = circuit.resolve(&ParamResolver::new().with("zz1-0", 0.42)).unwrap();
//! assert!(!bound.is_parameterized());
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `X`, `Y`, `Z` | 1 | Pauli power gates `P**t` |
//! | `XX`, `YY`, `ZZ` | 2 | Two-qubit Pauli interaction power gates `PP**t` |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod observable;
pub mod parameter;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::Instruction;
pub use observable::{PauliOp, PauliString};
pub use parameter::{ParamResolver, ParameterExpression};
pub use qubit::GridQubit;
