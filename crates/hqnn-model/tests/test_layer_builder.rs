//! Tests for the circuit layer builder and model assembly.

use hqnn_ir::{Circuit, GridQubit, ParamResolver, ParameterExpression, StandardGate};
use hqnn_model::{
    CircuitLayerBuilder, InteractionKind, LayerSpec, ModelConfig, ModelError, PrefixPolicy,
    create_quantum_model, symbol_name,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn q(row: i32, col: i32) -> GridQubit {
    GridQubit::new(row, col)
}

// ---------------------------------------------------------------------------
// Single layer
// ---------------------------------------------------------------------------

#[test]
fn four_qubit_zz_layer() {
    let data = vec![q(0, 0), q(0, 1), q(1, 0), q(1, 1)];
    let readout = q(-1, -1);
    let mut builder = CircuitLayerBuilder::new(data.clone(), readout);
    let mut circuit = Circuit::new("layer");

    builder
        .append_layer(&mut circuit, InteractionKind::ZZ, "zz1")
        .unwrap();

    assert_eq!(circuit.num_ops(), 4);
    for (i, inst) in circuit.instructions().iter().enumerate() {
        assert_eq!(
            inst.gate,
            StandardGate::ZZPow(ParameterExpression::symbol(format!("zz1-{i}")))
        );
        assert_eq!(inst.qubits, vec![data[i], readout]);
    }
    assert_eq!(circuit.symbols(), ["zz1-0", "zz1-1", "zz1-2", "zz1-3"]);
}

#[test]
fn layer_appends_after_existing_operations() {
    let mut circuit = Circuit::new("layer");
    circuit.x(1.0, q(0, 0)).unwrap();

    let mut builder = CircuitLayerBuilder::new(GridQubit::rect(1, 2), q(-1, -1));
    builder
        .append_layer(&mut circuit, InteractionKind::XX, "xx1")
        .unwrap();

    assert_eq!(circuit.num_ops(), 3);
    assert_eq!(circuit.instructions()[0].name(), "X");
    assert_eq!(circuit.instructions()[1].name(), "XX");
    assert_eq!(circuit.instructions()[2].name(), "XX");
}

#[test]
fn every_coupling_gets_its_own_moment() {
    let mut builder = CircuitLayerBuilder::new(GridQubit::rect(3, 3), q(-1, -1));
    let mut circuit = Circuit::new("layer");
    builder
        .append_layer(&mut circuit, InteractionKind::YY, "yy")
        .unwrap();

    assert_eq!(circuit.depth(), 9);
}

#[test]
fn empty_data_qubits_is_a_no_op() {
    let mut builder = CircuitLayerBuilder::new(Vec::new(), q(-1, -1));
    let mut circuit = Circuit::new("empty");
    circuit.z(1.0, q(-1, -1)).unwrap();

    builder
        .append_layer(&mut circuit, InteractionKind::ZZ, "zz1")
        .unwrap();

    assert_eq!(circuit.num_ops(), 1);
}

#[test]
fn repeated_build_is_reproducible() {
    let build = || {
        let mut builder = CircuitLayerBuilder::new(GridQubit::rect(4, 4), q(-1, -1));
        let mut circuit = Circuit::new("r");
        builder
            .append_layer(&mut circuit, InteractionKind::ZZ, "a")
            .unwrap();
        builder
            .append_layer(&mut circuit, InteractionKind::XX, "b")
            .unwrap();
        circuit
    };
    let first = build();
    let second = build();
    assert_eq!(first.instructions(), second.instructions());
    assert_eq!(first.symbols(), second.symbols());
}

// ---------------------------------------------------------------------------
// Prefix reuse
// ---------------------------------------------------------------------------

/// Reusing a prefix under the default policy makes two layers share the same
/// weights. This is accepted but visible through `duplicate_symbols`.
#[test]
fn shared_prefix_reuse_collides_symbols() {
    let mut builder = CircuitLayerBuilder::new(GridQubit::rect(1, 3), q(-1, -1));
    let mut circuit = Circuit::new("shared");

    builder
        .append_layer(&mut circuit, InteractionKind::ZZ, "p")
        .unwrap();
    builder
        .append_layer(&mut circuit, InteractionKind::XX, "p")
        .unwrap();

    assert_eq!(circuit.num_ops(), 6);
    assert_eq!(circuit.symbols().len(), 3);
    assert_eq!(circuit.duplicate_symbols(), ["p-0", "p-1", "p-2"]);
}

#[test]
fn unique_policy_rejects_reuse_without_touching_circuit() {
    let mut builder = CircuitLayerBuilder::new(GridQubit::rect(1, 3), q(-1, -1))
        .with_prefix_policy(PrefixPolicy::Unique);
    let mut circuit = Circuit::new("unique");

    builder
        .append_layer(&mut circuit, InteractionKind::ZZ, "p")
        .unwrap();
    let err = builder
        .append_layer(&mut circuit, InteractionKind::XX, "p")
        .unwrap_err();

    assert!(matches!(err, ModelError::PrefixReused { ref prefix } if prefix == "p"));
    assert_eq!(circuit.num_ops(), 3);
    assert!(circuit.duplicate_symbols().is_empty());
}

// ---------------------------------------------------------------------------
// Model assembly
// ---------------------------------------------------------------------------

#[test]
fn two_layer_model_has_four_prefix_families() {
    let model = create_quantum_model(2).unwrap();
    let circuit = model.circuit();
    let n = model.data_qubits().len();

    assert_eq!(n, 16);
    assert_eq!(circuit.num_ops(), 4 * n);
    assert!(circuit.duplicate_symbols().is_empty());
    assert_eq!(model.num_parameters(), 4 * n);

    let families: HashSet<String> = model
        .symbols()
        .iter()
        .map(|s| s.rsplit_once('-').unwrap().0.to_string())
        .collect();
    let expected: HashSet<String> = ["zz11", "xx1", "zz12", "xx2"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(families, expected);
}

#[test]
fn model_layers_alternate_zz_then_xx() {
    let model = create_quantum_model(2).unwrap();
    let names: Vec<&str> = model
        .circuit()
        .instructions()
        .chunks(16)
        .map(|layer| layer[0].name())
        .collect();
    assert_eq!(names, ["ZZ", "XX", "ZZ", "XX"]);
}

#[test]
fn model_resolves_with_full_weights() {
    let model = create_quantum_model(1).unwrap();
    let weights: ParamResolver = model
        .symbols()
        .into_iter()
        .enumerate()
        .map(|(i, s)| (s, i as f64 * 0.01))
        .collect();

    let bound = model.resolve(&weights).unwrap();
    assert!(!bound.is_parameterized());
    assert_eq!(bound.num_ops(), model.circuit().num_ops());

    let partial = ParamResolver::new().with(symbol_name("zz11", 0), 1.0);
    assert!(matches!(model.resolve(&partial), Err(ModelError::Ir(_))));
}

#[test]
fn config_collision_is_reported_before_building() {
    let mut config = ModelConfig::default();
    config.schedule = vec![
        LayerSpec::new(InteractionKind::ZZ, "same{}"),
        LayerSpec::new(InteractionKind::XX, "same{}"),
    ];
    assert!(matches!(
        config.build(),
        Err(ModelError::PrefixReused { ref prefix }) if prefix == "same1"
    ));
}

#[test]
fn config_from_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.yaml");
    std::fs::write(
        &path,
        "grid:\n  rows: 2\n  cols: 2\nnum_layers: 3\nschedule:\n  - kind: zz\n    prefix: \"z{}\"\n",
    )
    .unwrap();

    let model = ModelConfig::from_file(&path).unwrap().build().unwrap();
    assert_eq!(model.circuit().num_ops(), 12);
    assert_eq!(model.symbols()[4], "z2-0");
}

#[test]
fn config_from_malformed_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "num_layers: [not, a, number]\n").unwrap();

    assert!(matches!(
        ModelConfig::from_file(&path),
        Err(ModelError::ConfigParse { .. })
    ));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn layer_size_and_symbols(rows in 0_u32..5, cols in 0_u32..5, prefix in "[a-z]{1,4}[0-9]{0,2}") {
        let data = GridQubit::rect(rows, cols);
        let mut builder = CircuitLayerBuilder::new(data.clone(), q(-1, -1));
        let mut circuit = Circuit::new("prop");

        builder.append_layer(&mut circuit, InteractionKind::ZZ, &prefix).unwrap();

        prop_assert_eq!(circuit.num_ops(), data.len());
        for (i, inst) in circuit.instructions().iter().enumerate() {
            prop_assert_eq!(inst.qubits[0], data[i]);
            prop_assert_eq!(
                inst.gate.exponent(),
                &ParameterExpression::symbol(format!("{prefix}-{i}"))
            );
        }
        prop_assert!(circuit.duplicate_symbols().is_empty());
    }

    #[test]
    fn model_ops_scale_with_layers(num_layers in 0_usize..6) {
        let model = create_quantum_model(num_layers).unwrap();
        prop_assert_eq!(model.circuit().num_ops(), 32 * num_layers);
        prop_assert!(model.circuit().duplicate_symbols().is_empty());
    }
}
