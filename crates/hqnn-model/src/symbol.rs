//! Parameter symbol naming.
//!
//! Symbol names are the contract with the training framework: weights are
//! bound to them by exact string match, so the format below must not change.

use hqnn_ir::ParameterExpression;

/// Separator between a layer prefix and the data-qubit index.
pub const SYMBOL_SEPARATOR: char = '-';

/// Placeholder in a prefix template that is replaced by the 1-based layer number.
pub const LAYER_PLACEHOLDER: &str = "{}";

/// Name of the symbol for data qubit `index` in the layer with `prefix`.
pub fn symbol_name(prefix: &str, index: usize) -> String {
    format!("{prefix}{SYMBOL_SEPARATOR}{index}")
}

/// Symbolic exponent for data qubit `index` in the layer with `prefix`.
pub fn layer_symbol(prefix: &str, index: usize) -> ParameterExpression {
    ParameterExpression::symbol(symbol_name(prefix, index))
}

/// Expand a prefix template for a 1-based layer number.
///
/// Every `{}` is replaced; a template without one yields the same prefix
/// for every layer.
pub fn expand_prefix(template: &str, layer: usize) -> String {
    template.replace(LAYER_PLACEHOLDER, &layer.to_string())
}
