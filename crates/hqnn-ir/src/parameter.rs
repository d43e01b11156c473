//! Parameter expressions and resolvers for parameterized circuits.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};

/// A gate exponent: either a fixed number or a named placeholder.
///
/// Circuits are built once with named placeholders and later resolved
/// against trained weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterExpression {
    /// A constant numeric value.
    Constant(f64),
    /// A symbolic parameter.
    Symbol(String),
}

impl ParameterExpression {
    /// Create a constant parameter.
    pub fn constant(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }

    /// Create a symbolic parameter.
    pub fn symbol(name: impl Into<String>) -> Self {
        ParameterExpression::Symbol(name.into())
    }

    /// Check if this is a symbol.
    pub fn is_symbolic(&self) -> bool {
        matches!(self, ParameterExpression::Symbol(_))
    }

    /// The concrete value, if this is a constant.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParameterExpression::Constant(v) => Some(*v),
            ParameterExpression::Symbol(_) => None,
        }
    }

    /// The symbol name, if this is a symbol.
    pub fn symbol_name(&self) -> Option<&str> {
        match self {
            ParameterExpression::Symbol(name) => Some(name),
            ParameterExpression::Constant(_) => None,
        }
    }

    /// Look the symbol up in `resolver` and return it as a constant.
    ///
    /// Constants pass through unchanged.
    pub fn resolve(&self, resolver: &ParamResolver) -> IrResult<ParameterExpression> {
        let value = match self {
            ParameterExpression::Constant(v) => *v,
            ParameterExpression::Symbol(name) => resolver
                .get(name)
                .ok_or_else(|| IrError::UnboundParameter(name.clone()))?,
        };
        if !value.is_finite() {
            return Err(IrError::NonFiniteParameter(self.to_string()));
        }
        Ok(ParameterExpression::Constant(value))
    }
}

impl fmt::Display for ParameterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterExpression::Constant(v) => write!(f, "{v}"),
            ParameterExpression::Symbol(name) => f.write_str(name),
        }
    }
}

impl From<f64> for ParameterExpression {
    fn from(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }
}

impl From<&str> for ParameterExpression {
    fn from(name: &str) -> Self {
        ParameterExpression::Symbol(name.to_string())
    }
}

/// Symbol-name to value bindings.
///
/// This is how trained weights are attached to a circuit: by exact symbol
/// name, never by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamResolver {
    values: FxHashMap<String, f64>,
}

impl ParamResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    /// Builder-style binding.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a binding.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ParamResolver {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant() {
        let p = ParameterExpression::constant(1.5);
        assert!(!p.is_symbolic());
        assert_eq!(p.as_f64(), Some(1.5));
    }

    #[test]
    fn test_symbol() {
        let p = ParameterExpression::symbol("zz11-0");
        assert!(p.is_symbolic());
        assert_eq!(p.as_f64(), None);
        assert_eq!(p.symbol_name(), Some("zz11-0"));
        assert_eq!(p.to_string(), "zz11-0");
    }

    #[test]
    fn test_resolve() {
        let resolver = ParamResolver::new().with("a", 3.0);
        let p = ParameterExpression::symbol("a");
        assert_eq!(p.resolve(&resolver).unwrap().as_f64(), Some(3.0));

        let constant = ParameterExpression::constant(0.5);
        assert_eq!(constant.resolve(&resolver).unwrap(), constant);

        let missing = ParameterExpression::symbol("c");
        match missing.resolve(&resolver) {
            Err(IrError::UnboundParameter(name)) => assert_eq!(name, "c"),
            other => panic!("expected UnboundParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_rejects_non_finite() {
        let resolver = ParamResolver::new().with("a", f64::INFINITY);
        let result = ParameterExpression::symbol("a").resolve(&resolver);
        assert!(matches!(result, Err(IrError::NonFiniteParameter(_))));
    }

    #[test]
    fn test_resolver_from_iter() {
        let resolver: ParamResolver = [("x-0", 0.1), ("x-1", 0.2)].into_iter().collect();
        assert_eq!(resolver.len(), 2);
        assert_eq!(resolver.get("x-1"), Some(0.2));
        assert_eq!(resolver.get("x-2"), None);
    }
}
