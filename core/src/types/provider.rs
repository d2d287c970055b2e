use core::fmt;
use std::sync::Arc;

use crate::{types::TypeLib, values::Value};

/// Classifies whether a value belongs to one semantic type.
///
/// Implementations must be pure and total: no side effects, no panics, and
/// no unbounded work. Providers are stateless, so a single instance can be
/// shared by any number of domains through a [`ProviderRef`].
pub trait TypeProvider: fmt::Debug + Send + Sync {
    fn matches(&self, value: &Value) -> bool;

    /// Name used when a domain is described in diagnostics.
    fn name(&self) -> &str;
}

/// Shared handle to a type provider.
pub type ProviderRef = Arc<dyn TypeProvider>;

#[derive(Debug, Clone, Copy, Default)]
pub struct StringProvider;

impl TypeProvider for StringProvider {
    fn matches(&self, value: &Value) -> bool {
        matches!(value, Value::Str(_))
    }

    fn name(&self) -> &str {
        "String"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UndefinedProvider;

impl TypeProvider for UndefinedProvider {
    fn matches(&self, value: &Value) -> bool {
        value.is_undefined()
    }

    fn name(&self) -> &str {
        "Undefined"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullProvider;

impl TypeProvider for NullProvider {
    fn matches(&self, value: &Value) -> bool {
        matches!(value, Value::Null)
    }

    fn name(&self) -> &str {
        "Null"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BoolProvider;

impl TypeProvider for BoolProvider {
    fn matches(&self, value: &Value) -> bool {
        matches!(value, Value::Bool(_))
    }

    fn name(&self) -> &str {
        "Bool"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IntProvider;

impl TypeProvider for IntProvider {
    fn matches(&self, value: &Value) -> bool {
        matches!(value, Value::Int(_))
    }

    fn name(&self) -> &str {
        "Int"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FloatProvider;

impl TypeProvider for FloatProvider {
    fn matches(&self, value: &Value) -> bool {
        matches!(value, Value::Float(_))
    }

    fn name(&self) -> &str {
        "Float"
    }
}

/// Either an `Int` or a `Float`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberProvider;

impl TypeProvider for NumberProvider {
    fn matches(&self, value: &Value) -> bool {
        matches!(value, Value::Int(_) | Value::Float(_))
    }

    fn name(&self) -> &str {
        "Number"
    }
}

/// Arrays whose every element belongs to `element`.
#[derive(Debug, Clone)]
pub struct ArrayOfProvider {
    element: TypeLib,
    name: String,
}

impl ArrayOfProvider {
    pub fn new(element: TypeLib) -> Self {
        let name = format!("Array<{}>", element);
        Self { element, name }
    }

    pub fn element(&self) -> &TypeLib {
        &self.element
    }
}

impl TypeProvider for ArrayOfProvider {
    fn matches(&self, value: &Value) -> bool {
        match value {
            Value::Array(elements) => elements.iter().all(|e| self.element.matches(e)),
            _ => false,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Adapts a closure into a provider.
///
/// The closure is held to the same contract as any other provider: it must
/// be pure and total.
pub struct FnProvider<F> {
    name: String,
    predicate: F,
}

impl<F> FnProvider<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<F> fmt::Debug for FnProvider<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProvider")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F> TypeProvider for FnProvider<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn matches(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
