//! Runtime type domains.
//!
//! A [`TypeProvider`] decides membership in one type. A [`TypeLib`] combines
//! providers into a domain. [`Type`] hands out the shared built-in
//! providers.

pub mod provider;
pub mod type_lib;


use std::sync::Arc;

use once_cell::sync::Lazy;

pub use provider::{
    ArrayOfProvider, BoolProvider, FloatProvider, FnProvider, IntProvider, NullProvider,
    NumberProvider, ProviderRef, StringProvider, TypeProvider, UndefinedProvider,
};
pub use type_lib::TypeLib;

use crate::values::Value;

static STRING: Lazy<ProviderRef> = Lazy::new(|| Arc::new(StringProvider));
static UNDEFINED: Lazy<ProviderRef> = Lazy::new(|| Arc::new(UndefinedProvider));
static NULL: Lazy<ProviderRef> = Lazy::new(|| Arc::new(NullProvider));
static BOOL: Lazy<ProviderRef> = Lazy::new(|| Arc::new(BoolProvider));
static INT: Lazy<ProviderRef> = Lazy::new(|| Arc::new(IntProvider));
static FLOAT: Lazy<ProviderRef> = Lazy::new(|| Arc::new(FloatProvider));
static NUMBER: Lazy<ProviderRef> = Lazy::new(|| Arc::new(NumberProvider));

/// Namespace of ready-made providers.
///
/// The stateless built-ins are process-wide singletons; every call returns a
/// handle to the same instance.
///
/// ```
/// use arraylib_core::{Type, TypeLib, Value};
///
/// let domain = TypeLib::new([Type::string(), Type::undefined()]).unwrap();
/// assert!(domain.matches(&Value::from("a")));
/// assert!(domain.matches(&Value::Undefined));
/// assert!(!domain.matches(&Value::Null));
/// ```
pub struct Type;

impl Type {
    pub fn string() -> ProviderRef {
        STRING.clone()
    }

    pub fn undefined() -> ProviderRef {
        UNDEFINED.clone()
    }

    pub fn null() -> ProviderRef {
        NULL.clone()
    }

    pub fn bool() -> ProviderRef {
        BOOL.clone()
    }

    pub fn int() -> ProviderRef {
        INT.clone()
    }

    pub fn float() -> ProviderRef {
        FLOAT.clone()
    }

    pub fn number() -> ProviderRef {
        NUMBER.clone()
    }

    /// Arrays whose elements all belong to `element`.
    pub fn array_of(element: TypeLib) -> ProviderRef {
        Arc::new(ArrayOfProvider::new(element))
    }

    /// A provider backed by a closure.
    pub fn custom<F>(name: impl Into<String>, predicate: F) -> ProviderRef
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Arc::new(FnProvider::new(name, predicate))
    }
}
