//! Argument-list construction.
//!
//! Mirrors the loosely typed calling convention of the collection:
//! `(provider, provider*, elements)` or `(domain, elements)`. Every shape
//! the typed constructors rule out at compile time is reported here as a
//! [`ConstructionError`].

use crate::{
    array::ArrayLib,
    errors::{ConstructionError, Error},
    options::Options,
    types::{ProviderRef, TypeLib},
    values::{Slot, Value},
};

/// Fewest arguments a call can have: one provider or domain, then the
/// elements.
pub const MIN_ARGS: usize = 2;

/// One argument of [`ArrayLib::from_args`].
#[derive(Debug, Clone)]
pub enum Arg {
    Provider(ProviderRef),
    Domain(TypeLib),
    Elements(Vec<Slot>),
    Value(Value),
}

impl Arg {
    /// Build an `Elements` argument from anything convertible to slots.
    pub fn elements<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Slot>,
    {
        Arg::Elements(elements.into_iter().map(Into::into).collect())
    }

    fn describe(&self) -> String {
        match self {
            Arg::Provider(provider) => format!("type provider '{}'", provider.name()),
            Arg::Domain(domain) => format!("type domain '{}'", domain),
            Arg::Elements(_) => String::from("a sequence"),
            Arg::Value(value) => format!("a value of type '{}'", value.type_name()),
        }
    }
}

impl From<ProviderRef> for Arg {
    fn from(provider: ProviderRef) -> Self {
        Arg::Provider(provider)
    }
}

impl From<TypeLib> for Arg {
    fn from(domain: TypeLib) -> Self {
        Arg::Domain(domain)
    }
}

impl From<Vec<Slot>> for Arg {
    fn from(elements: Vec<Slot>) -> Self {
        Arg::Elements(elements)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

impl ArrayLib {
    /// Build a collection from an argument list.
    ///
    /// The last argument must be the elements, either an `Elements` list or an
    /// array value. Everything before it is either a single pre-built domain
    /// or one or more providers.
    ///
    /// ```
    /// use arraylib_core::{Arg, ArrayLib, Type, Value};
    ///
    /// let array = ArrayLib::from_args([
    ///     Arg::from(Type::string()),
    ///     Arg::from(Type::undefined()),
    ///     Arg::elements([Value::Undefined, Value::from("b")]),
    /// ])
    /// .unwrap();
    /// assert_eq!(array.element_at(0), Ok(&Value::Undefined));
    /// ```
    pub fn from_args(args: impl IntoIterator<Item = Arg>) -> Result<Self, Error> {
        Self::from_args_with_options(args, &Options::default())
    }

    /// Like [`ArrayLib::from_args`], building with `options`.
    pub fn from_args_with_options(
        args: impl IntoIterator<Item = Arg>,
        options: &Options,
    ) -> Result<Self, Error> {
        let mut args: Vec<Arg> = args.into_iter().collect();
        if args.len() < MIN_ARGS {
            return Err(ConstructionError::MissingArguments {
                expected: MIN_ARGS,
                received: args.len(),
            }
            .into());
        }

        let elements = match args.pop() {
            Some(Arg::Elements(elements)) => elements,
            Some(Arg::Value(Value::Array(values))) => {
                values.into_iter().map(Slot::Present).collect()
            }
            other => {
                let found = other.map_or_else(|| String::from("nothing"), |arg| arg.describe());
                return Err(ConstructionError::NotASequence { found }.into());
            }
        };

        let domain = match args.as_slice() {
            [Arg::Domain(domain)] => domain.clone(),
            _ => {
                let providers = args
                    .into_iter()
                    .enumerate()
                    .map(|(position, arg)| match arg {
                        Arg::Provider(provider) => Ok(provider),
                        other => Err(ConstructionError::NotAProvider {
                            position,
                            found: other.describe(),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                TypeLib::new(providers)?
            }
        };

        Self::with_options(domain, elements, options)
    }
}
