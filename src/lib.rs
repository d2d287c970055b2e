//! ArrayLib - typed collections validated against runtime type domains
//!
//! # Overview
//!
//! An [`ArrayLib`] is a fixed-length, index-addressable sequence whose
//! elements are checked once, at construction, against a [`TypeLib`]: the
//! union of one or more [`TypeProvider`]s. After that, its reads
//! (`element_at`, `first`, `count`, `any`, `to_array`) never hand back a
//! value outside the domain.
//!
//! # Quick Start
//!
//! ```
//! use arraylib::{ArrayLib, Type, TypeLib, Value};
//!
//! let domain = TypeLib::new([Type::string()]).unwrap();
//! let array = ArrayLib::new(domain, ["a", "b"]).unwrap();
//!
//! assert_eq!(array.element_at(-1), Ok(&Value::from("b")));
//! assert_eq!(array.first(), Ok(&Value::from("a")));
//! assert_eq!(array.count(), 2);
//! assert!(!array.any_where(|e| e.as_str() == Some("c")));
//! ```
//!
//! # Missing positions
//!
//! Reading past either end, or reading a hole, yields `Value::Undefined`
//! when the domain admits the absent value, and [`Error::OutOfBounds`]
//! otherwise:
//!
//! ```
//! use arraylib::{ArrayLib, Error, Slot, Type, Value};
//!
//! let optional = ArrayLib::with_providers(
//!     [Type::string(), Type::undefined()],
//!     vec![Slot::Hole, Slot::from("b")],
//! )
//! .unwrap();
//! assert_eq!(optional.element_at(0), Ok(&Value::Undefined));
//!
//! let strict = ArrayLib::with_providers([Type::string()], vec![Slot::Hole, Slot::from("b")]).unwrap();
//! assert_eq!(strict.element_at(0), Err(Error::OutOfBounds { index: 0, len: 2 }));
//! ```

mod error_renderer;

pub use arraylib_core::{
    Arg, ArrayLib, ConstructionError, Error, Options, ProviderRef, Slot, Type, TypeLib,
    TypeProvider, Value,
};
pub use arraylib_core::{array, errors, options, types, values};

pub use error_renderer::{render_error, render_error_to_string, render_error_to_string_no_color};
