//! Typed collections checked against runtime type domains.
//!
//! A [`TypeLib`] is the union of one or more [`TypeProvider`]s. An
//! [`ArrayLib`] validates its elements against a `TypeLib` once, at
//! construction, and from then on only offers reads that cannot hand back a
//! value outside that domain.

pub mod array;
pub mod errors;
pub mod options;
pub mod types;
pub mod values;

pub use array::{Arg, ArrayLib};
pub use errors::{ConstructionError, Error};
pub use options::Options;
pub use types::{ProviderRef, Type, TypeLib, TypeProvider};
pub use values::{Slot, Value};
