//! Errors returned by type domains and collections.
//!
//! Everything is reported through [`Error`]. Construction problems carry a
//! [`ConstructionError`] describing which part of the input was rejected;
//! accessors fail with one of the remaining variants.

use thiserror::Error;

/// Error returned by collection construction and accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum Error {
    /// The collection could not be built from the given arguments.
    #[error(transparent)]
    #[cfg_attr(feature = "miette", diagnostic(transparent))]
    Construction(#[from] ConstructionError),

    /// Index outside the populated range, or a hole, in a domain that does
    /// not admit the absent value.
    #[error("no element at index {index} in a collection of length {len}")]
    #[cfg_attr(
        feature = "miette",
        diagnostic(
            code(arraylib::out_of_bounds),
            help("negative indices count back from the last element; add the Undefined type to the domain to read missing positions as undefined")
        )
    )]
    OutOfBounds { index: isize, len: usize },

    /// `first` was called on a collection with no positions.
    #[error("the collection is empty")]
    #[cfg_attr(feature = "miette", diagnostic(code(arraylib::empty)))]
    Empty,

    /// The collection is not empty but no element satisfied the predicate.
    #[error("no element satisfies the predicate")]
    #[cfg_attr(feature = "miette", diagnostic(code(arraylib::predicate_miss)))]
    PredicateMiss,
}

/// Reason a type domain or a collection could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum ConstructionError {
    #[error("TypeLib requires at least one type provider, but received none")]
    #[cfg_attr(
        feature = "miette",
        diagnostic(code(arraylib::construction::no_providers))
    )]
    NoProviders,

    #[error("expected at least {expected} arguments, but received {received}")]
    #[cfg_attr(
        feature = "miette",
        diagnostic(
            code(arraylib::construction::missing_arguments),
            help("pass one or more type providers (or a single type domain) followed by the elements")
        )
    )]
    MissingArguments { expected: usize, received: usize },

    #[error("expected the last argument to be a sequence, but received {found}")]
    #[cfg_attr(
        feature = "miette",
        diagnostic(code(arraylib::construction::not_a_sequence))
    )]
    NotASequence { found: String },

    #[error("expected a type provider at position {position}, but received {found}")]
    #[cfg_attr(
        feature = "miette",
        diagnostic(code(arraylib::construction::not_a_provider))
    )]
    NotAProvider { position: usize, found: String },

    /// `value` is the serialized offending element.
    #[error("{value} does not match any of the provided types ({expected})")]
    #[cfg_attr(
        feature = "miette",
        diagnostic(code(arraylib::construction::no_match))
    )]
    NoMatch { value: String, expected: String },
}
