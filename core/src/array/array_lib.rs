use core::fmt;

use tracing::{debug, trace};

use crate::{
    errors::Error,
    options::Options,
    types::{ProviderRef, TypeLib},
    values::{Slot, Value},
};

static ABSENT: Value = Value::Undefined;
static HOLE: Slot = Slot::Hole;

/// A fixed-length sequence whose elements all belong to a type domain.
///
/// Reads never hand out a value outside the domain. A position with nothing
/// in it (an index past either end, or a hole) reads as
/// [`Value::Undefined`] when the domain admits the absent value, and fails
/// with [`Error::OutOfBounds`] otherwise.
///
/// # Example
///
/// ```
/// use arraylib_core::{ArrayLib, Error, Type, TypeLib, Value};
///
/// let domain = TypeLib::new([Type::string()]).unwrap();
/// let array = ArrayLib::new(domain, ["a", "b"]).unwrap();
///
/// assert_eq!(array.element_at(-1), Ok(&Value::from("b")));
/// assert_eq!(array.first(), Ok(&Value::from("a")));
/// assert_eq!(array.count(), 2);
/// assert!(!array.any_where(|e| e.as_str() == Some("c")));
/// assert_eq!(array.element_at(2), Err(Error::OutOfBounds { index: 2, len: 2 }));
/// ```
#[derive(Debug, Clone)]
pub struct ArrayLib {
    elements: Vec<Slot>,
    domain: TypeLib,
}

impl ArrayLib {
    /// Build a collection over `elements`, validating every present element
    /// against `domain`.
    pub fn new<I>(domain: TypeLib, elements: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<Slot>,
    {
        Self::with_options(domain, elements, &Options::default())
    }

    /// Like [`ArrayLib::new`], composing the domain from `providers`.
    pub fn with_providers<P, I>(providers: P, elements: I) -> Result<Self, Error>
    where
        P: IntoIterator<Item = ProviderRef>,
        I: IntoIterator,
        I::Item: Into<Slot>,
    {
        Self::with_providers_and_options(providers, elements, &Options::default())
    }

    /// Like [`ArrayLib::with_options`], composing the domain from `providers`.
    pub fn with_providers_and_options<P, I>(
        providers: P,
        elements: I,
        options: &Options,
    ) -> Result<Self, Error>
    where
        P: IntoIterator<Item = ProviderRef>,
        I: IntoIterator,
        I::Item: Into<Slot>,
    {
        Self::with_options(TypeLib::new(providers)?, elements, options)
    }

    pub fn with_options<I>(domain: TypeLib, elements: I, options: &Options) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<Slot>,
    {
        let elements: Vec<Slot> = elements.into_iter().map(Into::into).collect();

        let checked = elements.iter().filter_map(|slot| match slot {
            Slot::Present(value) => Some(value),
            Slot::Hole if options.allow_holes => None,
            Slot::Hole => Some(&ABSENT),
        });
        domain.assert_all_match_with(checked, options)?;

        debug!(len = elements.len(), domain = %domain, "built ArrayLib");
        Ok(Self { elements, domain })
    }

    pub fn domain(&self) -> &TypeLib {
        &self.domain
    }

    /// Raw view of the storage, holes included.
    pub fn slots(&self) -> &[Slot] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`. Negative indices count back from the end, so `-1`
    /// is the last position.
    pub fn element_at(&self, index: isize) -> Result<&Value, Error> {
        let slot = match self.position(index) {
            Some(position) => &self.elements[position],
            None => &HOLE,
        };
        self.resolve(slot).ok_or(Error::OutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// The element at position 0. Fails with [`Error::Empty`] on an empty
    /// collection whatever the domain.
    pub fn first(&self) -> Result<&Value, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        self.element_at(0)
    }

    /// The earliest element satisfying `predicate`.
    pub fn first_where<P>(&self, mut predicate: P) -> Result<&Value, Error>
    where
        P: FnMut(&Value) -> bool,
    {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        self.iter()
            .find(|value| predicate(*value))
            .ok_or(Error::PredicateMiss)
    }

    /// Number of positions, holes included.
    pub fn count(&self) -> usize {
        self.len()
    }

    pub fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Value) -> bool,
    {
        self.iter().filter(|value| predicate(*value)).count()
    }

    pub fn any(&self) -> bool {
        !self.is_empty()
    }

    pub fn any_where<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Value) -> bool,
    {
        self.iter().any(predicate)
    }

    /// An independent copy of the storage.
    pub fn to_array(&self) -> Vec<Slot> {
        self.elements.clone()
    }

    /// Elements in order, as predicates see them: holes read as
    /// `Value::Undefined` when the domain admits it and are skipped
    /// otherwise.
    pub fn iter(&self) -> impl Iterator<Item = &Value> + '_ {
        self.elements.iter().filter_map(|slot| self.resolve(slot))
    }

    fn position(&self, index: isize) -> Option<usize> {
        let len = self.len();
        if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            usize::try_from(index).ok().filter(|&i| i < len)
        }
    }

    fn resolve<'a>(&'a self, slot: &'a Slot) -> Option<&'a Value> {
        match slot {
            Slot::Present(value) => Some(value),
            Slot::Hole if self.domain.matches_slot(slot) => {
                trace!("missing position read as undefined");
                Some(&ABSENT)
            }
            Slot::Hole => None,
        }
    }
}

impl fmt::Display for ArrayLib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", slot)?;
        }
        write!(f, "]")
    }
}
