use core::fmt;

use super::Value;

/// One storage position of an [`ArrayLib`](crate::ArrayLib).
///
/// A `Hole` is a position whose value was removed. It is distinct from a
/// stored `Value::Undefined`: the hole carries no value at all and is only
/// resolved to the absent sentinel when the collection's domain admits it.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Present(Value),
    Hole,
}

impl Slot {
    pub fn present(value: impl Into<Value>) -> Self {
        Slot::Present(value.into())
    }

    pub fn as_present(&self) -> Option<&Value> {
        match self {
            Slot::Present(value) => Some(value),
            Slot::Hole => None,
        }
    }

    pub fn is_hole(&self) -> bool {
        matches!(self, Slot::Hole)
    }
}

impl<T: Into<Value>> From<T> for Slot {
    fn from(value: T) -> Self {
        Slot::Present(value.into())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Present(value) => write!(f, "{}", value),
            Slot::Hole => f.write_str("<hole>"),
        }
    }
}
