use core::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::{
    errors::ConstructionError,
    options::Options,
    types::ProviderRef,
    values::{Slot, Value},
};

/// A value domain: the union of an ordered, non-empty list of providers.
///
/// The provider list is frozen at construction. Cloning a `TypeLib` shares
/// the list instead of copying it.
#[derive(Debug, Clone)]
pub struct TypeLib {
    providers: Arc<[ProviderRef]>,
}

impl TypeLib {
    /// Build a domain from one or more providers.
    ///
    /// Order does not change which values belong to the domain, but it is
    /// preserved so [`TypeLib::first_match`] is deterministic.
    pub fn new(providers: impl IntoIterator<Item = ProviderRef>) -> Result<Self, ConstructionError> {
        let providers: Arc<[ProviderRef]> = providers.into_iter().collect();
        if providers.is_empty() {
            return Err(ConstructionError::NoProviders);
        }
        Ok(Self { providers })
    }

    pub fn providers(&self) -> &[ProviderRef] {
        &self.providers
    }

    /// True iff any provider matches `value`.
    pub fn matches(&self, value: &Value) -> bool {
        self.first_match(value).is_some()
    }

    /// The first provider, in declaration order, that matches `value`.
    pub fn first_match(&self, value: &Value) -> Option<&ProviderRef> {
        self.providers.iter().find(|provider| provider.matches(value))
    }

    /// Domain check on a storage position. A hole is checked as the absent
    /// value.
    pub fn matches_slot(&self, slot: &Slot) -> bool {
        match slot {
            Slot::Present(value) => self.matches(value),
            Slot::Hole => self.admits_absent(),
        }
    }

    /// True iff the absent value belongs to the domain.
    pub fn admits_absent(&self) -> bool {
        self.matches(&Value::Undefined)
    }

    /// Check every value in order, stopping at the first one outside the
    /// domain.
    pub fn assert_all_match<'a>(
        &self,
        values: impl IntoIterator<Item = &'a Value>,
    ) -> Result<(), ConstructionError> {
        self.assert_all_match_with(values, &Options::default())
    }

    pub(crate) fn assert_all_match_with<'a>(
        &self,
        values: impl IntoIterator<Item = &'a Value>,
        options: &Options,
    ) -> Result<(), ConstructionError> {
        for (index, value) in values.into_iter().enumerate() {
            if !self.matches(value) {
                debug!(index, domain = %self, value = %value, "value outside domain");
                return Err(ConstructionError::NoMatch {
                    value: options.preview(value.to_json()),
                    expected: self.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for TypeLib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, provider) in self.providers.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", provider.name())?;
        }
        Ok(())
    }
}
