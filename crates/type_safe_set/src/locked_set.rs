use std::{
    fmt::{self, Debug},
    slice::Iter,
};

use tracing::{debug, trace};

use crate::{
    element::{Element, ElementType},
    errors::SetError,
    set::{SetIterator, TypeSafeSet},
    snapshot::Snapshot,
};

/// A [`TypeSafeSet`] over an insertion-ordered `Vec`, searched linearly.
///
/// The type lock survives removals, so an emptied set still only accepts its
/// original element type.
#[derive(Clone, Default)]
pub struct LockedSet {
    elements: Vec<Element>,
    locked: Option<ElementType>,
}

impl LockedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            locked: None,
        }
    }

    /// Adds elements in order, stopping at the first failure.
    pub fn try_from_elements(
        elements: impl IntoIterator<Item = Element>,
    ) -> Result<Self, SetError> {
        let mut set = Self::new();
        for e in elements {
            set.add(Some(e))?;
        }
        Ok(set)
    }

    pub fn is_locked(&self) -> bool {
        self.locked.is_some()
    }

    pub fn locked_type(&self) -> Option<ElementType> {
        self.locked
    }

    pub fn locked_type_name(&self) -> Option<&'static str> {
        self.locked.map(|ty| ty.name())
    }

    pub fn iter(&self) -> Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.to_vec())
    }

    fn check_type(&self, e: &Element) -> Result<(), SetError> {
        match self.locked {
            Some(locked) if locked != e.element_type() => {
                trace!(
                    locked = locked.name(),
                    found = e.type_name(),
                    "rejected element of foreign type"
                );
                Err(SetError::type_mismatch(locked, e.element_type()))
            }
            _ => Ok(()),
        }
    }

    // Nil first, then type, then the scan.
    fn position(&self, e: Option<&Element>) -> Result<Option<usize>, SetError> {
        let e = e.ok_or(SetError::NilElement)?;
        self.check_type(e)?;
        Ok(self.elements.iter().position(|each| each == e))
    }
}

impl TypeSafeSet for LockedSet {
    fn size(&self) -> usize {
        self.elements.len()
    }

    fn contains(&self, e: Option<&Element>) -> Result<bool, SetError> {
        Ok(self.position(e)?.is_some())
    }

    fn iterator(&self) -> Box<dyn SetIterator> {
        Box::new(self.snapshot())
    }

    fn to_vec(&self) -> Vec<Element> {
        self.elements.clone()
    }

    fn add(&mut self, e: Option<Element>) -> Result<bool, SetError> {
        let e = e.ok_or(SetError::NilElement)?;
        if self.locked.is_none() {
            debug!(locked = e.type_name(), "locking set element type");
            self.locked = Some(e.element_type());
        }
        if self.position(Some(&e))?.is_some() {
            return Ok(false);
        }
        trace!(element = ?e, "added");
        self.elements.push(e);
        Ok(true)
    }

    fn remove(&mut self, e: Option<&Element>) -> Result<bool, SetError> {
        let Some(index) = self.position(e)? else {
            return Ok(false);
        };
        let removed = self.elements.remove(index);
        trace!(element = ?removed, "removed");
        Ok(true)
    }
}

impl PartialEq for LockedSet {
    fn eq(&self, other: &Self) -> bool {
        self.equals(Some(other))
    }
}

impl Debug for LockedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a LockedSet {
    type Item = &'a Element;
    type IntoIter = Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
