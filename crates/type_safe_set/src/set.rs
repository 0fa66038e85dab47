use crate::{element::Element, errors::SetError};

pub trait SetIterator {
    fn has_next(&self) -> bool;
    fn next(&mut self) -> Result<Element, SetError>;
}

/// A set that rejects duplicates and holds a single element type, fixed by
/// the first element ever added.
///
/// `None` stands for an absent element and is rejected with
/// [`SetError::NilElement`] before any type check.
pub trait TypeSafeSet {
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn contains(&self, e: Option<&Element>) -> Result<bool, SetError>;

    fn iterator(&self) -> Box<dyn SetIterator>;

    /// A fresh copy in insertion order, empty rather than absent.
    fn to_vec(&self) -> Vec<Element>;

    /// `Ok(false)` when an equal element is already held.
    fn add(&mut self, e: Option<Element>) -> Result<bool, SetError>;

    /// `Ok(false)` when no equal element is held.
    fn remove(&mut self, e: Option<&Element>) -> Result<bool, SetError>;

    // A type error from `other` only means the element is not in there.
    fn equals(&self, other: Option<&dyn TypeSafeSet>) -> bool {
        let Some(other) = other else {
            return false;
        };
        if self.size() != other.size() {
            return false;
        }

        let mut elements = self.iterator();
        while elements.has_next() {
            let Ok(e) = elements.next() else {
                return false;
            };
            if !other.contains(Some(&e)).unwrap_or(false) {
                return false;
            }
        }
        true
    }
}
