use std::{iter::Skip, vec::IntoIter};

use crate::{element::Element, errors::SetError, set::SetIterator};

/// Cursor over a private copy of a set's elements, taken when the cursor was
/// created. Later changes to the set are not observed.
#[derive(Clone, Debug)]
pub struct Snapshot {
    index: usize,
    size: usize,
    elements: Vec<Element>,
}

impl Snapshot {
    pub(crate) fn new(elements: Vec<Element>) -> Self {
        Self {
            index: 0,
            size: elements.len(),
            elements,
        }
    }

    pub fn remaining(&self) -> usize {
        self.size - self.index
    }
}

impl SetIterator for Snapshot {
    fn has_next(&self) -> bool {
        self.index < self.size
    }

    fn next(&mut self) -> Result<Element, SetError> {
        let e = self
            .elements
            .get(self.index)
            .cloned()
            .ok_or(SetError::OutOfRange)?;
        self.index += 1;
        Ok(e)
    }
}

impl IntoIterator for Snapshot {
    type Item = Element;
    type IntoIter = Skip<IntoIter<Element>>;

    fn into_iter(self) -> Self::IntoIter {
        let consumed = self.index;
        self.elements.into_iter().skip(consumed)
    }
}
