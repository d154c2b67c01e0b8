//! Owning array of hybrid lists.

use crate::hybrid::HybridList;
use navtk_core::check::check_index;

/// A growable array whose elements are [`HybridList`]s.
///
/// The array owns its children: clearing, shrinking or dropping it
/// releases every child's overflow storage, so callers never walk the
/// array disposing lists one by one.
#[derive(Clone, Debug, Default)]
pub struct HybridListArray<T, const N: usize> {
    lists: Vec<HybridList<T, N>>,
}

impl<T: Copy + PartialEq + Default, const N: usize> HybridListArray<T, N> {
    /// Create an empty array.
    pub fn new() -> Self {
        Self { lists: Vec::new() }
    }

    /// Create an array of `len` empty lists.
    pub fn with_len(len: usize) -> Self {
        let mut array = Self::new();
        array.resize(len);
        array
    }

    /// Number of lists.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether the array holds no lists.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Append an empty list and return its index.
    pub fn push_list(&mut self) -> usize {
        self.lists.push(HybridList::new());
        self.lists.len() - 1
    }

    /// Grow with empty lists or shrink (dropping the removed lists) to `len`.
    pub fn resize(&mut self, len: usize) {
        self.lists.resize_with(len, HybridList::new);
    }

    /// The list at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> &HybridList<T, N> {
        check_index(index, self.lists.len());
        &self.lists[index]
    }

    /// The list at `index`, mutably.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> &mut HybridList<T, N> {
        check_index(index, self.lists.len());
        &mut self.lists[index]
    }

    /// Sum of every child's length.
    pub fn total_len(&self) -> usize {
        self.lists.iter().map(HybridList::len).sum()
    }

    /// Drop every list, releasing each child's storage.
    pub fn clear(&mut self) {
        self.lists.clear();
    }

    /// Iterate the lists in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, HybridList<T, N>> {
        self.lists.iter()
    }
}
