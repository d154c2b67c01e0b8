//! Inline-first growable list.
//!
//! ```text
//! HybridList<T, N>
//! ├── inline:   [T; N]   (entries 0..min(len, N))
//! └── overflow: Vec<T>   (entries N..len, allocated on first spill)
//! ```
//!
//! Every mutation keeps `inline_len == min(len, N)`: the inline array is
//! never short while the overflow holds anything.

use std::ops::{Index, IndexMut};

use navtk_core::check::check_index;

/// A list of up to `N` inline elements that spills further elements to
/// the heap.
///
/// Removal is order-preserving ([`remove_at`](Self::remove_at)) or O(1)
/// and reordering ([`remove_at_swap_back`](Self::remove_at_swap_back)).
/// Index checks are caller contracts, enforced only when
/// [`navtk_core::CHECKS_ENABLED`] is set.
#[derive(Clone, Debug)]
pub struct HybridList<T, const N: usize> {
    inline: [T; N],
    inline_len: usize,
    overflow: Vec<T>,
}

/// A hybrid list of vertex or triangle indices.
pub type HybridIndexList<const N: usize> = HybridList<u32, N>;

impl<T: Copy + PartialEq + Default, const N: usize> HybridList<T, N> {
    /// Number of elements stored inline before spilling.
    pub const INLINE_CAPACITY: usize = N;

    /// Create an empty list. Does not allocate.
    pub fn new() -> Self {
        Self {
            inline: [T::default(); N],
            inline_len: 0,
            overflow: Vec::new(),
        }
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.inline_len + self.overflow.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.inline_len == 0
    }

    /// Number of elements in the inline segment.
    pub fn inline_len(&self) -> usize {
        self.inline_len
    }

    /// Number of elements in the overflow segment.
    pub fn overflow_len(&self) -> usize {
        self.overflow.len()
    }

    /// Whether the overflow segment currently owns a heap allocation.
    pub fn has_overflow_allocation(&self) -> bool {
        self.overflow.capacity() > 0
    }

    /// The element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<T> {
        if index < self.inline_len {
            Some(self.inline[index])
        } else if index >= N {
            self.overflow.get(index - N).copied()
        } else {
            None
        }
    }

    /// Overwrite the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()` in checked builds.
    pub fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    /// Append `value`, spilling to the overflow segment once inline is full.
    pub fn push(&mut self, value: T) {
        if self.inline_len < N {
            self.inline[self.inline_len] = value;
            self.inline_len += 1;
        } else {
            self.overflow.push(value);
        }
    }

    /// Position of the first element equal to `value`.
    ///
    /// Linear scan, inline segment first.
    pub fn index_of(&self, value: T) -> Option<usize> {
        if let Some(i) = self.inline[..self.inline_len].iter().position(|&v| v == value) {
            return Some(i);
        }
        self.overflow.iter().position(|&v| v == value).map(|i| i + N)
    }

    /// Whether any element equals `value`.
    pub fn contains(&self, value: T) -> bool {
        self.index_of(value).is_some()
    }

    /// Append `value` unless it is already present. Returns whether it was added.
    pub fn push_unique(&mut self, value: T) -> bool {
        if self.contains(value) {
            return false;
        }
        self.push(value);
        true
    }

    /// Remove the element at `index`, shifting later elements down.
    ///
    /// Removing from the inline segment refills the freed inline slot with
    /// the front of the overflow segment.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()` in checked builds.
    pub fn remove_at(&mut self, index: usize) {
        check_index(index, self.len());
        if index >= N {
            self.overflow.remove(index - N);
            return;
        }
        self.inline.copy_within(index + 1..self.inline_len, index);
        self.inline_len -= 1;
        if !self.overflow.is_empty() {
            let front = self.overflow.remove(0);
            self.inline[self.inline_len] = front;
            self.inline_len += 1;
        }
    }

    /// Remove the element at `index` in O(1), moving the last element of
    /// its segment (or of the overflow) into the hole.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()` in checked builds.
    pub fn remove_at_swap_back(&mut self, index: usize) {
        check_index(index, self.len());
        if index >= N {
            self.overflow.swap_remove(index - N);
        } else if let Some(last) = self.overflow.pop() {
            self.inline[index] = last;
        } else {
            self.inline_len -= 1;
            self.inline[index] = self.inline[self.inline_len];
        }
    }

    /// Replace this list's contents with a deep copy of `other`.
    ///
    /// Reuses this list's overflow allocation where it is large enough.
    pub fn copy_from(&mut self, other: &Self) {
        self.inline = other.inline;
        self.inline_len = other.inline_len;
        self.overflow.clear();
        self.overflow.extend_from_slice(&other.overflow);
    }

    /// Remove every element.
    ///
    /// With `dispose` the overflow allocation is released; without it the
    /// allocation is kept for reuse.
    pub fn clear(&mut self, dispose: bool) {
        self.inline_len = 0;
        if dispose {
            self.overflow = Vec::new();
        } else {
            self.overflow.clear();
        }
    }

    /// Iterate elements in list order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.inline[..self.inline_len]
            .iter()
            .chain(self.overflow.iter())
            .copied()
    }

    /// Collect the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T: Copy + PartialEq + Default, const N: usize> Default for HybridList<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + PartialEq + Default, const N: usize> Index<usize> for HybridList<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        check_index(index, self.len());
        if index < N {
            &self.inline[index]
        } else {
            &self.overflow[index - N]
        }
    }
}

impl<T: Copy + PartialEq + Default, const N: usize> IndexMut<usize> for HybridList<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        check_index(index, self.len());
        if index < N {
            &mut self.inline[index]
        } else {
            &mut self.overflow[index - N]
        }
    }
}

impl<T: Copy + PartialEq + Default, const N: usize> Extend<T> for HybridList<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl<T: Copy + PartialEq + Default, const N: usize> FromIterator<T> for HybridList<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Copy + PartialEq + Default, const N: usize> PartialEq for HybridList<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type List4 = HybridIndexList<4>;

    fn list_of(values: &[u32]) -> List4 {
        values.iter().copied().collect()
    }

    fn assert_split(list: &List4) {
        assert_eq!(list.inline_len(), list.len().min(List4::INLINE_CAPACITY));
    }

    #[test]
    fn new_list_does_not_allocate() {
        let list = List4::new();
        assert!(list.is_empty());
        assert!(!list.has_overflow_allocation());
    }

    #[test]
    fn push_spills_after_inline_capacity() {
        let list = list_of(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(list.len(), 6);
        assert_eq!(list.inline_len(), 4);
        assert_eq!(list.overflow_len(), 2);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(list[5], 6);
    }

    #[test]
    fn remove_inline_refills_from_overflow_front() {
        let mut list = list_of(&[1, 2, 3, 4, 5, 6]);
        list.remove_at(1);
        assert_eq!(list.to_vec(), vec![1, 3, 4, 5, 6]);
        assert_eq!(list.inline_len(), 4);
        assert_eq!(list.overflow_len(), 1);
        assert_split(&list);
    }

    #[test]
    fn remove_overflow_preserves_order() {
        let mut list = list_of(&[1, 2, 3, 4, 5, 6, 7]);
        list.remove_at(5);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5, 7]);
        assert_split(&list);
    }

    #[test]
    fn swap_back_inline_without_overflow() {
        let mut list = list_of(&[1, 2, 3]);
        list.remove_at_swap_back(0);
        assert_eq!(list.to_vec(), vec![3, 2]);
        assert_split(&list);
    }

    #[test]
    fn swap_back_inline_pulls_overflow_tail() {
        let mut list = list_of(&[1, 2, 3, 4, 5, 6]);
        list.remove_at_swap_back(1);
        assert_eq!(list.to_vec(), vec![1, 6, 3, 4, 5]);
        assert_eq!(list.overflow_len(), 1);
        assert_split(&list);
    }

    #[test]
    fn swap_back_in_overflow() {
        let mut list = list_of(&[1, 2, 3, 4, 5, 6, 7]);
        list.remove_at_swap_back(4);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 7, 6]);
    }

    #[test]
    fn index_of_scans_inline_first() {
        let list = list_of(&[9, 8, 7, 6, 9]);
        assert_eq!(list.index_of(9), Some(0));
        assert_eq!(list.index_of(6), Some(3));
        assert_eq!(list.index_of(1), None);
        assert!(list.contains(7));
    }

    #[test]
    fn push_unique_skips_duplicates() {
        let mut list = List4::new();
        assert!(list.push_unique(3));
        assert!(!list.push_unique(3));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn set_overwrites_in_either_segment() {
        let mut list = list_of(&[1, 2, 3, 4, 5]);
        list.set(0, 10);
        list.set(4, 50);
        assert_eq!(list.to_vec(), vec![10, 2, 3, 4, 50]);
        assert_eq!(list.get(5), None);
    }

    #[test]
    fn copy_from_is_deep() {
        let source = list_of(&[1, 2, 3, 4, 5, 6]);
        let mut copy = List4::new();
        copy.copy_from(&source);
        assert_eq!(copy, source);
        copy.set(5, 60);
        assert_eq!(source[5], 6);
    }

    #[test]
    fn clear_with_dispose_releases_overflow() {
        let mut list = list_of(&[1, 2, 3, 4, 5, 6]);
        list.clear(false);
        assert!(list.is_empty());
        assert!(list.has_overflow_allocation());
        list.extend([1, 2, 3, 4, 5]);
        list.clear(true);
        assert!(list.is_empty());
        assert!(!list.has_overflow_allocation());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn remove_past_end_panics_when_checked() {
        let mut list = list_of(&[1, 2]);
        list.remove_at(2);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Push(u32),
        Remove(usize),
        SwapRemove(usize),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0u32..1000).prop_map(Op::Push),
            1 => (0usize..32).prop_map(Op::Remove),
            1 => (0usize..32).prop_map(Op::SwapRemove),
        ]
    }

    proptest! {
        #[test]
        fn operation_sequences_keep_split_and_count(
            ops in proptest::collection::vec(arb_op(), 0..64),
        ) {
            let mut list = List4::new();
            let mut model: Vec<u32> = Vec::new();
            for op in ops {
                match op {
                    Op::Push(v) => {
                        list.push(v);
                        model.push(v);
                    }
                    Op::Remove(i) if !model.is_empty() => {
                        let i = i % model.len();
                        list.remove_at(i);
                        model.remove(i);
                    }
                    Op::SwapRemove(i) if !model.is_empty() => {
                        let i = i % model.len();
                        list.remove_at_swap_back(i);
                        model.remove(i);
                        // Swap removal reorders: compare as multisets, then
                        // adopt the list's order for the following ops.
                        let mut got = list.to_vec();
                        got.sort_unstable();
                        model.sort_unstable();
                        prop_assert_eq!(&got, &model);
                        model = list.to_vec();
                    }
                    _ => {}
                }
                prop_assert_eq!(list.len(), model.len());
                prop_assert_eq!(list.inline_len(), list.len().min(List4::INLINE_CAPACITY));
            }
            for v in &model {
                prop_assert!(list.contains(*v));
            }
            let mut got = list.to_vec();
            let mut want = model.clone();
            got.sort_unstable();
            want.sort_unstable();
            prop_assert_eq!(got, want);
        }

        #[test]
        fn ordered_removal_matches_vec(
            values in proptest::collection::vec(0u32..100, 1..24),
            index in 0usize..24,
        ) {
            let mut list: List4 = values.iter().copied().collect();
            let mut model = values.clone();
            let i = index % model.len();
            list.remove_at(i);
            model.remove(i);
            prop_assert_eq!(list.to_vec(), model);
        }
    }
}
