use crate::list::List;
use rand::Rng;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

mod prune;
mod reorder;
mod shuffle;
mod sort;

pub use sort::{Order, SortKind};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let list = List::from_iter([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Sort the list in ascending order.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and
    /// *O*(log(*n*)) stack depth.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a top-down merge sort. The halves are merged
    /// in place by moving runs of nodes, so there is no extra temporary storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        sort::merge_sort(self, |a, b| a.lt(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// let mut v = List::from_iter([5, 4, 1, 3, 2]);
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(Vec::from_iter(v), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::merge_sort(self, |a, b| compare(a, b) == Ordering::Less)
    }

    /// Sort the list with the chosen strategy, in the given direction.
    ///
    /// [`SortKind::MergeTopDown`], [`SortKind::MergeBottomUp`] and
    /// [`SortKind::Sediment`] are stable in both directions;
    /// [`SortKind::Quick`] and [`SortKind::Tree`] make no stability promise.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::{List, Order, SortKind};
    ///
    /// let mut list = List::from_iter(["pear", "apple", "fig"]);
    /// list.sort_with(SortKind::Tree, Order::Descending);
    /// assert_eq!(Vec::from_iter(list), vec!["pear", "fig", "apple"]);
    /// ```
    pub fn sort_with(&mut self, kind: SortKind, order: Order)
    where
        T: Ord,
    {
        let less = |a: &T, b: &T| order.less(a, b);
        match kind {
            SortKind::MergeTopDown => sort::merge_sort(self, less),
            SortKind::MergeBottomUp => sort::merge_sort_bottom_up(self, less),
            SortKind::Quick => sort::quick_sort(self, less),
            SortKind::Tree => sort::tree_sort(self, less),
            SortKind::Sediment => sort::sediment_sort(self, less),
        }
    }

    /// Remove and return the element at index ⌊*n* / 2⌋, found with a
    /// slow/fast walk. Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4]);
    /// assert_eq!(list.remove_middle(), Some(3));
    /// assert_eq!(list.remove_middle(), Some(2));
    /// assert_eq!(Vec::from_iter(list), vec![1, 4]);
    /// ```
    pub fn remove_middle(&mut self) -> Option<T> {
        prune::remove_middle(self)
    }

    /// Sort the list, then drop every element whose value occurs more than
    /// once, keeping only the values that are unique. Returns the number of
    /// dropped elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter(["c", "a", "b", "a", "c"]);
    /// assert_eq!(list.remove_duplicates(), 4);
    /// assert_eq!(Vec::from_iter(list), vec!["b"]);
    /// ```
    pub fn remove_duplicates(&mut self) -> usize
    where
        T: Ord,
    {
        self.sort();
        prune::remove_sorted_duplicates(self)
    }

    /// Keep only the elements that have no strictly smaller element to
    /// their right. Returns the resulting length.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([3, 1, 4, 1, 5]);
    /// assert_eq!(list.retain_ascending(), 3);
    /// assert_eq!(Vec::from_iter(list), vec![1, 1, 5]);
    /// ```
    pub fn retain_ascending(&mut self) -> usize
    where
        T: Ord,
    {
        prune::retain_monotonic(self, |top, current| current < top)
    }

    /// Keep only the elements that have no strictly greater element to
    /// their right. Returns the resulting length.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([5, 3, 4, 1, 2]);
    /// assert_eq!(list.retain_descending(), 3);
    /// assert_eq!(Vec::from_iter(list), vec![5, 4, 2]);
    /// ```
    pub fn retain_descending(&mut self) -> usize
    where
        T: Ord,
    {
        prune::retain_monotonic(self, |top, current| top < current)
    }

    /// Swap every two adjacent elements. A trailing unpaired element stays
    /// in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter(1..=5);
    /// list.swap_pairs();
    /// assert_eq!(Vec::from_iter(list), vec![2, 1, 4, 3, 5]);
    /// ```
    pub fn swap_pairs(&mut self) {
        reorder::swap_pairs(self);
    }

    /// Reverse the order of the elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter(1..=4);
    /// list.reverse();
    /// assert_eq!(Vec::from_iter(list), vec![4, 3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        if self.is_empty() || self.is_singular() {
            return;
        }
        let len = self.len();
        reorder::reverse_groups(self, len);
    }

    /// Reverse the elements in consecutive groups of `k`. A trailing group
    /// shorter than `k` keeps its order; `k <= 1` does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter(1..=8);
    /// list.reverse_k(3);
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1, 6, 5, 4, 7, 8]);
    /// ```
    pub fn reverse_k(&mut self, k: usize) {
        if k <= 1 {
            return;
        }
        reorder::reverse_groups(self, k);
    }

    /// Randomly permute the elements in place, using `rng` as the source of
    /// randomness.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter(0..10);
    /// list.shuffle_with(&mut rand::rng());
    /// let mut values = Vec::from_iter(list);
    /// values.sort();
    /// assert_eq!(values, Vec::from_iter(0..10));
    /// ```
    pub fn shuffle_with<R: Rng>(&mut self, rng: &mut R) {
        shuffle::shuffle(self, rng);
    }

    /// Randomly permute the elements in place with the thread-local
    /// generator.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }
}
