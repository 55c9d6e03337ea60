use crate::list::{connect, element, move_node, move_nodes, next_of, prev_of, Link};
use crate::List;
use std::ptr::{addr_of_mut, NonNull};

/// Direction of a sort.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    /// Returns `true` if `a` must be placed strictly before `b`.
    #[inline]
    pub(crate) fn less<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            Order::Ascending => a < b,
            Order::Descending => b < a,
        }
    }
}

/// `true` means descending.
impl From<bool> for Order {
    fn from(descend: bool) -> Self {
        if descend {
            Order::Descending
        } else {
            Order::Ascending
        }
    }
}

/// The sorting strategies available to [`List::sort_with`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKind {
    /// Recursive merge sort, halving with a slow/fast walk.
    #[default]
    MergeTopDown,
    /// Iterative merge sort, merging runs on a binary-counter schedule.
    MergeBottomUp,
    /// Quicksort with the first element as pivot.
    Quick,
    /// Insertion into an unbalanced binary search tree, then in-order walk.
    Tree,
    /// Bubble sort whose boundary shrinks to the last swap of each pass.
    Sediment,
}

pub(crate) fn merge_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.is_empty() || list.is_singular() {
        return;
    }
    let (start, end) = (list.front_node(), list.ghost_node());
    unsafe { merge_sort_range(start, end, &mut less) };
}

/// Find the middle node of a range with at least two nodes, so that both
/// `start..mid` and `mid..end` are non-empty.
unsafe fn mid_of_range(start: NonNull<Link>, end: NonNull<Link>) -> NonNull<Link> {
    let (mut slow, mut fast) = (start, start);
    while fast != end && next_of(fast) != end {
        fast = next_of(next_of(fast));
        slow = next_of(slow);
    }
    slow
}

unsafe fn merge_sort_range<T, F>(
    mut start: NonNull<Link>,
    end: NonNull<Link>,
    less: &mut F,
) -> NonNull<Link>
where
    F: FnMut(&T, &T) -> bool,
{
    if start == end || next_of(start) == end {
        return start;
    }
    let mut mid = mid_of_range(start, end);
    start = merge_sort_range(start, mid, less);
    mid = merge_sort_range(mid, end, less);
    merge_range(start, mid, end, less)
}

unsafe fn merge_range<T, F>(
    mut start: NonNull<Link>,
    mid: NonNull<Link>,
    end: NonNull<Link>,
    less: &mut F,
) -> NonNull<Link>
where
    F: FnMut(&T, &T) -> bool,
{
    // The range is logically partitioned into two sub-ranges, both of which
    // are sorted:
    // - merged range: `start..mid`,
    // - unmerged range: `mid..end`.
    //
    // Runs of the unmerged range are then moved one by one into the merged
    // range.
    let (mut merged, merged_back, mut to_merge) = (start, prev_of(mid), mid);
    // If the back of merged range <= the front of unmerged range,
    // it is fully sorted, the algorithm stops here.
    while to_merge != end && less(element(to_merge), element(merged_back)) {
        // Find a position of `merged` in the merged range,
        // where the element of the current node to merge < `*merged`.
        while merged != to_merge && !less(element(to_merge), element(merged)) {
            merged = next_of(merged);
        }
        if merged == to_merge {
            break;
        }

        // Find a sub-range `to_merge..next_to_merge` in the unmerged range,
        // where all the element in it is < `*merged`.
        let mut next_to_merge = next_of(to_merge);
        while next_to_merge != end && less(element(next_to_merge), element(merged)) {
            next_to_merge = next_of(next_to_merge);
        }
        if merged == start {
            start = to_merge;
        }
        // Move the sub-range `to_merge..next_to_merge` to the
        // node before `merged`.
        move_nodes(to_merge, prev_of(next_to_merge), merged);
        to_merge = next_to_merge;
    }
    start
}

pub(crate) fn merge_sort_bottom_up<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.is_empty() || list.is_singular() {
        return;
    }
    let end = list.ghost_node();
    // `pending[i]` holds a sorted run of `2^i` nodes, or nothing. Runs are
    // singly linked through `next` and terminated by `end`. Higher slots
    // hold earlier nodes.
    let mut pending: Vec<Option<NonNull<Link>>> = Vec::new();
    let mut node = list.front_node();
    unsafe {
        while node != end {
            let next = next_of(node);
            *addr_of_mut!((*node.as_ptr()).next) = end;
            let mut run = node;
            let mut order = 0;
            while let Some(left) = pending.get_mut(order).and_then(Option::take) {
                run = merge_runs(left, run, end, &mut less);
                order += 1;
            }
            match pending.get_mut(order) {
                Some(slot) => *slot = Some(run),
                None => pending.push(Some(run)),
            }
            node = next;
        }

        let mut merged: Option<NonNull<Link>> = None;
        for run in pending.into_iter().flatten() {
            merged = Some(match merged {
                None => run,
                Some(right) => merge_runs(run, right, end, &mut less),
            });
        }
        if let Some(head) = merged {
            relink(end, head);
        }
    }
}

/// Merge two non-empty runs terminated by `end`, taking from `left` on ties.
/// Only `next` links are maintained.
unsafe fn merge_runs<T, F>(
    mut left: NonNull<Link>,
    mut right: NonNull<Link>,
    end: NonNull<Link>,
    less: &mut F,
) -> NonNull<Link>
where
    F: FnMut(&T, &T) -> bool,
{
    let head = if less(element(right), element(left)) {
        advance(&mut right)
    } else {
        advance(&mut left)
    };
    let mut tail = head;
    while left != end && right != end {
        let node = if less(element(right), element(left)) {
            advance(&mut right)
        } else {
            advance(&mut left)
        };
        *addr_of_mut!((*tail.as_ptr()).next) = node;
        tail = node;
    }
    *addr_of_mut!((*tail.as_ptr()).next) = if left != end { left } else { right };
    head
}

/// Step `link` to its next node, returning the node it pointed to.
#[inline]
unsafe fn advance(link: &mut NonNull<Link>) -> NonNull<Link> {
    let node = *link;
    *link = next_of(node);
    node
}

/// Rebuild the `prev` links and the cycle through `ghost` from a chain that
/// starts at `head` and follows `next` until `ghost`.
unsafe fn relink(ghost: NonNull<Link>, head: NonNull<Link>) {
    let (mut prev, mut node) = (ghost, head);
    while node != ghost {
        let next = next_of(node);
        connect(prev, node);
        prev = node;
        node = next;
    }
    connect(prev, ghost);
}

enum Part<T> {
    Unsorted(List<T>),
    Sorted(List<T>),
}

pub(crate) fn quick_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.is_empty() || list.is_singular() {
        return;
    }
    let mut sorted = List::new();
    // Popped in order: lower partition, pivot, upper partition.
    let mut stack = vec![Part::Unsorted(std::mem::take(list))];
    while let Some(part) = stack.pop() {
        let mut part = match part {
            Part::Sorted(mut part) => {
                sorted.append(&mut part);
                continue;
            }
            Part::Unsorted(part) => part,
        };
        if part.is_empty() || part.is_singular() {
            sorted.append(&mut part);
            continue;
        }
        let mut rest = part.split_off(1);
        let (mut lower, mut upper) = (List::new(), List::new());
        if let Some(pivot) = part.front() {
            loop {
                let goes_lower = match rest.front() {
                    Some(elt) => less(elt, pivot),
                    None => break,
                };
                rest.transfer_front(if goes_lower { &mut lower } else { &mut upper });
            }
        }
        stack.push(Part::Unsorted(upper));
        stack.push(Part::Sorted(part));
        stack.push(Part::Unsorted(lower));
    }
    *list = sorted;
}

struct TreeNode {
    link: NonNull<Link>,
    left: Option<usize>,
    right: Option<usize>,
}

pub(crate) fn tree_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.is_empty() || list.is_singular() {
        return;
    }
    let ghost = list.ghost_node();
    let mut tree: Vec<TreeNode> = Vec::new();
    unsafe {
        let mut node = list.front_node();
        while node != ghost {
            tree_insert::<T, F>(&mut tree, node, &mut less);
            node = next_of(node);
        }

        // Every node is owned by `tree` now, and relinked in order below.
        list.forget_nodes();
        let mut stack = Vec::new();
        let mut current = Some(0);
        loop {
            while let Some(index) = current {
                stack.push(index);
                current = tree[index].left;
            }
            let Some(index) = stack.pop() else {
                break;
            };
            list.attach_node(list.back_node(), ghost, tree[index].link);
            current = tree[index].right;
        }
    }
}

/// Insert `link` as a leaf. Values less than or equal to a node go left.
unsafe fn tree_insert<T, F>(tree: &mut Vec<TreeNode>, link: NonNull<Link>, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let index = tree.len();
    tree.push(TreeNode {
        link,
        left: None,
        right: None,
    });
    if index == 0 {
        return;
    }
    let mut at = 0;
    loop {
        let goes_left = !less(element(tree[at].link), element(link));
        let child = if goes_left {
            &mut tree[at].left
        } else {
            &mut tree[at].right
        };
        match *child {
            Some(next) => at = next,
            None => {
                *child = Some(index);
                return;
            }
        }
    }
}

pub(crate) fn sediment_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.is_empty() || list.is_singular() {
        return;
    }
    // Nodes from `bound` on are in their final place.
    let mut bound = list.ghost_node();
    unsafe {
        loop {
            let mut last_swapped = None;
            let mut node = list.front_node();
            while node != bound && next_of(node) != bound {
                let next = next_of(node);
                if less(element(next), element(node)) {
                    move_node(next, node);
                    last_swapped = Some(next_of(node));
                } else {
                    node = next;
                }
            }
            match last_swapped {
                Some(swapped) => bound = swapped,
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Order, SortKind};
    use crate::list::{assert_well_formed, List};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    const KINDS: [SortKind; 5] = [
        SortKind::MergeTopDown,
        SortKind::MergeBottomUp,
        SortKind::Quick,
        SortKind::Tree,
        SortKind::Sediment,
    ];

    fn check_sort(values: Vec<u32>) {
        for kind in KINDS {
            for order in [Order::Ascending, Order::Descending] {
                let mut list = List::from_iter(values.iter().copied());
                list.sort_with(kind, order);
                assert_well_formed(&list);

                let mut expected = values.clone();
                expected.sort();
                if order == Order::Descending {
                    expected.reverse();
                }
                assert_eq!(Vec::from_iter(list), expected, "{kind:?} {order:?}");
            }
        }
    }

    #[test]
    fn sort_small() {
        check_sort(vec![]);
        check_sort(vec![1]);
        check_sort(vec![2, 1]);
        check_sort(vec![1, 2]);
        check_sort(vec![3, 1, 2]);
        check_sort(vec![2, 2, 1, 1]);
        check_sort(vec![5, 4, 3, 2, 1, 0]);
        check_sort(vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn sort_random() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        for len in [7, 16, 33, 100, 257] {
            let values = (0..len).map(|_| rng.random_range(0..20)).collect();
            check_sort(values);
        }
    }

    #[test]
    fn stable_sorts_keep_ties() {
        #[derive(Debug, Clone, Copy)]
        struct Keyed(u8, usize);
        impl PartialEq for Keyed {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl Eq for Keyed {}
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let keys = [3, 1, 2, 1, 3, 2, 1, 3, 2, 2];
        for kind in [SortKind::MergeTopDown, SortKind::MergeBottomUp, SortKind::Sediment] {
            for order in [Order::Ascending, Order::Descending] {
                let mut list = List::from_iter(keys.iter().enumerate().map(|(i, &k)| Keyed(k, i)));
                list.sort_with(kind, order);
                let sorted = Vec::from_iter(list);
                for pair in sorted.windows(2) {
                    if pair[0].0 == pair[1].0 {
                        assert!(pair[0].1 < pair[1].1, "{kind:?} {order:?}: {sorted:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn sort_strings_bytewise() {
        let mut list = List::from_iter(["b", "B", "a", "ab", "A"].map(String::from));
        list.sort();
        assert_eq!(Vec::from_iter(list), vec!["A", "B", "a", "ab", "b"]);
    }

    #[test]
    fn order_from_bool() {
        assert_eq!(Order::from(false), Order::Ascending);
        assert_eq!(Order::from(true), Order::Descending);
        assert_eq!(Order::default(), Order::Ascending);
        assert_eq!(SortKind::default(), SortKind::MergeTopDown);
    }
}
