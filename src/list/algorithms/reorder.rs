use crate::list::{connect, move_node, next_of, prev_of};
use crate::List;
use std::ptr::addr_of_mut;

pub(super) fn swap_pairs<T>(list: &mut List<T>) {
    let ghost = list.ghost_node();
    let mut first = list.front_node();
    // SAFETY: `first` and `second` are nodes of the list, and `second` is
    // never the ghost node when moved.
    unsafe {
        while first != ghost {
            let second = next_of(first);
            if second == ghost {
                break;
            }
            move_node(second, first);
            first = next_of(first);
        }
    }
}

/// Reverse each complete group of `k` nodes. Requires `k >= 2`.
pub(super) fn reverse_groups<T>(list: &mut List<T>, k: usize) {
    debug_assert!(k >= 2);
    let ghost = list.ghost_node();
    // The node right before the group being reversed.
    let mut before = ghost;
    // SAFETY: all nodes visited belong to the list, and each group
    // `start..end` is relinked into place before the next one is read.
    unsafe {
        loop {
            let start = next_of(before);
            let mut end = start;
            let mut count = 0;
            while count < k && end != ghost {
                end = next_of(end);
                count += 1;
            }
            if count < k {
                break;
            }
            let last = prev_of(end);
            let mut node = start;
            while node != end {
                let next = next_of(node);
                let link = node.as_ptr();
                std::ptr::swap(addr_of_mut!((*link).next), addr_of_mut!((*link).prev));
                node = next;
            }
            connect(before, last);
            connect(start, end);
            before = start;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::reverse_groups;
    use crate::list::{assert_well_formed, List};

    #[test]
    fn reverse_whole_groups() {
        let mut list = List::from_iter(0..6);
        reverse_groups(&mut list, 3);
        assert_well_formed(&list);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 1, 0, 5, 4, 3]);
        reverse_groups(&mut list, 6);
        assert_well_formed(&list);
        assert_eq!(Vec::from_iter(list), vec![3, 4, 5, 0, 1, 2]);
    }

    #[test]
    fn reverse_short_list() {
        let mut list = List::from_iter(["a", "b"]);
        reverse_groups(&mut list, 3);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec!["a", "b"]);
        reverse_groups(&mut list, 2);
        assert_well_formed(&list);
        assert_eq!(Vec::from_iter(list), vec!["b", "a"]);
    }
}
