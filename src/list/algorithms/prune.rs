use crate::list::next_of;
use crate::List;

pub(super) fn remove_middle<T>(list: &mut List<T>) -> Option<T> {
    if list.is_empty() {
        return None;
    }
    let ghost = list.ghost_node();
    let (mut slow, mut fast) = (list.front_node(), list.front_node());
    // SAFETY: `fast` stops at the ghost node or right before it, and `slow`
    // trails it, so `slow` is a non-ghost node of the list.
    unsafe {
        while fast != ghost && next_of(fast) != ghost {
            fast = next_of(next_of(fast));
            slow = next_of(slow);
        }
        Some(list.detach_node(slow).into_element())
    }
}

/// Drop every run of two or more equal neighbours. Returns the number of
/// dropped elements.
pub(super) fn remove_sorted_duplicates<T: PartialEq>(list: &mut List<T>) -> usize {
    let mut kept = List::new();
    let mut removed = 0;
    while let Some(first) = list.front() {
        let run = list.iter().take_while(|elt| *elt == first).count();
        if run == 1 {
            list.transfer_front(&mut kept);
        } else {
            for _ in 0..run {
                list.pop_front();
            }
            removed += run;
        }
    }
    list.append(&mut kept);
    removed
}

/// Keep a monotonic stack of the elements: an element on top is popped as
/// soon as `dominated(top, current)` holds for a later element. Returns the
/// resulting length.
pub(super) fn retain_monotonic<T, F>(list: &mut List<T>, mut dominated: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut stack = List::new();
    let mut len = 0;
    while let Some(current) = list.front() {
        while stack.back().is_some_and(|top| dominated(top, current)) {
            stack.pop_back();
            len -= 1;
        }
        list.transfer_front(&mut stack);
        len += 1;
    }
    list.append(&mut stack);
    len
}

#[cfg(test)]
mod tests {
    use super::{remove_sorted_duplicates, retain_monotonic};
    use crate::list::{assert_well_formed, List};

    #[test]
    fn sorted_duplicates() {
        let mut list = List::from_iter([1, 1, 1, 2, 3, 3, 4]);
        assert_eq!(remove_sorted_duplicates(&mut list), 5);
        assert_well_formed(&list);
        assert_eq!(Vec::from_iter(list), vec![2, 4]);

        let mut list = List::from_iter([1, 2, 3]);
        assert_eq!(remove_sorted_duplicates(&mut list), 0);
        assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    }

    #[test]
    fn monotonic_keeps_suffix_maxima() {
        let mut list = List::from_iter([1, 5, 2, 4, 3]);
        assert_eq!(retain_monotonic(&mut list, |top, current| top < current), 3);
        assert_well_formed(&list);
        assert_eq!(Vec::from_iter(list), vec![5, 4, 3]);
    }
}
