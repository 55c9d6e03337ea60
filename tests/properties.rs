use cyclic_queue::{List, Order, Queue, SortKind};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const KINDS: [SortKind; 5] = [
    SortKind::MergeTopDown,
    SortKind::MergeBottomUp,
    SortKind::Quick,
    SortKind::Tree,
    SortKind::Sediment,
];

#[derive(Debug, Clone)]
enum Op {
    InsertHead(String),
    InsertTail(String),
    RemoveHead,
    RemoveTail,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z]{0,4}".prop_map(Op::InsertHead),
        "[a-z]{0,4}".prop_map(Op::InsertTail),
        Just(Op::RemoveHead),
        Just(Op::RemoveTail),
    ]
}

fn queue_of(values: &[String]) -> Queue {
    let mut queue = Queue::new();
    for value in values {
        queue.insert_tail(value).unwrap();
    }
    queue
}

fn values(queue: &Queue) -> Vec<String> {
    queue.iter().map(|e| e.value().to_owned()).collect()
}

proptest! {
    #[test]
    fn size_counts_net_inserts(ops in prop::collection::vec(op(), 0..64)) {
        let mut queue = Queue::new();
        let mut expected = 0_usize;
        for op in ops {
            match op {
                Op::InsertHead(value) => {
                    queue.insert_head(&value).unwrap();
                    expected += 1;
                }
                Op::InsertTail(value) => {
                    queue.insert_tail(&value).unwrap();
                    expected += 1;
                }
                Op::RemoveHead => {
                    if queue.remove_head().is_some() {
                        expected -= 1;
                    }
                }
                Op::RemoveTail => {
                    if queue.remove_tail().is_some() {
                        expected -= 1;
                    }
                }
            }
            prop_assert_eq!(queue.size(), expected);
        }
    }

    #[test]
    fn insert_then_remove_truncates(value in "[ -~]{0,32}", capacity in 1_usize..40) {
        let mut queue = Queue::new();
        queue.insert_tail(&value).unwrap();
        let mut buf = vec![0xff_u8; capacity];
        let element = queue.remove_head_into(&mut buf).unwrap();
        let copied = value.len().min(capacity - 1);
        prop_assert_eq!(&buf[..copied], &value.as_bytes()[..copied]);
        prop_assert_eq!(buf[copied], 0);
        prop_assert_eq!(element.into_value(), value);
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn every_sort_orders_a_permutation(input in prop::collection::vec("[a-d]{0,3}", 0..48)) {
        for kind in KINDS {
            for order in [Order::Ascending, Order::Descending] {
                let mut queue = queue_of(&input);
                queue.sort_with(kind, order);
                let sorted = values(&queue);

                let mut expected = input.clone();
                expected.sort();
                if order == Order::Descending {
                    expected.reverse();
                }
                prop_assert_eq!(&sorted, &expected, "{:?} {:?}", kind, order);

                // Sorting again leaves it unchanged.
                queue.sort_with(kind, order);
                prop_assert_eq!(values(&queue), sorted);
            }
        }
    }

    #[test]
    fn stable_sorts_keep_input_order(keys in prop::collection::vec(0_u8..4, 0..48)) {
        for kind in [SortKind::MergeTopDown, SortKind::MergeBottomUp, SortKind::Sediment] {
            for order in [Order::Ascending, Order::Descending] {
                let mut list = List::from_iter(keys.iter().enumerate().map(|(i, &k)| Keyed(k, i)));
                list.sort_with(kind, order);
                let sorted = Vec::from_iter(list);
                for pair in sorted.windows(2) {
                    if pair[0].0 == pair[1].0 {
                        prop_assert!(pair[0].1 < pair[1].1, "{:?} {:?}: {:?}", kind, order, sorted);
                    }
                }
            }
        }
    }

    #[test]
    fn reverse_is_an_involution(input in prop::collection::vec("[a-z]{1,3}", 0..32)) {
        let mut queue = queue_of(&input);
        queue.reverse();
        let mut reversed = input.clone();
        reversed.reverse();
        prop_assert_eq!(values(&queue), reversed);
        queue.reverse();
        prop_assert_eq!(values(&queue), input);
    }

    #[test]
    fn reverse_k_keeps_the_tail(input in prop::collection::vec("[a-z]{1,3}", 0..32), k in 0_usize..8) {
        let mut queue = queue_of(&input);
        queue.reverse_k(k);
        let result = values(&queue);
        prop_assert_eq!(result.len(), input.len());

        let group = k.max(1);
        let full = if k <= 1 { input.len() } else { input.len() / group * group };
        let mut expected = Vec::new();
        for chunk in input[..full].chunks(group) {
            if k <= 1 {
                expected.extend_from_slice(chunk);
            } else {
                expected.extend(chunk.iter().rev().cloned());
            }
        }
        expected.extend_from_slice(&input[full..]);
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn shuffle_keeps_the_multiset(input in prop::collection::vec("[a-c]{0,2}", 0..32), seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut queue = queue_of(&input);
        queue.shuffle_with(&mut rng);
        prop_assert_eq!(queue.size(), input.len());

        let mut shuffled = values(&queue);
        shuffled.sort();
        let mut expected = input;
        expected.sort();
        prop_assert_eq!(shuffled, expected);
    }

    #[test]
    fn monotonic_filters_keep_suffix_extremes(input in prop::collection::vec(0_u8..6, 0..32)) {
        let mut list = List::from_iter(input.iter().copied());
        let len = list.retain_ascending();
        let kept = Vec::from_iter(list);
        prop_assert_eq!(kept.len(), len);
        let expected: Vec<u8> = input
            .iter()
            .enumerate()
            .filter(|&(i, x)| input[i + 1..].iter().all(|y| y >= x))
            .map(|(_, &x)| x)
            .collect();
        prop_assert_eq!(kept, expected);

        let mut list = List::from_iter(input.iter().copied());
        let len = list.retain_descending();
        let kept = Vec::from_iter(list);
        prop_assert_eq!(kept.len(), len);
        let expected: Vec<u8> = input
            .iter()
            .enumerate()
            .filter(|&(i, x)| input[i + 1..].iter().all(|y| y <= x))
            .map(|(_, &x)| x)
            .collect();
        prop_assert_eq!(kept, expected);
    }
}

/// A key with a position that does not take part in comparisons.
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
