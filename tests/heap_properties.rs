// ==============================================
// HEAP PROPERTY TESTS (integration)
// ==============================================
//
// Randomized checks of the heap's observable guarantees: the heap property
// after every mutation, ordered extraction, non-destructive sorting and the
// all-or-nothing behaviour of rejected operations.

use heapkit::ds::{BoundedMinHeap, is_valid_min_heap};
use heapkit::error::HeapError;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(i64),
    Extract,
    Replace(i64),
    Heapify(Vec<i64>),
    DecreaseKey(usize, i64),
    DeleteKey(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-50i64..50).prop_map(Op::Insert),
        2 => Just(Op::Extract),
        2 => (-50i64..50).prop_map(Op::Replace),
        1 => prop::collection::vec(-50i64..50, 0..20).prop_map(Op::Heapify),
        1 => (0usize..20, -100i64..50).prop_map(|(i, v)| Op::DecreaseKey(i, v)),
        1 => (0usize..20).prop_map(Op::DeleteKey),
    ]
}

fn sorted(mut values: Vec<i64>) -> Vec<i64> {
    values.sort_unstable();
    values
}

// ==============================================
// Invariant Preservation
// ==============================================

proptest! {
    #[test]
    fn heap_property_holds_after_every_operation(
        capacity in 0usize..16,
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        let mut heap = BoundedMinHeap::new(capacity);
        let mut model: Vec<i64> = Vec::new();

        for op in ops {
            let before = heap.snapshot();
            let result = match op {
                Op::Insert(x) => heap.insert(x).map(|_| model.push(x)),
                Op::Extract => heap.extract_min().map(|min| {
                    let pos = model.iter().position(|&v| v == min).unwrap();
                    model.swap_remove(pos);
                }),
                Op::Replace(x) => heap.replace_min(x).map(|old| {
                    let pos = model.iter().position(|&v| v == old).unwrap();
                    model[pos] = x;
                }),
                Op::Heapify(values) => heap.heapify_from(&values).map(|_| model = values.clone()),
                Op::DecreaseKey(i, v) => {
                    let old = before.get(i).copied();
                    heap.decrease_key(i, v).map(|_| {
                        let old = old.unwrap();
                        let pos = model.iter().position(|&x| x == old).unwrap();
                        model[pos] = v;
                    })
                },
                Op::DeleteKey(i) => heap.delete_key(i).map(|removed| {
                    let pos = model.iter().position(|&x| x == removed).unwrap();
                    model.swap_remove(pos);
                }),
            };

            if result.is_err() {
                prop_assert_eq!(heap.snapshot(), before);
            }
            prop_assert!(heap.len() <= heap.capacity());
            prop_assert!(is_valid_min_heap(&heap.snapshot()));
            prop_assert!(heap.check_invariants().is_ok());
            prop_assert_eq!(sorted(heap.snapshot()), sorted(model.clone()));
        }
    }

    #[test]
    fn extraction_is_non_decreasing_and_exhaustive(
        values in prop::collection::vec(any::<i64>(), 0..64),
    ) {
        let mut heap = BoundedMinHeap::from_values(values.len(), &values).unwrap();
        let mut drained = Vec::new();
        while !heap.is_empty() {
            drained.push(heap.extract_min().unwrap());
        }
        prop_assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
        prop_assert!(drained.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(drained, sorted(values));
    }

    #[test]
    fn heap_sort_is_idempotent_and_non_destructive(
        values in prop::collection::vec(-1000i64..1000, 0..64),
    ) {
        let mut heap = BoundedMinHeap::new(64);
        for &v in &values {
            heap.insert(v).unwrap();
        }
        let before = heap.snapshot();
        let first = heap.heap_sort();
        prop_assert_eq!(heap.snapshot(), before.clone());
        let second = heap.heap_sort();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(heap.snapshot(), before);
        prop_assert_eq!(first, sorted(values));
    }

    #[test]
    fn heapify_preserves_multiset(
        values in prop::collection::vec(any::<i64>(), 0..64),
        slack in 0usize..4,
    ) {
        let mut heap = BoundedMinHeap::new(values.len() + slack);
        heap.heapify_from(&values).unwrap();
        prop_assert!(heap.is_valid());
        prop_assert_eq!(sorted(heap.snapshot()), sorted(values));
    }

    #[test]
    fn heapify_over_capacity_is_rejected(
        values in prop::collection::vec(any::<i64>(), 1..32),
        existing in prop::collection::vec(any::<i64>(), 0..8),
    ) {
        let capacity = values.len() - 1;
        let existing: Vec<i64> = existing.into_iter().take(capacity).collect();
        let mut heap = BoundedMinHeap::from_values(capacity, &existing).unwrap();
        let before = heap.snapshot();
        prop_assert_eq!(
            heap.heapify_from(&values),
            Err(HeapError::CapacityExceeded { capacity, requested: values.len() })
        );
        prop_assert_eq!(heap.snapshot(), before);
    }

    #[test]
    fn validator_agrees_with_definition(values in prop::collection::vec(-5i64..5, 0..32)) {
        let expected = (0..values.len()).all(|i| {
            [2 * i + 1, 2 * i + 2]
                .into_iter()
                .all(|c| c >= values.len() || values[i] <= values[c])
        });
        prop_assert_eq!(is_valid_min_heap(&values), expected);
    }
}

// ==============================================
// Boundaries
// ==============================================

#[test]
fn full_heap_rejects_insert_without_mutation() {
    let mut heap = BoundedMinHeap::new(3);
    for x in [3, 1, 2] {
        heap.insert(x).unwrap();
    }
    let before = heap.snapshot();
    assert_eq!(
        heap.insert(0),
        Err(HeapError::CapacityExceeded {
            capacity: 3,
            requested: 4
        })
    );
    assert_eq!(heap.snapshot(), before);
}

#[test]
fn fresh_heaps_reject_empty_operations() {
    for capacity in [0, 1, 10] {
        let mut heap = BoundedMinHeap::new(capacity);
        assert_eq!(heap.find_min(), Err(HeapError::EmptyHeap));
        assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
        assert_eq!(heap.replace_min(1), Err(HeapError::EmptyHeap));
    }
}

// ==============================================
// Concrete Scenarios
// ==============================================

#[test]
fn scenario_insert_then_extract() {
    let mut heap = BoundedMinHeap::new(5);
    for x in [5, 3, 8, 1] {
        heap.insert(x).unwrap();
    }
    assert_eq!(heap.extract_min(), Ok(1));
    let snapshot = heap.snapshot();
    assert!(is_valid_min_heap(&snapshot));
    assert_eq!(snapshot[0], 3);
    assert_eq!(sorted(snapshot), vec![3, 5, 8]);
}

#[test]
fn scenario_heapify() {
    let mut heap = BoundedMinHeap::new(5);
    heap.heapify_from(&[9, 4, 7, 1, 2]).unwrap();
    let snapshot = heap.snapshot();
    assert_eq!(snapshot[0], 1);
    assert!(is_valid_min_heap(&snapshot));
    assert_eq!(sorted(snapshot), vec![1, 2, 4, 7, 9]);
}

#[test]
fn scenario_heap_sort() {
    let mut heap = BoundedMinHeap::new(4);
    for x in [5, 3, 8, 1] {
        heap.insert(x).unwrap();
    }
    let before = heap.snapshot();
    assert_eq!(heap.heap_sort(), vec![1, 3, 5, 8]);
    assert_eq!(heap.snapshot(), before);
}

#[test]
fn scenario_replace_min() {
    let mut heap = BoundedMinHeap::from_values(3, &[2, 4, 6]).unwrap();
    assert_eq!(heap.replace_min(10), Ok(2));
    let snapshot = heap.snapshot();
    assert_eq!(snapshot[0], 4);
    let pos = snapshot.iter().position(|&v| v == 10).unwrap();
    assert_ne!(pos, 0);
    assert!(is_valid_min_heap(&snapshot));
}
