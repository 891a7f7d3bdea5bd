//! Integration tests for `SequenceStore` through the public API.

use strand_collections::{Link, OutOfRange, SequenceStore};

fn appended(values: &[i64]) -> SequenceStore<i64> {
    let mut store = SequenceStore::new();
    for &value in values {
        store.append(value);
    }
    store
}

fn chain_len<T>(store: &SequenceStore<T>) -> usize {
    let mut hops = 0;
    let mut link = store.head();
    while let Some(node) = store.node(link) {
        hops += 1;
        assert!(hops <= store.len(), "cycle in chain");
        link = node.next();
    }
    assert_eq!(link, Link::NONE);
    hops
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn query_scenario() {
    let store = appended(&[1, 3, 2, 3, 4, 3, 5]);

    assert_eq!(store.find(&3), Some(1));
    assert_eq!(store.find_all(&3), vec![1, 3, 5]);
    assert_eq!(store.count(&3), 3);
    assert!(store.contains(&3));
    assert_eq!(store.get(2), Ok(&2));
    assert_eq!(store.to_vec(), vec![1, 3, 2, 3, 4, 3, 5]);
    assert_eq!(store.len(), 7);
    assert!(!store.is_empty());
}

#[test]
fn reverse_scenario() {
    let mut store = appended(&[1, 3, 2, 3, 4, 3, 5]);
    assert_eq!(store.to_string(), "1 -> 3 -> 2 -> 3 -> 4 -> 3 -> 5");

    store.reverse();
    assert_eq!(store.to_string(), "5 -> 3 -> 4 -> 3 -> 2 -> 3 -> 1");
    assert_eq!(chain_len(&store), 7);
}

#[test]
fn insert_upper_bound_is_inclusive() {
    let mut store = appended(&[1, 2, 3, 4]);
    let size = store.len();

    assert_eq!(
        store.insert(size + 1, 0),
        Err(OutOfRange {
            index: size + 1,
            valid: 0..size + 1,
        })
    );
    assert_eq!(store.to_vec(), vec![1, 2, 3, 4]);

    store.insert(size, 0).unwrap();
    assert_eq!(store.to_vec(), vec![1, 2, 3, 4, 0]);
}

#[test]
fn rejected_calls_leave_store_unchanged() {
    let mut store = appended(&[5, 6, 7]);

    assert!(store.get(3).is_err());
    assert!(store.get_mut(usize::MAX).is_err());
    assert!(store.delete_at(3).is_err());
    assert!(store.insert(4, 1).is_err());

    assert_eq!(store.to_vec(), vec![5, 6, 7]);
    assert_eq!(chain_len(&store), 3);
}

#[test]
fn empty_store_edges() {
    let mut store: SequenceStore<i64> = SequenceStore::new();

    assert!(!store.delete(&1));
    assert_eq!(
        store.delete_at(0),
        Err(OutOfRange { index: 0, valid: 0..0 })
    );
    assert!(store.get(0).is_err());
    assert_eq!(store.find(&1), None);
    assert!(store.find_all(&1).is_empty());
    assert_eq!(store.count(&1), 0);
    assert_eq!(store.to_string(), "[]");
    assert_eq!(store.iter().next(), None);
}

#[test]
fn error_display_names_interval() {
    let store = appended(&[1]);
    let err = store.get(3).unwrap_err();
    assert_eq!(err.to_string(), "index 3 out of range 0..1");
}

#[test]
fn strings_as_values() {
    let mut store: SequenceStore<String> = ["b", "c"].iter().map(|s| s.to_string()).collect();
    store.prepend("a".to_string());

    assert_eq!(store.find(&"c".to_string()), Some(2));
    assert!(store.delete(&"b".to_string()));
    assert_eq!(store.to_string(), "a -> c");
}

#[test]
fn iteration_after_mutation_sees_new_state() {
    let mut store = appended(&[1, 2, 3]);
    let before: Vec<_> = store.iter().copied().collect();

    store.delete_at(1).unwrap();
    store.insert(0, 0).unwrap();
    let after: Vec<_> = store.iter().copied().collect();

    assert_eq!(before, vec![1, 2, 3]);
    assert_eq!(after, vec![0, 1, 3]);
}

#[test]
fn for_loop_over_reference() {
    let store = appended(&[4, 5, 6]);
    let mut sum = 0;
    for value in &store {
        sum += value;
    }
    assert_eq!(sum, 15);
}

#[test]
fn reserve_and_shrink() {
    let mut store: SequenceStore<i64> = SequenceStore::new();
    store.reserve(32);
    assert!(store.capacity() >= 32);

    store.extend(0..8);
    store.clear();
    store.shrink_to_fit();
    assert!(store.is_empty());
}
