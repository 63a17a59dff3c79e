use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use super::Tracked;
use crate::{SimpleVector, simple_vector};

#[test]
fn test_clone_is_deep() {
    let original = simple_vector![1, 2, 3];
    let mut copy = original.clone();
    assert_eq!(copy, original);
    assert_ne!(copy.as_ptr(), original.as_ptr());

    copy[0] = 100;
    copy.push_back(4);
    assert_eq!(original.as_slice(), &[1, 2, 3]);
    assert_eq!(copy.as_slice(), &[100, 2, 3, 4]);
}

#[test]
fn test_clone_keeps_capacity() {
    let mut v = SimpleVector::<i32>::with_capacity(10);
    v.push_back(1);
    let copy = v.clone();
    assert_eq!(copy.size(), 1);
    assert_eq!(copy.capacity(), 10);

    let empty = SimpleVector::<i32>::new();
    let copy = empty.clone();
    assert_eq!(copy.capacity(), 0);
}

#[test]
fn test_clone_from_replaces_contents() {
    let source = simple_vector![4, 5];
    let mut target = simple_vector![1, 2, 3];
    target.clone_from(&source);
    assert_eq!(target, source);
    target.push_back(6);
    assert_eq!(source.as_slice(), &[4, 5]);
}

#[test]
fn test_move_transfers_without_copying() {
    let clones = Rc::new(Cell::new(0));
    let source: SimpleVector<Tracked> = (0..5).map(|i| Tracked::new(i, &clones)).collect();
    let ptr = source.as_ptr();

    let moved = source;
    assert_eq!(moved.as_ptr(), ptr);
    assert_eq!(moved.size(), 5);
    assert_eq!(clones.get(), 0);
}

#[test]
fn test_take_leaves_empty_source() {
    let mut source = simple_vector![1, 2, 3];
    let ptr = source.as_ptr();
    let target = std::mem::take(&mut source);
    assert_eq!(target.as_slice(), &[1, 2, 3]);
    assert_eq!(target.as_ptr(), ptr);
    assert!(source.is_empty());
    assert_eq!(source.capacity(), 0);

    let mut empty = SimpleVector::<i32>::with_capacity(4);
    let target = std::mem::take(&mut empty);
    assert_eq!(target.capacity(), 4);
    assert!(empty.is_empty());
    assert_eq!(empty.capacity(), 0);
}

#[test]
fn test_move_assign() {
    let mut target = simple_vector![9, 9];
    assert_eq!(target.size(), 2);
    target = simple_vector![1, 2, 3];
    assert_eq!(target.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_equality() {
    assert_eq!(simple_vector![1, 2, 3], simple_vector![1, 2, 3]);
    assert_ne!(simple_vector![1, 2, 3], simple_vector![1, 2]);
    assert_ne!(simple_vector![1, 2, 3], simple_vector![1, 2, 4]);

    // Capacity does not take part in equality.
    let mut a = SimpleVector::<i32>::with_capacity(10);
    a.extend([1, 2]);
    assert_eq!(a, simple_vector![1, 2]);
}

#[test]
fn test_ordering() {
    assert!(simple_vector![1, 2] < simple_vector![1, 3]);
    assert!(simple_vector![1, 2] <= simple_vector![1, 2]);
    assert!(simple_vector![1, 2, 0] > simple_vector![1, 2]);
    assert!(simple_vector![2] >= simple_vector![1, 9, 9]);
    assert!(SimpleVector::<i32>::new() < simple_vector![0]);
    assert_eq!(
        simple_vector![1, 2].cmp(&simple_vector![1, 2]),
        std::cmp::Ordering::Equal
    );
}

#[test]
fn test_hash_matches_equality() {
    let mut a = SimpleVector::<i32>::with_capacity(8);
    a.extend([1, 2, 3]);
    let b = simple_vector![1, 2, 3];

    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
}
