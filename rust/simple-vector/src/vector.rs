//! The `SimpleVector` container.

use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut};

use simple_vector_array_ptr::ArrayPtr;
use simple_vector_common::{Result, verify_index};
use simple_vector_common_traits::storage_owner::{StorageAllocation, StorageOwner};

use crate::reserve::ReserveProxy;

/// A growable array of `T` over a single owned block of slots.
///
/// The block always holds exactly `capacity()` initialized values; the first
/// `size()` of them are the live elements. The remaining slots are spare storage:
/// they hold either default values or values left behind by `clear`, `pop_back`,
/// `erase` or a shrinking `resize`, and every operation that brings a spare slot
/// back into the live range overwrites it first.
///
/// # Growth
///
/// When a `push_back` or `insert` finds the block full, the capacity becomes
/// `max(1, 2 * capacity)`. Growing allocates a new default-filled block, moves the
/// live elements into it and swaps it in; elements are never cloned while growing.
///
/// # Contracts
///
/// - `v[i]` only debug-asserts `i < size()`. Use [`SimpleVector::at`] for a
///   checked access that reports [`ErrorKind::IndexOutOfRange`](crate::ErrorKind).
/// - `insert` requires `pos <= size()`, `erase` requires `pos < size()` and
///   `pop_back` requires a non-empty vector; violations panic.
pub struct SimpleVector<T> {
    /// Storage block, `capacity()` slots long.
    data: ArrayPtr<T>,
    /// Number of live elements at the front of `data`.
    size: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector without allocating.
    pub fn new() -> SimpleVector<T> {
        SimpleVector {
            data: ArrayPtr::new(),
            size: 0,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the vector holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::ErrorKind) if `index >= size()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index!(index, self.size);
        Ok(&self.data[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::ErrorKind) if `index >= size()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index!(index, self.size);
        Ok(&mut self.data[index])
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data.as_slice()[..self.size]
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data.as_mut_slice()[..self.size]
    }

    /// Returns an iterator over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator that allows modifying each live element.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Sets the size to zero. The capacity and the block are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Removes the last element from the live range. Does not deallocate.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn pop_back(&mut self) {
        assert!(self.size > 0, "pop_back on an empty SimpleVector");
        self.size -= 1;
    }

    /// Removes the element at `pos`, shifting the tail one slot left.
    ///
    /// Returns `pos`, which now refers to the element that followed the erased one
    /// (or equals `size()` if the last element was erased).
    ///
    /// # Panics
    ///
    /// Panics if `pos >= size()`.
    pub fn erase(&mut self, pos: usize) -> usize {
        assert!(
            pos < self.size,
            "erase position {pos} out of bounds for size {}",
            self.size
        );
        // The erased value rotates into the first spare slot.
        self.data.as_mut_slice()[pos..self.size].rotate_left(1);
        self.size -= 1;
        pos
    }

    /// Exchanges the contents of two vectors in constant time.
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.data.swap(&mut other.data);
        std::mem::swap(&mut self.size, &mut other.size);
    }

    /// Consumes the vector, returning the live elements as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = self.data.into_raw().into_vec();
        vec.truncate(self.size);
        vec
    }

    /// Returns the number of bytes held by the slot block.
    pub fn heap_size(&self) -> usize {
        self.storage().heap_size()
    }

    /// Checks the internal invariants, panicking if any of them is violated.
    pub fn verify(&self) {
        assert!(
            self.size <= self.capacity(),
            "size {} exceeds capacity {}",
            self.size,
            self.capacity()
        );
        assert_eq!(self.data.is_owning(), self.capacity() != 0);
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates a vector of `size` default values. `capacity() == size`.
    pub fn with_size(size: usize) -> SimpleVector<T> {
        SimpleVector {
            data: ArrayPtr::with_len(size),
            size,
        }
    }

    /// Creates an empty vector with `capacity` pre-allocated slots.
    pub fn with_capacity(capacity: usize) -> SimpleVector<T> {
        SimpleVector {
            data: ArrayPtr::with_len(capacity),
            size: 0,
        }
    }

    /// Creates an empty vector with the capacity requested by `hint`.
    pub fn with_reservation(hint: ReserveProxy) -> SimpleVector<T> {
        Self::with_capacity(hint.capacity())
    }

    /// Ensures `capacity() >= new_capacity`, moving the live elements into a new
    /// block if the current one is smaller. The size is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity);
        }
    }

    /// Changes the size to `new_size`.
    ///
    /// Shrinking only moves the end of the live range. Growing sets every newly
    /// exposed element to `T::default()`, reallocating to exactly `new_size` slots
    /// if the block is too small.
    pub fn resize(&mut self, new_size: usize) {
        if new_size <= self.size {
            self.size = new_size;
            return;
        }
        if new_size > self.capacity() {
            // A fresh block is default-filled past the moved elements.
            self.reallocate(new_size);
        } else {
            self.data.as_mut_slice()[self.size..new_size].fill_with(T::default);
        }
        self.size = new_size;
    }

    /// Appends `value`, doubling the capacity if the block is full.
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            self.reallocate(self.doubled_capacity());
        }
        self.data[self.size] = value;
        self.size += 1;
    }

    /// Inserts `value` at `pos`, shifting `[pos, size())` one slot right.
    ///
    /// With spare capacity the shift happens in place; otherwise the elements are
    /// moved into a block of `max(1, 2 * capacity())` slots around the gap.
    /// Returns `pos`, the index of the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `pos > size()`.
    pub fn insert(&mut self, pos: usize, value: T) -> usize {
        assert!(
            pos <= self.size,
            "insert position {pos} out of bounds for size {}",
            self.size
        );
        if self.size < self.capacity() {
            self.data.as_mut_slice()[pos..=self.size].rotate_right(1);
        } else {
            let new_capacity = self.doubled_capacity();
            log::trace!(
                "SimpleVector::insert: growing capacity {} -> {new_capacity}",
                self.capacity()
            );
            let mut data = ArrayPtr::<T>::with_len(new_capacity);
            let src = self.data.as_mut_slice();
            let dst = data.as_mut_slice();
            dst[..pos].swap_with_slice(&mut src[..pos]);
            dst[pos + 1..self.size + 1].swap_with_slice(&mut src[pos..self.size]);
            self.data.swap(&mut data);
        }
        self.data[pos] = value;
        self.size += 1;
        pos
    }

    /// Moves the live elements into a new block of `new_capacity` slots.
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.size);
        log::trace!(
            "SimpleVector: growing capacity {} -> {new_capacity}",
            self.capacity()
        );
        let mut data = ArrayPtr::<T>::with_len(new_capacity);
        let size = self.size;
        data.as_mut_slice()[..size].swap_with_slice(&mut self.data.as_mut_slice()[..size]);
        self.data.swap(&mut data);
    }

    /// Growth target for a full block: `max(1, 2 * capacity())`.
    fn doubled_capacity(&self) -> usize {
        self.capacity()
            .checked_mul(2)
            .expect("capacity overflow")
            .max(1)
    }
}

impl<T: Clone> SimpleVector<T> {
    /// Creates a vector of `size` copies of `value`. `capacity() == size`.
    pub fn from_elem(size: usize, value: T) -> SimpleVector<T> {
        SimpleVector::from(vec![value; size])
    }

    /// Creates a vector holding a copy of `items`. `capacity() == items.len()`.
    pub fn from_slice(items: &[T]) -> SimpleVector<T> {
        SimpleVector::from(items.to_vec())
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        SimpleVector::new()
    }
}

impl<T: Clone + Default> Clone for SimpleVector<T> {
    /// Deep copy into a new block of the same capacity.
    fn clone(&self) -> Self {
        let mut data = ArrayPtr::<T>::with_len(self.capacity());
        data.as_mut_slice()[..self.size].clone_from_slice(self.as_slice());
        SimpleVector {
            data,
            size: self.size,
        }
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(vec: Vec<T>) -> Self {
        let size = vec.len();
        SimpleVector {
            data: ArrayPtr::from(vec),
            size,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(items: [T; N]) -> Self {
        SimpleVector::from(Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(items: &[T]) -> Self {
        SimpleVector::from_slice(items)
    }
}

impl<T> From<SimpleVector<T>> for Vec<T> {
    fn from(v: SimpleVector<T>) -> Self {
        v.into_vec()
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.size,
            "index {index} out of bounds for size {}",
            self.size
        );
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.size,
            "index {index} out of bounds for size {}",
            self.size
        );
        &mut self.data[index]
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleVector")
            .field("values", &self.as_slice())
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

unsafe impl<T> StorageOwner for SimpleVector<T> {
    fn storage(&self) -> StorageAllocation {
        StorageAllocation {
            len: self.size,
            ..self.data.storage()
        }
    }
}
