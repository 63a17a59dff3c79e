//! An exclusively owning handle to a fixed-length heap block of elements.
//!
//! `ArrayPtr` is the storage primitive underneath `SimpleVector`: it allocates,
//! adopts, releases and swaps whole blocks, and gives raw indexed access to them.
//! It has no notion of a logical length or of growth; the container layered on top
//! is responsible for both.

use std::fmt;
use std::ops::{Index, IndexMut};

use simple_vector_common_traits::storage_owner::{StorageAllocation, StorageOwner};

/// An owning pointer to a contiguous block of `T`.
///
/// The block is either empty (no heap allocation) or holds exactly the number of
/// elements it was created with. Ownership is never duplicated: `ArrayPtr` does not
/// implement `Clone`, and blocks move between handles only by a Rust move,
/// [`ArrayPtr::swap`], [`ArrayPtr::release`] or [`ArrayPtr::from_raw`].
///
/// `Index`/`IndexMut` are bounds-checked against the block length; the unchecked
/// path is [`ArrayPtr::get_unchecked`] and [`ArrayPtr::get_unchecked_mut`].
pub struct ArrayPtr<T> {
    raw: Box<[T]>,
}

impl<T> ArrayPtr<T> {
    /// Creates an empty handle that owns nothing.
    pub fn new() -> ArrayPtr<T> {
        ArrayPtr {
            raw: Box::default(),
        }
    }

    /// Takes ownership of a caller-supplied block. The block may be empty.
    pub fn from_raw(raw: Box<[T]>) -> ArrayPtr<T> {
        ArrayPtr { raw }
    }

    /// Relinquishes ownership of the block and leaves this handle empty.
    ///
    /// The caller becomes responsible for the returned block.
    pub fn release(&mut self) -> Box<[T]> {
        std::mem::take(&mut self.raw)
    }

    /// Consumes the handle and returns the owned block.
    pub fn into_raw(self) -> Box<[T]> {
        self.raw
    }

    /// Returns the number of slots in the owned block (zero when empty).
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the handle owns no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns `true` if the handle currently owns a non-empty block.
    #[inline]
    pub fn is_owning(&self) -> bool {
        !self.raw.is_empty()
    }

    /// Returns a raw pointer to the first slot without transferring ownership.
    ///
    /// The pointer is dangling when the handle is empty and is valid only while
    /// this handle is alive and owns the same block.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.raw.as_ptr()
    }

    /// Returns a mutable raw pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.raw.as_mut_ptr()
    }

    /// Returns the whole block as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.raw
    }

    /// Returns the whole block as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.raw
    }

    /// Returns a reference to the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`ArrayPtr::len`].
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.raw.len());
        unsafe { self.raw.get_unchecked(index) }
    }

    /// Returns a mutable reference to the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`ArrayPtr::len`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.raw.len());
        unsafe { self.raw.get_unchecked_mut(index) }
    }

    /// Exchanges the owned blocks of two handles. Never allocates.
    #[inline]
    pub fn swap(&mut self, other: &mut ArrayPtr<T>) {
        std::mem::swap(&mut self.raw, &mut other.raw);
    }
}

impl<T: Default> ArrayPtr<T> {
    /// Allocates a block of `len` default-initialized elements.
    ///
    /// Owns nothing when `len` is zero. Allocation failure aborts the process.
    pub fn with_len(len: usize) -> ArrayPtr<T> {
        if len == 0 {
            return ArrayPtr::new();
        }
        ArrayPtr {
            raw: std::iter::repeat_with(T::default).take(len).collect(),
        }
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        ArrayPtr::new()
    }
}

impl<T> Index<usize> for ArrayPtr<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.raw[index]
    }
}

impl<T> IndexMut<usize> for ArrayPtr<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.raw[index]
    }
}

impl<T> From<Box<[T]>> for ArrayPtr<T> {
    fn from(raw: Box<[T]>) -> Self {
        ArrayPtr::from_raw(raw)
    }
}

impl<T> From<Vec<T>> for ArrayPtr<T> {
    fn from(vec: Vec<T>) -> Self {
        ArrayPtr::from_raw(vec.into_boxed_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayPtr")
            .field("values", &self.as_slice())
            .field("len", &self.len())
            .finish()
    }
}

unsafe impl<T> StorageOwner for ArrayPtr<T> {
    fn storage(&self) -> StorageAllocation {
        StorageAllocation {
            ptr: self.as_ptr() as *const u8,
            len: self.len(),
            capacity: self.len(),
            element_size: std::mem::size_of::<T>(),
        }
    }
}
