//! `StorageOwner`: A trait for types that exclusively own a block of element storage.

/// A trait for types that own a contiguous block of element slots.
///
/// # Safety
///
/// Implementors must guarantee that:
/// - The pointer returned by `storage()` is valid for `capacity` elements for as long
///   as the owner is alive and not mutated.
/// - The storage is exclusively owned by the `StorageOwner` instance,
///   with no shared ownership of the underlying block.
/// - The reported length and capacity are accurate and `len <= capacity`.
pub unsafe trait StorageOwner {
    /// Returns information about the owned storage block.
    fn storage(&self) -> StorageAllocation;
}

/// Describes a block of element storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageAllocation {
    /// Pointer to the first slot of the block (dangling when `capacity` is zero).
    pub ptr: *const u8,
    /// Number of logically live elements.
    pub len: usize,
    /// Number of allocated slots.
    pub capacity: usize,
    /// Size of a single element in bytes.
    pub element_size: usize,
}

impl StorageAllocation {
    /// Total number of bytes reserved for the slots.
    pub fn heap_size(&self) -> usize {
        self.capacity * self.element_size
    }

    /// Number of allocated but logically unused slots.
    pub fn spare(&self) -> usize {
        self.capacity - self.len
    }
}
