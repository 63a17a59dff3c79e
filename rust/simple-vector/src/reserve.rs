//! Capacity reservation hint.

use crate::vector::SimpleVector;

/// A request for pre-allocated capacity, consumed by
/// [`SimpleVector::with_reservation`] or `SimpleVector::from`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    pub fn new(capacity: usize) -> ReserveProxy {
        ReserveProxy { capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Creates a reservation hint for `capacity` slots.
///
/// ```
/// use simple_vector::{SimpleVector, reserve};
///
/// let v = SimpleVector::<String>::from(reserve(8));
/// assert!(v.is_empty());
/// assert_eq!(v.capacity(), 8);
/// ```
pub fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy::new(capacity)
}

impl<T: Default> From<ReserveProxy> for SimpleVector<T> {
    fn from(hint: ReserveProxy) -> Self {
        SimpleVector::with_reservation(hint)
    }
}
