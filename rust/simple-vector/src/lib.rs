//! A minimal growable array with explicit storage management.
//!
//! [`SimpleVector`] keeps a logical `size` and a `capacity` over a single
//! [`ArrayPtr`] block. Growth doubles the capacity (starting from one), and every
//! reallocation moves the live elements into a fresh block and swaps it in, so no
//! element is ever cloned while growing.
//!
//! ```
//! use simple_vector::{SimpleVector, reserve, simple_vector};
//!
//! let mut v = simple_vector![1, 2, 3];
//! v.push_back(4);
//! v.insert(0, 0);
//! assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4]);
//! assert!(v.at(5).is_err());
//!
//! let reserved: SimpleVector<u32> = reserve(16).into();
//! assert_eq!(reserved.size(), 0);
//! assert_eq!(reserved.capacity(), 16);
//! ```

pub mod iter;
pub mod macros;
pub mod reserve;
pub mod vector;

pub use iter::IntoIter;
pub use reserve::{ReserveProxy, reserve};
pub use simple_vector_array_ptr::ArrayPtr;
pub use simple_vector_common::{Error, ErrorKind, Result};
pub use vector::SimpleVector;

#[cfg(test)]
mod tests;
