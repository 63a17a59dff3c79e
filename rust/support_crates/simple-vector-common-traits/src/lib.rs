//! Traits and definitions shared by the simple-vector support crates.
//!
//! # Modules
//!
//! - [`storage_owner`]: Traits for describing exclusively owned element storage

pub mod storage_owner;
