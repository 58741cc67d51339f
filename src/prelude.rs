//! Switches collection types between `std` and `alloc` so the rest of the
//! crate doesn't have to care.

#[cfg(feature = "std")]
pub(crate) use std::vec::Vec;

#[cfg(not(feature = "std"))]
pub(crate) use alloc::vec::Vec;
