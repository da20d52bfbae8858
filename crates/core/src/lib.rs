//! Pure domain logic for the character catalogue.
//!
//! Nothing in this crate performs I/O. It holds the shared scalar types,
//! the domain error enum, sentinel normalization, pagination math, page
//! statistics and CSV rendering.

pub mod error;
pub mod export;
pub mod normalize;
pub mod pagination;
pub mod statistics;
pub mod types;
