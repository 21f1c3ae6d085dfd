//! Domain building blocks shared by the store and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod download;
pub mod error;
pub mod search;
