//! Repository methods, implemented as `impl ItemStore` blocks.

pub mod item;
pub mod preset;
