//! Adapter implementations of the content ports.

pub mod memory;
