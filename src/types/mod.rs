//! Core type definitions using newtype patterns for type safety.
//!
//! A `Port` can only hold 1-65535, and a `PortList` is only produced by the
//! port expression parser.

mod port;

pub use port::{Port, PortList};
