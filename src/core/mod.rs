//! Core types - pure abstractions shared across the codebase.

mod vpath;

pub use vpath::{InvalidVirtualPath, VirtualPath};
