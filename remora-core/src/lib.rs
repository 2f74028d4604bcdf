//! Remora Core - Target topology model for the remote debugger.
//!
//! This crate models the debugged target's process and virtual-memory
//! topology: the fixed-width wire records the target sends, and the
//! snapshot collections (process list, memory map) the debugging
//! commands query. The transport that fetches the raw records and the
//! commands that act on the model live in their own crates.

pub mod memory;
pub mod process;
pub mod wire;

// Re-export commonly used types
pub use memory::{MemoryMap, MemoryRegion};
pub use process::{MatchMode, Process, ProcessList};
pub use wire::{ProcessInfo, ThreadInfo, WireError};
