//! Record client implementations shipped with the core

pub mod memory;

pub use memory::MemoryRecordClient;
