//! Test doubles for the repository data provider

mod memory_source;

pub use memory_source::MemorySource;
