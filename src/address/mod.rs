//! Address space registration module.
//!
//! This module partitions the simulated memory evenly across endpoint nodes
//! and records which endpoint owns which address range.

pub mod registry;
pub mod allocator;

// Re-export commonly used types
pub use registry::{AddressAssignment, AddressError, AddressRange, AddressRegistry};
pub use allocator::{partition_address_space, register_endpoints};
