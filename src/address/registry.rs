//! Address range registry.
//!
//! This file tracks which endpoint owns which range of the simulated
//! address space, ensuring that ranges never overlap and that each endpoint
//! owns at most one range.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Half-open byte range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AddressRange {
    pub start: u64,
    pub end: u64,
}

impl AddressRange {
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, address: u64) -> bool {
        self.start <= address && address < self.end
    }

    pub fn overlaps(&self, other: &AddressRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#x}, {:#x})", self.start, self.end)
    }
}

/// Errors raised while partitioning or registering address ranges
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("Cannot partition memory across zero endpoints")]
    NoEndpoints,

    #[error("{total_size} bytes is too small to give each of {num_endpoints} endpoints a range")]
    RangeTooSmall { total_size: u64, num_endpoints: usize },

    #[error("Endpoint {0} already owns an address range")]
    AlreadyRegistered(String),

    #[error("Range {range} for endpoint {endpoint} overlaps the range of {owner}")]
    Overlap {
        endpoint: String,
        range: AddressRange,
        owner: String,
    },
}

/// One endpoint's share of the address space
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressAssignment {
    pub endpoint: String,
    pub range: AddressRange,
}

/// Registry of address ranges, kept in registration order
#[derive(Debug, Default)]
pub struct AddressRegistry {
    /// Assignments in registration order
    assignments: Vec<AddressAssignment>,
    /// Endpoint name -> index into `assignments`
    by_endpoint: HashMap<String, usize>,
}

impl AddressRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `range` as owned by `endpoint`
    pub fn register(&mut self, endpoint: &str, range: AddressRange) -> Result<(), AddressError> {
        if self.by_endpoint.contains_key(endpoint) {
            return Err(AddressError::AlreadyRegistered(endpoint.to_string()));
        }
        if let Some(existing) = self.assignments.iter().find(|a| a.range.overlaps(&range)) {
            return Err(AddressError::Overlap {
                endpoint: endpoint.to_string(),
                range,
                owner: existing.endpoint.clone(),
            });
        }

        self.by_endpoint.insert(endpoint.to_string(), self.assignments.len());
        self.assignments.push(AddressAssignment {
            endpoint: endpoint.to_string(),
            range,
        });
        Ok(())
    }

    /// Endpoint owning `address`, if any
    pub fn owner_of(&self, address: u64) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.range.contains(address))
            .map(|a| a.endpoint.as_str())
    }

    pub fn range_of(&self, endpoint: &str) -> Option<AddressRange> {
        self.by_endpoint
            .get(endpoint)
            .map(|&i| self.assignments[i].range)
    }

    pub fn assignments(&self) -> &[AddressAssignment] {
        &self.assignments
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
