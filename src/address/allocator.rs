//! Address space partitioning.
//!
//! The total memory is split into equal contiguous chunks of
//! `total_size / num_endpoints` bytes, handed out in endpoint order. Bytes
//! left over by the integer division stay unassigned at the top of the
//! address space.

use log::{debug, info};

use super::registry::{AddressError, AddressRange, AddressRegistry};
use crate::topology::Endpoint;

/// Split `[0, total_size)` into `num_endpoints` equal ranges
///
/// # Examples
/// ```
/// use netshape::address::partition_address_space;
///
/// let ranges = partition_address_space(1024, 4).unwrap();
/// assert_eq!(ranges[1].start, 256);
/// assert_eq!(ranges[1].end, 512);
/// ```
pub fn partition_address_space(total_size: u64, num_endpoints: usize) -> Result<Vec<AddressRange>, AddressError> {
    if num_endpoints == 0 {
        return Err(AddressError::NoEndpoints);
    }

    let chunk = total_size / num_endpoints as u64;
    if chunk == 0 {
        return Err(AddressError::RangeTooSmall { total_size, num_endpoints });
    }

    let leftover = total_size - chunk * num_endpoints as u64;
    if leftover > 0 {
        debug!("{} bytes left unassigned after partitioning", leftover);
    }

    Ok((0..num_endpoints as u64)
        .map(|i| AddressRange::new(i * chunk, (i + 1) * chunk))
        .collect())
}

/// Partition `total_size` bytes across `endpoints` and register each range
pub fn register_endpoints(endpoints: &[Endpoint], total_size: u64) -> Result<AddressRegistry, AddressError> {
    let ranges = partition_address_space(total_size, endpoints.len())?;
    let mut registry = AddressRegistry::new();

    for (endpoint, range) in endpoints.iter().zip(ranges) {
        registry.register(&endpoint.name, range)?;
        debug!("Endpoint {} owns {}", endpoint.name, range);
    }

    info!(
        "Registered {} address ranges of {} bytes",
        registry.len(),
        total_size / endpoints.len() as u64
    );
    Ok(registry)
}
