//! Memory size parsing utilities.
//!
//! This module parses size strings (e.g., "512MB", "4GiB") into byte counts
//! for partitioning the address space across endpoints.

/// Errors that can occur while parsing a size string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SizeParseError {
    #[error("Empty memory size")]
    Empty,

    #[error("Invalid memory size format: {0}")]
    InvalidFormat(String),

    #[error("Memory size too large: {0}")]
    Overflow(String),
}

/// Parse a memory size string (e.g., "512MB", "2GiB", "4096") to bytes
///
/// Supported formats (case-insensitive, optional space before the unit):
/// - Raw bytes: "4096", "4096B"
/// - Kibibytes: "64KB", "64KiB", "64K"
/// - Mebibytes: "512MB", "512MiB", "512M"
/// - Gibibytes: "2GB", "2GiB", "2G"
/// - Tebibytes: "1TB", "1TiB", "1T"
///
/// All multiples are powers of 1024, which is how simulator memory sizes are
/// usually written.
///
/// # Examples
/// ```
/// use netshape::utils::size::parse_memory_size;
///
/// assert_eq!(parse_memory_size("4096"), Ok(4096));
/// assert_eq!(parse_memory_size("512MB"), Ok(512 * 1024 * 1024));
/// assert!(parse_memory_size("lots").is_err());
/// ```
pub fn parse_memory_size(size: &str) -> Result<u64, SizeParseError> {
    let size = size.trim();
    if size.is_empty() {
        return Err(SizeParseError::Empty);
    }

    let num_str = extract_number_part(size);
    if num_str.is_empty() {
        return Err(SizeParseError::InvalidFormat(size.to_string()));
    }
    let unit = size[num_str.len()..].trim().to_ascii_lowercase();

    let multiplier: u64 = match unit.as_str() {
        "" | "b" => 1,
        "k" | "kb" | "kib" => 1 << 10,
        "m" | "mb" | "mib" => 1 << 20,
        "g" | "gb" | "gib" => 1 << 30,
        "t" | "tb" | "tib" => 1 << 40,
        _ => return Err(SizeParseError::InvalidFormat(size.to_string())),
    };

    let value: u64 = num_str
        .parse()
        .map_err(|_| SizeParseError::Overflow(size.to_string()))?;

    value
        .checked_mul(multiplier)
        .ok_or_else(|| SizeParseError::Overflow(size.to_string()))
}

/// Extract the numeric part from a size string by finding the first non-digit character
fn extract_number_part(size: &str) -> &str {
    let end = size
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(size.len(), |(i, _)| i);
    &size[..end]
}
