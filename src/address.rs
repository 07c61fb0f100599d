//! Address splitter.
//!
//! Decomposes a free-text, comma-delimited address into [`AddressComponents`] using a
//! fixed positional heuristic: the trailing segments are read as `city, state, postal
//! code` and everything before them becomes address lines. The heuristic is locale-naive
//! on purpose and degrades to empty strings for short inputs; it never fails.

use crate::types::AddressComponents;

/// Split one address string into its six components.
///
/// Segments are produced by splitting on commas, trimming, and dropping anything that
/// trims to empty. Classification by segment count:
///
/// - 3 or more: last three are postal code / state / city (right to left), the rest are
///   address-line material
/// - exactly 2: `state, postal code`
/// - exactly 1: postal code only
/// - 0: all components empty
///
/// Line 1 takes the first address-line segment. Lines 2 and 3 fall back to the city when
/// no segment is available for them; segments past the second are joined into line 3 with
/// `", "`.
pub fn split_address(addr: &str) -> AddressComponents {
    let parts: Vec<&str> = addr
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let (addr_parts, city, state, postal_code): (&[&str], &str, &str, &str) = match parts.len() {
        0 => (&[], "", "", ""),
        1 => (&[], "", "", parts[0]),
        2 => (&[], "", parts[0], parts[1]),
        n => (&parts[..n - 3], parts[n - 3], parts[n - 2], parts[n - 1]),
    };

    let line1 = addr_parts.first().copied().unwrap_or("").to_string();
    let line2 = addr_parts.get(1).copied().unwrap_or(city).to_string();
    let line3 = if addr_parts.len() > 2 {
        addr_parts[2..].join(", ")
    } else {
        city.to_string()
    };

    AddressComponents {
        line1,
        line2,
        line3,
        city: city.to_string(),
        state: state.to_string(),
        postal_code: postal_code.to_string(),
    }
}
