//! Address parsing.
//!
//! Turns an `a.b.c.d/n` token into an address and a range checked prefix
//! length.

use crate::models::{FormatError, MAX_LENGTH};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

lazy_static! {
    static ref OCTET_RE: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
    static ref CIDR_RE: Regex = Regex::new(r"^[+-]?[0-9]+$").expect("Invalid Regex?");
}

/// Parse `"a.b.c.d/n"` into an address and prefix length.
///
/// Surrounding whitespace is ignored, as is whitespace on either side of
/// the `/`.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_calculator::processing::parse;
/// assert_eq!(parse("192.168.1.10/24").unwrap(), (Ipv4Addr::new(192, 168, 1, 10), 24));
/// ```
pub fn parse(input: &str) -> Result<(Ipv4Addr, u8), FormatError> {
    let input = input.trim();
    let parts: Vec<&str> = input.split('/').collect();
    if parts.len() != 2 {
        log::debug!("parse({input}) expected exactly one '/', got {}", parts.len() - 1);
        return Err(FormatError::InvalidFormat);
    }

    let addr = validate_octets(parts[0].trim()).ok_or_else(|| {
        log::debug!("parse({input}) invalid address part {:?}", parts[0]);
        FormatError::InvalidIp
    })?;
    let prefix = parse_cidr(parts[1].trim())?;

    Ok((addr, prefix))
}

/// Check a dotted quad, returning the address if all four octets are
/// clean decimal integers in `0..=255`.
///
/// Leading zeros are read as decimal, so `"010.0.0.1"` is `10.0.0.1`.
pub fn validate_octets(ip: &str) -> Option<Ipv4Addr> {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() != 4 {
        return None;
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        if !OCTET_RE.is_match(part) {
            return None;
        }
        // digits only, so a failure here means the value is above 255
        *octet = part.parse::<u8>().ok()?;
    }
    Some(Ipv4Addr::from(octets))
}

fn parse_cidr(cidr: &str) -> Result<u8, FormatError> {
    if !CIDR_RE.is_match(cidr) {
        log::debug!("parse_cidr({cidr:?}) not an integer");
        return Err(FormatError::InvalidCidr);
    }
    // an integer too wide for i64 is certainly outside 0..=32
    let value: i64 = cidr.parse().map_err(|_| FormatError::CidrOutOfRange)?;
    if !(0..=MAX_LENGTH as i64).contains(&value) {
        log::debug!("parse_cidr({cidr:?}) out of range");
        return Err(FormatError::CidrOutOfRange);
    }
    Ok(value as u8)
}
