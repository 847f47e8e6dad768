//! CIDR prefixes (subnets) for both address families.
//!
//! Provides [`Prefix`] along with the mask arithmetic it is built on. All bit
//! values are right aligned in a `u128`, so an IPv4 mask lives in the low 32 bits.

use super::address::{Address, Family};
use crate::error::ParseError;
use serde::Serialize;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Convert a prefix length to a network mask for the given family.
///
/// # Examples
/// ```
/// use ip_subnet_relationship::models::{get_cidr_mask, Family};
/// assert_eq!(get_cidr_mask(Family::V4, 24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(family: Family, len: u8) -> Result<u128, ParseError> {
    let max = family.max_length();
    if len > max {
        return Err(ParseError::InvalidPrefixLength {
            len: len.to_string(),
            family,
            max,
        });
    }
    let all_bits = family.all_bits();
    let host_bits = all_bits.checked_shr(len as u32).unwrap_or(0);
    Ok(all_bits & !host_bits)
}

/// Get the network address for a given address and prefix length.
pub fn cut_addr(addr: Address, len: u8) -> Result<Address, ParseError> {
    let mask = get_cidr_mask(addr.family(), len)?;
    Ok(Address::from_bits(addr.family(), addr.bits() & mask))
}

/// Prefix length for a contiguous IPv4 netmask ("255.255.255.0") or hostmask ("0.0.0.255").
pub fn mask_to_len(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    let ones = bits.leading_ones();
    if bits.checked_shl(ones).unwrap_or(0) == 0 {
        return Some(ones as u8);
    }
    let zeros = bits.leading_zeros();
    if (!bits).checked_shl(zeros).unwrap_or(0) == 0 {
        return Some(zeros as u8);
    }
    None
}

/// A subnet in canonical form: no host bits are set in `addr`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Prefix {
    addr: Address,
    len: u8,
}

impl Prefix {
    /// Parse a subnet line.
    ///
    /// Accepts "addr/len", a bare address (host prefix), and for IPv4 a dotted
    /// netmask or hostmask in place of the length. Host bits are masked off.
    pub fn new(addr_cidr: &str) -> Result<Prefix, ParseError> {
        let addr_cidr = addr_cidr.trim();
        if addr_cidr.is_empty() {
            return Err(ParseError::Empty);
        }
        let (addr_part, len_part) = match addr_cidr.split_once('/') {
            Some((addr, len)) => (addr, Some(len)),
            None => (addr_cidr, None),
        };
        let addr = Address::new(addr_part)?;
        let family = addr.family();
        let len = match len_part {
            None => family.max_length(),
            Some(len) => parse_len(family, len)?,
        };
        let prefix = Prefix::from_parts(addr, len)?;
        if prefix.addr != addr {
            log::debug!("{addr_cidr} has host bits set, using {prefix}");
        }
        Ok(prefix)
    }

    /// Build a prefix from a base address and length, masking off host bits.
    fn from_parts(addr: Address, len: u8) -> Result<Prefix, ParseError> {
        let addr = cut_addr(addr, len)?;
        Ok(Prefix { addr, len })
    }

    /// The network (base) address.
    pub fn network(&self) -> Address {
        self.addr
    }

    /// The prefix length in bits.
    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    pub fn family(&self) -> Family {
        self.addr.family()
    }
}

fn parse_len(family: Family, len: &str) -> Result<u8, ParseError> {
    let max = family.max_length();
    if !len.is_empty() && len.bytes().all(|b| b.is_ascii_digit()) {
        return match len.parse::<u8>() {
            Ok(n) if n <= max => Ok(n),
            _ => Err(ParseError::InvalidPrefixLength {
                len: len.to_string(),
                family,
                max,
            }),
        };
    }
    if family == Family::V4 {
        let mask =
            Ipv4Addr::from_str(len).map_err(|_| ParseError::InvalidNetmask(len.to_string()))?;
        return mask_to_len(mask).ok_or_else(|| ParseError::InvalidNetmask(len.to_string()));
    }
    Err(ParseError::InvalidPrefixLength {
        len: len.to_string(),
        family,
        max,
    })
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
