//! Single host addresses tagged with their family.

use crate::error::ParseError;
use serde::Serialize;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum prefix length for an IPv4 address (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for an IPv6 address (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Address family. Every address and prefix belongs to exactly one.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Detect the family from the literal's own syntax: a `:` anywhere means IPv6.
    pub fn detect(literal: &str) -> Family {
        if literal.contains(':') {
            Family::V6
        } else {
            Family::V4
        }
    }

    /// Address width in bits.
    pub fn max_length(&self) -> u8 {
        match self {
            Family::V4 => MAX_LENGTH_V4,
            Family::V6 => MAX_LENGTH_V6,
        }
    }

    /// All ones across the family's width, right aligned in a `u128`.
    pub fn all_bits(&self) -> u128 {
        match self {
            Family::V4 => u32::MAX as u128,
            Family::V6 => u128::MAX,
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// An immutable host address.
///
/// Equality is family plus bit pattern, which is exactly what [`IpAddr`] gives us.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Address(IpAddr);

impl Address {
    /// Parse an address literal (e.g. "10.1.2.3" or "2001:db8::1").
    pub fn new(literal: &str) -> Result<Address, ParseError> {
        let literal = literal.trim();
        if literal.is_empty() {
            return Err(ParseError::Empty);
        }
        let ip = match Family::detect(literal) {
            Family::V4 => Ipv4Addr::from_str(literal).map(IpAddr::V4),
            Family::V6 => Ipv6Addr::from_str(literal).map(IpAddr::V6),
        }
        .map_err(|_| ParseError::InvalidAddress(literal.to_string()))?;
        Ok(Address(ip))
    }

    /// Build an address from right-aligned bits. Bits above the family width are dropped.
    pub fn from_bits(family: Family, bits: u128) -> Address {
        match family {
            Family::V4 => Address(IpAddr::V4(Ipv4Addr::from(bits as u32))),
            Family::V6 => Address(IpAddr::V6(Ipv6Addr::from(bits))),
        }
    }

    pub fn family(&self) -> Family {
        match self.0 {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }

    /// Address bits, right aligned: an IPv4 address occupies the low 32 bits.
    pub fn bits(&self) -> u128 {
        match self.0 {
            IpAddr::V4(ip) => u32::from(ip) as u128,
            IpAddr::V6(ip) => u128::from(ip),
        }
    }

    /// Bit at `depth`, counted from the most significant bit of the family width.
    pub fn bit(&self, depth: u8) -> bool {
        let width = self.family().max_length();
        debug_assert!(depth < width);
        (self.bits() >> (width - 1 - depth)) & 1 == 1
    }
}

/// Text form: IPv4-mapped IPv6 addresses keep hex groups (`::ffff:102:304`)
/// instead of the dotted tail std prints (`::ffff:1.2.3.4`).
impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            IpAddr::V6(ip) if ip.to_ipv4_mapped().is_some() => {
                let segments = ip.segments();
                write!(f, "::ffff:{:x}:{:x}", segments[6], segments[7])
            }
            ip => write!(f, "{ip}"),
        }
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
