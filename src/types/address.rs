// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BLE device address type.
//!
//! The scanner delivers advertisements from every peer in range; the device
//! filters by this address itself. Kept as a plain 6-byte value so the core
//! does not depend on any particular BLE stack.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// A 6-byte BLE device address (MAC).
///
/// # Examples
///
/// ```
/// use fjaraskupan::types::DeviceAddress;
///
/// let addr: DeviceAddress = "A4:C1:38:5B:0E:DF".parse().unwrap();
/// assert_eq!(addr.to_string(), "A4:C1:38:5B:0E:DF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceAddress([u8; 6]);

impl DeviceAddress {
    /// Creates an address from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Returns the address bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl From<[u8; 6]> for DeviceAddress {
    fn from(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }
}

impl FromStr for DeviceAddress {
    type Err = ValueError;

    /// Parses a colon-separated hex address like `"A4:C1:38:5B:0E:DF"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0_u8; 6];
        let mut parts = s.split(':');
        for byte in &mut bytes {
            let part = parts
                .next()
                .ok_or_else(|| ValueError::InvalidAddress(s.to_string()))?;
            *byte = u8::from_str_radix(part, 16)
                .map_err(|_| ValueError::InvalidAddress(s.to_string()))?;
        }
        if parts.next().is_some() {
            return Err(ValueError::InvalidAddress(s.to_string()));
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_round_trip() {
        let addr: DeviceAddress = "A4:C1:38:5B:0E:DF".parse().unwrap();
        assert_eq!(addr.as_bytes(), &[0xA4, 0xC1, 0x38, 0x5B, 0x0E, 0xDF]);
        assert_eq!(addr.to_string(), "A4:C1:38:5B:0E:DF");
    }

    #[test]
    fn address_lowercase_accepted() {
        let addr: DeviceAddress = "a4:c1:38:5b:0e:df".parse().unwrap();
        assert_eq!(addr.to_string(), "A4:C1:38:5B:0E:DF");
    }

    #[test]
    fn address_invalid() {
        assert!("A4:C1:38".parse::<DeviceAddress>().is_err());
        assert!("A4:C1:38:5B:0E:DF:00".parse::<DeviceAddress>().is_err());
        assert!("zz:C1:38:5B:0E:DF".parse::<DeviceAddress>().is_err());
    }
}
