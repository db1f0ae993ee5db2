// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Periodic venting interval type.

use std::fmt;

use crate::error::ValueError;

/// Periodic venting interval in minutes (0-59), where 0 disables it.
///
/// # Examples
///
/// ```
/// use fjaraskupan::types::VentingPeriod;
///
/// let period = VentingPeriod::new(30).unwrap();
/// assert_eq!(period.value(), 30);
///
/// assert!(VentingPeriod::new(60).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VentingPeriod(u8);

impl VentingPeriod {
    /// Periodic venting disabled.
    pub const OFF: Self = Self(0);

    /// Maximum interval (59 minutes).
    pub const MAX: Self = Self(59);

    /// Creates a new venting period.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 59.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 59 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 59,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the interval in minutes.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for VentingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

impl TryFrom<u8> for VentingPeriod {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
