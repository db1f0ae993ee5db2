// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed type for hood ventilation control.
//!
//! This module provides a type-safe representation of fan speed stages,
//! ensuring values are always within the valid range of 0-8.

use std::fmt;

use crate::error::ValueError;

/// Fan speed stage (0-8), where 0 is off.
///
/// The hood exposes eight numbered ventilation stages. The same range is
/// used for the after-venting fan speed.
///
/// # Examples
///
/// ```
/// use fjaraskupan::types::FanSpeed;
///
/// let speed = FanSpeed::new(5).unwrap();
/// assert_eq!(speed.value(), 5);
///
/// // Invalid values return error
/// assert!(FanSpeed::new(9).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FanSpeed(u8);

impl FanSpeed {
    /// Fan off (stage 0).
    pub const OFF: Self = Self(0);

    /// Maximum fan speed (stage 8).
    pub const MAX: Self = Self(8);

    /// Creates a new fan speed value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 8.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 8 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 8,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the speed stage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns `true` if the fan is off (stage 0).
    #[must_use]
    pub const fn is_off(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for FanSpeed {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_speed_valid_values() {
        for v in 0..=8 {
            let speed = FanSpeed::new(v).unwrap();
            assert_eq!(speed.value(), v);
        }
    }

    #[test]
    fn fan_speed_invalid_value() {
        assert!(FanSpeed::new(9).is_err());
        assert!(FanSpeed::new(255).is_err());
    }

    #[test]
    fn fan_speed_is_off() {
        assert!(FanSpeed::OFF.is_off());
        assert!(!FanSpeed::MAX.is_off());
    }

    #[test]
    fn fan_speed_default_is_off() {
        assert_eq!(FanSpeed::default(), FanSpeed::OFF);
    }

    #[test]
    fn fan_speed_ordering() {
        assert!(FanSpeed::OFF < FanSpeed::MAX);
        assert!(FanSpeed::new(3).unwrap() < FanSpeed::new(7).unwrap());
    }

    #[test]
    fn fan_speed_display() {
        assert_eq!(FanSpeed::new(5).unwrap().to_string(), "5");
    }
}
