// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dim level type for the hood light.
//!
//! This module provides a type-safe representation of light dim levels,
//! ensuring values are always within the valid range of 0-100%.

use std::fmt;

use crate::error::ValueError;

/// Light brightness as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use fjaraskupan::types::DimLevel;
///
/// let dim = DimLevel::new(75).unwrap();
/// assert_eq!(dim.value(), 75);
///
/// let full = DimLevel::MAX;
/// assert_eq!(full.value(), 100);
///
/// // Invalid values return error
/// assert!(DimLevel::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimLevel(u8);

impl DimLevel {
    /// Minimum dim level (0%).
    pub const MIN: Self = Self(0);

    /// Maximum dim level (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new dim level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Creates a dim level, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Returns the brightness percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a float between 0.0 and 1.0.
    #[must_use]
    pub fn as_fraction(&self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

impl fmt::Display for DimLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for DimLevel {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
