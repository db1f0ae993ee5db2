// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Frame keycode type.
//!
//! Every frame exchanged with the hood is prefixed by a fixed 4-character
//! ASCII keycode established at pairing. The keycode is a weak frame-identity
//! check, not a security credential.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// The 4-byte ASCII keycode prefixing every frame.
///
/// # Examples
///
/// ```
/// use fjaraskupan::types::Keycode;
///
/// let keycode: Keycode = "1234".parse().unwrap();
/// assert_eq!(keycode.as_bytes(), b"1234");
///
/// // The factory default
/// assert_eq!(Keycode::default(), "1234".parse().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keycode([u8; 4]);

impl Keycode {
    /// Creates a keycode from exactly four ASCII bytes.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidKeycode` if the input is not four
    /// printable ASCII bytes.
    pub fn new(bytes: [u8; 4]) -> Result<Self, ValueError> {
        if bytes.iter().any(|b| !b.is_ascii_graphic()) {
            return Err(ValueError::InvalidKeycode(
                String::from_utf8_lossy(&bytes).into_owned(),
            ));
        }
        Ok(Self(bytes))
    }

    /// Returns the keycode bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl Default for Keycode {
    /// The factory default keycode `"1234"`.
    fn default() -> Self {
        Self(*b"1234")
    }
}

impl FromStr for Keycode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; 4] = s
            .as_bytes()
            .try_into()
            .map_err(|_| ValueError::InvalidKeycode(s.to_string()))?;
        Self::new(bytes)
    }
}

impl fmt::Display for Keycode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}
