// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `fjaraskupan` library.
//!
//! This module provides the error hierarchy for handling failures across the
//! library: value validation, frame decoding, and transport communication.
//!
//! Decode errors are contained inside the device layer and degrade to "no
//! state change" plus a diagnostic log; only transport failures propagate to
//! callers of [`Device::send_command`](crate::Device::send_command) and
//! [`Device::refresh`](crate::Device::refresh).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while decoding a status frame.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error occurred during transport communication.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The actual value that was provided.
        actual: u8,
    },

    /// A keycode is not exactly four ASCII characters.
    #[error("invalid keycode: {0}")]
    InvalidKeycode(String),

    /// A device address string could not be parsed.
    #[error("invalid device address: {0}")]
    InvalidAddress(String),
}

/// Errors related to decoding status frames.
///
/// All variants are non-fatal: the offending frame is discarded and the
/// device state is left unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The frame's 4-byte identity prefix did not match the paired keycode.
    #[error("frame keycode mismatch")]
    BadKeycode,

    /// The frame has the wrong length or a non-digit where a digit is
    /// required.
    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    /// The advertisement carried the expected manufacturer identifier but
    /// the reconstructed tag did not match. Ignorable but log-worthy.
    #[error("advertisement tag mismatch")]
    BadTag,
}

/// Errors from the transport collaborator (BLE client abstraction).
///
/// These are the only errors that propagate out of
/// [`Device::send_command`](crate::Device::send_command) and
/// [`Device::refresh`](crate::Device::refresh); the caller decides retry
/// policy and should keep the last-known-good snapshot queryable.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection to the device failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The transport is not connected.
    #[error("not connected")]
    NotConnected,

    /// A required GATT characteristic is missing from the peripheral.
    #[error("characteristic not found: {uuid}")]
    CharacteristicNotFound {
        /// The UUID of the missing characteristic.
        uuid: uuid::Uuid,
    },

    /// A characteristic read or write failed.
    #[error("characteristic I/O failed: {0}")]
    Io(String),

    /// Underlying BLE stack error.
    #[cfg(feature = "ble")]
    #[error("BLE error: {0}")]
    Ble(#[from] btleplug::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
