// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport abstraction for communicating with the hood.
//!
//! The core never talks to a BLE stack directly; it goes through the
//! [`Transport`] trait for connected sessions (read/write/notify) and
//! receives [`Advertisement`] records from whatever scanner the host runs.
//! Radio-level reliability (retries, timeouts) is the implementation's
//! responsibility and surfaces here as [`TransportError`].
//!
//! A `btleplug`-backed implementation is available behind the `ble` feature
//! as [`BleTransport`].

#[cfg(feature = "ble")]
mod ble;

#[cfg(feature = "ble")]
pub use ble::{BleTransport, scan_advertisements};

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::error::TransportError;
use crate::types::DeviceAddress;

/// GATT characteristic UUIDs of the hood's transparent UART service.
pub mod characteristics {
    use uuid::Uuid;

    /// Write target for outgoing command frames.
    pub const RX: Uuid = Uuid::from_u128(0x49535343_8841_43f4_a8d4_ecbe34729bb3);

    /// Read/notify source for status frames.
    pub const TX: Uuid = Uuid::from_u128(0x49535343_1e4d_4bd9_ba61_23c647249616);

    /// Transparent UART configuration characteristic. Unused by this library
    /// but part of the service.
    pub const CONFIG: Uuid = Uuid::from_u128(0x49535343_6daa_4d02_abf6_19569aca69fe);
}

/// Callback invoked with the raw bytes of each characteristic notification.
pub type NotificationCallback = Arc<dyn Fn(&[u8]) + Send + Sync>;

/// One observed BLE advertisement, as delivered by the scanner collaborator.
///
/// The scanner delivers advertisements from every peer in range; the device
/// filters by [`address`](Self::address) itself.
#[derive(Debug, Clone)]
pub struct Advertisement {
    /// Address of the advertising peer.
    pub address: DeviceAddress,
    /// Manufacturer-data records, keyed by manufacturer identifier.
    pub manufacturer_data: HashMap<u16, Vec<u8>>,
    /// Signal strength of the advertisement in dBm.
    pub rssi: i16,
}

/// BLE client abstraction for one peripheral.
///
/// Implementations own the connection lifecycle; the device layer guarantees
/// at most one outstanding session (connect + read or connect + write) at a
/// time, so implementations need not handle overlapping sessions.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Establishes a connection to the peripheral.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the connection cannot be established.
    async fn connect(&self) -> Result<(), TransportError>;

    /// Closes the connection. Safe to call when not connected.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the disconnect fails.
    async fn disconnect(&self) -> Result<(), TransportError>;

    /// Reads the value of a characteristic.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the characteristic is missing or the read
    /// fails.
    async fn read_characteristic(&self, id: Uuid) -> Result<Vec<u8>, TransportError>;

    /// Writes a payload to a characteristic.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the characteristic is missing or the
    /// write fails.
    async fn write_characteristic(
        &self,
        id: Uuid,
        payload: &[u8],
        with_response: bool,
    ) -> Result<(), TransportError>;

    /// Subscribes to notifications on a characteristic, invoking `callback`
    /// with each notification payload.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the subscription cannot be registered.
    async fn subscribe(
        &self,
        id: Uuid,
        callback: NotificationCallback,
    ) -> Result<(), TransportError>;
}
