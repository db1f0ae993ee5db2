// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level device abstraction for the hood.
//!
//! A [`Device`] owns the latest canonical [`DeviceState`] snapshot, merges
//! codec-decoded updates from whichever source fires last (notification or
//! advertisement), and serializes all outgoing command traffic against the
//! transport collaborator.
//!
//! Notification and advertisement handling is lock-free with respect to the
//! session lock: the callbacks only replace the in-memory snapshot, so they
//! are never delayed by an in-flight command or refresh.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::codec;
use crate::command::Command;
use crate::error::TransportError;
use crate::state::{DeviceState, StateUpdate};
use crate::subscription::{CallbackRegistry, SubscriptionId};
use crate::transport::{Advertisement, Transport, characteristics};
use crate::types::{DeviceAddress, Keycode};

/// Communication handler for one paired hood.
///
/// Constructed once per paired device and handed directly to whatever
/// adapter needs it; there is no global registry.
///
/// # Concurrency
///
/// At most one transport session (connect + read or connect + write) runs at
/// a time: [`send_command`](Self::send_command) and
/// [`refresh`](Self::refresh) serialize on an internal session lock, which
/// is released on every exit path including cancellation. State reads and
/// push updates never take that lock.
///
/// # Examples
///
/// ```ignore
/// let device = Arc::new(Device::new(transport, address, Keycode::default()));
/// device.subscribe_notifications().await?;
///
/// device.send_command(Command::SetFanSpeed(FanSpeed::new(3)?)).await?;
/// println!("light: {}", device.state().light_on);
/// ```
pub struct Device<T: Transport> {
    transport: Arc<T>,
    address: DeviceAddress,
    keycode: Keycode,
    state: RwLock<DeviceState>,
    session: Mutex<()>,
    callbacks: CallbackRegistry,
}

impl<T: Transport> Device<T> {
    /// Creates a device for the peripheral at `address`, paired with the
    /// given keycode.
    pub fn new(transport: T, address: DeviceAddress, keycode: Keycode) -> Self {
        Self {
            transport: Arc::new(transport),
            address,
            keycode,
            state: RwLock::new(DeviceState::default()),
            session: Mutex::new(()),
            callbacks: CallbackRegistry::new(),
        }
    }

    /// Returns the peripheral address this device is bound to.
    #[must_use]
    pub fn address(&self) -> DeviceAddress {
        self.address
    }

    /// Returns the latest state snapshot. Never blocks on transport I/O.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        *self.state.read()
    }

    /// Registers a callback invoked with every new state snapshot.
    pub fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceState) + Send + Sync + 'static,
    {
        self.callbacks.on_state_changed(callback)
    }

    /// Unregisters a state-change callback.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }

    /// Merges an overlay into the current snapshot and notifies subscribers.
    fn apply_update(&self, update: &StateUpdate) -> DeviceState {
        let next = {
            let mut state = self.state.write();
            *state = state.apply(update);
            *state
        };
        self.callbacks.dispatch(&next);
        next
    }

    /// Handles a characteristic notification payload.
    ///
    /// Decode failures are contained: the frame is discarded with a log
    /// entry and the state is left unchanged.
    pub fn handle_notification(&self, raw: &[u8]) {
        tracing::debug!(address = %self.address, ?raw, "characteristic notification");
        match codec::decode_characteristic(&self.keycode, raw) {
            Ok(update) => {
                self.apply_update(&update);
            }
            Err(err) => {
                tracing::warn!(address = %self.address, %err, "discarding notification frame");
            }
        }
    }

    /// Handles one observed advertisement.
    ///
    /// Advertisements from other peers, or without the hood's manufacturer
    /// record, are no-ops. Tag mismatches are logged and dropped.
    pub fn handle_advertisement(&self, advertisement: &Advertisement) {
        if advertisement.address != self.address {
            return;
        }
        match codec::decode_advertisement(&advertisement.manufacturer_data) {
            Ok(Some(mut update)) => {
                // Signal strength comes from the envelope, not the payload.
                update.rssi = Some(advertisement.rssi);
                self.apply_update(&update);
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(address = %self.address, %err, "discarding advertisement record");
            }
        }
    }

    /// Sends a command to the hood.
    ///
    /// Runs one exclusive session: connect, write the encoded frame to the
    /// RX characteristic, disconnect.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the connect or write fails; the caller
    /// decides retry policy. The previously known state stays queryable.
    pub async fn send_command(&self, command: Command) -> Result<(), TransportError> {
        let _session = self.session.lock().await;

        self.transport.connect().await?;
        let frame = codec::encode_command(&self.keycode, &command);
        tracing::debug!(address = %self.address, %command, "sending command");
        let written = self
            .transport
            .write_characteristic(characteristics::RX, &frame, true)
            .await;
        if let Err(err) = self.transport.disconnect().await {
            tracing::warn!(address = %self.address, %err, "failed to disconnect after write");
        }
        written
    }

    /// Reads the current status from the hood and merges it.
    ///
    /// Runs one exclusive session: connect, read the TX characteristic,
    /// disconnect, then decode and merge. A frame that fails to decode is
    /// logged and dropped, and the prior snapshot is returned.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the connect or read fails.
    pub async fn refresh(&self) -> Result<DeviceState, TransportError> {
        let _session = self.session.lock().await;

        self.transport.connect().await?;
        let read = self
            .transport
            .read_characteristic(characteristics::TX)
            .await;
        if let Err(err) = self.transport.disconnect().await {
            tracing::warn!(address = %self.address, %err, "failed to disconnect after read");
        }
        let raw = read?;

        match codec::decode_characteristic(&self.keycode, &raw) {
            Ok(update) => Ok(self.apply_update(&update)),
            Err(err) => {
                tracing::warn!(address = %self.address, %err, "discarding status frame");
                Ok(self.state())
            }
        }
    }
}

impl<T: Transport + Send + Sync + 'static> Device<T> {
    /// Starts listening for status notifications on the TX characteristic,
    /// feeding them into [`handle_notification`](Self::handle_notification).
    ///
    /// The transport holds only a weak reference to the device, so dropping
    /// the device stops the forwarding.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the subscription cannot be registered.
    pub async fn subscribe_notifications(self: &Arc<Self>) -> Result<(), TransportError> {
        let weak = Arc::downgrade(self);
        self.transport
            .subscribe(
                characteristics::TX,
                Arc::new(move |raw: &[u8]| {
                    if let Some(device) = weak.upgrade() {
                        device.handle_notification(raw);
                    }
                }),
            )
            .await
    }
}

impl<T: Transport> std::fmt::Debug for Device<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Device")
            .field("address", &self.address)
            .field("state", &self.state())
            .finish()
    }
}
