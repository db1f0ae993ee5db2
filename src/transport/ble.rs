// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `btleplug`-backed transport implementation.
//!
//! [`BleTransport`] wraps one `btleplug` peripheral and implements the
//! [`Transport`] trait; [`scan_advertisements`] runs an adapter scan loop
//! and forwards manufacturer-data advertisements to a callback.

use btleplug::api::{Central, CentralEvent, Characteristic, Peripheral as _, ScanFilter, WriteType};
use btleplug::platform::{Adapter, Peripheral};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_stream::StreamExt as _;
use uuid::Uuid;

use crate::error::TransportError;
use crate::transport::{Advertisement, NotificationCallback, Transport};
use crate::types::DeviceAddress;

/// Transport for one hood peripheral over `btleplug`.
pub struct BleTransport {
    peripheral: Peripheral,
    notify_task: Mutex<Option<JoinHandle<()>>>,
}

impl BleTransport {
    /// Creates a transport wrapping an already discovered peripheral.
    #[must_use]
    pub fn new(peripheral: Peripheral) -> Self {
        Self {
            peripheral,
            notify_task: Mutex::new(None),
        }
    }

    /// Returns the peripheral's address.
    #[must_use]
    pub fn address(&self) -> DeviceAddress {
        DeviceAddress::new(self.peripheral.address().into_inner())
    }

    /// Find a GATT characteristic by UUID on a peripheral that has already
    /// discovered its services.
    fn find_characteristic(&self, uuid: Uuid) -> Result<Characteristic, TransportError> {
        self.peripheral
            .characteristics()
            .into_iter()
            .find(|c| c.uuid == uuid)
            .ok_or(TransportError::CharacteristicNotFound { uuid })
    }
}

impl Drop for BleTransport {
    fn drop(&mut self) {
        if let Some(handle) = self.notify_task.lock().take() {
            handle.abort();
        }
    }
}

impl Transport for BleTransport {
    async fn connect(&self) -> Result<(), TransportError> {
        if self.peripheral.is_connected().await? {
            return Ok(());
        }
        self.peripheral.connect().await?;
        self.peripheral.discover_services().await?;
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), TransportError> {
        self.peripheral.disconnect().await?;
        Ok(())
    }

    async fn read_characteristic(&self, id: Uuid) -> Result<Vec<u8>, TransportError> {
        let characteristic = self.find_characteristic(id)?;
        Ok(self.peripheral.read(&characteristic).await?)
    }

    async fn write_characteristic(
        &self,
        id: Uuid,
        payload: &[u8],
        with_response: bool,
    ) -> Result<(), TransportError> {
        let characteristic = self.find_characteristic(id)?;
        let write_type = if with_response {
            WriteType::WithResponse
        } else {
            WriteType::WithoutResponse
        };
        self.peripheral
            .write(&characteristic, payload, write_type)
            .await?;
        Ok(())
    }

    async fn subscribe(
        &self,
        id: Uuid,
        callback: NotificationCallback,
    ) -> Result<(), TransportError> {
        let characteristic = self.find_characteristic(id)?;
        self.peripheral.subscribe(&characteristic).await?;

        let mut notifications = self.peripheral.notifications().await?;
        let handle = tokio::spawn(async move {
            while let Some(notification) = notifications.next().await {
                if notification.uuid == id {
                    callback(&notification.value);
                }
            }
        });

        if let Some(previous) = self.notify_task.lock().replace(handle) {
            previous.abort();
        }
        Ok(())
    }
}

impl std::fmt::Debug for BleTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BleTransport")
            .field("address", &self.address())
            .finish()
    }
}

/// Runs a scan loop on `adapter`, forwarding every manufacturer-data
/// advertisement to `on_advertisement`.
///
/// Runs until the adapter's event stream ends or the future is cancelled;
/// the device layer filters by peer address, so no filtering happens here.
///
/// # Errors
///
/// Returns `TransportError` if the scan cannot be started or the event
/// stream cannot be obtained.
pub async fn scan_advertisements<F>(
    adapter: &Adapter,
    on_advertisement: F,
) -> Result<(), TransportError>
where
    F: Fn(Advertisement) + Send + Sync,
{
    let mut events = adapter.events().await?;
    adapter.start_scan(ScanFilter::default()).await?;
    tracing::info!("advertisement scan started");

    while let Some(event) = events.next().await {
        let CentralEvent::ManufacturerDataAdvertisement {
            id,
            manufacturer_data,
        } = event
        else {
            continue;
        };

        let Ok(peripheral) = adapter.peripheral(&id).await else {
            continue;
        };
        let address = DeviceAddress::new(peripheral.address().into_inner());
        let rssi = match peripheral.properties().await {
            Ok(Some(properties)) => properties.rssi.unwrap_or(0),
            _ => 0,
        };

        on_advertisement(Advertisement {
            address,
            manufacturer_data,
            rssi,
        });
    }

    tracing::debug!("advertisement scan ended");
    Ok(())
}
