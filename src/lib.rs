// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fjäråskupan - A Rust library to control Fjäråskupan BLE cooker hoods.
//!
//! The hood speaks a legacy fixed-width ASCII protocol over two independent
//! BLE channels: a GATT characteristic (connected read/notify/write) and
//! manufacturer-data broadcast advertisements. This library decodes both
//! wire forms into one coherent device state and encodes outgoing commands.
//!
//! # Supported Features
//!
//! - **Fan control**: speed stages 0-8, stop, after-cooking timer modes
//! - **Light control**: toggle, dim level 0-100
//! - **Periodic venting**: interval configuration 0-59 minutes
//! - **Filters**: grease/carbon saturation state, reset commands
//! - **Passive status**: advertisement decoding without a connection
//!
//! # Quick Start
//!
#![cfg_attr(feature = "ble", doc = "```no_run")]
#![cfg_attr(not(feature = "ble"), doc = "```ignore")]
//! use std::sync::Arc;
//!
//! use fjaraskupan::{Command, Device, Keycode};
//! use fjaraskupan::transport::BleTransport;
//! use fjaraskupan::types::FanSpeed;
//!
//! # async fn example(peripheral: btleplug::platform::Peripheral) -> fjaraskupan::Result<()> {
//! let transport = BleTransport::new(peripheral);
//! let address = transport.address();
//! let device = Arc::new(Device::new(transport, address, Keycode::default()));
//!
//! // Push decoded status frames into the device
//! device.subscribe_notifications().await?;
//!
//! device
//!     .send_command(Command::SetFanSpeed(FanSpeed::new(3)?))
//!     .await?;
//!
//! println!("light on: {}", device.state().light_on);
//! # Ok(())
//! # }
//! ```
//!
//! # Passive updates
//!
//! The hood also broadcasts its status. Feed scanner output into
//! [`Device::handle_advertisement`]; advertisements from other peers are
//! filtered out by address:
//!
//! ```ignore
//! fjaraskupan::transport::scan_advertisements(&adapter, |advertisement| {
//!     device.handle_advertisement(&advertisement);
//! })
//! .await?;
//! ```

pub mod codec;
pub mod command;
mod device;
pub mod error;
pub mod state;
pub mod subscription;
pub mod transport;
pub mod types;

pub use command::Command;
pub use device::Device;
pub use error::{DecodeError, Error, Result, TransportError, ValueError};
pub use state::{DeviceState, StateUpdate};
pub use subscription::{CallbackRegistry, SubscriptionId};
pub use transport::{Advertisement, Transport};
pub use types::{DeviceAddress, DimLevel, FanSpeed, Keycode, VentingPeriod};
