// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State-change subscriptions.
//!
//! A [`Device`](crate::Device) pushes every merged snapshot to the callbacks
//! registered here, so adapters can re-render without polling.
//!
//! # Examples
//!
//! ```ignore
//! let id = device.on_state_changed(|state| {
//!     println!("fan speed is now {}", state.fan_speed);
//! });
//!
//! // Later, unsubscribe
//! device.unsubscribe(id);
//! ```

mod callback;

pub use callback::{CallbackRegistry, SubscriptionId};
