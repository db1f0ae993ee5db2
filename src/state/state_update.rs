// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Partial state overlay.
//!
//! A [`StateUpdate`] is the subset of device state a single decode could
//! determine. The two wire forms cover overlapping but non-identical field
//! sets, and a field whose decoded value failed its range check is simply
//! left unset, so merging an update never pulls a bad value into the state.

use crate::types::{DimLevel, FanSpeed, VentingPeriod};

/// The decodable subset of [`DeviceState`](super::DeviceState) fields.
///
/// Every field is optional: `Some` overwrites the corresponding state field
/// on merge, `None` retains the prior value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateUpdate {
    /// Cooktop light on/off.
    pub light_on: Option<bool>,
    /// Fan speed stage.
    pub fan_speed: Option<FanSpeed>,
    /// After-venting active.
    pub after_venting_on: Option<bool>,
    /// After-venting fan speed stage.
    pub after_venting_fan_speed: Option<FanSpeed>,
    /// Periodic venting active.
    pub periodic_venting_on: Option<bool>,
    /// Periodic venting interval.
    pub periodic_venting: Option<VentingPeriod>,
    /// Grease filter needs cleaning.
    pub grease_filter_full: Option<bool>,
    /// Carbon filter needs replacement.
    pub carbon_filter_full: Option<bool>,
    /// Carbon filter installed.
    pub carbon_filter_available: Option<bool>,
    /// Light dim level.
    pub dim_level: Option<DimLevel>,
    /// Signal strength from the advertisement envelope.
    pub rssi: Option<i16>,
}

impl StateUpdate {
    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
