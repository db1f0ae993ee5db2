// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Canonical device state snapshot.

use super::StateUpdate;
use crate::types::{DimLevel, FanSpeed, VentingPeriod};

/// The canonical snapshot of the hood's state.
///
/// This is an immutable value: it is replaced wholesale on each decoded
/// update, never mutated in place, so readers never observe a torn state.
/// One zeroed snapshot exists per paired device at session start.
///
/// Notification and advertisement decodes cover overlapping but non-identical
/// field subsets, and the two sources are not mutually consistent at any
/// given instant; consumers must tolerate a snapshot assembled from multiple
/// points in time.
///
/// # Examples
///
/// ```
/// use fjaraskupan::state::{DeviceState, StateUpdate};
/// use fjaraskupan::types::FanSpeed;
///
/// let state = DeviceState::default();
/// let update = StateUpdate {
///     fan_speed: Some(FanSpeed::new(3).unwrap()),
///     light_on: Some(true),
///     ..StateUpdate::default()
/// };
///
/// let next = state.apply(&update);
/// assert_eq!(next.fan_speed.value(), 3);
/// assert!(next.light_on);
/// // The original snapshot is untouched.
/// assert_eq!(state.fan_speed.value(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceState {
    /// Cooktop light on/off.
    pub light_on: bool,
    /// Fan speed stage (0-8, 0 = off).
    pub fan_speed: FanSpeed,
    /// After-venting active.
    pub after_venting_on: bool,
    /// After-venting fan speed stage (0-8).
    pub after_venting_fan_speed: FanSpeed,
    /// Periodic venting active.
    pub periodic_venting_on: bool,
    /// Periodic venting interval (0-59 minutes).
    pub periodic_venting: VentingPeriod,
    /// Grease filter needs cleaning.
    pub grease_filter_full: bool,
    /// Carbon filter needs replacement.
    pub carbon_filter_full: bool,
    /// Carbon filter installed.
    pub carbon_filter_available: bool,
    /// Light dim level (0-100).
    pub dim_level: DimLevel,
    /// Signal strength in dBm (advertisement path only).
    pub rssi: i16,
}

impl DeviceState {
    /// Merges an overlay into this snapshot, returning the new snapshot.
    ///
    /// Fields set in the update replace the current values; unset fields
    /// carry over. Last write wins per field set: whichever decode completes
    /// last determines the fields it covers.
    #[must_use]
    pub fn apply(&self, update: &StateUpdate) -> Self {
        let mut next = *self;
        if let Some(light_on) = update.light_on {
            next.light_on = light_on;
        }
        if let Some(fan_speed) = update.fan_speed {
            next.fan_speed = fan_speed;
        }
        if let Some(after_venting_on) = update.after_venting_on {
            next.after_venting_on = after_venting_on;
        }
        if let Some(after_venting_fan_speed) = update.after_venting_fan_speed {
            next.after_venting_fan_speed = after_venting_fan_speed;
        }
        if let Some(periodic_venting_on) = update.periodic_venting_on {
            next.periodic_venting_on = periodic_venting_on;
        }
        if let Some(periodic_venting) = update.periodic_venting {
            next.periodic_venting = periodic_venting;
        }
        if let Some(grease_filter_full) = update.grease_filter_full {
            next.grease_filter_full = grease_filter_full;
        }
        if let Some(carbon_filter_full) = update.carbon_filter_full {
            next.carbon_filter_full = carbon_filter_full;
        }
        if let Some(carbon_filter_available) = update.carbon_filter_available {
            next.carbon_filter_available = carbon_filter_available;
        }
        if let Some(dim_level) = update.dim_level {
            next.dim_level = dim_level;
        }
        if let Some(rssi) = update.rssi {
            next.rssi = rssi;
        }
        next
    }
}
