// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validated value types used across the library.
//!
//! Each numeric protocol value gets a newtype that can only hold an in-range
//! value, so the codec and command layers never have to re-validate.

mod address;
mod dim_level;
mod fan_speed;
mod keycode;
mod venting_period;

pub use address::DeviceAddress;
pub use dim_level::DimLevel;
pub use fan_speed::FanSpeed;
pub use keycode::Keycode;
pub use venting_period::VentingPeriod;
