// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hood command definitions.
//!
//! Commands are fixed-width 8-character ASCII bodies, parameterized by at
//! most one integer argument and sent prefixed by the paired
//! [`Keycode`](crate::types::Keycode). The templates come straight from the
//! hood's legacy protocol, hence the German mnemonics (`Luft` = air,
//! `Nachlauf` = after-run, `Kochfeld` = cooktop).
//!
//! # Examples
//!
//! ```
//! use fjaraskupan::command::Command;
//! use fjaraskupan::types::FanSpeed;
//!
//! let cmd = Command::SetFanSpeed(FanSpeed::new(5).unwrap());
//! assert_eq!(cmd.body(), "-Luft-5-");
//!
//! assert_eq!(Command::StopFan.body(), "Luft-Aus");
//! assert_eq!(Command::ToggleLight.body(), "Kochfeld");
//! ```

use std::fmt;

use crate::types::{DimLevel, FanSpeed, VentingPeriod};

/// A command that can be sent to the hood.
///
/// Range validation happens when the argument types are constructed; the
/// encoder itself only applies format width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Set a numbered fan speed (0-8).
    SetFanSpeed(FanSpeed),
    /// Stop the fan.
    StopFan,
    /// Toggle the cooktop light.
    ToggleLight,
    /// Dim the light to a level (0-100).
    SetDimLevel(DimLevel),
    /// Set the periodic venting interval in minutes (0-59).
    SetPeriodicVenting(VentingPeriod),
    /// Reset the grease filter saturation counter.
    ResetGreaseFilter,
    /// Reset the carbon filter saturation counter.
    ResetCarbonFilter,
    /// Start the after-cooking timer in manual mode.
    AfterCookingTimerManual,
    /// Start the after-cooking timer in automatic mode.
    AfterCookingTimerAuto,
    /// Set the after-cooking venting strength (0-8).
    AfterCookingStrength(FanSpeed),
    /// Turn the after-cooking timer off.
    AfterCookingTimerOff,
    /// Mark the carbon filter as installed.
    ActivateCarbonFilter,
}

impl Command {
    /// Returns the 8-character ASCII command body.
    #[must_use]
    pub fn body(&self) -> String {
        match self {
            Self::SetFanSpeed(speed) => format!("-Luft-{}-", speed.value()),
            Self::StopFan => "Luft-Aus".to_string(),
            Self::ToggleLight => "Kochfeld".to_string(),
            Self::SetDimLevel(level) => format!("-Dim{:03}-", level.value()),
            Self::SetPeriodicVenting(period) => format!("Period{:02}", period.value()),
            Self::ResetGreaseFilter => "ResFett-".to_string(),
            Self::ResetCarbonFilter => "ResKohle".to_string(),
            Self::AfterCookingTimerManual => "Nachlauf".to_string(),
            Self::AfterCookingTimerAuto => "NachlAut".to_string(),
            Self::AfterCookingStrength(speed) => format!("Nachla-{}", speed.value()),
            Self::AfterCookingTimerOff => "NachlAus".to_string(),
            Self::ActivateCarbonFilter => "coal-ava".to_string(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.body())
    }
}
