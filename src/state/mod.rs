// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! The [`DeviceState`] struct is the canonical immutable snapshot of the
//! hood's state, while [`StateUpdate`] is the partial overlay a single
//! decode produces. Merging is copy-on-write: applying an update yields a
//! new snapshot, never an in-place patch.
//!
//! # Examples
//!
//! ```
//! use fjaraskupan::state::{DeviceState, StateUpdate};
//!
//! let state = DeviceState::default();
//! let update = StateUpdate { light_on: Some(true), ..StateUpdate::default() };
//!
//! let next = state.apply(&update);
//! assert!(next.light_on);
//! ```

mod device_state;
mod state_update;

pub use device_state::DeviceState;
pub use state_update::StateUpdate;
