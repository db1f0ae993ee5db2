// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Frame codec for the hood's fixed-width ASCII protocol.
//!
//! The hood reports its status over two independent wire forms carrying
//! overlapping but non-identical field sets:
//!
//! - **Characteristic form** (connected read/notify): a 15-byte ASCII frame,
//!   keycode-prefixed, with flag characters and ASCII-digit numerics.
//! - **Advertisement form** (connectionless broadcast): a manufacturer-data
//!   record tagged `HOODFJAR`, with raw bytes and bit-packed flags. The
//!   device abuses the manufacturer-id field for the first two tag bytes
//!   rather than emitting a spec-compliant company identifier.
//!
//! All functions here are pure: no I/O, no shared state. Numeric fields that
//! fail their range check are left out of the returned overlay so the prior
//! value is retained on merge; only structural problems (wrong length, bad
//! keycode, non-digit where a digit is required) reject the whole frame.
//!
//! # Characteristic frame layout
//!
//! | Bytes | Content                                           |
//! |-------|---------------------------------------------------|
//! | 0-3   | keycode                                           |
//! | 4     | fan speed digit                                   |
//! | 5     | `'L'` = light on                                  |
//! | 6     | `'N'` = after-venting on                          |
//! | 7     | `'C'` = carbon filter available                   |
//! | 8     | `'F'` = grease filter NOT full (inverted)         |
//! | 9     | `'K'` = carbon filter full                        |
//! | 10-12 | zero-padded dim level                             |
//! | 13    | periodic venting digit                            |
//! | 14    | padding, ignored                                  |
//!
//! # Advertisement payload layout (tag bytes reattached)
//!
//! | Bytes | Content                                           |
//! |-------|---------------------------------------------------|
//! | 0-7   | tag `HOODFJAR` (bytes 0-1 from manufacturer id)   |
//! | 8     | fan speed                                         |
//! | 9     | after-venting fan speed                           |
//! | 10    | bit 0 light, bit 1 after-venting, bit 2 periodic  |
//! | 11    | bit 0 grease full, bit 1 carbon full, bit 2 avail |
//! | 12    | unused                                            |
//! | 13    | dim level                                         |
//! | 14    | periodic venting minutes                          |

use std::collections::HashMap;

use crate::command::Command;
use crate::error::DecodeError;
use crate::state::StateUpdate;
use crate::types::{DimLevel, FanSpeed, Keycode, VentingPeriod};

/// The 8-byte announcement tag prefixing the advertisement payload.
pub const ANNOUNCE_TAG: &[u8; 8] = b"HOODFJAR";

/// Manufacturer identifier under which the hood broadcasts: the little-endian
/// u16 formed by the first two tag bytes (`"HO"`).
pub const COMPANY_ID: u16 = u16::from_le_bytes([ANNOUNCE_TAG[0], ANNOUNCE_TAG[1]]);

/// Total length of the characteristic status frame.
const FRAME_LEN: usize = 15;

/// Minimum reconstructed advertisement payload length (tag + fields).
const ADVERTISEMENT_LEN: usize = 15;

// Characteristic frame field offsets.
const FANSTAGE: usize = 4;
const LIGHT: usize = 5;
const AFTER_COOKING_TIMER: usize = 6;
const CARBON_FILTER_AVAILABLE: usize = 7;
const GREASE_FILTER_SATURATION: usize = 8;
const CARBON_FILTER_SATURATION: usize = 9;
const DIMMER: std::ops::Range<usize> = 10..13;
const PERIOD: usize = 13;

/// Decodes an ASCII digit, or fails the frame.
fn digit(frame: &[u8], index: usize) -> Result<u8, DecodeError> {
    let byte = frame[index];
    if byte.is_ascii_digit() {
        Ok(byte - b'0')
    } else {
        Err(DecodeError::MalformedFrame(format!(
            "expected digit at byte {index}, got 0x{byte:02x}"
        )))
    }
}

/// Decodes a 15-byte characteristic status frame into a state overlay.
///
/// Used for both GATT notifications and explicit characteristic reads.
///
/// # Errors
///
/// Returns [`DecodeError::BadKeycode`] if the frame's identity bytes do not
/// match the paired keycode, and [`DecodeError::MalformedFrame`] on wrong
/// length or a non-digit where a digit is required. Out-of-range numeric
/// values do not fail the frame; the affected field is left unset.
///
/// # Examples
///
/// ```
/// use fjaraskupan::codec::decode_characteristic;
/// use fjaraskupan::types::Keycode;
///
/// let update = decode_characteristic(&Keycode::default(), b"12345L CFK02530").unwrap();
/// assert_eq!(update.fan_speed.unwrap().value(), 5);
/// assert_eq!(update.light_on, Some(true));
/// assert_eq!(update.dim_level.unwrap().value(), 25);
/// ```
pub fn decode_characteristic(
    keycode: &Keycode,
    raw: &[u8],
) -> Result<StateUpdate, DecodeError> {
    if raw.len() != FRAME_LEN {
        return Err(DecodeError::MalformedFrame(format!(
            "expected {FRAME_LEN} bytes, got {}",
            raw.len()
        )));
    }
    if !raw.is_ascii() {
        return Err(DecodeError::MalformedFrame("non-ASCII frame".to_string()));
    }
    if &raw[0..4] != keycode.as_bytes() {
        return Err(DecodeError::BadKeycode);
    }

    let fan_speed = FanSpeed::new(digit(raw, FANSTAGE)?).ok();

    let dim_raw = u16::from(digit(raw, DIMMER.start)?) * 100
        + u16::from(digit(raw, DIMMER.start + 1)?) * 10
        + u16::from(digit(raw, DIMMER.start + 2)?);
    let dim_level = u8::try_from(dim_raw)
        .ok()
        .and_then(|value| DimLevel::new(value).ok());

    let periodic_venting = VentingPeriod::new(digit(raw, PERIOD)?).ok();

    Ok(StateUpdate {
        light_on: Some(raw[LIGHT] == b'L'),
        fan_speed,
        after_venting_on: Some(raw[AFTER_COOKING_TIMER] == b'N'),
        carbon_filter_available: Some(raw[CARBON_FILTER_AVAILABLE] == b'C'),
        grease_filter_full: Some(raw[GREASE_FILTER_SATURATION] != b'F'),
        carbon_filter_full: Some(raw[CARBON_FILTER_SATURATION] == b'K'),
        dim_level,
        periodic_venting,
        ..StateUpdate::default()
    })
}

/// Decodes the manufacturer-data records of one advertisement.
///
/// Returns `Ok(None)` when no record is present under [`COMPANY_ID`] — the
/// advertisement is simply not from this device or lacks the field, which is
/// not an error. The signal strength belongs to the advertisement envelope,
/// not the payload, so the returned overlay never sets `rssi`.
///
/// # Errors
///
/// Returns [`DecodeError::BadTag`] if the reconstructed 8-byte tag does not
/// equal `HOODFJAR`, and [`DecodeError::MalformedFrame`] if the record is too
/// short. Both are ignorable: the caller drops the record and keeps its
/// state.
pub fn decode_advertisement(
    manufacturer_data: &HashMap<u16, Vec<u8>>,
) -> Result<Option<StateUpdate>, DecodeError> {
    let Some(record) = manufacturer_data.get(&COMPANY_ID) else {
        return Ok(None);
    };

    // The id bytes are really the first two tag bytes; put them back.
    let mut payload = Vec::with_capacity(2 + record.len());
    payload.extend_from_slice(&COMPANY_ID.to_le_bytes());
    payload.extend_from_slice(record);

    if payload.len() < ADVERTISEMENT_LEN {
        return Err(DecodeError::MalformedFrame(format!(
            "advertisement payload too short: {} bytes",
            payload.len()
        )));
    }
    if &payload[0..8] != ANNOUNCE_TAG {
        return Err(DecodeError::BadTag);
    }

    let flags_venting = payload[10];
    let flags_filter = payload[11];

    Ok(Some(StateUpdate {
        fan_speed: FanSpeed::new(payload[8]).ok(),
        after_venting_fan_speed: FanSpeed::new(payload[9]).ok(),
        light_on: Some(flags_venting & 0x01 != 0),
        after_venting_on: Some(flags_venting & 0x02 != 0),
        periodic_venting_on: Some(flags_venting & 0x04 != 0),
        grease_filter_full: Some(flags_filter & 0x01 != 0),
        carbon_filter_full: Some(flags_filter & 0x02 != 0),
        carbon_filter_available: Some(flags_filter & 0x04 != 0),
        dim_level: DimLevel::new(payload[13]).ok(),
        periodic_venting: VentingPeriod::new(payload[14]).ok(),
        ..StateUpdate::default()
    }))
}

/// Encodes an outgoing command into its wire form: keycode plus the
/// fixed-width ASCII command body.
///
/// # Examples
///
/// ```
/// use fjaraskupan::codec::encode_command;
/// use fjaraskupan::command::Command;
/// use fjaraskupan::types::{FanSpeed, Keycode};
///
/// let frame = encode_command(
///     &Keycode::default(),
///     &Command::SetFanSpeed(FanSpeed::new(5).unwrap()),
/// );
/// assert_eq!(frame, b"1234-Luft-5-");
/// ```
#[must_use]
pub fn encode_command(keycode: &Keycode, command: &Command) -> Vec<u8> {
    let body = command.body();
    let mut frame = Vec::with_capacity(4 + body.len());
    frame.extend_from_slice(keycode.as_bytes());
    frame.extend_from_slice(body.as_bytes());
    frame
}
