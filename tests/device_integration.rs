// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the device layer using a recording mock transport.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::sleep;
use uuid::Uuid;

use fjaraskupan::codec::COMPANY_ID;
use fjaraskupan::transport::NotificationCallback;
use fjaraskupan::types::{DeviceAddress, FanSpeed, Keycode};
use fjaraskupan::{Advertisement, Command, Device, Transport, TransportError};

/// A transport event observed by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Connect,
    Read,
    Write(Vec<u8>),
    Disconnect,
}

/// Shared event log, kept outside the transport so tests can inspect it
/// after the device has taken ownership.
type EventLog = Arc<Mutex<Vec<Event>>>;

/// Mock transport that records the full call sequence and yields between
/// calls, giving concurrent sessions every chance to interleave if they
/// were not serialized.
struct RecordingTransport {
    events: EventLog,
    status_frame: Vec<u8>,
}

impl RecordingTransport {
    fn new() -> (Self, EventLog) {
        Self::with_status_frame(b"")
    }

    fn with_status_frame(frame: &[u8]) -> (Self, EventLog) {
        let events = EventLog::default();
        let transport = Self {
            events: events.clone(),
            status_frame: frame.to_vec(),
        };
        (transport, events)
    }

    fn record(&self, event: Event) {
        self.events.lock().push(event);
    }
}

impl Transport for RecordingTransport {
    async fn connect(&self) -> Result<(), TransportError> {
        self.record(Event::Connect);
        sleep(Duration::from_millis(1)).await;
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), TransportError> {
        sleep(Duration::from_millis(1)).await;
        self.record(Event::Disconnect);
        Ok(())
    }

    async fn read_characteristic(&self, _id: Uuid) -> Result<Vec<u8>, TransportError> {
        self.record(Event::Read);
        sleep(Duration::from_millis(1)).await;
        Ok(self.status_frame.clone())
    }

    async fn write_characteristic(
        &self,
        _id: Uuid,
        payload: &[u8],
        _with_response: bool,
    ) -> Result<(), TransportError> {
        self.record(Event::Write(payload.to_vec()));
        sleep(Duration::from_millis(1)).await;
        Ok(())
    }

    async fn subscribe(
        &self,
        _id: Uuid,
        _callback: NotificationCallback,
    ) -> Result<(), TransportError> {
        Ok(())
    }
}

fn hood_address() -> DeviceAddress {
    DeviceAddress::new([0xA4, 0xC1, 0x38, 0x5B, 0x0E, 0xDF])
}

fn make_device(transport: RecordingTransport) -> Device<RecordingTransport> {
    Device::new(transport, hood_address(), Keycode::default())
}

/// Builds an advertisement for the hood carrying the given fan speed and
/// dim level. The periodic venting byte is deliberately out of range so the
/// decoded overlay never covers that field.
fn hood_advertisement(fan: u8, dim: u8, rssi: i16) -> Advertisement {
    let mut record = b"ODFJAR".to_vec();
    record.extend_from_slice(&[fan, fan, 0b101, 0b101, 0, dim, 60]);
    Advertisement {
        address: hood_address(),
        manufacturer_data: HashMap::from([(COMPANY_ID, record)]),
        rssi,
    }
}

// ============================================================================
// Command session serialization
// ============================================================================

#[tokio::test]
async fn concurrent_commands_never_interleave_sessions() {
    let (transport, events) = RecordingTransport::new();
    let device = make_device(transport);

    let first = device.send_command(Command::SetFanSpeed(FanSpeed::new(2).unwrap()));
    let second = device.send_command(Command::SetFanSpeed(FanSpeed::new(7).unwrap()));
    let (first, second) = tokio::join!(first, second);
    first.unwrap();
    second.unwrap();

    let events = events.lock().clone();
    assert_eq!(events.len(), 6, "expected two full sessions: {events:?}");

    // Each session is a fully ordered connect -> write -> disconnect triple
    for session in events.chunks(3) {
        assert_eq!(session[0], Event::Connect);
        assert!(matches!(session[1], Event::Write(_)));
        assert_eq!(session[2], Event::Disconnect);
    }

    let mut writes: Vec<Vec<u8>> = events
        .into_iter()
        .filter_map(|event| match event {
            Event::Write(payload) => Some(payload),
            _ => None,
        })
        .collect();
    writes.sort();
    assert_eq!(
        writes,
        vec![b"1234-Luft-2-".to_vec(), b"1234-Luft-7-".to_vec()]
    );
}

#[tokio::test]
async fn command_and_refresh_share_the_session_lock() {
    let (transport, events) = RecordingTransport::with_status_frame(b"12344L CFK08007");
    let device = make_device(transport);

    let command = device.send_command(Command::StopFan);
    let refresh = device.refresh();
    let (command, refresh) = tokio::join!(command, refresh);
    command.unwrap();
    let state = refresh.unwrap();
    assert_eq!(state.fan_speed.value(), 4);
    assert_eq!(state.dim_level.value(), 80);

    let events = events.lock().clone();
    assert_eq!(events.len(), 6, "expected two full sessions: {events:?}");
    for session in events.chunks(3) {
        assert_eq!(session[0], Event::Connect);
        assert!(matches!(session[1], Event::Write(_) | Event::Read));
        assert_eq!(session[2], Event::Disconnect);
    }
}

// ============================================================================
// Push updates during an active session
// ============================================================================

#[tokio::test]
async fn notifications_are_not_blocked_by_command_session() {
    let (transport, _events) = RecordingTransport::new();
    let device = Arc::new(make_device(transport));

    let sender = device.clone();
    let command = tokio::spawn(async move { sender.send_command(Command::ToggleLight).await });

    // Push a notification while the command session may be in flight
    device.handle_notification(b"12343L CFK02530");
    assert_eq!(device.state().fan_speed.value(), 3);

    command.await.unwrap().unwrap();
}

// ============================================================================
// Multi-source state assembly
// ============================================================================

#[tokio::test]
async fn state_assembled_from_notification_and_advertisement() {
    let (transport, _events) = RecordingTransport::new();
    let device = make_device(transport);

    device.handle_notification(b"12345L CFK02530");
    device.handle_advertisement(&hood_advertisement(2, 90, -55));

    let state = device.state();
    // Advertisement arrived last and covers these
    assert_eq!(state.fan_speed.value(), 2);
    assert_eq!(state.after_venting_fan_speed.value(), 2);
    assert_eq!(state.dim_level.value(), 90);
    assert_eq!(state.rssi, -55);
    assert!(state.periodic_venting_on);
    // The advertisement's period byte failed its range check, so the
    // notification's value survives
    assert_eq!(state.periodic_venting.value(), 3);
}

#[tokio::test]
async fn subscribers_observe_each_merge() {
    let (transport, _events) = RecordingTransport::new();
    let device = make_device(transport);
    let snapshots = Arc::new(Mutex::new(Vec::new()));
    let snapshots_clone = snapshots.clone();

    device.on_state_changed(move |state| {
        snapshots_clone.lock().push(*state);
    });

    device.handle_notification(b"12341L CFK01010");
    device.handle_advertisement(&hood_advertisement(6, 70, -48));

    let snapshots = snapshots.lock();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].fan_speed.value(), 1);
    assert_eq!(snapshots[1].fan_speed.value(), 6);
}
