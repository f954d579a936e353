#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use ufr_rgb::device::{Device, DeviceBuilder, MinimumVersions};
use ufr_rgb::error::Component;
use ufr_rgb::test_support::{quick_builder, shared_mock};
use ufr_rgb::transport::MockTransport;
use ufr_rgb::types::{RgbColor, Status, Version};
use ufr_rgb::Error;

use common::fixtures::sample_card;
use common::helpers::initialized_mock_device;

#[test]
fn initialize_resets_then_polls() {
    let mut m = MockTransport::new();
    m.push_card(sample_card());
    let (mock, mut dev) = initialized_mock_device(m).unwrap();

    assert_eq!(mock.borrow().reset_count, 1);
    assert_eq!(dev.poll().unwrap(), Some(sample_card()));
    assert_eq!(dev.poll().unwrap(), None);
}

#[test]
fn builder_without_transport_is_device_not_found() {
    let err = DeviceBuilder::new().build_uninitialized().err().unwrap();
    assert!(matches!(err, Error::DeviceNotFound));
}

#[test]
fn builder_settings_reach_the_device() {
    let (_mock, boxed) = shared_mock(MockTransport::new());
    let minimum = MinimumVersions {
        library: Version::new(4, 0, 0),
        firmware: Version::new(3, 2, 1),
    };
    let dev = DeviceBuilder::new()
        .with_transport(boxed)
        .settle_delay(Duration::from_millis(1))
        .minimum_versions(minimum)
        .build_uninitialized()
        .unwrap();

    assert_eq!(dev.settle_delay(), Duration::from_millis(1));
    assert_eq!(dev.minimum_versions(), &minimum);
}

#[test]
fn old_firmware_fails_initialize_and_closes() {
    let mut m = MockTransport::new();
    m.firmware_version = Version::new(4, 9, 9);
    let (mock, boxed) = shared_mock(m);

    let err = quick_builder(boxed)
        .build_uninitialized()
        .unwrap()
        .initialize()
        .err()
        .unwrap();

    match err {
        Error::Dependency {
            component,
            required,
            found,
        } => {
            assert_eq!(component, Component::Firmware);
            assert_eq!(required, Version::new(5, 0, 1));
            assert_eq!(found, Version::new(4, 9, 9));
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(mock.borrow().is_closed());
}

#[test]
fn reset_status_is_tagged_as_reset() {
    let mut m = MockTransport::new();
    m.reset_status = Status::COMMUNICATION_BREAK;
    let (mock, boxed) = shared_mock(m);

    let err = quick_builder(boxed)
        .build_uninitialized()
        .unwrap()
        .initialize()
        .err()
        .unwrap();

    assert!(matches!(err, Error::Reset(Status::COMMUNICATION_BREAK)));
    assert_eq!(mock.borrow().close_count, 1);
}

#[test]
fn uninitialized_device_closes_on_drop() {
    let (mock, boxed) = shared_mock(MockTransport::new());
    {
        let _dev = Device::new_with_transport(boxed);
    }
    assert_eq!(mock.borrow().close_count, 1);
    assert_eq!(mock.borrow().reset_count, 0);
}

#[test]
fn explicit_close_closes_exactly_once() {
    let (mock, dev) = initialized_mock_device(MockTransport::new()).unwrap();
    dev.close().unwrap();
    assert_eq!(mock.borrow().close_count, 1);
}

#[test]
fn light_control_goes_through_the_transport() {
    let (mock, mut dev) = initialized_mock_device(MockTransport::new()).unwrap();
    dev.set_rgb_light(RgbColor::new(1, 2, 3, 4)).unwrap();
    dev.disable_rgb_light().unwrap();

    assert_eq!(
        mock.borrow().rgb_calls,
        vec![(RgbColor::new(1, 2, 3, 4), true), (RgbColor::OFF, false)]
    );
}
