#[path = "../common/mod.rs"]
mod common;

use ufr_rgb::Error;
use ufr_rgb::config::Config;
use ufr_rgb::session::{report_fatal, run_console};
use ufr_rgb::terminal::{Key, RawMode, ScriptedTerminal};
use ufr_rgb::transport::MockTransport;
use ufr_rgb::types::{Status, Version};

use common::helpers::{run_with, run_with_config};

#[test]
fn escape_exits_cleanly_and_closes_reader() {
    let mut t = ScriptedTerminal::new().idle(1).key(Key::Escape);
    let run = run_with(MockTransport::new(), &mut t);

    run.result.unwrap();
    let mock = run.mock.borrow();
    assert_eq!(mock.reset_count, 1);
    assert_eq!(mock.close_count, 1);
    assert_eq!(mock.poll_count, 1);

    let usage = run.output.find("RGB LIGHT UFR CLASSIC").unwrap();
    let opening = run.output.find("Please wait while opening").unwrap();
    let opened = run.output.find("successfully opened").unwrap();
    assert!(usage < opening && opening < opened);
}

#[test]
fn open_failure_is_fatal_before_any_banner_after_opening() {
    let mut t = ScriptedTerminal::new().key(Key::Escape);
    let mut out = Vec::new();
    let result = run_console(
        || Err(Error::Status(Status::READER_OPENING_ERROR)),
        &common::fixtures::quick_config(),
        &mut t,
        &mut out,
    );

    assert!(matches!(result, Err(Error::Open(Status::READER_OPENING_ERROR))));
    let out = String::from_utf8_lossy(&out);
    assert!(out.contains("Please wait while opening"));
    assert!(!out.contains("successfully opened"));
    // The script was never consulted
    assert_eq!(t.events.len(), 1);
}

#[test]
fn reset_failure_closes_reader() {
    let mut m = MockTransport::new();
    m.reset_status = Status::COMMUNICATION_ERROR;
    let mut t = ScriptedTerminal::new().key(Key::Escape);
    let run = run_with(m, &mut t);

    assert!(matches!(run.result, Err(Error::Reset(Status::COMMUNICATION_ERROR))));
    assert_eq!(run.mock.borrow().close_count, 1);
    assert_eq!(run.mock.borrow().poll_count, 0);
}

#[test]
fn dependency_failure_closes_reader() {
    let config = Config {
        minimum_versions: ufr_rgb::device::MinimumVersions {
            library: Version::new(9, 0, 0),
            firmware: Version::new(1, 0, 0),
        },
        ..common::fixtures::quick_config()
    };
    let mut t = ScriptedTerminal::new().key(Key::Escape);
    let run = run_with_config(MockTransport::new(), &config, &mut t);

    assert!(matches!(run.result, Err(Error::Dependency { .. })));
    assert_eq!(run.mock.borrow().close_count, 1);
    assert!(!run.output.contains("successfully opened"));
}

#[test]
fn fatal_path_restores_terminal_and_waits_for_ack() {
    let mut m = MockTransport::new();
    m.reset_status = Status::COMMUNICATION_ERROR;
    let mut t = ScriptedTerminal::new().key(Key::Char('q'));

    let mut out = Vec::new();
    {
        let mut raw = RawMode::enter(&mut t).unwrap();
        let (mock, boxed) = ufr_rgb::test_support::shared_mock(m);
        let err = run_console(
            move || Ok(boxed),
            &common::fixtures::quick_config(),
            &mut *raw,
            &mut out,
        )
        .unwrap_err();
        // reader already closed when the error surfaces
        assert_eq!(mock.borrow().close_count, 1);

        report_fatal(&mut out, &mut *raw, &err);
        assert!(raw.events.is_empty(), "ack key consumed");
        assert!(raw.is_raw());
    }
    assert!(!t.is_raw());
    assert_eq!(t.restore_count, 1);

    let out = String::from_utf8_lossy(&out);
    assert!(out.contains("0x00000001"));
    assert!(out.contains("Press any key to exit."));
}

#[test]
fn poll_error_ends_run_with_card_read_error() {
    let mut m = MockTransport::new();
    m.push_card(common::fixtures::sample_card());
    m.push_poll_status(Status::READING_ERROR);
    let mut t = ScriptedTerminal::new().idle(5).key(Key::Escape);
    let run = run_with(m, &mut t);

    assert!(matches!(run.result, Err(Error::CardRead(Status::READING_ERROR))));
    assert_eq!(run.mock.borrow().poll_count, 2);
    assert_eq!(run.mock.borrow().close_count, 1);
    assert!(run.output.contains("uid[4] = 04:A1:B2:C3"));
}
