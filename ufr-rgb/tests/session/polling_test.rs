#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use ufr_rgb::card::DlCardType;
use ufr_rgb::session::Session;
use ufr_rgb::terminal::{Key, ScriptedTerminal};
use ufr_rgb::transport::MockTransport;
use ufr_rgb::types::Status;

use common::fixtures::{neighbour_card, ntag_card, sample_card};
use common::helpers::{initialized_mock_device, run_with};

fn announcements(output: &str) -> usize {
    output.matches("Card type:").count()
}

#[test]
fn same_card_in_field_is_announced_once() {
    let mut m = MockTransport::new();
    for _ in 0..4 {
        m.push_card(sample_card());
    }
    let mut t = ScriptedTerminal::new().idle(4).key(Key::Escape);
    let run = run_with(m, &mut t);

    run.result.unwrap();
    assert_eq!(announcements(&run.output), 1);
    assert!(run.output.contains(
        " Card type: DL_MIFARE_CLASSIC_1K, sak = 0x08, uid[4] = 04:A1:B2:C3"
    ));
}

#[test]
fn card_is_announced_again_after_leaving_the_field() {
    let mut m = MockTransport::new();
    m.push_card(sample_card());
    m.push_no_card();
    m.push_card(sample_card());
    let mut t = ScriptedTerminal::new().idle(3).key(Key::Escape);
    let run = run_with(m, &mut t);

    run.result.unwrap();
    assert_eq!(announcements(&run.output), 2);
}

#[test]
fn swapped_card_is_announced_without_gap() {
    let mut m = MockTransport::new();
    m.push_card(sample_card());
    m.push_card(neighbour_card());
    m.push_card(neighbour_card());
    m.push_card(ntag_card());
    let mut t = ScriptedTerminal::new().idle(4).key(Key::Escape);
    let run = run_with(m, &mut t);

    run.result.unwrap();
    assert_eq!(announcements(&run.output), 3);
    assert!(run.output.contains("uid[4] = 04:A1:B2:C4"));
    assert!(run.output.contains("sak = 0x00, uid[7] = 04:11:22:33:44:55:66"));
}

#[test]
fn banner_uses_reader_classification() {
    let mut m = MockTransport::new();
    m.card_type = Ok(DlCardType::NTAG_213);
    m.push_card(ntag_card());
    let (_mock, dev) = initialized_mock_device(m).unwrap();
    let mut s = Session::new(dev, Duration::ZERO, Vec::new());

    s.poll_once().unwrap();
    let out = String::from_utf8_lossy(s.output());
    assert!(out.contains("Card type: DL_NTAG_213"));
    assert!(out.starts_with(" \x07"));
}

#[test]
fn classification_failure_prints_nothing_and_does_not_reannounce() {
    let mut m = MockTransport::new();
    m.card_type = Err(Status::READING_ERROR);
    m.push_card(sample_card());
    m.push_card(sample_card());
    let mut t = ScriptedTerminal::new().idle(2).key(Key::Escape);
    let run = run_with(m, &mut t);

    run.result.unwrap();
    assert_eq!(announcements(&run.output), 0);
    assert_eq!(run.mock.borrow().card_type_count, 1);
}

#[test]
fn keypress_skips_polling_for_that_iteration() {
    let mut m = MockTransport::new();
    m.push_card(sample_card());
    let mut t = ScriptedTerminal::new()
        .key(Key::Char('x'))
        .key(Key::Escape);
    let run = run_with(m, &mut t);

    run.result.unwrap();
    assert_eq!(run.mock.borrow().poll_count, 0);
    assert_eq!(announcements(&run.output), 0);
}
