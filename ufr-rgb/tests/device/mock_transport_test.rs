#[path = "../common/mod.rs"]
mod common;

use ufr_rgb::card::DlCardType;
use ufr_rgb::transport::{MockTransport, Transport};
use ufr_rgb::types::{RgbColor, Status};
use ufr_rgb::Error;

use common::fixtures::{ntag_card, sample_card};

#[test]
fn poll_queue_plays_back_then_reports_no_card() {
    let mut m = MockTransport::new();
    m.push_card(sample_card());
    m.push_no_card();
    m.push_card(ntag_card());

    assert_eq!(m.card_id().unwrap(), Some(sample_card()));
    assert_eq!(m.card_id().unwrap(), None);
    assert_eq!(m.card_id().unwrap(), Some(ntag_card()));
    assert_eq!(m.card_id().unwrap(), None);
    assert_eq!(m.poll_count, 4);
}

#[test]
fn poll_status_surfaces_as_status_error() {
    let mut m = MockTransport::new();
    m.push_poll_status(Status::COMMUNICATION_BREAK);
    let err = m.card_id().unwrap_err();
    assert_eq!(err.status(), Some(Status::COMMUNICATION_BREAK));
}

#[test]
fn card_type_answer_is_configurable() {
    let mut m = MockTransport::new();
    m.card_type = Ok(DlCardType::NTAG_213);
    assert_eq!(m.card_type().unwrap(), DlCardType::NTAG_213);

    m.card_type = Err(Status::READING_ERROR);
    assert!(matches!(
        m.card_type(),
        Err(Error::Status(Status::READING_ERROR))
    ));
    assert_eq!(m.card_type_count, 2);
}

#[test]
fn rgb_calls_are_recorded_even_on_failure() {
    let mut m = MockTransport::new();
    m.rgb_status = Status::PARAMETERS_ERROR;
    assert!(m.rgb_light_control(RgbColor::new(9, 9, 9, 9), true).is_err());
    assert_eq!(m.rgb_calls, vec![(RgbColor::new(9, 9, 9, 9), true)]);
}
