#[path = "../common/mod.rs"]
mod common;

use ufr_rgb::terminal::{Key, ScriptedTerminal};
use ufr_rgb::transport::MockTransport;
use ufr_rgb::types::{RgbColor, Status};

use common::helpers::run_with;

#[test]
fn enable_then_disable_color() {
    let mut t = ScriptedTerminal::new()
        .key(Key::Char('1'))
        .line("255")
        .line("128")
        .line("0")
        .line("75")
        .key(Key::Char('2'))
        .key(Key::Escape);
    let run = run_with(MockTransport::new(), &mut t);

    run.result.unwrap();
    assert_eq!(
        run.mock.borrow().rgb_calls,
        vec![
            (RgbColor::new(255, 128, 0, 75), true),
            (RgbColor::new(0, 0, 0, 0), false),
        ]
    );
    assert!(run.output.contains("Set RGB color successful"));
    assert!(run.output.contains("Disable RGB color successful"));
}

#[test]
fn disable_is_always_all_zero() {
    let mut t = ScriptedTerminal::new()
        .key(Key::Char('2'))
        .key(Key::Char('2'))
        .key(Key::Escape);
    let run = run_with(MockTransport::new(), &mut t);

    run.result.unwrap();
    assert_eq!(
        run.mock.borrow().rgb_calls,
        vec![(RgbColor::OFF, false), (RgbColor::OFF, false)]
    );
}

#[test]
fn out_of_range_input_is_truncated() {
    let mut t = ScriptedTerminal::new()
        .key(Key::Char('1'))
        .line("300")
        .line("0")
        .line("0")
        .line("100")
        .key(Key::Escape);
    let run = run_with(MockTransport::new(), &mut t);

    run.result.unwrap();
    assert_eq!(
        run.mock.borrow().rgb_calls,
        vec![(RgbColor::new(44, 0, 0, 100), true)]
    );
}

#[test]
fn light_failure_keeps_the_loop_running() {
    let mut m = MockTransport::new();
    m.rgb_status = Status::new(0x0F);
    let mut t = ScriptedTerminal::new()
        .key(Key::Char('2'))
        .idle(2)
        .key(Key::Escape);
    let run = run_with(m, &mut t);

    run.result.unwrap();
    assert!(run.output.contains("Disable RGB color failed"));
    assert!(run.output.contains("Error code = 0F"));
    // polling resumed after the failure
    assert_eq!(run.mock.borrow().poll_count, 2);
}

#[test]
fn unknown_key_reprints_usage() {
    let mut t = ScriptedTerminal::new()
        .key(Key::Char('x'))
        .key(Key::Other)
        .key(Key::Escape);
    let run = run_with(MockTransport::new(), &mut t);

    run.result.unwrap();
    // once at startup, once per unknown key
    assert_eq!(run.output.matches("(1) - Enable RGB color").count(), 3);
    assert!(run.mock.borrow().rgb_calls.is_empty());
}
