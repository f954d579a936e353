//! Run the console against a simulated reader, no hardware needed.
//!
//! A card shows up, stays for a while, leaves and a different card takes
//! its place. Keys work as in the real console: `1`, `2`, Escape.
//!
//! Usage:
//!   cargo run -p ufr-rgb --example simulated_reader

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use ufr_rgb::card::{CardSnapshot, DlCardType};
use ufr_rgb::config::Config;
use ufr_rgb::session::{report_fatal, run_console};
use ufr_rgb::terminal::{CrlfWriter, CrosstermTerminal, RawMode};
use ufr_rgb::transport::{MockTransport, Transport};
use ufr_rgb::Result;

fn simulated_reader() -> Result<MockTransport> {
    let first = CardSnapshot::from_raw(0x08, &[0x04, 0xA1, 0xB2, 0xC3])?;
    let second = CardSnapshot::from_raw(0x00, &[0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66])?;

    let mut mock = MockTransport::new();
    mock.card_type = Ok(DlCardType::MIFARE_CLASSIC_1K);
    for _ in 0..5 {
        mock.push_no_card();
    }
    for _ in 0..10 {
        mock.push_card(first);
    }
    for _ in 0..5 {
        mock.push_no_card();
    }
    for _ in 0..10 {
        mock.push_card(second);
    }
    Ok(mock)
}

fn main() -> ExitCode {
    env_logger::init();

    let config = Config {
        settle_delay: Duration::from_millis(100),
        ..Config::default()
    };

    let mut terminal = match RawMode::enter(CrosstermTerminal::new()) {
        Ok(terminal) => terminal,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut out = CrlfWriter::new(io::stdout());

    let open = || -> Result<Box<dyn Transport>> { Ok(Box::new(simulated_reader()?)) };

    match run_console(open, &config, &mut *terminal, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_fatal(&mut out, &mut *terminal, &e);
            ExitCode::FAILURE
        }
    }
}
