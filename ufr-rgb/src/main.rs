// ufr-rgb/src/main.rs

//! Console for a uFR NFC reader: announces cards placed on the reader and
//! toggles its RGB light from a two-item menu.
//!
//! Usage:
//!   cargo run -p ufr-rgb --features ufcoder --release

use std::io;
use std::process::ExitCode;

use log::error;

use ufr_rgb::config::Config;
use ufr_rgb::session::{report_fatal, run_console};
use ufr_rgb::terminal::{CrlfWriter, CrosstermTerminal, RawMode};
use ufr_rgb::transport::{OpenMode, Transport, UfCoderTransport};

fn open_mode(config: &Config) -> OpenMode {
    match &config.port {
        Some(port) => OpenMode::Explicit {
            reader_type: port.reader_type,
            port_name: port.port_name.clone(),
            port_interface: port.port_interface,
        },
        None => OpenMode::Auto,
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut terminal = match RawMode::enter(CrosstermTerminal::new()) {
        Ok(terminal) => terminal,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut out = CrlfWriter::new(io::stdout());

    let mode = open_mode(&config);
    let open = || -> ufr_rgb::Result<Box<dyn Transport>> {
        Ok(Box::new(UfCoderTransport::open(&mode)?))
    };

    match run_console(open, &config, &mut *terminal, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("fatal: {}", e.describe());
            report_fatal(&mut out, &mut *terminal, &e);
            ExitCode::FAILURE
        }
    }
}
