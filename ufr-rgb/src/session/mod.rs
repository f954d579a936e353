// ufr-rgb/src/session/mod.rs

//! The console itself: poll loop, new-card announcements and the two-item
//! RGB light menu.

use std::io::Write;
use std::time::Duration;

use log::{debug, info, warn};

use crate::card::{CardInfo, CardSnapshot, FieldTracker};
use crate::config::Config;
use crate::device::{Device, DeviceBuilder, Initialized};
use crate::terminal::{Key, Terminal};
use crate::transport::Transport;
use crate::types::RgbColor;
use crate::utils::pause;
use crate::{Error, Result};

pub mod banner;
pub mod menu;

pub use menu::MenuAction;

const COLOR_PROMPTS: [&str; 4] = [
    "Enter RED color value (0 - 255)",
    "Enter GREEN color value (0 - 255)",
    "Enter BLUE color value (0 - 255)",
    "Enter INTENSITY in percent (0 - 100)",
];

/// Everything the poll loop mutates: the reader, the change tracker and the
/// console output.
pub struct Session<W: Write> {
    device: Device<Initialized>,
    tracker: FieldTracker,
    poll_interval: Duration,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(device: Device<Initialized>, poll_interval: Duration, out: W) -> Self {
        Self {
            device,
            tracker: FieldTracker::new(),
            poll_interval,
            out,
        }
    }

    pub fn tracker(&self) -> &FieldTracker {
        &self.tracker
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run until Escape. Returns `Err` on a fatal reader or terminal error;
    /// the reader closes when the session is dropped.
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> Result<()> {
        loop {
            while !terminal.pending_input()? {
                self.poll_once()?;
                pause(self.poll_interval);
            }

            let key = terminal.read_key()?;
            self.dispatch(key, terminal)?;
            self.out.flush()?;
            if key == Key::Escape {
                info!("escape pressed, leaving");
                return Ok(());
            }
        }
    }

    /// One poll of the reader. A reader error is fatal (`Error::CardRead`);
    /// a failed card-type query while announcing is only logged.
    pub fn poll_once(&mut self) -> Result<()> {
        let poll = self
            .device
            .poll()
            .map_err(|e| e.map_status(Error::CardRead))?;

        if !self.tracker.observe(poll.as_ref()) {
            return Ok(());
        }
        if let Some(card) = poll {
            info!("new card in field: sak {} uid {}", card.sak(), card.uid().to_hex());
            match self.announce(&card) {
                Ok(()) => {}
                Err(e) if e.status().is_some() => {
                    debug!("card type query failed: {}", e.describe())
                }
                Err(e) => return Err(e),
            }
            self.out.flush()?;
        }
        Ok(())
    }

    /// Classify `card` and print the new-card banner. A classification
    /// failure is returned without printing anything.
    pub fn announce(&mut self, card: &CardSnapshot) -> Result<()> {
        let card_type = self.device.card_type()?;
        banner::card_detected(&mut self.out, &CardInfo::new(card_type, *card))?;
        Ok(())
    }

    /// Act on one menu key. Escape is a no-op here; `run` checks for it
    /// after dispatch returns.
    pub fn dispatch(&mut self, key: Key, terminal: &mut dyn Terminal) -> Result<()> {
        match MenuAction::from_key(key) {
            MenuAction::EnableColor => self.enable_color(terminal),
            MenuAction::DisableColor => self.disable_color(),
            MenuAction::Exit => Ok(()),
            MenuAction::Usage => Ok(banner::usage(&mut self.out)?),
        }
    }

    fn enable_color(&mut self, terminal: &mut dyn Terminal) -> Result<()> {
        banner::enable_color(&mut self.out)?;

        let mut values = [0i64; 4];
        for (value, prompt) in values.iter_mut().zip(COLOR_PROMPTS) {
            writeln!(self.out, "\n{}", prompt)?;
            self.out.flush()?;
            let line = read_answer(terminal)?;
            *value = parse_leading_int(&line).unwrap_or_else(|| {
                warn!("not a number: {:?}, using 0", line);
                0
            });
        }

        let [red, green, blue, intensity] = values;
        let color = RgbColor::from_truncated(red, green, blue, intensity);
        let result = self.device.set_rgb_light(color);
        if let Err(e) = &result {
            warn!("set rgb light failed: {}", e.describe());
        }
        banner::light_result(&mut self.out, "Set RGB color", &result)?;
        Ok(())
    }

    fn disable_color(&mut self) -> Result<()> {
        banner::disable_color(&mut self.out)?;
        let result = self.device.disable_rgb_light();
        if let Err(e) = &result {
            warn!("disable rgb light failed: {}", e.describe());
        }
        banner::light_result(&mut self.out, "Disable RGB color", &result)?;
        Ok(())
    }

    /// Close the reader and hand back the output.
    pub fn finish(self) -> W {
        if let Err(e) = self.device.close() {
            warn!("closing reader failed: {}", e);
        }
        self.out
    }
}

/// Next non-blank input line. Like `scanf("%d")`, a bare Enter does not
/// count as an answer.
fn read_answer(terminal: &mut dyn Terminal) -> Result<String> {
    loop {
        let line = terminal.read_line()?;
        if !line.trim().is_empty() {
            return Ok(line);
        }
    }
}

/// Read an integer the way `scanf("%d")` would: optional leading
/// whitespace and sign, then digits; trailing garbage is ignored. Overflow
/// wraps, which keeps the low byte exact.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.wrapping_mul(10).wrapping_add((b - b'0') as i64);
        seen = true;
    }
    if !seen {
        return None;
    }
    Some(if negative { value.wrapping_neg() } else { value })
}

/// Whole console lifecycle on a terminal that is already in raw mode:
/// banners, open, reset + checks, then the loop until Escape.
///
/// Any error returned is fatal. By the time it returns, the reader has been
/// closed (if it was ever opened).
pub fn run_console<W, F>(
    open: F,
    config: &Config,
    terminal: &mut dyn Terminal,
    out: &mut W,
) -> Result<()>
where
    W: Write,
    F: FnOnce() -> Result<Box<dyn Transport>>,
{
    banner::usage(out)?;
    banner::opening(out)?;
    out.flush()?;

    let transport = open().map_err(|e| e.map_status(Error::Open))?;
    let device = DeviceBuilder::new()
        .with_transport(transport)
        .settle_delay(config.settle_delay)
        .minimum_versions(config.minimum_versions)
        .build_uninitialized()?
        .initialize()?;

    banner::opened(out)?;
    out.flush()?;

    let mut session = Session::new(device, config.poll_interval, &mut *out);
    let result = session.run(terminal);
    session.finish();
    result
}

/// Print a fatal error and wait for the operator to acknowledge it.
pub fn report_fatal<W: Write + ?Sized>(out: &mut W, terminal: &mut dyn Terminal, err: &Error) {
    if banner::fatal(out, err).and_then(|_| out.flush()).is_err() {
        return;
    }
    // Best effort: the terminal may be the thing that failed.
    let _ = terminal.read_key();
}
