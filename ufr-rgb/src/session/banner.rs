//! Fixed console banners.

use std::io::{self, Write};

use crate::card::CardInfo;
use crate::constants::{APP_VERSION, USAGE_WIDTH};
use crate::Error;

const RULE: &str = " --------------------------------------------------";
const WIDE_RULE: &str = " -------------------------------------------------------------------";

pub fn usage<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    let edge = "-".repeat(USAGE_WIDTH);
    writeln!(out, " +{}+", edge)?;
    writeln!(out, " |{:^width$}|", "RGB LIGHT UFR CLASSIC", width = USAGE_WIDTH)?;
    writeln!(
        out,
        " |{:^width$}|",
        format!("version {}", APP_VERSION),
        width = USAGE_WIDTH
    )?;
    writeln!(out, " +{}+", edge)?;
    writeln!(out, "{:>width$}", "For exit, hit escape.", width = USAGE_WIDTH + 3)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  (1) - Enable RGB color")?;
    writeln!(out, "  (2) - Disable RGB color")
}

pub fn opening<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "     Please wait while opening uFR NFC reader.")?;
    writeln!(out, "{}", RULE)
}

pub fn opened<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "        uFR NFC reader successfully opened.")?;
    writeln!(out, "{}", RULE)
}

/// New-card banner, led by a terminal bell.
pub fn card_detected<W: Write + ?Sized>(out: &mut W, info: &CardInfo) -> io::Result<()> {
    writeln!(out, " \x07{}", &WIDE_RULE[1..])?;
    writeln!(out, " {}", info)?;
    writeln!(out, "{}", WIDE_RULE)
}

fn section<W: Write + ?Sized>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", WIDE_RULE)?;
    writeln!(out, "{:^69}", title)?;
    writeln!(out, "{}", WIDE_RULE)
}

pub fn enable_color<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    section(out, "ENABLE COLOR")
}

pub fn disable_color<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    section(out, "DISABLE COLOR")
}

/// Outcome of a light control call; `what` is e.g. "Set RGB color".
pub fn light_result<W: Write + ?Sized>(
    out: &mut W,
    what: &str,
    result: &crate::Result<()>,
) -> io::Result<()> {
    match result {
        Ok(()) => {
            writeln!(out, "\n{} successful", what)?;
            writeln!(out)
        }
        Err(Error::Status(status)) => {
            writeln!(out, "\n{} failed", what)?;
            writeln!(out, "Error code = {:02X}", status.code())
        }
        Err(e) => {
            writeln!(out, "\n{} failed", what)?;
            writeln!(out, "Error: {}", e)
        }
    }
}

/// Fatal error line plus the acknowledgment prompt.
pub fn fatal<W: Write + ?Sized>(out: &mut W, err: &Error) -> io::Result<()> {
    writeln!(out, " {}", err)?;
    writeln!(out, " Press any key to exit.")
}
