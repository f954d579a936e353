// fixtures.rs — commonly used cards and configs

use std::time::Duration;

use ufr_rgb::card::CardSnapshot;
use ufr_rgb::config::Config;

pub fn sample_uid_bytes() -> Vec<u8> {
    hex::decode("04A1B2C3").unwrap()
}

/// MIFARE Classic 1K style card: SAK 0x08, 4 byte UID
pub fn sample_card() -> CardSnapshot {
    CardSnapshot::from_raw(0x08, &sample_uid_bytes()).unwrap()
}

/// `sample_card` with the last UID byte changed
pub fn neighbour_card() -> CardSnapshot {
    CardSnapshot::from_raw(0x08, &hex::decode("04A1B2C4").unwrap()).unwrap()
}

/// Ultralight / NTAG style card: SAK 0x00, 7 byte UID
pub fn ntag_card() -> CardSnapshot {
    CardSnapshot::from_raw(0x00, &hex::decode("04112233445566").unwrap()).unwrap()
}

/// Default config without any waiting.
pub fn quick_config() -> Config {
    Config {
        poll_interval: Duration::ZERO,
        settle_delay: Duration::ZERO,
        ..Config::default()
    }
}
