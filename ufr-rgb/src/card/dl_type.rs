//! D-Logic card type codes as reported by `GetDlogicCardType`.

/// Card type byte classified by the reader firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DlCardType(u8);

/// (code, name) pairs for the card families the reader firmware knows.
const NAMES: &[(u8, &str)] = &[
    (0x01, "DL_MIFARE_ULTRALIGHT"),
    (0x02, "DL_MIFARE_ULTRALIGHT_EV1_11"),
    (0x03, "DL_MIFARE_ULTRALIGHT_EV1_21"),
    (0x04, "DL_MIFARE_ULTRALIGHT_C"),
    (0x05, "DL_NTAG_203"),
    (0x06, "DL_NTAG_210"),
    (0x07, "DL_NTAG_212"),
    (0x08, "DL_NTAG_213"),
    (0x09, "DL_NTAG_215"),
    (0x0A, "DL_NTAG_216"),
    (0x0B, "DL_MIKRON_MIK640D"),
    (0x0C, "NFC_T2T_GENERIC"),
    (0x0D, "DL_NT3H_1101"),
    (0x0E, "DL_NT3H_1201"),
    (0x0F, "DL_NT3H_2111"),
    (0x10, "DL_NT3H_2211"),
    (0x11, "DL_NTAG_413_DNA"),
    (0x12, "DL_NTAG_424_DNA"),
    (0x13, "DL_NTAG_424_DNA_TT"),
    (0x14, "DL_NTAG_210U"),
    (0x15, "DL_NTAG_213_TT"),
    (0x20, "DL_MIFARE_MINI"),
    (0x21, "DL_MIFARE_CLASSIC_1K"),
    (0x22, "DL_MIFARE_CLASSIC_4K"),
    (0x23, "DL_MIFARE_PLUS_S_2K_SL0"),
    (0x24, "DL_MIFARE_PLUS_S_4K_SL0"),
    (0x25, "DL_MIFARE_PLUS_X_2K_SL0"),
    (0x26, "DL_MIFARE_PLUS_X_4K_SL0"),
    (0x27, "DL_MIFARE_DESFIRE"),
    (0x28, "DL_MIFARE_DESFIRE_EV1_2K"),
    (0x29, "DL_MIFARE_DESFIRE_EV1_4K"),
    (0x2A, "DL_MIFARE_DESFIRE_EV1_8K"),
    (0x2B, "DL_MIFARE_DESFIRE_EV2_2K"),
    (0x2C, "DL_MIFARE_DESFIRE_EV2_4K"),
    (0x2D, "DL_MIFARE_DESFIRE_EV2_8K"),
    (0x2E, "DL_MIFARE_PLUS_S_2K_SL1"),
    (0x2F, "DL_MIFARE_PLUS_X_2K_SL1"),
    (0x30, "DL_MIFARE_PLUS_EV1_2K_SL1"),
    (0x31, "DL_MIFARE_PLUS_X_2K_SL2"),
    (0x32, "DL_MIFARE_PLUS_S_2K_SL3"),
    (0x33, "DL_MIFARE_PLUS_X_2K_SL3"),
    (0x34, "DL_MIFARE_PLUS_EV1_2K_SL3"),
    (0x35, "DL_MIFARE_PLUS_S_4K_SL1"),
    (0x36, "DL_MIFARE_PLUS_X_4K_SL1"),
    (0x37, "DL_MIFARE_PLUS_EV1_4K_SL1"),
    (0x38, "DL_MIFARE_PLUS_X_4K_SL2"),
    (0x39, "DL_MIFARE_PLUS_S_4K_SL3"),
    (0x3A, "DL_MIFARE_PLUS_X_4K_SL3"),
    (0x3B, "DL_MIFARE_PLUS_EV1_4K_SL3"),
    (0x3C, "DL_MIFARE_PLUS_SE_SL0"),
    (0x3D, "DL_MIFARE_PLUS_SE_SL1"),
    (0x3E, "DL_MIFARE_PLUS_SE_SL3"),
    (0x3F, "DL_MIFARE_DESFIRE_LIGHT"),
    (0x40, "DL_GENERIC_ISO14443_4"),
    (0x41, "DL_GENERIC_ISO14443_4_TYPE_B"),
    (0x42, "DL_GENERIC_ISO14443_3_TYPE_B"),
    (0x80, "DL_IMEI_UID"),
];

impl DlCardType {
    pub const NTAG_213: Self = Self(0x08);
    pub const MIFARE_CLASSIC_1K: Self = Self(0x21);

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub fn code(&self) -> u8 {
        self.0
    }

    /// Human readable name, or `None` for codes this table does not list.
    pub fn name(&self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
    }
}

impl std::fmt::Display for DlCardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "UNKNOWN_CARD_TYPE (0x{:02X})", self.0),
        }
    }
}
