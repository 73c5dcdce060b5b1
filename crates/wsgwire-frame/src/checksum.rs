//! Frame checksum.
//!
//! The device firmware uses a CRC-16 built on the CCITT polynomial (0x1021)
//! with an initial value of 0xFFFF and no final XOR. The lookup table is the
//! usual MSB-first 0x1021 table, but the firmware folds each byte in from the
//! low end:
//!
//! ```text
//! crc = TABLE[(crc ^ byte) & 0xFF] ^ (crc >> 8)
//! ```
//!
//! This is not any of the catalogued CRC-16 variants, so a stock CRC crate
//! would produce checksums the device rejects.

/// Initial register value.
pub const CRC_INIT: u16 = 0xFFFF;

const POLY: u16 = 0x1021;

const TABLE: [u16; 256] = build_table();

const fn build_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = (i as u16) << 8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLY
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Incremental checksum over a frame written in several pieces.
#[derive(Debug, Clone, Copy)]
pub struct Crc16 {
    crc: u16,
}

impl Crc16 {
    pub const fn new() -> Self {
        Self { crc: CRC_INIT }
    }

    /// Fold `bytes` into the running checksum.
    pub fn update(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.crc = TABLE[((self.crc ^ b as u16) & 0x00FF) as usize] ^ (self.crc >> 8);
        }
    }

    pub fn finish(self) -> u16 {
        self.crc
    }
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new()
    }
}

/// Checksum of a complete byte run.
pub fn crc16(bytes: &[u8]) -> u16 {
    let mut crc = Crc16::new();
    crc.update(bytes);
    crc.finish()
}
