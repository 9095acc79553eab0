use log::debug;

use crate::{
    engine::{check_len, compute_crc15, TRAILER_LEN},
    CrcConfig, Crc15Error,
};

const CRC_MASK: u16 = 0x7FFF;

/// Outcome of re-running the CRC over a message and its trailer
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Integrity {
    /// Zero remainder
    Intact,
    /// Nonzero remainder, kept for diagnostics
    Corrupted(u16),
}

impl Integrity {
    pub fn is_intact(&self) -> bool {
        matches!(self, Self::Intact)
    }

    pub fn remainder(&self) -> u16 {
        match self {
            Self::Intact => 0,
            Self::Corrupted(remainder) => *remainder,
        }
    }
}

fn check_buffer(buffer_len: usize, data_len: usize) -> Result<(), Crc15Error> {
    check_len(data_len)?;
    let expected = data_len + TRAILER_LEN;
    if buffer_len != expected {
        return Err(Crc15Error::InvalidBuffer {
            expected,
            actual: buffer_len,
        });
    }
    Ok(())
}

/// The 16 bits that follow the message in the stream, MSB first
fn packed(crc: u16, extra_bit: bool) -> u16 {
    let crc = crc & CRC_MASK;
    // Without the extra bit the last trailer bit is never divided, so it stays as padding.
    if extra_bit {
        crc
    } else {
        crc << 1
    }
}

/// Writes `crc` into the two trailer bytes following `data_len` bytes of message
///
/// The checksum bits are laid out so that reading the trailer back in `config.bit_order`
/// continues the stream right where the message ends. Running [`compute_crc15`] over the
/// whole buffer with the same `config` then yields zero.
///
/// Only `buffer[data_len..]` is written.
///
/// # Errors
///
/// [`Crc15Error::InvalidLength`] if `data_len` is out of range, [`Crc15Error::InvalidBuffer`]
/// if `buffer` is not exactly `data_len` plus the trailer.
pub fn embed_checksum(
    crc: u16,
    buffer: &mut [u8],
    data_len: usize,
    config: CrcConfig,
) -> Result<(), Crc15Error> {
    check_buffer(buffer.len(), data_len)?;

    let [high, low] = packed(crc, config.extra_bit).to_be_bytes();
    let trailer = [config.bit_order.arrange(high), config.bit_order.arrange(low)];
    buffer[data_len..].copy_from_slice(&trailer);

    debug!(
        "embedded crc15 {crc:#06x} as trailer {:02x}{:02x}",
        trailer[0], trailer[1]
    );
    Ok(())
}

/// Recovers the 15-bit checksum stored in a trailer by [`embed_checksum`]
pub fn extract_checksum(trailer: [u8; 2], config: CrcConfig) -> u16 {
    let [high, low] = trailer.map(|byte| config.bit_order.arrange(byte));
    let packed = u16::from_be_bytes([high, low]);
    if config.extra_bit {
        packed & CRC_MASK
    } else {
        packed >> 1
    }
}

/// Validates a message and its embedded trailer
///
/// Corruption is an ordinary outcome and is reported as [`Integrity::Corrupted`], not as an error.
pub fn check_integrity(
    buffer: &[u8],
    data_len: usize,
    config: CrcConfig,
) -> Result<Integrity, Crc15Error> {
    check_buffer(buffer.len(), data_len)?;

    let integrity = match compute_crc15(buffer, config)? {
        0 => Integrity::Intact,
        remainder => Integrity::Corrupted(remainder),
    };
    debug!("integrity of {data_len} byte message: {integrity:?}");
    Ok(integrity)
}
