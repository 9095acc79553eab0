use std::iter;

use log::{debug, trace};

use crate::{bits::Bits, format::bin16, CrcConfig, Crc15Error};

/// CRC-15 generator polynomial, as used by CAN
///
/// x^15 + x^14 + x^10 + x^8 + x^7 + x^4 + x^3 + 1
pub const POLYNOMIAL: u16 = 0xC599;

/// Shortest message that can be protected
pub const MIN_MESSAGE_LEN: usize = 1;
/// Longest message that can be protected
pub const MAX_MESSAGE_LEN: usize = 14;
/// Bytes reserved after the message for the checksum
pub const TRAILER_LEN: usize = 2;

const REGISTER_BITS: usize = u16::BITS as usize;
const REGISTER_MSB: u16 = 0x8000;

pub(crate) fn check_len(len: usize) -> Result<(), Crc15Error> {
    if (MIN_MESSAGE_LEN..=MAX_MESSAGE_LEN).contains(&len) {
        Ok(())
    } else {
        Err(Crc15Error::InvalidLength { len })
    }
}

/// Bit-serial CRC-15
///
/// `frame` is the message followed by its [`TRAILER_LEN`] trailer bytes. The trailer is
/// zero when generating a checksum and holds the embedded checksum when validating; a
/// result of zero on a filled trailer means no corruption was detected.
///
/// Every bit of `frame` is shifted into a 16-bit register in `config.bit_order`, plus one
/// zero bit after the trailer when `config.extra_bit` is set. Once the register has been
/// filled, the polynomial is subtracted whenever bit 15 is set, before the next bit is
/// shifted in. The final shift is undone, so bit 15 of the result is always zero.
///
/// # Errors
///
/// [`Crc15Error::InvalidLength`] if the message part of `frame` is not between
/// [`MIN_MESSAGE_LEN`] and [`MAX_MESSAGE_LEN`] bytes.
pub fn compute_crc15(frame: &[u8], config: CrcConfig) -> Result<u16, Crc15Error> {
    check_len(frame.len().saturating_sub(TRAILER_LEN))?;

    let padding = iter::repeat(0).take(usize::from(config.extra_bit));
    let stream = Bits::new(frame, config.bit_order).chain(padding);

    let mut register: u16 = 0;
    for (step, bit) in stream.enumerate() {
        if step >= REGISTER_BITS && register & REGISTER_MSB != 0 {
            register ^= POLYNOMIAL;
        }
        register = (register << 1) | u16::from(bit);
        trace!("{step:3}> {register:04x} {}", bin16(register));
    }

    let crc = register >> 1;
    debug!("crc15 over {} bytes ({config:?}): {crc:#06x}", frame.len());
    Ok(crc)
}

/// Computes the checksum of a bare message, supplying the zeroed trailer itself
pub fn generate(data: &[u8], config: CrcConfig) -> Result<u16, Crc15Error> {
    check_len(data.len())?;

    let mut frame = [0u8; MAX_MESSAGE_LEN + TRAILER_LEN];
    frame[..data.len()].copy_from_slice(data);
    compute_crc15(&frame[..data.len() + TRAILER_LEN], config)
}
