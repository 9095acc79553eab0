use nom::{
    bytes::complete::take,
    combinator::{consumed, map, verify},
    error::{Error, ErrorKind},
    number::complete::be_u8,
    sequence::pair,
    IResult,
};

use crate::{compute_crc15, engine::check_len, extract_checksum, CrcConfig, ProtectedMessage};

/// Parse the two trailer bytes as stored
pub fn trailer(input: &[u8]) -> IResult<&[u8], [u8; 2]> {
    let (input, high) = be_u8(input)?;
    let (input, low) = be_u8(input)?;
    Ok((input, [high, low]))
}

/// Parse a trailer and unpack the checksum it carries
pub fn embedded_crc<'a>(config: CrcConfig) -> impl FnMut(&'a [u8]) -> IResult<&'a [u8], u16> {
    map(trailer, move |trailer| extract_checksum(trailer, config))
}

/// Parse a protected message of `data_len` payload bytes
///
/// Fails with [`ErrorKind::LengthValue`] if `data_len` is out of range and with
/// [`ErrorKind::Verify`] if the remainder over payload and trailer is not zero.
pub fn protected_message<'a>(
    data_len: usize,
    config: CrcConfig,
) -> impl FnMut(&'a [u8]) -> IResult<&'a [u8], ProtectedMessage> {
    move |input| {
        if check_len(data_len).is_err() {
            return Err(nom::Err::Failure(Error::new(input, ErrorKind::LengthValue)));
        }

        let (input, (_, (data, stored))) = verify(
            consumed(pair(take(data_len), trailer)),
            |(frame, _): &(&[u8], (&[u8], [u8; 2]))| compute_crc15(frame, config) == Ok(0),
        )(input)?;

        Ok((
            input,
            ProtectedMessage {
                data: data.to_vec(),
                crc: extract_checksum(stored, config),
                trailer: stored,
                config,
            },
        ))
    }
}
