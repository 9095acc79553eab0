use nom::Finish;

use crate::{
    check_integrity, embed_checksum, generate, parser::protected_message, CrcConfig, Crc15Error,
    Integrity, TRAILER_LEN,
};

/// A message together with its embedded CRC-15
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtectedMessage {
    /// Payload bytes
    #[cfg_attr(feature = "serde", serde(with = "serde_bytes"))]
    pub data: Vec<u8>,
    /// Raw 15-bit checksum
    pub crc: u16,
    /// Checksum as packed after the payload
    pub trailer: [u8; 2],
    /// Configuration the checksum was generated with
    pub config: CrcConfig,
}

impl ProtectedMessage {
    /// Parses `data_len` bytes of payload followed by a trailer, rejecting corrupted input
    pub fn parse(
        input: &[u8],
        data_len: usize,
        config: CrcConfig,
    ) -> Result<Self, nom::error::Error<&[u8]>> {
        match protected_message(data_len, config)(input).finish() {
            Ok((_, message)) => Ok(message),
            Err(e) => Err(e),
        }
    }

    /// Payload followed by the trailer
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() + TRAILER_LEN);
        bytes.extend_from_slice(&self.data);
        bytes.extend_from_slice(&self.trailer);
        bytes
    }

    /// Re-validates the stored payload against the stored trailer
    pub fn verify(&self) -> Result<Integrity, Crc15Error> {
        check_integrity(&self.to_bytes(), self.data.len(), self.config)
    }
}

/// Computes the checksum of `data` and packs it into a fresh trailer
pub fn protect(data: &[u8], config: CrcConfig) -> Result<ProtectedMessage, Crc15Error> {
    let crc = generate(data, config)?;

    let mut frame = data.to_vec();
    frame.resize(data.len() + TRAILER_LEN, 0);
    embed_checksum(crc, &mut frame, data.len(), config)?;
    let trailer = [frame[data.len()], frame[data.len() + 1]];
    frame.truncate(data.len());

    Ok(ProtectedMessage {
        data: frame,
        crc,
        trailer,
        config,
    })
}
