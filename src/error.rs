use thiserror::Error;

use crate::{MAX_MESSAGE_LEN, MIN_MESSAGE_LEN, TRAILER_LEN};

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum Crc15Error {
    #[error("message is {len} bytes long; supported lengths are {} to {}", MIN_MESSAGE_LEN, MAX_MESSAGE_LEN)]
    InvalidLength { len: usize },

    #[error("buffer is {actual} bytes long; expected {expected} (message plus {} trailer bytes)", TRAILER_LEN)]
    InvalidBuffer { expected: usize, actual: usize },
}
