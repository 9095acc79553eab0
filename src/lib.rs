#![doc = include_str!("../README.md")]
mod bits;
mod checksum;
mod config;
mod engine;
mod error;
pub mod format;
mod message;
pub mod parser;

pub use bits::BitOrder;
pub use checksum::*;
pub use config::CrcConfig;
pub use engine::{compute_crc15, generate, MAX_MESSAGE_LEN, MIN_MESSAGE_LEN, POLYNOMIAL, TRAILER_LEN};
pub use error::Crc15Error;
pub use message::*;
