use crate::bits::BitOrder;

/// Per-call CRC configuration
///
/// The same configuration must be used to generate and to validate a message.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrcConfig {
    /// Traversal order of the bits inside every byte, trailer included
    pub bit_order: BitOrder,
    /// Feed one synthetic zero bit after the trailer
    ///
    /// Shifts the trailer packing by one bit, see [`embed_checksum`][crate::embed_checksum].
    pub extra_bit: bool,
}

impl CrcConfig {
    /// MSB first, no extra bit. Matches CRC-15/CAN.
    pub const REGULAR: Self = Self::new(BitOrder::Regular, false);
    /// LSB first, no extra bit
    pub const REVERSED: Self = Self::new(BitOrder::Reversed, false);
    /// LSB first with the extra bit
    pub const PRODUCTION: Self = Self::new(BitOrder::Reversed, true);

    pub const fn new(bit_order: BitOrder, extra_bit: bool) -> Self {
        Self {
            bit_order,
            extra_bit,
        }
    }

    pub const fn with_bit_order(mut self, bit_order: BitOrder) -> Self {
        self.bit_order = bit_order;
        self
    }

    pub const fn with_extra_bit(mut self, extra_bit: bool) -> Self {
        self.extra_bit = extra_bit;
        self
    }

    /// Every supported combination, handy for exhaustive checks
    pub const ALL: [Self; 4] = [
        Self::REGULAR,
        Self::new(BitOrder::Regular, true),
        Self::REVERSED,
        Self::PRODUCTION,
    ];
}

impl Default for CrcConfig {
    fn default() -> Self {
        Self::PRODUCTION
    }
}
