pub(crate) const BITS_IN_BYTE: usize = 8;

/// Order in which the bits of every byte are fed to the register
///
/// Bytes themselves are always consumed first to last.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitOrder {
    /// MSB first, bit 7 down to bit 0
    Regular,
    /// LSB first, bit 0 up to bit 7
    Reversed,
}

impl BitOrder {
    /// Bit of `byte` visited at position `idx` (0..8) of the traversal
    fn bit_at(self, byte: u8, idx: usize) -> u8 {
        let shift = match self {
            Self::Regular => BITS_IN_BYTE - 1 - idx,
            Self::Reversed => idx,
        };
        (byte >> shift) & 0x01
    }

    /// Lay out a byte so that reading it in this order yields its bits MSB first
    pub fn arrange(self, byte: u8) -> u8 {
        match self {
            Self::Regular => byte,
            Self::Reversed => byte.reverse_bits(),
        }
    }
}

/// Serial bit stream over a byte slice
///
/// All position state lives in the iterator, so every computation owns its own cursor.
pub(crate) struct Bits<'a> {
    bytes: &'a [u8],
    order: BitOrder,
    idx: usize,
}

impl<'a> Bits<'a> {
    pub(crate) fn new(bytes: &'a [u8], order: BitOrder) -> Self {
        Self {
            bytes,
            order,
            idx: 0,
        }
    }
}

impl Iterator for Bits<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = *self.bytes.get(self.idx / BITS_IN_BYTE)?;
        let bit = self.order.bit_at(byte, self.idx % BITS_IN_BYTE);
        self.idx += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() * BITS_IN_BYTE - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_order_is_msb_first() {
        let bits: Vec<u8> = Bits::new(&[0b1000_0011], BitOrder::Regular).collect();
        assert_eq!(bits, [1, 0, 0, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn reversed_order_is_lsb_first() {
        let bits: Vec<u8> = Bits::new(&[0b1000_0011], BitOrder::Reversed).collect();
        assert_eq!(bits, [1, 1, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn bytes_consumed_in_array_order() {
        let bits: Vec<u8> = Bits::new(&[0xFF, 0x00], BitOrder::Reversed).collect();
        assert_eq!(&bits[..8], &[1; 8]);
        assert_eq!(&bits[8..], &[0; 8]);
    }

    #[test]
    fn independent_cursors() {
        let data = [0x41, 0x42];
        let mut first = Bits::new(&data, BitOrder::Regular);
        first.next();
        first.next();
        let second: Vec<u8> = Bits::new(&data, BitOrder::Regular).collect();
        assert_eq!(second.len(), 16);
        assert_eq!(first.len(), 14);
    }

    #[test]
    fn arrange_reverses_for_lsb_first() {
        assert_eq!(BitOrder::Regular.arrange(0b1100_0001), 0b1100_0001);
        assert_eq!(BitOrder::Reversed.arrange(0b1100_0001), 0b1000_0011);
    }
}
