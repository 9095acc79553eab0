//! Diagnostic rendering of register values

const GROUP: u32 = 4;

/// Render a 16-bit value as grouped binary, most significant bit first
///
/// `0x48B1` becomes `0100-1000-1011-0001`.
pub fn bin16(num: u16) -> String {
    let mut out = String::with_capacity(19);
    for i in (0..u16::BITS).rev() {
        out.push(if num & (1 << i) != 0 { '1' } else { '0' });
        if i > 0 && i % GROUP == 0 {
            out.push('-');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_of_four() {
        assert_eq!(bin16(0x48B1), "0100-1000-1011-0001");
        assert_eq!(bin16(0), "0000-0000-0000-0000");
        assert_eq!(bin16(u16::MAX), "1111-1111-1111-1111");
    }
}
