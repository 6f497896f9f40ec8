//! Quadrant glyph table for the doubled-resolution framebuffer.
//!
//! Each terminal character cell covers a 2×2 block of virtual pixels. The
//! block is packed into a 4-bit quantization code and the code indexes a
//! fixed table of Unicode quadrant glyphs.
//!
//! Bit layout of the code (external contract, do not reorder):
//!
//! ```text
//! bit 3 = top-left     bit 2 = top-right
//! bit 1 = bottom-left  bit 0 = bottom-right
//! ```
//!
//! Code `0b0000` is a space, `0b1111` is the full block.

/// Quadrant glyphs indexed by quantization code.
pub const QUAD_GLYPHS: [char; 16] = [
    ' ', // 0b0000
    '▗', // 0b0001
    '▖', // 0b0010
    '▄', // 0b0011
    '▝', // 0b0100
    '▐', // 0b0101
    '▞', // 0b0110
    '▟', // 0b0111
    '▘', // 0b1000
    '▚', // 0b1001
    '▌', // 0b1010
    '▙', // 0b1011
    '▀', // 0b1100
    '▜', // 0b1101
    '▛', // 0b1110
    '█', // 0b1111
];

/// Pack a 2×2 pixel block into its quantization code.
#[inline]
pub fn quantize(tl: bool, tr: bool, bl: bool, br: bool) -> u8 {
    (tl as u8) << 3 | (tr as u8) << 2 | (bl as u8) << 1 | (br as u8)
}

/// Look up the glyph for a quantization code (only the low 4 bits are used).
#[inline]
pub fn glyph_for(code: u8) -> char {
    QUAD_GLYPHS[(code & 0x0F) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_bit_order() {
        assert_eq!(quantize(false, false, false, false), 0b0000);
        assert_eq!(quantize(true, false, false, false), 0b1000);
        assert_eq!(quantize(false, true, false, false), 0b0100);
        assert_eq!(quantize(false, false, true, false), 0b0010);
        assert_eq!(quantize(false, false, false, true), 0b0001);
        assert_eq!(quantize(true, true, true, true), 0b1111);
    }

    #[test]
    fn test_glyph_endpoints() {
        assert_eq!(glyph_for(0b0000), ' ');
        assert_eq!(glyph_for(0b1111), '█');
    }

    #[test]
    fn test_diagonal_glyphs() {
        // Top-left + bottom-right
        assert_eq!(glyph_for(quantize(true, false, false, true)), '▚');
        // Top-right + bottom-left
        assert_eq!(glyph_for(quantize(false, true, true, false)), '▞');
    }

    #[test]
    fn test_half_blocks() {
        assert_eq!(glyph_for(0b1100), '▀');
        assert_eq!(glyph_for(0b0011), '▄');
        assert_eq!(glyph_for(0b1010), '▌');
        assert_eq!(glyph_for(0b0101), '▐');
    }

    #[test]
    fn test_high_bits_masked() {
        assert_eq!(glyph_for(0xF0), ' ');
        assert_eq!(glyph_for(0xFF), '█');
    }
}
