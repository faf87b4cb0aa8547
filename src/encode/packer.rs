//! Bit accumulator that folds thresholded pixels into bytes.

use super::params::BitOrder;

/// Folds bits into bytes, most significant first, and mirrors each finished
/// byte under [`BitOrder::Lsb`].
///
/// The packer is the only state that survives from one glyph to the next:
/// with [`Padding::None`](super::Padding::None) a partial byte left at the
/// end of a glyph keeps filling with the next glyph's bits.
#[derive(Debug, Clone)]
pub struct BitPacker {
    order: BitOrder,
    value: u8,
    held: u8,
    emitted: Vec<u8>,
}

impl BitPacker {
    pub fn new(order: BitOrder) -> Self {
        Self {
            order,
            value: 0,
            held: 0,
            emitted: Vec::new(),
        }
    }

    pub fn push(&mut self, bit: bool) {
        self.value = (self.value << 1) | bit as u8;
        self.held += 1;
        if self.held == 8 {
            self.emit(self.value);
        }
    }

    /// Close the partial byte, if any.
    ///
    /// With `force_pad` the held bits are shifted up, zero-filled on the
    /// right and emitted. Without it they are dropped.
    pub fn flush(&mut self, force_pad: bool) {
        if self.held == 0 {
            return;
        }
        if force_pad {
            let padded = self.value << (8 - self.held);
            self.emit(padded);
        } else {
            self.reset();
        }
    }

    /// Bits waiting for a byte boundary.
    pub fn pending_bits(&self) -> u8 {
        self.held
    }

    /// The partial byte as packed so far, right-aligned and in msb order.
    pub fn pending_value(&self) -> u8 {
        self.value
    }

    /// Take every byte emitted since the last call.
    pub fn take_emitted(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.emitted)
    }

    fn emit(&mut self, msb_first: u8) {
        let byte = match self.order {
            BitOrder::Msb => msb_first,
            BitOrder::Lsb => msb_first.reverse_bits(),
        };
        self.emitted.push(byte);
        self.reset();
    }

    fn reset(&mut self) {
        self.value = 0;
        self.held = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(pattern: &str) -> impl Iterator<Item = bool> + '_ {
        pattern.chars().filter(|c| *c != '_').map(|c| c == '1')
    }

    fn pack(order: BitOrder, pattern: &str, force_pad: bool) -> Vec<u8> {
        let mut packer = BitPacker::new(order);
        for bit in bits(pattern) {
            packer.push(bit);
        }
        packer.flush(force_pad);
        packer.take_emitted()
    }

    #[test]
    fn test_full_byte_msb() {
        assert_eq!(pack(BitOrder::Msb, "1100_0010", false), vec![0b1100_0010]);
    }

    #[test]
    fn test_full_byte_lsb_is_mirrored() {
        assert_eq!(pack(BitOrder::Lsb, "1100_0010", false), vec![0b0100_0011]);
    }

    #[test]
    fn test_partial_byte_padded_msb() {
        assert_eq!(pack(BitOrder::Msb, "11010", true), vec![0xD0]);
    }

    #[test]
    fn test_partial_byte_padded_lsb() {
        assert_eq!(pack(BitOrder::Lsb, "11010", true), vec![0x0B]);
    }

    #[test]
    fn test_flush_without_pad_drops_partial_bits() {
        let mut packer = BitPacker::new(BitOrder::Msb);
        for bit in bits("1111_1111_101") {
            packer.push(bit);
        }
        assert_eq!(packer.pending_bits(), 3);
        assert_eq!(packer.pending_value(), 0b101);
        packer.flush(false);
        assert_eq!(packer.pending_bits(), 0);
        assert_eq!(packer.take_emitted(), vec![0xFF]);
    }

    #[test]
    fn test_flush_on_empty_is_noop() {
        let mut packer = BitPacker::new(BitOrder::Lsb);
        packer.flush(true);
        assert!(packer.take_emitted().is_empty());
    }

    #[test]
    fn test_take_emitted_drains() {
        let mut packer = BitPacker::new(BitOrder::Msb);
        for bit in bits("0000_0001_1") {
            packer.push(bit);
        }
        assert_eq!(packer.take_emitted(), vec![0x01]);
        assert!(packer.take_emitted().is_empty());
        packer.flush(true);
        assert_eq!(packer.take_emitted(), vec![0x80]);
    }

    #[test]
    fn test_lsb_equals_reversed_msb() {
        let patterns = ["1010_1100_0111", "0", "1", "1111_0000_1111_0000", "1001_1"];
        for pattern in patterns {
            let msb = pack(BitOrder::Msb, pattern, true);
            let lsb = pack(BitOrder::Lsb, pattern, true);
            let mirrored: Vec<u8> = msb.iter().map(|b| b.reverse_bits()).collect();
            assert_eq!(lsb, mirrored, "pattern {}", pattern);
        }
    }
}
